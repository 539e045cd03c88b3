use crate::core::Model;
use crate::utils::error::Result;
use serde_json::Value;

/// Drives a model through its lifecycle the way a serving harness would:
/// `load` once, then the three per-request hooks in order.
pub struct ServeEngine<M: Model> {
    model: M,
}

impl<M: Model> ServeEngine<M> {
    pub fn new(model: M) -> Self {
        Self { model }
    }

    pub async fn load(&mut self) -> Result<()> {
        tracing::info!("Loading model...");
        self.model.load().await?;
        tracing::info!("Model loaded");
        Ok(())
    }

    pub async fn handle(&self, request: Value) -> Result<Value> {
        tracing::debug!("Preprocessing request...");
        let request = self.model.preprocess(request).await?;

        tracing::debug!("Running prediction...");
        let response = self.model.predict(request).await?;

        tracing::debug!("Postprocessing response...");
        let response = self.model.postprocess(response).await?;

        tracing::info!("Request handled");
        Ok(response)
    }
}
