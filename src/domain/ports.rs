use crate::utils::error::Result;
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::path::Path;

pub trait ConfigProvider: Send + Sync {
    fn data_dir(&self) -> &Path;
    fn config(&self) -> &HashMap<String, Value>;
    fn secrets(&self) -> &HashMap<String, String>;
}

/// Lifecycle hooks a serving harness drives: `load` once, then
/// `preprocess -> predict -> postprocess` per request. The pre/post hooks
/// default to identity and exist as extension points.
#[async_trait]
pub trait Model: Send + Sync {
    async fn load(&mut self) -> Result<()>;

    async fn preprocess(&self, request: Value) -> Result<Value> {
        Ok(request)
    }

    async fn predict(&self, request: Value) -> Result<Value>;

    async fn postprocess(&self, response: Value) -> Result<Value> {
        Ok(response)
    }
}
