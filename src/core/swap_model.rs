use crate::core::pricing::swap_prices;
use crate::core::{ConfigProvider, Model};
use crate::domain::model::InventoryItem;
use crate::utils::error::{Result, ServeError};
use serde_json::Value;
use std::path::PathBuf;

const KEY_OBJ1: &str = "obj1";
const KEY_OBJ2: &str = "obj2";

/// Reference model: swaps the unit prices of the two items in the request.
pub struct SwapModel<C: ConfigProvider> {
    config: C,
    artifact: Option<PathBuf>,
}

impl<C: ConfigProvider> SwapModel<C> {
    pub fn new(config: C) -> Self {
        Self {
            config,
            artifact: None,
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.artifact.is_some()
    }

    fn take_item(request: &Value, key: &str) -> Result<InventoryItem> {
        let value = request
            .get(key)
            .cloned()
            .ok_or_else(|| ServeError::MissingField {
                key: key.to_string(),
            })?;
        let item = serde_json::from_value(value)?;
        Ok(item)
    }
}

#[async_trait::async_trait]
impl<C: ConfigProvider> Model for SwapModel<C> {
    async fn load(&mut self) -> Result<()> {
        // Model artifacts would be read from data_dir here. The swap model
        // has nothing to load, so the artifact reference stays unset.
        tracing::debug!(
            data_dir = %self.config.data_dir().display(),
            config_entries = self.config.config().len(),
            secret_entries = self.config.secrets().len(),
            "load is a no-op for the swap model"
        );
        Ok(())
    }

    async fn predict(&self, request: Value) -> Result<Value> {
        if !request.is_object() {
            return Err(ServeError::BadRequest {
                message: "request body must be a JSON object".to_string(),
            });
        }

        let mut obj1 = Self::take_item(&request, KEY_OBJ1)?;
        let mut obj2 = Self::take_item(&request, KEY_OBJ2)?;

        swap_prices(&mut obj1, &mut obj2);

        let mut response = serde_json::Map::new();
        response.insert(KEY_OBJ1.to_string(), serde_json::to_value(obj1)?);
        response.insert(KEY_OBJ2.to_string(), serde_json::to_value(obj2)?);
        Ok(Value::Object(response))
    }
}
