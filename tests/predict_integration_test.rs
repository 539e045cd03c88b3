use serde_json::json;
use small_serve::{Model, ModelConfig, ServeEngine, StaticConfig, SwapModel};

#[tokio::test]
async fn test_end_to_end_swap_through_engine() {
    let config = StaticConfig::new("./data")
        .with_config_entry("mode", json!("demo"))
        .with_secret("api_key", "test-key");

    let model = SwapModel::new(config);
    let mut engine = ServeEngine::new(model);
    engine.load().await.unwrap();

    let request = json!({
        "obj1": {"id": "sku-1", "unit_price": 10.0},
        "obj2": {"id": "sku-2", "unit_price": 20.0},
    });

    let response = engine.handle(request).await.unwrap();

    assert_eq!(
        response,
        json!({
            "obj1": {"id": "sku-1", "unit_price": 20.0},
            "obj2": {"id": "sku-2", "unit_price": 10.0},
        })
    );
}

#[tokio::test]
async fn test_engine_with_toml_config() {
    let toml_content = r#"
[model]
name = "swap-model"
version = "1.0.0"
data_dir = "./data"

[config]
mode = "demo"
"#;

    let config = ModelConfig::from_toml_str(toml_content).unwrap();
    let model = SwapModel::new(config);
    let mut engine = ServeEngine::new(model);
    engine.load().await.unwrap();

    let request = json!({
        "obj1": {"id": "a", "unit_price": 1.0},
        "obj2": {"id": "b", "unit_price": 2.5},
    });

    let response = engine.handle(request).await.unwrap();

    assert_eq!(response["obj1"]["unit_price"], json!(2.5));
    assert_eq!(response["obj2"]["unit_price"], json!(1.0));
}

#[tokio::test]
async fn test_engine_propagates_predict_errors() {
    let model = SwapModel::new(StaticConfig::new("./data"));
    let mut engine = ServeEngine::new(model);
    engine.load().await.unwrap();

    // No obj2 key.
    let request = json!({"obj1": {"id": "a", "unit_price": 1.0}});

    let result = engine.handle(request).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_custom_hooks_run_in_order() {
    // A model whose hooks tag the payload, to check the engine's ordering.
    struct TaggingModel;

    #[async_trait::async_trait]
    impl Model for TaggingModel {
        async fn load(&mut self) -> small_serve::Result<()> {
            Ok(())
        }

        async fn preprocess(
            &self,
            mut request: serde_json::Value,
        ) -> small_serve::Result<serde_json::Value> {
            request["stages"] = json!(["preprocess"]);
            Ok(request)
        }

        async fn predict(
            &self,
            mut request: serde_json::Value,
        ) -> small_serve::Result<serde_json::Value> {
            request["stages"]
                .as_array_mut()
                .unwrap()
                .push(json!("predict"));
            Ok(request)
        }

        async fn postprocess(
            &self,
            mut response: serde_json::Value,
        ) -> small_serve::Result<serde_json::Value> {
            response["stages"]
                .as_array_mut()
                .unwrap()
                .push(json!("postprocess"));
            Ok(response)
        }
    }

    let mut engine = ServeEngine::new(TaggingModel);
    engine.load().await.unwrap();

    let response = engine.handle(json!({})).await.unwrap();
    assert_eq!(
        response["stages"],
        json!(["preprocess", "predict", "postprocess"])
    );
}
