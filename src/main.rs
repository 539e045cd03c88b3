use anyhow::Context;
use clap::Parser;
use small_serve::utils::{logger, validation::Validate};
use small_serve::{CliConfig, ModelConfig, ServeEngine, SwapModel};
use std::io::Read;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting small-serve");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let config = ModelConfig::from_file(&cli.config)
        .with_context(|| format!("failed to load model config from {}", cli.config))?;

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        std::process::exit(1);
    }

    tracing::info!(
        model = %config.model.name,
        version = %config.model.version,
        "Model configuration loaded"
    );

    let request_text = if cli.request == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read request from stdin")?;
        buf
    } else {
        std::fs::read_to_string(&cli.request)
            .with_context(|| format!("failed to read request from {}", cli.request))?
    };
    let request: serde_json::Value =
        serde_json::from_str(&request_text).context("request is not valid JSON")?;

    let model = SwapModel::new(config);
    let mut engine = ServeEngine::new(model);

    engine.load().await?;

    match engine.handle(request).await {
        Ok(response) => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        Err(e) => {
            tracing::error!("Request failed: {}", e);
            eprintln!("Request failed: {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
