use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "small-serve")]
#[command(about = "Serve a model over a one-shot JSON request")]
pub struct CliConfig {
    /// Path to the TOML model configuration
    #[arg(long, default_value = "./model.toml")]
    pub config: String,

    /// Path to the JSON request, or "-" for stdin
    #[arg(long, default_value = "-")]
    pub request: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}
