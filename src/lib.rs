pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use config::{ModelConfig, StaticConfig};
pub use core::engine::ServeEngine;
pub use core::pricing::swap_prices;
pub use core::swap_model::SwapModel;
pub use core::{ConfigProvider, InventoryItem, Model};
pub use utils::error::{Result, ServeError};
