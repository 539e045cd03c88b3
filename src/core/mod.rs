pub mod engine;
pub mod pricing;
pub mod swap_model;

pub use crate::domain::model::InventoryItem;
pub use crate::domain::ports::{ConfigProvider, Model};
pub use crate::utils::error::Result;
