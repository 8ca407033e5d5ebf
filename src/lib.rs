pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
pub use crate::config::InventoryConfig;

pub use crate::core::{Iter, LinkedSet};
pub use crate::domain::model::Coffee;
pub use crate::utils::error::{CoffeeError, Result};
