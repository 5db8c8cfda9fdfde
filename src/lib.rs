pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::TomlConfig;

pub use adapters::LocalStorage;
pub use app::Shell;
pub use crate::core::{catalog::PartCatalog, session::Session};
pub use utils::error::{Result, WearError};
