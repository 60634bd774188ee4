pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::cli::{AssetDir, PageFile};
pub use config::toml_config::TomlConfig;

pub use crate::core::{assembler::InlineAssembler, engine::EmbedEngine};
pub use utils::error::{EmbedError, Result};
