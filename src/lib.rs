#[cfg(feature = "cli")]
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::{toml_config::TomlConfig, CliConfig, GreeterConfig};

pub use crate::core::greeter::{hello, GREETING};
pub use crate::core::render::{render, render_lines};
pub use crate::domain::model::OutputFormat;
pub use crate::utils::error::{GreeterError, Result};
