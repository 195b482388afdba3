pub mod greeter;
pub mod render;

pub use crate::domain::model::{Greeting, OutputFormat};
pub use crate::domain::ports::ConfigProvider;
pub use crate::utils::error::Result;
