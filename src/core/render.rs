use crate::core::greeter::hello;
use crate::domain::model::{Greeting, OutputFormat};
use crate::utils::error::Result;

pub fn render(format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(hello().to_string()),
        OutputFormat::Json => Ok(serde_json::to_string(&Greeting { message: hello() })?),
    }
}

/// Yields `repeat` copies of the rendered greeting, one at a time.
pub fn render_lines(format: OutputFormat, repeat: usize) -> Result<impl Iterator<Item = String>> {
    let line = render(format)?;
    tracing::debug!("Rendering greeting as {} x{}", format, repeat);
    Ok(std::iter::repeat(line).take(repeat))
}
