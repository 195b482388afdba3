//! Settings for the `hello-world` binary. The greeting itself takes no configuration.

pub mod toml_config;

use crate::core::{ConfigProvider, OutputFormat};
use crate::utils::error::Result;
use crate::utils::validation::{validate_range, Validate};
use clap::Parser;
use std::path::PathBuf;
use toml_config::TomlConfig;

/// Upper bound on `repeat`, from either source.
pub const MAX_REPEAT: usize = 10_000;

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "hello-world")]
#[command(about = "Prints a friendly greeting")]
pub struct CliConfig {
    /// Output format: text or json
    #[arg(long)]
    pub format: Option<OutputFormat>,

    /// How many times to print the greeting
    #[arg(long)]
    pub repeat: Option<usize>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Loads the TOML file (if any) and lays the command-line flags over it.
    pub fn resolve(&self) -> Result<GreeterConfig> {
        let base = match &self.config {
            Some(path) => {
                let file = TomlConfig::from_file(path)?;
                file.validate()?;
                GreeterConfig::from(&file)
            }
            None => GreeterConfig::default(),
        };

        let config = GreeterConfig {
            format: self.format.unwrap_or(base.format),
            repeat: self.repeat.unwrap_or(base.repeat),
            verbose: self.verbose || base.verbose,
        };
        config.validate()?;
        Ok(config)
    }
}

/// Effective settings after merging every config source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GreeterConfig {
    pub format: OutputFormat,
    pub repeat: usize,
    pub verbose: bool,
}

impl Default for GreeterConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            repeat: 1,
            verbose: false,
        }
    }
}

impl From<&TomlConfig> for GreeterConfig {
    fn from(config: &TomlConfig) -> Self {
        Self {
            format: config.format(),
            repeat: config.repeat(),
            verbose: config.verbose(),
        }
    }
}

impl ConfigProvider for GreeterConfig {
    fn format(&self) -> OutputFormat {
        self.format
    }

    fn repeat(&self) -> usize {
        self.repeat
    }

    fn verbose(&self) -> bool {
        self.verbose
    }
}

impl Validate for GreeterConfig {
    fn validate(&self) -> Result<()> {
        validate_range("repeat", self.repeat, 1, MAX_REPEAT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::GreeterError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn toml_file(content: &str) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(content.as_bytes()).unwrap();
        temp_file
    }

    #[test]
    fn test_resolve_defaults() {
        let config = CliConfig::default().resolve().unwrap();
        assert_eq!(config, GreeterConfig::default());
    }

    #[test]
    fn test_cli_flags_override_toml() {
        let file = toml_file("[output]\nformat = \"json\"\nrepeat = 4\n");

        let cli = CliConfig {
            format: Some(OutputFormat::Text),
            config: Some(file.path().to_path_buf()),
            ..Default::default()
        };

        let config = cli.resolve().unwrap();
        assert_eq!(config.format, OutputFormat::Text);
        assert_eq!(config.repeat, 4);
    }

    #[test]
    fn test_verbose_from_either_source() {
        let quiet_file = toml_file("[logging]\nverbose = false\n");
        let loud_file = toml_file("[logging]\nverbose = true\n");

        let cli_only = CliConfig {
            verbose: true,
            config: Some(quiet_file.path().to_path_buf()),
            ..Default::default()
        };
        assert!(cli_only.resolve().unwrap().verbose);

        let toml_only = CliConfig {
            config: Some(loud_file.path().to_path_buf()),
            ..Default::default()
        };
        assert!(toml_only.resolve().unwrap().verbose);

        let neither = CliConfig {
            config: Some(quiet_file.path().to_path_buf()),
            ..Default::default()
        };
        assert!(!neither.resolve().unwrap().verbose);
    }

    #[test]
    fn test_resolve_rejects_repeat_out_of_range() {
        for repeat in [0, MAX_REPEAT + 1, usize::MAX] {
            let cli = CliConfig {
                repeat: Some(repeat),
                ..Default::default()
            };
            let err = cli.resolve().unwrap_err();
            assert!(matches!(err, GreeterError::InvalidConfigValueError { .. }));
        }
    }

    #[test]
    fn test_resolve_rejects_bad_toml_format() {
        let file = toml_file("[output]\nformat = \"xml\"\n");
        let cli = CliConfig {
            config: Some(file.path().to_path_buf()),
            ..Default::default()
        };
        assert!(matches!(
            cli.resolve().unwrap_err(),
            GreeterError::ConfigError { .. }
        ));
    }

    #[test]
    fn test_parse_from_args() {
        let cli = CliConfig::parse_from(["hello-world", "--format", "JSON", "--repeat", "2", "-v"]);
        let config = cli.resolve().unwrap();

        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.repeat, 2);
        assert!(config.verbose);
    }

    #[test]
    fn test_parse_rejects_unknown_format() {
        assert!(CliConfig::try_parse_from(["hello-world", "--format", "xml"]).is_err());
    }
}
