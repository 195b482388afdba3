use clap::Parser;
use hello_world::core::ConfigProvider;
use hello_world::utils::logger;
use hello_world::{render_lines, CliConfig};
use std::io::Write;

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            logger::init_cli_logger(cli.verbose);
            tracing::error!("❌ Configuration validation failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    logger::init_cli_logger(config.verbose());
    tracing::debug!("Resolved config: {:?}", config);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for line in render_lines(config.format(), config.repeat())? {
        writeln!(out, "{}", line)?;
    }

    Ok(())
}
