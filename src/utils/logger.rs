use tracing_subscriber::EnvFilter;

const DEFAULT_DIRECTIVES: &str = "hello_world=info";
const VERBOSE_DIRECTIVES: &str = "hello_world=debug,info";

fn fallback_directives(verbose: bool) -> &'static str {
    if verbose {
        VERBOSE_DIRECTIVES
    } else {
        DEFAULT_DIRECTIVES
    }
}

/// `RUST_LOG` wins when set. Logs go to stderr so stdout carries only the greeting.
pub fn init_cli_logger(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(fallback_directives(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}
