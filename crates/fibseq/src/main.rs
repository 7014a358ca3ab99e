//! fibseq — draw the Fibonacci sequence from one generator shared by many threads.

use fibseq_lib::{app, config, errors};
use tracing_subscriber::EnvFilter;

fn main() {
    let config = config::AppConfig::parse();

    // RUST_LOG applies as given; -v adds debug on top of it.
    let filter = if config.verbose {
        EnvFilter::from_default_env().add_directive(tracing::Level::DEBUG.into())
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    let code = match app::run(&config) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            errors::handle_error(&err)
        }
    };
    std::process::exit(code);
}
