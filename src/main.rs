use find_build::config::Config;
use find_build::errors::Result;
use find_build::lookup::{find_build, render_outcome};
use find_build::models::Lookup;
use tracing_subscriber::EnvFilter;

fn run() -> Result<Lookup> {
    let config = Config::from_env()?;
    tracing::debug!(file = %config.file.display(), number = %config.number, "Configuration resolved");

    find_build(&config.file, &config.number)
}

fn main() {
    // Load environment variables from .env file (development only)
    #[cfg(debug_assertions)]
    dotenvy::dotenv().ok();

    // Diagnostics go to stderr; stdout carries only the result line
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "warn,find_build={}",
                if cfg!(debug_assertions) {
                    "debug"
                } else {
                    "info"
                }
            ))
        }))
        .init();

    let outcome = run();
    if let Err(e) = &outcome {
        tracing::warn!(error = ?e, "Build lookup failed");
    }

    println!("{}", render_outcome(&outcome));
}
