use std::io;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use role_hash_reporter::{report, BcryptHasher, HashReporter};

fn main() -> Result<()> {
    // Logs go to stderr; stdout only carries report lines
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let reporter = HashReporter::new(BcryptHasher::default());
    let stdout = io::stdout();
    report(&reporter, &mut stdout.lock())?;
    Ok(())
}
