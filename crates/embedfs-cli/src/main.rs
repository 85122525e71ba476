//! embedfs entry point.
//!
//! ```bash
//! embedfs cat /helpers.js
//! EMBEDFS_USE_LOCAL=1 embedfs --local-root crates/embedfs-kernel stat /helpers.js
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use embedfs_cli::Cli;

fn main() -> Result<()> {
    // Initialize tracing (respects RUST_LOG env var)
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env().add_directive("embedfs=info".parse()?))
        .init();

    let cli = Cli::parse();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    embedfs_cli::run(&cli, &mut out)
}
