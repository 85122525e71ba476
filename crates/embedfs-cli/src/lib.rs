//! embedfs command-line tool.
//!
//! Reads assets from the bundled table through either backing, the same way
//! a server embedding the library would.

pub mod config;

use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::UNIX_EPOCH;

use anyhow::{Context, Result, bail};
use clap::builder::BoolishValueParser;
use clap::{Parser, Subcommand};

use embedfs_kernel::{AssetFs, Filesystem, Metadata, generated};

use crate::config::{Config, Overrides};

#[derive(Debug, Parser)]
#[command(name = "embedfs", version, about = "Read assets compiled into embedfs")]
pub struct Cli {
    /// TOML configuration file.
    #[arg(long, global = true, env = "EMBEDFS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Serve from the local source tree instead of embedded payloads.
    #[arg(
        long,
        global = true,
        env = "EMBEDFS_USE_LOCAL",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        value_parser = BoolishValueParser::new()
    )]
    pub local: Option<bool>,

    /// Directory the table's local paths are relative to.
    #[arg(long, global = true, env = "EMBEDFS_LOCAL_ROOT")]
    pub local_root: Option<PathBuf>,

    /// Prepend this prefix to every request path.
    #[arg(long, global = true, env = "EMBEDFS_PREFIX")]
    pub prefix: Option<String>,

    /// Serve the table under this mount point.
    #[arg(long, global = true, env = "EMBEDFS_MOUNT")]
    pub mount: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Write asset contents to stdout.
    Cat { paths: Vec<String> },
    /// Show asset metadata.
    Stat { path: String },
    /// List every path in the table.
    Ls,
    /// Decode every embedded asset and report failures.
    Check,
}

impl Cli {
    fn overrides(&self) -> Overrides {
        Overrides {
            use_local: self.local,
            local_root: self.local_root.clone(),
            prefix: self.prefix.clone(),
            mount: self.mount.clone(),
        }
    }

    /// Resolve configuration from file, environment, and flags.
    pub fn resolve_config(&self) -> Result<Config> {
        let mut config = Config::load(self.config.as_deref())?;
        config.apply(self.overrides());
        config.validate()?;
        Ok(config)
    }
}

/// The filesystem view a configuration selects.
pub fn open_view(assets: &AssetFs, config: &Config) -> Arc<dyn Filesystem> {
    match (&config.prefix, &config.mount) {
        (Some(prefix), _) => assets.dir(config.use_local, prefix),
        (None, Some(mount)) => assets.mount(config.use_local, mount),
        (None, None) => assets.filesystem(config.use_local),
    }
}

/// Run a parsed command, writing its output to `out`.
pub fn run(cli: &Cli, out: &mut dyn Write) -> Result<()> {
    let config = cli.resolve_config()?;
    let table = generated::js_table().context("bundled asset table is invalid")?;
    let assets = AssetFs::with_local_root(Arc::new(table), config.local_root());
    tracing::debug!(
        use_local = config.use_local,
        local_root = %assets.local_root().display(),
        prefix = ?config.prefix,
        mount = ?config.mount,
        "resolved configuration"
    );
    let fs = open_view(&assets, &config);

    match &cli.command {
        Command::Cat { paths } => {
            for path in paths {
                let mut handle = fs.open(path).with_context(|| format!("cat {path}"))?;
                io::copy(&mut handle, &mut *out).with_context(|| format!("cat {path}"))?;
                handle.close()?;
            }
        }
        Command::Stat { path } => {
            let meta = fs.stat(path).with_context(|| format!("stat {path}"))?;
            write_stat(out, &meta)?;
        }
        Command::Ls => {
            for path in assets.table().paths() {
                writeln!(out, "{path}")?;
            }
        }
        Command::Check => check(&assets, out)?,
    }
    Ok(())
}

fn write_stat(out: &mut dyn Write, meta: &Metadata) -> io::Result<()> {
    let modified = meta
        .modified
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    writeln!(out, "name:     {}", meta.name)?;
    writeln!(out, "kind:     {}", if meta.is_dir() { "directory" } else { "file" })?;
    writeln!(out, "size:     {}", meta.size)?;
    writeln!(out, "mode:     {:o}", meta.mode)?;
    writeln!(out, "modified: {modified}")
}

fn check(assets: &AssetFs, out: &mut dyn Write) -> Result<()> {
    let table = assets.table();
    let mut failures = 0usize;
    for path in table.paths() {
        let record = table.lookup(path)?;
        if record.is_dir() {
            continue;
        }
        match record.materialize() {
            Ok(bytes) => writeln!(out, "ok   {path} ({} bytes)", bytes.len())?,
            Err(e) => {
                failures += 1;
                tracing::warn!(path, error = %e, "asset failed to decode");
                writeln!(out, "FAIL {path}: {e}")?;
            }
        }
    }
    if failures > 0 {
        bail!("{failures} asset(s) failed to decode");
    }
    Ok(())
}
