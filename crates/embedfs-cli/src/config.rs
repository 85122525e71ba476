//! CLI configuration.
//!
//! Layered lowest to highest: defaults, TOML file, environment, flags. Clap
//! reads the environment variables, so env and flags arrive together as
//! [`Overrides`].

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::Deserialize;

/// Resolved settings that select and shape the filesystem view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Read from the local source tree instead of embedded payloads.
    pub use_local: bool,
    /// Directory that the table's local paths are relative to.
    pub local_root: Option<PathBuf>,
    /// Sub-directory view: prepended to every request path.
    pub prefix: Option<String>,
    /// Mount point: stripped from every request path.
    pub mount: Option<String>,
}

/// Values from the environment or the command line.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub use_local: Option<bool>,
    pub local_root: Option<PathBuf>,
    pub prefix: Option<String>,
    pub mount: Option<String>,
}

impl Config {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).context("invalid configuration")
    }

    /// Load `path` if given, otherwise start from defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_toml_str(&text).with_context(|| format!("in {}", path.display()))
    }

    pub fn apply(&mut self, overrides: Overrides) {
        if let Some(use_local) = overrides.use_local {
            self.use_local = use_local;
        }
        if overrides.local_root.is_some() {
            self.local_root = overrides.local_root;
        }
        if overrides.prefix.is_some() {
            self.prefix = overrides.prefix;
        }
        if overrides.mount.is_some() {
            self.mount = overrides.mount;
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.prefix.is_some() && self.mount.is_some() {
            bail!("prefix and mount are mutually exclusive");
        }
        Ok(())
    }

    pub fn local_root(&self) -> &Path {
        self.local_root.as_deref().unwrap_or(Path::new("."))
    }
}
