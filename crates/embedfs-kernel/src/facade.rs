//! Entry point for callers: pick a backing, optionally re-rooted.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::asset::AssetTable;
use crate::error::{Result, VfsError};
use crate::vfs::{EmbeddedFs, Filesystem, LocalFs, MountFs, SubDirFs};

/// Factory for filesystem views over one asset table.
///
/// The table is injected rather than read from a global, so tests can supply
/// a small fixture table. Cloning is cheap.
#[derive(Debug, Clone)]
pub struct AssetFs {
    embedded: Arc<EmbeddedFs>,
    local: Arc<LocalFs>,
}

impl AssetFs {
    /// Local paths resolve against the current directory.
    pub fn new(table: Arc<AssetTable>) -> Self {
        Self::with_local_root(table, ".")
    }

    pub fn with_local_root(table: Arc<AssetTable>, root: impl Into<PathBuf>) -> Self {
        Self {
            embedded: Arc::new(EmbeddedFs::new(Arc::clone(&table))),
            local: Arc::new(LocalFs::with_root(table, root)),
        }
    }

    pub fn table(&self) -> &Arc<AssetTable> {
        self.embedded.table()
    }

    pub fn local_root(&self) -> &Path {
        self.local.root()
    }

    /// The embedded backing, or the local one if `use_local` is set.
    pub fn filesystem(&self, use_local: bool) -> Arc<dyn Filesystem> {
        if use_local {
            return self.local.clone();
        }
        self.embedded.clone()
    }

    /// A view where every request path is prefixed with `prefix`.
    ///
    /// Requests are cleaned after joining, so `..` can reach entries outside
    /// `prefix`. See [`SubDirFs`].
    pub fn dir(&self, use_local: bool, prefix: &str) -> Arc<dyn Filesystem> {
        Arc::new(SubDirFs::new(self.filesystem(use_local), prefix))
    }

    /// A view serving the table under `mount_point`.
    pub fn mount(&self, use_local: bool, mount_point: &str) -> Arc<dyn Filesystem> {
        Arc::new(MountFs::new(self.filesystem(use_local), mount_point))
    }

    /// Whole content of `path`.
    ///
    /// The embedded backing hands out the shared decoded buffer; the local
    /// backing reads the file fresh.
    pub fn read_bytes(&self, use_local: bool, path: &str) -> Result<Arc<[u8]>> {
        self.filesystem(use_local).read(path)
    }

    /// Same as [`read_bytes`](Self::read_bytes), as UTF-8 text.
    pub fn read_string(&self, use_local: bool, path: &str) -> Result<String> {
        let bytes = self.read_bytes(use_local, path)?;
        String::from_utf8(bytes.to_vec()).map_err(|_| VfsError::InvalidUtf8 {
            path: crate::path::clean(path),
        })
    }

    /// Like [`read_bytes`](Self::read_bytes), but aborts the process on any
    /// error. For assets whose absence is a build defect.
    pub fn must_read_bytes(&self, use_local: bool, path: &str) -> Arc<[u8]> {
        match self.read_bytes(use_local, path) {
            Ok(bytes) => bytes,
            Err(e) => abort_on(&e),
        }
    }

    /// Like [`read_string`](Self::read_string), but aborts the process on any
    /// error.
    pub fn must_read_string(&self, use_local: bool, path: &str) -> String {
        match self.read_string(use_local, path) {
            Ok(text) => text,
            Err(e) => abort_on(&e),
        }
    }
}

fn abort_on(err: &VfsError) -> ! {
    tracing::error!(path = %err.path(), error = %err, "required asset unavailable");
    eprintln!("embedfs: required asset unavailable: {err}");
    std::process::abort()
}
