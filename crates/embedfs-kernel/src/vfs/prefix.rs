//! Path-rewriting wrappers around a backing.

use std::path::PathBuf;
use std::sync::Arc;

use super::traits::{Filesystem, Handle, Metadata};
use crate::error::{Result, VfsError};
use crate::path;

/// Sub-directory view: every request is prefixed before resolution.
///
/// `SubDirFs::new(inner, "/js").open("/helpers.js")` opens `/js/helpers.js`
/// on `inner`.
///
/// The prefix is joined first and the result cleaned afterwards, so `..` in a
/// request can climb out of the prefix: `/../top.txt` under `/js` opens
/// `/top.txt`. This is not a sandbox; use [`MountFs`] to confine requests.
#[derive(Debug, Clone)]
pub struct SubDirFs {
    inner: Arc<dyn Filesystem>,
    prefix: String,
}

impl SubDirFs {
    pub fn new(inner: Arc<dyn Filesystem>, prefix: impl AsRef<str>) -> Self {
        Self {
            inner,
            prefix: path::clean(prefix.as_ref()),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    fn rewrite(&self, request: &str) -> String {
        path::join(&self.prefix, request)
    }
}

impl Filesystem for SubDirFs {
    fn open(&self, request: &str) -> Result<Handle> {
        self.inner.open(&self.rewrite(request))
    }

    fn read(&self, request: &str) -> Result<Arc<[u8]>> {
        self.inner.read(&self.rewrite(request))
    }

    fn stat(&self, request: &str) -> Result<Metadata> {
        self.inner.stat(&self.rewrite(request))
    }

    fn real_path(&self, request: &str) -> Option<PathBuf> {
        self.inner.real_path(&self.rewrite(request))
    }
}

/// Mounted view: serves the inner filesystem under a virtual root.
///
/// `MountFs::new(inner, "/assets").open("/assets/helpers.js")` opens
/// `/helpers.js` on `inner`. Requests outside the mount point are not found.
#[derive(Debug, Clone)]
pub struct MountFs {
    inner: Arc<dyn Filesystem>,
    mount_point: String,
}

impl MountFs {
    pub fn new(inner: Arc<dyn Filesystem>, mount_point: impl AsRef<str>) -> Self {
        Self {
            inner,
            mount_point: path::clean(mount_point.as_ref()),
        }
    }

    pub fn mount_point(&self) -> &str {
        &self.mount_point
    }

    fn rewrite(&self, request: &str) -> Result<String> {
        path::strip_mount(&self.mount_point, request)
            .ok_or_else(|| VfsError::not_found(path::clean(request)))
    }
}

impl Filesystem for MountFs {
    fn open(&self, request: &str) -> Result<Handle> {
        self.inner.open(&self.rewrite(request)?)
    }

    fn read(&self, request: &str) -> Result<Arc<[u8]>> {
        self.inner.read(&self.rewrite(request)?)
    }

    fn stat(&self, request: &str) -> Result<Metadata> {
        self.inner.stat(&self.rewrite(request)?)
    }

    fn real_path(&self, request: &str) -> Option<PathBuf> {
        self.inner.real_path(&self.rewrite(request).ok()?)
    }
}
