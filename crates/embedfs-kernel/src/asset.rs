//! Asset records and the asset table.

use std::borrow::Cow;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::decode::DecodeCell;
use crate::error::{DecodeError, Result, TableError, VfsError};
use crate::path;

/// Descriptor for one asset as it appears in generated code.
///
/// All fields are `'static` so a whole table can be a `static` slice.
#[derive(Debug, Clone, Copy)]
pub struct AssetSpec {
    pub path: &'static str,
    pub local: &'static str,
    pub size: u64,
    pub mod_time: i64,
    pub is_dir: bool,
    /// Base64 text of a gzip stream; empty for directories and empty files.
    pub compressed: &'static str,
}

/// One logical file or directory.
#[derive(Debug)]
pub struct AssetRecord {
    path: String,
    is_dir: bool,
    size: u64,
    mod_time: i64,
    local_path: PathBuf,
    payload: Option<Cow<'static, str>>,
    cache: DecodeCell,
}

impl AssetRecord {
    /// A regular file with a base64 gzip payload.
    pub fn file(
        path: impl Into<String>,
        local_path: impl Into<PathBuf>,
        size: u64,
        mod_time: i64,
        payload: impl Into<Cow<'static, str>>,
    ) -> Self {
        let payload = payload.into();
        Self {
            path: path::clean(&path.into()),
            is_dir: false,
            size,
            mod_time,
            local_path: local_path.into(),
            payload: (!payload.is_empty()).then_some(payload),
            cache: DecodeCell::new(),
        }
    }

    /// A directory entry. Directories have no payload and size 0.
    pub fn directory(path: impl Into<String>, local_path: impl Into<PathBuf>) -> Self {
        Self {
            path: path::clean(&path.into()),
            is_dir: true,
            size: 0,
            mod_time: 0,
            local_path: local_path.into(),
            payload: None,
            cache: DecodeCell::new(),
        }
    }

    /// Set the modification time (seconds since the epoch).
    pub fn with_mod_time(mut self, mod_time: i64) -> Self {
        self.mod_time = mod_time;
        self
    }

    fn from_spec(spec: &AssetSpec) -> Self {
        let record = if spec.is_dir {
            Self::directory(spec.path, spec.local)
        } else {
            Self::file(spec.path, spec.local, spec.size, spec.mod_time, spec.compressed)
        };
        record.with_mod_time(spec.mod_time)
    }

    /// Canonical key.
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn is_dir(&self) -> bool {
        self.is_dir
    }

    /// Uncompressed size in bytes.
    pub fn size(&self) -> u64 {
        self.size
    }

    pub fn mod_time(&self) -> i64 {
        self.mod_time
    }

    /// Modification time as a `SystemTime`. Negative values count back from
    /// the epoch.
    pub fn modified(&self) -> SystemTime {
        let offset = Duration::from_secs(self.mod_time.unsigned_abs());
        if self.mod_time >= 0 {
            UNIX_EPOCH + offset
        } else {
            UNIX_EPOCH - offset
        }
    }

    /// Path used by the local backing.
    pub fn local_path(&self) -> &Path {
        &self.local_path
    }

    /// Decoded content, computed on first call and shared afterwards.
    ///
    /// Directories and zero-size files yield an empty buffer without
    /// decoding. A decode failure is stored and returned on every later call.
    pub fn materialize(&self) -> std::result::Result<Arc<[u8]>, Arc<DecodeError>> {
        let size = if self.is_dir { 0 } else { self.size };
        self.cache
            .get_or_decode(&self.path, size, self.payload.as_deref())
    }

    /// Number of times the decoder has run for this record (0 or 1).
    pub fn decode_attempts(&self) -> usize {
        self.cache.attempts()
    }

    /// Whether the record's content has been decoded (or has failed to).
    pub fn is_materialized(&self) -> bool {
        self.cache.is_settled()
    }
}

/// Immutable map from canonical path to [`AssetRecord`].
#[derive(Debug, Default)]
pub struct AssetTable {
    records: HashMap<String, AssetRecord>,
}

impl AssetTable {
    /// Build a table. Keys are the records' canonical paths.
    pub fn new(records: impl IntoIterator<Item = AssetRecord>) -> Result<Self, TableError> {
        let mut map = HashMap::new();
        for record in records {
            let key = record.path.clone();
            if map.insert(key.clone(), record).is_some() {
                return Err(TableError::DuplicatePath(key));
            }
        }
        Ok(Self { records: map })
    }

    /// Build a table from generated descriptors.
    pub fn from_specs(specs: &[AssetSpec]) -> Result<Self, TableError> {
        Self::new(specs.iter().map(AssetRecord::from_spec))
    }

    /// Exact lookup after canonicalizing `path`.
    pub fn lookup(&self, path: &str) -> Result<&AssetRecord> {
        let key = path::clean(path);
        self.records.get(&key).ok_or(VfsError::NotFound { path: key })
    }

    pub fn contains(&self, path: &str) -> bool {
        self.records.contains_key(&path::clean(path))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All keys, sorted.
    pub fn paths(&self) -> Vec<&str> {
        let mut paths: Vec<&str> = self.records.keys().map(String::as_str).collect();
        paths.sort_unstable();
        paths
    }

    /// Records in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &AssetRecord> {
        self.records.values()
    }
}
