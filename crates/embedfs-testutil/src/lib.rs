//! Test utilities for embedfs.
//!
//! - [`pack`] produces payloads in the same shape the generator emits:
//!   gzip, then base64, wrapped at 80 columns
//! - [`FixtureTable`] builds small asset tables, optionally mirrored to a
//!   temporary directory so the local backing has something to open

use std::io::{self, Write};
use std::path::Path;
use std::sync::Arc;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use flate2::Compression;
use flate2::write::GzEncoder;
use tempfile::TempDir;

use embedfs_kernel::{AssetFs, AssetRecord, AssetTable, TableError};

/// Width of generated payload lines.
pub const LINE_WIDTH: usize = 80;

/// Gzip and base64-encode `data`, wrapped like generated literals.
pub fn pack(data: &[u8]) -> io::Result<String> {
    let mut enc = GzEncoder::new(Vec::new(), Compression::best());
    enc.write_all(data)?;
    let encoded = STANDARD.encode(enc.finish()?);

    let mut wrapped = String::with_capacity(encoded.len() + encoded.len() / LINE_WIDTH + 2);
    wrapped.push('\n');
    // Base64 output is ASCII, so byte chunks are char boundaries.
    for line in encoded.as_bytes().chunks(LINE_WIDTH) {
        wrapped.push_str(&String::from_utf8_lossy(line));
        wrapped.push('\n');
    }
    Ok(wrapped)
}

#[derive(Debug, Clone)]
enum Fixture {
    File { path: String, contents: Vec<u8> },
    Raw { path: String, size: u64, payload: String },
    Dir { path: String },
}

/// Builder for fixture asset tables.
///
/// Local paths mirror the virtual path under `root/`, so `/a/b.txt` maps to
/// `root/a/b.txt`.
#[derive(Debug, Clone, Default)]
pub struct FixtureTable {
    entries: Vec<Fixture>,
    mod_time: i64,
}

impl FixtureTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Modification time stamped on every record.
    pub fn mod_time(mut self, mod_time: i64) -> Self {
        self.mod_time = mod_time;
        self
    }

    /// A regular file with the given contents.
    pub fn file(mut self, path: &str, contents: impl AsRef<[u8]>) -> Self {
        self.entries.push(Fixture::File {
            path: path.to_string(),
            contents: contents.as_ref().to_vec(),
        });
        self
    }

    /// A directory entry.
    pub fn dir(mut self, path: &str) -> Self {
        self.entries.push(Fixture::Dir {
            path: path.to_string(),
        });
        self
    }

    /// A file whose payload is used verbatim, e.g. to simulate corruption.
    pub fn raw(mut self, path: &str, size: u64, payload: &str) -> Self {
        self.entries.push(Fixture::Raw {
            path: path.to_string(),
            size,
            payload: payload.to_string(),
        });
        self
    }

    fn local_path(path: &str) -> String {
        let trimmed = path.trim_start_matches('/');
        if trimmed.is_empty() {
            "root".to_string()
        } else {
            format!("root/{trimmed}")
        }
    }

    /// Build the asset table.
    pub fn build(&self) -> io::Result<Arc<AssetTable>> {
        let mut records = Vec::with_capacity(self.entries.len());
        for entry in &self.entries {
            let record = match entry {
                Fixture::File { path, contents } => AssetRecord::file(
                    path.as_str(),
                    Self::local_path(path),
                    contents.len() as u64,
                    self.mod_time,
                    if contents.is_empty() {
                        String::new()
                    } else {
                        pack(contents)?
                    },
                ),
                Fixture::Raw {
                    path,
                    size,
                    payload,
                } => AssetRecord::file(
                    path.as_str(),
                    Self::local_path(path),
                    *size,
                    self.mod_time,
                    payload.clone(),
                ),
                Fixture::Dir { path } => {
                    AssetRecord::directory(path.as_str(), Self::local_path(path))
                        .with_mod_time(self.mod_time)
                }
            };
            records.push(record);
        }
        AssetTable::new(records)
            .map(Arc::new)
            .map_err(|e: TableError| io::Error::new(io::ErrorKind::InvalidInput, e))
    }

    /// Write every file and directory under `root/` in `dir`.
    ///
    /// Raw entries are skipped: they have no known plain contents.
    pub fn write_local(&self, dir: &Path) -> io::Result<()> {
        std::fs::create_dir_all(dir.join("root"))?;
        for entry in &self.entries {
            match entry {
                Fixture::File { path, contents } => {
                    let target = dir.join(Self::local_path(path));
                    if let Some(parent) = target.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(target, contents)?;
                }
                Fixture::Dir { path } => {
                    std::fs::create_dir_all(dir.join(Self::local_path(path)))?;
                }
                Fixture::Raw { .. } => {}
            }
        }
        Ok(())
    }

    /// Build the table, mirror it to a fresh temp dir, and return a facade
    /// whose local backing reads from that dir.
    pub fn build_fs(&self) -> io::Result<(AssetFs, TempDir)> {
        let dir = tempfile::tempdir()?;
        self.write_local(dir.path())?;
        let assets = AssetFs::with_local_root(self.build()?, dir.path());
        Ok((assets, dir))
    }
}
