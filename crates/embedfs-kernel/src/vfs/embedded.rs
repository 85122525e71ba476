//! Embedded backing: assets decoded from the table's compressed payloads.

use std::io::{self, Cursor, Read, Seek, SeekFrom};
use std::sync::Arc;
use std::time::SystemTime;

use super::traits::{EntryKind, Filesystem, Handle, Metadata};
use crate::asset::{AssetRecord, AssetTable};
use crate::error::{Result, VfsError};
use crate::path;

/// Permission bits reported for every embedded entry.
pub const EMBEDDED_MODE: u32 = 0o444;

/// Filesystem view backed by the decoded, in-memory asset payloads.
///
/// The first open of a record decodes it; later opens share the same buffer.
#[derive(Debug, Clone)]
pub struct EmbeddedFs {
    table: Arc<AssetTable>,
}

impl EmbeddedFs {
    pub fn new(table: Arc<AssetTable>) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &Arc<AssetTable> {
        &self.table
    }

    fn resolve(&self, path: &str) -> Result<(&AssetRecord, Arc<[u8]>)> {
        let record = self.table.lookup(path)?;
        let data = record.materialize().map_err(|source| VfsError::Decode {
            path: record.path().to_string(),
            source,
        })?;
        Ok((record, data))
    }
}

impl Filesystem for EmbeddedFs {
    fn open(&self, path: &str) -> Result<Handle> {
        let (record, data) = self.resolve(path)?;
        Ok(Handle::Embedded(EmbeddedFile {
            name: path::base_name(record.path()).to_string(),
            size: record.size(),
            modified: record.modified(),
            is_dir: record.is_dir(),
            reader: Cursor::new(data),
        }))
    }

    /// Shares the decoded buffer instead of copying it.
    fn read(&self, path: &str) -> Result<Arc<[u8]>> {
        let (_, data) = self.resolve(path)?;
        Ok(data)
    }
}

/// Open embedded asset: a cursor over the shared decoded buffer.
#[derive(Debug, Clone)]
pub struct EmbeddedFile {
    name: String,
    size: u64,
    modified: SystemTime,
    is_dir: bool,
    reader: Cursor<Arc<[u8]>>,
}

impl EmbeddedFile {
    pub fn stat(&self) -> Metadata {
        Metadata {
            name: self.name.clone(),
            kind: if self.is_dir {
                EntryKind::Directory
            } else {
                EntryKind::File
            },
            size: self.size,
            modified: self.modified,
            mode: EMBEDDED_MODE,
        }
    }

    /// The whole decoded content, independent of the read position.
    pub fn data(&self) -> &Arc<[u8]> {
        self.reader.get_ref()
    }
}

impl Read for EmbeddedFile {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.reader.read(buf)
    }
}

impl Seek for EmbeddedFile {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        self.reader.seek(pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::Engine as _;
    use base64::engine::general_purpose::STANDARD;
    use flate2::Compression;
    use flate2::write::GzEncoder;
    use std::io::Write;
    use std::time::{Duration, UNIX_EPOCH};

    fn pack(data: &[u8]) -> String {
        let mut enc = GzEncoder::new(Vec::new(), Compression::default());
        enc.write_all(data).unwrap();
        STANDARD.encode(enc.finish().unwrap())
    }

    fn fs() -> EmbeddedFs {
        let table = AssetTable::new([
            AssetRecord::directory("/", "assets"),
            AssetRecord::file("/file.txt", "assets/file.txt", 11, 1_700_000_000, pack(b"hello world")),
            AssetRecord::file("/empty.txt", "assets/empty.txt", 0, 0, ""),
            AssetRecord::file("/broken.txt", "assets/broken.txt", 5, 0, "@@@@"),
        ])
        .unwrap();
        EmbeddedFs::new(Arc::new(table))
    }

    #[test]
    fn test_open_and_read() {
        let fs = fs();
        let mut handle = fs.open("/file.txt").unwrap();
        assert_eq!(handle.read_all().unwrap(), b"hello world");
    }

    #[test]
    fn test_stat() {
        let fs = fs();
        let meta = fs.open("/file.txt").unwrap().stat().unwrap();
        assert_eq!(meta.name(), "file.txt");
        assert_eq!(meta.size(), 11);
        assert_eq!(meta.mode, EMBEDDED_MODE);
        assert!(!meta.is_dir());
        assert_eq!(meta.modified, UNIX_EPOCH + Duration::from_secs(1_700_000_000));
    }

    #[test]
    fn test_seek_within_buffer() {
        let fs = fs();
        let mut handle = fs.open("/file.txt").unwrap();
        handle.seek(SeekFrom::Start(6)).unwrap();
        assert_eq!(handle.read_all().unwrap(), b"world");
        handle.seek(SeekFrom::End(-5)).unwrap();
        let mut buf = [0u8; 2];
        handle.read_exact(&mut buf).unwrap();
        assert_eq!(&buf, b"wo");
    }

    #[test]
    fn test_not_found() {
        let err = fs().open("/missing.txt").unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_zero_size() {
        let fs = fs();
        let mut handle = fs.open("/empty.txt").unwrap();
        assert_eq!(handle.stat().unwrap().size(), 0);
        assert!(handle.read_all().unwrap().is_empty());
        assert_eq!(fs.table().lookup("/empty.txt").unwrap().decode_attempts(), 0);
    }

    #[test]
    fn test_directory_handle() {
        let fs = fs();
        let mut handle = fs.open("/").unwrap();
        let meta = handle.stat().unwrap();
        assert!(meta.is_dir());
        assert_eq!(meta.name(), "/");
        assert!(handle.readdir(0).unwrap().is_empty());
        assert!(handle.readdir(10).unwrap().is_empty());
        handle.close().unwrap();
    }

    #[test]
    fn test_decode_error_is_replayed() {
        let fs = fs();
        let first = fs.open("/broken.txt").unwrap_err();
        let second = fs.open("/broken.txt").unwrap_err();
        match (first, second) {
            (VfsError::Decode { source: a, .. }, VfsError::Decode { source: b, .. }) => {
                assert!(Arc::ptr_eq(&a, &b));
            }
            other => panic!("expected decode errors, got {other:?}"),
        }
        assert_eq!(fs.table().lookup("/broken.txt").unwrap().decode_attempts(), 1);
    }

    #[test]
    fn test_huge_declared_size_is_decode_error() {
        let table = AssetTable::new([AssetRecord::file(
            "/x",
            "x",
            u64::MAX / 2,
            0,
            pack(b"abc"),
        )])
        .unwrap();
        let fs = EmbeddedFs::new(Arc::new(table));
        match fs.open("/x").unwrap_err() {
            VfsError::Decode { source, .. } => {
                assert!(matches!(*source, crate::DecodeError::SizeMismatch { actual: 3, .. }));
            }
            other => panic!("expected decode error, got {other:?}"),
        }
    }

    #[test]
    fn test_read_shares_buffer() {
        let fs = fs();
        let a = fs.read("/file.txt").unwrap();
        let b = fs.read("/./file.txt").unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        let handle = fs.open("/file.txt").unwrap();
        match handle {
            Handle::Embedded(f) => assert!(Arc::ptr_eq(f.data(), &a)),
            Handle::Local(_) => panic!("expected embedded handle"),
        }
    }
}
