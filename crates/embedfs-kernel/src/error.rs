//! Error types.

use std::io;
use std::sync::Arc;

/// Failure to turn a stored payload into bytes.
///
/// Decoding is deterministic over immutable input, so any of these means the
/// generated asset data is corrupt.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("corrupt compressed stream: {0}")]
    Inflate(#[source] io::Error),

    #[error("decoded {actual} bytes, expected {expected}")]
    SizeMismatch { expected: u64, actual: u64 },

    #[error("record has size {size} but no payload")]
    MissingPayload { size: u64 },
}

/// Error returned by filesystem operations.
#[derive(Debug, thiserror::Error)]
pub enum VfsError {
    /// Path is not in the asset table, or the mapped local file is absent.
    #[error("not found: {path}")]
    NotFound { path: String },

    /// The embedded payload could not be decoded.
    ///
    /// The source is shared because a failed decode is cached on the record
    /// and handed to every later caller.
    #[error("decode {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: Arc<DecodeError>,
    },

    /// Real filesystem failure from the local backing.
    #[error("{path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("{path}: content is not valid UTF-8")]
    InvalidUtf8 { path: String },
}

impl VfsError {
    pub fn not_found(path: impl Into<String>) -> Self {
        Self::NotFound { path: path.into() }
    }

    /// Classify an OS error from the local backing.
    pub(crate) fn from_io(path: impl Into<String>, source: io::Error) -> Self {
        let path = path.into();
        if source.kind() == io::ErrorKind::NotFound {
            Self::NotFound { path }
        } else {
            Self::Io { path, source }
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Path the failed request resolved to.
    pub fn path(&self) -> &str {
        match self {
            Self::NotFound { path }
            | Self::Decode { path, .. }
            | Self::Io { path, .. }
            | Self::InvalidUtf8 { path } => path,
        }
    }
}

impl From<VfsError> for io::Error {
    fn from(err: VfsError) -> Self {
        let kind = match &err {
            VfsError::NotFound { .. } => io::ErrorKind::NotFound,
            VfsError::Decode { .. } | VfsError::InvalidUtf8 { .. } => io::ErrorKind::InvalidData,
            VfsError::Io { source, .. } => source.kind(),
        };
        io::Error::new(kind, err)
    }
}

/// Error building an [`AssetTable`](crate::AssetTable).
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("duplicate asset path: {0}")]
    DuplicatePath(String),
}

pub type Result<T, E = VfsError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_os_not_found_is_not_found() {
        let err = VfsError::from_io("/a", io::Error::new(io::ErrorKind::NotFound, "gone"));
        assert!(err.is_not_found());
        assert_eq!(err.path(), "/a");
    }

    #[test]
    fn test_os_errors_pass_through() {
        let err = VfsError::from_io("/a", io::Error::new(io::ErrorKind::PermissionDenied, "nope"));
        assert!(!err.is_not_found());
        let io_err: io::Error = err.into();
        assert_eq!(io_err.kind(), io::ErrorKind::PermissionDenied);
    }

    #[test]
    fn test_io_kind_mapping() {
        let io_err: io::Error = VfsError::not_found("/x").into();
        assert_eq!(io_err.kind(), io::ErrorKind::NotFound);

        let decode = VfsError::Decode {
            path: "/x".into(),
            source: Arc::new(DecodeError::SizeMismatch { expected: 3, actual: 1 }),
        };
        let io_err: io::Error = decode.into();
        assert_eq!(io_err.kind(), io::ErrorKind::InvalidData);
    }
}
