//! # embedfs-kernel
//!
//! Read-only virtual filesystem over assets compiled into the program.
//!
//! Each asset lives in an [`AssetTable`] as a gzip-compressed, base64-encoded
//! payload. [`AssetFs`] hands out one of two interchangeable views:
//!
//! - the **embedded** backing decodes a payload on first open and keeps the
//!   bytes for the rest of the process
//! - the **local** backing opens the asset's source file from disk, so
//!   development builds pick up edits without regenerating the table
//!
//! ```no_run
//! use std::io::Read;
//! use std::sync::Arc;
//! use embedfs_kernel::{AssetFs, generated};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let assets = AssetFs::new(Arc::new(generated::js_table()?));
//! let fs = assets.filesystem(false);
//! let mut handle = fs.open("/helpers.js")?;
//! let mut text = String::new();
//! handle.read_to_string(&mut text)?;
//! # Ok(())
//! # }
//! ```

pub mod asset;
pub mod decode;
pub mod error;
pub mod facade;
pub mod generated;
pub mod path;
pub mod vfs;

pub use asset::{AssetRecord, AssetSpec, AssetTable};
pub use error::{DecodeError, Result, TableError, VfsError};
pub use facade::AssetFs;
pub use vfs::{EmbeddedFs, EntryKind, Filesystem, Handle, LocalFs, Metadata, MountFs, SubDirFs};
