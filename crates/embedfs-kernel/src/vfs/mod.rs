//! Virtual Filesystem (VFS) over the asset table.
//!
//! Two backings implement [`Filesystem`] over the same table:
//!
//! - **EmbeddedFs**: decodes the compressed payloads compiled into the binary
//! - **LocalFs**: opens each asset's local path from disk (development mode)
//!
//! Both can be wrapped to change how request paths map onto table keys:
//!
//! ```text
//! SubDirFs("/js")     open("/helpers.js")        -> key "/js/helpers.js"
//! MountFs("/assets")  open("/assets/helpers.js") -> key "/helpers.js"
//! ```

mod embedded;
mod local;
mod prefix;
mod traits;

pub use embedded::{EMBEDDED_MODE, EmbeddedFile, EmbeddedFs};
pub use local::{LocalFile, LocalFs};
pub use prefix::{MountFs, SubDirFs};
pub use traits::{EntryKind, Filesystem, Handle, Metadata};
