//! Asset tables produced by the packing tool.
//!
//! Files in this module are generated; regenerate them instead of editing.

pub mod js;

use crate::asset::AssetTable;
use crate::error::TableError;

/// Build the table for the bundled `js` helpers.
pub fn js_table() -> Result<AssetTable, TableError> {
    AssetTable::from_specs(js::ASSETS)
}
