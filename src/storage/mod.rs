//! Record storage subsystem for shopdb
//!
//! Each record type lives in its own UTF-8 text file, a concatenation of
//! delimited blocks with one `name: value` line per field.
//!
//! # Design Principles
//!
//! - Whole-file rewrite on every mutation (no partial writes)
//! - Re-read on every load (no caching)
//! - Schema enforced on read: one unknown key fails the whole file
//! - Reads degrade, writes fail hard (see `ReadPolicy`)
//!
//! # Limitations
//!
//! - Writes are not atomic
//! - No locking; concurrent writers can lose data

mod errors;
mod reader;
mod store;
mod writer;

pub use errors::{StoreError, StoreErrorCode, StoreResult};
pub use reader::{parse, read_source, ReadPolicy};
pub use store::RecordStore;
pub use writer::{stringify, stringify_record, write_file};

/// Sentinel line opening every block
pub const DELIMITER: &str = "------- OBJECT -------";
