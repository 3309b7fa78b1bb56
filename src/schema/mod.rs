//! Record schemas for shopdb
//!
//! Each persisted type declares an explicit field table through the
//! `Record` trait. The table is turned into a `TypeDescriptor` once per
//! store and drives both serialization and parsing.
//!
//! # Design Principles
//!
//! - No runtime type inspection; the field table is the schema
//! - Declaration order is write order
//! - Enumerated symbols map to and from names exhaustively

mod descriptor;
mod types;

pub use descriptor::{FieldSpec, Record, TypeDescriptor};
pub use types::{DecodeError, FieldKind, FieldValue, Symbol};
