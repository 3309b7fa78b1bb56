//! shopdb - typed records in delimited text files
//!
//! A small record store for a shop: every record type is declared once as
//! a field table, and lists of records are kept in human-readable files
//! made of delimited blocks of `key: value` lines.
//!
//! - `schema`: field tables and semantic field types
//! - `storage`: parser, serializer and the per-file `RecordStore`
//! - `identity`: smallest-unused-positive id allocation
//! - `model`: the shop's record types
//! - `service`: inventory, orders, users and login on top of the stores
//! - `observability`: structured JSON logging
//! - `cli`: the `shopdb` command line

pub mod cli;
pub mod identity;
pub mod model;
pub mod observability;
pub mod schema;
pub mod service;
pub mod storage;
