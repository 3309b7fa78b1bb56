//! Record store facade
//!
//! One store per record type, bound to one backing file. The record list
//! is the unit of persistence: every mutation rewrites the whole file.
//!
//! Not safe for concurrent writers. Two interleaved `append` calls, in one
//! process or across processes, can lose records. There is no locking.

use std::path::{Path, PathBuf};

use super::errors::StoreResult;
use super::reader::{self, ReadPolicy};
use super::writer;
use crate::observability::{log_event_with_fields, Event};
use crate::schema::{Record, TypeDescriptor};

/// Generic store of `R` records in a delimited text file.
///
/// The type descriptor is built once here and reused for every call.
/// Identifier uniqueness is the caller's responsibility.
pub struct RecordStore<R: Record> {
    /// Backing file
    path: PathBuf,
    /// Cached field table for `R`
    descriptor: TypeDescriptor<R>,
    /// Behavior on unreadable files
    read_policy: ReadPolicy,
}

impl<R: Record> RecordStore<R> {
    /// Binds a store to `path` with the default (degrading) read policy.
    ///
    /// The file does not need to exist.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self::with_policy(path, ReadPolicy::default())
    }

    /// Binds a store to `path` with an explicit read policy.
    pub fn with_policy(path: impl Into<PathBuf>, read_policy: ReadPolicy) -> Self {
        Self {
            path: path.into(),
            descriptor: TypeDescriptor::of(),
            read_policy,
        }
    }

    /// Returns the backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the cached type descriptor.
    pub fn descriptor(&self) -> &TypeDescriptor<R> {
        &self.descriptor
    }

    /// Returns the read policy.
    pub fn read_policy(&self) -> ReadPolicy {
        self.read_policy
    }

    /// Loads every record in file order.
    ///
    /// The file is re-read on every call; nothing is cached.
    ///
    /// # Errors
    ///
    /// - `SHOP_SCHEMA_MISMATCH` if any block has an undeclared key
    /// - `SHOP_FORMAT_ERROR` if any value fails conversion
    /// - `SHOP_STORAGE_IO_ERROR` only under `ReadPolicy::Strict`
    pub fn load_all(&self) -> StoreResult<Vec<R>> {
        let text = reader::read_source(&self.path, self.read_policy)?;
        let shown = self.path.display().to_string();

        let records = reader::parse(&self.descriptor, &text, &self.path).map_err(|e| {
            log_event_with_fields(
                Event::StoreParseFailed,
                &[
                    ("code", e.code().code()),
                    ("path", shown.as_str()),
                    ("type", R::TYPE_NAME),
                ],
            );
            e
        })?;

        let count = records.len().to_string();
        log_event_with_fields(
            Event::StoreLoaded,
            &[
                ("path", shown.as_str()),
                ("records", count.as_str()),
                ("type", R::TYPE_NAME),
            ],
        );

        Ok(records)
    }

    /// Appends one record: load, push, rewrite.
    pub fn append(&self, record: R) -> StoreResult<()> {
        let mut records = self.load_all()?;
        records.push(record);
        self.replace_all(&records)
    }

    /// Replaces the file content with exactly `records`.
    ///
    /// # Errors
    ///
    /// - `SHOP_FORMAT_ERROR` if a text value cannot be represented; nothing is written
    /// - `SHOP_STORAGE_IO_ERROR` if the write fails; the file may be partially written
    pub fn replace_all(&self, records: &[R]) -> StoreResult<()> {
        let content = writer::stringify(&self.descriptor, records)
            .map_err(|e| e.with_path(&self.path))?;
        let shown = self.path.display().to_string();

        writer::write_file(&self.path, &content).map_err(|e| {
            let reason = e.to_string();
            log_event_with_fields(
                Event::StoreWriteFailed,
                &[
                    ("path", shown.as_str()),
                    ("reason", reason.as_str()),
                    ("type", R::TYPE_NAME),
                ],
            );
            e
        })?;

        let bytes = content.len().to_string();
        let count = records.len().to_string();
        log_event_with_fields(
            Event::StoreWritten,
            &[
                ("bytes", bytes.as_str()),
                ("path", shown.as_str()),
                ("records", count.as_str()),
                ("type", R::TYPE_NAME),
            ],
        );

        Ok(())
    }
}
