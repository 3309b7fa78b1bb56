//! Record store error types
//!
//! Error codes:
//! - SHOP_STORAGE_IO_ERROR: file unreadable or unwritable
//! - SHOP_SCHEMA_MISMATCH: a parsed key has no declared field
//! - SHOP_FORMAT_ERROR: a value cannot be converted to or from its text form,
//!   or the file is not UTF-8

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// Store-specific error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreErrorCode {
    /// File read or write failure
    ShopStorageIoError,
    /// Block contains an undeclared key
    ShopSchemaMismatch,
    /// Value not convertible to or from its semantic type
    ShopFormatError,
}

impl StoreErrorCode {
    /// Returns the string code
    pub fn code(&self) -> &'static str {
        match self {
            StoreErrorCode::ShopStorageIoError => "SHOP_STORAGE_IO_ERROR",
            StoreErrorCode::ShopSchemaMismatch => "SHOP_SCHEMA_MISMATCH",
            StoreErrorCode::ShopFormatError => "SHOP_FORMAT_ERROR",
        }
    }
}

impl fmt::Display for StoreErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Store error with file and field context
#[derive(Debug)]
pub struct StoreError {
    /// Error code
    code: StoreErrorCode,
    /// Human-readable message
    message: String,
    /// Backing file involved, if known
    path: Option<PathBuf>,
    /// Optional details about the error context
    details: Option<String>,
    /// Underlying IO error if applicable
    source: Option<io::Error>,
}

impl StoreError {
    /// Create a storage I/O error
    pub fn io_error(path: &Path, message: impl Into<String>, source: io::Error) -> Self {
        Self {
            code: StoreErrorCode::ShopStorageIoError,
            message: message.into(),
            path: Some(path.to_path_buf()),
            details: None,
            source: Some(source),
        }
    }

    /// Create a schema mismatch error for an undeclared key
    pub fn schema_mismatch(path: &Path, type_name: &str, key: &str, block: usize) -> Self {
        Self {
            code: StoreErrorCode::ShopSchemaMismatch,
            message: format!("{} has no field named '{}'", type_name, key),
            path: Some(path.to_path_buf()),
            details: Some(format!("block: {}", block)),
            source: None,
        }
    }

    /// Create a format error for a raw value that failed conversion
    pub fn invalid_value(
        path: &Path,
        field: &str,
        raw: &str,
        block: usize,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            code: StoreErrorCode::ShopFormatError,
            message: format!("invalid value '{}' for field '{}': {}", raw, field, reason.into()),
            path: Some(path.to_path_buf()),
            details: Some(format!("block: {}", block)),
            source: None,
        }
    }

    /// Create a format error for a line that is not `key: value`
    pub fn malformed_line(path: &Path, line: &str, block: usize) -> Self {
        Self {
            code: StoreErrorCode::ShopFormatError,
            message: format!("expected 'name: value', found '{}'", line),
            path: Some(path.to_path_buf()),
            details: Some(format!("block: {}", block)),
            source: None,
        }
    }

    /// Create a format error for file content that is not UTF-8
    pub fn invalid_encoding(path: &Path, valid_up_to: usize) -> Self {
        Self {
            code: StoreErrorCode::ShopFormatError,
            message: format!("record file is not valid UTF-8 at byte {}", valid_up_to),
            path: Some(path.to_path_buf()),
            details: None,
            source: None,
        }
    }

    /// Create a format error for a value the file grammar cannot carry
    pub fn unrepresentable(type_name: &str, field: &str, reason: impl Into<String>) -> Self {
        Self {
            code: StoreErrorCode::ShopFormatError,
            message: format!("{}.{} cannot be stored: {}", type_name, field, reason.into()),
            path: None,
            details: None,
            source: None,
        }
    }

    /// Attach the backing file path if none is set yet
    pub fn with_path(mut self, path: &Path) -> Self {
        if self.path.is_none() {
            self.path = Some(path.to_path_buf());
        }
        self
    }

    /// Returns the error code
    pub fn code(&self) -> StoreErrorCode {
        self.code
    }

    /// Returns the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the backing file path, if known
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Whether this is a file I/O failure
    pub fn is_io(&self) -> bool {
        self.code == StoreErrorCode::ShopStorageIoError
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)?;
        if let Some(ref path) = self.path {
            write!(f, " (file: {})", path.display())?;
        }
        if let Some(ref details) = self.details {
            write!(f, " ({})", details)?;
        }
        if let Some(ref source) = self.source {
            write!(f, " (caused by: {})", source)?;
        }
        Ok(())
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source.as_ref().map(|e| e as &(dyn std::error::Error + 'static))
    }
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;
