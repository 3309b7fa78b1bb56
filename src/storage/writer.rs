//! Record file writer
//!
//! Every write replaces the whole file. There is no temp-file-plus-rename
//! and no journal, so a crash mid-write can leave a truncated file.
//!
//! Values are written in descriptor order, one `name: value` line per
//! non-absent field, each record opened by the delimiter line. Values the
//! parser could not give back unchanged are refused before anything is
//! written.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Datelike, Utc};

use super::errors::{StoreError, StoreResult};
use super::DELIMITER;
use crate::schema::{FieldValue, Record, TypeDescriptor};

/// Serializes all records into the complete file content.
///
/// Trailing whitespace of the concatenated blocks is trimmed.
pub fn stringify<R: Record>(descriptor: &TypeDescriptor<R>, records: &[R]) -> StoreResult<String> {
    let mut output = String::with_capacity(records.len() * 64);
    for record in records {
        stringify_record(descriptor, record, &mut output)?;
    }

    let trimmed_len = output.trim_end().len();
    output.truncate(trimmed_len);
    Ok(output)
}

/// Appends the block for one record to `output`.
pub fn stringify_record<R: Record>(
    descriptor: &TypeDescriptor<R>,
    record: &R,
    output: &mut String,
) -> StoreResult<()> {
    output.push_str(DELIMITER);
    output.push('\n');

    for field in descriptor.fields() {
        let Some(value) = field.read(record) else {
            continue;
        };

        match value {
            FieldValue::Text(ref text) => {
                check_representable(descriptor.type_name(), field.name(), text)?
            }
            FieldValue::Timestamp(ts) => check_timestamp(descriptor.type_name(), field.name(), ts)?,
            _ => {}
        }

        output.push_str(field.name());
        output.push_str(": ");
        output.push_str(&value.encode());
        output.push('\n');
    }

    Ok(())
}

/// Text values must stay on one line, must not contain the delimiter and
/// must not start or end with whitespace, which the parser trims.
fn check_representable(type_name: &str, field: &str, text: &str) -> StoreResult<()> {
    if text.contains('\n') || text.contains('\r') {
        return Err(StoreError::unrepresentable(
            type_name,
            field,
            "text contains a line break",
        ));
    }
    if text.contains(DELIMITER) {
        return Err(StoreError::unrepresentable(
            type_name,
            field,
            "text contains the record delimiter",
        ));
    }
    if text.trim() != text {
        return Err(StoreError::unrepresentable(
            type_name,
            field,
            "text has leading or trailing whitespace",
        ));
    }
    Ok(())
}

/// RFC 3339 only carries four-digit years.
fn check_timestamp(type_name: &str, field: &str, ts: DateTime<Utc>) -> StoreResult<()> {
    if !(0..=9999).contains(&ts.year()) {
        return Err(StoreError::unrepresentable(
            type_name,
            field,
            format!("year {} is outside 0000-9999", ts.year()),
        ));
    }
    Ok(())
}

/// Writes `content` as the entire file, creating parent directories.
pub fn write_file(path: &Path, content: &str) -> StoreResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(|e| {
                StoreError::io_error(
                    path,
                    format!("Failed to create data directory: {}", parent.display()),
                    e,
                )
            })?;
        }
    }

    fs::write(path, content).map_err(|e| {
        StoreError::io_error(
            path,
            format!("Failed to write record file: {}", path.display()),
            e,
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{FieldSpec, Symbol};
    use crate::storage::StoreErrorCode;
    use chrono::{DateTime, TimeZone, Utc};

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Shift {
        Morning,
        Evening,
    }

    impl Symbol for Shift {
        const TYPE_NAME: &'static str = "Shift";
        const VARIANTS: &'static [Self] = &[Shift::Morning, Shift::Evening];

        fn name(self) -> &'static str {
            match self {
                Shift::Morning => "MORNING",
                Shift::Evening => "EVENING",
            }
        }
    }

    #[derive(Debug, Default)]
    struct Sale {
        id: Option<i64>,
        what: Option<String>,
        amount: Option<f64>,
        at: Option<DateTime<Utc>>,
        shift: Option<Shift>,
    }

    impl Record for Sale {
        const TYPE_NAME: &'static str = "Sale";

        fn fields() -> Vec<FieldSpec<Self>> {
            vec![
                FieldSpec::integer("id", |r: &Self| r.id, |r, v| r.id = Some(v)),
                FieldSpec::text("what", |r: &Self| r.what.clone(), |r, v| r.what = Some(v)),
                FieldSpec::real("amount", |r: &Self| r.amount, |r, v| r.amount = Some(v)),
                FieldSpec::timestamp("at", |r: &Self| r.at, |r, v| r.at = Some(v)),
                FieldSpec::symbol("shift", |r: &Self| r.shift, |r, v| r.shift = Some(v)),
            ]
        }
    }

    #[test]
    fn test_block_layout() {
        let sale = Sale {
            id: Some(4),
            what: Some("Red Velvet".into()),
            amount: Some(1200.0),
            at: Some(Utc.with_ymd_and_hms(2025, 10, 22, 14, 45, 10).unwrap()),
            shift: Some(Shift::Evening),
        };

        let text = stringify(&TypeDescriptor::of(), &[sale]).unwrap();
        assert_eq!(
            text,
            "------- OBJECT -------\n\
             id: 4\n\
             what: Red Velvet\n\
             amount: 1200.0\n\
             at: 2025-10-22T14:45:10.000Z\n\
             shift: EVENING"
        );
    }

    #[test]
    fn test_absent_fields_are_skipped() {
        let sale = Sale {
            id: Some(1),
            ..Default::default()
        };
        let text = stringify(&TypeDescriptor::of(), &[sale]).unwrap();
        assert_eq!(text, "------- OBJECT -------\nid: 1");
    }

    #[test]
    fn test_no_records_is_empty_file() {
        let text = stringify::<Sale>(&TypeDescriptor::of(), &[]).unwrap();
        assert!(text.is_empty());
    }

    #[test]
    fn test_each_record_opens_with_delimiter() {
        let sales = vec![
            Sale { id: Some(1), ..Default::default() },
            Sale { id: Some(2), ..Default::default() },
        ];
        let text = stringify(&TypeDescriptor::of(), &sales).unwrap();
        assert_eq!(text.matches(DELIMITER).count(), 2);
        assert!(text.starts_with(DELIMITER));
    }

    #[test]
    fn test_multiline_text_is_rejected() {
        let sale = Sale {
            what: Some("two\nlines".into()),
            ..Default::default()
        };
        let err = stringify(&TypeDescriptor::of(), &[sale]).unwrap_err();
        assert_eq!(err.code(), StoreErrorCode::ShopFormatError);
        assert!(err.message().contains("Sale.what"));
    }

    #[test]
    fn test_delimiter_in_text_is_rejected() {
        let sale = Sale {
            what: Some(format!("x {} y", DELIMITER)),
            ..Default::default()
        };
        assert!(stringify(&TypeDescriptor::of(), &[sale]).is_err());
    }

    #[test]
    fn test_surrounding_whitespace_is_rejected() {
        for what in [" Red Velvet", "Red Velvet ", "\tRed Velvet"] {
            let sale = Sale {
                what: Some(what.into()),
                ..Default::default()
            };
            let err = stringify(&TypeDescriptor::of(), &[sale]).unwrap_err();
            assert_eq!(err.code(), StoreErrorCode::ShopFormatError, "text: {:?}", what);
        }

        let inner = Sale {
            what: Some("Red  Velvet".into()),
            ..Default::default()
        };
        assert!(stringify(&TypeDescriptor::of(), &[inner]).is_ok());
    }

    #[test]
    fn test_five_digit_year_is_rejected() {
        let sale = Sale {
            at: Some(Utc.with_ymd_and_hms(10000, 1, 1, 0, 0, 0).unwrap()),
            ..Default::default()
        };
        let err = stringify(&TypeDescriptor::of(), &[sale]).unwrap_err();
        assert_eq!(err.code(), StoreErrorCode::ShopFormatError);
        assert!(err.message().contains("Sale.at"));

        let last = Sale {
            at: Some(Utc.with_ymd_and_hms(9999, 12, 31, 23, 59, 59).unwrap()),
            ..Default::default()
        };
        assert!(stringify(&TypeDescriptor::of(), &[last]).is_ok());
    }

    #[test]
    fn test_write_file_creates_parent_directories() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("nested").join("sales.txt");

        write_file(&path, "content").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "content");

        write_file(&path, "replaced").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "replaced");
    }
}
