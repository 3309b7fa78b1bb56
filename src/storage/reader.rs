//! Record file reader
//!
//! A file is a sequence of blocks, each opened by the delimiter line:
//!
//! ```text
//! ------- OBJECT -------
//! id: 1
//! name: Vanilla Cupcake
//! ```
//!
//! Splitting on the delimiter always yields an empty leading segment, which
//! is discarded. Inside a block the first line is the remainder of the
//! delimiter line and is discarded too.
//!
//! Any undeclared key fails the whole parse, not just its block.

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::errors::{StoreError, StoreResult};
use super::DELIMITER;
use crate::observability::{log_event_with_fields, Event};
use crate::schema::{Record, TypeDescriptor};

/// What a read does when the backing file cannot be read.
///
/// Writes are unaffected: a failed write is always an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReadPolicy {
    /// Any read failure yields an empty record list and a warning
    #[default]
    Degrade,
    /// A missing file is still empty; any other read failure is an error
    Strict,
}

/// Reads the whole backing file, applying `policy` to failures.
///
/// The file is opened, consumed and closed within this call. Content that
/// is not valid UTF-8 is a format error under either policy, so a later
/// write cannot replace records that were merely undecodable.
pub fn read_source(path: &Path, policy: ReadPolicy) -> StoreResult<String> {
    match fs::read(path) {
        Ok(bytes) => String::from_utf8(bytes)
            .map_err(|e| StoreError::invalid_encoding(path, e.utf8_error().valid_up_to())),
        Err(e) if e.kind() == io::ErrorKind::NotFound && policy == ReadPolicy::Strict => {
            Ok(String::new())
        }
        Err(e) => match policy {
            ReadPolicy::Degrade => {
                let shown = path.display().to_string();
                let reason = e.to_string();
                log_event_with_fields(
                    Event::StoreReadDegraded,
                    &[("path", shown.as_str()), ("reason", reason.as_str())],
                );
                Ok(String::new())
            }
            ReadPolicy::Strict => Err(StoreError::io_error(
                path,
                format!("Failed to read record file: {}", path.display()),
                e,
            )),
        },
    }
}

/// Parses file content into records, preserving file order.
///
/// `source` is used only for error context.
pub fn parse<R: Record>(
    descriptor: &TypeDescriptor<R>,
    text: &str,
    source: &Path,
) -> StoreResult<Vec<R>> {
    text.split(DELIMITER)
        .skip(1)
        .enumerate()
        .map(|(index, block)| parse_block(descriptor, block, source, index))
        .collect()
}

/// Reconstructs one record from the text between two delimiters.
fn parse_block<R: Record>(
    descriptor: &TypeDescriptor<R>,
    block: &str,
    source: &Path,
    index: usize,
) -> StoreResult<R> {
    let mut record = R::default();

    for line in block.split('\n').skip(1) {
        if line.trim().is_empty() {
            continue;
        }

        let (key, raw) = line
            .split_once(':')
            .ok_or_else(|| StoreError::malformed_line(source, line.trim_end(), index))?;
        let raw = raw.trim();

        let field = descriptor.field(key).ok_or_else(|| {
            StoreError::schema_mismatch(source, descriptor.type_name(), key, index)
        })?;

        let value = field
            .kind()
            .decode(raw)
            .map_err(|e| StoreError::invalid_value(source, key, raw, index, e.to_string()))?;

        field.write(&mut record, value).map_err(|rejected| {
            StoreError::invalid_value(
                source,
                key,
                raw,
                index,
                format!("field does not accept a {} value", rejected.type_name()),
            )
        })?;
    }

    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::FieldSpec;
    use crate::storage::StoreErrorCode;

    #[derive(Debug, Default, PartialEq)]
    struct Note {
        id: Option<i64>,
        body: Option<String>,
    }

    impl Record for Note {
        const TYPE_NAME: &'static str = "Note";

        fn fields() -> Vec<FieldSpec<Self>> {
            vec![
                FieldSpec::integer("id", |r: &Self| r.id, |r, v| r.id = Some(v)),
                FieldSpec::text("body", |r: &Self| r.body.clone(), |r, v| r.body = Some(v)),
            ]
        }
    }

    fn note(id: i64, body: &str) -> Note {
        Note {
            id: Some(id),
            body: Some(body.to_string()),
        }
    }

    fn parse_notes(text: &str) -> StoreResult<Vec<Note>> {
        parse(&TypeDescriptor::<Note>::of(), text, Path::new("notes.txt"))
    }

    #[test]
    fn test_empty_text_has_no_records() {
        assert!(parse_notes("").unwrap().is_empty());
    }

    #[test]
    fn test_parse_blocks_in_file_order() {
        let text = "------- OBJECT -------\nid: 2\nbody: second\n------- OBJECT -------\nid: 1\nbody: first";
        assert_eq!(parse_notes(text).unwrap(), vec![note(2, "second"), note(1, "first")]);
    }

    #[test]
    fn test_value_split_at_first_colon_and_trimmed() {
        let text = "------- OBJECT -------\nid: 7\nbody:   time: 10:30  ";
        assert_eq!(parse_notes(text).unwrap(), vec![note(7, "time: 10:30")]);
    }

    #[test]
    fn test_keys_in_any_order_and_missing_keys_stay_absent() {
        let text = "------- OBJECT -------\nbody: only body";
        let notes = parse_notes(text).unwrap();
        assert_eq!(notes, vec![Note { id: None, body: Some("only body".into()) }]);
    }

    #[test]
    fn test_crlf_line_endings() {
        let text = "------- OBJECT -------\r\nid: 3\r\nbody: windows\r\n";
        assert_eq!(parse_notes(text).unwrap(), vec![note(3, "windows")]);
    }

    #[test]
    fn test_undeclared_key_fails_whole_parse() {
        let text = "------- OBJECT -------\nid: 1\nbody: ok\n------- OBJECT -------\nid: 2\ncolour: red";
        let err = parse_notes(text).unwrap_err();
        assert_eq!(err.code(), StoreErrorCode::ShopSchemaMismatch);
        assert!(err.message().contains("colour"));
        assert_eq!(err.path(), Some(Path::new("notes.txt")));
    }

    #[test]
    fn test_key_match_is_exact() {
        let text = "------- OBJECT -------\nId: 1";
        let err = parse_notes(text).unwrap_err();
        assert_eq!(err.code(), StoreErrorCode::ShopSchemaMismatch);
    }

    #[test]
    fn test_bad_integer_is_format_error() {
        let text = "------- OBJECT -------\nid: one";
        let err = parse_notes(text).unwrap_err();
        assert_eq!(err.code(), StoreErrorCode::ShopFormatError);
        assert!(err.message().contains("'one'"));
    }

    #[test]
    fn test_line_without_colon_is_format_error() {
        let text = "------- OBJECT -------\nid 1";
        let err = parse_notes(text).unwrap_err();
        assert_eq!(err.code(), StoreErrorCode::ShopFormatError);
    }

    #[test]
    fn test_strict_policy_treats_missing_file_as_empty() {
        let dir = tempfile::TempDir::new().unwrap();
        let text = read_source(&dir.path().join("absent.txt"), ReadPolicy::Strict).unwrap();
        assert!(text.is_empty());
    }

    #[test]
    fn test_strict_policy_surfaces_unreadable_file() {
        let dir = tempfile::TempDir::new().unwrap();
        // A directory cannot be read as a file.
        let err = read_source(dir.path(), ReadPolicy::Strict).unwrap_err();
        assert!(err.is_io());
    }

    #[test]
    fn test_invalid_utf8_is_format_error_under_both_policies() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("notes.txt");
        fs::write(&path, b"------- OBJECT -------\nid: 1\nbody: caf\xE9\n").unwrap();

        for policy in [ReadPolicy::Degrade, ReadPolicy::Strict] {
            let err = read_source(&path, policy).unwrap_err();
            assert_eq!(err.code(), StoreErrorCode::ShopFormatError);
            assert!(err.message().contains("byte 38"), "{}", err.message());
        }
    }

    #[test]
    fn test_degrade_policy_swallows_unreadable_file() {
        let dir = tempfile::TempDir::new().unwrap();
        assert_eq!(read_source(dir.path(), ReadPolicy::Degrade).unwrap(), "");
    }
}
