//! Per-type field tables
//!
//! A record type declares its fields once, as an ordered table of
//! (name, semantic type, getter, setter). The table order is the order
//! fields are written in; reading accepts any order.
//!
//! The store never inspects record types at runtime. Everything it knows
//! about a type comes from `Record::fields`.

use chrono::{DateTime, Utc};

use super::types::{FieldKind, FieldValue, Symbol};

type Getter<R> = Box<dyn Fn(&R) -> Option<FieldValue>>;
type Setter<R> = Box<dyn Fn(&mut R, FieldValue) -> Result<(), FieldValue>>;

/// A type that can be persisted by a `RecordStore`.
///
/// `Default` provides the empty instance that parsed values are assigned
/// onto; fields missing from a block keep their default.
pub trait Record: Default + 'static {
    /// Type name used in logs and error messages
    const TYPE_NAME: &'static str;

    /// Ordered field table for this type
    fn fields() -> Vec<FieldSpec<Self>>;
}

/// One declared field of a record type
pub struct FieldSpec<R> {
    name: &'static str,
    kind: FieldKind,
    get: Getter<R>,
    set: Setter<R>,
}

impl<R: 'static> FieldSpec<R> {
    /// Declares a text field
    pub fn text(name: &'static str, get: fn(&R) -> Option<String>, set: fn(&mut R, String)) -> Self {
        Self {
            name,
            kind: FieldKind::Text,
            get: Box::new(move |r: &R| get(r).map(FieldValue::Text)),
            set: Box::new(move |r: &mut R, v: FieldValue| match v {
                FieldValue::Text(s) => {
                    set(r, s);
                    Ok(())
                }
                other => Err(other),
            }),
        }
    }

    /// Declares an integer field
    pub fn integer(name: &'static str, get: fn(&R) -> Option<i64>, set: fn(&mut R, i64)) -> Self {
        Self {
            name,
            kind: FieldKind::Integer,
            get: Box::new(move |r: &R| get(r).map(FieldValue::Integer)),
            set: Box::new(move |r: &mut R, v: FieldValue| match v {
                FieldValue::Integer(n) => {
                    set(r, n);
                    Ok(())
                }
                other => Err(other),
            }),
        }
    }

    /// Declares a real-number field
    pub fn real(name: &'static str, get: fn(&R) -> Option<f64>, set: fn(&mut R, f64)) -> Self {
        Self {
            name,
            kind: FieldKind::Real,
            get: Box::new(move |r: &R| get(r).map(FieldValue::Real)),
            set: Box::new(move |r: &mut R, v: FieldValue| match v {
                FieldValue::Real(x) => {
                    set(r, x);
                    Ok(())
                }
                other => Err(other),
            }),
        }
    }

    /// Declares a timestamp field
    pub fn timestamp(
        name: &'static str,
        get: fn(&R) -> Option<DateTime<Utc>>,
        set: fn(&mut R, DateTime<Utc>),
    ) -> Self {
        Self {
            name,
            kind: FieldKind::Timestamp,
            get: Box::new(move |r: &R| get(r).map(FieldValue::Timestamp)),
            set: Box::new(move |r: &mut R, v: FieldValue| match v {
                FieldValue::Timestamp(ts) => {
                    set(r, ts);
                    Ok(())
                }
                other => Err(other),
            }),
        }
    }

    /// Declares an enumerated-symbol field
    pub fn symbol<S: Symbol>(name: &'static str, get: fn(&R) -> Option<S>, set: fn(&mut R, S)) -> Self {
        Self {
            name,
            kind: FieldKind::symbol::<S>(),
            get: Box::new(move |r: &R| get(r).map(|s| FieldValue::Symbol(s.name()))),
            set: Box::new(move |r: &mut R, v: FieldValue| match v {
                FieldValue::Symbol(name) => match S::from_name(name) {
                    Some(s) => {
                        set(r, s);
                        Ok(())
                    }
                    None => Err(FieldValue::Symbol(name)),
                },
                other => Err(other),
            }),
        }
    }

    /// Returns the declared field name
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the field's semantic type
    pub fn kind(&self) -> &FieldKind {
        &self.kind
    }

    /// Reads the field from a record. `None` means the field is absent.
    pub fn read(&self, record: &R) -> Option<FieldValue> {
        (self.get)(record)
    }

    /// Assigns a value to the field.
    ///
    /// Returns the value back if it does not match the field's type.
    pub fn write(&self, record: &mut R, value: FieldValue) -> Result<(), FieldValue> {
        (self.set)(record, value)
    }
}

/// Cached, ordered field table for one record type
pub struct TypeDescriptor<R> {
    type_name: &'static str,
    fields: Vec<FieldSpec<R>>,
}

impl<R: Record> TypeDescriptor<R> {
    /// Builds the descriptor from the type's declared field table.
    ///
    /// Field names must be unique within a table.
    pub fn of() -> Self {
        let fields = R::fields();
        debug_assert!(
            fields
                .iter()
                .enumerate()
                .all(|(i, f)| fields[..i].iter().all(|g| g.name != f.name)),
            "duplicate field name in {} field table",
            R::TYPE_NAME
        );

        Self {
            type_name: R::TYPE_NAME,
            fields,
        }
    }

    /// Returns the record type name
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Ordered (name, semantic type) pairs in declaration order
    pub fn describe(&self) -> Vec<(&'static str, &FieldKind)> {
        self.fields.iter().map(|f| (f.name, &f.kind)).collect()
    }

    /// All field specs in declaration order
    pub fn fields(&self) -> &[FieldSpec<R>] {
        &self.fields
    }

    /// Looks up a field by its exact declared name
    pub fn field(&self, name: &str) -> Option<&FieldSpec<R>> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Number of declared fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the type declares no fields
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
