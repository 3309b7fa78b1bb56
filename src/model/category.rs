//! Product categories

use serde::Serialize;

use crate::schema::{FieldSpec, Record};

/// A product category (e.g. "Cupcakes", "Brownies")
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Category {
    pub id: Option<i64>,
    pub name: Option<String>,
}

impl Category {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            name: Some(name.into()),
        }
    }
}

impl Record for Category {
    const TYPE_NAME: &'static str = "Category";

    fn fields() -> Vec<FieldSpec<Self>> {
        vec![
            FieldSpec::integer("id", |r: &Self| r.id, |r, v| r.id = Some(v)),
            FieldSpec::text("name", |r: &Self| r.name.clone(), |r, v| r.name = Some(v)),
        ]
    }
}
