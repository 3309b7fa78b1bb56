//! Catalog items

use serde::Serialize;

use crate::schema::{FieldSpec, Record};

/// An item in the shop's catalog
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Item {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub category: Option<String>,
    pub price: Option<f64>,
}

impl Item {
    pub fn new(id: i64, name: impl Into<String>, category: impl Into<String>, price: f64) -> Self {
        Self {
            id: Some(id),
            name: Some(name.into()),
            category: Some(category.into()),
            price: Some(price),
        }
    }
}

impl Record for Item {
    const TYPE_NAME: &'static str = "Item";

    fn fields() -> Vec<FieldSpec<Self>> {
        vec![
            FieldSpec::integer("id", |r: &Self| r.id, |r, v| r.id = Some(v)),
            FieldSpec::text("name", |r: &Self| r.name.clone(), |r, v| r.name = Some(v)),
            FieldSpec::text("category", |r: &Self| r.category.clone(), |r, v| r.category = Some(v)),
            FieldSpec::real("price", |r: &Self| r.price, |r, v| r.price = Some(v)),
        ]
    }
}
