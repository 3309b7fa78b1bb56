//! Orders placed at the till
//!
//! `totalAmount` is stored, not derived, so older files keep the total
//! they were sold at.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::schema::{FieldSpec, Record};

/// One order line placed at the till
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: Option<i64>,
    pub date: Option<DateTime<Utc>>,
    /// Item name at the time of the order
    pub item: Option<String>,
    pub item_price: Option<f64>,
    pub quantity: Option<i64>,
    pub total_amount: Option<f64>,
}

impl Record for Order {
    const TYPE_NAME: &'static str = "Order";

    fn fields() -> Vec<FieldSpec<Self>> {
        vec![
            FieldSpec::integer("id", |r: &Self| r.id, |r, v| r.id = Some(v)),
            FieldSpec::timestamp("date", |r: &Self| r.date, |r, v| r.date = Some(v)),
            FieldSpec::text("item", |r: &Self| r.item.clone(), |r, v| r.item = Some(v)),
            FieldSpec::real("itemPrice", |r: &Self| r.item_price, |r, v| r.item_price = Some(v)),
            FieldSpec::integer("quantity", |r: &Self| r.quantity, |r, v| r.quantity = Some(v)),
            FieldSpec::real("totalAmount", |r: &Self| r.total_amount, |r, v| {
                r.total_amount = Some(v)
            }),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::TypeDescriptor;

    #[test]
    fn test_file_keys_are_camel_case() {
        let descriptor = TypeDescriptor::<Order>::of();
        let names: Vec<_> = descriptor.describe().into_iter().map(|(n, _)| n).collect();
        assert_eq!(
            names,
            vec!["id", "date", "item", "itemPrice", "quantity", "totalAmount"]
        );
    }
}
