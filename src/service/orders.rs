//! Orders placed at the till

use chrono::{DateTime, SubsecRound, Utc};
use serde::Serialize;

use super::errors::{ServiceError, ServiceResult};
use super::{allocate_id, log_created, remove_by_id, require_text};
use crate::model::Order;
use crate::storage::RecordStore;

/// Totals over all stored orders
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OrderSummary {
    pub order_count: usize,
    pub units_sold: i64,
    pub revenue: f64,
}

/// Order management over the order store
pub struct OrderService {
    orders: RecordStore<Order>,
}

impl OrderService {
    pub fn new(orders: RecordStore<Order>) -> Self {
        Self { orders }
    }

    /// Places an order dated now.
    pub fn add_order(&self, item: &str, item_price: f64, quantity: i64) -> ServiceResult<Order> {
        self.add_order_at(item, item_price, quantity, Utc::now())
    }

    /// Places an order with an explicit date.
    ///
    /// The date is truncated to milliseconds, the precision kept on disk,
    /// so the returned order equals what a later load yields.
    pub fn add_order_at(
        &self,
        item: &str,
        item_price: f64,
        quantity: i64,
        date: DateTime<Utc>,
    ) -> ServiceResult<Order> {
        let item = require_text("Order item", item)?;
        if !item_price.is_finite() || item_price < 0.0 {
            return Err(ServiceError::InvalidInput(format!(
                "Item price must be a non-negative number, got {}",
                item_price
            )));
        }
        if quantity <= 0 {
            return Err(ServiceError::InvalidInput(format!(
                "Quantity must be positive, got {}",
                quantity
            )));
        }

        let id = allocate_id(&self.orders.load_all()?, |o| o.id);
        let order = Order {
            id: Some(id),
            date: Some(date.trunc_subsecs(3)),
            item: Some(item),
            item_price: Some(item_price),
            quantity: Some(quantity),
            total_amount: Some(item_price * quantity as f64),
        };
        self.orders.append(order.clone())?;

        log_created::<Order>(id);
        Ok(order)
    }

    /// Finds an order by id.
    pub fn find_order(&self, id: i64) -> ServiceResult<Order> {
        self.orders
            .load_all()?
            .into_iter()
            .find(|o| o.id == Some(id))
            .ok_or_else(|| ServiceError::NotFound(format!("An order with ID {} cannot be found.", id)))
    }

    /// Removes an order by id.
    pub fn remove_order(&self, id: i64) -> ServiceResult<Order> {
        remove_by_id(&self.orders, id, |o| o.id)
    }

    /// All orders in file order.
    pub fn all_orders(&self) -> ServiceResult<Vec<Order>> {
        Ok(self.orders.load_all()?)
    }

    /// Order count, units sold and revenue over all orders.
    pub fn summary(&self) -> ServiceResult<OrderSummary> {
        let orders = self.orders.load_all()?;
        Ok(OrderSummary {
            order_count: orders.len(),
            units_sold: orders.iter().filter_map(|o| o.quantity).sum(),
            revenue: orders.iter().filter_map(|o| o.total_amount).sum(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use tempfile::TempDir;

    fn service(dir: &TempDir) -> OrderService {
        OrderService::new(RecordStore::open(dir.path().join("orders.txt")))
    }

    #[test]
    fn test_add_order_computes_total() {
        let dir = TempDir::new().unwrap();
        let orders = service(&dir);

        let order = orders.add_order("Red Velvet", 450.0, 3).unwrap();
        assert_eq!(order.id, Some(1));
        assert_eq!(order.total_amount, Some(1350.0));
    }

    #[test]
    fn test_order_date_survives_reload() {
        let dir = TempDir::new().unwrap();
        let orders = service(&dir);

        let date = Utc.with_ymd_and_hms(2025, 10, 22, 14, 45, 10).unwrap()
            + chrono::Duration::microseconds(123_456);
        let placed = orders.add_order_at("Lemon Tart", 300.0, 1, date).unwrap();

        assert_eq!(orders.find_order(1).unwrap(), placed);
        assert_eq!(
            placed.date.unwrap().timestamp_subsec_millis(),
            123
        );
    }

    #[test]
    fn test_find_and_remove() {
        let dir = TempDir::new().unwrap();
        let orders = service(&dir);

        orders.add_order("A", 100.0, 1).unwrap();
        orders.add_order("B", 200.0, 2).unwrap();

        let removed = orders.remove_order(1).unwrap();
        assert_eq!(removed.item.as_deref(), Some("A"));
        assert!(matches!(orders.find_order(1), Err(ServiceError::NotFound(_))));
        assert!(matches!(orders.remove_order(1), Err(ServiceError::NotFound(_))));
        assert_eq!(orders.find_order(2).unwrap().quantity, Some(2));
    }

    #[test]
    fn test_rejects_non_positive_quantity() {
        let dir = TempDir::new().unwrap();
        let orders = service(&dir);

        assert!(matches!(
            orders.add_order("A", 100.0, 0),
            Err(ServiceError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_summary() {
        let dir = TempDir::new().unwrap();
        let orders = service(&dir);

        assert_eq!(orders.summary().unwrap(), OrderSummary::default());

        orders.add_order("A", 100.0, 2).unwrap();
        orders.add_order("B", 50.0, 3).unwrap();

        let summary = orders.summary().unwrap();
        assert_eq!(summary.order_count, 2);
        assert_eq!(summary.units_sold, 5);
        assert_eq!(summary.revenue, 350.0);
    }
}
