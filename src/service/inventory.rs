//! Items and categories

use super::errors::{ServiceError, ServiceResult};
use super::{allocate_id, log_created, remove_by_id, require_text};
use crate::model::{Category, Item};
use crate::storage::RecordStore;

/// Catalog management over the item and category stores
pub struct InventoryService {
    items: RecordStore<Item>,
    categories: RecordStore<Category>,
}

impl InventoryService {
    pub fn new(items: RecordStore<Item>, categories: RecordStore<Category>) -> Self {
        Self { items, categories }
    }

    /// Creates an item with the next available id.
    pub fn add_item(&self, name: &str, category: &str, price: f64) -> ServiceResult<Item> {
        let name = require_text("Item name", name)?;
        let category = require_text("Item category", category)?;
        if !price.is_finite() || price < 0.0 {
            return Err(ServiceError::InvalidInput(format!(
                "Item price must be a non-negative number, got {}",
                price
            )));
        }

        let id = allocate_id(&self.items.load_all()?, |i| i.id);
        let item = Item::new(id, name, category, price);
        self.items.append(item.clone())?;

        log_created::<Item>(id);
        Ok(item)
    }

    /// Removes an item by id and returns its name.
    pub fn remove_item(&self, id: i64) -> ServiceResult<String> {
        let removed = remove_by_id(&self.items, id, |i| i.id)?;
        Ok(removed.name.unwrap_or_default())
    }

    /// All items in file order.
    pub fn all_items(&self) -> ServiceResult<Vec<Item>> {
        Ok(self.items.load_all()?)
    }

    /// Creates a category with the next available id.
    ///
    /// Names are unique, compared case-insensitively.
    pub fn add_category(&self, name: &str) -> ServiceResult<Category> {
        let name = require_text("Category name", name)?;
        let categories = self.categories.load_all()?;

        let clash = categories.iter().any(|c| {
            c.name
                .as_deref()
                .is_some_and(|existing| existing.to_lowercase() == name.to_lowercase())
        });
        if clash {
            return Err(ServiceError::DuplicateEntry(format!(
                "The category '{}' already exists",
                name
            )));
        }

        let id = allocate_id(&categories, |c| c.id);
        let category = Category::new(id, name);
        self.categories.append(category.clone())?;

        log_created::<Category>(id);
        Ok(category)
    }

    /// Removes a category by id and returns its name.
    pub fn remove_category(&self, id: i64) -> ServiceResult<String> {
        let removed = remove_by_id(&self.categories, id, |c| c.id)?;
        Ok(removed.name.unwrap_or_default())
    }

    /// All categories in file order.
    pub fn all_categories(&self) -> ServiceResult<Vec<Category>> {
        Ok(self.categories.load_all()?)
    }
}
