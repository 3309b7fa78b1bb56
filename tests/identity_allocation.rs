//! Identifier Allocation Tests
//!
//! Tests that new records take the smallest unused positive id, both for
//! the bare allocator and through the shop services.

use shopdb::identity::next_available_id;
use shopdb::model::Item;
use shopdb::service::InventoryService;
use shopdb::storage::RecordStore;
use tempfile::TempDir;

// =============================================================================
// Allocator
// =============================================================================

#[test]
fn test_documented_examples() {
    assert_eq!(next_available_id([1, 2, 4]), 3);
    assert_eq!(next_available_id(Vec::<i64>::new()), 1);
    assert_eq!(next_available_id([2, 3, 4]), 1);
    assert_eq!(next_available_id([1, 2, 3]), 4);
}

#[test]
fn test_ids_of_loaded_records() {
    let items = vec![
        Item::new(1, "A", "X", 1.0),
        Item {
            id: None,
            ..Item::default()
        },
        Item::new(3, "C", "X", 1.0),
    ];

    assert_eq!(next_available_id(items.iter().map(|i| i.id)), 2);
}

// =============================================================================
// Through Services
// =============================================================================

/// Removing a record frees its id for the next insert.
#[test]
fn test_freed_id_is_reused() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path();
    let inventory = InventoryService::new(
        RecordStore::open(dir.join("items.txt")),
        RecordStore::open(dir.join("categories.txt")),
    );

    for name in ["A", "B", "C", "D"] {
        inventory.add_item(name, "Cakes", 100.0).unwrap();
    }
    inventory.remove_item(2).unwrap();
    inventory.remove_item(1).unwrap();

    assert_eq!(inventory.add_item("E", "Cakes", 100.0).unwrap().id, Some(1));
    assert_eq!(inventory.add_item("F", "Cakes", 100.0).unwrap().id, Some(2));
    assert_eq!(inventory.add_item("G", "Cakes", 100.0).unwrap().id, Some(5));
}
