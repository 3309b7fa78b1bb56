//! Business services for the shop
//!
//! Services own the stores they use; stores are built by the caller and
//! passed in, one per record type. All mutations follow the same shape:
//! load the whole list, change it in memory, write the whole list back.
//!
//! New ids come from `identity::next_available_id` over a fresh load,
//! immediately before the write. The stores themselves never check ids.

mod auth;
mod crypto;
mod errors;
mod inventory;
mod orders;
mod users;

pub use auth::AuthService;
pub use crypto::{hash_password, validate_password, verify_password, PasswordPolicy};
pub use errors::{ServiceError, ServiceResult};
pub use inventory::InventoryService;
pub use orders::{OrderService, OrderSummary};
pub use users::UserService;

use crate::identity::next_available_id;
use crate::observability::{log_event_with_fields, Event};
use crate::schema::Record;
use crate::storage::RecordStore;

/// Allocates the next id for `records`.
fn allocate_id<R>(records: &[R], id_of: fn(&R) -> Option<i64>) -> i64 {
    next_available_id(records.iter().map(id_of))
}

/// Removes the first record whose id is `id` and rewrites the store.
///
/// Returns the removed record, or `NotFound` without writing.
fn remove_by_id<R: Record>(
    store: &RecordStore<R>,
    id: i64,
    id_of: fn(&R) -> Option<i64>,
) -> ServiceResult<R> {
    let mut records = store.load_all()?;

    let position = records
        .iter()
        .position(|r| id_of(r) == Some(id))
        .ok_or_else(|| {
            ServiceError::NotFound(format!(
                "No {} matches the given id {}",
                R::TYPE_NAME.to_lowercase(),
                id
            ))
        })?;

    let removed = records.remove(position);
    store.replace_all(&records)?;

    let shown = id.to_string();
    log_event_with_fields(
        Event::RecordRemoved,
        &[("id", shown.as_str()), ("type", R::TYPE_NAME)],
    );

    Ok(removed)
}

/// Logs creation of a record with id `id`.
fn log_created<R: Record>(id: i64) {
    let shown = id.to_string();
    log_event_with_fields(
        Event::RecordCreated,
        &[("id", shown.as_str()), ("type", R::TYPE_NAME)],
    );
}

/// Rejects blank text input.
fn require_text(field: &str, value: &str) -> ServiceResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ServiceError::InvalidInput(format!("{} must not be empty", field)));
    }
    Ok(trimmed.to_string())
}
