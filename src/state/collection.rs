//! Id-keyed operations over ordered collections.
//!
//! Collections stay plain `Vec`s so their order is the order records were
//! first inserted; lookups are linear scans.

use crate::model::{EntityId, Identified};

/// Insert-or-replace by id.
///
/// - id matches an entry: replaced in place, position kept
/// - id matches nothing: appended
/// - no id, or id `0`: appended unconditionally, even if an equal entry
///   exists
pub fn upsert_by_id<T: Identified>(items: &mut Vec<T>, item: T) {
    let Some(id) = item.id().filter(|id| *id != 0) else {
        items.push(item);
        return;
    };
    match items.iter().position(|existing| existing.id() == Some(id)) {
        Some(index) => items[index] = item,
        None => items.push(item),
    }
}

/// Remove the first entry with `id`. Absent ids leave `items` untouched.
pub fn remove_by_id<T: Identified>(items: &mut Vec<T>, id: EntityId) -> Option<T> {
    let index = items.iter().position(|existing| existing.id() == Some(id))?;
    Some(items.remove(index))
}

pub fn find_by_id<T: Identified>(items: &[T], id: EntityId) -> Option<&T> {
    items.iter().find(|existing| existing.id() == Some(id))
}
