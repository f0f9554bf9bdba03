//! Common business operations over roadmap values.
//!
//! Operations here are pure: they take the current roadmap by reference and
//! return a new value, so the state holder can swap it in as a whole.

use crate::{
    models::{Item, Roadmap},
    params::ItemPatch,
};

/// Produce a roadmap where the item with `item_id` has `patch` overlaid.
///
/// All other items and the root fields are carried over unchanged. When no
/// item matches, the result equals the input; use
/// [`crate::Tracker::update_item`] to get a not-found error instead.
///
/// # Arguments
///
/// * `roadmap` - Current roadmap
/// * `item_id` - Id of the item to patch
/// * `patch` - Fields to overlay
///
/// # Examples
///
/// ```rust
/// # use waypoint_core::{operations::update_item, params::ItemPatch, Item, ItemStatus, Roadmap};
/// let roadmap = Roadmap {
///     title: "T".to_string(),
///     description: None,
///     items: vec![Item::new("x1", "A", "a"), Item::new("x2", "B", "b")],
/// };
///
/// let updated = update_item(&roadmap, "x2", &ItemPatch::status(ItemStatus::Completed));
/// assert_eq!(updated.items[0], roadmap.items[0]);
/// assert_eq!(updated.items[1].status, ItemStatus::Completed);
/// ```
pub fn update_item(roadmap: &Roadmap, item_id: &str, patch: &ItemPatch) -> Roadmap {
    Roadmap {
        title: roadmap.title.clone(),
        description: roadmap.description.clone(),
        items: roadmap
            .items
            .iter()
            .map(|item| patched(item, item_id, patch))
            .collect(),
    }
}

fn patched(item: &Item, item_id: &str, patch: &ItemPatch) -> Item {
    let mut item = item.clone();
    if item.id == item_id {
        patch.apply_to(&mut item);
    }
    item
}
