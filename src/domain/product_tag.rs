use std::collections::HashSet;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Domain representation linking a product to a tag record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ProductTag {
    /// Unique identifier of the product-tag association.
    pub id: i32,
    /// Identifier of the product the tag is attached to.
    pub product_id: i32,
    /// Identifier of the referenced tag record.
    pub tag_id: i32,
    /// Timestamp for when the association was created.
    pub created_at: NaiveDateTime,
    /// Timestamp for the last update to the association.
    pub updated_at: NaiveDateTime,
}

/// Delta between a product's current associations and a desired tag set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagDelta {
    /// Tag ids that need a new association row.
    pub to_insert: Vec<i32>,
    /// Association row ids whose tag is no longer desired.
    pub to_delete: Vec<i32>,
}

impl TagDelta {
    /// Whether applying the delta would change anything.
    pub fn is_empty(&self) -> bool {
        self.to_insert.is_empty() && self.to_delete.is_empty()
    }
}

/// Compute the minimal insert/delete delta that turns `current` into the
/// association set for `desired`.
///
/// Associations whose tag id appears in both sets are left untouched, so a
/// surviving tag keeps its original row. Duplicate ids in `desired` collapse
/// to a single insertion. The order of the returned vectors carries no
/// meaning.
pub fn reconcile_tags(current: &[ProductTag], desired: &[i32]) -> TagDelta {
    let current_ids: HashSet<i32> = current.iter().map(|assoc| assoc.tag_id).collect();
    let desired_ids: HashSet<i32> = desired.iter().copied().collect();

    let to_insert = desired_ids
        .iter()
        .copied()
        .filter(|tag_id| !current_ids.contains(tag_id))
        .collect();

    let to_delete = current
        .iter()
        .filter(|assoc| !desired_ids.contains(&assoc.tag_id))
        .map(|assoc| assoc.id)
        .collect();

    TagDelta {
        to_insert,
        to_delete,
    }
}
