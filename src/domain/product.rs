use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::tag::Tag;

/// Domain representation of a catalog product.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Product {
    /// Unique identifier of the product.
    pub id: i32,
    /// Human-readable name of the product.
    pub name: String,
    /// Price represented in the smallest currency unit (for example cents).
    pub price_cents: i64,
    /// Units currently in stock.
    pub stock: i32,
    /// Optional reference to the owning category.
    pub category_id: Option<i32>,
    /// Tags currently attached to the product.
    #[serde(default)]
    pub tags: Vec<Tag>,
    /// Timestamp for when the product record was created.
    pub created_at: NaiveDateTime,
    /// Timestamp for the last update to the product record.
    pub updated_at: NaiveDateTime,
}

/// Payload required to insert a new product.
#[derive(Debug, Clone)]
pub struct NewProduct {
    /// Human-readable name of the product.
    pub name: String,
    /// Price represented in the smallest currency unit.
    pub price_cents: i64,
    /// Units currently in stock.
    pub stock: i32,
    /// Optional reference to the owning category.
    pub category_id: Option<i32>,
    /// Tags to attach on creation, deduplicated.
    pub tag_ids: Vec<i32>,
}

impl NewProduct {
    /// Build a new product payload with the supplied details.
    pub fn new(name: impl Into<String>, price_cents: i64, stock: i32) -> Self {
        Self {
            name: name.into(),
            price_cents,
            stock,
            category_id: None,
            tag_ids: Vec::new(),
        }
    }

    /// Place the product in a category.
    pub fn with_category(mut self, category_id: i32) -> Self {
        self.category_id = Some(category_id);
        self
    }

    /// Attach tags on creation. Duplicate ids collapse to one association.
    pub fn with_tags(mut self, tag_ids: impl IntoIterator<Item = i32>) -> Self {
        self.tag_ids = tag_ids.into_iter().collect();
        self.tag_ids.sort_unstable();
        self.tag_ids.dedup();
        self
    }
}

/// Patch data applied when updating an existing product.
///
/// `tag_ids` carries the distinction between "leave associations alone"
/// (`None`) and "replace with exactly this set, possibly empty" (`Some`).
#[derive(Debug, Clone)]
pub struct UpdateProduct {
    /// Optional name update.
    pub name: Option<String>,
    /// Optional price update in the smallest currency unit.
    pub price_cents: Option<i64>,
    /// Optional stock update.
    pub stock: Option<i32>,
    /// Optional category update, using inner `None` to clear the reference.
    pub category_id: Option<Option<i32>>,
    /// Desired tag set; `None` leaves current associations untouched.
    pub tag_ids: Option<Vec<i32>>,
    /// Timestamp captured when the patch was created.
    pub updated_at: NaiveDateTime,
}

impl Default for UpdateProduct {
    fn default() -> Self {
        Self::new()
    }
}

impl UpdateProduct {
    /// Create a new patch object with no changes applied yet.
    pub fn new() -> Self {
        let now = chrono::Local::now().naive_utc();
        Self {
            name: None,
            price_cents: None,
            stock: None,
            category_id: None,
            tag_ids: None,
            updated_at: now,
        }
    }

    /// Update the product name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Update the product price.
    pub fn price_cents(mut self, price_cents: i64) -> Self {
        self.price_cents = Some(price_cents);
        self
    }

    /// Update the stock count.
    pub fn stock(mut self, stock: i32) -> Self {
        self.stock = Some(stock);
        self
    }

    /// Update the category reference, using `None` to clear it.
    pub fn category(mut self, category_id: Option<i32>) -> Self {
        self.category_id = Some(category_id);
        self
    }

    /// Replace the tag set. An empty iterator detaches every tag.
    pub fn tags(mut self, tag_ids: impl IntoIterator<Item = i32>) -> Self {
        let mut ids: Vec<i32> = tag_ids.into_iter().collect();
        ids.sort_unstable();
        ids.dedup();
        self.tag_ids = Some(ids);
        self
    }

    /// Whether the patch carries any scalar column change.
    pub fn has_scalar_changes(&self) -> bool {
        self.name.is_some()
            || self.price_cents.is_some()
            || self.stock.is_some()
            || self.category_id.is_some()
    }
}

/// Query definition used to list products.
#[derive(Debug, Clone, Default)]
pub struct ProductListQuery {
    /// Optional case-insensitive substring search on the name.
    pub search: Option<String>,
    /// Restrict the results to products in this category.
    pub category_id: Option<i32>,
    /// Restrict the results to products carrying this tag.
    pub tag_id: Option<i32>,
}

impl ProductListQuery {
    /// Construct a query that targets all products.
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter the results by a search term applied to the product name.
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    /// Filter the results to products belonging to `category_id`.
    pub fn category(mut self, category_id: i32) -> Self {
        self.category_id = Some(category_id);
        self
    }

    /// Filter the results to products tagged with `tag_id`.
    pub fn tag(mut self, tag_id: i32) -> Self {
        self.tag_id = Some(tag_id);
        self
    }
}
