use chrono::NaiveDateTime;
use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::product::{NewProduct, UpdateProduct};
use crate::forms::{double_option, sanitize_inline_text};

/// Maximum allowed length for a product name.
const NAME_MAX_LEN: u64 = 255;

/// Result type returned by the product form helpers.
pub type ProductFormResult<T> = Result<T, ProductFormError>;

/// Errors that can occur while processing product payloads.
#[derive(Debug, Error)]
pub enum ProductFormError {
    /// Validation failures from the `validator` crate.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    /// The provided name is empty after sanitization.
    #[error("product name cannot be empty")]
    EmptyName,
}

/// Body of a `POST /api/products` request.
#[derive(Debug, Deserialize, Validate)]
pub struct AddProductForm {
    /// Name supplied by the caller.
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub name: String,
    /// Price in the smallest currency unit; must not be negative.
    #[validate(range(min = 0))]
    pub price_cents: i64,
    /// Units in stock; must not be negative.
    #[validate(range(min = 0))]
    pub stock: i32,
    /// Optional category the product belongs to.
    pub category_id: Option<i32>,
    /// Tags to attach on creation.
    #[serde(default)]
    pub tag_ids: Vec<i32>,
}

impl AddProductForm {
    /// Validates and sanitizes the payload into a domain `NewProduct`.
    pub fn into_new_product(self) -> ProductFormResult<NewProduct> {
        self.validate()?;

        let sanitized_name = sanitize_inline_text(&self.name);
        if sanitized_name.is_empty() {
            return Err(ProductFormError::EmptyName);
        }

        let mut payload =
            NewProduct::new(sanitized_name, self.price_cents, self.stock).with_tags(self.tag_ids);
        payload.category_id = self.category_id;

        Ok(payload)
    }
}

/// Body of a `PUT /api/products/{id}` request.
///
/// Every field is optional. `category_id` and `tag_ids` distinguish an
/// absent field from an explicit value: omitting `tag_ids` leaves the
/// product's associations untouched, while `"tag_ids": []` detaches every
/// tag; omitting `category_id` keeps the current category, while
/// `"category_id": null` clears it.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct EditProductForm {
    /// Optional name update.
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub name: Option<String>,
    /// Optional price update; must not be negative.
    #[validate(range(min = 0))]
    pub price_cents: Option<i64>,
    /// Optional stock update; must not be negative.
    #[validate(range(min = 0))]
    pub stock: Option<i32>,
    /// Optional category update; `null` clears the reference.
    #[serde(default, deserialize_with = "double_option")]
    pub category_id: Option<Option<i32>>,
    /// Optional replacement tag set; an empty list detaches every tag.
    pub tag_ids: Option<Vec<i32>>,
}

impl EditProductForm {
    /// Validates and sanitizes the payload into a domain `UpdateProduct`.
    pub fn into_update_product(self, updated_at: NaiveDateTime) -> ProductFormResult<UpdateProduct> {
        self.validate()?;

        let mut update = UpdateProduct::new();
        update.updated_at = updated_at;

        if let Some(name) = self.name {
            let sanitized_name = sanitize_inline_text(&name);
            if sanitized_name.is_empty() {
                return Err(ProductFormError::EmptyName);
            }
            update = update.name(sanitized_name);
        }

        if let Some(price_cents) = self.price_cents {
            update = update.price_cents(price_cents);
        }

        if let Some(stock) = self.stock {
            update = update.stock(stock);
        }

        if let Some(category_id) = self.category_id {
            update = update.category(category_id);
        }

        if let Some(tag_ids) = self.tag_ids {
            update = update.tags(tag_ids);
        }

        Ok(update)
    }
}
