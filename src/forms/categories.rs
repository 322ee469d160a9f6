use chrono::NaiveDateTime;
use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::category::{NewCategory, UpdateCategory};
use crate::forms::sanitize_inline_text;

/// Maximum allowed length for a category name.
const NAME_MAX_LEN: u64 = 128;

/// Result type returned by the category form helpers.
pub type CategoryFormResult<T> = Result<T, CategoryFormError>;

/// Errors that can occur while processing category payloads.
#[derive(Debug, Error)]
pub enum CategoryFormError {
    /// Validation failures from the `validator` crate.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    /// The provided name is empty after sanitization.
    #[error("category name cannot be empty")]
    EmptyName,
}

/// Body of a `POST /api/categories` request.
#[derive(Debug, Deserialize, Validate)]
pub struct AddCategoryForm {
    /// Name supplied by the caller.
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub name: String,
}

impl AddCategoryForm {
    /// Validates and sanitizes the payload into a domain `NewCategory`.
    pub fn into_new_category(self) -> CategoryFormResult<NewCategory> {
        self.validate()?;

        let sanitized_name = sanitize_inline_text(&self.name);
        if sanitized_name.is_empty() {
            return Err(CategoryFormError::EmptyName);
        }

        Ok(NewCategory::new(sanitized_name))
    }
}

/// Body of a `PUT /api/categories/{id}` request.
#[derive(Debug, Deserialize, Validate)]
pub struct EditCategoryForm {
    /// Updated name supplied by the caller.
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub name: String,
}

impl EditCategoryForm {
    /// Validates and sanitizes the payload into a domain `UpdateCategory`.
    pub fn into_update_category(
        self,
        updated_at: NaiveDateTime,
    ) -> CategoryFormResult<UpdateCategory> {
        self.validate()?;

        let sanitized_name = sanitize_inline_text(&self.name);
        if sanitized_name.is_empty() {
            return Err(CategoryFormError::EmptyName);
        }

        Ok(UpdateCategory {
            name: sanitized_name,
            updated_at,
        })
    }
}
