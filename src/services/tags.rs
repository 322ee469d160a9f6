use chrono::Utc;
use serde::Deserialize;

use crate::domain::tag::{Tag, TagListQuery};
use crate::forms::tags::{AddTagForm, EditTagForm};
use crate::repository::{TagReader, TagWriter};
use crate::services::{ServiceError, ServiceResult};

/// Query parameters accepted by the tags listing.
#[derive(Debug, Default, Deserialize)]
pub struct TagsQuery {
    /// Optional case-insensitive search applied to tag names.
    pub search: Option<String>,
}

/// Lists tags, optionally filtered by a search term.
pub fn list_tags<R>(repo: &R, query: TagsQuery) -> ServiceResult<Vec<Tag>>
where
    R: TagReader + ?Sized,
{
    let mut list_query = TagListQuery::new();

    if let Some(term) = query.search.as_ref() {
        list_query = list_query.search(term);
    }

    repo.list_tags(list_query).map_err(ServiceError::from)
}

/// Fetches a single tag by id.
pub fn get_tag<R>(repo: &R, tag_id: i32) -> ServiceResult<Tag>
where
    R: TagReader + ?Sized,
{
    repo.get_tag_by_id(tag_id)
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)
}

/// Creates a new tag.
pub fn create_tag<R>(repo: &R, form: AddTagForm) -> ServiceResult<Tag>
where
    R: TagWriter + ?Sized,
{
    let new_tag = form
        .into_new_tag()
        .map_err(|err| ServiceError::Validation(err.to_string()))?;

    repo.create_tag(&new_tag).map_err(ServiceError::from)
}

/// Updates an existing tag.
pub fn modify_tag<R>(repo: &R, tag_id: i32, form: EditTagForm) -> ServiceResult<Tag>
where
    R: TagWriter + ?Sized,
{
    let update = form
        .into_update_tag(Utc::now().naive_utc())
        .map_err(|err| ServiceError::Validation(err.to_string()))?;

    repo.update_tag(tag_id, &update).map_err(ServiceError::from)
}

/// Deletes a tag. Products previously carrying it are left intact.
pub fn remove_tag<R>(repo: &R, tag_id: i32) -> ServiceResult<()>
where
    R: TagWriter + ?Sized,
{
    repo.delete_tag(tag_id).map_err(ServiceError::from)
}
