use std::collections::HashMap;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::domain::category::{Category, CategoryListQuery};
use crate::domain::product::{Product, ProductListQuery};
use crate::forms::products::{AddProductForm, EditProductForm};
use crate::repository::{CategoryReader, ProductReader, ProductWriter};
use crate::services::{ServiceError, ServiceResult};

/// Query parameters accepted by the products listing.
#[derive(Debug, Default, Deserialize)]
pub struct ProductsQuery {
    /// Optional search string applied to product names.
    pub search: Option<String>,
    /// Restrict the results to products in this category.
    pub category_id: Option<i32>,
    /// Restrict the results to products carrying this tag.
    pub tag_id: Option<i32>,
}

/// Lists products with their category and tag names joined in.
pub fn list_products<R>(repo: &R, query: ProductsQuery) -> ServiceResult<Vec<ProductView>>
where
    R: ProductReader + CategoryReader + ?Sized,
{
    let ProductsQuery {
        search,
        category_id,
        tag_id,
    } = query;

    let mut list_query = ProductListQuery::new();

    if let Some(term) = search.as_ref() {
        list_query = list_query.search(term);
    }

    if let Some(category_id) = category_id {
        list_query = list_query.category(category_id);
    }

    if let Some(tag_id) = tag_id {
        list_query = list_query.tag(tag_id);
    }

    let items = repo.list_products(list_query).map_err(ServiceError::from)?;
    let categories = repo
        .list_categories(CategoryListQuery::new())
        .map_err(ServiceError::from)?;

    let category_lookup: HashMap<i32, &Category> = categories
        .iter()
        .map(|category| (category.id, category))
        .collect();

    Ok(items
        .into_iter()
        .map(|product| ProductView::from_product(product, &category_lookup))
        .collect())
}

/// Fetches a single product with its category and tag names joined in.
pub fn get_product<R>(repo: &R, product_id: i32) -> ServiceResult<ProductView>
where
    R: ProductReader + CategoryReader + ?Sized,
{
    let product = repo
        .get_product_by_id(product_id)
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)?;

    with_category_name(repo, product)
}

/// Creates a product together with its initial tag associations.
///
/// The repository applies the product insert and the association inserts as
/// one transaction, so a dangling tag id rolls the whole creation back.
pub fn create_product<R>(repo: &R, form: AddProductForm) -> ServiceResult<ProductView>
where
    R: ProductWriter + CategoryReader + ?Sized,
{
    let payload = form
        .into_new_product()
        .map_err(|err| ServiceError::Validation(err.to_string()))?;

    let created = repo.create_product(&payload).map_err(ServiceError::from)?;

    with_category_name(repo, created)
}

/// Applies a patch to a product, reconciling its tag set when requested.
///
/// A payload without a `tag_ids` field leaves the associations untouched;
/// an explicit empty list detaches every tag.
pub fn modify_product<R>(
    repo: &R,
    product_id: i32,
    form: EditProductForm,
) -> ServiceResult<ProductView>
where
    R: ProductWriter + CategoryReader + ?Sized,
{
    let update = form
        .into_update_product(Utc::now().naive_utc())
        .map_err(|err| ServiceError::Validation(err.to_string()))?;

    let updated = repo
        .update_product(product_id, &update)
        .map_err(ServiceError::from)?;

    with_category_name(repo, updated)
}

/// Deletes a product along with all of its tag associations.
pub fn remove_product<R>(repo: &R, product_id: i32) -> ServiceResult<()>
where
    R: ProductWriter + ?Sized,
{
    repo.delete_product(product_id).map_err(ServiceError::from)
}

fn with_category_name<R>(repo: &R, product: Product) -> ServiceResult<ProductView>
where
    R: CategoryReader + ?Sized,
{
    let category = match product.category_id {
        Some(category_id) => repo
            .get_category_by_id(category_id)
            .map_err(ServiceError::from)?,
        None => None,
    };

    let mut lookup = HashMap::new();
    if let Some(category) = category.as_ref() {
        lookup.insert(category.id, category);
    }

    Ok(ProductView::from_product(product, &lookup))
}

/// View model exposed by the product endpoints.
#[derive(Debug, Serialize)]
pub struct ProductView {
    pub id: i32,
    pub name: String,
    pub price_cents: i64,
    pub stock: i32,
    pub category_id: Option<i32>,
    pub category_name: Option<String>,
    pub tags: Vec<TagView>,
    pub updated_at: chrono::NaiveDateTime,
}

impl ProductView {
    fn from_product(product: Product, category_lookup: &HashMap<i32, &Category>) -> Self {
        let Product {
            id,
            name,
            price_cents,
            stock,
            category_id,
            tags,
            updated_at,
            ..
        } = product;

        let category_name = category_id
            .and_then(|category_id| category_lookup.get(&category_id))
            .map(|category| category.name.clone());

        let tags = tags
            .into_iter()
            .map(|tag| TagView {
                id: tag.id,
                name: tag.name,
            })
            .collect();

        Self {
            id,
            name,
            price_cents,
            stock,
            category_id,
            category_name,
            tags,
            updated_at,
        }
    }
}

/// View model for a tag attached to a product.
#[derive(Debug, Serialize)]
pub struct TagView {
    pub id: i32,
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    use crate::domain::tag::Tag;
    use crate::repository::errors::RepositoryError;
    use crate::repository::mock::MockProductRepository;

    fn fixed_datetime() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .unwrap_or_default()
    }

    fn sample_category(id: i32, name: &str) -> Category {
        Category {
            id,
            name: name.to_string(),
            created_at: fixed_datetime(),
            updated_at: fixed_datetime(),
        }
    }

    fn sample_tag(id: i32, name: &str) -> Tag {
        Tag {
            id,
            name: name.to_string(),
            created_at: fixed_datetime(),
            updated_at: fixed_datetime(),
        }
    }

    fn sample_product(id: i32, name: &str, category_id: Option<i32>, tags: Vec<Tag>) -> Product {
        Product {
            id,
            name: name.to_string(),
            price_cents: 1999,
            stock: 4,
            category_id,
            tags,
            created_at: fixed_datetime(),
            updated_at: fixed_datetime(),
        }
    }

    #[test]
    fn list_products_joins_category_and_tag_names() {
        let mut repo = MockProductRepository::new();

        repo.expect_list_products().times(1).returning(|_| {
            Ok(vec![sample_product(
                1,
                "Lantern",
                Some(2),
                vec![sample_tag(5, "outdoor")],
            )])
        });
        repo.expect_list_categories()
            .times(1)
            .returning(|_| Ok(vec![sample_category(2, "Garden")]));

        let views = list_products(&repo, ProductsQuery::default()).expect("expected success");

        assert_eq!(views.len(), 1);
        assert_eq!(views[0].category_name.as_deref(), Some("Garden"));
        assert_eq!(views[0].tags.len(), 1);
        assert_eq!(views[0].tags[0].name, "outdoor");
    }

    #[test]
    fn get_product_maps_absence_to_not_found() {
        let mut repo = MockProductRepository::new();

        repo.expect_get_product_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let result = get_product(&repo, 42);

        assert!(matches!(result, Err(ServiceError::NotFound)));
    }

    #[test]
    fn create_product_passes_deduplicated_tags() {
        let mut repo = MockProductRepository::new();

        repo.expect_create_product()
            .times(1)
            .withf(|payload| {
                assert_eq!(payload.name, "Solar Lantern");
                assert_eq!(payload.tag_ids, vec![1, 2, 3]);
                true
            })
            .returning(|_| {
                Ok(sample_product(
                    7,
                    "Solar Lantern",
                    None,
                    vec![sample_tag(1, "solar"), sample_tag(2, "garden")],
                ))
            });

        let form = AddProductForm {
            name: " Solar  Lantern ".to_string(),
            price_cents: 1999,
            stock: 4,
            category_id: None,
            tag_ids: vec![1, 2, 2, 3],
        };

        let view = create_product(&repo, form).expect("expected success");

        assert_eq!(view.id, 7);
        assert!(view.category_name.is_none());
        assert_eq!(view.tags.len(), 2);
    }

    #[test]
    fn create_product_maps_dangling_tag_to_validation() {
        let mut repo = MockProductRepository::new();

        repo.expect_create_product()
            .times(1)
            .returning(|_| Err(RepositoryError::missing_reference("tag", 2)));

        let form = AddProductForm {
            name: "Lantern".to_string(),
            price_cents: 100,
            stock: 1,
            category_id: None,
            tag_ids: vec![1, 2, 2, 3],
        };

        let result = create_product(&repo, form);

        assert!(matches!(result, Err(ServiceError::Validation(_))));
    }

    #[test]
    fn modify_product_forwards_the_desired_tag_set() {
        let mut repo = MockProductRepository::new();

        repo.expect_update_product()
            .times(1)
            .withf(|product_id, updates| {
                assert_eq!(*product_id, 7);
                assert_eq!(updates.tag_ids.as_deref(), Some(&[2, 3][..]));
                assert!(updates.name.is_none());
                true
            })
            .returning(|_, _| {
                Ok(sample_product(
                    7,
                    "Lantern",
                    None,
                    vec![sample_tag(2, "garden"), sample_tag(3, "patio")],
                ))
            });

        let form: EditProductForm =
            serde_json::from_str(r#"{"tag_ids": [2, 3]}"#).expect("valid payload");

        let view = modify_product(&repo, 7, form).expect("expected success");

        assert_eq!(view.tags.len(), 2);
    }

    #[test]
    fn modify_product_without_tag_field_leaves_associations_alone() {
        let mut repo = MockProductRepository::new();

        repo.expect_update_product()
            .times(1)
            .withf(|_, updates| updates.tag_ids.is_none())
            .returning(|_, _| Ok(sample_product(7, "Lamp", None, Vec::new())));

        let form: EditProductForm =
            serde_json::from_str(r#"{"name": "Lamp"}"#).expect("valid payload");

        modify_product(&repo, 7, form).expect("expected success");
    }

    #[test]
    fn modify_product_maps_racing_duplicate_to_conflict() {
        let mut repo = MockProductRepository::new();

        repo.expect_update_product()
            .times(1)
            .returning(|_, _| Err(RepositoryError::Conflict));

        let form: EditProductForm =
            serde_json::from_str(r#"{"tag_ids": [2]}"#).expect("valid payload");

        let result = modify_product(&repo, 7, form);

        assert!(matches!(result, Err(ServiceError::Conflict)));
    }

    #[test]
    fn remove_product_propagates_not_found() {
        let mut repo = MockProductRepository::new();

        repo.expect_delete_product()
            .times(1)
            .returning(|_| Err(RepositoryError::NotFound));

        let result = remove_product(&repo, 9);

        assert!(matches!(result, Err(ServiceError::NotFound)));
    }
}
