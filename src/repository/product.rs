use std::collections::HashMap;

use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

use crate::domain::product::{
    NewProduct as DomainNewProduct, Product as DomainProduct, ProductListQuery,
    UpdateProduct as DomainUpdateProduct,
};
use crate::domain::product_tag::{ProductTag as DomainProductTag, reconcile_tags};
use crate::domain::tag::Tag as DomainTag;
use crate::models::product::{
    NewProduct as DbNewProduct, Product as DbProduct, UpdateProduct as DbUpdateProduct,
};
use crate::models::product_tag::{NewProductTag as DbNewProductTag, ProductTag as DbProductTag};
use crate::models::tag::Tag as DbTag;
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{DieselRepository, ProductReader, ProductWriter};

impl ProductReader for DieselRepository {
    fn get_product_by_id(&self, id: i32) -> RepositoryResult<Option<DomainProduct>> {
        use crate::schema::products;

        let mut conn = self.conn()?;
        let product = products::table
            .filter(products::id.eq(id))
            .first::<DbProduct>(&mut conn)
            .optional()?;

        if let Some(db_product) = product {
            let mut domain: DomainProduct = db_product.into();
            let mut tag_map = load_tags_for_products(&mut conn, &[domain.id])?;
            domain.tags = tag_map.remove(&domain.id).unwrap_or_default();
            Ok(Some(domain))
        } else {
            Ok(None)
        }
    }

    fn list_products(&self, query: ProductListQuery) -> RepositoryResult<Vec<DomainProduct>> {
        use crate::schema::{product_tags, products};

        let mut conn = self.conn()?;

        let mut items = products::table.into_boxed::<diesel::sqlite::Sqlite>();

        if let Some(term) = query.search.as_ref() {
            let pattern = format!("%{}%", term);
            items = items.filter(products::name.like(pattern));
        }

        if let Some(category_id) = query.category_id {
            items = items.filter(products::category_id.eq(category_id));
        }

        if let Some(tag_id) = query.tag_id {
            let tagged = product_tags::table
                .filter(product_tags::tag_id.eq(tag_id))
                .select(product_tags::product_id);
            items = items.filter(products::id.eq_any(tagged));
        }

        let db_products = items
            .order(products::name.asc())
            .load::<DbProduct>(&mut conn)?;

        if db_products.is_empty() {
            return Ok(Vec::new());
        }

        let product_ids: Vec<i32> = db_products.iter().map(|product| product.id).collect();
        let mut tag_map = load_tags_for_products(&mut conn, &product_ids)?;

        let mut domain_products = Vec::with_capacity(db_products.len());
        for db_product in db_products {
            let mut domain: DomainProduct = db_product.into();
            domain.tags = tag_map.remove(&domain.id).unwrap_or_default();
            domain_products.push(domain);
        }

        Ok(domain_products)
    }

    fn list_product_associations(
        &self,
        product_id: i32,
    ) -> RepositoryResult<Vec<DomainProductTag>> {
        let mut conn = self.conn()?;
        load_associations(&mut conn, product_id)
    }
}

impl ProductWriter for DieselRepository {
    fn create_product(&self, new_product: &DomainNewProduct) -> RepositoryResult<DomainProduct> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        conn.transaction::<_, RepositoryError, _>(|conn| {
            if let Some(category_id) = new_product.category_id {
                ensure_category_exists(conn, category_id)?;
            }

            let mut tag_ids = new_product.tag_ids.clone();
            tag_ids.sort_unstable();
            tag_ids.dedup();
            ensure_tags_exist(conn, &tag_ids)?;

            let db_new = DbNewProduct::from(new_product);
            let created = diesel::insert_into(products::table)
                .values(&db_new)
                .get_result::<DbProduct>(conn)?;

            insert_associations(conn, created.id, &tag_ids)?;

            let mut domain: DomainProduct = created.into();
            let mut tag_map = load_tags_for_products(conn, &[domain.id])?;
            domain.tags = tag_map.remove(&domain.id).unwrap_or_default();

            Ok(domain)
        })
    }

    fn update_product(
        &self,
        product_id: i32,
        updates: &DomainUpdateProduct,
    ) -> RepositoryResult<DomainProduct> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        conn.transaction::<_, RepositoryError, _>(|conn| {
            if let Some(Some(category_id)) = updates.category_id {
                ensure_category_exists(conn, category_id)?;
            }

            let updated = if updates.has_scalar_changes() {
                let db_updates = DbUpdateProduct::from(updates);
                diesel::update(products::table.filter(products::id.eq(product_id)))
                    .set(&db_updates)
                    .get_result::<DbProduct>(conn)?
            } else {
                products::table
                    .filter(products::id.eq(product_id))
                    .first::<DbProduct>(conn)?
            };

            // A patch without a tag field leaves the associations alone; an
            // empty desired set detaches every tag.
            if let Some(desired) = updates.tag_ids.as_deref() {
                ensure_tags_exist(conn, desired)?;
                let current = load_associations(conn, product_id)?;
                apply_tag_delta(conn, product_id, &current, desired)?;
            }

            let mut domain: DomainProduct = updated.into();
            let mut tag_map = load_tags_for_products(conn, &[domain.id])?;
            domain.tags = tag_map.remove(&domain.id).unwrap_or_default();

            Ok(domain)
        })
    }

    fn delete_product(&self, product_id: i32) -> RepositoryResult<()> {
        use crate::schema::{product_tags, products};

        let mut conn = self.conn()?;

        conn.transaction::<_, RepositoryError, _>(|conn| {
            diesel::delete(product_tags::table.filter(product_tags::product_id.eq(product_id)))
                .execute(conn)?;

            let deleted = diesel::delete(products::table.filter(products::id.eq(product_id)))
                .execute(conn)?;
            if deleted == 0 {
                return Err(RepositoryError::NotFound);
            }

            Ok(())
        })
    }
}

fn load_associations(
    conn: &mut SqliteConnection,
    product_id: i32,
) -> RepositoryResult<Vec<DomainProductTag>> {
    use crate::schema::product_tags;

    let rows = product_tags::table
        .filter(product_tags::product_id.eq(product_id))
        .order(product_tags::id.asc())
        .load::<DbProductTag>(conn)?;

    Ok(rows.into_iter().map(DomainProductTag::from).collect())
}

/// Apply the reconciler's delta for `product_id` on the open transaction.
fn apply_tag_delta(
    conn: &mut SqliteConnection,
    product_id: i32,
    current: &[DomainProductTag],
    desired: &[i32],
) -> RepositoryResult<()> {
    use crate::schema::product_tags;

    let delta = reconcile_tags(current, desired);
    if delta.is_empty() {
        return Ok(());
    }

    if !delta.to_delete.is_empty() {
        diesel::delete(product_tags::table.filter(product_tags::id.eq_any(&delta.to_delete)))
            .execute(conn)?;
    }

    insert_associations(conn, product_id, &delta.to_insert)
}

fn insert_associations(
    conn: &mut SqliteConnection,
    product_id: i32,
    tag_ids: &[i32],
) -> RepositoryResult<()> {
    use crate::schema::product_tags;

    if tag_ids.is_empty() {
        return Ok(());
    }

    let rows: Vec<DbNewProductTag> = tag_ids
        .iter()
        .map(|tag_id| DbNewProductTag {
            product_id,
            tag_id: *tag_id,
        })
        .collect();

    diesel::insert_into(product_tags::table)
        .values(&rows)
        .execute(conn)?;

    Ok(())
}

fn ensure_category_exists(conn: &mut SqliteConnection, category_id: i32) -> RepositoryResult<()> {
    use crate::schema::categories;
    use diesel::dsl::{exists, select};

    let found = select(exists(
        categories::table.filter(categories::id.eq(category_id)),
    ))
    .get_result::<bool>(conn)?;

    if !found {
        return Err(RepositoryError::missing_reference("category", category_id));
    }

    Ok(())
}

fn ensure_tags_exist(conn: &mut SqliteConnection, tag_ids: &[i32]) -> RepositoryResult<()> {
    use crate::schema::tags;

    if tag_ids.is_empty() {
        return Ok(());
    }

    let known: Vec<i32> = tags::table
        .filter(tags::id.eq_any(tag_ids))
        .select(tags::id)
        .load::<i32>(conn)?;

    if let Some(missing) = tag_ids.iter().find(|id| !known.contains(id)) {
        return Err(RepositoryError::missing_reference("tag", *missing));
    }

    Ok(())
}

fn load_tags_for_products(
    conn: &mut SqliteConnection,
    product_ids: &[i32],
) -> RepositoryResult<HashMap<i32, Vec<DomainTag>>> {
    use crate::schema::{product_tags, tags};

    if product_ids.is_empty() {
        return Ok(HashMap::new());
    }

    let rows = product_tags::table
        .inner_join(tags::table)
        .filter(product_tags::product_id.eq_any(product_ids))
        .order(tags::name.asc())
        .select((product_tags::product_id, DbTag::as_select()))
        .load::<(i32, DbTag)>(conn)?;

    let mut map: HashMap<i32, Vec<DomainTag>> = HashMap::new();
    for (product_id, tag) in rows {
        map.entry(product_id).or_default().push(tag.into());
    }

    Ok(map)
}
