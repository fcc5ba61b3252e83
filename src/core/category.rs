//! Category assignment - Tags products with catalog categories.
//!
//! Associations are created in bulk for a product and deleted in bulk by product
//! identifier. Every function is generic over the connection so the product
//! workflow can run it inside its own transaction; an unknown category aborts
//! the call before anything after it is written, and the caller's rollback
//! discards what was written before it.

use crate::{
    config::categories::CategoryConfig,
    entities::{Category, ProductCategory, category, product, product_category},
    errors::{Error, Result},
    models::CategoryDescriptor,
};
use sea_orm::{QueryOrder, Set, prelude::*};
use std::collections::HashSet;
use tracing::debug;
use uuid::Uuid;

/// Retrieves a catalog category by identifier.
pub async fn get_category_by_id<C>(db: &C, category_id: &str) -> Result<Option<category::Model>>
where
    C: ConnectionTrait,
{
    Category::find_by_id(category_id.to_string())
        .one(db)
        .await
        .map_err(Into::into)
}

/// Retrieves the whole catalog, ordered by title.
pub async fn get_all_categories<C>(db: &C) -> Result<Vec<category::Model>>
where
    C: ConnectionTrait,
{
    Category::find()
        .order_by_asc(category::Column::Title)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Tags `product` with the given categories and returns their descriptors.
///
/// Descriptors come back in the order of `category_ids`; repeated identifiers
/// keep only their first occurrence.
///
/// # Errors
/// Returns `CategoryNotFound` for an identifier missing from the catalog, or a
/// database error if an insert fails.
pub async fn create_product_categories<C>(
    db: &C,
    product: &product::Model,
    category_ids: &[String],
) -> Result<Vec<CategoryDescriptor>>
where
    C: ConnectionTrait,
{
    let mut seen = HashSet::new();
    let mut descriptors = Vec::with_capacity(category_ids.len());

    for category_id in category_ids.iter().filter(|id| seen.insert(*id)) {
        let category = get_category_by_id(db, category_id)
            .await?
            .ok_or_else(|| Error::CategoryNotFound {
                category_id: category_id.clone(),
            })?;

        let position = i32::try_from(descriptors.len()).map_err(|_| Error::Config {
            message: "Too many categories for one product".to_string(),
        })?;

        product_category::ActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            product_id: Set(product.id.clone()),
            category_id: Set(category.id.clone()),
            position: Set(position),
        }
        .insert(db)
        .await?;

        descriptors.push(CategoryDescriptor {
            category_id: category.id,
            title: category.title,
        });
    }

    debug!(
        product_id = %product.id,
        count = descriptors.len(),
        "Created product categories"
    );
    Ok(descriptors)
}

/// Removes every category association of a product, returning how many were removed.
pub async fn delete_product_categories_by_product_id<C>(db: &C, product_id: &str) -> Result<u64>
where
    C: ConnectionTrait,
{
    let result = ProductCategory::delete_many()
        .filter(product_category::Column::ProductId.eq(product_id))
        .exec(db)
        .await?;

    debug!(product_id, removed = result.rows_affected, "Deleted product categories");
    Ok(result.rows_affected)
}

/// Lists the categories currently on a product, in the order they were supplied.
pub async fn find_product_categories<C>(db: &C, product_id: &str) -> Result<Vec<CategoryDescriptor>>
where
    C: ConnectionTrait,
{
    let rows = ProductCategory::find()
        .filter(product_category::Column::ProductId.eq(product_id))
        .order_by_asc(product_category::Column::Position)
        .find_also_related(Category)
        .all(db)
        .await?;

    Ok(rows
        .into_iter()
        .filter_map(|(_, category)| category)
        .map(|category| CategoryDescriptor {
            category_id: category.id,
            title: category.title,
        })
        .collect())
}

/// Inserts catalog entries that are not stored yet, returning how many were added.
///
/// Existing categories keep their stored title.
pub async fn seed_categories<C>(db: &C, catalog: &[CategoryConfig]) -> Result<usize>
where
    C: ConnectionTrait,
{
    let mut inserted = 0;

    for entry in catalog {
        if get_category_by_id(db, &entry.id).await?.is_some() {
            continue;
        }

        category::ActiveModel {
            id: Set(entry.id.clone()),
            title: Set(entry.title.trim().to_string()),
        }
        .insert(db)
        .await?;
        inserted += 1;
    }

    Ok(inserted)
}
