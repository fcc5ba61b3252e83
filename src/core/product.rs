//! Product business logic - Creating, updating and deleting rental listings.
//!
//! The store functions (`find_product_by_id`, `save_product`, `remove_product`)
//! are generic over the connection; the workflow functions (`create_product`,
//! `update_product`, `delete_product`) each run inside one database transaction
//! and either apply all of their effects or none.
//!
//! Product identifiers are generated here, before the first write. `save_product`
//! relies on that: a freshly assigned identifier means insert, an identifier
//! loaded from the store means update, so no existence probe is needed.

use crate::{
    core::{authorization::ensure_owner, category, member::resolve_member},
    entities::{Product, product},
    errors::{Error, Result},
    models::{CreateProductRequest, ProductResponse, UpdateProductRequest},
};
use sea_orm::{ActiveValue, Set, TransactionTrait, prelude::*};
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Retrieves a product by its identifier.
pub async fn find_product_by_id<C>(db: &C, product_id: &str) -> Result<Option<product::Model>>
where
    C: ConnectionTrait,
{
    Product::find_by_id(product_id.to_string())
        .one(db)
        .await
        .map_err(Into::into)
}

/// Persists a product, inserting or updating depending on where its identifier came from.
///
/// # Errors
/// Returns a `Config` error when the identifier was never assigned, or a database
/// error if the write fails.
pub async fn save_product<C>(db: &C, product: product::ActiveModel) -> Result<product::Model>
where
    C: ConnectionTrait,
{
    match product.id {
        ActiveValue::Set(_) => product.insert(db).await.map_err(Into::into),
        ActiveValue::Unchanged(_) => product.update(db).await.map_err(Into::into),
        ActiveValue::NotSet => Err(Error::Config {
            message: "Product identifier must be assigned before saving".to_string(),
        }),
    }
}

/// Deletes a product together with its category associations.
pub async fn remove_product<C>(db: &C, product: product::Model) -> Result<()>
where
    C: ConnectionTrait,
{
    category::delete_product_categories_by_product_id(db, &product.id).await?;
    product.delete(db).await?;
    Ok(())
}

/// Loads the product and the caller, and checks that the caller owns it.
async fn load_owned_product<C>(
    db: &C,
    product_id: &str,
    member_email: &str,
) -> Result<product::Model>
where
    C: ConnectionTrait,
{
    let member = resolve_member(db, member_email).await?;

    let product = find_product_by_id(db, product_id)
        .await?
        .ok_or_else(|| Error::ProductNotFound {
            product_id: product_id.to_string(),
        })?;

    ensure_owner(&member, &product).inspect_err(|_| {
        warn!(
            product_id,
            member_id = %member.id,
            owner_id = %product.member_id,
            "Rejected change by non-owner"
        );
    })?;

    Ok(product)
}

/// Creates a listing owned by the member behind `member_email`.
///
/// # Errors
/// Returns an error if:
/// - No member is registered under `member_email` (`MemberNotFound`)
/// - The member lacks a latitude or longitude (`LocationNotFound`)
/// - A category identifier is not in the catalog (`CategoryNotFound`)
/// - A database operation fails
pub async fn create_product(
    db: &DatabaseConnection,
    request: CreateProductRequest,
    member_email: &str,
) -> Result<ProductResponse> {
    info!(member_email, "Creating product");

    let txn = db.begin().await?;

    let member = resolve_member(&txn, member_email).await?;

    if !member.has_location() {
        warn!(member_id = %member.id, "Member has no location, refusing to create product");
        return Err(Error::LocationNotFound {
            member_id: member.id,
        });
    }

    let now = chrono::Utc::now().naive_utc();
    let new_product = product::ActiveModel {
        id: Set(Uuid::new_v4().to_string()),
        title: Set(request.title),
        content: Set(request.content),
        base_fee: Set(request.base_fee),
        fee_per_day: Set(request.fee_per_day),
        overdue_fee: Set(request.overdue_fee),
        minimum_rental_period: Set(request.minimum_rental_period),
        total_rate_count: Set(0),
        total_rate_score: Set(0),
        view_count: Set(0),
        member_id: Set(member.id),
        created_at: Set(now),
        updated_at: Set(now),
    };

    let product = save_product(&txn, new_product).await?;
    debug!(product_id = %product.id, "Inserted product");

    let categories =
        category::create_product_categories(&txn, &product, &request.category_ids).await?;

    txn.commit().await?;

    info!(product_id = %product.id, categories = categories.len(), "Created product");
    Ok(ProductResponse::from_model(product, categories))
}

/// Applies a patch to a listing owned by the caller.
///
/// Fields absent from `request` keep their stored value. When `category_ids` is
/// present the product's categories are replaced wholesale; otherwise they are
/// left alone. The response always carries the categories now on the product.
///
/// # Errors
/// Returns an error if:
/// - No member is registered under `member_email` (`MemberNotFound`)
/// - The product does not exist (`ProductNotFound`)
/// - The caller does not own the product (`Unauthorized`)
/// - A replacement category is not in the catalog (`CategoryNotFound`)
/// - A database operation fails
pub async fn update_product(
    db: &DatabaseConnection,
    request: UpdateProductRequest,
    product_id: &str,
    member_email: &str,
) -> Result<ProductResponse> {
    info!(product_id, member_email, "Updating product");
    if request.is_empty() {
        debug!(product_id, "Empty patch, only the modification time changes");
    }

    let txn = db.begin().await?;

    // Ownership is settled before any field is touched
    let product = load_owned_product(&txn, product_id, member_email).await?;

    let UpdateProductRequest {
        title,
        content,
        base_fee,
        fee_per_day,
        overdue_fee,
        minimum_rental_period,
        category_ids,
    } = request;

    let mut patched: product::ActiveModel = product.into();
    if let Some(title) = title {
        patched.title = Set(title);
    }
    if let Some(content) = content {
        patched.content = Set(content);
    }
    if let Some(base_fee) = base_fee {
        patched.base_fee = Set(base_fee);
    }
    if let Some(fee_per_day) = fee_per_day {
        patched.fee_per_day = Set(fee_per_day);
    }
    if let Some(overdue_fee) = overdue_fee {
        patched.overdue_fee = Set(overdue_fee);
    }
    if let Some(minimum_rental_period) = minimum_rental_period {
        patched.minimum_rental_period = Set(minimum_rental_period);
    }
    patched.updated_at = Set(chrono::Utc::now().naive_utc());

    let product = save_product(&txn, patched).await?;

    let categories = if let Some(category_ids) = category_ids {
        category::delete_product_categories_by_product_id(&txn, &product.id).await?;
        category::create_product_categories(&txn, &product, &category_ids).await?
    } else {
        category::find_product_categories(&txn, &product.id).await?
    };

    txn.commit().await?;

    info!(product_id = %product.id, "Updated product");
    Ok(ProductResponse::from_model(product, categories))
}

/// Deletes a listing owned by the caller.
///
/// # Errors
/// Returns an error if:
/// - No member is registered under `member_email` (`MemberNotFound`)
/// - The product does not exist (`ProductNotFound`)
/// - The caller does not own the product (`Unauthorized`)
/// - A database operation fails
pub async fn delete_product(
    db: &DatabaseConnection,
    product_id: &str,
    member_email: &str,
) -> Result<()> {
    info!(product_id, member_email, "Deleting product");

    let txn = db.begin().await?;

    let product = load_owned_product(&txn, product_id, member_email).await?;
    remove_product(&txn, product).await?;

    txn.commit().await?;

    info!(product_id, "Deleted product");
    Ok(())
}
