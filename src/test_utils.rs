//! Shared test utilities for the product workflow.
//!
//! This module provides common helper functions for setting up test databases
//! and creating test members, categories and products with sensible defaults.

use crate::{
    config::categories::CategoryConfig,
    core::{category, product},
    entities,
    errors::Result,
    models::{CreateProductRequest, ProductResponse},
};
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};

/// Catalog id of "Hiking"
pub const HIKING_ID: &str = "318baf68-71c8-410c-8e1d-21852fbf088e";
/// Catalog id of "Camping"
pub const CAMPING_ID: &str = "7c08b19f-5846-4b6b-a11e-861d004f8151";
/// Catalog id of "Fishing"
pub const FISHING_ID: &str = "a3c5e7f1-2b4d-4c6e-8f0a-1b3d5f7a9c2e";

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// The three categories every test database is seeded with.
pub fn test_catalog() -> Vec<CategoryConfig> {
    vec![
        CategoryConfig {
            id: HIKING_ID.to_string(),
            title: "Hiking".to_string(),
        },
        CategoryConfig {
            id: CAMPING_ID.to_string(),
            title: "Camping".to_string(),
        },
        CategoryConfig {
            id: FISHING_ID.to_string(),
            title: "Fishing".to_string(),
        },
    ]
}

/// Inserts a member directly, standing in for the registration flow.
pub async fn insert_member(
    db: &DatabaseConnection,
    email: &str,
    latitude: Option<f64>,
    longitude: Option<f64>,
) -> Result<entities::member::Model> {
    entities::member::ActiveModel {
        id: Set(uuid::Uuid::new_v4().to_string()),
        email: Set(email.to_string()),
        display_name: Set(email.split('@').next().unwrap_or(email).to_string()),
        latitude: Set(latitude),
        longitude: Set(longitude),
    }
    .insert(db)
    .await
    .map_err(Into::into)
}

/// Creates a test member located in Seoul.
pub async fn create_test_member(
    db: &DatabaseConnection,
    email: &str,
) -> Result<entities::member::Model> {
    insert_member(db, email, Some(37.579_349), Some(126.917_949)).await
}

/// Creates a test member with no location on record.
pub async fn create_member_without_location(
    db: &DatabaseConnection,
    email: &str,
) -> Result<entities::member::Model> {
    insert_member(db, email, None, None).await
}

/// Builds a creation request with fixed fees and the given categories.
///
/// # Defaults
/// * `base_fee`: 1000, `fee_per_day`: 500, `overdue_fee`: 1000
/// * `minimum_rental_period`: 3
pub fn sample_create_request(category_ids: Vec<String>) -> CreateProductRequest {
    CreateProductRequest {
        title: "Four person tent".to_string(),
        content: "Waterproof, pitched in five minutes.".to_string(),
        base_fee: 1000,
        fee_per_day: 500,
        overdue_fee: 1000,
        minimum_rental_period: 3,
        category_ids,
    }
}

/// Sets up a database with the test catalog and one located member.
/// Returns (db, member) for common test scenarios.
pub async fn setup_with_member() -> Result<(DatabaseConnection, entities::member::Model)> {
    let db = setup_test_db().await?;
    category::seed_categories(&db, &test_catalog()).await?;
    let member = create_test_member(&db, "owner@test.com").await?;
    Ok((db, member))
}

/// Sets up a product created through the workflow, tagged Hiking then Camping.
/// Returns (db, owner, product) for update and delete tests.
pub async fn setup_with_product()
-> Result<(DatabaseConnection, entities::member::Model, ProductResponse)> {
    let (db, member) = setup_with_member().await?;
    let request = sample_create_request(vec![HIKING_ID.to_string(), CAMPING_ID.to_string()]);
    let product = product::create_product(&db, request, &member.email).await?;
    Ok((db, member, product))
}

/// Sets up a product row inserted through the store, with no categories.
pub async fn setup_with_bare_product() -> Result<(
    DatabaseConnection,
    entities::member::Model,
    entities::product::Model,
)> {
    let (db, member) = setup_with_member().await?;
    let now = chrono::Utc::now().naive_utc();
    let bare = entities::product::ActiveModel {
        id: Set(uuid::Uuid::new_v4().to_string()),
        title: Set("Kayak".to_string()),
        content: Set("Single seat".to_string()),
        base_fee: Set(2000),
        fee_per_day: Set(1000),
        overdue_fee: Set(1500),
        minimum_rental_period: Set(1),
        total_rate_count: Set(0),
        total_rate_score: Set(0),
        view_count: Set(0),
        member_id: Set(member.id.clone()),
        created_at: Set(now),
        updated_at: Set(now),
    };
    let product = product::save_product(&db, bare).await?;
    Ok((db, member, product))
}
