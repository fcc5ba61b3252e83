//! Product entity - A rental listing owned by exactly one member.
//!
//! The identifier is assigned by the product workflow before the first write,
//! never by the database. Rating and view counters start at zero and are only
//! touched by collaborators outside the product workflow.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Product database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "products")]
pub struct Model {
    /// Unique identifier (UUID string) generated at creation
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    /// Listing title
    pub title: String,
    /// Free-text description
    pub content: String,
    /// Flat fee charged once per rental
    pub base_fee: i32,
    /// Fee charged per rented day
    pub fee_per_day: i32,
    /// Fee charged per day past the return date
    pub overdue_fee: i32,
    /// Minimum number of days a rental must last
    pub minimum_rental_period: i32,
    /// Number of ratings received
    pub total_rate_count: i32,
    /// Sum of all rating scores
    pub total_rate_score: i32,
    /// Number of times the listing was viewed
    pub view_count: i32,
    /// Owning member, set once at creation
    pub member_id: String,
    /// When the product was created
    pub created_at: DateTime,
    /// When the product was last modified
    pub updated_at: DateTime,
}

/// Defines relationships between Product and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each product belongs to one member
    #[sea_orm(
        belongs_to = "super::member::Entity",
        from = "Column::MemberId",
        to = "super::member::Column::Id"
    )]
    Member,
    /// One product has many category associations
    #[sea_orm(has_many = "super::product_category::Entity")]
    ProductCategories,
}

impl Related<super::member::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Member.def()
    }
}

impl Related<super::product_category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProductCategories.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
