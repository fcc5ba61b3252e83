//! Member entity - The registered users who own rental listings.
//!
//! Members are created by the registration flow and are read-only here.
//! The `email` column is the login key the workflow resolves callers with.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Member database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "members")]
pub struct Model {
    /// Stable unique identifier (UUID string)
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    /// Login email, unique across members
    #[sea_orm(unique)]
    pub email: String,
    /// Name shown to other members
    pub display_name: String,
    /// Latitude of the member's home location, if known
    pub latitude: Option<f64>,
    /// Longitude of the member's home location, if known
    pub longitude: Option<f64>,
}

impl Model {
    /// Returns true when both coordinates are on record.
    #[must_use]
    pub const fn has_location(&self) -> bool {
        self.latitude.is_some() && self.longitude.is_some()
    }
}

/// Defines relationships between Member and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One member owns many products
    #[sea_orm(has_many = "super::product::Entity")]
    Products,
}

impl Related<super::product::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Products.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
