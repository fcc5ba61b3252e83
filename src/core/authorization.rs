//! Ownership checks for member-owned resources.
//!
//! Anything with a single owning member implements [`Owned`]; [`ensure_owner`]
//! is the one place the comparison happens.

use crate::{
    entities::{member, product},
    errors::{Error, Result},
};

/// A resource owned by exactly one member.
pub trait Owned {
    /// Identifier of the resource itself, used in error reports.
    fn resource_id(&self) -> &str;

    /// Identifier of the owning member.
    fn owner_id(&self) -> &str;
}

impl Owned for product::Model {
    fn resource_id(&self) -> &str {
        &self.id
    }

    fn owner_id(&self) -> &str {
        &self.member_id
    }
}

/// Fails with `Unauthorized` unless `member` owns `resource`.
pub fn ensure_owner<R>(member: &member::Model, resource: &R) -> Result<()>
where
    R: Owned + ?Sized,
{
    if member.id == resource.owner_id() {
        Ok(())
    } else {
        Err(Error::Unauthorized {
            member_id: member.id.clone(),
            product_id: resource.resource_id().to_string(),
        })
    }
}
