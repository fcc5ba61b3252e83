//! Member directory - Resolves authenticated identities to member records.
//!
//! Members are registered elsewhere; this module only reads them.

use crate::{
    entities::{Member, member},
    errors::{Error, Result},
};
use sea_orm::prelude::*;

/// Finds a member by login email, returning None if nobody is registered under it.
pub async fn find_member_by_email<C>(db: &C, email: &str) -> Result<Option<member::Model>>
where
    C: ConnectionTrait,
{
    Member::find()
        .filter(member::Column::Email.eq(email))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Resolves a caller identity to a member, failing with `MemberNotFound`.
pub async fn resolve_member<C>(db: &C, email: &str) -> Result<member::Model>
where
    C: ConnectionTrait,
{
    find_member_by_email(db, email)
        .await?
        .ok_or_else(|| Error::MemberNotFound {
            email: email.to_string(),
        })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::*;

    #[tokio::test]
    async fn test_find_member_by_email() -> Result<()> {
        let db = setup_test_db().await?;
        let member = create_test_member(&db, "owner@test.com").await?;

        let found = find_member_by_email(&db, "owner@test.com").await?;
        assert_eq!(found.unwrap().id, member.id);

        let not_found = find_member_by_email(&db, "nobody@test.com").await?;
        assert!(not_found.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn test_resolve_member_not_found() -> Result<()> {
        let db = setup_test_db().await?;

        let result = resolve_member(&db, "nobody@test.com").await;
        assert!(matches!(
            result.unwrap_err(),
            Error::MemberNotFound { email } if email == "nobody@test.com"
        ));

        Ok(())
    }

    #[tokio::test]
    async fn test_member_location_flags() -> Result<()> {
        let db = setup_test_db().await?;
        let located = create_test_member(&db, "located@test.com").await?;
        let unlocated = create_member_without_location(&db, "unlocated@test.com").await?;

        assert!(located.has_location());
        assert!(!unlocated.has_location());

        Ok(())
    }
}
