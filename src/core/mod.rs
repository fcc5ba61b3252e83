//! Core business logic - framework-agnostic product workflow and its collaborators.

/// Ownership checks for member-owned resources
pub mod authorization;
/// Category catalog and product category assignment
pub mod category;
/// Member directory lookups
pub mod member;
/// Product store and the create/update/delete workflow
pub mod product;
