//! RBAC (Role-Based Access Control) module
//!
//! Provides role and group membership checks over a wrapped user record.

pub mod role_checker;
pub mod role_names;

pub use role_checker::RoleChecker;
pub use role_names::RoleNames;
