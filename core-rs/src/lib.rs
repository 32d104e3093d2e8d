//! # hbk-roles
//!
//! Role and group membership checks for a user record supplied by an
//! external user directory. Calling code asks "is this user an admin?",
//! "is this user in role X?" or "is this user in any of roles X, Y, Z?"
//! without repeating group lookups at every call site.
//!
//! ## Key Features
//!
//! - `RoleChecker`: immutable query object over any [`RoleSource`]
//! - Super role that satisfies every role query
//! - `RolePolicy` YAML files to rename the sentinel roles and opt in to
//!   all-of `is_in_role` checks
//! - One-or-many role arguments through [`RoleNames`]
//!
//! ```
//! use hbk_roles::{RoleChecker, UserRecord};
//!
//! let checker = RoleChecker::new(UserRecord::new(["admin"]));
//! assert!(checker.is_admin());
//! assert!(!checker.is_super());
//! ```

pub mod errors;
pub mod policy;
pub mod rbac;
pub mod record;

pub use errors::{HbkError, Result};
pub use policy::{InRoleMode, PolicySpec, RolePolicy};
pub use rbac::{RoleChecker, RoleNames};
pub use record::{RecordFormat, RoleSource, UserRecord};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
