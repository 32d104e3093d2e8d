//! Role Checker - membership queries over one user record
//!
//! Each question comes in two forms:
//! - a synchronous predicate (`is_admin`, `is_super`, `has_group`,
//!   `has_any_group`) returning `bool`
//! - a query (`query_admin`, `query_super`, `is_in_role`, `is_in_any_role`,
//!   `get_roles`) returning `Result`, for callers that expect an error slot
//!
//! Queries never produce an error today; the `Result` is always `Ok`.
//!
//! A user holding the policy's super role (default `"super"`) satisfies every
//! role query, but not `has_group`/`has_any_group`, which check groups
//! literally.

use tracing::{debug, trace};

use super::role_names::RoleNames;
use crate::errors::Result;
use crate::policy::{InRoleMode, RolePolicy};
use crate::record::RoleSource;

/// Immutable role checker wrapping one record source
///
/// # Example
/// ```
/// use hbk_roles::{RoleChecker, UserRecord};
///
/// let record = UserRecord::new(["editor", "super"]).with_all_roles(["editor", "super", "viewer"]);
/// let checker = RoleChecker::new(&record);
///
/// assert!(checker.is_admin());
/// assert!(checker.is_in_role(["editor"]).unwrap());
/// assert_eq!(checker.get_roles().unwrap().unwrap().len(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct RoleChecker<R> {
    source: R,
    policy: RolePolicy,
}

impl<R: RoleSource> RoleChecker<R> {
    /// Wrap `source` with the default policy
    pub fn new(source: R) -> Self {
        Self::with_policy(source, RolePolicy::default())
    }

    /// Wrap `source` with an explicit policy
    pub fn with_policy(source: R, policy: RolePolicy) -> Self {
        RoleChecker { source, policy }
    }

    /// The wrapped record source
    pub fn record(&self) -> &R {
        &self.source
    }

    pub fn policy(&self) -> &RolePolicy {
        &self.policy
    }

    /// true if the user holds any admin role (default: "super" or "admin")
    ///
    /// The super role always counts, even when a policy built in code leaves
    /// it out of `adminRoles`.
    pub fn is_admin(&self) -> bool {
        self.holds_super_role() || self.has_any_group(self.policy.admin_roles())
    }

    /// Query form of `is_admin`, answered through `is_in_any_role`
    pub fn query_admin(&self) -> Result<bool> {
        self.is_in_any_role(self.policy.admin_roles())
    }

    /// true if the user holds the super role
    pub fn is_super(&self) -> bool {
        self.has_group(self.policy.super_role())
    }

    /// Query form of `is_super`, answered through `is_in_role`
    pub fn query_super(&self) -> Result<bool> {
        self.is_in_role(self.policy.super_role())
    }

    /// Check whether the user is in the given role(s)
    ///
    /// In [`InRoleMode::Literal`] (the default) a non-empty list answers
    /// only "does the user hold the super role"; the listed names are not
    /// consulted. An empty list is `true`.
    ///
    /// In [`InRoleMode::AllOf`] every listed role must be held, with the
    /// super role standing in for any of them.
    pub fn is_in_role<'a>(&self, roles: impl Into<RoleNames<'a>>) -> Result<bool> {
        let roles = roles.into();
        let is_super = self.holds_super_role();

        let result = match self.policy.in_role_mode() {
            InRoleMode::Literal if !roles.is_empty() => is_super,
            _ => roles
                .iter()
                .all(|role| self.source.contains_group(role) || is_super),
        };

        debug!(
            roles = ?roles.as_slice(),
            mode = ?self.policy.in_role_mode(),
            result,
            "is_in_role"
        );
        Ok(result)
    }

    /// Check whether the user is in at least one of the given role(s)
    ///
    /// A super user is in every role; an empty list is `false`.
    pub fn is_in_any_role<'a>(&self, roles: impl Into<RoleNames<'a>>) -> Result<bool> {
        let roles = roles.into();
        let is_super = self.holds_super_role();

        let result = roles
            .iter()
            .any(|role| self.source.contains_group(role) || is_super);

        debug!(roles = ?roles.as_slice(), result, "is_in_any_role");
        Ok(result)
    }

    /// The record's full role list, exactly as supplied
    pub fn get_roles(&self) -> Result<Option<Vec<String>>> {
        Ok(self.source.all_roles())
    }

    /// true if the user is in every named group (true for an empty list)
    pub fn has_group<'a>(&self, groups: impl Into<RoleNames<'a>>) -> bool {
        let groups = groups.into();
        let result = groups.iter().all(|name| self.source.contains_group(name));
        trace!(groups = ?groups.as_slice(), result, "has_group");
        result
    }

    /// true if the user is in at least one named group (false for an empty list)
    pub fn has_any_group<'a>(&self, groups: impl Into<RoleNames<'a>>) -> bool {
        let groups = groups.into();
        let result = groups.iter().any(|name| self.source.contains_group(name));
        trace!(groups = ?groups.as_slice(), result, "has_any_group");
        result
    }

    fn holds_super_role(&self) -> bool {
        self.source.contains_group(self.policy.super_role())
    }
}
