/**
 * config.rs
 * Parser for role policy files (YAML format)
 *
 * Format:
 * ```yaml
 * apiVersion: hbk/v1
 * kind: RolePolicy
 * spec:
 *   superRole: super
 *   adminRoles: [super, admin]
 *   inRoleMode: literal
 * ```
 *
 * Every `spec` field is optional; omitted fields take the values shown.
 */

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::errors::HbkError;

pub const POLICY_API_VERSION: &str = "hbk/v1";
pub const POLICY_KIND: &str = "RolePolicy";
pub const DEFAULT_SUPER_ROLE: &str = "super";
pub const DEFAULT_ADMIN_ROLES: &[&str] = &["super", "admin"];

/// How `RoleChecker::is_in_role` treats a non-empty role list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InRoleMode {
    /// Historical behaviour: a non-empty list answers "is super" and the
    /// names themselves are never checked.
    #[default]
    Literal,
    /// Every listed role must be held (a super user holds them all).
    AllOf,
}

/// Role policy file structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RolePolicy {
    pub api_version: String,
    pub kind: String,
    #[serde(default)]
    pub spec: PolicySpec,
}

/// Policy specification
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PolicySpec {
    /// Sentinel role that satisfies every role query
    #[serde(default = "default_super_role")]
    pub super_role: String,
    /// Roles that make a user an administrator
    #[serde(default = "default_admin_roles")]
    pub admin_roles: Vec<String>,
    #[serde(default)]
    pub in_role_mode: InRoleMode,
}

fn default_super_role() -> String {
    DEFAULT_SUPER_ROLE.to_string()
}

fn default_admin_roles() -> Vec<String> {
    DEFAULT_ADMIN_ROLES.iter().map(|r| r.to_string()).collect()
}

impl Default for PolicySpec {
    fn default() -> Self {
        PolicySpec {
            super_role: default_super_role(),
            admin_roles: default_admin_roles(),
            in_role_mode: InRoleMode::default(),
        }
    }
}

impl Default for RolePolicy {
    fn default() -> Self {
        RolePolicy {
            api_version: POLICY_API_VERSION.to_string(),
            kind: POLICY_KIND.to_string(),
            spec: PolicySpec::default(),
        }
    }
}

impl RolePolicy {
    /// Load a policy file from `path`
    ///
    /// # Example
    /// ```no_run
    /// # use hbk_roles::RolePolicy;
    /// let policy = RolePolicy::load("roles.yaml")?;
    /// assert_eq!(policy.super_role(), "super");
    /// # Ok::<(), hbk_roles::HbkError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, HbkError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(HbkError::FileNotFound(path.to_string_lossy().to_string()));
        }

        let content = fs::read_to_string(path)?;
        let policy = Self::from_yaml_str(&content)?;

        debug!(
            path = %path.display(),
            super_role = %policy.spec.super_role,
            mode = ?policy.spec.in_role_mode,
            "loaded role policy"
        );

        Ok(policy)
    }

    /// Parse and validate policy YAML
    pub fn from_yaml_str(content: &str) -> Result<Self, HbkError> {
        let policy: RolePolicy = serde_yaml::from_str(content)
            .map_err(|e| HbkError::ParseError(format!("Invalid role policy YAML: {}", e)))?;

        policy.validate()?;

        Ok(policy)
    }

    /// Validate policy structure
    ///
    /// Ensures:
    /// - apiVersion is "hbk/v1"
    /// - kind is "RolePolicy"
    /// - superRole is non-empty
    /// - adminRoles is non-empty, holds no empty names and includes superRole
    pub fn validate(&self) -> Result<(), HbkError> {
        if self.api_version != POLICY_API_VERSION {
            return Err(HbkError::ValidationError(format!(
                "Invalid apiVersion: expected '{}', got '{}'",
                POLICY_API_VERSION, self.api_version
            )));
        }

        if self.kind != POLICY_KIND {
            return Err(HbkError::ValidationError(format!(
                "Invalid kind: expected '{}', got '{}'",
                POLICY_KIND, self.kind
            )));
        }

        if self.spec.super_role.is_empty() {
            return Err(HbkError::ValidationError(
                "spec.superRole cannot be empty".to_string(),
            ));
        }

        if self.spec.admin_roles.is_empty() {
            return Err(HbkError::ValidationError(
                "spec.adminRoles cannot be empty".to_string(),
            ));
        }

        if self.spec.admin_roles.iter().any(|r| r.is_empty()) {
            return Err(HbkError::ValidationError(
                "spec.adminRoles cannot contain empty names".to_string(),
            ));
        }

        if !self.spec.admin_roles.contains(&self.spec.super_role) {
            return Err(HbkError::ValidationError(format!(
                "spec.adminRoles must include superRole '{}'",
                self.spec.super_role
            )));
        }

        Ok(())
    }

    pub fn super_role(&self) -> &str {
        &self.spec.super_role
    }

    pub fn admin_roles(&self) -> &[String] {
        &self.spec.admin_roles
    }

    pub fn in_role_mode(&self) -> InRoleMode {
        self.spec.in_role_mode
    }

    pub fn with_super_role(mut self, role: impl Into<String>) -> Self {
        self.spec.super_role = role.into();
        self
    }

    pub fn with_admin_roles<I, S>(mut self, roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.spec.admin_roles = roles.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_in_role_mode(mut self, mode: InRoleMode) -> Self {
        self.spec.in_role_mode = mode;
        self
    }
}
