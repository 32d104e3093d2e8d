/**
 * policy module
 * Role policy configuration: sentinel roles and `is_in_role` mode
 */

pub mod config;

pub use config::{
    InRoleMode, PolicySpec, RolePolicy, DEFAULT_ADMIN_ROLES, DEFAULT_SUPER_ROLE,
    POLICY_API_VERSION, POLICY_KIND,
};
