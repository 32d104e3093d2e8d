//! RoleSource - read access to a user's groups
//!
//! `RoleChecker` never caches group data: every query goes back through this
//! trait, so a caller that shares a record behind `Arc<RwLock<_>>` and
//! mutates it sees the change on the next query.

use std::rc::Rc;
use std::sync::{Arc, Mutex, RwLock};

use tracing::warn;

use super::user_record::UserRecord;

/// Anything that can answer group membership for one user
pub trait RoleSource {
    /// true if the user currently holds `name`
    fn contains_group(&self, name: &str) -> bool;

    /// Full role list, unmodified; `None` when the record has none
    fn all_roles(&self) -> Option<Vec<String>>;
}

impl RoleSource for UserRecord {
    fn contains_group(&self, name: &str) -> bool {
        self.groups.contains(name)
    }

    fn all_roles(&self) -> Option<Vec<String>> {
        self.all_roles.clone()
    }
}

impl<T: RoleSource + ?Sized> RoleSource for &T {
    fn contains_group(&self, name: &str) -> bool {
        (**self).contains_group(name)
    }

    fn all_roles(&self) -> Option<Vec<String>> {
        (**self).all_roles()
    }
}

impl<T: RoleSource + ?Sized> RoleSource for Box<T> {
    fn contains_group(&self, name: &str) -> bool {
        (**self).contains_group(name)
    }

    fn all_roles(&self) -> Option<Vec<String>> {
        (**self).all_roles()
    }
}

impl<T: RoleSource + ?Sized> RoleSource for Rc<T> {
    fn contains_group(&self, name: &str) -> bool {
        (**self).contains_group(name)
    }

    fn all_roles(&self) -> Option<Vec<String>> {
        (**self).all_roles()
    }
}

impl<T: RoleSource + ?Sized> RoleSource for Arc<T> {
    fn contains_group(&self, name: &str) -> bool {
        (**self).contains_group(name)
    }

    fn all_roles(&self) -> Option<Vec<String>> {
        (**self).all_roles()
    }
}

// A poisoned lock still guards a whole record; read through it.
impl<T: RoleSource> RoleSource for RwLock<T> {
    fn contains_group(&self, name: &str) -> bool {
        let guard = self.read().unwrap_or_else(|poisoned| {
            warn!("user record lock poisoned, reading last written state");
            poisoned.into_inner()
        });
        guard.contains_group(name)
    }

    fn all_roles(&self) -> Option<Vec<String>> {
        let guard = self.read().unwrap_or_else(|poisoned| {
            warn!("user record lock poisoned, reading last written state");
            poisoned.into_inner()
        });
        guard.all_roles()
    }
}

impl<T: RoleSource> RoleSource for Mutex<T> {
    fn contains_group(&self, name: &str) -> bool {
        let guard = self.lock().unwrap_or_else(|poisoned| {
            warn!("user record lock poisoned, reading last written state");
            poisoned.into_inner()
        });
        guard.contains_group(name)
    }

    fn all_roles(&self) -> Option<Vec<String>> {
        let guard = self.lock().unwrap_or_else(|poisoned| {
            warn!("user record lock poisoned, reading last written state");
            poisoned.into_inner()
        });
        guard.all_roles()
    }
}
