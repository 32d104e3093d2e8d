//! UserRecord - the user data a `RoleChecker` wraps
//!
//! Serialized form (JSON or YAML):
//! ```yaml
//! groups: [editor, super]
//! allRoles: [editor, super, viewer]
//! displayName: Alice   # any other field is kept verbatim
//! ```
//!
//! `groups` is required. `allRoles` may be absent and is passed through
//! untouched by the checker.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use crate::errors::{HbkError, Result};

/// User record as supplied by the user directory
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    /// Groups (roles) the user currently holds
    pub groups: BTreeSet<String>,
    /// Complete role list, in supplier order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub all_roles: Option<Vec<String>>,
    /// Fields this crate does not interpret
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// Serialization format of a record file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordFormat {
    Json,
    Yaml,
}

impl RecordFormat {
    /// Pick the format from a file extension (`.json`, `.yaml`, `.yml`)
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match ext.as_deref() {
            Some("json") => Ok(RecordFormat::Json),
            Some("yaml") | Some("yml") => Ok(RecordFormat::Yaml),
            _ => Err(HbkError::UnsupportedFormat(
                path.to_string_lossy().to_string(),
            )),
        }
    }
}

impl UserRecord {
    /// Create a record holding `groups`, with no `allRoles`
    pub fn new<I, S>(groups: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        UserRecord {
            groups: groups.into_iter().map(Into::into).collect(),
            all_roles: None,
            extra: BTreeMap::new(),
        }
    }

    /// Set the full role list
    pub fn with_all_roles<I, S>(mut self, roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.all_roles = Some(roles.into_iter().map(Into::into).collect());
        self
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn from_yaml_str(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Parse a record in the given format
    pub fn parse(content: &str, format: RecordFormat) -> Result<Self> {
        match format {
            RecordFormat::Json => Self::from_json_str(content),
            RecordFormat::Yaml => Self::from_yaml_str(content),
        }
    }
}
