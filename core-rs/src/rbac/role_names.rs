//! RoleNames - one role name or many, normalized to an ordered list
//!
//! Every query that takes "a role or roles" accepts `impl Into<RoleNames>`,
//! so callers can pass `"admin"`, `["a", "b"]`, `&roles_vec` or an empty
//! list without wrapping anything themselves.

/// Ordered, borrowed list of role or group names
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoleNames<'a>(Vec<&'a str>);

impl<'a> RoleNames<'a> {
    /// An empty list
    pub fn empty() -> Self {
        RoleNames(Vec::new())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[&'a str] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.0.iter().copied()
    }
}

impl<'a> From<&'a str> for RoleNames<'a> {
    fn from(name: &'a str) -> Self {
        RoleNames(vec![name])
    }
}

impl<'a> From<&'a String> for RoleNames<'a> {
    fn from(name: &'a String) -> Self {
        RoleNames(vec![name.as_str()])
    }
}

impl<'a> From<Vec<&'a str>> for RoleNames<'a> {
    fn from(names: Vec<&'a str>) -> Self {
        RoleNames(names)
    }
}

impl<'a, 'b: 'a> From<&'a [&'b str]> for RoleNames<'a> {
    fn from(names: &'a [&'b str]) -> Self {
        RoleNames(names.iter().map(|n| &**n).collect())
    }
}

impl<'a, 'b: 'a, const N: usize> From<&'a [&'b str; N]> for RoleNames<'a> {
    fn from(names: &'a [&'b str; N]) -> Self {
        RoleNames(names.iter().map(|n| &**n).collect())
    }
}

impl<'a, const N: usize> From<[&'a str; N]> for RoleNames<'a> {
    fn from(names: [&'a str; N]) -> Self {
        RoleNames(names.to_vec())
    }
}

impl<'a> From<&'a [String]> for RoleNames<'a> {
    fn from(names: &'a [String]) -> Self {
        RoleNames(names.iter().map(String::as_str).collect())
    }
}

impl<'a> From<&'a Vec<String>> for RoleNames<'a> {
    fn from(names: &'a Vec<String>) -> Self {
        RoleNames::from(names.as_slice())
    }
}
