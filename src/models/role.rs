//! Roles and per-team role quotas.

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, TeamingError};

/// A participant's functional role.
///
/// The set is closed; which roles take part in a given run is decided by
/// the [`RoleQuotas`] table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Role {
    /// Product manager.
    #[cfg_attr(feature = "serde", serde(alias = "PM"))]
    Pm,
    #[cfg_attr(feature = "serde", serde(alias = "de"))]
    Design,
    #[cfg_attr(feature = "serde", serde(alias = "fe"))]
    Frontend,
    #[cfg_attr(feature = "serde", serde(alias = "be"))]
    Backend,
}

impl Role {
    /// All roles in canonical order.
    pub const ALL: [Role; 4] = [Role::Pm, Role::Design, Role::Frontend, Role::Backend];

    /// Short code used by survey exports (`pm`, `de`, `fe`, `be`).
    pub fn code(self) -> &'static str {
        match self {
            Role::Pm => "pm",
            Role::Design => "de",
            Role::Frontend => "fe",
            Role::Backend => "be",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Role::Pm => "pm",
            Role::Design => "design",
            Role::Frontend => "frontend",
            Role::Backend => "backend",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Role {
    type Err = TeamingError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pm" | "product" => Ok(Role::Pm),
            "de" | "design" | "designer" => Ok(Role::Design),
            "fe" | "frontend" => Ok(Role::Frontend),
            "be" | "backend" => Ok(Role::Backend),
            other => Err(TeamingError::UnknownRole(other.to_string())),
        }
    }
}

/// Minimum members of each role that every team must receive.
///
/// Entry order is significant: it is the role iteration order used when
/// distributing remainder members across teams and when filling teams.
/// A role absent from the table is outside the configured domain.
///
/// # Examples
///
/// ```
/// use u_teaming::models::{Role, RoleQuotas};
///
/// let quotas = RoleQuotas::default();
/// assert_eq!(quotas.min_for(Role::Frontend), Some(2));
///
/// let custom = RoleQuotas::new().with_quota(Role::Backend, 1);
/// assert!(!custom.contains(Role::Pm));
/// ```
///
/// With the `serde` feature the table reads and writes as a plain
/// `{role: min}` map; entry order is kept both ways.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleQuotas {
    entries: Vec<(Role, usize)>,
}

impl Default for RoleQuotas {
    fn default() -> Self {
        Self {
            entries: vec![
                (Role::Pm, 0),
                (Role::Design, 1),
                (Role::Frontend, 2),
                (Role::Backend, 2),
            ],
        }
    }
}

impl RoleQuotas {
    /// An empty table. Add roles with [`with_quota`](Self::with_quota).
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Sets the minimum for `role`, appending it if not yet present.
    pub fn with_quota(mut self, role: Role, min: usize) -> Self {
        match self.entries.iter_mut().find(|(r, _)| *r == role) {
            Some(entry) => entry.1 = min,
            None => self.entries.push((role, min)),
        }
        self
    }

    pub fn min_for(&self, role: Role) -> Option<usize> {
        self.entries
            .iter()
            .find(|(r, _)| *r == role)
            .map(|&(_, min)| min)
    }

    pub fn contains(&self, role: Role) -> bool {
        self.min_for(role).is_some()
    }

    /// Roles in table order.
    pub fn roles(&self) -> impl Iterator<Item = Role> + '_ {
        self.entries.iter().map(|&(r, _)| r)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Role, usize)> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Validates the table.
    pub fn validate(&self) -> Result<()> {
        if self.entries.is_empty() {
            return Err(TeamingError::InvalidConfig(
                "role quota table must list at least one role".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
mod quota_serde {
    use std::fmt;

    use serde::de::{MapAccess, Visitor};
    use serde::ser::SerializeMap;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::{Role, RoleQuotas};

    impl Serialize for RoleQuotas {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let mut map = serializer.serialize_map(Some(self.entries.len()))?;
            for (role, min) in &self.entries {
                map.serialize_entry(role, min)?;
            }
            map.end()
        }
    }

    struct QuotaVisitor;

    impl<'de> Visitor<'de> for QuotaVisitor {
        type Value = RoleQuotas;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a map of role to minimum headcount")
        }

        fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<RoleQuotas, A::Error> {
            let mut quotas = RoleQuotas::new();
            while let Some((role, min)) = access.next_entry::<Role, usize>()? {
                quotas = quotas.with_quota(role, min);
            }
            Ok(quotas)
        }
    }

    impl<'de> Deserialize<'de> for RoleQuotas {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserializer.deserialize_map(QuotaVisitor)
        }
    }
}

/// Headcount per role, kept in quota-table order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoleCounts {
    counts: Vec<(Role, usize)>,
}

impl RoleCounts {
    /// Zeroed counts for every role of the quota table.
    pub fn zeroed(quotas: &RoleQuotas) -> Self {
        Self {
            counts: quotas.roles().map(|r| (r, 0)).collect(),
        }
    }

    /// Builds counts from explicit `(role, count)` pairs.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (Role, usize)>) -> Self {
        let mut counts = Self::default();
        for (role, n) in pairs {
            counts.add(role, n);
        }
        counts
    }

    /// Count for `role`, 0 if absent.
    pub fn get(&self, role: Role) -> usize {
        self.counts
            .iter()
            .find(|(r, _)| *r == role)
            .map_or(0, |&(_, n)| n)
    }

    pub fn add(&mut self, role: Role, n: usize) {
        match self.counts.iter_mut().find(|(r, _)| *r == role) {
            Some(entry) => entry.1 += n,
            None => self.counts.push((role, n)),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Role, usize)> + '_ {
        self.counts.iter().copied()
    }

    /// Sum over all roles.
    pub fn total(&self) -> usize {
        self.counts.iter().map(|&(_, n)| n).sum()
    }
}
