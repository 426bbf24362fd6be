//! Module identities: the raw resolver form and the normalized coordinate.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

/// Text shown for a missing identity part.
const NULL_PART: &str = "null";

/// `part` for display, with `null` standing in for a missing value.
pub fn display_part(part: &Option<String>) -> &str {
    part.as_deref().unwrap_or(NULL_PART)
}

/// Canonical `(group, name, version)` identity of a published module.
///
/// This is the key used throughout the registry and the flattened output.
/// Two coordinates are equal iff all three fields are equal. A part the
/// resolver left out is `None` and is written as `null` in the manifest.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModuleCoordinate {
    pub group: Option<String>,
    pub name: Option<String>,
    pub version: Option<String>,
}

impl ModuleCoordinate {
    pub fn new(
        group: impl Into<String>,
        name: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group: Some(group.into()),
            name: Some(name.into()),
            version: Some(version.into()),
        }
    }

    /// Coordinate whose parts may be missing.
    pub fn from_parts(
        group: Option<String>,
        name: Option<String>,
        version: Option<String>,
    ) -> Self {
        Self {
            group,
            name,
            version,
        }
    }

    /// Parse `"group:name:version"` into a coordinate.
    pub fn parse(s: &str) -> Option<Self> {
        let parts: Vec<&str> = s.split(':').collect();
        if parts.len() == 3 && parts.iter().all(|p| !p.is_empty()) {
            Some(Self::new(parts[0], parts[1], parts[2]))
        } else {
            None
        }
    }

    /// `group:name` identifier (without version).
    pub fn key(&self) -> String {
        format!("{}:{}", display_part(&self.group), display_part(&self.name))
    }
}

impl fmt::Display for ModuleCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}",
            display_part(&self.group),
            display_part(&self.name),
            display_part(&self.version)
        )
    }
}

impl Ord for ModuleCoordinate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.group
            .cmp(&other.group)
            .then_with(|| self.name.cmp(&other.name))
            .then_with(|| self.version.cmp(&other.version))
            .then_with(|| self.to_string().cmp(&other.to_string()))
    }
}

impl PartialOrd for ModuleCoordinate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A module id exactly as the resolver reports it.
///
/// Besides the identity triple it may carry a branch and extra attributes.
/// Dependency ids usually carry extra attributes while caller ids do not, so
/// ids must be normalized before they are compared.
///
/// Deserializes from either a detailed object or a `"org:name:rev"` shorthand.
/// In the detailed form `organisation`, `name` and `revision` may be null or
/// absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleRevisionId {
    pub organisation: Option<String>,
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
    pub revision: Option<String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub extra: BTreeMap<String, String>,
}

impl ModuleRevisionId {
    pub fn new(
        organisation: impl Into<String>,
        name: impl Into<String>,
        revision: impl Into<String>,
    ) -> Self {
        Self {
            organisation: Some(organisation.into()),
            name: Some(name.into()),
            branch: None,
            revision: Some(revision.into()),
            extra: BTreeMap::new(),
        }
    }

    /// Attach an extra attribute.
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// Attach a branch.
    pub fn with_branch(mut self, branch: impl Into<String>) -> Self {
        self.branch = Some(branch.into());
        self
    }

    /// Organisation for display, `null` when missing.
    pub fn organisation_str(&self) -> &str {
        display_part(&self.organisation)
    }
}

impl fmt::Display for ModuleRevisionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", display_part(&self.organisation), display_part(&self.name))?;
        if let Some(branch) = &self.branch {
            write!(f, "#{branch}")?;
        }
        write!(f, ";{}", display_part(&self.revision))?;
        for (k, v) in &self.extra {
            write!(f, " {k}={v}")?;
        }
        Ok(())
    }
}

/// Detailed object form of [`ModuleRevisionId`].
#[derive(Deserialize)]
struct DetailedId {
    organisation: Option<String>,
    name: Option<String>,
    #[serde(default)]
    branch: Option<String>,
    revision: Option<String>,
    #[serde(default)]
    extra: BTreeMap<String, String>,
}

impl From<DetailedId> for ModuleRevisionId {
    fn from(raw: DetailedId) -> Self {
        Self {
            organisation: raw.organisation,
            name: raw.name,
            branch: raw.branch,
            revision: raw.revision,
            extra: raw.extra,
        }
    }
}

struct ModuleRevisionIdVisitor;

impl<'de> Visitor<'de> for ModuleRevisionIdVisitor {
    type Value = ModuleRevisionId;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an `organisation:name:revision` string or a module id object")
    }

    fn visit_str<E>(self, s: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        let coord = ModuleCoordinate::parse(s).ok_or_else(|| {
            E::custom(format!("expected `organisation:name:revision`, got `{s}`"))
        })?;
        Ok(ModuleRevisionId {
            organisation: coord.group,
            name: coord.name,
            branch: None,
            revision: coord.version,
            extra: BTreeMap::new(),
        })
    }

    fn visit_map<A>(self, map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        DetailedId::deserialize(de::value::MapAccessDeserializer::new(map)).map(Into::into)
    }
}

impl<'de> Deserialize<'de> for ModuleRevisionId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(ModuleRevisionIdVisitor)
    }
}

/// Reduce an identity to its canonical coordinate.
pub trait Normalize {
    fn normalize(&self) -> ModuleCoordinate;
}

impl Normalize for ModuleRevisionId {
    fn normalize(&self) -> ModuleCoordinate {
        ModuleCoordinate::from_parts(
            self.organisation.clone(),
            self.name.clone(),
            self.revision.clone(),
        )
    }
}

impl Normalize for ModuleCoordinate {
    fn normalize(&self) -> ModuleCoordinate {
        self.clone()
    }
}
