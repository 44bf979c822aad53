use crate::domain::errors::{DomainError, DomainResult};
use serde::Serialize;
use std::{fmt, str::FromStr};

/// Logical collection a slug must be unique within.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Material,
    Tag,
    Project,
}

impl EntityKind {
    pub const ALL: [Self; 3] = [Self::Material, Self::Tag, Self::Project];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Material => "material",
            Self::Tag => "tag",
            Self::Project => "project",
        }
    }

    /// Backing table holding records of this kind.
    pub const fn table(self) -> &'static str {
        match self {
            Self::Material => "materials",
            Self::Tag => "tags",
            Self::Project => "projects",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| DomainError::Validation(format!("unknown entity kind: {needle}")))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RecordId(i64);

impl RecordId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("record id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<RecordId> for i64 {
    fn from(value: RecordId) -> Self {
        value.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// URL-safe identifier: lowercase ASCII alphanumeric groups joined by single
/// hyphens.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Slug(String);

impl Slug {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if !Self::is_valid(&value) {
            return Err(DomainError::Validation(format!("invalid slug: {value:?}")));
        }
        Ok(Self(value))
    }

    pub fn is_valid(value: &str) -> bool {
        !value.is_empty()
            && value.split('-').all(|segment| {
                !segment.is_empty()
                    && segment
                        .bytes()
                        .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit())
            })
    }

    /// Matches `adjective-noun-xxxx` where the last group is four characters
    /// from `[a-z0-9]`.
    pub fn is_friendly_name(value: &str) -> bool {
        let mut parts = value.split('-');
        let (Some(adjective), Some(noun), Some(id), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return false;
        };

        let is_word = |w: &str| !w.is_empty() && w.bytes().all(|b| b.is_ascii_lowercase());
        is_word(adjective)
            && is_word(noun)
            && id.len() == 4
            && id
                .bytes()
                .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit())
    }

    #[must_use]
    pub fn with_suffix(&self, counter: u64) -> Self {
        Self(format!("{}-{counter}", self.0))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Slug {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Slug> for String {
    fn from(value: Slug) -> Self {
        value.0
    }
}
