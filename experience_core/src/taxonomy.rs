//! Organization Taxonomy
//!
//! The closed set of organizations an experience record may reference.
//! Ordinals are fixed and distinct; `Ibm` (ordinal 0) is the default used
//! when a request does not name a type.

use serde::{de, Deserialize, Deserializer, Serialize};
use std::fmt;

/// Known organizations, in ordinal order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrganizationType {
    #[default]
    #[serde(rename = "IBM")]
    Ibm = 0,
    #[serde(rename = "TRIMBLE")]
    Trimble = 1,
    #[serde(rename = "MRSGREENSREMEDIES", alias = "421HEMP")]
    MrsGreensRemedies = 2,
    #[serde(rename = "APOLLODAE")]
    ApolloDae = 3,
    #[serde(rename = "IGADI")]
    Igadi = 4,
    #[serde(rename = "SMARTECH")]
    Smartech = 5,
}

/// Legacy label once registered for `MrsGreensRemedies`. Accepted on input only.
pub const LEGACY_MRSGREENSREMEDIES_LABEL: &str = "421HEMP";

const NAMES: [&str; 6] = [
    "IBM",
    "TRIMBLE",
    "MRSGREENSREMEDIES",
    "APOLLODAE",
    "IGADI",
    "SMARTECH",
];

impl OrganizationType {
    /// Every member, in ordinal order
    pub const ALL: [OrganizationType; 6] = [
        OrganizationType::Ibm,
        OrganizationType::Trimble,
        OrganizationType::MrsGreensRemedies,
        OrganizationType::ApolloDae,
        OrganizationType::Igadi,
        OrganizationType::Smartech,
    ];

    pub fn as_str(&self) -> &'static str {
        NAMES[self.ordinal() as usize]
    }

    pub fn ordinal(&self) -> i32 {
        *self as i32
    }

    /// Human-readable names in ordinal order, used to declare the external enum
    pub fn names() -> &'static [&'static str] {
        &NAMES
    }

    pub fn from_name(name: &str) -> Option<Self> {
        if name == LEGACY_MRSGREENSREMEDIES_LABEL {
            return Some(OrganizationType::MrsGreensRemedies);
        }
        NAMES
            .iter()
            .position(|n| *n == name)
            .map(|idx| Self::ALL[idx])
    }

    pub fn from_ordinal(ordinal: i64) -> Option<Self> {
        usize::try_from(ordinal)
            .ok()
            .and_then(|idx| Self::ALL.get(idx).copied())
    }

    pub fn is_valid_name(name: &str) -> bool {
        Self::from_name(name).is_some()
    }

    pub fn is_valid_ordinal(ordinal: i64) -> bool {
        Self::from_ordinal(ordinal).is_some()
    }
}

impl fmt::Display for OrganizationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An unvalidated reference to a taxonomy member, as supplied by a caller.
///
/// Callers may name the member (`"TRIMBLE"`) or give its ordinal (`1`).
/// Any other JSON value lands in `Other` and never resolves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OrganizationRef {
    Ordinal(i64),
    Name(String),
    Other(serde_json::Value),
}

impl OrganizationRef {
    /// Resolve against the taxonomy; `None` when the candidate is not a member
    pub fn resolve(&self) -> Option<OrganizationType> {
        match self {
            OrganizationRef::Ordinal(n) => OrganizationType::from_ordinal(*n),
            OrganizationRef::Name(name) => OrganizationType::from_name(name),
            OrganizationRef::Other(_) => None,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.resolve().is_some()
    }
}

impl From<OrganizationType> for OrganizationRef {
    fn from(kind: OrganizationType) -> Self {
        OrganizationRef::Name(kind.as_str().to_string())
    }
}

impl fmt::Display for OrganizationRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrganizationRef::Ordinal(n) => write!(f, "{}", n),
            OrganizationRef::Name(name) => f.write_str(name),
            OrganizationRef::Other(value) => write!(f, "{}", value),
        }
    }
}

/// Deserialize a stored type given either by name or by ordinal
pub fn deserialize_organization<'de, D>(deserializer: D) -> Result<OrganizationType, D::Error>
where
    D: Deserializer<'de>,
{
    let candidate = OrganizationRef::deserialize(deserializer)?;
    candidate
        .resolve()
        .ok_or_else(|| de::Error::custom(format!("unknown organization type: {}", candidate)))
}
