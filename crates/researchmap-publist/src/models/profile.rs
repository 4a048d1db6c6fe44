//! Researcher profile model matching the researchmap API schema.

use serde::{Deserialize, Serialize};

use super::Bilingual;

/// Placeholder shown when no name is usable in either language.
pub const UNKNOWN_NAME: &str = "Unknown Name";

/// A researcher profile.
///
/// Every field is optional on the wire (absent or explicit null); both
/// deserialize to `None` and are treated as empty at render time, never as
/// failures.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Profile {
    /// Stable opaque identifier within researchmap. Present on search
    /// results; the profile endpoint may omit it.
    #[serde(default)]
    pub permalink: Option<String>,

    /// Researcher name.
    #[serde(default)]
    pub name: Option<Bilingual>,

    /// Photo URL.
    #[serde(default)]
    pub image_url: Option<String>,

    /// Affiliation entries.
    #[serde(default)]
    pub affiliation: Option<Vec<Affiliation>>,
}

impl Profile {
    /// Resolved display name, with the fixed placeholder when no name is
    /// usable in either language.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name.as_ref().and_then(Bilingual::preferred).unwrap_or(UNKNOWN_NAME)
    }

    /// Affiliation entries, empty when the field is absent.
    #[must_use]
    pub fn affiliations(&self) -> &[Affiliation] {
        self.affiliation.as_deref().unwrap_or_default()
    }
}

/// One affiliation entry on a profile.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Affiliation {
    /// Organization name.
    #[serde(default)]
    pub name: Option<Bilingual>,
}

impl Affiliation {
    /// Resolved organization name, if any.
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        self.name.as_ref()?.preferred()
    }
}

/// One page of researcher search results.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResearcherSearchPage {
    /// Matching researchers, best match first.
    #[serde(default)]
    pub items: Vec<Profile>,
}
