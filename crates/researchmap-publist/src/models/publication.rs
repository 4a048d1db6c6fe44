//! Publication model matching the researchmap `published_papers` schema.

use serde::{Deserialize, Serialize};

use super::Bilingual;

/// One published paper.
///
/// Record fields are `Option` because the API sends explicit nulls as well
/// as omitting fields; both deserialize to `None` and render as empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Publication {
    /// Paper title.
    #[serde(default)]
    pub paper_title: Option<Bilingual>,

    /// Journal or venue name.
    #[serde(default)]
    pub publication_name: Option<Bilingual>,

    /// Publication date, an ISO-like date or bare year string.
    #[serde(default)]
    pub publication_date: Option<String>,

    /// Free-text publication type label.
    #[serde(default)]
    pub published_paper_type: Option<String>,

    /// External identifiers.
    #[serde(default)]
    pub identifiers: Option<Identifiers>,
}

impl Publication {
    /// Japanese title, if present and non-empty.
    #[must_use]
    pub fn title_ja(&self) -> Option<&str> {
        self.paper_title.as_ref()?.ja()
    }

    /// English title, if present and non-empty.
    #[must_use]
    pub fn title_en(&self) -> Option<&str> {
        self.paper_title.as_ref()?.en()
    }

    /// Resolved venue name, if any.
    #[must_use]
    pub fn journal_name(&self) -> Option<&str> {
        self.publication_name.as_ref()?.preferred()
    }

    /// Publication year: the first 4 characters of `publication_date`.
    #[must_use]
    pub fn year(&self) -> Option<&str> {
        self.publication_date
            .as_deref()
            .filter(|d| !d.is_empty())
            .map(|d| d.get(..4).unwrap_or(d))
    }

    /// Publication type label, if non-empty.
    #[must_use]
    pub fn paper_type(&self) -> Option<&str> {
        self.published_paper_type.as_deref().filter(|t| !t.is_empty())
    }

    /// First DOI, the only one ever shown.
    #[must_use]
    pub fn primary_doi(&self) -> Option<&str> {
        self.identifiers.as_ref()?.doi.as_ref()?.first().map(String::as_str)
    }
}

/// External identifiers for a publication.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Identifiers {
    /// DOI strings, in API order.
    #[serde(default)]
    pub doi: Option<Vec<String>>,
}

/// One page of publications plus the total count, which may exceed the
/// page size.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PublicationPage {
    /// Publications in API order. The order is authoritative; nothing
    /// downstream re-sorts.
    #[serde(default)]
    pub items: Vec<Publication>,

    /// Total number of publications the researcher has.
    #[serde(default)]
    pub number_of_items: u64,
}
