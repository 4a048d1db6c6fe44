//! Publication list rendering shared by both flows.

use std::fmt::Write as _;

use crate::models::{Publication, PublicationPage};

use super::html_escape;

/// Placeholder title for items with no title in either language.
pub const NO_TITLE_PLACEHOLDER: &str = "[No title available]";

/// How the displayed/total count is surfaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Summary {
    /// A visible count entry appended after the list items.
    Visible,

    /// Counts reported at log level only; nothing visible is appended.
    Log,
}

/// The presentation knobs that differ between the two flows. The rendering
/// logic itself is identical.
#[derive(Debug, Clone)]
pub struct ListOptions {
    /// Message shown as the single placeholder entry when the page has no
    /// items.
    pub empty_message: &'static str,

    /// Count presentation.
    pub summary: Summary,
}

impl ListOptions {
    /// Options for the direct list flow.
    #[must_use]
    pub const fn direct() -> Self {
        Self {
            empty_message: "No publications found matching the criteria.",
            summary: Summary::Log,
        }
    }

    /// Options for the search flow.
    #[must_use]
    pub const fn search() -> Self {
        Self {
            empty_message: "No publications found for this researcher.",
            summary: Summary::Visible,
        }
    }
}

/// A rendered publication list plus its underlying counts.
#[derive(Debug, Clone)]
pub struct RenderedList {
    /// The list fragment: one `<li>` per item (or one placeholder entry),
    /// plus the visible count entry when requested.
    pub html: String,

    /// Number of items rendered from this page.
    pub displayed: usize,

    /// Total number of items the researcher has.
    pub total: u64,
}

/// Render one publication as a single `<li>` fragment.
///
/// A title is always produced; an item is never dropped for lacking one.
#[must_use]
pub fn publication_item(publication: &Publication) -> String {
    let mut item = String::from("<li>");

    // Title: Japanese primary, English secondary when both exist.
    item.push_str("<div class=\"pub-title\">");
    match (publication.title_ja(), publication.title_en()) {
        (Some(ja), Some(en)) => {
            let _ = write!(
                item,
                "<strong>{}</strong><br><span class=\"pub-title-en\">{}</span>",
                html_escape(ja),
                html_escape(en)
            );
        }
        (Some(title), None) | (None, Some(title)) => {
            let _ = write!(item, "<strong>{}</strong>", html_escape(title));
        }
        (None, None) => {
            let _ = write!(item, "<em>{NO_TITLE_PLACEHOLDER}</em>");
        }
    }
    item.push_str("</div>");

    // Venue/year/type line, omitted entirely when there is neither a venue
    // nor a year.
    let journal = publication.journal_name();
    let year = publication.year();
    if journal.is_some() || year.is_some() {
        item.push_str("<div class=\"pub-info\">");
        if let Some(journal) = journal {
            let _ = write!(item, "<i>{}</i>", html_escape(journal));
            if let Some(year) = year {
                let _ = write!(item, " ({})", html_escape(year));
            }
        } else if let Some(year) = year {
            let _ = write!(item, "Published: {}", html_escape(year));
        }
        if let Some(paper_type) = publication.paper_type() {
            let _ = write!(item, " [{}]", html_escape(paper_type));
        }
        item.push_str("</div>");
    }

    // Only the first DOI is shown.
    if let Some(doi) = publication.primary_doi() {
        let _ = write!(
            item,
            "<div class=\"pub-doi\">DOI: <a href=\"https://doi.org/{doi}\" target=\"_blank\">{doi}</a></div>",
            doi = html_escape(doi)
        );
    }

    item.push_str("</li>");
    item
}

/// Render a publication page as list entries, in API order.
///
/// An empty page is a valid terminal state: it renders exactly one
/// placeholder entry carrying the flow's wording.
#[must_use]
pub fn publication_list(page: &PublicationPage, options: &ListOptions) -> RenderedList {
    let displayed = page.items.len();
    let total = page.number_of_items;

    let mut html = String::new();
    if page.items.is_empty() {
        let _ = write!(html, "<li class=\"empty\">{}</li>", options.empty_message);
    } else {
        for publication in &page.items {
            html.push_str(&publication_item(publication));
        }
    }

    if options.summary == Summary::Visible {
        let _ = write!(
            html,
            "<li class=\"pub-count\"><small>Showing {displayed} publications out of {total} total.</small></li>"
        );
    }

    RenderedList { html, displayed, total }
}
