//! Researcher profile block rendering.

use std::fmt::Write as _;

use crate::config::limits;
use crate::models::Profile;

use super::html_escape;

/// Placeholder shown when an affiliation entry has no usable name.
pub const UNKNOWN_AFFILIATION: &str = "Unknown Affiliation";

/// Render a researcher profile as a display block.
///
/// The name heading always renders, with a placeholder when no name is
/// usable. The affiliation line is omitted entirely when there are no
/// entries. Two outbound links to the public site are always included.
#[must_use]
pub fn profile_block(profile: &Profile, permalink: &str, site_url: &str) -> String {
    let mut block = String::from("<div class=\"researcher-profile\">");

    let _ = write!(block, "<h2>{}</h2>", html_escape(profile.display_name()));

    if let Some(image_url) = profile.image_url.as_deref().filter(|u| !u.is_empty()) {
        let _ = write!(
            block,
            "<img src=\"{}\" alt=\"Researcher photo\">",
            html_escape(image_url)
        );
    }

    if !profile.affiliations().is_empty() {
        let affiliations = profile
            .affiliations()
            .iter()
            .map(|entry| html_escape(entry.display_name().unwrap_or(UNKNOWN_AFFILIATION)))
            .collect::<Vec<_>>()
            .join(", ");
        let _ = write!(block, "<p><strong>所属:</strong> {affiliations}</p>");
    }

    let permalink = html_escape(permalink);
    let _ = write!(
        block,
        "<p><a href=\"{site_url}/{permalink}\" target=\"_blank\">View Full Profile on ResearchMap</a></p>"
    );
    let _ = write!(
        block,
        "<p><a href=\"{site_url}/{permalink}/published_papers?limit={limit}\" target=\"_blank\">View All Publications (論文)</a></p>",
        limit = limits::SEARCH_LIST_LIMIT
    );

    block.push_str("</div>");
    block
}
