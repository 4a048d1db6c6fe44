//! Researcher search flow: resolve, profile, publications.

use crate::client::{PublicationQuery, ResearchmapClient};
use crate::config::limits;
use crate::error::Error;
use crate::formatters::{self, ListOptions};
use crate::resolver;

use super::{Container, LOADING_PUBLICATIONS};

/// Search for a researcher and render their profile and publications.
///
/// The three network calls are strictly sequential: the permalink must be
/// resolved before the profile fetch, and the profile must render before
/// publications are requested. A failure at any stage writes its message
/// into the stage's container and stops the chain, leaving later containers
/// untouched.
pub async fn render_researcher_search(
    client: &ResearchmapClient,
    query: &str,
    profile: &mut Container,
    publist: &mut Container,
) {
    let query = query.trim();
    if query.is_empty() {
        profile.set_html("<p class=\"error\">Please enter a researcher name or ID.</p>");
        return;
    }

    profile.set_html("Searching...");
    publist.clear();

    let permalink = match resolver::resolve_permalink(client, query).await {
        Ok(permalink) => permalink,
        Err(Error::NoResearcherFound) => {
            tracing::info!(query, "no researchers matched");
            profile.set_html("No researchers found matching your query.");
            return;
        }
        Err(err) => {
            tracing::error!(query, error = %err, "researcher search failed");
            profile.set_html(error_paragraph(&err));
            return;
        }
    };

    match client.get_profile(&permalink).await {
        Ok(record) => {
            profile.set_html(formatters::profile_block(&record, &permalink, client.site_url()));
        }
        Err(err) => {
            tracing::error!(permalink, error = %err, "profile fetch failed");
            profile.set_html(error_paragraph(&err));
            return;
        }
    }

    publist.set_html(LOADING_PUBLICATIONS);

    let query = PublicationQuery::with_limit(limits::SEARCH_LIST_LIMIT);
    match client.get_publications(&permalink, &query).await {
        Ok(page) => {
            let rendered = formatters::publication_list(&page, &ListOptions::search());
            tracing::info!(
                permalink,
                displayed = rendered.displayed,
                total = rendered.total,
                "rendered publications for search result"
            );
            publist.set_html(rendered.html);
        }
        Err(err) => {
            tracing::error!(permalink, error = %err, "failed to load publications");
            publist.set_html(format!(
                "<li class=\"error\">Error loading publications: {}</li>",
                formatters::html_escape(&err.to_string())
            ));
        }
    }
}

fn error_paragraph(err: &Error) -> String {
    format!("<p class=\"error\">{}</p>", formatters::html_escape(&err.user_message()))
}
