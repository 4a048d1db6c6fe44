//! Direct publication list flow.

use crate::client::{PublicationQuery, ResearchmapClient};
use crate::config::limits;
use crate::formatters::{self, ListOptions};

use super::{Container, LOADING_PUBLICATIONS};

/// Fetch a researcher's publications and render them into the list
/// container.
///
/// The query's limit defaults to [`limits::LIST_LIMIT`] when unset. Any
/// failure replaces the container content with an error entry; the counts
/// are reported at log level.
pub async fn render_publication_list(
    client: &ResearchmapClient,
    permalink: &str,
    list: &mut Container,
    mut query: PublicationQuery,
) {
    list.set_html(LOADING_PUBLICATIONS);

    query.limit.get_or_insert(limits::LIST_LIMIT);

    match client.get_publications(permalink, &query).await {
        Ok(page) => {
            let rendered = formatters::publication_list(&page, &ListOptions::direct());
            tracing::info!(
                permalink,
                displayed = rendered.displayed,
                total = rendered.total,
                "rendered publication list"
            );
            list.set_html(rendered.html);
        }
        Err(err) => {
            tracing::error!(permalink, error = %err, "failed to load publications");
            list.set_html(format!(
                "<li class=\"error\">Error loading publications: {}</li>",
                formatters::html_escape(&err.to_string())
            ));
        }
    }
}
