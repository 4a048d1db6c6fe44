//! researchmap publication list renderer - preview CLI
//!
//! Runs a flow against the live API and prints the resulting container
//! fragments, wrapped in their host elements, to stdout.

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use researchmap_publist::client::PublicationQuery;
use researchmap_publist::flows::{self, Container};
use researchmap_publist::{Config, ResearchmapClient};

#[derive(Parser, Debug)]
#[command(name = "researchmap-publist")]
#[command(about = "Render researchmap profiles and publication lists as HTML fragments")]
#[command(version)]
struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the publication list for a known permalink
    Publist {
        /// researchmap permalink of the researcher
        permalink: String,

        /// Id of the host <ul> element
        #[arg(long, default_value = "publist")]
        list_id: String,

        /// Maximum number of retrieved items
        #[arg(long)]
        limit: Option<u32>,

        /// Starting publication date, e.g. 2016 or 2016-01-01
        #[arg(long)]
        from_date: Option<String>,

        /// Ending publication date
        #[arg(long)]
        to_date: Option<String>,
    },

    /// Search for a researcher and render profile plus publications
    Search {
        /// Free-text name or a permalink
        query: String,

        /// Id of the host profile element
        #[arg(long, default_value = "profile")]
        profile_id: String,

        /// Id of the host <ul> element
        #[arg(long, default_value = "publist")]
        list_id: String,
    },
}

fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().compact().with_writer(std::io::stderr))
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing(&cli.log_level);

    let client = ResearchmapClient::new(Config::new())?;

    match cli.command {
        Command::Publist { permalink, list_id, limit, from_date, to_date } => {
            let mut list = Container::new(list_id);
            let query = PublicationQuery { limit, from_date, to_date };

            flows::render_publication_list(&client, &permalink, &mut list, query).await;

            println!("<ul id=\"{}\">{}</ul>", list.id(), list.html());
        }
        Command::Search { query, profile_id, list_id } => {
            let mut profile = Container::new(profile_id);
            let mut list = Container::new(list_id);

            flows::render_researcher_search(&client, &query, &mut profile, &mut list).await;

            println!("<div id=\"{}\">{}</div>", profile.id(), profile.html());
            println!("<ul id=\"{}\">{}</ul>", list.id(), list.html());
        }
    }

    Ok(())
}
