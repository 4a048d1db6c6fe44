//! researchmap publication list renderer
//!
//! Fetches researcher and publication metadata from the researchmap public
//! JSON API and renders it as HTML fragments for named host-page containers.
//!
//! Two entry points share one rendering core:
//!
//! - **Direct list**: render a known researcher's publications into a list
//!   container ([`flows::render_publication_list`]).
//! - **Search**: resolve free text to a researcher, render their profile
//!   block, then their publications ([`flows::render_researcher_search`]).
//!
//! # Example
//!
//! ```no_run
//! use researchmap_publist::{Config, ResearchmapClient};
//! use researchmap_publist::client::PublicationQuery;
//! use researchmap_publist::flows::{self, Container};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = ResearchmapClient::new(Config::new())?;
//!     let mut list = Container::new("publist");
//!
//!     flows::render_publication_list(
//!         &client,
//!         "tanaka_taro",
//!         &mut list,
//!         PublicationQuery::default(),
//!     )
//!     .await;
//!
//!     println!("{}", list.html());
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod flows;
pub mod formatters;
pub mod models;
pub mod resolver;

pub use client::ResearchmapClient;
pub use config::Config;
pub use error::Error;
