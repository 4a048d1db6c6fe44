//! Data models for researchmap API entities.
//!
//! All models use `#[serde(default)]` on optional fields so that absent or
//! null fields deserialize to empty values instead of failing. Entities are
//! request-scoped; nothing here outlives one flow invocation.

mod lang;
mod profile;
mod publication;

pub use lang::Bilingual;
pub use profile::{Affiliation, Profile, ResearcherSearchPage, UNKNOWN_NAME};
pub use publication::{Identifiers, Publication, PublicationPage};
