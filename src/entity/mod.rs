//! Typed museum entities built from tabular rows
//!
//! # Submodules
//!
//! - [`row`] - Row records and source column names
//! - [`list`] - Safe decoding of list-valued cells
//! - [`artifact`] - Object records
//! - [`artist`] - Creator records
//! - [`policy`] - Culture and role construction policies
//! - [`error`] - Construction and membership errors
//!
//! Construction never fails on malformed cells: list columns degrade to
//! empty lists, a missing artist name becomes [`artist::UNKNOWN_ARTIST`],
//! and an identifier that is not an absolute URI is dropped so it can be
//! minted later. Only policy checks fail construction.

pub mod artifact;
pub mod artist;
pub mod error;
pub mod list;
pub mod policy;
pub mod row;

pub use artifact::Artifact;
pub use artist::Artist;
pub use error::{EntityError, EntityResult};
pub use policy::{ArtistRole, CulturePolicy};
pub use row::{columns, read_rows, Row};

/// Either kind of entity, as offered to a collection
#[derive(Debug, Clone, PartialEq)]
pub enum Entity {
    Artifact(Artifact),
    Artist(Artist),
}

impl Entity {
    /// Human-readable kind name
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Artifact(_) => "Artifact",
            Self::Artist(_) => "Artist",
        }
    }
}

impl From<Artifact> for Entity {
    fn from(artifact: Artifact) -> Self {
        Self::Artifact(artifact)
    }
}

impl From<Artist> for Entity {
    fn from(artist: Artist) -> Self {
        Self::Artist(artist)
    }
}
