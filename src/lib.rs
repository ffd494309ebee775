//! musegraph - Museum collection metadata as linked data
//!
//! Turns tabular museum records into typed artifacts and artists, projects
//! them onto a CIDOC-CRM based RDF graph, and enriches them from Wikidata
//! and two public museum search APIs.
//!
//! # Architecture
//!
//! The library is organized into several modules:
//!
//! - [`entity`] - Rows, artifacts, artists and construction policies
//! - [`collection`] - Named collections and the merged graph
//! - [`ontology`] - Vocabulary, URI minting, projection and linking
//! - [`enrichment`] - Wikidata and museum search adapters
//! - [`config`] - Configuration management and settings
//! - [`error`] - Unified error type
//! - [`utils`] - Retry and HTTP error helpers
//!
//! # Example
//!
//! ```
//! use musegraph::prelude::*;
//!
//! let rows = vec![Row::new()
//!     .with(columns::TITLE, "Red Figure Vase")
//!     .with(columns::CULTURE, "Greek, Attic")
//!     .with(columns::ARTIST_DISPLAY_NAME, "Jane Doe")];
//!
//! let (mut collection, rejected) =
//!     Collection::from_rows("Attic Pottery", &rows, Some(CulturePolicy::Greek));
//! assert!(rejected.is_empty());
//!
//! let graph = collection.to_rdf();
//! assert!(graph
//!     .iter()
//!     .any(|t| t.subject == "http://w3id.org/example/artifact/Red_Figure_Vase"));
//! ```

pub mod collection;
pub mod config;
pub mod enrichment;
pub mod entity;
pub mod error;
pub mod ontology;
pub mod utils;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::collection::{Collection, RowRejection};
    pub use crate::config::Config;
    pub use crate::enrichment::{
        DiscoveryFilter, EnrichmentReport, MuseumSearchClient, WikidataClient,
    };
    pub use crate::entity::{
        columns, read_rows, Artifact, Artist, ArtistRole, CulturePolicy, Entity, EntityError, Row,
    };
    pub use crate::error::{Error, ErrorCategory, MusegraphErrorTrait, Result};
    pub use crate::ontology::{ResolveUri, ToTriples, TripleSet};
}

// Direct re-exports for convenience
pub use collection::Collection;
pub use entity::{Artifact, Artist};
pub use error::{Error, Result};
pub use ontology::TripleSet;
