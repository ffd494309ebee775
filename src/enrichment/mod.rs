//! External enrichment adapters
//!
//! # Submodules
//!
//! - [`fetcher`] - Rate-limited JSON client with bounded retry
//! - [`wikidata`] - Tag descriptions and artist birth dates via SPARQL
//! - [`museums`] - Similar-artwork and cross-collection search
//!
//! Adapters are best-effort. A failed call is logged and counted in an
//! [`EnrichmentReport`]; it never propagates past the adapter and never
//! leaves an entity partially updated.

pub mod fetcher;
pub mod museums;
pub mod wikidata;

pub use fetcher::JsonFetcher;
pub use museums::{DiscoveryFilter, MuseumSearchClient, MuseumSource, RelatedWork, SimilarArtwork};
pub use wikidata::WikidataClient;

use serde::Serialize;

/// Outcome counters for an enrichment pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct EnrichmentReport {
    /// Lookups sent to the service
    pub attempted: usize,
    /// Lookups that changed an entity
    pub enriched: usize,
    /// Entries not looked up (already enriched or no usable identifier)
    pub skipped: usize,
    /// Lookups that failed after retry
    pub failed: usize,
}

impl EnrichmentReport {
    /// Add another report's counters to this one
    pub fn merge(&mut self, other: EnrichmentReport) {
        self.attempted += other.attempted;
        self.enriched += other.enriched;
        self.skipped += other.skipped;
        self.failed += other.failed;
    }

    /// True when no lookup failed
    pub fn is_clean(&self) -> bool {
        self.failed == 0
    }
}
