//! Museum search adapters
//!
//! Two public, unauthenticated search APIs are consulted:
//! - Art Institute of Chicago (`/api/v1/artworks/search`)
//! - Cleveland Museum of Art (`/api/artworks/`)
//!
//! Both answer a GET with a JSON object whose `data` array holds the hits.
//! Each source is queried independently; one failing never hides the
//! other's results.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use tracing::{debug, info, warn};

use super::fetcher::JsonFetcher;
use crate::config::EnrichmentConfig;
use crate::entity::artist::UNKNOWN_ARTIST;
use crate::entity::{Artifact, Artist};
use crate::utils::error::FetchError;

const CHICAGO_ARTWORK_URL: &str = "https://www.artic.edu/artworks";
const CHICAGO_FIELDS: &str = "id,title,artist_title,date_display";
const UNKNOWN_DATE: &str = "Unknown";

/// Which museum a hit came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MuseumSource {
    ArtInstituteChicago,
    ClevelandMuseum,
}

impl MuseumSource {
    /// Human-readable institution name
    pub fn label(&self) -> &'static str {
        match self {
            Self::ArtInstituteChicago => "Art Institute of Chicago",
            Self::ClevelandMuseum => "Cleveland Museum of Art",
        }
    }
}

impl fmt::Display for MuseumSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A similar-artwork hit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarArtwork {
    pub source: MuseumSource,
    pub title: Option<String>,
    pub date: String,
    pub url: Option<String>,
}

/// A cross-collection discovery hit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelatedWork {
    pub source: MuseumSource,
    pub id: String,
    pub title: Option<String>,
    pub url: Option<String>,
    /// Artist as reported by the museum, `"Unknown"` when absent
    pub artist: String,
}

impl RelatedWork {
    /// The reported artist, unless the museum did not name one
    pub fn known_artist(&self) -> Option<&str> {
        (self.artist != UNKNOWN_ARTIST).then_some(self.artist.as_str())
    }
}

/// How discovery hits are matched back to the collection's artists
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DiscoveryFilter {
    /// Keep a hit if its artist contains the name of the artist whose
    /// query produced it
    #[default]
    PerArtist,

    /// Filter every hit against the last artist iterated. Earlier
    /// artists' hits survive only if they happen to match that name.
    LastArtistOnly,
}

/// Search envelope. Hits are decoded one at a time by `items`.
#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    data: Option<Vec<Value>>,
}

impl SearchResponse {
    fn items<T: DeserializeOwned>(self, source: MuseumSource) -> Vec<T> {
        self.data
            .unwrap_or_default()
            .into_iter()
            .filter_map(|raw| match serde_json::from_value(raw) {
                Ok(item) => Some(item),
                Err(e) => {
                    debug!(%source, error = %e, "Skipping malformed search hit");
                    None
                }
            })
            .collect()
    }
}

#[derive(Debug, Deserialize)]
struct ChicagoItem {
    id: Value,
    title: Option<String>,
    artist_title: Option<String>,
    date_display: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ClevelandItem {
    id: Value,
    title: Option<String>,
    url: Option<String>,
    creation_date: Option<String>,
    #[serde(default)]
    creators: Option<Vec<ClevelandCreator>>,
}

#[derive(Debug, Deserialize)]
struct ClevelandCreator {
    description: Option<String>,
}

/// Render a JSON id (numeric or string) as text
fn id_text(id: &Value) -> String {
    match id {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

impl ChicagoItem {
    fn url(&self) -> String {
        format!("{CHICAGO_ARTWORK_URL}/{}", id_text(&self.id))
    }

    fn into_similar(self) -> SimilarArtwork {
        SimilarArtwork {
            source: MuseumSource::ArtInstituteChicago,
            url: Some(self.url()),
            date: self.date_display.unwrap_or_else(|| UNKNOWN_DATE.to_string()),
            title: self.title,
        }
    }

    fn into_related(self) -> RelatedWork {
        RelatedWork {
            source: MuseumSource::ArtInstituteChicago,
            id: id_text(&self.id),
            url: Some(self.url()),
            title: self.title,
            artist: self
                .artist_title
                .unwrap_or_else(|| UNKNOWN_ARTIST.to_string()),
        }
    }
}

impl ClevelandItem {
    fn into_similar(self) -> SimilarArtwork {
        SimilarArtwork {
            source: MuseumSource::ClevelandMuseum,
            title: self.title,
            date: self
                .creation_date
                .unwrap_or_else(|| UNKNOWN_DATE.to_string()),
            url: self.url,
        }
    }

    fn into_related(self) -> RelatedWork {
        let artist = self
            .creators
            .into_iter()
            .flatten()
            .next()
            .and_then(|c| c.description)
            .unwrap_or_else(|| UNKNOWN_ARTIST.to_string());

        RelatedWork {
            source: MuseumSource::ClevelandMuseum,
            id: id_text(&self.id),
            title: self.title,
            url: self.url,
            artist,
        }
    }
}

/// Client for both museum search APIs
pub struct MuseumSearchClient {
    fetcher: JsonFetcher,
    chicago_url: String,
    cleveland_url: String,
}

impl MuseumSearchClient {
    /// Create a client from enrichment configuration
    ///
    /// # Errors
    ///
    /// Returns `FetchError::Http` if the HTTP client cannot be created
    pub fn new(config: &EnrichmentConfig) -> Result<Self, FetchError> {
        Ok(Self::with_fetcher(
            JsonFetcher::new(config)?,
            config.chicago_url.clone(),
            config.cleveland_url.clone(),
        ))
    }

    /// Create a client around an existing fetcher
    pub fn with_fetcher(
        fetcher: JsonFetcher,
        chicago_url: impl Into<String>,
        cleveland_url: impl Into<String>,
    ) -> Self {
        Self {
            fetcher,
            chicago_url: chicago_url.into(),
            cleveland_url: cleveland_url.into(),
        }
    }

    async fn search_chicago(&self, q: &str, limit: usize) -> Result<Vec<ChicagoItem>, FetchError> {
        let response: SearchResponse = self
            .fetcher
            .get_json(
                &self.chicago_url,
                &[
                    ("q", q.to_string()),
                    ("limit", limit.to_string()),
                    ("fields", CHICAGO_FIELDS.to_string()),
                ],
                "application/json",
            )
            .await?;
        Ok(response.items(MuseumSource::ArtInstituteChicago))
    }

    async fn search_cleveland(
        &self,
        q: &str,
        limit: usize,
    ) -> Result<Vec<ClevelandItem>, FetchError> {
        let response: SearchResponse = self
            .fetcher
            .get_json(
                &self.cleveland_url,
                &[("q", q.to_string()), ("limit", limit.to_string())],
                "application/json",
            )
            .await?;
        Ok(response.items(MuseumSource::ClevelandMuseum))
    }

    /// Artworks from both museums sharing the artifact's classification
    ///
    /// Returns an empty list without any request when the artifact has no
    /// classification.
    pub async fn similar_artworks(&self, artifact: &Artifact, limit: usize) -> Vec<SimilarArtwork> {
        let Some(classification) = artifact.classification.as_deref() else {
            debug!(title = %artifact.display_title(), "No classification, skipping similar search");
            return Vec::new();
        };

        let mut results = Vec::new();

        match self.search_chicago(classification, limit).await {
            Ok(items) => results.extend(items.into_iter().map(ChicagoItem::into_similar)),
            Err(e) => warn!(error = %e, "Art Institute of Chicago search failed"),
        }

        match self.search_cleveland(classification, limit).await {
            Ok(items) => results.extend(items.into_iter().map(ClevelandItem::into_similar)),
            Err(e) => warn!(error = %e, "Cleveland Museum of Art search failed"),
        }

        debug!(classification, count = results.len(), "Similar artworks found");
        results
    }

    /// Works in either museum by the given artists
    ///
    /// Each artist is searched by display name in both museums. Hits are
    /// filtered by `filter` and truncated to `limit * 2`.
    pub async fn discover_related_works(
        &self,
        artists: &[Artist],
        limit: usize,
        filter: DiscoveryFilter,
    ) -> Vec<RelatedWork> {
        // (index of the querying artist, hit)
        let mut hits: Vec<(usize, RelatedWork)> = Vec::new();

        for (idx, artist) in artists.iter().enumerate() {
            let name = artist.display_name.as_str();

            match self.search_chicago(name, limit).await {
                Ok(items) => hits.extend(items.into_iter().map(|i| (idx, i.into_related()))),
                Err(e) => warn!(artist = name, error = %e, "Art Institute of Chicago search failed"),
            }

            match self.search_cleveland(name, limit).await {
                Ok(items) => hits.extend(items.into_iter().map(|i| (idx, i.into_related()))),
                Err(e) => warn!(artist = name, error = %e, "Cleveland Museum of Art search failed"),
            }
        }

        let total = hits.len();
        let last = artists.last().map(|a| a.display_name.as_str());
        let works: Vec<RelatedWork> = hits
            .into_iter()
            .filter(|(idx, work)| {
                let name = match filter {
                    DiscoveryFilter::PerArtist => Some(artists[*idx].display_name.as_str()),
                    DiscoveryFilter::LastArtistOnly => last,
                };
                name.is_some_and(|n| work.artist.contains(n))
            })
            .map(|(_, work)| work)
            .take(limit.saturating_mul(2))
            .collect();

        info!(
            artists = artists.len(),
            hits = total,
            kept = works.len(),
            "Cross-collection discovery finished"
        );
        works
    }
}
