//! Wikidata SPARQL enrichment
//!
//! Tags: each `tags_wikidata_url` entry is looked up by its trailing `Q…`
//! identifier for an English description (label as fallback), appended to
//! the artifact's `enriched_tags`. Artists: the `P569` date of birth is
//! set when the artist carries a Wikidata identifier.
//!
//! Every lookup is best-effort. Failures are logged and counted, never
//! returned, and a failed lookup leaves the entity exactly as it was.

use regex::Regex;
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::LazyLock;
use tracing::{debug, info, warn};

use super::fetcher::JsonFetcher;
use super::EnrichmentReport;
use crate::collection::Collection;
use crate::config::EnrichmentConfig;
use crate::entity::{Artifact, Artist};
use crate::utils::error::FetchError;

const SPARQL_RESULTS_JSON: &str = "application/sparql-results+json";

static ITEM_ID_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^Q[1-9][0-9]*$").unwrap());

/// SPARQL JSON results document
#[derive(Debug, Deserialize)]
struct SparqlResponse {
    results: SparqlResults,
}

#[derive(Debug, Deserialize)]
struct SparqlResults {
    #[serde(default)]
    bindings: Vec<HashMap<String, SparqlValue>>,
}

#[derive(Debug, Deserialize)]
struct SparqlValue {
    value: String,
}

/// Extract the Wikidata item id from the last path segment of a URI
///
/// ```
/// use musegraph::enrichment::wikidata::wikidata_id;
///
/// assert_eq!(wikidata_id("https://www.wikidata.org/wiki/Q11772"), Some("Q11772"));
/// assert_eq!(wikidata_id("http://www.wikidata.org/entity/Q2277/"), Some("Q2277"));
/// assert_eq!(wikidata_id("http://w3id.org/example/artist/Jane_Doe"), None);
/// ```
pub fn wikidata_id(uri: &str) -> Option<&str> {
    let segment = uri.trim_end_matches('/').rsplit('/').next()?;
    ITEM_ID_REGEX.is_match(segment).then_some(segment)
}

/// English label and description of an item, one row at most
pub fn tag_description_query(qid: &str) -> String {
    format!(
        r#"PREFIX wd: <http://www.wikidata.org/entity/>
PREFIX rdfs: <http://www.w3.org/2000/01/rdf-schema#>
PREFIX schema: <http://schema.org/>
SELECT ?label ?description WHERE {{
  OPTIONAL {{ wd:{qid} rdfs:label ?label . FILTER(LANG(?label) = "en") }}
  OPTIONAL {{ wd:{qid} schema:description ?description . FILTER(LANG(?description) = "en") }}
}}
LIMIT 1"#
    )
}

/// Date of birth (P569) of a person, one row at most
pub fn birth_date_query(qid: &str) -> String {
    format!(
        r#"PREFIX wd: <http://www.wikidata.org/entity/>
PREFIX wdt: <http://www.wikidata.org/prop/direct/>
SELECT ?dateOfBirth WHERE {{
  wd:{qid} wdt:P569 ?dateOfBirth .
}}
LIMIT 1"#
    )
}

/// Client for the Wikidata SPARQL endpoint
pub struct WikidataClient {
    fetcher: JsonFetcher,
    endpoint: String,
}

impl WikidataClient {
    /// Create a client from enrichment configuration
    ///
    /// # Errors
    ///
    /// Returns `FetchError::Http` if the HTTP client cannot be created
    pub fn new(config: &EnrichmentConfig) -> Result<Self, FetchError> {
        Ok(Self::with_fetcher(
            JsonFetcher::new(config)?,
            config.wikidata_endpoint.clone(),
        ))
    }

    /// Create a client around an existing fetcher
    pub fn with_fetcher(fetcher: JsonFetcher, endpoint: impl Into<String>) -> Self {
        Self {
            fetcher,
            endpoint: endpoint.into(),
        }
    }

    /// Run a query and return the first binding row, if any
    async fn first_binding(
        &self,
        query: String,
    ) -> Result<Option<HashMap<String, SparqlValue>>, FetchError> {
        let response: SparqlResponse = self
            .fetcher
            .get_json(
                &self.endpoint,
                &[("query", query), ("format", "json".to_string())],
                SPARQL_RESULTS_JSON,
            )
            .await?;
        Ok(response.results.bindings.into_iter().next())
    }

    /// English description of an item, falling back to its English label
    pub async fn tag_description(&self, qid: &str) -> Result<Option<String>, FetchError> {
        let Some(mut row) = self.first_binding(tag_description_query(qid)).await? else {
            return Ok(None);
        };
        Ok(row
            .remove("description")
            .or_else(|| row.remove("label"))
            .map(|v| v.value))
    }

    /// Date of birth of a person item
    pub async fn birth_date(&self, qid: &str) -> Result<Option<String>, FetchError> {
        Ok(self
            .first_binding(birth_date_query(qid))
            .await?
            .and_then(|mut row| row.remove("dateOfBirth"))
            .map(|v| v.value))
    }

    /// Append English descriptions for an artifact's Wikidata tags
    ///
    /// Tags already present in `enriched_tags` are skipped, so repeated
    /// calls do not duplicate entries.
    pub async fn enrich_artifact_tags(&self, artifact: &mut Artifact) -> EnrichmentReport {
        let mut report = EnrichmentReport::default();
        let uris = artifact.tags_wikidata_url.clone();

        for uri in uris {
            if artifact.enriched_tags.iter().any(|(u, _)| *u == uri) {
                report.skipped += 1;
                continue;
            }
            let Some(qid) = wikidata_id(&uri) else {
                debug!(uri = %uri, "Tag URI has no Wikidata item id, skipping");
                report.skipped += 1;
                continue;
            };

            report.attempted += 1;
            match self.tag_description(qid).await {
                Ok(Some(description)) => {
                    artifact.enriched_tags.push((uri, description));
                    report.enriched += 1;
                }
                Ok(None) => {
                    debug!(qid, "No English description for tag");
                }
                Err(e) => {
                    warn!(qid, error = %e, "Wikidata tag enrichment failed");
                    report.failed += 1;
                }
            }
        }

        report
    }

    /// Set an artist's date of birth from Wikidata
    pub async fn enrich_artist(&self, artist: &mut Artist) -> EnrichmentReport {
        let mut report = EnrichmentReport::default();

        if artist.date_of_birth.is_some() {
            report.skipped += 1;
            return report;
        }
        let Some(qid) = artist.wikidata_uri.as_deref().and_then(wikidata_id) else {
            debug!(artist = %artist.display_name, "Artist has no Wikidata item id, skipping");
            report.skipped += 1;
            return report;
        };
        let qid = qid.to_string();

        report.attempted += 1;
        match self.birth_date(&qid).await {
            Ok(Some(dob)) => {
                artist.date_of_birth = Some(dob);
                report.enriched += 1;
            }
            Ok(None) => {
                debug!(qid = %qid, "No date of birth on record");
            }
            Err(e) => {
                warn!(qid = %qid, error = %e, "Wikidata artist enrichment failed");
                report.failed += 1;
            }
        }

        report
    }

    /// Enrich every artifact and artist in a collection, one at a time
    pub async fn enrich_collection(&self, collection: &mut Collection) -> EnrichmentReport {
        let mut report = EnrichmentReport::default();

        for artifact in collection.artifacts_mut() {
            report.merge(self.enrich_artifact_tags(artifact).await);
        }
        for artist in collection.artists_mut() {
            report.merge(self.enrich_artist(artist).await);
        }

        info!(
            collection = %collection.name(),
            attempted = report.attempted,
            enriched = report.enriched,
            failed = report.failed,
            "Wikidata enrichment finished"
        );
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wikidata_id_rejects_non_items() {
        assert_eq!(wikidata_id("https://www.wikidata.org/wiki/Property:P569"), None);
        assert_eq!(wikidata_id("https://www.wikidata.org/wiki/Q0"), None);
        assert_eq!(wikidata_id(""), None);
    }

    #[test]
    fn test_queries_carry_language_filter_and_limit() {
        let q = tag_description_query("Q11772");
        assert!(q.contains("wd:Q11772 schema:description ?description"));
        assert!(q.contains(r#"FILTER(LANG(?description) = "en")"#));
        assert!(q.trim_end().ends_with("LIMIT 1"));

        let q = birth_date_query("Q5582");
        assert!(q.contains("wd:Q5582 wdt:P569 ?dateOfBirth"));
        assert!(q.trim_end().ends_with("LIMIT 1"));
    }
}
