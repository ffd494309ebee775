//! Common test utilities

use musegraph::config::EnrichmentConfig;
use musegraph::entity::{columns, Row};
use serde_json::{json, Value};
use wiremock::{Match, Request};

/// Row for a Greek vase with list-literal tag columns
pub fn greek_vase_row() -> Row {
    Row::new()
        .with(columns::DEPARTMENT, "Greek and Roman Art")
        .with(columns::ACCESSION_YEAR, "1906-01-01 00:00:00")
        .with(columns::OBJECT_NAME, "Amphora")
        .with(columns::TITLE, "Red Figure Vase")
        .with(columns::CULTURE, "Greek, Attic")
        .with(columns::MEDIUM, "Terracotta")
        .with(columns::CLASSIFICATION, "Vases")
        .with(columns::TAGS, "['Horses', 'Warriors']")
        .with(
            columns::TAGS_WIKIDATA_URL,
            "['https://www.wikidata.org/wiki/Q726', 'https://www.wikidata.org/wiki/Q1250916']",
        )
        .with(columns::ARTIST_DISPLAY_NAME, "Jane Doe")
        .with(columns::ARTIST_NATIONALITY, "Greek")
}

/// Row for a Roman object without a creator
#[allow(dead_code)]
pub fn roman_bust_row() -> Row {
    Row::new()
        .with(columns::ACCESSION_YEAR, 1925)
        .with(columns::TITLE, "Marble Bust")
        .with(columns::CULTURE, "Roman")
        .with(columns::CLASSIFICATION, "Stone Sculpture")
        .with(columns::TAGS, Value::Null)
}

/// Enrichment settings pointed at a mock server with fast retries
#[allow(dead_code)]
pub fn mock_enrichment_config(base_url: &str) -> EnrichmentConfig {
    EnrichmentConfig {
        retry_delay_ms: 10,
        requests_per_second: 1000,
        request_timeout_secs: 5,
        ..EnrichmentConfig::with_base_url(base_url)
    }
}

/// SPARQL JSON results body with one binding row
#[allow(dead_code)]
pub fn sparql_row(bindings: &[(&str, &str)]) -> Value {
    let row: serde_json::Map<String, Value> = bindings
        .iter()
        .map(|(var, value)| {
            (
                var.to_string(),
                json!({"type": "literal", "xml:lang": "en", "value": value}),
            )
        })
        .collect();
    let vars: Vec<&str> = bindings.iter().map(|(var, _)| *var).collect();

    json!({
        "head": {"vars": vars},
        "results": {"bindings": [row]}
    })
}

/// SPARQL JSON results body with no rows
#[allow(dead_code)]
pub fn sparql_empty() -> Value {
    json!({"head": {"vars": []}, "results": {"bindings": []}})
}

/// Matches SPARQL requests whose `query` parameter contains a fragment
#[allow(dead_code)]
pub struct SparqlMentions(pub &'static str);

impl Match for SparqlMentions {
    fn matches(&self, request: &Request) -> bool {
        request
            .url
            .query_pairs()
            .any(|(key, value)| key == "query" && value.contains(self.0))
    }
}
