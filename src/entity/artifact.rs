//! Artifact entity
//!
//! An [`Artifact`] is one object record from the collection table. Strings
//! pass through unchanged, the accession year is reduced to a 4-digit year,
//! list columns go through the safe list decoder, and the stable Wikidata
//! identifier is kept only when it is a well-formed absolute URI.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::LazyLock;
use tracing::debug;
use url::Url;

use super::error::{EntityError, EntityResult};
use super::policy::CulturePolicy;
use super::row::{columns, Row};
use crate::enrichment::museums::RelatedWork;

/// Museum object record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Artifact {
    pub department: Option<String>,
    /// Four-digit accession year
    pub accession_year: Option<i32>,
    pub object_name: Option<String>,
    pub title: Option<String>,
    pub culture: Option<String>,
    pub period: Option<String>,
    pub medium: Option<String>,
    pub classification: Option<String>,
    pub credit_line: Option<String>,

    /// Stable external identifier, or the minted fallback once resolved
    pub object_wikidata_url: Option<String>,

    pub tags: Vec<String>,
    pub tags_aat_url: Vec<String>,
    /// Parallel to `tags`, but not guaranteed to have the same length
    pub tags_wikidata_url: Vec<String>,

    pub dimensions: Option<String>,
    pub cm_value: Option<f64>,

    /// Recorded creator, compared verbatim against artist display names
    pub creator_name: Option<String>,

    /// (tag URI, description) pairs filled in by Wikidata enrichment
    #[serde(default)]
    pub enriched_tags: Vec<(String, String)>,
}

impl Artifact {
    /// Build an artifact from a table row
    pub fn from_row(row: &Row) -> Self {
        Self {
            department: row.text(columns::DEPARTMENT),
            accession_year: row.get(columns::ACCESSION_YEAR).and_then(parse_accession_year),
            object_name: row.text(columns::OBJECT_NAME),
            title: row.text(columns::TITLE),
            culture: row.text(columns::CULTURE),
            period: row.text(columns::PERIOD),
            medium: row.text(columns::MEDIUM),
            classification: row.text(columns::CLASSIFICATION),
            credit_line: row.text(columns::CREDIT_LINE),
            object_wikidata_url: row
                .text(columns::OBJECT_WIKIDATA_URL)
                .and_then(|raw| absolute_uri(columns::OBJECT_WIKIDATA_URL, &raw)),
            tags: row.list(columns::TAGS),
            tags_aat_url: row.list(columns::TAGS_AAT_URL),
            tags_wikidata_url: row.list(columns::TAGS_WIKIDATA_URL),
            dimensions: row.text(columns::DIMENSIONS),
            cm_value: row.number(columns::CM_VALUE),
            creator_name: row.first_name(columns::ARTIST_DISPLAY_NAME),
            enriched_tags: Vec::new(),
        }
    }

    /// Build an artifact from row `index` of a table
    ///
    /// # Errors
    ///
    /// Returns [`EntityError::RowNotFound`] when `index` is out of range
    pub fn from_table(rows: &[Row], index: usize) -> EntityResult<Self> {
        rows.get(index)
            .map(Self::from_row)
            .ok_or(EntityError::RowNotFound {
                index,
                len: rows.len(),
            })
    }

    /// Build a culture-restricted artifact
    ///
    /// # Errors
    ///
    /// Returns [`EntityError::Validation`] when the culture field does not
    /// contain the policy's required token
    pub fn from_row_with_culture(row: &Row, policy: CulturePolicy) -> EntityResult<Self> {
        let mut artifact = Self::from_row(row);
        policy.apply(&mut artifact)?;
        Ok(artifact)
    }

    /// Build an artifact from a cross-collection discovery hit
    ///
    /// The museum's artwork page becomes the stable identifier when it is
    /// an absolute URI.
    pub fn from_related_work(work: &RelatedWork) -> Self {
        Self {
            title: work.title.clone(),
            object_wikidata_url: work
                .url
                .as_deref()
                .and_then(|url| absolute_uri("url", url)),
            credit_line: Some(work.source.label().to_string()),
            creator_name: work.known_artist().map(str::to_string),
            ..Self::default()
        }
    }

    /// Title used for display and for URI minting
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or(UNTITLED)
    }
}

/// Label used when an artifact has no title
pub const UNTITLED: &str = "Untitled";

static YEAR_PREFIX_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{4})(?:-\d{2})?$").unwrap());

/// Reduce a date-like cell to a 4-digit year
///
/// Accepts integer and float years, bare year strings, ISO dates, the
/// `YYYY-MM-DD HH:MM:SS` timestamps pandas writes, and RFC 3339 timestamps.
pub fn parse_accession_year(value: &Value) -> Option<i32> {
    let year = match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64))
            .and_then(|y| i32::try_from(y).ok()),
        Value::String(s) => parse_year_text(s.trim()),
        _ => None,
    }?;

    (1000..=9999).contains(&year).then_some(year)
}

fn parse_year_text(s: &str) -> Option<i32> {
    if let Ok(year) = s.parse::<i32>() {
        return Some(year);
    }
    if let Ok(f) = s.parse::<f64>() {
        return (f.fract() == 0.0 && f.is_finite()).then_some(f as i32);
    }
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(date.year());
    }
    if let Ok(ts) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S") {
        return Some(ts.year());
    }
    if let Ok(ts) = DateTime::parse_from_rfc3339(s) {
        return Some(ts.year());
    }

    YEAR_PREFIX_REGEX.captures(s)?.get(1)?.as_str().parse().ok()
}

/// Keep a URI only if it parses as an absolute URI
pub(crate) fn absolute_uri(field: &str, raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    match Url::parse(trimmed) {
        Ok(url) if url.has_host() => Some(trimmed.to_string()),
        _ => {
            debug!(field, raw = %raw, "Ignoring identifier that is not an absolute URI");
            None
        }
    }
}
