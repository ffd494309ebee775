//! Artist entity

use serde::{Deserialize, Serialize};

use super::artifact::absolute_uri;
use super::error::{EntityError, EntityResult};
use super::policy::ArtistRole;
use super::row::{columns, Row};

/// Sentinel display name for rows without a usable creator
pub const UNKNOWN_ARTIST: &str = "Unknown";

/// Person credited as the creator of one or more artifacts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artist {
    /// First name out of the source name field, never empty
    pub display_name: String,
    pub nationality: Option<String>,
    /// Stable external identifier, or the minted fallback once resolved
    pub wikidata_uri: Option<String>,
    /// Date of birth as returned by Wikidata enrichment
    pub date_of_birth: Option<String>,
}

impl Artist {
    /// Create an artist with just a display name
    pub fn new(display_name: impl Into<String>) -> Self {
        let name = display_name.into();
        let display_name = if name.trim().is_empty() {
            UNKNOWN_ARTIST.to_string()
        } else {
            name
        };
        Self {
            display_name,
            nationality: None,
            wikidata_uri: None,
            date_of_birth: None,
        }
    }

    /// Build an artist from a table row
    ///
    /// Only the first name of a multi-valued name field is kept.
    pub fn from_row(row: &Row) -> Self {
        Self {
            display_name: row
                .first_name(columns::ARTIST_DISPLAY_NAME)
                .unwrap_or_else(|| UNKNOWN_ARTIST.to_string()),
            nationality: row.first_name(columns::ARTIST_NATIONALITY),
            wikidata_uri: row
                .first_name(columns::ARTIST_WIKIDATA_URL)
                .and_then(|raw| absolute_uri(columns::ARTIST_WIKIDATA_URL, &raw)),
            date_of_birth: None,
        }
    }

    /// Build an artist from row `index` of a table
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

    /// Build a role-restricted artist
    ///
    /// # Errors
    ///
    /// Returns [`EntityError::Validation`] when the display name does not
    /// carry the role's token
    pub fn with_role(row: &Row, role: ArtistRole) -> EntityResult<Self> {
        let artist = Self::from_row(row);
        role.validate(&artist)?;
        Ok(artist)
    }

    /// Builder-style nationality setter
    #[must_use]
    pub fn with_nationality(mut self, nationality: impl Into<String>) -> Self {
        self.nationality = Some(nationality.into());
        self
    }

    /// Builder-style identifier setter
    #[must_use]
    pub fn with_wikidata_uri(mut self, uri: impl Into<String>) -> Self {
        self.wikidata_uri = Some(uri.into());
        self
    }

    /// Whether the source row had no usable name
    pub fn is_unknown(&self) -> bool {
        self.display_name == UNKNOWN_ARTIST
    }
}
