//! Named collections of artifacts and artists
//!
//! A [`Collection`] owns its members: adding an entity moves it in, so an
//! entity belongs to at most one collection. Members keep insertion order,
//! which is also the order their triples appear in the merged graph.

use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{debug, info, warn};

use crate::enrichment::museums::RelatedWork;
use crate::entity::{
    Artifact, Artist, CulturePolicy, Entity, EntityError, EntityResult, Row,
};
use crate::ontology::{link, TripleSet};

/// A row that could not be turned into an artifact
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RowRejection {
    /// Zero-based row index in the source table
    pub index: usize,
    /// Why the row was rejected
    #[serde(serialize_with = "serialize_display")]
    pub error: EntityError,
}

fn serialize_display<S: serde::Serializer>(
    error: &EntityError,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_str(error)
}

/// Named, ordered set of artifacts and artists
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Collection {
    name: String,
    artifacts: Vec<Artifact>,
    artists: Vec<Artist>,
}

impl Collection {
    /// Create an empty collection
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            artifacts: Vec::new(),
            artists: Vec::new(),
        }
    }

    /// Build a collection from table rows
    ///
    /// Every row yields one artifact. With a culture policy, rows whose
    /// culture does not match are rejected and reported instead of added.
    /// Each distinct, known artist display name yields one artist, in
    /// first-seen order.
    pub fn from_rows(
        name: impl Into<String>,
        rows: &[Row],
        culture: Option<CulturePolicy>,
    ) -> (Self, Vec<RowRejection>) {
        let mut collection = Self::new(name);
        let mut rejections = Vec::new();

        for (index, row) in rows.iter().enumerate() {
            let artifact = match culture {
                Some(policy) => Artifact::from_row_with_culture(row, policy),
                None => Ok(Artifact::from_row(row)),
            };

            match artifact {
                Ok(artifact) => collection.push_artifact(artifact),
                Err(error) => {
                    warn!(row = index, error = %error, "Row rejected");
                    rejections.push(RowRejection { index, error });
                    continue;
                }
            }

            let artist = Artist::from_row(row);
            if !artist.is_unknown() && collection.artist(&artist.display_name).is_none() {
                collection.push_artist(artist);
            }
        }

        info!(
            collection = %collection.name,
            rows = rows.len(),
            artifacts = collection.artifacts.len(),
            artists = collection.artists.len(),
            rejected = rejections.len(),
            "Collection built from rows"
        );

        (collection, rejections)
    }

    /// Collection name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Add an artifact
    ///
    /// # Errors
    ///
    /// Returns [`EntityError::TypeContractViolation`] if `entity` is not an
    /// artifact
    pub fn add_artifact(&mut self, entity: impl Into<Entity>) -> EntityResult<()> {
        match entity.into() {
            Entity::Artifact(artifact) => {
                self.push_artifact(artifact);
                Ok(())
            }
            other => Err(EntityError::TypeContractViolation {
                expected: "Artifact",
                found: other.kind(),
            }),
        }
    }

    /// Add an artist
    ///
    /// # Errors
    ///
    /// Returns [`EntityError::TypeContractViolation`] if `entity` is not an
    /// artist
    pub fn add_artist(&mut self, entity: impl Into<Entity>) -> EntityResult<()> {
        match entity.into() {
            Entity::Artist(artist) => {
                self.push_artist(artist);
                Ok(())
            }
            other => Err(EntityError::TypeContractViolation {
                expected: "Artist",
                found: other.kind(),
            }),
        }
    }

    /// Add an artifact without going through [`Entity`]
    pub fn push_artifact(&mut self, artifact: Artifact) {
        debug!(title = %artifact.display_title(), "Adding artifact");
        self.artifacts.push(artifact);
    }

    /// Add an artist without going through [`Entity`]
    pub fn push_artist(&mut self, artist: Artist) {
        debug!(artist = %artist.display_name, "Adding artist");
        self.artists.push(artist);
    }

    pub fn artifacts(&self) -> &[Artifact] {
        &self.artifacts
    }

    pub fn artists(&self) -> &[Artist] {
        &self.artists
    }

    pub fn artifacts_mut(&mut self) -> &mut [Artifact] {
        &mut self.artifacts
    }

    pub fn artists_mut(&mut self) -> &mut [Artist] {
        &mut self.artists
    }

    /// First artist with exactly this display name
    pub fn artist(&self, display_name: &str) -> Option<&Artist> {
        self.artists.iter().find(|a| a.display_name == display_name)
    }

    /// Merged graph of every member plus creator links
    ///
    /// Members without a stable identifier get a minted one, which is kept.
    pub fn to_rdf(&mut self) -> TripleSet {
        link(&mut self.artifacts, &mut self.artists)
    }

    /// Cumulative number of artifacts accessioned up to each year
    ///
    /// Artifacts without an accession year are not counted.
    pub fn accession_counts(&self) -> BTreeMap<i32, usize> {
        let mut per_year: BTreeMap<i32, usize> = BTreeMap::new();
        for year in self.artifacts.iter().filter_map(|a| a.accession_year) {
            *per_year.entry(year).or_default() += 1;
        }

        let mut running = 0;
        per_year
            .into_iter()
            .map(|(year, count)| {
                running += count;
                (year, running)
            })
            .collect()
    }

    /// Add discovery hits as new artifacts
    ///
    /// Returns the number of artifacts added.
    pub fn absorb_related_works(&mut self, works: &[RelatedWork]) -> usize {
        for work in works {
            self.push_artifact(Artifact::from_related_work(work));
        }
        info!(collection = %self.name, added = works.len(), "Absorbed related works");
        works.len()
    }

    /// Number of members of both kinds
    pub fn len(&self) -> usize {
        self.artifacts.len() + self.artists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty() && self.artists.is_empty()
    }
}
