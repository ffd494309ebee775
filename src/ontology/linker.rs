//! Cross-entity linking
//!
//! Joins artists to artifacts and merges everything into one graph:
//! - Union of every artist's and artifact's own triples
//! - One `crm:P94_has_created` per (artist, artifact) pair whose display
//!   name equals the artifact's recorded creator
//!
//! Matching is exact string equality. "Jane Doe" and "jane doe" do not
//! match, and neither do differently punctuated variants of one name.

use tracing::{debug, info};

use super::projection::ToTriples;
use super::triple::{Term, TripleSet};
use super::uri::ResolveUri;
use super::vocab;
use crate::entity::{Artifact, Artist};

/// Index pairs `(artist, artifact)` whose names match exactly
pub fn find_matches(artifacts: &[Artifact], artists: &[Artist]) -> Vec<(usize, usize)> {
    let mut matches = Vec::new();
    for (artist_idx, artist) in artists.iter().enumerate() {
        for (artifact_idx, artifact) in artifacts.iter().enumerate() {
            if artifact.creator_name.as_deref() == Some(artist.display_name.as_str()) {
                matches.push((artist_idx, artifact_idx));
            }
        }
    }
    matches
}

/// Merge all entity triples and add creator links
///
/// Identifiers are resolved (and minted where missing) on every entity, so
/// link triples never point at an unset URI.
pub fn link(artifacts: &mut [Artifact], artists: &mut [Artist]) -> TripleSet {
    let mut graph = TripleSet::new();

    for artist in artists.iter_mut() {
        graph.merge(artist.to_triples());
    }
    for artifact in artifacts.iter_mut() {
        graph.merge(artifact.to_triples());
    }

    let matches = find_matches(artifacts, artists);
    for &(artist_idx, artifact_idx) in &matches {
        let artist_uri = artists[artist_idx].resolve_uri();
        let artifact_uri = artifacts[artifact_idx].resolve_uri();
        debug!(artist = %artist_uri, artifact = %artifact_uri, "Linking creator");
        graph.add(artist_uri, vocab::HAS_CREATED, Term::iri(artifact_uri));
    }

    info!(
        artists = artists.len(),
        artifacts = artifacts.len(),
        links = matches.len(),
        triples = graph.len(),
        "Linked collection graph"
    );

    graph
}
