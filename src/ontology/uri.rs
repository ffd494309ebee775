//! Resolve-or-mint identifiers
//!
//! Entities without a stable external identifier get a fallback URI made
//! of a kind-specific namespace and their title or name, with spaces
//! replaced by underscores. The minted value is written back onto the
//! entity, so the projection and the linker always agree on it.
//!
//! No escaping beyond the space rule is applied; titles containing other
//! URI-unsafe characters produce URIs that downstream parsers may reject.

use tracing::debug;

use super::vocab::{ARTIFACT_NAMESPACE, ARTIST_NAMESPACE};
use crate::entity::{Artifact, Artist};

/// Concatenate a namespace and a label, replacing spaces with underscores
///
/// ```
/// use musegraph::ontology::uri::mint_uri;
///
/// assert_eq!(
///     mint_uri("http://w3id.org/example/artifact/", "Red Figure Vase"),
///     "http://w3id.org/example/artifact/Red_Figure_Vase"
/// );
/// ```
pub fn mint_uri(namespace: &str, label: &str) -> String {
    format!("{namespace}{}", label.replace(' ', "_"))
}

/// Entities that carry a lazily resolved identifier
pub trait ResolveUri {
    /// Namespace used when minting
    const NAMESPACE: &'static str;

    /// Currently stored identifier, stable or previously minted
    fn stored_uri(&self) -> Option<&str>;

    /// Label the fallback URI is derived from
    fn mint_label(&self) -> &str;

    /// Persist a resolved identifier onto the entity
    fn store_uri(&mut self, uri: String);

    /// Return the stored identifier, minting and caching one if absent
    fn resolve_uri(&mut self) -> String {
        if let Some(uri) = self.stored_uri() {
            return uri.to_string();
        }
        let minted = mint_uri(Self::NAMESPACE, self.mint_label());
        debug!(uri = %minted, "Minted fallback identifier");
        self.store_uri(minted.clone());
        minted
    }
}

impl ResolveUri for Artifact {
    const NAMESPACE: &'static str = ARTIFACT_NAMESPACE;

    fn stored_uri(&self) -> Option<&str> {
        self.object_wikidata_url.as_deref()
    }

    fn mint_label(&self) -> &str {
        self.display_title()
    }

    fn store_uri(&mut self, uri: String) {
        self.object_wikidata_url = Some(uri);
    }
}

impl ResolveUri for Artist {
    const NAMESPACE: &'static str = ARTIST_NAMESPACE;

    fn stored_uri(&self) -> Option<&str> {
        self.wikidata_uri.as_deref()
    }

    fn mint_label(&self) -> &str {
        &self.display_name
    }

    fn store_uri(&mut self, uri: String) {
        self.wikidata_uri = Some(uri);
    }
}
