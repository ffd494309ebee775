//! Linked-data projection of museum entities
//!
//! This module turns [`Artifact`](crate::entity::Artifact) and
//! [`Artist`](crate::entity::Artist) values into a CIDOC-CRM based triple
//! set and joins the two into a single graph.
//!
//! # Submodules
//!
//! - [`vocab`] - Namespaces, classes and predicates
//! - [`triple`] - Terms, triples, ordered triple sets, Turtle/N-Triples
//! - [`uri`] - Resolve-or-mint identifiers
//! - [`projection`] - Per-entity triple shapes
//! - [`linker`] - Artist/artifact join
//!
//! # Quick Start
//!
//! ```
//! use musegraph::entity::{Artifact, Artist};
//! use musegraph::ontology::{link, vocab};
//!
//! let mut artifacts = vec![Artifact {
//!     title: Some("Amphora".to_string()),
//!     creator_name: Some("Jane Doe".to_string()),
//!     ..Artifact::default()
//! }];
//! let mut artists = vec![Artist::new("Jane Doe")];
//!
//! let graph = link(&mut artifacts, &mut artists);
//! assert_eq!(graph.with_predicate(vocab::HAS_CREATED).count(), 1);
//! println!("{}", graph.to_turtle());
//! ```

pub mod linker;
pub mod projection;
pub mod triple;
pub mod uri;
pub mod vocab;

pub use linker::{find_matches, link};
pub use projection::ToTriples;
pub use triple::{Edge, Term, Triple, TripleSet};
pub use uri::{mint_uri, ResolveUri};
