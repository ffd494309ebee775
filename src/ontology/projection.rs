//! Entity to triple projection
//!
//! [`ToTriples::to_triples`] resolves the subject URI first (the only
//! mutation), then hands off to the pure [`ToTriples::project_onto`].
//! Projection only adds triples. A field that is absent on the entity simply
//! produces no triple.

use chrono::NaiveDate;

use super::triple::{Term, TripleSet};
use super::uri::ResolveUri;
use super::vocab;
use crate::entity::{Artifact, Artist};

/// Entities with a fixed RDF shape
pub trait ToTriples: ResolveUri {
    /// Emit this entity's triples with `subject` as the subject IRI
    fn project_onto(&self, subject: &str, graph: &mut TripleSet);

    /// Resolve the identifier, then project
    fn to_triples(&mut self) -> TripleSet {
        let subject = self.resolve_uri();
        let mut graph = TripleSet::new();
        self.project_onto(&subject, &mut graph);
        graph
    }
}

impl ToTriples for Artifact {
    fn project_onto(&self, subject: &str, graph: &mut TripleSet) {
        graph.add(subject, vocab::RDF_TYPE, Term::iri(vocab::MAN_MADE_OBJECT));

        if let Some(year) = self.accession_year {
            graph.add(
                subject,
                vocab::HAS_TIME_SPAN,
                Term::typed(year.to_string(), vocab::XSD_GYEAR),
            );
        }
        if let Some(title) = &self.title {
            graph.add(subject, vocab::TITLE, Term::literal(title));
        }
        if let Some(medium) = &self.medium {
            graph.add(subject, vocab::CONSISTS_OF, Term::literal(medium));
        }
        if let Some(object_name) = &self.object_name {
            graph.add(subject, vocab::HAS_TYPE, Term::literal(object_name));
        }
        for tag in &self.tags {
            graph.add(subject, vocab::HAS_TYPE, Term::literal(tag));
        }
        if let Some(department) = &self.department {
            graph.add(subject, vocab::FORMS_PART_OF, Term::literal(department));
        }
        for uri in &self.tags_wikidata_url {
            graph.add(subject, vocab::HAS_EXTERNAL_REFERENCE, Term::iri(uri));
        }
        // Descriptions belong to the tag concept, not the artifact
        for (tag_uri, description) in &self.enriched_tags {
            graph.add(
                tag_uri.as_str(),
                vocab::RDFS_COMMENT,
                Term::lang(description, "en"),
            );
        }
    }
}

impl ToTriples for Artist {
    fn project_onto(&self, subject: &str, graph: &mut TripleSet) {
        graph.add(subject, vocab::RDF_TYPE, Term::iri(vocab::PERSON));
        graph.add(subject, vocab::NAME, Term::literal(&self.display_name));

        if let Some(nationality) = &self.nationality {
            graph.add(subject, vocab::NATIONALITY, Term::literal(nationality));
        }
        if let Some(dob) = &self.date_of_birth {
            graph.add(subject, vocab::BIRTH_DATE, birth_date_term(dob));
        }
    }
}

/// Type a birth date as `xsd:date` when its leading part is a calendar date
fn birth_date_term(raw: &str) -> Term {
    raw.get(..10)
        .and_then(|prefix| NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok())
        .map(|date| Term::typed(date.format("%Y-%m-%d").to_string(), vocab::XSD_DATE))
        .unwrap_or_else(|| Term::literal(raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn amphora() -> Artifact {
        Artifact {
            department: Some("Greek and Roman Art".to_string()),
            accession_year: Some(1906),
            object_name: Some("Amphora".to_string()),
            title: Some("Amphora".to_string()),
            medium: Some("Terracotta".to_string()),
            tags: vec!["Horses".to_string()],
            tags_wikidata_url: vec!["https://www.wikidata.org/wiki/Q726".to_string()],
            ..Artifact::default()
        }
    }

    #[test]
    fn test_artifact_shape() {
        let mut artifact = amphora();
        let graph = artifact.to_triples();
        let subject = "http://w3id.org/example/artifact/Amphora";

        assert_eq!(graph.about(subject).count(), 8);
        assert_eq!(graph.with_predicate(vocab::HAS_TYPE).count(), 2);
        assert_eq!(graph.with_predicate(vocab::HAS_EXTERNAL_REFERENCE).count(), 1);
        assert!(graph
            .with_predicate(vocab::HAS_TIME_SPAN)
            .all(|t| t.object == Term::typed("1906", vocab::XSD_GYEAR)));
    }

    #[test]
    fn test_enriched_tags_attach_to_tag_uri() {
        let mut artifact = amphora();
        artifact.enriched_tags.push((
            "https://www.wikidata.org/wiki/Q726".to_string(),
            "domesticated animal".to_string(),
        ));
        let graph = artifact.to_triples();
        let comments: Vec<_> = graph.with_predicate(vocab::RDFS_COMMENT).collect();
        assert_eq!(comments.len(), 1);
        assert_eq!(comments[0].subject, "https://www.wikidata.org/wiki/Q726");
    }

    #[test]
    fn test_projection_is_repeatable() {
        let mut artifact = amphora();
        let first = artifact.to_triples();
        let second = artifact.to_triples();
        assert_eq!(first, second);
        assert_eq!(first.to_ntriples(), second.to_ntriples());
    }

    #[test]
    fn test_artist_birth_date_only_when_present() {
        let mut artist = Artist::new("Jane Doe").with_nationality("Greek");
        let graph = artist.to_triples();
        assert_eq!(graph.len(), 3);
        assert_eq!(graph.with_predicate(vocab::BIRTH_DATE).count(), 0);

        artist.date_of_birth = Some("1853-03-30T00:00:00Z".to_string());
        let graph = artist.to_triples();
        let dob: Vec<_> = graph.with_predicate(vocab::BIRTH_DATE).collect();
        assert_eq!(dob.len(), 1);
        assert_eq!(dob[0].object, Term::typed("1853-03-30", vocab::XSD_DATE));
    }

    #[test]
    fn test_unparseable_birth_date_stays_plain() {
        assert_eq!(birth_date_term("c. 550 BC"), Term::literal("c. 550 BC"));
    }
}
