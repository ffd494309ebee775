//! Triples and triple sets
//!
//! A [`TripleSet`] is an insertion-ordered set: adding a triple twice keeps
//! the first occurrence, and serialization walks triples in insertion
//! order, so identical entity state always produces identical output.

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::vocab::{self, PREFIXES};

/// Object position of a triple
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Term {
    Iri(String),
    Literal {
        value: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        datatype: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        language: Option<String>,
    },
}

impl Term {
    pub fn iri(iri: impl Into<String>) -> Self {
        Self::Iri(iri.into())
    }

    /// Plain string literal
    pub fn literal(value: impl Into<String>) -> Self {
        Self::Literal {
            value: value.into(),
            datatype: None,
            language: None,
        }
    }

    /// Datatyped literal
    pub fn typed(value: impl Into<String>, datatype: &str) -> Self {
        Self::Literal {
            value: value.into(),
            datatype: Some(datatype.to_string()),
            language: None,
        }
    }

    /// Language-tagged literal
    pub fn lang(value: impl Into<String>, language: &str) -> Self {
        Self::Literal {
            value: value.into(),
            datatype: None,
            language: Some(language.to_string()),
        }
    }

    /// IRI value, if this term is an IRI
    pub fn as_iri(&self) -> Option<&str> {
        match self {
            Self::Iri(iri) => Some(iri),
            Self::Literal { .. } => None,
        }
    }

    /// Lexical value of the term
    pub fn value(&self) -> &str {
        match self {
            Self::Iri(iri) => iri,
            Self::Literal { value, .. } => value,
        }
    }

    fn to_ntriples(&self) -> String {
        match self {
            Self::Iri(iri) => format!("<{iri}>"),
            Self::Literal {
                value,
                datatype,
                language,
            } => {
                let mut out = format!("\"{}\"", escape_literal(value));
                if let Some(lang) = language {
                    out.push('@');
                    out.push_str(lang);
                } else if let Some(dt) = datatype {
                    out.push_str(&format!("^^<{dt}>"));
                }
                out
            }
        }
    }

    fn to_turtle(&self) -> String {
        match self {
            Self::Iri(iri) => turtle_iri(iri),
            Self::Literal {
                value,
                datatype,
                language,
            } => {
                let mut out = format!("\"{}\"", escape_literal(value));
                if let Some(lang) = language {
                    out.push('@');
                    out.push_str(lang);
                } else if let Some(dt) = datatype {
                    out.push_str("^^");
                    out.push_str(&turtle_iri(dt));
                }
                out
            }
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_ntriples())
    }
}

/// Subject-predicate-object statement; subject and predicate are IRIs
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Triple {
    pub subject: String,
    pub predicate: String,
    pub object: Term,
}

impl Triple {
    pub fn new(subject: impl Into<String>, predicate: impl Into<String>, object: Term) -> Self {
        Self {
            subject: subject.into(),
            predicate: predicate.into(),
            object,
        }
    }

    /// Convert to N-Triples format string
    pub fn to_ntriples(&self) -> String {
        format!(
            "<{}> <{}> {} .",
            self.subject,
            self.predicate,
            self.object.to_ntriples()
        )
    }
}

/// Edge view of a triple for graph renderers
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Edge {
    pub source: String,
    pub target: String,
    pub label: String,
}

/// Insertion-ordered, duplicate-free collection of triples
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TripleSet {
    triples: IndexSet<Triple>,
}

impl TripleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a triple; returns false if it was already present
    pub fn insert(&mut self, triple: Triple) -> bool {
        self.triples.insert(triple)
    }

    /// Insert a triple from its parts
    pub fn add(&mut self, subject: impl Into<String>, predicate: &str, object: Term) -> bool {
        self.insert(Triple::new(subject, predicate, object))
    }

    /// Union another set into this one
    pub fn merge(&mut self, other: TripleSet) {
        self.triples.extend(other.triples);
    }

    pub fn len(&self) -> usize {
        self.triples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    pub fn contains(&self, triple: &Triple) -> bool {
        self.triples.contains(triple)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Triple> {
        self.triples.iter()
    }

    /// Triples using the given predicate
    pub fn with_predicate<'a>(&'a self, predicate: &'a str) -> impl Iterator<Item = &'a Triple> {
        self.triples.iter().filter(move |t| t.predicate == predicate)
    }

    /// Triples about the given subject
    pub fn about<'a>(&'a self, subject: &'a str) -> impl Iterator<Item = &'a Triple> {
        self.triples.iter().filter(move |t| t.subject == subject)
    }

    /// Edge list for graph renderers
    pub fn edges(&self) -> Vec<Edge> {
        self.triples
            .iter()
            .map(|t| Edge {
                source: t.subject.clone(),
                target: t.object.value().to_string(),
                label: t.predicate.clone(),
            })
            .collect()
    }

    /// Export to Turtle, one subject block per distinct subject
    pub fn to_turtle(&self) -> String {
        let mut output = String::new();

        for (prefix, ns) in PREFIXES {
            output.push_str(&format!("@prefix {prefix}: <{ns}> .\n"));
        }
        output.push('\n');

        let mut by_subject: IndexMap<&str, Vec<&Triple>> = IndexMap::new();
        for triple in &self.triples {
            by_subject.entry(triple.subject.as_str()).or_default().push(triple);
        }

        for (subject, triples) in by_subject {
            output.push_str(&turtle_iri(subject));
            output.push('\n');
            let last = triples.len() - 1;
            for (i, triple) in triples.iter().enumerate() {
                let predicate = if triple.predicate == vocab::RDF_TYPE {
                    "a".to_string()
                } else {
                    turtle_iri(&triple.predicate)
                };
                let terminator = if i == last { " ." } else { " ;" };
                output.push_str(&format!(
                    "    {predicate} {}{terminator}\n",
                    triple.object.to_turtle()
                ));
            }
            output.push('\n');
        }

        output
    }

    /// Export to N-Triples format
    pub fn to_ntriples(&self) -> String {
        self.triples
            .iter()
            .map(|t| format!("{}\n", t.to_ntriples()))
            .collect()
    }
}

impl Extend<Triple> for TripleSet {
    fn extend<I: IntoIterator<Item = Triple>>(&mut self, iter: I) {
        self.triples.extend(iter);
    }
}

impl FromIterator<Triple> for TripleSet {
    fn from_iter<I: IntoIterator<Item = Triple>>(iter: I) -> Self {
        Self {
            triples: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for TripleSet {
    type Item = Triple;
    type IntoIter = indexmap::set::IntoIter<Triple>;

    fn into_iter(self) -> Self::IntoIter {
        self.triples.into_iter()
    }
}

impl<'a> IntoIterator for &'a TripleSet {
    type Item = &'a Triple;
    type IntoIter = indexmap::set::Iter<'a, Triple>;

    fn into_iter(self) -> Self::IntoIter {
        self.triples.iter()
    }
}

fn turtle_iri(iri: &str) -> String {
    vocab::compact(iri).unwrap_or_else(|| format!("<{iri}>"))
}

/// Escape string for Turtle and N-Triples literals
fn escape_literal(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}

#[cfg(test)]
mod tests {
    use super::*;

    const SUBJECT: &str = "http://w3id.org/example/artifact/Amphora";

    #[test]
    fn test_set_semantics() {
        let mut set = TripleSet::new();
        assert!(set.add(SUBJECT, vocab::TITLE, Term::literal("Amphora")));
        assert!(!set.add(SUBJECT, vocab::TITLE, Term::literal("Amphora")));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_ntriples_literals() {
        let triple = Triple::new(SUBJECT, vocab::HAS_TIME_SPAN, Term::typed("1906", vocab::XSD_GYEAR));
        assert_eq!(
            triple.to_ntriples(),
            "<http://w3id.org/example/artifact/Amphora> \
             <http://www.cidoc-crm.org/cidoc-crm/P4_has_time-span> \
             \"1906\"^^<http://www.w3.org/2001/XMLSchema#gYear> ."
        );
    }

    #[test]
    fn test_literal_escaping() {
        let term = Term::lang("a \"quoted\"\nline", "en");
        assert_eq!(term.to_string(), "\"a \\\"quoted\\\"\\nline\"@en");
    }

    #[test]
    fn test_turtle_groups_subjects() {
        let mut set = TripleSet::new();
        set.add(SUBJECT, vocab::RDF_TYPE, Term::iri(vocab::MAN_MADE_OBJECT));
        set.add(SUBJECT, vocab::TITLE, Term::literal("Amphora"));
        let turtle = set.to_turtle();

        assert!(turtle.starts_with("@prefix rdf: <http://www.w3.org/1999/02/22-rdf-syntax-ns#> .\n"));
        assert!(turtle.contains(
            "<http://w3id.org/example/artifact/Amphora>\n    a crm:E22_Man-Made_Object ;\n    dcterms:title \"Amphora\" .\n"
        ));
    }

    #[test]
    fn test_edges() {
        let mut set = TripleSet::new();
        set.add(SUBJECT, vocab::TITLE, Term::literal("Amphora"));
        let edges = set.edges();
        assert_eq!(edges.len(), 1);
        assert_eq!(edges[0].target, "Amphora");
        assert_eq!(edges[0].label, vocab::TITLE);
    }
}
