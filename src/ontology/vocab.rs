//! Ontology vocabulary
//!
//! Every IRI the projection emits is defined here. CIDOC-CRM covers
//! objects, persons, time-spans and types; Dublin Core supplies titles,
//! FOAF names, schema.org nationality and birth date, and the project
//! namespace holds the external-reference relation and minted identifiers.

pub const RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
pub const RDFS: &str = "http://www.w3.org/2000/01/rdf-schema#";
pub const XSD: &str = "http://www.w3.org/2001/XMLSchema#";
pub const CRM: &str = "http://www.cidoc-crm.org/cidoc-crm/";
pub const DCTERMS: &str = "http://purl.org/dc/terms/";
pub const FOAF: &str = "http://xmlns.com/foaf/0.1/";
pub const SCHEMA: &str = "https://schema.org/";
pub const EX: &str = "http://w3id.org/example/";

/// Namespace for minted artifact identifiers
pub const ARTIFACT_NAMESPACE: &str = "http://w3id.org/example/artifact/";
/// Namespace for minted artist identifiers
pub const ARTIST_NAMESPACE: &str = "http://w3id.org/example/artist/";

/// Prefix bindings used for Turtle output, in declaration order
pub const PREFIXES: &[(&str, &str)] = &[
    ("rdf", RDF),
    ("rdfs", RDFS),
    ("xsd", XSD),
    ("crm", CRM),
    ("dcterms", DCTERMS),
    ("foaf", FOAF),
    ("schema", SCHEMA),
    ("ex", EX),
];

// Classes
pub const MAN_MADE_OBJECT: &str = "http://www.cidoc-crm.org/cidoc-crm/E22_Man-Made_Object";
pub const PERSON: &str = "http://www.cidoc-crm.org/cidoc-crm/E21_Person";

// Predicates
pub const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
pub const RDFS_COMMENT: &str = "http://www.w3.org/2000/01/rdf-schema#comment";
pub const HAS_TIME_SPAN: &str = "http://www.cidoc-crm.org/cidoc-crm/P4_has_time-span";
pub const CONSISTS_OF: &str = "http://www.cidoc-crm.org/cidoc-crm/P45_consists_of";
pub const HAS_TYPE: &str = "http://www.cidoc-crm.org/cidoc-crm/P2_has_type";
pub const FORMS_PART_OF: &str = "http://www.cidoc-crm.org/cidoc-crm/P46i_forms_part_of";
pub const HAS_CREATED: &str = "http://www.cidoc-crm.org/cidoc-crm/P94_has_created";
pub const TITLE: &str = "http://purl.org/dc/terms/title";
pub const NAME: &str = "http://xmlns.com/foaf/0.1/name";
pub const NATIONALITY: &str = "https://schema.org/nationality";
pub const BIRTH_DATE: &str = "https://schema.org/birthDate";
pub const HAS_EXTERNAL_REFERENCE: &str = "http://w3id.org/example/hasExternalReference";

// Datatypes
pub const XSD_GYEAR: &str = "http://www.w3.org/2001/XMLSchema#gYear";
pub const XSD_DATE: &str = "http://www.w3.org/2001/XMLSchema#date";

/// Compact an IRI to `prefix:local` when a binding applies and the local
/// part is a plain name
pub fn compact(iri: &str) -> Option<String> {
    PREFIXES.iter().find_map(|(prefix, ns)| {
        let local = iri.strip_prefix(ns)?;
        is_plain_local_name(local).then(|| format!("{prefix}:{local}"))
    })
}

fn is_plain_local_name(local: &str) -> bool {
    let mut chars = local.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_ascii_alphanumeric() || first == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}
