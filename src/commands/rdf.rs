use anyhow::{Context, Result};
use clap::ValueEnum;
use std::path::{Path, PathBuf};

use musegraph::config::Config;
use musegraph::enrichment::WikidataClient;
use musegraph::entity::CulturePolicy;
use musegraph::{Collection, Error};

use super::{load_rows, write_output};

/// Graph serialization format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RdfFormat {
    Turtle,
    Ntriples,
}

pub async fn rdf(
    config: &Config,
    input: &Path,
    name: &str,
    culture: Option<CulturePolicy>,
    format: RdfFormat,
    output: Option<PathBuf>,
    enrich: bool,
) -> Result<()> {
    let rows = load_rows(input)?;
    let (mut collection, rejected) = Collection::from_rows(name, &rows, culture);

    for rejection in &rejected {
        eprintln!("  row {}: {}", rejection.index, rejection.error);
    }

    if enrich {
        let client = WikidataClient::new(&config.enrichment)
            .map_err(Error::from)
            .context("Failed to create Wikidata client")?;
        let report = client.enrich_collection(&mut collection).await;
        eprintln!(
            "Enrichment: {} attempted, {} enriched, {} skipped, {} failed",
            report.attempted, report.enriched, report.skipped, report.failed
        );
    }

    let graph = collection.to_rdf();
    let text = match format {
        RdfFormat::Turtle => graph.to_turtle(),
        RdfFormat::Ntriples => graph.to_ntriples(),
    };

    eprintln!(
        "{}: {} artifacts, {} artists, {} triples ({} rows rejected)",
        collection.name(),
        collection.artifacts().len(),
        collection.artists().len(),
        graph.len(),
        rejected.len()
    );

    write_output(&text, output.as_deref())
}
