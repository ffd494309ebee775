use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use musegraph::config::Config;
use musegraph::enrichment::{DiscoveryFilter, MuseumSearchClient};
use musegraph::entity::Artifact;
use musegraph::{Collection, Error};

use super::{load_rows, write_output};

pub async fn similar(config: &Config, input: &Path, row: usize, limit: usize) -> Result<()> {
    let rows = load_rows(input)?;
    let artifact = Artifact::from_table(&rows, row).map_err(Error::from)?;

    let client = MuseumSearchClient::new(&config.enrichment)
        .map_err(Error::from)
        .context("Failed to create museum search client")?;
    let results = client.similar_artworks(&artifact, limit).await;

    eprintln!(
        "{} similar artworks for '{}'",
        results.len(),
        artifact.display_title()
    );
    println!("{}", serde_json::to_string_pretty(&results)?);
    Ok(())
}

pub async fn discover(
    config: &Config,
    input: &Path,
    name: &str,
    limit: usize,
    legacy_filter: bool,
    absorb_output: Option<PathBuf>,
) -> Result<()> {
    let rows = load_rows(input)?;
    let (mut collection, _) = Collection::from_rows(name, &rows, None);

    let filter = if legacy_filter {
        DiscoveryFilter::LastArtistOnly
    } else {
        DiscoveryFilter::PerArtist
    };

    let client = MuseumSearchClient::new(&config.enrichment)
        .map_err(Error::from)
        .context("Failed to create museum search client")?;
    let works = client
        .discover_related_works(collection.artists(), limit, filter)
        .await;

    eprintln!(
        "{} related works for {} artists",
        works.len(),
        collection.artists().len()
    );
    println!("{}", serde_json::to_string_pretty(&works)?);

    if let Some(path) = absorb_output {
        collection.absorb_related_works(&works);
        let graph = collection.to_rdf();
        write_output(&graph.to_turtle(), Some(&path))?;
    }

    Ok(())
}
