use anyhow::Result;
use std::path::Path;

use musegraph::entity::CulturePolicy;
use musegraph::Collection;

use super::load_rows;

pub fn stats(input: &Path, culture: Option<CulturePolicy>) -> Result<()> {
    let rows = load_rows(input)?;
    let (collection, rejected) = Collection::from_rows("collection", &rows, culture);

    println!("Collection Statistics");
    println!("=====================");
    println!("  Rows:      {}", rows.len());
    println!("  Artifacts: {}", collection.artifacts().len());
    println!("  Artists:   {}", collection.artists().len());
    println!("  Rejected:  {}", rejected.len());

    let counts = collection.accession_counts();
    if counts.is_empty() {
        println!("\nNo accession years recorded");
        return Ok(());
    }

    println!("\nItems accessioned (cumulative)");
    for (year, total) in &counts {
        println!("  {year}  {total}");
    }

    Ok(())
}
