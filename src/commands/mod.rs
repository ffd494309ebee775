pub mod rdf;
pub mod search;
pub mod stats;

// Re-export command functions for convenience
pub use rdf::{rdf, RdfFormat};
pub use search::{discover, similar};
pub use stats::stats;

use anyhow::{Context, Result};
use std::path::Path;

use musegraph::entity::{read_rows, Row};

/// Load rows from a JSON array of column-name to value objects
pub fn load_rows(path: &Path) -> Result<Vec<Row>> {
    read_rows(path).with_context(|| format!("Failed to load rows file: {}", path.display()))
}

/// Write to a file, or to stdout when no path is given
pub fn write_output(content: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create output directory: {}", parent.display())
                })?;
            }
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write output file: {}", path.display()))?;
            tracing::info!(path = %path.display(), bytes = content.len(), "Wrote output");
        }
        None => print!("{content}"),
    }
    Ok(())
}
