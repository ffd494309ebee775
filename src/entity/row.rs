//! Row-shaped input records
//!
//! A [`Row`] is one record of the source table: column name to raw cell
//! value. Cells stay as [`serde_json::Value`] so numbers, strings and nulls
//! from any loader survive untouched until an entity constructor decides
//! how to read them.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

use super::list::{decode_list, first_name, is_missing_text};

/// Source column names
pub mod columns {
    pub const DEPARTMENT: &str = "Department";
    pub const ACCESSION_YEAR: &str = "AccessionYear";
    pub const OBJECT_NAME: &str = "Object Name";
    pub const TITLE: &str = "Title";
    pub const CULTURE: &str = "Culture";
    pub const PERIOD: &str = "Period";
    pub const MEDIUM: &str = "Medium";
    pub const CLASSIFICATION: &str = "Classification";
    pub const CREDIT_LINE: &str = "Credit Line";
    pub const OBJECT_WIKIDATA_URL: &str = "Object Wikidata URL";
    pub const TAGS: &str = "Tags";
    pub const TAGS_AAT_URL: &str = "Tags AAT URL";
    pub const TAGS_WIKIDATA_URL: &str = "Tags Wikidata URL";
    pub const DIMENSIONS: &str = "Dimensions";
    pub const CM_VALUE: &str = "cm_value";
    pub const ARTIST_DISPLAY_NAME: &str = "Artist Display Name";
    pub const ARTIST_NATIONALITY: &str = "Artist Nationality";
    pub const ARTIST_WIKIDATA_URL: &str = "Artist Wikidata URL";
}

/// One record of the source table
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Row {
    cells: HashMap<String, Value>,
}

impl Row {
    /// Create an empty row
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style cell setter
    #[must_use]
    pub fn with(mut self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.cells.insert(column.into(), value.into());
        self
    }

    /// Set a cell
    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<Value>) {
        self.cells.insert(column.into(), value.into());
    }

    /// Raw cell access; null, empty and `nan` cells read as absent
    pub fn get(&self, column: &str) -> Option<&Value> {
        match self.cells.get(column)? {
            Value::Null => None,
            Value::String(s) if is_missing_text(s) => None,
            other => Some(other),
        }
    }

    /// Read a cell as text, passing strings through unchanged
    pub fn text(&self, column: &str) -> Option<String> {
        match self.get(column)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }

    /// Read a cell as a finite number
    pub fn number(&self, column: &str) -> Option<f64> {
        let n = match self.get(column)? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        }?;
        n.is_finite().then_some(n)
    }

    /// Read a list-valued cell; malformed cells become empty lists
    pub fn list(&self, column: &str) -> Vec<String> {
        decode_list(column, self.get(column))
    }

    /// Read the first name out of a possibly multi-valued name cell
    pub fn first_name(&self, column: &str) -> Option<String> {
        first_name(column, self.get(column))
    }

    /// Number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the row has no cells
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl FromIterator<(String, Value)> for Row {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

/// Read a JSON file holding an array of column-name to value objects
///
/// # Errors
///
/// `Error::Io` when the file cannot be read, `Error::Json` when it is not
/// an array of objects
pub fn read_rows(path: &Path) -> crate::Result<Vec<Row>> {
    let content = std::fs::read_to_string(path)?;
    let rows: Vec<Row> = serde_json::from_str(&content)?;

    debug!(path = %path.display(), rows = rows.len(), "Loaded rows");
    Ok(rows)
}
