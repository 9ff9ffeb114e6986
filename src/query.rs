//! Journey lists for batch queries.

use std::path::Path;

use serde::Deserialize;

use crate::error::LoadError;

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Journey {
    pub from: String,
    pub to: String,
}

impl Journey {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

/// Reads a `from,to` csv file with a header row.
pub fn read_journeys(path: impl AsRef<Path>) -> Result<Vec<Journey>, LoadError> {
    let journeys: Vec<Journey> = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)?
        .deserialize()
        .collect::<Result<_, csv::Error>>()?;

    Ok(journeys)
}

/// A long journey, a short central one, and one that needs several line changes.
pub fn default_journeys() -> Vec<Journey> {
    vec![
        Journey::new("Harrow & Wealdstone", "Elephant & Castle"),
        Journey::new("King's Cross St. Pancras", "Oxford Circus"),
        Journey::new("Cockfosters", "Brixton"),
    ]
}
