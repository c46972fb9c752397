use crate::models::{RawVenue, Venue};
use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while loading the venue dataset
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("Failed to read dataset {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid dataset JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Load the venue dataset from a JSON file
///
/// The file holds an object keyed by venue identifier. Venues come back in
/// identifier order so every run over the same file ranks identically.
pub fn load_venues<P: AsRef<Path>>(path: P) -> Result<Vec<Venue>, DatasetError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|source| DatasetError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let venues = parse_venues(&contents)?;
    tracing::info!("Loaded {} venues from {}", venues.len(), path.display());

    Ok(venues)
}

/// Parse and normalize dataset JSON
///
/// Only a file that is not a JSON object fails. Each entry is read on its
/// own, and an entry that still cannot be read as a venue is logged and
/// skipped so the rest of the dataset stays usable.
pub fn parse_venues(json: &str) -> Result<Vec<Venue>, DatasetError> {
    let entries: BTreeMap<String, serde_json::Value> = serde_json::from_str(json)?;

    let venues: Vec<Venue> = entries
        .into_iter()
        .filter_map(|(id, entry)| match serde_json::from_value::<RawVenue>(entry) {
            Ok(raw) => Some(raw.into_venue(id)),
            Err(e) => {
                tracing::warn!("Skipping malformed venue {}: {}", id, e);
                None
            }
        })
        .collect();

    let without_location = venues.iter().filter(|v| v.location.is_none()).count();
    if without_location > 0 {
        tracing::debug!(
            "{} venues have no coordinates and will be skipped by proximity queries",
            without_location
        );
    }

    Ok(venues)
}
