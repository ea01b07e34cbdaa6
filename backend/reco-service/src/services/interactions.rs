/// Interaction log loading
///
/// Reads the static user/item interaction table that models are fitted on.
use std::io::Read;
use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use thiserror::Error;
use tracing::info;

/// One observed user/item event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interaction {
    pub item_id: i64,
    pub event_date: NaiveDateTime,
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read interactions: {0}")]
    Csv(#[from] csv::Error),

    #[error("Column '{0}' not found in interactions header")]
    MissingColumn(String),

    #[error("Row {row}: invalid item id '{value}'")]
    InvalidItemId { row: usize, value: String },

    #[error("Row {row}: invalid date '{value}'")]
    InvalidDate { row: usize, value: String },
}

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
];

/// Load interactions from a headered CSV file.
pub fn load_interactions(
    path: impl AsRef<Path>,
    item_column: &str,
    dt_column: &str,
) -> Result<Vec<Interaction>, LoadError> {
    let path = path.as_ref();
    let reader = csv::Reader::from_path(path)?;
    let interactions = collect_interactions(reader, item_column, dt_column)?;

    info!(
        path = %path.display(),
        rows = interactions.len(),
        "Interactions loaded"
    );

    Ok(interactions)
}

/// Load interactions from any CSV source.
pub fn read_interactions<R: Read>(
    source: R,
    item_column: &str,
    dt_column: &str,
) -> Result<Vec<Interaction>, LoadError> {
    collect_interactions(csv::Reader::from_reader(source), item_column, dt_column)
}

fn collect_interactions<R: Read>(
    mut reader: csv::Reader<R>,
    item_column: &str,
    dt_column: &str,
) -> Result<Vec<Interaction>, LoadError> {
    let headers = reader.headers()?.clone();
    let item_idx = column_index(&headers, item_column)?;
    let dt_idx = column_index(&headers, dt_column)?;

    let mut interactions = Vec::new();
    for (idx, record) in reader.records().enumerate() {
        let record = record?;
        // header is line 1
        let row = idx + 2;

        let raw_item = record.get(item_idx).unwrap_or_default().trim();
        let item_id = raw_item.parse().map_err(|_| LoadError::InvalidItemId {
            row,
            value: raw_item.to_string(),
        })?;

        let raw_date = record.get(dt_idx).unwrap_or_default().trim();
        let event_date = parse_event_date(raw_date).ok_or_else(|| LoadError::InvalidDate {
            row,
            value: raw_date.to_string(),
        })?;

        interactions.push(Interaction {
            item_id,
            event_date,
        });
    }

    Ok(interactions)
}

fn column_index(headers: &csv::StringRecord, name: &str) -> Result<usize, LoadError> {
    headers
        .iter()
        .position(|h| h.trim() == name)
        .ok_or_else(|| LoadError::MissingColumn(name.to_string()))
}

/// Accepts plain dates (midnight) and second-resolution timestamps.
fn parse_event_date(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date.and_time(NaiveTime::MIN));
    }

    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
}
