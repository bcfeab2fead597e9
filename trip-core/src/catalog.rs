//! TOML trip catalog.
//!
//! Provides two loading methods:
//! - `sample_trips()` - The demo trips embedded in the binary at compile time
//! - `parse_trips(content)` - Parses a `[[trip]]` TOML document

use std::collections::HashSet;
use std::sync::Arc;

use chrono::NaiveDate;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::TripError;
use crate::types::{Accent, Trip};

/// Demo trips embedded in the binary at compile time.
/// These are loaded from `trip-core/data/sample_trips.toml`.
const SAMPLE_TRIPS: &str = include_str!("../data/sample_trips.toml");

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    trip: Vec<RawTrip>,
}

/// Trip as written in TOML, with dates still as text.
#[derive(Debug, Deserialize)]
struct RawTrip {
    id: u32,
    name: String,
    location: String,
    start: String,
    end: String,
    total_budget: u32,
    spent: u32,
    color: Accent,
}

impl TryFrom<RawTrip> for Trip {
    type Error = TripError;

    fn try_from(raw: RawTrip) -> Result<Self, Self::Error> {
        Ok(Trip {
            id: raw.id,
            name: raw.name,
            location: raw.location,
            start: parse_iso_date(&raw.start)?,
            end: parse_iso_date(&raw.end)?,
            total_budget: raw.total_budget,
            spent: raw.spent,
            color: raw.color,
        })
    }
}

/// Parse an ISO 8601 calendar date (`YYYY-MM-DD`).
pub fn parse_iso_date(value: &str) -> Result<NaiveDate, TripError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| TripError::InvalidDate {
        value: value.to_string(),
    })
}

/// Parse a trip catalog from TOML.
///
/// Trips keep the order they appear in. Ids must be unique.
pub fn parse_trips(content: &str) -> Result<Vec<Trip>, TripError> {
    let file: CatalogFile = toml::from_str(content)?;

    let mut seen = HashSet::new();
    let mut trips = Vec::with_capacity(file.trip.len());
    for raw in file.trip {
        if !seen.insert(raw.id) {
            return Err(TripError::DuplicateTripId(raw.id));
        }
        trips.push(Trip::try_from(raw)?);
    }

    debug!("Parsed {} trips", trips.len());
    Ok(trips)
}

/// The demo trips shown on the page.
///
/// The embedded file is checked by tests; should it ever fail to parse, the
/// error is logged and the page renders with no trips.
pub fn sample_trips() -> Arc<[Trip]> {
    load_catalog(SAMPLE_TRIPS)
}

/// Parse a catalog for display, logging a warning and yielding no trips
/// when it is invalid.
pub fn load_catalog(content: &str) -> Arc<[Trip]> {
    match parse_trips(content) {
        Ok(trips) => trips.into(),
        Err(e) => {
            warn!("Trip catalog is invalid, showing no trips: {}", e);
            Arc::from(Vec::new())
        }
    }
}
