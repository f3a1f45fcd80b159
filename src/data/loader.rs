use std::collections::HashSet;
use std::fs::File;
use std::path::Path;

use csv::{Reader, ReaderBuilder, Trim};

use super::model::{is_wildcard, Airport, Route};
use crate::error::SieveError;

// ---------------------------------------------------------------------------
// Shared reader configuration
// ---------------------------------------------------------------------------

/// Open a comma-separated source the way both selectors read it: no header
/// row, variable field counts allowed, surrounding whitespace trimmed.
/// Blank lines are skipped by the reader; records that are too short are
/// rejected later by the model layer.
fn open_reader(path: &Path) -> Result<Reader<File>, SieveError> {
    ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_path(path)
        .map_err(|source| SieveError::read(path, source))
}

// ---------------------------------------------------------------------------
// Airport selection
// ---------------------------------------------------------------------------

/// Select airports whose country matches `country` (case-insensitive), or
/// every airport when `country` is the wildcard token. Source-file order is
/// preserved.
pub fn select_airports(path: &Path, country: &str) -> Result<Vec<Airport>, SieveError> {
    let mut reader = open_reader(path)?;

    let match_all = is_wildcard(country);
    let wanted = country.to_lowercase();

    let mut airports = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|source| SieveError::read(path, source))?;
        let Some(airport) = Airport::from_record(&record) else {
            continue;
        };
        if match_all || airport.country.to_lowercase() == wanted {
            airports.push(airport);
        }
    }
    Ok(airports)
}

// ---------------------------------------------------------------------------
// Route selection
// ---------------------------------------------------------------------------

/// Select routes whose origin and destination both belong to the given
/// airports. Code membership is exact (case-sensitive); source-file order is
/// preserved.
pub fn select_routes(path: &Path, airports: &[Airport]) -> Result<Vec<Route>, SieveError> {
    let codes: HashSet<&str> = airports.iter().map(|a| a.code.as_str()).collect();

    let mut reader = open_reader(path)?;
    let mut routes = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|source| SieveError::read(path, source))?;
        let Some(route) = Route::from_record(&record) else {
            continue;
        };
        if codes.contains(route.origin.as_str()) && codes.contains(route.destination.as_str()) {
            routes.push(route);
        }
    }
    Ok(routes)
}
