mod data;
mod error;
mod report;

use std::path::Path;

use log::{error, info};

use data::filter::filter_routes;
use data::loader::{select_airports, select_routes};
use error::SieveError;
use report::{write_routes, RouteSelection};

/// Fall back to an empty list when a source could not be read: the error is
/// reported, not propagated, and downstream stages see nothing to work on.
fn or_empty<T>(result: Result<Vec<T>, SieveError>) -> Vec<T> {
    result.unwrap_or_else(|e| {
        error!("{e}");
        Vec::new()
    })
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let airports = or_empty(select_airports(Path::new("airports.txt"), "Spain"));
    info!("Spanish airports: {}", airports.len());
    for airport in airports.iter().take(5) {
        info!("  {} ({}, {})", airport.code, airport.latitude, airport.longitude);
    }

    let routes = or_empty(select_routes(Path::new("routes.txt"), &airports));
    info!("routes between them: {}", routes.len());
    for route in routes.iter().take(5) {
        info!("  {} -> {} on {}", route.origin, route.destination, route.carrier);
    }

    let from_agp = filter_routes(&routes, "AGP", "cualquiera");
    info!("routes out of AGP: {}", from_agp.len());

    let agp_to_mad = filter_routes(&routes, "AGP", "MAD");
    info!("routes AGP -> MAD: {}", agp_to_mad.len());

    if !agp_to_mad.is_empty() {
        if let Err(e) = write_routes(Path::new("route_0.txt"), &agp_to_mad, RouteSelection::Position(0)) {
            error!("{e}");
        }
        if let Err(e) = write_routes(Path::new("all_routes.txt"), &agp_to_mad, RouteSelection::All) {
            error!("{e}");
        }
    }
}
