use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use log::{error, info};

use crate::data::model::Route;
use crate::error::SieveError;

// ---------------------------------------------------------------------------
// Route selection
// ---------------------------------------------------------------------------

/// Which routes to write: the whole list, or a single zero-based position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteSelection {
    All,
    Position(usize),
}

// ---------------------------------------------------------------------------
// Report writer
// ---------------------------------------------------------------------------

/// Write the selected routes to `path` as repeated six-line blocks.
///
/// The file is created (truncating any previous content) before the selection
/// is validated, so an out-of-range `Position` still leaves an empty file
/// behind; the bad position is reported and the call returns `Ok(0)`. Returns
/// the number of blocks written.
pub fn write_routes(
    path: &Path,
    routes: &[Route],
    selection: RouteSelection,
) -> Result<usize, SieveError> {
    let file = File::create(path).map_err(|source| SieveError::write(path, source))?;
    let mut writer = BufWriter::new(file);

    let written = match selection {
        RouteSelection::All => {
            for route in routes {
                write_block(&mut writer, route).map_err(|source| SieveError::write(path, source))?;
            }
            routes.len()
        }
        RouteSelection::Position(position) if position < routes.len() => {
            write_block(&mut writer, &routes[position])
                .map_err(|source| SieveError::write(path, source))?;
            1
        }
        RouteSelection::Position(position) => {
            error!(
                "invalid route position {position}, have {} routes",
                routes.len()
            );
            0
        }
    };

    writer
        .flush()
        .map_err(|source| SieveError::write(path, source))?;
    info!("{written} routes written to {}", path.display());
    Ok(written)
}

fn write_block(writer: &mut impl Write, route: &Route) -> io::Result<()> {
    writeln!(writer, "---")?;
    writeln!(writer, "Flight: {} to {}", route.origin, route.destination)?;
    writeln!(writer, "Carrier: {}", route.carrier)?;
    writeln!(writer, "Duration: {} minutes", route.duration_minutes)?;
    writeln!(writer, "Total Cost: {} euros", route.price)?;
    writeln!(writer, "---")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn route(origin: &str, destination: &str, price: &str) -> Route {
        Route {
            origin: origin.to_string(),
            destination: destination.to_string(),
            price: price.to_string(),
            duration_minutes: "90".to_string(),
            carrier: "Iberia".to_string(),
        }
    }

    #[test]
    fn single_position_writes_exactly_one_block() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("report.txt");
        let routes = [route("AGP", "MAD", "50"), route("AGP", "BCN", "70")];

        let written = write_routes(&path, &routes, RouteSelection::Position(0)).unwrap();
        assert_eq!(written, 1);

        let report = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            report,
            "---\n\
             Flight: AGP to MAD\n\
             Carrier: Iberia\n\
             Duration: 90 minutes\n\
             Total Cost: 50 euros\n\
             ---\n"
        );
    }

    #[test]
    fn all_writes_every_block_in_order() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("report.txt");
        let routes = [route("AGP", "MAD", "50"), route("AGP", "BCN", "70")];

        let written = write_routes(&path, &routes, RouteSelection::All).unwrap();
        assert_eq!(written, 2);

        let report = std::fs::read_to_string(&path).unwrap();
        assert_eq!(report.matches("---\n").count(), 4);
        let first = report.find("Flight: AGP to MAD").unwrap();
        let second = report.find("Flight: AGP to BCN").unwrap();
        assert!(first < second);
    }

    #[test]
    fn out_of_range_position_truncates_but_writes_nothing() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("report.txt");
        std::fs::write(&path, "stale content").unwrap();
        let routes = [route("AGP", "MAD", "50")];

        let written = write_routes(&path, &routes, RouteSelection::Position(5)).unwrap();
        assert_eq!(written, 0);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn all_on_empty_list_leaves_an_empty_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("report.txt");

        let written = write_routes(&path, &[], RouteSelection::All).unwrap();
        assert_eq!(written, 0);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn unwritable_destination_is_a_write_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("missing").join("report.txt");
        let routes = [route("AGP", "MAD", "50")];

        let err = write_routes(&path, &routes, RouteSelection::All).unwrap_err();
        assert!(matches!(err, SieveError::Write { .. }));
    }
}
