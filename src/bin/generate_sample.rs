use std::fs::File;
use std::io::{BufWriter, Write};

use anyhow::{Context, Result};

/// Sample airports: `code,country,latitude,longitude`.
const AIRPORTS: &[(&str, &str, &str, &str)] = &[
    ("MAD", "Spain", "40.4719", "-3.5626"),
    ("AGP", "Spain", "36.6749", "-4.4991"),
    ("BCN", "Spain", "41.2971", "2.0785"),
    ("SVQ", "Spain", "37.4180", "-5.8931"),
    ("LIS", "Portugal", "38.7813", "-9.1359"),
    ("CDG", "France", "49.0097", "2.5479"),
    ("JFK", "USA", "40.6413", "-73.7781"),
];

/// Sample routes: `origin,destination,price,durationMinutes,carrier`.
const ROUTES: &[(&str, &str, &str, &str, &str)] = &[
    ("AGP", "MAD", "50", "90", "Iberia"),
    ("MAD", "AGP", "55", "90", "Iberia"),
    ("AGP", "BCN", "70", "95", "Vueling"),
    ("BCN", "MAD", "65", "80", "Air Europa"),
    ("SVQ", "BCN", "60", "100", "Vueling"),
    ("MAD", "JFK", "420", "495", "Delta"),
    ("AGP", "LIS", "85", "80", "TAP"),
    ("CDG", "MAD", "110", "125", "Air France"),
];

fn main() -> Result<()> {
    let path = "airports.txt";
    let file = File::create(path).with_context(|| format!("creating {path}"))?;
    let mut writer = BufWriter::new(file);
    for (code, country, latitude, longitude) in AIRPORTS {
        writeln!(writer, "{code},{country},{latitude},{longitude}")?;
    }
    writer.flush()?;

    let path = "routes.txt";
    let file = File::create(path).with_context(|| format!("creating {path}"))?;
    let mut writer = BufWriter::new(file);
    for (origin, destination, price, duration, carrier) in ROUTES {
        writeln!(writer, "{origin},{destination},{price},{duration},{carrier}")?;
    }
    writer.flush()?;

    println!(
        "Wrote {} airports to airports.txt and {} routes to routes.txt",
        AIRPORTS.len(),
        ROUTES.len()
    );
    Ok(())
}
