// cargo run --bin track -- --catalog data/catalog.toml --predict-hours 4

use clap::Parser;
use conjunction::{prediction, risk, Catalog, Registry};
use orbital_types::prelude::*;
use std::path::PathBuf;
use tracing::info;

/// Print current geodetic positions and the pairwise conjunction scan for a
/// set of tracked objects
#[derive(Parser, Debug)]
#[command(version)]
struct Opts {
    /// Satellite catalog toml file
    #[arg(long, default_value = "data/catalog.toml")]
    catalog: PathBuf,

    /// Read a raw TLE feed (name + two lines per entry) instead of the
    /// catalog; object ids are the catalog numbers
    #[arg(long)]
    tle_file: Option<PathBuf>,

    /// Also print this many hourly predicted positions per object
    #[arg(short = 'p', long)]
    predict_hours: Option<u32>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();
    let opts = Opts::parse();

    let mut registry = if let Some(path) = &opts.tle_file {
        let feed = std::fs::read_to_string(path)?;
        let mut objects = Vec::new();
        for entry in tle::parse_tle_set(&feed)? {
            let elements = tle::parse_element_set(&entry.line1, &entry.line2)?;
            objects.push(TrackedObject::new(
                elements.catalog_number.to_string(),
                entry.satellite_name,
                elements,
            ));
        }
        Registry::new(objects)
    } else {
        Catalog::load(&opts.catalog).into_registry()?
    };

    let now = chrono::Utc::now();
    registry.refresh(now)?;
    info!(objects = registry.len(), "Tracking snapshot refreshed");

    for object in registry.all() {
        if let Some(position) = object.position {
            println!("{}  {}  {}", object.id, object.name, position);
        }
    }

    for report in risk::scan_conjunctions(registry.all(), now) {
        println!(
            "{}  {} <-> {}  {}",
            report.id, report.object1, report.object2, report.risk
        );
    }

    if let Some(hours) = opts.predict_hours {
        for p in prediction::predict(registry.all(), hours, now)? {
            println!("{}  {}  {}", p.object_id, p.time, p.position);
        }
    }

    Ok(())
}
