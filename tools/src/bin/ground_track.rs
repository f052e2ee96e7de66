// cargo run --bin ground-track -- --object-id 1 --hours 24 /tmp/track.txt

use clap::Parser;
use conjunction::{prediction, Catalog};
use std::fs::File;
use std::io::prelude::*;
use std::path::PathBuf;
use tracing::info;

/// Write an hourly ground track for one cataloged object
#[derive(Parser, Debug)]
#[command(version)]
struct Opts {
    /// Satellite catalog toml file
    #[arg(long, default_value = "data/catalog.toml")]
    catalog: PathBuf,

    /// Object id within the catalog
    #[arg(short = 'i', long)]
    object_id: String,

    /// Horizon in hours
    #[arg(short = 'd', long, default_value_t = 24)]
    hours: u32,

    /// Output file path to write
    output: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();
    let opts = Opts::parse();

    let registry = Catalog::load(&opts.catalog).into_registry()?;
    if registry.get(&opts.object_id).is_none() {
        return Err(format!("Object id '{}' not found in catalog", opts.object_id).into());
    }

    let now = chrono::Utc::now();
    let ids = vec![opts.object_id.clone()];
    let predictions = prediction::predict_selected(&registry, &ids, opts.hours, now)?;

    let mut output = File::create(&opts.output)?;
    for p in &predictions {
        writeln!(
            &mut output,
            "{} {} {} {}",
            p.time, p.position.latitude, p.position.longitude, p.position.altitude
        )?;
    }
    info!(
        samples = predictions.len(),
        output = %opts.output.display(),
        "Ground track written"
    );

    Ok(())
}
