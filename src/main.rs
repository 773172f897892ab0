use anyhow::Context;
use clap::Parser;
use env_logger::Builder;
use log::{LevelFilter, debug};
use std::path::PathBuf;

use marine_sensor_sim::common::load_configuration;
use marine_sensor_sim::report;
use marine_sensor_sim::{Configuration, TransportType, run_simulation};

/// Marine sensor network simulator: node layout, clustering, collection
/// route and per-node link cost for RF, cabled or acoustic transport.
#[derive(Parser)]
#[command(name = "marine-sensor-sim", version)]
struct Cli {
    /// TOML configuration file; flags override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of sensor nodes
    #[arg(short, long)]
    nodes: Option<usize>,

    /// Ocean area size in meters
    #[arg(short, long)]
    area: Option<f64>,

    /// Transport type: rf, cabled or acoustic
    #[arg(short, long)]
    transport: Option<TransportType>,

    /// Enable clustering
    #[arg(long)]
    clustering: bool,

    /// Enable the SOFAR channel effect (acoustic only)
    #[arg(long)]
    sofar: bool,

    /// Random seed for node placement
    #[arg(short, long)]
    seed: Option<u64>,

    /// Print the result bundle as JSON instead of the report
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn configuration(&self) -> anyhow::Result<Configuration> {
        let mut config = match &self.config {
            Some(path) => load_configuration(path).with_context(|| format!("Loading configuration from {}", path.display()))?,
            None => Configuration::default(),
        };
        if let Some(nodes) = self.nodes {
            config.node_count = nodes;
        }
        if let Some(area) = self.area {
            config.area_size = area;
        }
        if let Some(transport) = self.transport {
            config.transport_type = transport;
        }
        if let Some(seed) = self.seed {
            config.random_seed = seed;
        }
        config.clustering_enabled |= self.clustering;
        config.sofar_enabled |= self.sofar;
        Ok(config)
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logging setup
    Builder::new()
        .filter_level(LevelFilter::Info)
        .filter(Some("marine_sensor_sim"), if cli.verbose { LevelFilter::Debug } else { LevelFilter::Info })
        .init();

    let config = cli.configuration()?;
    debug!("Effective configuration: {:?}", config);

    let bundle = run_simulation(&config).context("Invalid simulation configuration")?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&bundle).context("Serializing result bundle")?);
    } else {
        print!("{}", report::render(&bundle));
    }
    Ok(())
}
