use std::{path::PathBuf, time::Instant};

use anyhow::{bail, ensure, Context, Result};
use clap::Parser;
use itertools::Itertools;
use tracing_subscriber::EnvFilter;

use tube_planner::{
    build_graph, find_shortest_path,
    query::{default_journeys, read_journeys, Journey},
    LoaderConfig,
};

/// Plan the fastest journeys between stations of a transit network
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Connection file with `line,from,to,minutes` rows after a header
    #[arg(default_value = "London_Underground_data.csv")]
    data: PathBuf,

    /// Field separator of the connection file
    #[arg(long, default_value_t = ',')]
    delimiter: char,

    /// CSV file of `from,to` journeys to plan
    #[arg(long)]
    queries: Option<PathBuf>,

    /// A single journey to plan, may be repeated
    #[arg(long, num_args = 2, value_names = ["FROM", "TO"])]
    journey: Vec<String>,
}

impl Args {
    fn loader_config(&self) -> Result<LoaderConfig> {
        ensure!(
            self.delimiter.is_ascii(),
            "delimiter {:?} must be a single ASCII character",
            self.delimiter
        );
        Ok(LoaderConfig::default().with_delimiter(self.delimiter as u8))
    }

    fn journeys(&self) -> Result<Vec<Journey>> {
        let mut journeys = match &self.queries {
            Some(path) => read_journeys(path)
                .with_context(|| format!("reading journeys from {}", path.display()))?,
            None => Vec::new(),
        };
        journeys.extend(
            self.journey
                .iter()
                .tuples()
                .map(|(from, to)| Journey::new(from.as_str(), to.as_str())),
        );

        if journeys.is_empty() {
            journeys = default_journeys();
        }
        Ok(journeys)
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let config = args.loader_config()?;
    let journeys = args.journeys()?;

    tracing::info!(data = %args.data.display(), "loading connections");
    let graph = build_graph(&args.data, &config)
        .with_context(|| format!("loading graph from {}", args.data.display()))?;

    if graph.is_empty() {
        bail!("failed to load graph: no valid connections in {}", args.data.display());
    }

    for Journey { from, to } in journeys {
        tracing::info!(%from, %to, "planning journey");

        let started = Instant::now();
        let route = find_shortest_path(&graph, &from, &to);
        let elapsed = started.elapsed();

        if route.is_found() {
            tracing::info!(
                stops = route.stop_count(),
                minutes = %route.total,
                elapsed_ms = elapsed.as_secs_f64() * 1000.0,
                path = %route.stations.iter().join(" -> "),
                "path found"
            );
        } else {
            tracing::warn!(%from, %to, "path not found");
        }
    }

    Ok(())
}
