//! campus-nav - walking directions between two campus locations
//!
//! Usage:
//!   campus-nav "Computer Science" "Building G"
//!   campus-nav --map maps/campus.json --format json --show-path "North Gate" "Sports Centre"
//!   campus-nav --list
//!
//! Logging goes to stderr; set RUST_LOG=campus_nav=debug for search details.

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use serde::Serialize;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use campus_nav::search::SearchLimits;
use campus_nav::{MapStore, NavConfig, Navigator, Result, Route};

/// Output format
#[derive(Clone, Copy, Debug, Default, ValueEnum)]
enum Format {
    /// One instruction per line
    #[default]
    Text,
    /// Single JSON document
    Json,
}

/// Walking directions on a campus map
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Start location identifier
    #[arg(required_unless_present = "list")]
    start: Option<String>,

    /// Destination location identifier
    #[arg(required_unless_present = "list")]
    end: Option<String>,

    /// Configuration file (default: ./campus-nav.toml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Map file, overrides the configured one
    #[arg(short, long)]
    map: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Print the waypoints of the route before the instructions
    #[arg(long)]
    show_path: bool,

    /// Abort the search after this many milliseconds
    #[arg(long)]
    timeout_ms: Option<u64>,

    /// List the location identifiers of the map and exit
    #[arg(long)]
    list: bool,
}

/// JSON rendering of a route
#[derive(Serialize)]
struct RouteReport<'a> {
    start: &'a str,
    end: &'a str,
    waypoints: Vec<&'a str>,
    cost: f64,
    nodes_expanded: usize,
    instructions: &'a [String],
}

impl<'a> RouteReport<'a> {
    fn new(start: &'a str, end: &'a str, route: &'a Route) -> Self {
        Self {
            start,
            end,
            waypoints: route.waypoint_ids(),
            cost: route.cost(),
            nodes_expanded: route.path.stats.nodes_expanded,
            instructions: &route.instructions,
        }
    }
}

fn main() -> ExitCode {
    // Logs on stderr so JSON on stdout stays parseable
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("campus_nav=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("[{}] {}", e.code(), e);
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let config = match &args.config {
        Some(path) => {
            info!("Loading configuration from {:?}", path);
            NavConfig::load(path)?
        }
        None => NavConfig::load_default()?,
    };

    let map_path: &Path = args.map.as_deref().unwrap_or(&config.map.path);
    let map = Arc::new(MapStore::load(map_path)?);

    if args.list {
        for id in map.ids() {
            println!("{}", id);
        }
        return Ok(());
    }

    // clap enforces both when --list is absent
    let (Some(start), Some(end)) = (args.start.as_deref(), args.end.as_deref()) else {
        return Ok(());
    };

    let navigator = Navigator::new(map, &config);
    let limits = match args.timeout_ms {
        Some(ms) => SearchLimits::none().with_timeout(Duration::from_millis(ms)),
        None => SearchLimits::none(),
    };
    let route = navigator.route_with(start, end, &limits)?;

    match args.format {
        Format::Text => {
            if args.show_path {
                println!("Route: {}", route.waypoint_ids().join(" -> "));
                println!("Distance: {:.1}", route.cost());
                println!();
            }
            for line in &route.instructions {
                println!("{}", line);
            }
        }
        Format::Json => {
            let report = RouteReport::new(start, end, &route);
            let json = serde_json::to_string_pretty(&report)?;
            println!("{}", json);
        }
    }

    Ok(())
}
