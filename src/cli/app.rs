//! CLI definitions and entry point

use clap::{Parser, Subcommand};

use super::commands;
use transit_live::config::ClientConfig;
use transit_live::core::models::FilterSelection;
use transit_live::output::OutputMode;
use transit_live::VERSION;

/// transit-live - Live transit vehicle positions
#[derive(Parser, Debug)]
#[command(
    name = "transit-live",
    version,
    about = "Live transit vehicle positions",
    long_about = "Browse live vehicle positions from a JSON:API transit data service.\n\n\
                  Vehicles are listed ten at a time and can be filtered by route or trip.\n\
                  A single vehicle can be shown with its route name, trip headsign and map pin."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Transit API base URL (overrides the config file)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List live vehicles
    Vehicles {
        /// Route ids to filter by (repeat or comma-separate)
        #[arg(short, long = "route", value_delimiter = ',')]
        routes: Vec<String>,

        /// Trip ids to filter by (repeat or comma-separate)
        #[arg(short, long = "trip", value_delimiter = ',')]
        trips: Vec<String>,

        /// Number of pages to load
        #[arg(short, long, default_value_t = 1)]
        pages: usize,
    },

    /// Show one vehicle with its route and trip
    Show {
        /// Vehicle ID
        id: String,
    },

    /// List the routes and trips available as filters
    Filters,

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let config = ClientConfig::load().with_base_url(cli.base_url);
    let runtime = tokio::runtime::Builder::new_current_thread().enable_all().build()?;

    match cli.command {
        Some(Command::Vehicles {
            routes,
            trips,
            pages,
        }) => {
            let filter = FilterSelection::new(routes, trips);
            runtime.block_on(commands::vehicles(&config, filter, pages, output_mode))
        },
        Some(Command::Show { id }) => runtime.block_on(commands::show(&config, &id, output_mode)),
        Some(Command::Filters) => runtime.block_on(commands::filters(&config, output_mode)),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": VERSION
                    })
                );
            } else {
                println!("transit-live v{VERSION}");
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": VERSION,
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("transit-live v{VERSION}");
                println!("\nRun 'transit-live --help' for usage");
                println!("Run 'transit-live vehicles' to list live vehicles");
            }
            Ok(())
        },
    }
}
