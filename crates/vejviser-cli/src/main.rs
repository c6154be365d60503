mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use vejviser_core::model::Floor;

#[derive(Parser)]
#[command(
    name = "vejviser",
    version,
    about = "Find a room on a building's floor plans and the nearest entrance"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find a room across all floors and the nearest ground-floor entrance
    Locate {
        /// Room name, matched exactly (case-insensitive)
        query: String,

        /// Directory containing the building's floor plan documents
        #[arg(short, long)]
        building: PathBuf,

        /// Custom building profile JSON file (default: builtin profile)
        #[arg(short, long, value_name = "FILE")]
        profile: Option<PathBuf>,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// Index a single floor plan document and list its rooms and entrances
    Parse {
        /// Path to the floor plan document
        document: PathBuf,

        /// Floor the document belongs to (ground, floor_1, floor_2)
        #[arg(short, long, default_value = "ground", value_parser = parse_floor)]
        floor: Floor,

        /// Custom building profile JSON file (default: builtin profile)
        #[arg(short, long, value_name = "FILE")]
        profile: Option<PathBuf>,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Dump every extracted label before room/entrance classification
        #[arg(long)]
        raw: bool,
    },
    /// Manage and inspect building profiles
    Profile {
        #[command(subcommand)]
        action: ProfileAction,
    },
}

#[derive(Subcommand)]
enum ProfileAction {
    /// List predefined building profiles
    List,
    /// Print a predefined profile as JSON
    Show {
        /// Profile name (e.g., "porcelaenshaven")
        name: String,
    },
    /// Print the profile format with field descriptions and an example
    Schema,
    /// Validate a custom profile file
    Validate {
        /// Path to JSON profile file
        file: PathBuf,
    },
}

fn parse_floor(s: &str) -> Result<Floor, String> {
    Floor::from_str_loose(s)
        .ok_or_else(|| format!("unknown floor '{}' (expected ground, floor_1 or floor_2)", s))
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Locate {
            query,
            building,
            profile,
            output,
        } => commands::locate::run(&query, building, profile, &output),
        Commands::Parse {
            document,
            floor,
            profile,
            output,
            raw,
        } => commands::parse::run(document, floor, profile, &output, raw),
        Commands::Profile { action } => match action {
            ProfileAction::List => commands::profile::list(),
            ProfileAction::Show { name } => commands::profile::show(&name),
            ProfileAction::Schema => commands::profile::schema(),
            ProfileAction::Validate { file } => commands::profile::validate(&file),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
