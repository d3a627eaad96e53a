mod commands;
mod summary;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tbcdec", about = "Decode time-base-corrected video fields into frames")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode a .tbc file into raw YUV or RGB frames
    Decode(commands::decode::DecodeArgs),
    /// Show capture metadata and the output geometry
    Info(commands::info::InfoArgs),
    /// List the built-in filter bank
    Filters(commands::filters::FiltersArgs),
    /// Print or save a default decode config
    Config(commands::config::ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match &cli.command {
        Commands::Decode(args) => commands::decode::run(args),
        Commands::Info(args) => commands::info::run(args),
        Commands::Filters(args) => commands::filters::run(args),
        Commands::Config(args) => commands::config::run(args),
    }
}
