use clap::Parser;
use std::path::PathBuf;

/// Lights Out - turn every light off
#[derive(Parser, Debug, Default)]
#[command(name = "lightsout")]
#[command(about = "Lights Out puzzle for the terminal")]
#[command(version)]
pub struct Cli {
    /// Grid size (3, 4 or 5)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(3..=5))]
    pub size: Option<u8>,

    /// Seed for the random board generator (reproducible games)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Only deal new games that can actually be solved
    #[arg(long)]
    pub solvable_only: bool,

    /// Path to a JSON configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write logs to this file (the terminal is used by the game)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
