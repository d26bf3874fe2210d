//! CLI definitions: argument parsing, messages, and command handling.

pub mod config;
pub mod handlers;
pub mod messages;
pub mod parse;
pub mod registry;

use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// porada - personal assistant bot managing contacts and notes
#[derive(Parser, Debug)]
#[command(name = "porada", version, about, long_about = None)]
pub struct Cli {
    /// Data directory for the address and notes books (overrides config file)
    #[arg(short = 'd', long)]
    pub dir: Option<PathBuf>,

    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
