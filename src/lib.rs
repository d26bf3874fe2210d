//! porada - personal assistant bot managing contacts and notes

pub mod cli;
pub mod domain;
pub mod store;

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, BufRead, Write};
use tracing_subscriber::EnvFilter;

use cli::{
    Cli,
    config::Config,
    messages, parse,
    registry::{Books, CommandRegistry},
};

/// Main entry point for the CLI application.
///
/// Runs the read-eval loop: one command per line, executed to completion
/// before the next is read. `exit`/`close` (or EOF) ends the session.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = Config::load()?;
    let data_dir = config.data_dir(cli.dir.as_ref());

    let mut books = Books::open(&data_dir);
    let registry = CommandRegistry::new();

    println!("{}", messages::WELCOME);

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("{}", messages::ENTER_A_COMMAND);
        io::stdout().flush().context("failed to flush stdout")?;

        line.clear();
        let read = stdin
            .lock()
            .read_line(&mut line)
            .context("failed to read input")?;
        if read == 0 {
            break;
        }

        let Some((command, args)) = parse::parse_input(&line) else {
            println!("{}", messages::NO_COMMAND_ENTERED);
            continue;
        };
        if command == "exit" || command == "close" {
            println!("{}", messages::GOOD_BYE);
            break;
        }
        if command == "help" {
            println!("{}", registry.command_names().join("\n"));
            continue;
        }

        let result = registry
            .execute(&mut books, &command, &args)
            .with_context(|| format!("command '{command}' failed to persist"))?;
        println!("{result}");
    }

    Ok(())
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
