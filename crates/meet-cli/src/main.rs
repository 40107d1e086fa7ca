//! `meet` CLI — compute mutual free time across calendar owners.
//!
//! ## Usage
//!
//! ```sh
//! # Read an availability request from stdin, print free intervals as JSON
//! meet availability < request.json
//!
//! # Read from a file, write to a file, pretty-printed
//! meet availability -i request.json -o free.json --pretty
//! ```
//!
//! The request carries a query window (two wall-clock date-times plus the
//! display zone) and one entry per owner: id, zone, working hours, and busy
//! intervals. The output is a JSON array of free intervals whose instants
//! are expressed in the display zone, with explicit boundary kinds.

use std::fs;
use std::io::{self, Read, Write};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use meet_engine::request::AvailabilityRequest;

#[derive(Parser)]
#[command(
    name = "meet",
    version,
    about = "Mutual availability across calendar owners"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute mutual free intervals for an availability request
    Availability {
        /// Input request file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Availability {
            input,
            output,
            pretty,
        } => {
            let raw = read_input(input.as_deref())?;
            let request: AvailabilityRequest =
                serde_json::from_str(&raw).context("request is not valid JSON")?;
            let free = request.evaluate()?;
            let rendered = if pretty {
                serde_json::to_string_pretty(&free)?
            } else {
                serde_json::to_string(&free)?
            };
            write_output(output.as_deref(), &rendered)?;
        }
    }
    Ok(())
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path).with_context(|| format!("cannot read {path}")),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("cannot read stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, rendered: &str) -> Result<()> {
    match path {
        Some(path) => {
            fs::write(path, rendered).with_context(|| format!("cannot write {path}"))
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(rendered.as_bytes())?;
            stdout.write_all(b"\n")?;
            Ok(())
        }
    }
}
