//! `availability` CLI — answer meeting-availability queries from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Query a JSON document (stdin → stdout)
//! cat day.json | availability query
//!
//! # Query from file to file, pretty-printed
//! availability query -i day.json -o slots.json --pretty
//!
//! # Use the intersection-sweep policy over an 8-hour day
//! availability query -i day.json --policy intersection-sweep --day-minutes 480
//!
//! # Show merged busy intervals for some attendees
//! availability busy -i day.json --attendees alice,bob
//! ```
//!
//! Diagnostics go to stderr and are controlled by `RUST_LOG`.

use std::collections::BTreeSet;
use std::io::{self, Read};

use anyhow::{Context, Result};
use availability_engine::{AvailabilitySolver, QueryDocument, TierPolicy, MINUTES_PER_DAY};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::{debug, info};

#[derive(Parser)]
#[command(
    name = "availability",
    version,
    about = "Find the windows of a day in which a meeting fits"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Length of the day in minutes
    #[arg(
        long,
        global = true,
        default_value_t = MINUTES_PER_DAY,
        env = "AVAILABILITY_DAY_MINUTES"
    )]
    day_minutes: u32,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the slots in which the requested meeting can be scheduled
    Query {
        /// Input JSON document (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// How optional attendees are combined with mandatory ones
        #[arg(
            long,
            value_enum,
            default_value_t = PolicyArg::AllOrNothing,
            env = "AVAILABILITY_POLICY"
        )]
        policy: PolicyArg,
        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
    /// Print the merged busy intervals of a set of attendees
    Busy {
        /// Input JSON document (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Comma-separated attendees (defaults to everyone in the request)
        #[arg(long)]
        attendees: Option<String>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum PolicyArg {
    AllOrNothing,
    IntersectionSweep,
}

impl From<PolicyArg> for TierPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::AllOrNothing => TierPolicy::AllOrNothing,
            PolicyArg::IntersectionSweep => TierPolicy::IntersectionSweep,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Query {
            input,
            output,
            policy,
            pretty,
        } => {
            let solver = AvailabilitySolver::with_day_minutes(cli.day_minutes, policy.into())
                .context("Invalid --day-minutes")?;
            let document = read_document(input.as_deref())?;

            info!(
                events = document.events.len(),
                duration = document.request.duration_minutes,
                "answering availability query"
            );
            let availability = solver.solve(&document.events, &document.request);
            debug!(tier = ?availability.tier, slots = availability.slots.len(), "query answered");

            let json = if pretty {
                serde_json::to_string_pretty(&availability)?
            } else {
                serde_json::to_string(&availability)?
            };
            write_output(output.as_deref(), &json)?;
        }
        Commands::Busy { input, attendees } => {
            let solver = AvailabilitySolver::with_day_minutes(cli.day_minutes, TierPolicy::default())
                .context("Invalid --day-minutes")?;
            let document = read_document(input.as_deref())?;

            let relevant = match attendees.as_deref() {
                Some(raw) => parse_attendees(raw),
                None => document.request.everyone(),
            };
            let busy = solver.busy_intervals(&document.events, &relevant);

            println!("{}", serde_json::to_string(&busy)?);
        }
    }

    Ok(())
}

/// Split `alice, bob,,carol` into `{alice, bob, carol}`.
fn parse_attendees(raw: &str) -> BTreeSet<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(String::from)
        .collect()
}

fn read_document(path: Option<&str>) -> Result<QueryDocument> {
    let json = read_input(path)?;
    QueryDocument::from_json(&json).context("Failed to parse query document")
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
