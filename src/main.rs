//! Command-line rostering runner.
//!
//! Loads a problem from JSON, validates it, solves, prints the roster as a
//! table, and optionally persists it under a name derived from the horizon.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use u_roster::cp::{RosterCpBuilder, SolverConfig};
use u_roster::models::Roster;
use u_roster::{io, validation};

#[derive(Parser)]
#[command(about = "Solves a nurse rostering problem from a JSON file")]
struct Args {
    /// Path to the problem JSON.
    path: PathBuf,

    /// Persist the roster to schedule_{year}_{month}.json.
    #[arg(long)]
    save: bool,

    /// Give up on proving optimality after this many seconds.
    #[arg(long)]
    time_limit_secs: Option<u64>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let problem = io::read_problem_file(&args.path)?;
    if let Err(errors) = validation::validate_problem(&problem) {
        for error in &errors {
            eprintln!("{}", error.message);
        }
        bail!("invalid problem data ({} errors)", errors.len());
    }

    let mut config = SolverConfig::default();
    if let Some(secs) = args.time_limit_secs {
        config = config.with_time_limit(Duration::from_secs(secs));
    }

    let outcome = RosterCpBuilder::new(&problem).solve(&config);

    match outcome.roster {
        Some(roster) => {
            print_roster(&roster);
            if args.save {
                let name = io::roster_file_name(roster.year, roster.month);
                io::write_roster_file(&roster, &name)?;
                println!("saved roster to {name}");
            }
        }
        None => bail!(
            "no roster produced: solver finished with status {}",
            outcome.status.as_str()
        ),
    }

    Ok(())
}

fn print_roster(roster: &Roster) {
    println!("Roster for {}-{:02}", roster.year, roster.month);
    for day in &roster.days {
        println!("Day {}:", day.day_of_month);
        for shift in &day.shifts {
            println!("  Shift {}: {:?}", shift.shift_identifier, shift.nurses);
        }
    }
}
