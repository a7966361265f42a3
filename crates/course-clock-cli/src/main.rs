//! `tracks` CLI — course schedule lookups and live countdowns from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Next meeting of a Monday/Wednesday 9–10 class, as JSON
//! tracks next --days mon,wed --start 09:00 --end 10:00
//!
//! # Countdown at a fixed instant
//! tracks countdown --days mon --start 23:00 --end 01:00 --at 2026-10-19T23:30:00
//!
//! # Live countdown, re-evaluated every second
//! tracks countdown --days tue,thu --start 14:00 --end 15:15 --watch
//!
//! # Format a number of seconds the way course cards do
//! tracks format --seconds 90000 --include-days
//!
//! # Print a card line for every course in a JSON file (or stdin)
//! tracks cards -i courses.json
//! ```
//!
//! Set `RUST_LOG=course_clock=debug` to see how occurrences are resolved.

use std::io::{self, Read};
use std::thread;
use std::time::Duration as StdDuration;

use anyhow::{Context, Result};
use chrono::{Duration, Local, NaiveDateTime};
use clap::{Args, Parser, Subcommand};
use course_clock::{
    countdown_state, format_duration, next_occurrence, parse_time_of_day, CourseDraft,
    RecurrenceRule, Tracker, WeekDay,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tracks", version, about = "Course schedule countdowns")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the next (or current) meeting window as JSON
    Next {
        #[command(flatten)]
        rule: RuleArgs,
        /// Reference instant, local wall clock (defaults to now)
        #[arg(long)]
        at: Option<String>,
    },
    /// Print the countdown line for a schedule
    Countdown {
        #[command(flatten)]
        rule: RuleArgs,
        /// Reference instant, local wall clock (defaults to now)
        #[arg(long)]
        at: Option<String>,
        /// Keep re-evaluating once per second
        #[arg(long)]
        watch: bool,
        /// Stop watching after this many lines, at least one (requires --watch)
        #[arg(long, requires = "watch", value_parser = clap::value_parser!(u64).range(1..))]
        ticks: Option<u64>,
    },
    /// Format a number of seconds as a countdown string
    Format {
        #[arg(long, allow_hyphen_values = true)]
        seconds: i64,
        /// Include a day field instead of folding days into hours
        #[arg(long)]
        include_days: bool,
    },
    /// Print one card line per course from a JSON course list
    Cards {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Reference instant, local wall clock (defaults to now)
        #[arg(long)]
        at: Option<String>,
    },
}

#[derive(Args)]
struct RuleArgs {
    /// Comma-separated meeting days (e.g. "mon,wed,fri")
    #[arg(long)]
    days: String,
    /// Daily start time, HH:MM or HH:MM:SS
    #[arg(long)]
    start: String,
    /// Daily end time, HH:MM or HH:MM:SS (earlier than start wraps past midnight)
    #[arg(long)]
    end: String,
}

impl RuleArgs {
    fn to_rule(&self) -> Result<RecurrenceRule> {
        let days = parse_days(&self.days)?;
        let start = parse_time_of_day(&self.start).context("Invalid --start")?;
        let end = parse_time_of_day(&self.end).context("Invalid --end")?;
        Ok(RecurrenceRule::new(days, start, end))
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Next { rule, at } => {
            let rule = rule.to_rule()?;
            let now = resolve_now(at.as_deref())?;
            match next_occurrence(&rule, now) {
                Some(occurrence) => {
                    let json = serde_json::to_string_pretty(&occurrence)?;
                    println!("{}", json);
                }
                None => println!("No schedule"),
            }
        }
        Commands::Countdown {
            rule,
            at,
            watch,
            ticks,
        } => {
            let rule = rule.to_rule()?;
            let start = resolve_now(at.as_deref())?;
            if watch {
                run_watch(&rule, at.is_some().then_some(start), ticks);
            } else {
                println!("{}", countdown_state(&rule, start));
            }
        }
        Commands::Format {
            seconds,
            include_days,
        } => {
            println!("{}", format_duration(seconds, include_days));
        }
        Commands::Cards { input, at } => {
            let json = read_input(input.as_deref())?;
            let drafts: Vec<CourseDraft> =
                serde_json::from_str(&json).context("Failed to parse course list")?;
            let now = resolve_now(at.as_deref())?;
            tracing::info!(courses = drafts.len(), %now, "loaded course list");

            let mut tracker = Tracker::new();
            for draft in drafts {
                let code = draft.code.clone();
                tracker
                    .add_course(draft)
                    .with_context(|| format!("Rejected course '{}'", code))?;
            }
            for course in tracker.courses() {
                println!("{}", course.card_line(now));
            }
        }
    }

    Ok(())
}

/// Re-evaluate the countdown once per second.
///
/// With a pinned start instant the clock advances one second per tick from it,
/// otherwise every tick reads the local wall clock.
fn run_watch(rule: &RecurrenceRule, pinned: Option<NaiveDateTime>, ticks: Option<u64>) {
    let mut tick: u64 = 0;
    loop {
        let now = match pinned {
            Some(start) => match start.checked_add_signed(Duration::seconds(tick as i64)) {
                Some(now) => now,
                None => break,
            },
            None => Local::now().naive_local(),
        };
        println!("{}", countdown_state(rule, now));

        tick += 1;
        if ticks.is_some_and(|limit| tick >= limit) {
            break;
        }
        thread::sleep(StdDuration::from_secs(1));
    }
}

/// Parse `--days`. An empty list is allowed and yields a rule with no schedule.
fn parse_days(raw: &str) -> Result<Vec<WeekDay>> {
    raw.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<WeekDay>()
                .with_context(|| format!("Invalid --days entry: '{}'", part))
        })
        .collect()
}

fn resolve_now(at: Option<&str>) -> Result<NaiveDateTime> {
    match at {
        Some(raw) => NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
            .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M"))
            .with_context(|| format!("Invalid --at instant: '{}'", raw)),
        None => Ok(Local::now().naive_local()),
    }
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
