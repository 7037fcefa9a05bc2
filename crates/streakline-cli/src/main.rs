//! streakline CLI: Habit-challenge timeline dashboard

use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use streakline_engine::{
    average_progress, challenge_progress, day_markers, motivational_message,
    participant_position, Dataset, CHALLENGES_FILE, PARTICIPANTS_FILE,
};

/// Habit-challenge timelines in the terminal
#[derive(Parser)]
#[command(name = "streakline")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the dashboard TUI (default when no command specified)
    Tui {
        /// Directory containing challenges.json and participants.json
        /// (bundled sample data when omitted)
        #[arg(long)]
        data: Option<PathBuf>,

        /// Compute progress as of this date (YYYY-MM-DD) instead of today
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Print the dashboard as plain text
    Show {
        /// Output the computed layout values as JSON
        #[arg(long)]
        json: bool,

        /// Directory containing challenges.json and participants.json
        #[arg(long)]
        data: Option<PathBuf>,

        /// Compute progress as of this date (YYYY-MM-DD) instead of today
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Write the bundled sample data files as a starting point
    Init {
        /// Target directory for the data files
        #[arg(long, default_value = "data")]
        data: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        None => {
            // Default: open TUI on the sample data
            cmd_tui(None, None);
        }
        Some(Commands::Tui { data, date }) => {
            cmd_tui(data, date);
        }
        Some(Commands::Show { json, data, date }) => {
            cmd_show(json, data, date);
        }
        Some(Commands::Init { data }) => {
            cmd_init(&data);
        }
    }
}

/// Load the dataset or fall back to the bundled sample.
fn resolve_dataset(data: Option<PathBuf>) -> Dataset {
    match data {
        Some(dir) => match Dataset::load(&dir) {
            Ok(dataset) => dataset,
            Err(e) => {
                eprintln!("Error loading data from {}: {e}", dir.display());
                std::process::exit(1);
            }
        },
        None => Dataset::sample(),
    }
}

/// "Today" is resolved here once; the engine itself never reads a clock.
fn resolve_today(date: Option<NaiveDate>) -> NaiveDate {
    date.unwrap_or_else(|| Local::now().date_naive())
}

fn warn_orphans(dataset: &Dataset) {
    for orphan in dataset.orphaned_participants() {
        eprintln!(
            "Warning: participant {} references unknown challenge {}",
            orphan.id, orphan.challenge_id
        );
    }
}

fn cmd_tui(data: Option<PathBuf>, date: Option<NaiveDate>) {
    let dataset = resolve_dataset(data);
    let today = resolve_today(date);
    warn_orphans(&dataset);

    let rt = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");
    if let Err(e) = rt.block_on(streakline_tui::run_tui(dataset, today)) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn cmd_show(json: bool, data: Option<PathBuf>, date: Option<NaiveDate>) {
    let dataset = resolve_dataset(data);
    let today = resolve_today(date);
    warn_orphans(&dataset);

    let avg = average_progress(&dataset.challenges, today);
    let message = motivational_message(avg);

    if json {
        let challenges: Vec<_> = dataset
            .challenges
            .iter()
            .map(|challenge| {
                let progress = challenge_progress(challenge, today);
                let day_total = u32::try_from(progress.day_count()).unwrap_or(0);
                let participants: Vec<_> = dataset
                    .participants_for(&challenge.id)
                    .into_iter()
                    .map(|p| {
                        serde_json::json!({
                            "id": p.id,
                            "name": p.name,
                            "positionPercent": participant_position(challenge, p),
                        })
                    })
                    .collect();
                serde_json::json!({
                    "id": challenge.id,
                    "name": challenge.name,
                    "progress": progress,
                    "dayMarkers": day_markers(day_total),
                    "participants": participants,
                })
            })
            .collect();

        let output = serde_json::json!({
            "date": today.to_string(),
            "averageProgress": avg,
            "message": message,
            "challenges": challenges,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&output).expect("failed to serialize")
        );
        return;
    }

    println!("Challenges as of {today}\n");

    for challenge in &dataset.challenges {
        let progress = challenge_progress(challenge, today);
        println!(
            "{} ({} to {})",
            challenge.name, challenge.start_date, challenge.end_date
        );
        println!(
            "  Day {} of {} ({}%)",
            progress.current_day,
            progress.day_count(),
            (progress.fraction * 100.0).round()
        );
        println!("  [{}]", progress_bar(progress.fraction, 30));

        for participant in dataset.participants_for(&challenge.id) {
            let position = participant_position(challenge, participant);
            println!(
                "  - {} joined {} ({}% along the timeline)",
                participant.name,
                participant.join_date,
                position.round()
            );
        }
        println!();
    }

    println!("{message}");
}

fn cmd_init(dir: &Path) {
    let challenges_path = dir.join(CHALLENGES_FILE);
    if challenges_path.exists() {
        println!("Data already exists at {}", challenges_path.display());
        return;
    }

    if let Err(e) = Dataset::sample().save(dir) {
        eprintln!("Failed to write data files: {e}");
        std::process::exit(1);
    }
    println!("Created {}", challenges_path.display());
    println!("Created {}", dir.join(PARTICIPANTS_FILE).display());
    println!("\nEdit the files, then run `streakline show --data {}`", dir.display());
}

/// Fixed-width ASCII progress bar.
fn progress_bar(fraction: f64, width: usize) -> String {
    let filled = (fraction * width as f64).round() as usize;
    let filled = filled.min(width);
    format!("{}{}", "#".repeat(filled), "-".repeat(width - filled))
}
