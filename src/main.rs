use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use shift_signups::display::{print_schedules, write_schedules_to_file};
use shift_signups::layout::GridLayout;
use shift_signups::mailmerge::update_contacts;
use shift_signups::parser::{load_grid_book, scan_csv};
use shift_signups::schedule::ShiftKind;

#[derive(Parser)]
#[command(name = "shift-signups")]
#[command(about = "Turn a volunteer sign-up grid into schedules and mail-merge rows")]
#[command(long_about = "Turn a volunteer sign-up grid into schedules and mail-merge rows.

The grid is a CSV export of the sign-up sheet: days run across in column
groups, time slots run down in row bands, and each cell holds a volunteer's
name and phone number as free text.

COMMANDS:
  count     - Count signups in a grid
  schedule  - Show or export each volunteer's shifts
  merge     - Update a mail-merge CSV with the latest shifts
  layout    - Print the grid layout in use as JSON

EXAMPLES:
  shift-signups count signups.csv
  shift-signups schedule signups.csv -o schedule.csv
  shift-signups merge signups.csv contacts.csv contacts-updated.csv
  shift-signups --layout march.json schedule signups.csv")]
#[command(version)]
struct Cli {
    /// JSON file describing the grid layout (defaults to the built-in layout)
    #[arg(long, global = true, env = "SHIFT_SIGNUPS_LAYOUT")]
    layout: Option<PathBuf>,

    /// Log each signup as it is found
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Count signups in a grid (prompts for the file when none is given)
    Count {
        /// Path to the grid CSV
        grid: Option<PathBuf>,

        /// Only count one kind of shift (walkthrough or phonebank)
        #[arg(short, long)]
        kind: Option<ShiftKind>,
    },

    /// Aggregate signups into per-volunteer schedules
    Schedule {
        /// Path to the grid CSV
        grid: PathBuf,

        /// Write the schedule to this CSV file instead of printing it
        #[arg(short, long, conflicts_with = "json")]
        output: Option<PathBuf>,

        /// Print the schedule as JSON
        #[arg(long)]
        json: bool,
    },

    /// Merge the grid's shifts into an existing mail-merge CSV
    Merge {
        /// Path to the grid CSV
        grid: PathBuf,

        /// Previously exported mail-merge CSV
        existing: PathBuf,

        /// Where to write the merged CSV
        output: PathBuf,
    },

    /// Print the grid layout in use as JSON
    Layout,
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "shift_signups=debug"
    } else {
        "shift_signups=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(io::stderr)
        .init();
}

fn load_layout(path: Option<&Path>) -> anyhow::Result<GridLayout> {
    match path {
        Some(path) => GridLayout::from_path(path)
            .with_context(|| format!("loading layout {}", path.display())),
        None => Ok(GridLayout::default()),
    }
}

/// Asks for the grid file name on stdin
fn prompt_for_grid() -> anyhow::Result<PathBuf> {
    print!("Enter file name: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    let name = line.trim();
    if name.is_empty() {
        bail!("no file name given");
    }
    Ok(PathBuf::from(name))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let layout = load_layout(cli.layout.as_deref())?;

    match cli.command {
        Commands::Count { grid, kind } => {
            let grid = match grid {
                Some(grid) => grid,
                None => prompt_for_grid()?,
            };
            let signups = scan_csv(&grid, &layout)
                .with_context(|| format!("scanning {}", grid.display()))?;
            let count = signups
                .iter()
                .filter(|s| kind.map_or(true, |k| s.shift_kind == k))
                .count();
            println!("{}", count);
        }

        Commands::Schedule { grid, output, json } => {
            let book = load_grid_book(&grid, &layout)
                .with_context(|| format!("scanning {}", grid.display()))?;
            let unnamed = book.skipped();
            let people = book.into_schedules();
            if json {
                println!("{}", serde_json::to_string_pretty(&people)?);
                if unnamed > 0 {
                    eprintln!("{} signups without a name were not scheduled", unnamed);
                }
            } else if let Some(output) = output {
                write_schedules_to_file(&output, &people)
                    .with_context(|| format!("writing {}", output.display()))?;
                println!(
                    "Wrote {} volunteers to {} ({} unnamed signups skipped)",
                    people.len(),
                    output.display(),
                    unnamed
                );
            } else {
                print_schedules(&people, unnamed);
            }
        }

        Commands::Merge {
            grid,
            existing,
            output,
        } => {
            let summary = update_contacts(&grid, &existing, &output, &layout)
                .with_context(|| format!("merging {} into {}", grid.display(), existing.display()))?;
            println!(
                "Updated {}, added {}, untouched {}, unnamed signups skipped {} -> {}",
                summary.updated,
                summary.added,
                summary.untouched,
                summary.unnamed_signups,
                output.display()
            );
        }

        Commands::Layout => {
            println!("{}", serde_json::to_string_pretty(&layout)?);
        }
    }

    Ok(())
}
