use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use guard_schedule::application::dto::{DaySummaryDto, GuardCellDto, GuardRowDto, SiteRowDto};
use guard_schedule::domain::filter::{SiteFilter, StatusFilter};
use guard_schedule::infrastructure::roster_repo::{AssignmentExport, RosterRepository};
use guard_schedule::{DateRange, GuardId, ScheduleBoard, ScheduleError, SiteId, ViewMode};

#[derive(Parser)]
#[command(name = "schedule_tools")]
#[command(version = "0.1.0")]
#[command(about = "Shows and edits the guard-to-site schedule", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Args)]
struct BoardArgs {
    /// Roster JSON file, the demo roster when omitted
    #[arg(short, long)]
    roster: Option<PathBuf>,

    /// First day (YYYY-MM-DD), seven days from today when omitted
    #[arg(long, requires = "to")]
    from: Option<NaiveDate>,

    /// Last day (YYYY-MM-DD)
    #[arg(long, requires = "from")]
    to: Option<NaiveDate>,
}

impl BoardArgs {
    fn build(&self) -> Result<ScheduleBoard, ScheduleError> {
        let roster = RosterRepository::load_or_demo(self.roster.as_deref())?;
        let range = match (self.from, self.to) {
            (Some(from), Some(to)) => Some(DateRange::new(from, to)),
            _ => None,
        };
        ScheduleBoard::starting_today(roster, range)
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum View {
    Guard,
    Site,
}

#[derive(Clone, Copy, ValueEnum)]
enum Status {
    All,
    Free,
    Off,
}

#[derive(Subcommand)]
enum Commands {
    /// Prints the schedule grid
    Show {
        #[command(flatten)]
        board: BoardArgs,

        #[arg(long, value_enum, default_value = "guard")]
        view: View,

        /// Name search
        #[arg(short, long, default_value = "")]
        query: String,

        /// Guard view status tab
        #[arg(long, value_enum, default_value = "all")]
        status: Status,

        /// Site view: only this site id
        #[arg(long)]
        site: Option<String>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Edits one cell and prints the resulting assignments
    Assign {
        #[command(flatten)]
        board: BoardArgs,

        #[arg(long)]
        site: String,

        #[arg(long)]
        date: NaiveDate,

        /// Guard to place
        #[arg(long, conflicts_with = "clear", required_unless_present = "clear")]
        guard: Option<String>,

        /// Edit only this guard's slot instead of the whole cell
        #[arg(long)]
        replacing: Option<String>,

        /// Empty the cell (or the --replacing slot)
        #[arg(long)]
        clear: bool,

        /// Write the assignment list here instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

fn show(
    board_args: BoardArgs,
    view: View,
    query: String,
    status: Status,
    site: Option<String>,
    json: bool,
) -> Result<(), ScheduleError> {
    let mut board = board_args.build()?;

    board.set_query(&query);
    board.set_status_filter(match status {
        Status::All => StatusFilter::All,
        Status::Free => StatusFilter::Free,
        Status::Off => StatusFilter::Off,
    });
    board.set_site_filter(match site {
        Some(id) => SiteFilter::Only(SiteId::new(id)),
        None => SiteFilter::All,
    });
    board.set_view_mode(match view {
        View::Guard => ViewMode::ByGuard,
        View::Site => ViewMode::BySite,
    });

    if json {
        println!("{}", serde_json::to_string_pretty(&board.snapshot())?);
        return Ok(());
    }

    match board.view_mode() {
        ViewMode::ByGuard => {
            print_summaries(&board.day_summaries());
            print_guard_rows(&board.guard_rows());
        }
        ViewMode::BySite => print_site_rows(&board.site_rows()),
    }
    Ok(())
}

fn assign(
    board_args: BoardArgs,
    site: String,
    date: NaiveDate,
    guard: Option<String>,
    replacing: Option<String>,
    clear: bool,
    out: Option<PathBuf>,
) -> Result<(), ScheduleError> {
    let mut board = board_args.build()?;

    let site_id = SiteId::new(site);
    let guard_id = if clear { None } else { guard.map(GuardId::new) };

    // without --replacing the whole cell is taken over
    match replacing.map(GuardId::new) {
        Some(target) => board.set_slot(&site_id, date, Some(&target), guard_id.as_ref())?,
        None => board.set_assignment(&site_id, date, guard_id.as_ref())?,
    }

    let export = AssignmentExport {
        assignments: board.assignments().to_vec(),
    };
    let text = export.to_json()?;

    match out {
        Some(path) => {
            fs::write(&path, text).map_err(|source| ScheduleError::Io { path: path.clone(), source })?;
            tracing::info!(path = %path.display(), "assignments written");
        }
        None => println!("{}", text),
    }
    Ok(())
}

fn print_summaries(summaries: &[DaySummaryDto]) {
    for s in summaries {
        println!(
            "{}  assigned {} • free {} • off {}",
            s.date.format("%Y.%m.%d"),
            s.assigned,
            s.free,
            s.off
        );
    }
    println!();
}

fn print_guard_rows(rows: &[GuardRowDto]) {
    for row in rows {
        let cells: Vec<String> = row
            .days
            .iter()
            .map(|d| match &d.cell {
                GuardCellDto::Site { site_name, .. } => site_name.clone(),
                GuardCellDto::Free => "free".to_string(),
                GuardCellDto::Off => "off".to_string(),
                GuardCellDto::Leave => "leave".to_string(),
                GuardCellDto::Empty => "—".to_string(),
            })
            .collect();
        println!("{:<16} | {}", row.guard.name, cells.join(" | "));
    }
}

fn print_site_rows(rows: &[SiteRowDto]) {
    for row in rows {
        println!("{} ({})", row.site.name, row.site.id);
        for day in &row.days {
            let slots: Vec<String> = day
                .slots
                .iter()
                .map(|s| s.as_ref().map(|g| g.name.clone()).unwrap_or_else(|| "(empty)".to_string()))
                .collect();
            println!("  {} : {}", day.date.format("%Y.%m.%d"), slots.join(", "));
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "guard_schedule=info,schedule_tools=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Cli::parse();

    let result = match args.command {
        Commands::Show { board, view, query, status, site, json } => {
            show(board, view, query, status, site, json)
        }
        Commands::Assign { board, site, date, guard, replacing, clear, out } => {
            assign(board, site, date, guard, replacing, clear, out)
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "schedule_tools failed");
            ExitCode::FAILURE
        }
    }
}
