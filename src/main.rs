use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};

use opsboard::driver::{self, Action};
use opsboard::error::SnapshotError;
use opsboard::model::policy::ScoringPolicy;
use opsboard::model::snapshot::{load_policy, load_snapshot, save_snapshot};
use opsboard::report::{self, ReportFormat};

/// Scores, ranks and flags workers and assets in a dashboard snapshot.
#[derive(Parser, Debug)]
#[command(name = "opsboard", version)]
struct Cli {
    /// Log level used when RUST_LOG is unset
    #[arg(long, global = true, default_value = "info", value_parser = ["error", "warn", "info", "debug", "trace"])]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print or write a scored summary of a snapshot
    Report {
        #[arg(long)]
        input: PathBuf,
        /// JSON policy file; missing fields fall back to the defaults
        #[arg(long)]
        policy: Option<PathBuf>,
        /// Number of top performers to list
        #[arg(long)]
        top: Option<usize>,
        #[arg(long, value_enum, default_value_t = FormatArg::Text)]
        format: FormatArg,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Apply an operator action and save the snapshot
    Act {
        #[arg(long)]
        input: PathBuf,
        #[arg(long, value_enum)]
        action: ActionArg,
        #[arg(long)]
        index: usize,
        /// Defaults to overwriting the input
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Advance the snapshot by one or more refresh cycles
    Tick {
        #[arg(long)]
        input: PathBuf,
        /// Load sample recorded on every tick (0-100)
        #[arg(long)]
        load: f64,
        #[arg(long, default_value_t = 1)]
        ticks: u32,
        /// Defaults to overwriting the input
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ActionArg {
    Rest,
    Train,
    Fix,
}

fn main() {
    let cli = Cli::parse();
    opsboard::logging::init(&cli.log_level);
    if let Err(err) = run(cli.command) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(command: Command) -> Result<(), SnapshotError> {
    match command {
        Command::Report {
            input,
            policy,
            top,
            format,
            out,
        } => {
            let policy = resolve_policy(policy.as_deref(), top)?;
            let snapshot = load_snapshot(&input)?;
            let summary = report::build_summary(&snapshot, &policy)?;
            let format = match format {
                FormatArg::Text => ReportFormat::Text,
                FormatArg::Json => ReportFormat::Json,
            };
            match out {
                Some(path) => report::write_report(&summary, format, &path)?,
                None => print!("{}", report::render(&summary, format)?),
            }
        }
        Command::Act {
            input,
            action,
            index,
            out,
        } => {
            let mut snapshot = load_snapshot(&input)?;
            let action = match action {
                ActionArg::Rest => Action::Rest,
                ActionArg::Train => Action::Train,
                ActionArg::Fix => Action::Fix,
            };
            driver::apply(&mut snapshot, action, index)?;
            save_snapshot(out.as_deref().unwrap_or(&input), &snapshot)?;
        }
        Command::Tick {
            input,
            load,
            ticks,
            out,
        } => {
            let mut snapshot = load_snapshot(&input)?;
            for _ in 0..ticks {
                driver::tick(&mut snapshot, load)?;
            }
            tracing::info!("applied {} tick(s) at load {}", ticks, load);
            save_snapshot(out.as_deref().unwrap_or(&input), &snapshot)?;
        }
    }
    Ok(())
}

fn resolve_policy(
    path: Option<&Path>,
    top: Option<usize>,
) -> Result<ScoringPolicy, SnapshotError> {
    let mut policy = match path {
        Some(path) => load_policy(path)?,
        None => ScoringPolicy::default_v1(),
    };
    if let Some(top) = top {
        policy.top_n = top;
    }
    policy.validate()?;
    Ok(policy)
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
