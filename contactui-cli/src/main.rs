use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use clap::{ArgAction, Parser};
use color_eyre::eyre::{Report, Result, WrapErr, eyre};

use contactui::{ContactUI, DocumentFormat, OutputDestination, OutputOptions};

const DEFAULT_STATE_FILE: &str = "contactui-visitor.json";

#[derive(Debug, Parser)]
#[command(
    name = "contactui",
    version,
    about = "Run the contact desk TUI: greeting, validated contact form, simulated send"
)]
struct Cli {
    /// Where the visitor name is persisted. Defaults to the system temp dir.
    #[arg(long = "state-file", value_name = "PATH")]
    state_file: Option<PathBuf>,

    /// Keep everything in memory; nothing survives the session
    #[arg(long = "memory", conflicts_with = "state_file")]
    memory: bool,

    /// Site title shown in the header
    #[arg(long = "title", value_name = "TEXT")]
    title: Option<String>,

    /// Submission log destinations ("-" writes to stdout). Accepts multiple values per flag use.
    #[arg(short = 'o', long = "output", value_name = "DEST", num_args = 1.., action = ArgAction::Append)]
    outputs: Vec<String>,

    /// Emit compact output rather than pretty formatting
    #[arg(long = "no-pretty")]
    no_pretty: bool,

    /// Overwrite output files even if they already exist
    #[arg(short = 'f', long = "force", short_alias = 'y', alias = "yes")]
    force: bool,

    /// Append tracing output to this file (the TUI owns the screen)
    #[arg(long = "log-file", value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    if let Some(path) = cli.log_file.as_ref() {
        init_logging(path)?;
    }

    let destinations = parse_destinations(&cli.outputs);
    ensure_output_paths_available(&destinations, cli.force)?;

    let mut ui = ContactUI::new();
    if !cli.memory {
        let path = cli
            .state_file
            .clone()
            .unwrap_or_else(|| std::env::temp_dir().join(DEFAULT_STATE_FILE));
        ui = ui
            .with_state_file(&path)
            .map_err(|err| eyre!("failed to open state file {}: {err:#}", path.display()))?;
    }
    if let Some(title) = cli.title.as_ref() {
        ui = ui.with_title(title.clone());
    }
    if !destinations.is_empty() {
        let format = pick_format(&destinations);
        let options = OutputOptions::new(format)
            .with_pretty(!cli.no_pretty)
            .with_destinations(destinations);
        ui = ui.with_output(options);
    }

    let submissions = ui.run().map_err(Report::msg)?;
    eprintln!("{} submission(s) captured", submissions.len());
    Ok(())
}

fn parse_destinations(specs: &[String]) -> Vec<OutputDestination> {
    specs
        .iter()
        .map(|spec| {
            if spec == "-" {
                OutputDestination::Stdout
            } else {
                OutputDestination::file(spec)
            }
        })
        .collect()
}

/// The first recognized file extension decides the log format; everything
/// else falls back to JSON.
fn pick_format(destinations: &[OutputDestination]) -> DocumentFormat {
    destinations
        .iter()
        .find_map(|destination| match destination {
            OutputDestination::File(path) => path
                .extension()
                .and_then(|ext| ext.to_str())
                .and_then(DocumentFormat::from_extension),
            OutputDestination::Stdout => None,
        })
        .unwrap_or(DocumentFormat::Json)
}

fn ensure_output_paths_available(destinations: &[OutputDestination], force: bool) -> Result<()> {
    if force {
        return Ok(());
    }
    let taken: Vec<&Path> = destinations
        .iter()
        .filter_map(|destination| match destination {
            OutputDestination::File(path) if path.exists() => Some(path.as_path()),
            _ => None,
        })
        .collect();
    if taken.is_empty() {
        Ok(())
    } else {
        let listed = taken
            .iter()
            .map(|path| path.display().to_string())
            .collect::<Vec<_>>()
            .join(", ");
        Err(eyre!(
            "output file(s) already exist: {listed}; pass --force to overwrite"
        ))
    }
}

fn init_logging(path: &Path) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .wrap_err_with(|| format!("failed to open log file {}", path.display()))?;
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}
