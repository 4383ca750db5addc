use clap::{Args, Parser, Subcommand};
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

use life_decision::adapters::store_from_config;
use life_decision::application::{
    CompareOptionsHandler, CompareOptionsQuery, DeleteSavedDecisionCommand,
    DeleteSavedDecisionHandler, ImportDecisionCommand, ImportDecisionHandler,
    ListSavedDecisionsHandler, ListSavedDecisionsQuery, LoadDecisionHandler, LoadDecisionQuery,
};
use life_decision::config::{AppConfig, ConfigError, StorageBackend, ValidationError};
use life_decision::domain::analysis::{ComparisonOutcome, OptionAssessment};
use life_decision::domain::criteria::Category;
use life_decision::domain::decision::{DecisionWorkspace, WizardStage};
use life_decision::domain::foundation::DomainError;
use life_decision::ports::SnapshotStore;
use life_decision::telemetry::{self, TelemetryError};

#[derive(Parser, Debug)]
#[command(
    name = "life-decision",
    about = "Compare two options against your hard limits, then rank what survives",
    version
)]
struct Cli {
    /// Override the configured data directory
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Override the configured storage backend
    #[arg(long, global = true, value_parser = parse_backend)]
    backend: Option<StorageBackend>,

    /// Print machine-readable JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the scoring criteria for a category
    Criteria {
        /// Category name; unknown or missing names use the fallback category
        category: Option<String>,
    },
    /// Filter both options by the limits and rank the survivors
    Compare(CompareArgs),
    /// Store a snapshot file as a saved decision
    Import {
        path: PathBuf,
        /// Label used to name the saved entry
        #[arg(long)]
        label: Option<String>,
    },
    /// List saved decisions, newest first
    List,
    /// Print a saved snapshot
    Show { id: String },
    /// Delete a saved decision
    Delete { id: String },
}

#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
struct CompareArgs {
    /// Snapshot file to compare
    #[arg(long)]
    file: Option<PathBuf>,
    /// Saved decision to compare
    #[arg(long)]
    id: Option<String>,
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("invalid configuration: {0}")]
    InvalidConfig(#[from] ValidationError),

    #[error(transparent)]
    Telemetry(#[from] TelemetryError),

    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path} is not valid JSON: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to render output: {0}")]
    Render(#[from] serde_json::Error),
}

#[tokio::main]
async fn main() {
    if let Err(err) = run_cli().await {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

async fn run_cli() -> Result<(), CliError> {
    let cli = Cli::parse();

    let mut config = AppConfig::load()?;
    if let Some(data_dir) = cli.data_dir {
        config.storage.data_dir = data_dir;
    }
    if let Some(backend) = cli.backend {
        config.storage.backend = backend;
    }
    config.validate()?;
    telemetry::init(&config.logging)?;

    let store = store_from_config(&config.storage);
    debug!(backend = ?config.storage.backend, data_dir = %config.storage.data_dir.display(), "Store ready");

    let json = cli.json;
    match cli.command {
        Command::Criteria { category } => print_criteria(category.as_deref(), json),
        Command::Compare(args) => run_compare(store, args, json).await,
        Command::Import { path, label } => run_import(store, &path, label, json).await,
        Command::List => run_list(store, json).await,
        Command::Show { id } => run_show(store, id).await,
        Command::Delete { id } => {
            let result = DeleteSavedDecisionHandler::new(store)
                .handle(DeleteSavedDecisionCommand { id })
                .await?;
            println!("Deleted {}", result.deleted_id);
            Ok(())
        }
    }
}

fn parse_backend(raw: &str) -> Result<StorageBackend, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "directory" => Ok(StorageBackend::Directory),
        "log" => Ok(StorageBackend::Log),
        other => Err(format!("unknown backend '{other}' (expected directory or log)")),
    }
}

fn read_json(path: &Path) -> Result<Value, CliError> {
    let raw = std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| CliError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn print_criteria(category: Option<&str>, json: bool) -> Result<(), CliError> {
    let category = Category::resolve(category.unwrap_or_default());
    let criteria = category.criteria();

    if json {
        let rows = serde_json::to_value(criteria)?;
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "category": category.name(),
                "criteria": rows,
            }))?
        );
        return Ok(());
    }

    println!("{} criteria", category);
    for c in criteria {
        println!(
            "  {:<22} {:<24} weight {:.1}  range {}-{} (default {})",
            c.key, c.label, c.weight, c.min_value, c.max_value, c.default
        );
        println!("  {:<22} {}", "", c.help);
    }
    Ok(())
}

async fn run_compare(
    store: Arc<dyn SnapshotStore>,
    args: CompareArgs,
    json: bool,
) -> Result<(), CliError> {
    let query = match args.id {
        Some(id) => CompareOptionsQuery::Saved { id },
        None => {
            let path = args.file.unwrap_or_default();
            let document = read_json(&path)?;
            let mut workspace = DecisionWorkspace::new();
            workspace.restore(&document).map_err(DomainError::from)?;
            if !workspace.can_enter(WizardStage::Compare) {
                debug!("Limits are not confirmed; comparison will be refused");
            }
            CompareOptionsQuery::Workspace(Box::new(workspace))
        }
    };

    let outcome = CompareOptionsHandler::new(store).handle(query).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        print_outcome(&outcome);
    }
    Ok(())
}

fn print_outcome(outcome: &ComparisonOutcome) {
    println!("Category: {}", outcome.category);
    for assessment in [&outcome.option_a, &outcome.option_b] {
        print_assessment(assessment);
    }
    println!();
    println!("{}", outcome.headline());
}

fn print_assessment(assessment: &OptionAssessment) {
    println!();
    println!("{} ({})", assessment.name, assessment.side);
    for (check, ok) in assessment.checks.iter() {
        println!("  [{}] {}", if ok { "ok" } else { "x " }, check.label());
    }
    println!("  {}", assessment.explanation);
    match assessment.score() {
        Some(score) => println!("  Score: {:.1}", score),
        None => println!("  Score: N/A (crosses a boundary)"),
    }
    println!("  Day-to-day: {}", assessment.summary_text());
}

async fn run_import(
    store: Arc<dyn SnapshotStore>,
    path: &Path,
    label: Option<String>,
    json: bool,
) -> Result<(), CliError> {
    let document = read_json(path)?;
    let result = ImportDecisionHandler::new(store)
        .handle(ImportDecisionCommand { document, label })
        .await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result.summary)?);
    } else {
        println!("Saved {} as {}", result.summary.title, result.summary.id);
    }
    Ok(())
}

async fn run_list(store: Arc<dyn SnapshotStore>, json: bool) -> Result<(), CliError> {
    let summaries = ListSavedDecisionsHandler::new(store)
        .handle(ListSavedDecisionsQuery)
        .await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&summaries)?);
        return Ok(());
    }

    if summaries.is_empty() {
        println!("No saved decisions.");
    }
    for s in summaries {
        let category = if s.category.is_empty() { "-" } else { s.category.as_str() };
        println!("{}  {}  {}  [{}]", s.saved_at, s.id, s.title, category);
    }
    Ok(())
}

async fn run_show(store: Arc<dyn SnapshotStore>, id: String) -> Result<(), CliError> {
    let loaded = LoadDecisionHandler::new(store)
        .handle(LoadDecisionQuery { id })
        .await?;

    debug!(snapshot_id = %loaded.id, shape = ?loaded.shape, "Showing saved decision");
    println!("{}", serde_json::to_string_pretty(&loaded.document)?);
    Ok(())
}
