use anyhow::{Context as AnyhowContext, Result};
use carmatch_catalog::{QuestionCatalog, VehicleCatalog};
use carmatch_engine::{FilterHints, FinanceTerms, MatchEngine, ScoreWeights};
use carmatch_profile::{build_profile, describe, AnswerSet};
use carmatch_session::SessionStore;
use clap::{Args, Parser, Subcommand};
use serde_json::json;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "carmatch")]
#[command(about = "Lifestyle-based vehicle recommendations", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Directory containing vehicles.json and questions.json
    #[arg(long, global = true, default_value = "data")]
    data_dir: PathBuf,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode: log only warnings/errors (stdout is reserved for JSON)
    #[arg(long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the questionnaire
    Questions,

    /// Build a lifestyle profile from an answers file
    Profile(ProfileArgs),

    /// Rank the catalog for an answers file
    Recommend(RecommendArgs),

    /// Compare vehicles side by side
    Compare(CompareArgs),

    /// Estimate financing and annual ownership costs
    Estimate(EstimateArgs),
}

#[derive(Args)]
struct ProfileArgs {
    /// JSON answers file, e.g. {"q1": ["daily_commute"], "q3": ["low_running_costs"]}
    #[arg(long)]
    answers: PathBuf,
}

#[derive(Args)]
struct RecommendArgs {
    /// JSON answers file
    #[arg(long)]
    answers: PathBuf,

    /// Budget in whole currency units
    #[arg(long)]
    budget: Option<u64>,

    /// JSON filter hints file, as produced by the chat collaborator
    #[arg(long)]
    filters: Option<PathBuf>,

    /// TOML score weight overrides
    #[arg(long)]
    weights: Option<PathBuf>,

    /// Number of results to print
    #[arg(long, default_value_t = 4)]
    top: usize,
}

#[derive(Args)]
struct CompareArgs {
    /// Vehicle ids to compare
    #[arg(required = true)]
    ids: Vec<String>,
}

#[derive(Args)]
struct EstimateArgs {
    /// Vehicle id
    id: String,

    #[arg(long, default_value_t = 0)]
    down_payment: u64,

    #[arg(long, default_value_t = 0)]
    trade_in: u64,

    /// Loan term in months
    #[arg(long, default_value_t = 60)]
    term: u32,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    match cli.command {
        Commands::Questions => questions(&cli.data_dir),
        Commands::Profile(args) => profile(&cli.data_dir, &args),
        Commands::Recommend(args) => recommend(&cli.data_dir, &args),
        Commands::Compare(args) => compare(&cli.data_dir, &args),
        Commands::Estimate(args) => estimate(&cli.data_dir, &args),
    }
}

fn init_logging(verbose: bool, quiet: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if quiet {
        builder.filter_level(log::LevelFilter::Warn);
    } else if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();
}

fn print_stdout(text: &str) -> Result<()> {
    let mut stdout = io::stdout().lock();
    if let Err(err) = stdout
        .write_all(text.as_bytes())
        .and_then(|_| stdout.write_all(b"\n"))
        .and_then(|_| stdout.flush())
    {
        if err.kind() == io::ErrorKind::BrokenPipe {
            return Ok(());
        }
        return Err(err.into());
    }
    Ok(())
}

fn load_questions(data_dir: &Path) -> Result<QuestionCatalog> {
    let path = data_dir.join("questions.json");
    QuestionCatalog::load(&path).with_context(|| format!("loading {}", path.display()))
}

fn load_engine(data_dir: &Path, weights: Option<&Path>) -> Result<MatchEngine> {
    let path = data_dir.join("vehicles.json");
    let catalog =
        VehicleCatalog::load(&path).with_context(|| format!("loading {}", path.display()))?;

    let weights = match weights {
        Some(path) => {
            let text =
                fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
            ScoreWeights::from_toml_str(&text)?
        }
        None => ScoreWeights::default(),
    };

    Ok(MatchEngine::with_weights(Arc::new(catalog), weights)?)
}

fn read_answers(path: &Path) -> Result<AnswerSet> {
    let text = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
}

fn questions(data_dir: &Path) -> Result<()> {
    let catalog = load_questions(data_dir)?;
    print_stdout(&serde_json::to_string_pretty(catalog.questions())?)
}

fn profile(data_dir: &Path, args: &ProfileArgs) -> Result<()> {
    let questions = load_questions(data_dir)?;
    let answers = read_answers(&args.answers)?;

    let profile = build_profile(&answers, &questions)?;
    let output = json!({
        "lifestyle_profile": profile,
        "description": describe(&profile),
    });
    print_stdout(&serde_json::to_string_pretty(&output)?)
}

fn recommend(data_dir: &Path, args: &RecommendArgs) -> Result<()> {
    let questions = load_questions(data_dir)?;
    let answers = read_answers(&args.answers)?;
    let engine = load_engine(data_dir, args.weights.as_deref())?;

    let hints: Option<FilterHints> = match &args.filters {
        Some(path) => {
            let text =
                fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
            Some(
                serde_json::from_str(&text)
                    .with_context(|| format!("parsing {}", path.display()))?,
            )
        }
        None => None,
    };

    let profile = build_profile(&answers, &questions)?;
    let store = SessionStore::new(Arc::new(engine));
    let session_id = store.create(profile);
    store.set_budget(&session_id, args.budget)?;

    let mut results = store.rescore(&session_id, hints.as_ref())?;
    results.truncate(args.top);

    let output = json!({
        "session_id": session_id,
        "lifestyle_profile": store.snapshot(&session_id)?.profile,
        "recommendations": results,
    });
    print_stdout(&serde_json::to_string_pretty(&output)?)
}

fn compare(data_dir: &Path, args: &CompareArgs) -> Result<()> {
    let engine = load_engine(data_dir, None)?;
    let comparison = engine.compare(&args.ids)?;
    print_stdout(&serde_json::to_string_pretty(&comparison)?)
}

fn estimate(data_dir: &Path, args: &EstimateArgs) -> Result<()> {
    let engine = load_engine(data_dir, None)?;
    let terms = FinanceTerms {
        down_payment: args.down_payment,
        trade_in_value: args.trade_in,
        loan_term_months: args.term,
        ..Default::default()
    };
    let estimate = engine.estimate(&args.id, terms)?;
    print_stdout(&serde_json::to_string_pretty(&estimate)?)
}
