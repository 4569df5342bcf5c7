//! Predecir CLI
//!
//! Thin command-line surface over the library boundary.
//!
//! # Usage
//!
//! ```bash
//! # Train on a labeled CSV and persist the pipeline
//! predecir train data/train.csv --artifact models/survival_pipeline.json
//!
//! # Score one passenger against a persisted pipeline
//! predecir predict --artifact models/survival_pipeline.json \
//!     --pclass 3 --sex male --age 22 --sibsp 1 --fare 7.25 --embarked S
//! ```

use clap::{Parser, Subcommand};
use predecir::{train_and_evaluate, InferenceService, PassengerRecord, TrainConfig};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "predecir", version, about = "Survival scoring for passenger records")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Train, cross-validate and persist a scoring pipeline
    Train(TrainArgs),

    /// Predict survival probability for a single passenger
    Predict(PredictArgs),
}

#[derive(clap::Args)]
struct TrainArgs {
    /// Labeled training CSV
    data: PathBuf,

    /// Artifact output path
    #[arg(long, default_value = "models/survival_pipeline.json")]
    artifact: PathBuf,

    /// Split seed
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Cross-validation fold count
    #[arg(long, default_value_t = 5)]
    folds: usize,
}

#[derive(clap::Args)]
struct PredictArgs {
    /// Artifact to load
    #[arg(long, default_value = "models/survival_pipeline.json")]
    artifact: PathBuf,

    #[arg(long)]
    pclass: u8,

    #[arg(long)]
    sex: String,

    #[arg(long)]
    age: Option<f64>,

    #[arg(long, default_value_t = 0)]
    sibsp: u32,

    #[arg(long, default_value_t = 0)]
    parch: u32,

    #[arg(long)]
    fare: Option<f64>,

    #[arg(long)]
    embarked: Option<String>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Command::Train(args) => run_train(args),
        Command::Predict(args) => run_predict(args),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run_train(args: TrainArgs) -> predecir::Result<()> {
    let config = TrainConfig::new(args.data)
        .with_artifact_path(args.artifact)
        .with_seed(args.seed)
        .with_folds(args.folds);

    let (_pipeline, report) = train_and_evaluate(&config)?;
    println!("{report}");
    Ok(())
}

fn run_predict(args: PredictArgs) -> predecir::Result<()> {
    let service = InferenceService::start(&args.artifact);
    let record = PassengerRecord {
        pclass: args.pclass,
        sex: args.sex,
        age: args.age,
        sibsp: args.sibsp,
        parch: args.parch,
        fare: args.fare,
        embarked: args.embarked,
    };

    let prob = service.predict_one(&record)?;
    println!("survival_probability: {prob:.4}");
    Ok(())
}
