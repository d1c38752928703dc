//! Fits the encoders, scaler and linear model on the training CSV, reports
//! held-out metrics on the test CSV and writes the artifacts the server loads.
//!
//! # Usage
//! ```sh
//! cargo run --bin train_model -- --train Data/train-data.csv --test Data/test-data.csv
//! ```

use anyhow::{Context, Result};
use carprice::application::pricing::PricePredictor;
use carprice::application::training::{self, Trainer};
use carprice::config::DataEnvConfig;
use carprice::domain::ml::FEATURE_NAMES;
use carprice::domain::vehicle::CategoricalField;
use carprice::infrastructure::{ArtifactStore, dataset};
use clap::Parser;
use std::path::PathBuf;
use tracing::Level;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to training data CSV (defaults to TRAIN_DATA_PATH)
    #[arg(long)]
    train: Option<PathBuf>,

    /// Path to held-out test data CSV (defaults to TEST_DATA_PATH)
    #[arg(long)]
    test: Option<PathBuf>,

    /// Directory the fitted artifacts are written to (defaults to ARTIFACTS_DIR)
    #[arg(long)]
    artifacts: Option<PathBuf>,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::INFO.into()),
        )
        .with_target(false)
        .init();

    let args = Args::parse();
    let data = DataEnvConfig::from_env();
    let train_path = args.train.unwrap_or(data.train_data_path);
    let test_path = args.test.unwrap_or(data.test_data_path);
    let artifacts_dir = args.artifacts.unwrap_or(data.artifacts_dir);

    println!("Loading training data from {:?}", train_path);
    let train = dataset::load_listings(&train_path)?;
    println!("Loading test data from {:?}", test_path);
    let test = dataset::load_listings(&test_path)?;

    let artifacts = Trainer::fit(&train).context("Training failed")?;
    println!(
        "\nTrained on {} rows ({} dropped), {} features:",
        artifacts.manifest.training_rows,
        artifacts.manifest.skipped_rows,
        FEATURE_NAMES.len()
    );
    for field in CategoricalField::ALL {
        println!(
            "  {:<13} {} classes",
            field.to_string(),
            artifacts.encoders.get(field).len()
        );
    }

    let predictor = PricePredictor::new(artifacts);
    let evaluation = training::evaluate(&predictor, &test).context("Evaluation failed")?;
    let m = evaluation.metrics;

    println!("\n══════════════════════════════════════════════════════");
    println!("  HELD-OUT EVALUATION ({})", predictor.model_name());
    println!("══════════════════════════════════════════════════════");
    println!(
        "  Rows:      {} scored, {} skipped",
        evaluation.rows, evaluation.skipped
    );
    println!("  MAE:       {:.4}", m.mean_absolute_error);
    println!("  MSE:       {:.4}", m.mean_squared_error);
    println!("  R²:        {:.4}", m.r_squared);
    println!("══════════════════════════════════════════════════════\n");

    println!("Saving artifacts to {:?}", artifacts_dir);
    ArtifactStore::new(&artifacts_dir).save(predictor.artifacts())?;

    println!("Done. Artifacts saved successfully.");
    Ok(())
}
