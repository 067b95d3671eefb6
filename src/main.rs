use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::info;

use lantern::analysis::classifier::{TopicModel, TrainingSettings};
use lantern::analysis::corpus::default_corpus;
use lantern::config::Config;
use lantern::db::models::AnalysisMode;
use lantern::generation::openai::OpenAiGenerator;
use lantern::generation::{TextGenerator, UnconfiguredGenerator};
use lantern::pipeline::orchestrator::Orchestrator;

/// Lantern: content triage for a service-center directory.
///
/// Classifies submitted text by topic, scores sentiment and misinformation
/// risk, and can ask an external model for a fact-checked response.
#[derive(Parser)]
#[command(name = "lantern", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the database
    Init,

    /// Analyze a piece of text from the command line
    Analyze {
        /// The text to analyze
        text: String,

        /// Analysis mode: classification, sentiment, fact_check,
        /// ai_generation, or comprehensive
        #[arg(long, default_value = "comprehensive")]
        mode: String,
    },

    /// Train the topic model and show its summary
    Model,

    /// Run the HTTP API server
    Serve {
        /// Port to listen on
        #[arg(long, default_value = "8080")]
        port: u16,

        /// Address to bind to
        #[arg(long, default_value = "127.0.0.1")]
        bind: String,
    },

    /// Show system status (DB stats, recent activity)
    Status,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("lantern=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init => {
            info!("Initializing Lantern database...");
            let config = Config::load()?;
            let storage = lantern::db::initialize(&config.db_path)?;
            let table_count = storage.table_count().await?;
            println!("Database initialized at: {}", config.db_path);
            println!("Tables created: {table_count}");
            println!("\nLantern is ready. Next step: set up your .env file");
            println!("  (see .env.example for required variables)");
            println!("\nThen run: cargo run -- serve");
        }

        Commands::Analyze { text, mode } => {
            let mode: AnalysisMode = mode.parse()?;
            let config = Config::load()?;
            if mode == AnalysisMode::AiGeneration {
                config.require_generation()?;
            }
            let storage = lantern::db::open(&config.db_path)?;

            let model = train_model()?;
            let generator = create_generator(&config)?;
            let orchestrator = Orchestrator::new(model, generator, storage);

            let result = orchestrator.analyze(&text, mode).await;
            lantern::output::terminal::display_analysis(&result);
        }

        Commands::Model => {
            let model = train_model()?;

            println!("{}", "=== Topic model ===".bold());
            println!("  Training examples: {}", model.trained_on());
            println!("  Vocabulary size:   {}", model.vocabulary_len());
            println!("  Classes:");
            for (topic, prior) in model.class_priors() {
                println!("    {:<18} prior {:.3}", topic.to_string(), prior);
            }
            match model.holdout_accuracy() {
                Some(accuracy) => {
                    println!("  Holdout accuracy:  {:.0}% (diagnostic)", accuracy * 100.0)
                }
                None => println!("  Holdout accuracy:  n/a (holdout disabled)"),
            }
        }

        Commands::Serve { port, bind } => {
            let config = Config::load()?;
            let storage = lantern::db::open(&config.db_path)?;

            // Trained once, shared read-only for the process lifetime.
            // A training failure here is fatal — the server never starts
            // with a partially-built model.
            let model = train_model()?;
            let generator = create_generator(&config)?;
            let orchestrator = Arc::new(Orchestrator::new(
                model,
                generator,
                Arc::clone(&storage),
            ));

            let geocoder = Arc::new(lantern::geo::NominatimGeocoder::new(&config.geocoder_url)?);

            let state = lantern::web::AppState {
                storage,
                orchestrator,
                geocoder,
            };

            lantern::web::run_server(state, port, &bind).await?;
        }

        Commands::Status => {
            let config = Config::load()?;
            if !std::path::Path::new(&config.db_path).exists() {
                println!("Database: not initialized");
                println!("\nRun `lantern init` to set up the database.");
                return Ok(());
            }
            let storage = lantern::db::open(&config.db_path)?;
            lantern::status::show(&storage, &config.db_path).await?;
        }
    }

    Ok(())
}

/// Train the topic model from the built-in corpus with default settings.
fn train_model() -> Result<Arc<TopicModel>> {
    let corpus = default_corpus();
    let model = TopicModel::train(&corpus, &TrainingSettings::default())?;
    Ok(Arc::new(model))
}

/// Create the generation adapter based on configuration.
///
/// Without an API key the adapter still exists but fails every call with a
/// setup hint, which the orchestrator reports as GenerationUnavailable.
fn create_generator(config: &Config) -> Result<Arc<dyn TextGenerator>> {
    if config.generation_api_key.is_empty() {
        info!("No generation API key configured — ai_generation will report unavailable");
        return Ok(Arc::new(UnconfiguredGenerator));
    }
    let generator = OpenAiGenerator::new(
        &config.generation_api_url,
        config.generation_api_key.clone(),
        config.generation_model.clone(),
    )?;
    Ok(Arc::new(generator))
}
