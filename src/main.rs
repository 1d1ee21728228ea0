use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use deskflow_core::config::AppConfig;
use deskflow_graph::SupportPipeline;
use deskflow_llm::create_classifier;

#[derive(Parser)]
#[command(name = "deskflow", version, about = "Customer support query triage")]
struct Cli {
    /// Path to config file
    #[arg(short, long, default_value = "deskflow.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Process a single support query and print the result
    Run {
        /// The customer query
        #[arg(trailing_var_arg = true)]
        query: Vec<String>,
    },
    /// Show current configuration
    Config,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("deskflow=info,warn")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let config = AppConfig::load(&cli.config)?;

    match cli.command {
        Commands::Run { query } => {
            let query = query.join(" ");
            let classifier = create_classifier(&config.model);
            let pipeline = SupportPipeline::new(classifier)?;

            let outcome = pipeline.run(&query).await?;
            println!("Category:  {}", outcome.category);
            println!("Sentiment: {}", outcome.sentiment);
            println!("Response:  {}", outcome.response);
        }
        Commands::Config => {
            println!("provider:  {}", config.model.provider);
            println!("model_id:  {}", config.model.model_id);
            println!(
                "base_url:  {}",
                config.model.base_url.as_deref().unwrap_or("(default)")
            );
            println!(
                "api_key:   {}",
                if config.model.api_key.is_some() {
                    "(set)"
                } else {
                    "(not set)"
                }
            );
        }
    }

    Ok(())
}
