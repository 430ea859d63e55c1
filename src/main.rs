use anyhow::Result;
use clap::{Parser, Subcommand};

mod cli;

/// foodcoach - AI Food Waste and Nutrition Coach
#[derive(Parser)]
#[command(name = "foodcoach")]
#[command(about = "Turn leftover ingredients into recipes, nutrition facts and impact estimates", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Answer one chat message and exit
    Ask {
        /// Message as typed in the chat, e.g. "tomato, bread, cheese"
        message: String,
    },
    /// Show the nutrition entry matched for an ingredient
    Lookup {
        ingredient: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = foodcoach::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    foodcoach::observability::init_observability(
        "foodcoach",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
        config.observability.json,
    )?;

    match cli.command {
        Commands::Serve { host, port } => cli::server::serve(config, host, port).await,
        Commands::Ask { message } => cli::ask::ask(config, message).await,
        Commands::Lookup { ingredient } => cli::ask::lookup(config, ingredient),
    }
}
