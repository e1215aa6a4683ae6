use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};

use docsmith::ai;
use docsmith::config::Config;
use docsmith::logging;
use docsmith::rest::{self, ApiDoc, ApiState};
use docsmith::service::DocumentationService;
use docsmith::store::DocStore;

#[derive(Parser)]
#[command(name = "docsmith")]
#[command(about = "AI-assisted API documentation service")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file path
    #[arg(short, long)]
    config: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the REST API server (default)
    Serve {
        /// Port to listen on (default: from config)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Print the OpenAPI specification as JSON
    Openapi,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration first (needed for logging setup)
    let config = Config::load(cli.config.as_deref())?;

    let _logging_handle = logging::init_logging(&config, cli.debug)?;

    match cli.command {
        Some(Commands::Openapi) => {
            println!("{}", ApiDoc::json()?);
            Ok(())
        }
        Some(Commands::Serve { port }) => cmd_serve(config, port).await,
        None => cmd_serve(config, None).await,
    }
}

async fn cmd_serve(config: Config, port: Option<u16>) -> Result<()> {
    let port = port.unwrap_or(config.server.port);

    let generator = ai::generator_from_config(&config.ai)?;
    if !generator.is_configured() {
        tracing::warn!(
            provider = generator.name(),
            "no API key configured; generation requests will fail with 503"
        );
    }

    let store = Arc::new(DocStore::open(config.data_dir()).await?);
    let service = Arc::new(DocumentationService::new(store, generator));
    let state = ApiState::new(service, config);

    rest::serve(state, port).await
}
