/// entitygen HTTP server
///
/// Serves `POST /api/generate` for the web front end. The Gemini API key is
/// optional; without it AI requests are answered with a diagnostic.

use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use entitygen::server::{router, AppState};
use entitygen::{AppConfig, EntityGenerator};

#[derive(Parser)]
#[command(name = "entitygen-server")]
#[command(version, about = "HTTP server for JPA entity generation", long_about = None)]
struct Args {
    /// Optional YAML configuration file
    #[arg(short, long, env = "ENTITYGEN_CONFIG")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("entitygen=info,tower_http=info")),
        )
        .init();

    let args = Args::parse();
    let config = AppConfig::load(args.config.as_deref())?;

    let generator = EntityGenerator::from_config(&config.gemini)?;
    let state = Arc::new(AppState::new(generator));
    let app = router(state);

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    tracing::info!("entitygen listening on {}", addr);
    tracing::info!(
        "AI generation: {}",
        if config.gemini.has_credential() { config.gemini.model.as_str() } else { "disabled" }
    );

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
