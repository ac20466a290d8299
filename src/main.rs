use buckethealth::{AppState, BucketInspector, S3Store, create_app};

use clap::Parser;
use std::sync::Arc;

// Server configuration
const HOST: &str = "0.0.0.0";
const PORT: u16 = 8000;

// Default configuration values
const DEFAULT_ENDPOINT: &str = "https://s3.amazonaws.com";
const DEFAULT_REGION: &str = "us-east-1";

/// Buckethealth: HTTP API reporting freshness and storage usage of S3 buckets
#[derive(Parser, Debug)]
#[command(name = "buckethealth")]
#[command(about = "Health and usage reporting for S3-compatible buckets", long_about = None)]
struct Cli {
    /// Host to bind to
    #[arg(long, env = "HOST", default_value = HOST)]
    host: String,

    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = PORT)]
    port: u16,

    /// S3-compatible endpoint URL
    #[arg(long, env = "S3_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    /// Region passed to the S3 client
    #[arg(long, env = "S3_REGION", default_value = DEFAULT_REGION)]
    region: String,

    /// Access key for the storage backend
    #[arg(long, env = "S3_KEY")]
    access_key_id: Option<String>,

    /// Secret key for the storage backend
    #[arg(long, env = "S3_SECRET", hide_env_values = true)]
    secret_access_key: Option<String>,

    /// Use path-style bucket addressing (needed for most non-AWS endpoints)
    #[arg(long, env = "S3_FORCE_PATH_STYLE", default_value_t = false)]
    force_path_style: bool,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Parse command line arguments
    let cli = Cli::parse();

    tracing::info!("Using endpoint: {}", cli.endpoint);
    if cli.access_key_id.is_none() {
        tracing::warn!("No S3_KEY provided, falling back to the default credential chain");
    }

    // Build the storage client once at startup; credentials are never
    // re-read after this point
    let store = S3Store::new(
        cli.endpoint,
        cli.region,
        cli.force_path_style,
        cli.access_key_id,
        cli.secret_access_key,
    )
    .await;

    let inspector = BucketInspector::new(Arc::new(store));
    let app_state = AppState::new(Arc::new(inspector));

    let app = create_app(app_state);

    // Start server
    let addr = format!("{}:{}", cli.host, cli.port);
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!("Failed to bind {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    tracing::info!(
        "Bucket health API listening on {}",
        listener.local_addr().expect("listener has a local address")
    );
    tracing::info!(
        "Example: curl http://localhost:{}/buckets/my-bucket/freshness?max_age=12h",
        cli.port
    );

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
