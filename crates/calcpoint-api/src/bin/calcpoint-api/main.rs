use calcpoint_api::{ApiConfig, AppState, ConfigOverrides, build_app_with_config};
use clap::Parser;
use std::path::PathBuf;
use tracing::{debug, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Calcpoint inference server
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Host address to bind to [default: 127.0.0.1]
    #[arg(short = 'H', long, env = "CALCPOINT_HOST")]
    host: Option<String>,

    /// Port to listen on [default: 8080]
    #[arg(short, long, env = "CALCPOINT_PORT")]
    port: Option<u16>,

    /// Log level (error, warn, info, debug, trace) [default: info]
    #[arg(short, long, env = "CALCPOINT_LOG_LEVEL")]
    log_level: Option<String>,

    /// Config file path
    #[arg(short, long, env = "CALCPOINT_CONFIG")]
    config_file: Option<PathBuf>,

    /// Disable Swagger UI
    #[arg(long, env = "CALCPOINT_DISABLE_SWAGGER")]
    disable_swagger: bool,

    /// Model artifact directory passed to the handler (unused by the calculator)
    #[arg(long, env = "SM_MODEL_DIR")]
    model_dir: Option<PathBuf>,
}

impl Cli {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            host: self.host.clone(),
            port: self.port,
            log_level: self.log_level.clone(),
            enable_swagger: self.disable_swagger.then_some(false),
            model_dir: self.model_dir.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration, then apply CLI options on top
    let loaded = cli
        .config_file
        .as_ref()
        .map(|path| (path, ApiConfig::load_from_file(path)));
    let base = match &loaded {
        Some((_, Ok(cfg))) => cfg.clone(),
        _ => ApiConfig::default(),
    };
    let config = base.merge_overrides(cli.overrides());

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match &loaded {
        Some((path, Ok(_))) => info!("Configuration loaded from: {}", path.display()),
        Some((_, Err(e))) => warn!("Failed to load config file: {}. Using defaults.", e),
        None => {}
    }

    let addr = config.socket_addr()?;

    // Load the model once for the lifetime of the process
    let state = AppState::load(config.model_dir.as_deref())
        .map_err(|e| anyhow::anyhow!("Failed to load model: {}", e))?;
    debug!("Handler metadata: {:?}", state.endpoint.metadata());

    // Build application
    let app = build_app_with_config(state, &config);

    // Start server
    info!("Starting server on: {}", addr);
    if config.enable_swagger {
        info!("Swagger UI: http://{}/swagger-ui", addr);
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))
}
