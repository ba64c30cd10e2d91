mod routes;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};

use crate::prelude::{eprintln, *};

#[derive(Debug, clap::Parser)]
#[command(name = "serve")]
#[command(about = "Serve the classification API over HTTP")]
pub struct App {
    /// Port to listen on
    #[arg(short, long, env = "SIFT_PORT", default_value = "3000")]
    pub port: u16,

    /// Host to bind to
    #[arg(long, env = "SIFT_HOST", default_value = "127.0.0.1")]
    pub host: String,

    #[clap(flatten)]
    pub identity: IdentityOptions,
}

/// Static identity fields echoed in every successful response.
#[derive(Debug, Clone, clap::Args)]
pub struct IdentityOptions {
    /// User id reported in successful responses
    #[arg(long, env = "SIFT_USER_ID", default_value = "john_doe_17091999")]
    pub user_id: String,

    /// Email reported in successful responses
    #[arg(long, env = "SIFT_EMAIL", default_value = "john@xyz.com")]
    pub email: String,

    /// Roll number reported in successful responses
    #[arg(long, env = "SIFT_ROLL_NUMBER", default_value = "ABCD123")]
    pub roll_number: String,
}

/// Process-wide identity configuration, fixed at startup.
#[derive(Debug, Clone)]
pub struct Identity {
    pub user_id: String,
    pub email: String,
    pub roll_number: String,
}

impl From<IdentityOptions> for Identity {
    fn from(options: IdentityOptions) -> Self {
        Identity {
            user_id: options.user_id,
            email: options.email,
            roll_number: options.roll_number,
        }
    }
}

pub fn build_router(identity: Arc<Identity>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(routes::root))
        .route("/health", get(routes::health))
        .route("/bfhl", post(routes::classify))
        .layer(cors)
        .with_state(identity)
}

pub async fn run(app: App, global: crate::Global) -> Result<()> {
    if global.verbose {
        eprintln!(
            "Starting classification server on {}:{}...",
            app.host, app.port
        );
    }

    let addr = format!("{}:{}", app.host, app.port);

    let identity = Arc::new(Identity::from(app.identity));
    let app_router = build_router(identity);

    if global.verbose {
        eprintln!("Listening on http://{}", addr);
        eprintln!("Classification endpoint: http://{}/bfhl", addr);
        eprintln!("Health endpoint: http://{}/health", addr);
    }

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| Error::Bind {
            addr: addr.clone(),
            reason: e.to_string(),
        })?;

    axum::serve(listener, app_router)
        .await
        .map_err(|e| Error::Serve(e.to_string()))?;

    Ok(())
}
