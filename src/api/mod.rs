//! HTTP server: configuration, router and lifecycle.

mod handlers;
pub mod routes;
mod state;


pub use routes::{ApiDoc, create_router};
pub use state::AppState;

use std::env;
use std::net::{IpAddr, Ipv4Addr};
use std::sync::Arc;

use miette::Diagnostic;
use thiserror::Error;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::db::Database;
use crate::service::{QuestionPicker, QuizScope, RandomPicker, SeededPicker};

/// Environment variable selecting the quiz pool (`full` or `first-page`).
pub const QUIZ_SCOPE_ENV: &str = "TRIVIA_QUIZ_SCOPE";
/// Environment variable seeding the quiz picker.
pub const QUIZ_SEED_ENV: &str = "TRIVIA_QUIZ_SEED";

pub const DEFAULT_PORT: u16 = 5000;

/// API server errors
#[derive(Error, Diagnostic, Debug)]
pub enum ApiError {
    #[error("Failed to bind to {addr}: {source}")]
    #[diagnostic(
        code(trivia::api::bind),
        help("Check that the port is free or pass a different --port")
    )]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    #[diagnostic(code(trivia::api::serve))]
    Serve(#[source] std::io::Error),
}

/// API server configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Host address to bind to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Which questions a quiz round picks from
    pub quiz_scope: QuizScope,
    /// Fixed seed for quiz picks; random when unset
    pub quiz_seed: Option<u64>,
    /// Serve the OpenAPI UI at `/docs`
    pub docs: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            quiz_scope: QuizScope::default(),
            quiz_seed: None,
            docs: false,
        }
    }
}

impl Config {
    /// Defaults overridden by `TRIVIA_QUIZ_SCOPE` and `TRIVIA_QUIZ_SEED`.
    ///
    /// Unparseable values are ignored with a warning.
    pub fn new() -> Self {
        let mut config = Self::default();

        if let Ok(raw) = env::var(QUIZ_SCOPE_ENV) {
            match raw.parse::<QuizScope>() {
                Ok(scope) => config.quiz_scope = scope,
                Err(e) => warn!(var = QUIZ_SCOPE_ENV, error = %e, "ignoring invalid value"),
            }
        }

        if let Ok(raw) = env::var(QUIZ_SEED_ENV) {
            match raw.trim().parse::<u64>() {
                Ok(seed) => config.quiz_seed = Some(seed),
                Err(e) => warn!(var = QUIZ_SEED_ENV, error = %e, "ignoring invalid value"),
            }
        }

        config
    }

    pub fn with_host(mut self, host: IpAddr) -> Self {
        self.host = host;
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_quiz_scope(mut self, scope: QuizScope) -> Self {
        self.quiz_scope = scope;
        self
    }

    pub fn with_quiz_seed(mut self, seed: u64) -> Self {
        self.quiz_seed = Some(seed);
        self
    }

    pub fn with_docs(mut self, docs: bool) -> Self {
        self.docs = docs;
        self
    }

    /// The picker this configuration asks for.
    pub fn picker(&self) -> Arc<dyn QuestionPicker> {
        match self.quiz_seed {
            Some(seed) => Arc::new(SeededPicker::new(seed)),
            None => Arc::new(RandomPicker),
        }
    }
}

/// Initialize tracing subscriber with env filter.
///
/// A second call is a no-op.
pub fn init_tracing() {
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "trivia=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}

/// Run the API server with the given configuration until ctrl-c.
pub async fn run<D: Database + 'static>(config: Config, db: D) -> Result<(), ApiError> {
    init_tracing();

    let state = AppState::new(db, config.picker(), config.quiz_scope);
    let app = create_router(state, config.docs).layer(TraceLayer::new_for_http());

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| ApiError::Bind {
            addr: addr.clone(),
            source,
        })?;
    info!(
        quiz_scope = %config.quiz_scope,
        seeded = config.quiz_seed.is_some(),
        "API server listening on http://{}",
        addr
    );
    if config.docs {
        info!("API docs at http://{}/docs", addr);
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ApiError::Serve)?;

    info!("API server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
}
