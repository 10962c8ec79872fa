//! Trivia API server binary.
//!
//! This binary creates the concrete database implementation and passes it
//! to the API server. The API layer remains agnostic of the storage backend.

use std::net::IpAddr;
use std::path::PathBuf;

use clap::Parser;
use miette::Diagnostic;
use thiserror::Error;
use tracing::info;
use trivia::api::{self, ApiError, Config};
use trivia::db::{Database, DbError, SqliteDatabase};
use trivia::paths::get_db_path;
use trivia::service::QuizScope;

#[derive(Error, Diagnostic, Debug)]
enum BinaryError {
    #[error("Database error: {0}")]
    #[diagnostic(code(trivia::binary::database))]
    Database(#[from] DbError),

    #[error("Failed to create data directory: {0}")]
    #[diagnostic(code(trivia::binary::io))]
    Io(#[from] std::io::Error),

    #[error("API server error: {0}")]
    #[diagnostic(code(trivia::binary::api))]
    Api(#[from] ApiError),
}

#[derive(Parser)]
#[command(name = "trivia-api")]
#[command(author, version, about = "Trivia API server", long_about = None)]
struct Cli {
    /// Host address to bind to
    #[arg(long, default_value = "0.0.0.0")]
    host: IpAddr,

    /// Port to listen on
    #[arg(short, long, default_value_t = api::DEFAULT_PORT)]
    port: u16,

    /// Database file path (defaults to XDG data directory: ~/.local/share/trivia/trivia.db)
    #[arg(long)]
    db: Option<PathBuf>,

    /// Load the sample questions when the question table is empty
    #[arg(long)]
    seed: bool,

    /// Quiz pool: full or first-page (env: TRIVIA_QUIZ_SCOPE)
    #[arg(long)]
    quiz_scope: Option<QuizScope>,

    /// Seed for reproducible quiz picks (env: TRIVIA_QUIZ_SEED)
    #[arg(long)]
    quiz_seed: Option<u64>,

    /// Serve the OpenAPI UI at /docs
    #[arg(long)]
    docs: bool,
}

#[tokio::main]
async fn main() -> miette::Result<()> {
    serve(Cli::parse()).await?;
    Ok(())
}

async fn serve(cli: Cli) -> Result<(), BinaryError> {
    api::init_tracing();

    let db_path = cli.db.unwrap_or_else(get_db_path);
    info!(path = ?db_path, "opening database");

    // Ensure parent directory exists
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let db = SqliteDatabase::open(&db_path).await?;

    // Run migrations before starting the server
    db.migrate().await?;
    info!("database migrations complete");

    if cli.seed {
        let inserted = db.seed_sample_questions().await?;
        info!(inserted, "sample questions loaded");
    }

    let mut config = Config::new()
        .with_host(cli.host)
        .with_port(cli.port)
        .with_docs(cli.docs);
    if let Some(scope) = cli.quiz_scope {
        config = config.with_quiz_scope(scope);
    }
    if let Some(seed) = cli.quiz_seed {
        config = config.with_quiz_seed(seed);
    }

    // Pass the abstract Database to the API layer
    api::run(config, db).await?;

    Ok(())
}
