use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
pub enum CliError {
    #[error("Failed to connect to API server")]
    #[diagnostic(
        code(trivia::cli::connection_failed),
        help(
            "Is the API server running? Try: trivia-api --seed\nOr set TRIVIA_API_URL environment variable to point to the correct server."
        )
    )]
    ConnectionFailed {
        #[source]
        source: reqwest::Error,
    },

    #[error("Invalid response from API server: {message}")]
    #[diagnostic(
        code(trivia::cli::invalid_response),
        help(
            "The server returned data in an unexpected format. This might indicate a version mismatch."
        )
    )]
    InvalidResponse { message: String },

    #[error("API error ({status}): {message}")]
    #[diagnostic(code(trivia::cli::api_error))]
    ApiError { status: u16, message: String },

    #[error("Delete operation requires --force flag")]
    #[diagnostic(
        code(trivia::cli::force_required),
        help("This action is destructive and cannot be undone. Re-run with --force.")
    )]
    ForceRequired,

    #[error("Terminal I/O failed: {0}")]
    #[diagnostic(code(trivia::cli::io))]
    Io(#[from] std::io::Error),
}

impl From<reqwest::Error> for CliError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_connect() || e.is_timeout() {
            CliError::ConnectionFailed { source: e }
        } else {
            CliError::InvalidResponse {
                message: e.to_string(),
            }
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::InvalidResponse {
            message: e.to_string(),
        }
    }
}

pub type CliResult<T> = Result<T, CliError>;
