pub mod api_client;
mod commands;
pub mod error;
pub mod utils;

#[cfg(test)]
mod api_client_test;

use clap::{Parser, Subcommand};

use commands::question::CreateQuestionRequest;

#[derive(Parser)]
#[command(name = "trivia")]
#[command(author, version, about = "Trivia game CLI", long_about = None)]
pub struct Cli {
    /// Override the API URL (default: TRIVIA_API_URL env or http://localhost:5000)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List all categories
    Categories {
        /// Output format (table or json)
        #[arg(long, default_value = "table")]
        format: String,
    },
    /// Question management commands
    Question {
        #[command(subcommand)]
        command: QuestionCommands,
    },
    /// Play a quiz in the terminal
    Quiz {
        /// Category ID (0 for all categories)
        #[arg(long, default_value_t = 0)]
        category: i64,
        /// Maximum number of questions
        #[arg(long, default_value_t = commands::quiz::DEFAULT_ROUNDS)]
        rounds: usize,
    },
}

#[derive(Subcommand)]
enum QuestionCommands {
    /// List questions, 10 per page
    List {
        /// Page number (1-based)
        #[arg(long)]
        page: Option<u32>,
        /// Only questions in this category
        #[arg(long)]
        category: Option<i64>,
        /// Output format (table or json)
        #[arg(long, default_value = "table")]
        format: String,
    },
    /// Add a question
    Add {
        #[arg(long)]
        question: String,
        #[arg(long)]
        answer: String,
        /// Category ID
        #[arg(long)]
        category: i64,
        /// Difficulty (1-5)
        #[arg(long)]
        difficulty: i64,
    },
    /// Delete a question
    Delete {
        /// Question ID to delete
        id: i64,
        /// Confirm deletion
        #[arg(long)]
        force: bool,
    },
    /// Search questions by substring
    Search {
        /// Search term (case-insensitive)
        term: String,
        /// Output format (table or json)
        #[arg(long, default_value = "table")]
        format: String,
    },
}

pub async fn run() -> miette::Result<()> {
    let cli = Cli::parse();
    let api_client = api_client::ApiClient::new(cli.api_url);

    let output = match cli.command {
        Some(Commands::Categories { format }) => {
            commands::category::list_categories(&api_client, &format).await?
        }
        Some(Commands::Question { command }) => match command {
            QuestionCommands::List {
                page,
                category,
                format,
            } => commands::question::list_questions(&api_client, page, category, &format).await?,
            QuestionCommands::Add {
                question,
                answer,
                category,
                difficulty,
            } => {
                let request = CreateQuestionRequest {
                    question,
                    answer,
                    category,
                    difficulty,
                };
                commands::question::add_question(&api_client, request).await?
            }
            QuestionCommands::Delete { id, force } => {
                commands::question::delete_question(&api_client, id, force).await?
            }
            QuestionCommands::Search { term, format } => {
                commands::question::search_questions(&api_client, &term, &format).await?
            }
        },
        Some(Commands::Quiz { category, rounds }) => {
            commands::quiz::play_quiz(&api_client, category, rounds).await?
        }
        None => {
            // Show help when no command provided
            let _ = Cli::parse_from(["trivia", "--help"]);
            return Ok(());
        }
    };

    println!("{}", output);
    Ok(())
}
