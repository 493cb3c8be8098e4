mod api;
mod commands;
mod config;
mod errors;
mod models;
mod render;
mod session;
mod state;
mod text;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::api::ApiClient;
use crate::commands::analytics::AnalyticsArgs;
use crate::commands::apply::ApplyArgs;
use crate::commands::coach::CoachArgs;
use crate::commands::results::Tab;
use crate::commands::search::SearchArgs;
use crate::commands::tools::ToolsArgs;
use crate::config::Config;
use crate::session::SessionStore;
use crate::state::AppState;

#[derive(Parser)]
#[command(name = "pathio")]
#[command(version)]
#[command(about = "Career assistant: job search, resume tailoring, coaching, and analytics", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search for jobs and optionally save one for the apply flow
    Search {
        /// Job title or free-text query
        query: Option<String>,

        #[arg(long)]
        location: Option<String>,

        #[arg(long)]
        company: Option<String>,

        /// Comma-separated skills filter
        #[arg(long)]
        skills: Option<String>,

        /// Resume file for personalized match scoring
        #[arg(long, value_name = "FILE")]
        resume: Option<PathBuf>,

        /// Save result N (1-based) for `pathio apply`
        #[arg(long, value_name = "N")]
        select: Option<usize>,
    },

    /// Tailor your resume to a job and save the results
    Apply {
        /// Resume file (stdin if not specified)
        #[arg(long, value_name = "FILE")]
        resume: Option<PathBuf>,

        /// Job description file; defaults to the job saved by `search`
        #[arg(long, value_name = "FILE")]
        job_file: Option<PathBuf>,

        /// Inline job description text
        #[arg(long)]
        job_text: Option<String>,
    },

    /// View the last tailoring run
    Results {
        /// Which view to show
        #[arg(long, value_enum, default_value = "resume")]
        show: ShowTab,

        #[command(subcommand)]
        action: Option<ResultsAction>,
    },

    /// Chat with the career coach (interactive without a message)
    Coach {
        /// One-shot question
        message: Option<String>,
    },

    /// Analyze a resume for career insights
    Analytics {
        /// Resume file to upload (PDF, DOCX, or TXT)
        #[arg(long, value_name = "FILE")]
        file: Option<PathBuf>,

        /// Plain-text resume file (stdin if neither flag is given)
        #[arg(long, value_name = "FILE")]
        text: Option<PathBuf>,
    },

    /// Discover AI tools for a task
    Tools {
        /// What you want a tool for
        query: String,

        /// Restrict to one category
        #[arg(long)]
        category: Option<String>,
    },
}

#[derive(Subcommand)]
enum ResultsAction {
    /// Mark improvement task N done (toggles) and update the resume
    Done {
        #[arg(value_name = "N")]
        number: usize,
    },

    /// Export a document as DOCX
    Export {
        #[arg(value_enum)]
        which: ExportKind,

        /// Output path (default: pathio_<which>.docx)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ShowTab {
    Resume,
    Cover,
    Changes,
    Tasks,
}

impl From<ShowTab> for Tab {
    fn from(tab: ShowTab) -> Self {
        match tab {
            ShowTab::Resume => Tab::Resume,
            ShowTab::Cover => Tab::Cover,
            ShowTab::Changes => Tab::Changes,
            ShowTab::Tasks => Tab::Tasks,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ExportKind {
    Resume,
    Cover,
}

impl ExportKind {
    fn as_str(self) -> &'static str {
        match self {
            ExportKind::Resume => "resume",
            ExportKind::Cover => "cover",
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!(
        "Pathio CLI v{} (API: {})",
        env!("CARGO_PKG_VERSION"),
        config.api_base_url
    );

    let state = AppState {
        api: ApiClient::new(config.api_base_url.clone())?,
        session: SessionStore::new(config.state_dir.clone()),
        config,
    };

    let outcome = match cli.command {
        Commands::Search {
            query,
            location,
            company,
            skills,
            resume,
            select,
        } => {
            commands::search::run(
                &state,
                SearchArgs {
                    query,
                    location,
                    company,
                    skills,
                    resume,
                    select,
                },
            )
            .await
        }
        Commands::Apply {
            resume,
            job_file,
            job_text,
        } => {
            commands::apply::run(
                &state,
                ApplyArgs {
                    resume,
                    job_file,
                    job_text,
                },
            )
            .await
        }
        Commands::Results { show, action } => match action {
            None => commands::results::show(&state, show.into()),
            Some(ResultsAction::Done { number }) => commands::results::complete_task(&state, number),
            Some(ResultsAction::Export { which, output }) => {
                commands::results::export(&state, which.as_str(), output).await
            }
        },
        Commands::Coach { message } => commands::coach::run(&state, CoachArgs { message }).await,
        Commands::Analytics { file, text } => {
            commands::analytics::run(
                &state,
                AnalyticsArgs {
                    file,
                    text_from: text,
                },
            )
            .await
        }
        Commands::Tools { query, category } => {
            commands::tools::run(&state, ToolsArgs { query, category }).await
        }
    };

    if let Err(e) = outcome {
        tracing::error!("Command failed: {e}");
        render::print_error(&e.user_message());
        std::process::exit(1);
    }
    Ok(())
}
