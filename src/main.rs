use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use devpattern::{api, cli, index::ProjectIndex};

const DEFAULT_PORT: u16 = 3456;

#[derive(Parser)]
#[command(name = "devpattern")]
#[command(about = "Discover and index conductor projects on this machine")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP API server
    Serve {
        /// Port for HTTP API
        #[arg(short, long, default_value_t = DEFAULT_PORT)]
        port: u16,
    },
    /// Print every discovered project with its tracks
    List,
    /// Print the documents of a project
    Docs {
        /// Project id as shown by the API
        id: String,
    },
    /// Show or change the search configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show the current configuration
    Show,
    /// Add a directory whose children are scanned for projects
    AddPath { path: String },
    /// Add a project directory directly
    AddProject { path: String },
}

/// Initialize tracing with output to stderr (for printing commands) or stdout
fn init_tracing(use_stderr: bool) {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "devpattern=debug,tower_http=debug".into()),
    );

    if use_stderr {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

async fn serve(index: ProjectIndex, port: u16) -> anyhow::Result<()> {
    tracing::info!(config = %index.store().path().display(), "Starting devpattern server");

    let app = api::create_router(index);
    let listener = tokio::net::TcpListener::bind(format!("127.0.0.1:{}", port)).await?;
    tracing::info!("devpattern API listening on http://127.0.0.1:{}", port);

    axum::serve(listener, app).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    // Printing commands keep stdout clean for their output
    let use_stderr = !matches!(args.command, None | Some(Commands::Serve { .. }));
    init_tracing(use_stderr);

    let index = ProjectIndex::open_default()?;

    match args.command {
        Some(Commands::Serve { port }) => serve(index, port).await?,
        None => serve(index, DEFAULT_PORT).await?,
        Some(Commands::List) => cli::list_projects(&index),
        Some(Commands::Docs { id }) => cli::list_documents(&index, &id)?,
        Some(Commands::Config { action }) => {
            let config = match action {
                None | Some(ConfigAction::Show) => index.config(),
                Some(ConfigAction::AddPath { path }) => index.add_search_path(&path),
                Some(ConfigAction::AddProject { path }) => index.add_project(&path),
            };
            cli::print_config(&index, &config)?;
        }
    }

    Ok(())
}
