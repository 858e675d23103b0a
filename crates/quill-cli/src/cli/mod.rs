//! CLI entry and dispatch.

use anyhow::{Context, Result};
use clap::Parser;
use quill_core::config;

mod commands;

#[derive(Parser)]
#[command(name = "quill")]
#[command(version = "0.1")]
#[command(about = "Client for a remote blog service")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Log in and store the issued session token
    Login {
        /// Account username (email)
        #[arg(short, long)]
        username: String,

        /// Account password
        #[arg(short, long)]
        password: String,
    },

    /// Create an account (does not log in)
    Signup {
        /// Account username (email)
        #[arg(short, long)]
        username: String,

        /// Account password
        #[arg(short, long)]
        password: String,
    },

    /// Discard the stored session token
    Logout,

    /// Work with posts
    Posts {
        #[command(subcommand)]
        command: PostsCommands,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum PostsCommands {
    /// List all posts
    List,
    /// Look up a single post by id
    Search {
        /// The id to search for
        #[arg(value_name = "ID")]
        id: u64,
    },
    /// Create a post
    Create {
        #[arg(long)]
        title: String,

        #[arg(long)]
        author: String,

        #[arg(long)]
        content: String,
    },
    /// Edit a post (omitted fields keep their current values)
    Edit {
        /// The id of the post to edit
        #[arg(value_name = "ID")]
        id: u64,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        author: Option<String>,

        #[arg(long)]
        content: Option<String>,
    },
    /// Delete a post
    Delete {
        /// The id of the post to delete
        #[arg(value_name = "ID")]
        id: u64,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Initialize a default config file (if not present)
    Init,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    // one tokio runtime for everything
    let rt = tokio::runtime::Runtime::new().context("create tokio runtime")?;

    rt.block_on(async move { dispatch(cli).await })
}

async fn dispatch(cli: Cli) -> Result<()> {
    let config = config::Config::load().context("load config")?;
    tracing::debug!(?config, "loaded config");

    match cli.command {
        Commands::Login { username, password } => {
            commands::auth::login(&config, &username, &password).await
        }
        Commands::Signup { username, password } => {
            commands::auth::signup(&config, &username, &password).await
        }
        Commands::Logout => commands::auth::logout(),

        Commands::Posts { command } => match command {
            PostsCommands::List => commands::posts::list(&config).await,
            PostsCommands::Search { id } => commands::posts::search(&config, id).await,
            PostsCommands::Create {
                title,
                author,
                content,
            } => commands::posts::create(&config, title, author, content).await,
            PostsCommands::Edit {
                id,
                title,
                author,
                content,
            } => commands::posts::edit(&config, id, title, author, content).await,
            PostsCommands::Delete { id } => commands::posts::delete(&config, id).await,
        },

        Commands::Config { command } => match command {
            ConfigCommands::Path => {
                commands::config::path();
                Ok(())
            }
            ConfigCommands::Init => commands::config::init(),
        },
    }
}
