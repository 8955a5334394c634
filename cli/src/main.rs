mod api;
mod config;


use std::path::PathBuf;

use auth::login::{DEFAULT_LOGIN_TIMEOUT_SECS, LoginRequest, LoginResponse, redirect_if_authenticated};
use auth::nav::{self, NavEntry};
use auth::routes::{self, Navigation};
use auth::store::{FileSessionStore, StoreError};
use auth::{AuthContext, User};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::config::{CliConfig, DEFAULT_API_URL};

type FileAuth = AuthContext<FileSessionStore>;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("{0}")]
    LoginFailed(String),
    #[error("logged in, but the session could not be saved to {path}: {source}")]
    SessionNotSaved { path: String, source: StoreError },
    #[error("no route matches {0}")]
    NotFound(String),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "store-rating", about = "Store Rating session and access CLI")]
struct Cli {
    #[arg(long, env = "STORE_RATING_API_URL", default_value = DEFAULT_API_URL)]
    base_url: String,

    #[arg(long, env = "STORE_RATING_SESSION_FILE")]
    session_file: Option<PathBuf>,

    #[arg(long, env = "STORE_RATING_LOGIN_TIMEOUT_SECS", default_value_t = DEFAULT_LOGIN_TIMEOUT_SECS)]
    login_timeout_secs: u64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Log in and persist the session.
    Login {
        #[arg(long)]
        email: String,
        #[arg(long, env = "STORE_RATING_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Clear the persisted session.
    Logout,
    /// Show the signed-in user.
    Whoami,
    /// List navigation entries for the current session.
    Nav,
    /// Resolve a path through the route guard.
    Open { path: String },
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = CliConfig::new(&cli.base_url, cli.session_file, cli.login_timeout_secs);
    tracing::debug!(base_url = %config.base_url, session_file = %config.session_file.display(), "cli configured");

    let mut ctx = AuthContext::bootstrap(FileSessionStore::new(&config.session_file));
    let output = match cli.command {
        Command::Login { email, password } => run_login(&config, &mut ctx, email, password).await?,
        Command::Logout => run_logout(&mut ctx),
        Command::Whoami => run_whoami(&ctx)?,
        Command::Nav => run_nav(&ctx),
        Command::Open { path } => run_open(&ctx, &path)?,
    };
    println!("{output}");
    Ok(())
}

fn describe(user: &User) -> String {
    format!("{} <{}> ({})", user.name, user.email, user.role)
}

async fn run_login(config: &CliConfig, ctx: &mut FileAuth, email: String, password: String) -> Result<String, CliError> {
    if let Some(home) = redirect_if_authenticated(ctx.state()) {
        let who = ctx.state().user().map(describe).unwrap_or_default();
        return Ok(format!("already logged in as {who}\nnext: {home}"));
    }

    let request = LoginRequest::from_form(&email, &password).map_err(|message| CliError::LoginFailed(message.to_owned()))?;
    let session = api::login(config, &request)
        .await
        .and_then(LoginResponse::into_session)
        .map_err(|e| CliError::LoginFailed(e.display_message()))?;

    let who = describe(&session.user);
    let home = session.user.role.home_route();
    // Unsaved means logged out on the next run.
    ctx.login(session.user, session.token).map_err(|source| CliError::SessionNotSaved {
        path: ctx.store().path().display().to_string(),
        source,
    })?;

    Ok(format!("logged in as {who}\nnext: {home}"))
}

fn run_logout(ctx: &mut FileAuth) -> String {
    let next = nav::logout(ctx);
    format!("logged out\nnext: {next}")
}

fn run_whoami(ctx: &FileAuth) -> Result<String, CliError> {
    match ctx.state().user() {
        Some(user) => Ok(serde_json::to_string_pretty(user)?),
        None => Ok("not logged in".to_owned()),
    }
}

fn run_nav(ctx: &FileAuth) -> String {
    nav::render(ctx.state())
        .into_iter()
        .map(|entry| match entry {
            NavEntry::Link(link) => format!("{:<10} {}", link.label, link.href),
            NavEntry::Logout => entry.label().to_owned(),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn run_open(ctx: &FileAuth, path: &str) -> Result<String, CliError> {
    match routes::navigate(ctx.state(), path) {
        Navigation::Render { page, params } => {
            let params: String = params.iter().map(|(name, value)| format!(" {name}={value}")).collect();
            Ok(format!("render {}{params}", page.title()))
        }
        Navigation::Redirect(to) => Ok(format!("redirect {to}")),
        Navigation::NotFound => Err(CliError::NotFound(path.to_owned())),
    }
}
