use std::path::PathBuf;

use clap::Parser;
use trivia_endpoint::{bank::QuestionBank, names, AppState};

#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// The address to bind to.
    #[arg(short, long, env, default_value = names::DEFAULT_ADDRESS)]
    address: String,

    /// JSON question bank replacing the built-in questions.
    #[arg(short, long, env)]
    questions: Option<PathBuf>,

    /// Emails that start out logged in.
    #[arg(long, env = "PREREGISTERED_EMAILS", value_delimiter = ',')]
    preregistered: Vec<String>,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let filter =
        std::env::var("RUST_LOG").unwrap_or_else(|_| names::DEFAULT_LOG_FILTER.to_owned());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
        .init();

    let args = Args::parse();

    let bank = match &args.questions {
        Some(path) => QuestionBank::from_file(path)?,
        None => QuestionBank::default(),
    };
    tracing::info!("question bank loaded with {} questions", bank.len());

    let state = AppState::new(bank);
    state.quiz.preregister(&args.preregistered).await?;

    let address = args.address.parse::<std::net::SocketAddr>()?;
    let listener = tokio::net::TcpListener::bind(address).await?;
    tracing::info!("listening on {address}");

    axum::serve(listener, trivia_endpoint::router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("could not listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
