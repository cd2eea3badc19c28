use anyhow::Context;
use clap::Parser;
use yt_insight::{
    server::{self, DEFAULT_ALLOWED_ORIGIN},
    tracing::init_tracing_subscriber,
    Dispatcher, OpenAIClient, PromptRegistry,
};

#[derive(Parser)]
#[command(name = "yt-insight", about = "Summaries, takeaways, quotes and Q&A for YouTube videos")]
struct Cli {
    /// Address the HTTP server binds to
    #[arg(long, env = "LISTEN_ADDR", default_value = "0.0.0.0:8000")]
    listen_addr: String,

    /// OpenAI API key; requests fail at the backend when unset
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    openai_key: Option<String>,

    /// Base URL of the OpenAI-compatible API
    #[arg(long, env = "OPENAI_BASE_URL", default_value = OpenAIClient::DEFAULT_BASE_URL)]
    openai_base_url: String,

    /// Chat completion model
    #[arg(long, env = "OPENAI_MODEL", default_value = OpenAIClient::DEFAULT_MODEL)]
    model: String,

    /// The single origin allowed to call the API from a browser
    #[arg(long, env = "CORS_ALLOWED_ORIGIN", default_value = DEFAULT_ALLOWED_ORIGIN)]
    allowed_origin: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    let _guard = sentry::init((
        std::env::var("SENTRY_DSN").unwrap_or_default(),
        sentry::ClientOptions {
            release: sentry::release_name!(),
            environment: Some("production".into()),
            ..Default::default()
        },
    ));

    let cli = Cli::parse();
    init_tracing_subscriber()?;

    if cli.openai_key.is_none() {
        tracing::warn!("OPENAI_API_KEY not set; backend calls will be rejected");
    }

    let generator = OpenAIClient::new(cli.openai_key)
        .with_base_url(cli.openai_base_url)
        .with_model(cli.model);
    let dispatcher = Dispatcher::new(PromptRegistry::builtin(), generator);

    let cors = server::cors_layer(&cli.allowed_origin)
        .with_context(|| format!("Invalid CORS origin: {}", cli.allowed_origin))?;
    let app = server::router(dispatcher, cors);

    let listener = tokio::net::TcpListener::bind(&cli.listen_addr)
        .await
        .with_context(|| format!("Failed to bind {}", cli.listen_addr))?;
    tracing::info!(addr = %cli.listen_addr, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}
