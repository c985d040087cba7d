//! Library Management administration client
//!
//! Runs one command against the library REST API and prints the resulting screen.

use std::process::ExitCode;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer};

use library_admin::{cli::Command, config::AppConfig, App, AppError};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load()?;

    // Initialize tracing
    let _guard = init_tracing(&config)?;

    tracing::info!("Starting Library Admin v{}", env!("CARGO_PKG_VERSION"));
    tracing::debug!("API base URL: {}", config.api.base_url);

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = match Command::parse(&args) {
        Ok(command) => command,
        Err(AppError::Usage(message)) => {
            eprintln!("{}", message);
            return Ok(ExitCode::from(2));
        }
        Err(e) => return Err(e.into()),
    };

    let app = App::from_config(&config);
    let outcome = app.execute(command).await;
    println!("{}", outcome.output);

    Ok(if outcome.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Install the subscriber. Logs go to stderr, or to `logging.file` when set;
/// the returned guard flushes the file writer on drop.
fn init_tracing(
    config: &AppConfig,
) -> anyhow::Result<Option<tracing_appender::non_blocking::WorkerGuard>> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("library_admin={}", config.logging.level).into());

    let (writer, guard) = match &config.logging.file {
        Some(path) => {
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or_else(|| std::path::Path::new("."));
            let name = path
                .file_name()
                .ok_or_else(|| anyhow::anyhow!("Invalid log file path: {}", path.display()))?;
            std::fs::create_dir_all(dir)?;
            let (writer, guard) =
                tracing_appender::non_blocking(tracing_appender::rolling::never(dir, name));
            (tracing_subscriber::fmt::writer::BoxMakeWriter::new(writer), Some(guard))
        }
        None => (
            tracing_subscriber::fmt::writer::BoxMakeWriter::new(std::io::stderr),
            None,
        ),
    };

    let fmt_layer = if config.logging.format == "json" {
        tracing_subscriber::fmt::layer()
            .json()
            .with_writer(writer)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .with_writer(writer)
            .with_ansi(guard.is_none())
            .boxed()
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();

    Ok(guard)
}
