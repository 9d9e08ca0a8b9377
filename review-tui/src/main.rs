use clap::Parser;
use review_tui::{Args, Settings};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::resolve(Args::parse());

    // stdout belongs to the terminal UI, so logs go to daily files
    std::fs::create_dir_all(&settings.log_dir).ok();
    let file_appender = tracing_appender::rolling::daily(&settings.log_dir, "reviewer");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true)
                .with_line_number(true),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    tracing::info!(
        source = %settings.source,
        data_dir = %settings.data_dir.display(),
        "Reviewer starting up"
    );

    review_tui::ui::run_app(settings).await?;

    tracing::info!("Reviewer shutting down");
    Ok(())
}
