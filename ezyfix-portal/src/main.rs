//! EzyFix Vendor Portal - binary entry point

use anyhow::Context;
use clap::Parser;
use ezyfix_portal::config::Cli;
use ezyfix_portal::{App, AppConfig};
use tracing_appender::rolling;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

struct LocalTimer;

impl FormatTime for LocalTimer {
    fn format_time(&self, w: &mut fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(
            w,
            "{}",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f")
        )
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_cli(Cli::parse());

    // 1. Initialize logging: ANSI stdout for warnings, daily-rolling
    // file for the full trail.
    let log_dir = config.log_dir();
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create logs directory {}", log_dir.display()))?;

    let file_appender = rolling::daily(&log_dir, "ezyfix-portal.log");
    let (non_blocking_file, _guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = if let Ok(from_env) = EnvFilter::try_from_default_env() {
        from_env
    } else if cfg!(debug_assertions) {
        EnvFilter::new("info,ezyfix_portal=debug")
    } else {
        EnvFilter::new("info")
    };

    let file_layer = fmt::layer()
        .with_timer(LocalTimer)
        .with_ansi(false)
        .with_target(true)
        .with_level(true)
        .with_writer(non_blocking_file);

    // The portal is an interactive terminal app; keep stdout quiet so
    // prompts stay readable.
    let stdout_layer = fmt::layer()
        .with_timer(LocalTimer)
        .with_ansi(true)
        .with_target(false)
        .with_filter(tracing_subscriber::filter::LevelFilter::WARN);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(stdout_layer)
        .init();

    std::panic::set_hook(Box::new(|info| {
        let message = info.to_string();
        eprintln!("!!! APPLICATION PANIC !!!\n{message}");
        tracing::error!(target: "panic", message = %message, "panic occurred");
    }));

    tracing::info!(api_url = %config.api_url, "EzyFix vendor portal starting");

    let mut app = App::new(config);
    ezyfix_portal::pages::run(&mut app).await
}
