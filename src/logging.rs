use std::fs;
use std::path::Path;
use tracing_subscriber::{filter::LevelFilter, fmt, prelude::*, EnvFilter};

/// Initializes logging: a console layer on stderr, plus a daily-rolling JSON
/// file when `log_dir` is given.
///
/// stdout is reserved for prompts and results.
pub fn init_logging(log_dir: Option<&Path>) {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();

    let console_layer = fmt::layer().with_writer(std::io::stderr).with_target(false);

    let file_layer = log_dir.and_then(|dir| {
        fs::create_dir_all(dir).ok()?;
        let file_appender = tracing_appender::rolling::daily(dir, "nl_address_locator.log");
        let (non_blocking_writer, guard) = tracing_appender::non_blocking(file_appender);
        // Keep the guard alive for the whole process so logs are flushed on exit
        std::mem::forget(guard);
        Some(fmt::layer().json().with_writer(non_blocking_writer))
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(console_layer)
        .init();
}
