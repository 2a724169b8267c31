//! Logging initialization for the catalog binaries
//!
//! Console output is always on, in JSON or human-readable form. File output
//! is optional and rotates via tracing-appender. `RUST_LOG` overrides the
//! configured filter.

use std::fs;

use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::config::LoggingConfig;

/// Keeps the non-blocking file writer alive.
///
/// Dropping the guard flushes buffered file output, so hold it until the
/// process exits.
pub struct LoggingGuard {
    _file_guard: Option<WorkerGuard>,
}

/// Initialize logging from [`LoggingConfig`].
///
/// Returns a [`LoggingGuard`] that must live for the program duration.
pub fn init_logging(config: &LoggingConfig) -> anyhow::Result<LoggingGuard> {
    let mut layers = vec![fmt_layer(config.json, true, std::io::stdout)];

    let file_guard = if config.file_enabled {
        let (writer, guard) = file_writer(config)?;
        layers.push(fmt_layer(config.json, false, writer));
        Some(guard)
    } else {
        None
    };

    tracing_subscriber::registry()
        .with(env_filter(config))
        .with(layers)
        .init();

    tracing::info!(
        level = %config.level,
        json = config.json,
        environment = %config.deployment_environment,
        "Logging initialized"
    );

    Ok(LoggingGuard {
        _file_guard: file_guard,
    })
}

/// `RUST_LOG` wins when set; otherwise filter to the catalog crates and
/// quiet the sqlx query logs.
fn env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "catalog_server={level},mercato={level},tower_http=debug,hyper=warn,sqlx=warn",
            level = config.level
        ))
    })
}

/// One fmt layer, JSON or human-readable, writing to `writer`.
fn fmt_layer<S, W>(json: bool, ansi: bool, writer: W) -> Box<dyn Layer<S> + Send + Sync>
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a> + 'static,
    W: for<'w> fmt::MakeWriter<'w> + Send + Sync + 'static,
{
    if json {
        fmt::layer()
            .json()
            .with_current_span(true)
            .with_span_list(false)
            .with_writer(writer)
            .boxed()
    } else {
        fmt::layer()
            .with_target(true)
            .with_ansi(ansi)
            .with_writer(writer)
            .boxed()
    }
}

/// Rotating file writer under `file_directory`, wrapped in a non-blocking
/// worker so request handling never waits on log I/O.
fn file_writer(config: &LoggingConfig) -> anyhow::Result<(NonBlocking, WorkerGuard)> {
    fs::create_dir_all(&config.file_directory)?;

    let rotation = match config.file_rotation.as_str() {
        "hourly" => Rotation::HOURLY,
        "minutely" => Rotation::MINUTELY,
        "never" => Rotation::NEVER,
        _ => Rotation::DAILY,
    };

    let appender = RollingFileAppender::builder()
        .rotation(rotation)
        .filename_prefix(config.file_prefix.as_str())
        .filename_suffix("log")
        .build(&config.file_directory)?;

    Ok(tracing_appender::non_blocking(appender))
}

/// Env-only logging for short-lived binaries such as the seeder.
pub fn init_simple_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("catalog_seed=info,mercato=info,sqlx=warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .init();
}
