//! Logging Infrastructure
//!
//! Structured logging setup for development and production:
//! - Console output, pretty or JSON
//! - Daily rotating application logs (deleted after 14 days)
//! - Daily audit logs for order submissions and status overrides (kept)

use chrono::{Duration, Local, NaiveDate, TimeZone};
use std::fs;
use std::path::Path;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, Layer, Registry, fmt, prelude::*};

/// Application log files older than this are removed
const APP_LOG_RETENTION_DAYS: i64 = 14;

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Remove `app.YYYY-MM-DD.log` files older than the retention window
///
/// Returns the number of deleted files.
pub fn cleanup_old_logs(log_dir: &Path) -> anyhow::Result<usize> {
    let cutoff = Local::now() - Duration::days(APP_LOG_RETENTION_DAYS);

    let app_log_dir = log_dir.join("app");
    if !app_log_dir.exists() {
        return Ok(0);
    }

    let mut removed = 0;
    for entry in fs::read_dir(app_log_dir)? {
        let path = entry?.path();
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };

        let Some(date_part) = name
            .strip_prefix("app.")
            .and_then(|d| d.strip_suffix(".log"))
        else {
            continue;
        };

        if let Ok(naive_date) = NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
            && let Some(midnight) = naive_date.and_hms_opt(0, 0, 0)
            && let Some(local_datetime) = Local.from_local_datetime(&midnight).single()
            && local_datetime < cutoff
        {
            fs::remove_file(&path)?;
            removed += 1;
            tracing::info!(file = %name, "Deleted old log file");
        }
    }

    Ok(removed)
}

fn daily_appender(dir: &Path, prefix: &str) -> anyhow::Result<RollingFileAppender> {
    fs::create_dir_all(dir)?;
    Ok(RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(prefix)
        .filename_suffix("log")
        .build(dir)?)
}

fn file_layer(
    appender: RollingFileAppender,
    json_format: bool,
    audit: bool,
) -> BoxedLayer {
    let target_filter = tracing_subscriber::filter::filter_fn(move |meta| {
        (meta.target() == "audit") == audit
    });
    let writer = std::sync::Mutex::new(appender);

    if json_format {
        fmt::layer()
            .json()
            .with_target(true)
            .with_current_span(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .with_writer(writer)
            .with_filter(target_filter)
            .boxed()
    } else {
        fmt::layer()
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .with_writer(writer)
            .with_filter(target_filter)
            .boxed()
    }
}

/// Initialize the logging system
///
/// # Arguments
/// * `level` - Log level (e.g., "info", "debug", "warn"); `RUST_LOG` wins when set
/// * `json_format` - JSON lines (production) instead of pretty output (development)
/// * `log_dir` - Optional directory for file logging (e.g., Some("./work_dir/logs"))
///
/// # Examples
/// ```no_run
/// // Development setup (console only)
/// order_core::init_logger_with_file("debug", false, None)?;
///
/// // Production setup (console + file)
/// order_core::init_logger_with_file("info", true, Some("./work_dir/logs"))?;
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn init_logger_with_file(
    level: &str,
    json_format: bool,
    log_dir: Option<&str>,
) -> anyhow::Result<()> {
    let env_filter = || EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let mut layers: Vec<BoxedLayer> = Vec::new();

    // Console layer
    if json_format {
        layers.push(
            fmt::layer()
                .json()
                .with_target(true)
                .with_current_span(true)
                .with_file(true)
                .with_line_number(true)
                .with_filter(env_filter())
                .boxed(),
        );
    } else {
        layers.push(
            fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_filter(env_filter())
                .boxed(),
        );
    }

    if let Some(dir) = log_dir {
        let log_dir = Path::new(dir);
        let app_log = daily_appender(&log_dir.join("app"), "app")?;
        let audit_log = daily_appender(&log_dir.join("audit"), "audit")?;

        layers.push(
            file_layer(app_log, json_format, false)
                .with_filter(env_filter())
                .boxed(),
        );
        layers.push(file_layer(audit_log, json_format, true));

        cleanup_old_logs(log_dir)?;
    }

    tracing_subscriber::registry().with(layers).try_init()?;
    Ok(())
}

/// Initialize the logging system (console only)
pub fn init_logger(level: &str, json_format: bool) -> anyhow::Result<()> {
    init_logger_with_file(level, json_format, None)
}

/// Audit log helper - records order submissions and staff overrides
///
/// Audit entries go to the `audit` target, which file logging routes to
/// `audit/audit.YYYY-MM-DD.log` and never cleans up.
///
/// # Examples
/// ```no_run
/// order_core::audit_log!("jane@x.com", "submit", "order:k3j9x0a2q");
/// order_core::audit_log!("staff", "set_status", "order:k3j9x0a2q", "ready -> pending");
/// ```
#[macro_export]
macro_rules! audit_log {
    ($user_id:expr, $action:expr, $resource:expr) => {
        tracing::info!(
            target: "audit",
            user_id = %$user_id,
            action = %$action,
            resource = %$resource,
            timestamp = %chrono::Local::now().to_rfc3339(),
            "AUDIT"
        );
    };
    ($user_id:expr, $action:expr, $resource:expr, $details:expr) => {
        tracing::info!(
            target: "audit",
            user_id = %$user_id,
            action = %$action,
            resource = %$resource,
            details = %$details,
            timestamp = %chrono::Local::now().to_rfc3339(),
            "AUDIT"
        );
    };
}
