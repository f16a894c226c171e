use crate::error::{Result as ServerErrorResult, ServerError};

use vg_config::LogLevel;

use std::fmt::Display;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use fern::colors::{Color, ColoredLevelConfig};
use fern::{Dispatch, FormatCallback};
use log::{LevelFilter, Record, info};

/// Dependencies that are chatty at `info` and below
const QUIET_TARGETS: &[&str] = &["sqlx", "hyper", "hyper_util", "reqwest"];

/// Install the global logger.
///
/// Output goes to `log_file` when given, stdout otherwise. Colors only apply
/// to stdout.
pub fn initialize(
    log_level: LogLevel,
    log_file: Option<PathBuf>,
    colored: bool,
) -> ServerErrorResult<()> {
    let level_filter = *log_level;

    let output = match log_file.as_deref() {
        Some(path) => plain(Dispatch::new()).chain(open_append(path)?),
        None if colored => colorized(Dispatch::new()).chain(std::io::stdout()),
        None => plain(Dispatch::new()).chain(std::io::stdout()),
    };

    QUIET_TARGETS
        .iter()
        .fold(Dispatch::new().level(level_filter), |dispatch, target| {
            dispatch.level_for(*target, level_filter.min(LevelFilter::Warn))
        })
        .chain(output)
        .apply()
        .map_err(|e| ServerError::Logger {
            message: format!("Failed to install logger: {e}"),
        })?;

    let destination = log_file
        .as_deref()
        .map_or_else(|| "stdout".to_string(), |path| path.display().to_string());
    info!("Logger initialized: level={level_filter}, output={destination}");

    Ok(())
}

fn open_append(path: &Path) -> ServerErrorResult<std::fs::File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| ServerError::Logger {
            message: format!("Failed to open log file {}: {}", path.display(), e),
        })
}

fn plain(dispatch: Dispatch) -> Dispatch {
    dispatch.format(|out, message, record| write_line(out, record.level(), message, record))
}

fn colorized(dispatch: Dispatch) -> Dispatch {
    let colors = ColoredLevelConfig::new()
        .error(Color::Red)
        .warn(Color::Yellow)
        .info(Color::Green)
        .debug(Color::Cyan)
        .trace(Color::BrightBlack);

    dispatch.format(move |out, message, record| {
        write_line(out, colors.color(record.level()), message, record)
    })
}

fn write_line(
    out: FormatCallback<'_>,
    level: impl Display,
    message: &std::fmt::Arguments<'_>,
    record: &Record<'_>,
) {
    out.finish(format_args!(
        "{date} {level:<5} {target}: {message}",
        date = humantime::format_rfc3339_seconds(SystemTime::now()),
        target = record.target(),
    ))
}
