use linkaudit_core::config::LoggingConfig;
use std::fs::{self, File, OpenOptions};
use std::io::{self, IsTerminal};
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

/// Environment variable that overrides both configured levels.
pub const LOG_ENV_VAR: &str = "LINKAUDIT_LOG";

/// Levels for the stderr layer and the optional file layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogLevels {
    pub stderr: LevelFilter,
    pub file: LevelFilter,
}

/// Resolve the configured level strings.
///
/// An unknown `level` falls back to `info`. The file layer uses `file_level`,
/// then `level`, and finally `debug` when neither parses.
pub fn resolve_levels(cfg: &LoggingConfig) -> LogLevels {
    let stderr = parse_level(&cfg.level).unwrap_or(LevelFilter::INFO);
    let file = cfg
        .file_level
        .as_deref()
        .and_then(parse_level)
        .or_else(|| parse_level(&cfg.level))
        .unwrap_or(LevelFilter::DEBUG);
    LogLevels { stderr, file }
}

/// Install the global subscriber.
///
/// The returned guard flushes the file layer when dropped, so the caller
/// holds it until the command finishes.
pub fn init(cfg: &LoggingConfig) -> io::Result<Option<WorkerGuard>> {
    let levels = resolve_levels(cfg);

    let stderr_layer = fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .with_filter(env_filter(levels.stderr));

    let registry = tracing_subscriber::registry().with(stderr_layer);

    let Some(path) = cfg.file.as_deref() else {
        registry.init();
        return Ok(None);
    };

    let (non_blocking, guard) = tracing_appender::non_blocking(open_log_file(path)?);

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_file(true)
        .with_line_number(true)
        .with_filter(env_filter(levels.file));

    registry.with(file_layer).init();
    Ok(Some(guard))
}

fn env_filter(default: LevelFilter) -> EnvFilter {
    EnvFilter::builder()
        .with_env_var(LOG_ENV_VAR)
        .with_default_directive(default.into())
        .from_env_lossy()
}

/// Successive audits append to the same log.
fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

fn parse_level(s: &str) -> Option<LevelFilter> {
    match s.trim().to_lowercase().as_str() {
        "error" => Some(LevelFilter::ERROR),
        "warn" => Some(LevelFilter::WARN),
        "info" => Some(LevelFilter::INFO),
        "debug" => Some(LevelFilter::DEBUG),
        "trace" => Some(LevelFilter::TRACE),
        "off" => Some(LevelFilter::OFF),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn logging(level: &str, file_level: Option<&str>) -> LoggingConfig {
        LoggingConfig {
            level: level.to_string(),
            file_level: file_level.map(str::to_string),
            file: None,
        }
    }

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("error"), Some(LevelFilter::ERROR));
        assert_eq!(parse_level("WARN"), Some(LevelFilter::WARN));
        assert_eq!(parse_level(" Info "), Some(LevelFilter::INFO));
        assert_eq!(parse_level("off"), Some(LevelFilter::OFF));
        assert_eq!(parse_level("verbose"), None);
        assert_eq!(parse_level(""), None);
    }

    #[test]
    fn test_file_level_is_independent() {
        let levels = resolve_levels(&logging("error", Some("trace")));
        assert_eq!(levels, LogLevels { stderr: LevelFilter::ERROR, file: LevelFilter::TRACE });
    }

    #[test]
    fn test_file_level_follows_stderr_level() {
        let levels = resolve_levels(&logging("warn", None));
        assert_eq!(levels.file, LevelFilter::WARN);

        let levels = resolve_levels(&logging("warn", Some("loud")));
        assert_eq!(levels.file, LevelFilter::WARN);
    }

    #[test]
    fn test_unknown_levels_use_defaults() {
        let levels = resolve_levels(&logging("loud", None));
        assert_eq!(levels, LogLevels { stderr: LevelFilter::INFO, file: LevelFilter::DEBUG });
    }

    #[test]
    fn test_log_file_is_appended_in_new_directory() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("logs/nested/linkaudit.log");

        {
            use std::io::Write;
            let mut file = open_log_file(&path).unwrap();
            writeln!(file, "first").unwrap();
            let mut file = open_log_file(&path).unwrap();
            writeln!(file, "second").unwrap();
        }

        assert_eq!(fs::read_to_string(&path).unwrap(), "first\nsecond\n");
    }
}
