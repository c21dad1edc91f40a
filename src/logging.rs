/// Structured logging for the grid risk service.
///
/// Provides context-rich logging with region identifiers, timestamps, and
/// severity levels. Supports both console output and file-based logging
/// for daemon operations. The logger is optional: before `init_logger` is
/// called every log helper is a no-op, which keeps the pure risk core
/// silent in unit tests.

use chrono::Utc;
use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::sync::Mutex;

use crate::model::WeatherError;

// ---------------------------------------------------------------------------
// Log Levels
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Debug => write!(f, "DEBUG"),
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Warning => write!(f, "WARN"),
            LogLevel::Error => write!(f, "ERROR"),
        }
    }
}

// ---------------------------------------------------------------------------
// Data Source Types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    OpenMeteo,
    System,
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::OpenMeteo => write!(f, "OPEN-METEO"),
            DataSource::System => write!(f, "SYS"),
        }
    }
}

// ---------------------------------------------------------------------------
// Failure Classification
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureType {
    /// Expected failure - provider throttling or a transient network gap
    Expected,
    /// Unexpected failure - indicates service degradation or an API change
    Unexpected,
    /// Unknown - cannot determine if this is expected or not
    Unknown,
}

impl fmt::Display for FailureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureType::Expected => write!(f, "EXPECTED"),
            FailureType::Unexpected => write!(f, "UNEXPECTED"),
            FailureType::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

// ---------------------------------------------------------------------------
// Logger Configuration
// ---------------------------------------------------------------------------

/// Global logger instance
static LOGGER: Mutex<Option<Logger>> = Mutex::new(None);

pub struct Logger {
    /// Minimum log level to display
    min_level: LogLevel,
    /// Optional file path for logging
    log_file: Option<String>,
    /// Whether to include timestamps in console output
    console_timestamps: bool,
}

impl Logger {
    /// Initialize the global logger
    pub fn init(min_level: LogLevel, log_file: Option<String>, console_timestamps: bool) {
        let logger = Logger {
            min_level,
            log_file,
            console_timestamps,
        };

        *LOGGER.lock().unwrap() = Some(logger);
    }

    /// Log a message with the global logger
    fn log(&self, level: LogLevel, source: &DataSource, region: Option<&str>, message: &str) {
        if level < self.min_level {
            return;
        }

        let timestamp = Utc::now().format("%Y-%m-%d %H:%M:%S UTC");

        let region_part = region.map(|r| format!(" [{}]", r)).unwrap_or_default();
        let log_entry = format!(
            "{} {} {}{}: {}",
            timestamp, level, source, region_part, message
        );

        // Console output
        if self.console_timestamps {
            match level {
                LogLevel::Error | LogLevel::Warning => eprintln!("{}", log_entry),
                LogLevel::Info => println!("{}", log_entry),
                LogLevel::Debug => println!("[DEBUG] {}", message),
            }
        } else {
            match level {
                LogLevel::Error => eprintln!("✗ {}{}: {}", source, region_part, message),
                LogLevel::Warning => eprintln!("⚠ {}{}: {}", source, region_part, message),
                LogLevel::Info => println!("{}", message),
                LogLevel::Debug => {} // Skip debug in non-timestamp mode
            }
        }

        // File output
        if let Some(ref path) = self.log_file {
            if let Err(e) = Self::append_to_file(path, &log_entry) {
                eprintln!("Failed to write to log file {}: {}", path, e);
            }
        }
    }

    fn append_to_file(path: &str, entry: &str) -> std::io::Result<()> {
        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        writeln!(file, "{}", entry)?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Public Logging Functions
// ---------------------------------------------------------------------------

/// Initialize the global logger
pub fn init_logger(min_level: LogLevel, log_file: Option<&str>, console_timestamps: bool) {
    Logger::init(min_level, log_file.map(String::from), console_timestamps);
}

/// Log a general informational message
pub fn info(source: DataSource, region: Option<&str>, message: &str) {
    if let Some(logger) = LOGGER.lock().unwrap().as_ref() {
        logger.log(LogLevel::Info, &source, region, message);
    }
}

/// Log a warning message
pub fn warn(source: DataSource, region: Option<&str>, message: &str) {
    if let Some(logger) = LOGGER.lock().unwrap().as_ref() {
        logger.log(LogLevel::Warning, &source, region, message);
    }
}

/// Log an error message
pub fn error(source: DataSource, region: Option<&str>, message: &str) {
    if let Some(logger) = LOGGER.lock().unwrap().as_ref() {
        logger.log(LogLevel::Error, &source, region, message);
    }
}

/// Log a debug message
pub fn debug(source: DataSource, region: Option<&str>, message: &str) {
    if let Some(logger) = LOGGER.lock().unwrap().as_ref() {
        logger.log(LogLevel::Debug, &source, region, message);
    }
}

// ---------------------------------------------------------------------------
// Failure Classification Helpers
// ---------------------------------------------------------------------------

/// Classify a weather-provider failure for a region fetch.
pub fn classify_fetch_failure(err: &WeatherError) -> FailureType {
    match err {
        // Throttling and transient gaps are the normal failure mode of a
        // free, keyless API; the caller degrades to fallback observations.
        WeatherError::RequestFailed(_) => FailureType::Expected,
        WeatherError::HttpError(429) => FailureType::Expected,
        WeatherError::HttpError(code) if *code >= 500 => FailureType::Unknown,
        // 4xx other than throttling means a malformed request on our side.
        WeatherError::HttpError(_) => FailureType::Unexpected,
        // Parse errors suggest the provider changed its response schema.
        WeatherError::ParseError(_) => FailureType::Unexpected,
        WeatherError::NoCurrentData(_) => FailureType::Unknown,
        WeatherError::InvalidObservation(_) => FailureType::Unexpected,
        WeatherError::EmptyRegionSet => FailureType::Unexpected,
    }
}

// ---------------------------------------------------------------------------
// Structured Failure Logging
// ---------------------------------------------------------------------------

/// Log a provider failure with automatic classification.
pub fn log_fetch_failure(region: &str, operation: &str, err: &WeatherError) {
    let failure_type = classify_fetch_failure(err);

    let message = format!("{} failed [{}]: {}", operation, failure_type, err);

    match failure_type {
        FailureType::Expected => debug(DataSource::OpenMeteo, Some(region), &message),
        FailureType::Unexpected => error(DataSource::OpenMeteo, Some(region), &message),
        FailureType::Unknown => warn(DataSource::OpenMeteo, Some(region), &message),
    }
}

// ---------------------------------------------------------------------------
// Refresh Summary Logging
// ---------------------------------------------------------------------------

/// Log a summary of one snapshot refresh over the catalog.
pub fn log_refresh_summary(total: usize, successful: usize) {
    let failed = total - successful;
    let message = format!(
        "Snapshot refresh complete: {}/{} live, {} on fallback data",
        successful, total, failed
    );

    if failed == 0 {
        info(DataSource::OpenMeteo, None, &message);
    } else if successful == 0 {
        error(DataSource::OpenMeteo, None, &message);
    } else {
        warn(DataSource::OpenMeteo, None, &message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_ordering() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Warning);
        assert!(LogLevel::Warning < LogLevel::Error);
    }

    #[test]
    fn test_failure_classification() {
        let throttled = WeatherError::HttpError(429);
        assert_eq!(classify_fetch_failure(&throttled), FailureType::Expected);

        let server_error = WeatherError::HttpError(503);
        assert_eq!(classify_fetch_failure(&server_error), FailureType::Unknown);

        let bad_request = WeatherError::HttpError(400);
        assert_eq!(classify_fetch_failure(&bad_request), FailureType::Unexpected);

        let schema_change = WeatherError::ParseError("missing field".to_string());
        assert_eq!(classify_fetch_failure(&schema_change), FailureType::Unexpected);

        let offline = WeatherError::RequestFailed("connection refused".to_string());
        assert_eq!(classify_fetch_failure(&offline), FailureType::Expected);
    }

    #[test]
    fn test_helpers_are_noops_without_initialization() {
        // Must not panic or poison the mutex when no logger is installed.
        info(DataSource::System, None, "no-op");
        warn(DataSource::OpenMeteo, Some("Vologda"), "no-op");
        log_refresh_summary(28, 28);
    }
}
