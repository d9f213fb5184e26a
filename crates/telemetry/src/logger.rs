use thiserror::Error;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const VALID_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TelemetryError {
	#[error("Invalid log level: {0}")]
	InvalidLogLevel(String),

	#[error("Logger already initialized: {0}")]
	AlreadyInitialized(String),
}

/// Custom time formatter that displays time as "YYYY-MM-DD HH:MM:SS.micros"
struct CustomTimeFormat;

impl FormatTime for CustomTimeFormat {
	fn format_time(&self, w: &mut fmt::format::Writer<'_>) -> std::fmt::Result {
		let now = std::time::SystemTime::now();
		let datetime: chrono::DateTime<chrono::Local> = now.into();
		write!(w, "{}", datetime.format("[%Y-%m-%d %H:%M:%S%.6f]"))
	}
}

/// Normalize a log level string, rejecting anything outside
/// trace, debug, info, warn and error.
pub fn validate_level(level: &str) -> Result<String, TelemetryError> {
	let level_lower = level.to_lowercase();
	if VALID_LEVELS.contains(&level_lower.as_str()) {
		Ok(level_lower)
	} else {
		Err(TelemetryError::InvalidLogLevel(level.to_string()))
	}
}

/// Initialize the logger with the provided log level
///
/// This sets up a stderr logger with:
/// - The log level from the `level` parameter
/// - Timestamps in format: YYYY-MM-DD HH:MM:SS.micros
/// - Target/module information
///
/// Records emitted through the `log` facade by the `resp` crate are
/// forwarded into the same subscriber.
///
/// # Example
///
/// ```no_run
/// telemetry::logger::init("debug").unwrap();
/// log::info!("Decoding reply");
/// ```
///
/// # Errors
///
/// Returns an error if the level is invalid or a global subscriber is
/// already installed.
pub fn init(level: &str) -> Result<(), TelemetryError> {
	let level = validate_level(level)?;
	let env_filter = EnvFilter::new(&level);

	tracing_subscriber::registry()
		.with(env_filter)
		.with(
			fmt::layer()
				.with_writer(std::io::stderr)
				.with_timer(CustomTimeFormat)
				.with_target(true)
				.with_thread_ids(false)
				.with_line_number(false)
				.with_file(false),
		)
		.try_init()
		.map_err(|e| TelemetryError::AlreadyInitialized(e.to_string()))?;

	tracing::debug!(level = %level, "Logger initialized");
	Ok(())
}

#[cfg(test)]
mod tests {
	use rstest::rstest;

	use super::*;

	#[rstest]
	#[case("trace", "trace")]
	#[case("debug", "debug")]
	#[case("info", "info")]
	#[case("warn", "warn")]
	#[case("error", "error")]
	#[case("DEBUG", "debug")] // Test case insensitivity
	#[case("DeBuG", "debug")] // Mixed case
	fn test_valid_log_levels(#[case] level: &str, #[case] expected: &str) {
		assert_eq!(validate_level(level), Ok(expected.to_string()));
	}

	#[rstest]
	#[case("invalid")]
	#[case("")]
	#[case("warning")] // Common mistake (should be "warn")
	#[case("info,resp=trace")]
	fn test_invalid_log_levels(#[case] level: &str) {
		assert_eq!(
			validate_level(level),
			Err(TelemetryError::InvalidLogLevel(level.to_string()))
		);
	}

	#[test]
	fn test_init_rejects_invalid_level() {
		assert!(matches!(
			init("loud"),
			Err(TelemetryError::InvalidLogLevel(_))
		));
	}
}
