mod errors;

use std::time::Duration;

use tracing::level_filters::LevelFilter;

pub use errors::ConfigError;

pub const DEFAULT_ENDPOINT: &str = "http://localhost:5000/predict";

pub const USAGE: &str = "Usage: fraud-prediction-client [--endpoint URL] [--log-level LEVEL] [--timeout SECONDS]";

/// Runtime settings for the client.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Prediction endpoint that receives the form as JSON.
    pub endpoint: String,
    pub log_level: LevelFilter,
    /// Per-request timeout. `None` waits on the endpoint indefinitely.
    pub request_timeout: Option<Duration>
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            log_level: LevelFilter::ERROR,
            request_timeout: None
        }
    }
}

impl Config {
    /// Builds the configuration from command line arguments, excluding the program name.
    pub fn from_args(args: &[String]) -> Result<Self, ConfigError> {
        //NOTE: A handful of flags does not justify pulling in clap; revisit if the surface grows.
        let mut config = Config::default();
        let mut args = args.iter();

        while let Some(flag) = args.next() {
            match flag.as_str() {
                "--endpoint" => {
                    config.endpoint = next_value(flag, args.next())?.to_string();
                }
                "--log-level" => {
                    config.log_level = parse_log_level(next_value(flag, args.next())?)?;
                }
                "--timeout" => {
                    config.request_timeout = Some(parse_timeout(next_value(flag, args.next())?)?);
                }
                _ => return Err(ConfigError::unknown_argument(flag))
            }
        }

        Ok(config)
    }
}

fn next_value<'a>(flag: &str, value: Option<&'a String>) -> Result<&'a str, ConfigError> {
    value.map(String::as_str).ok_or_else(|| ConfigError::missing_value(flag))
}

fn parse_log_level(level: &str) -> Result<LevelFilter, ConfigError> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(LevelFilter::TRACE),
        "debug" => Ok(LevelFilter::DEBUG),
        "info" => Ok(LevelFilter::INFO),
        "warn" => Ok(LevelFilter::WARN),
        "error" => Ok(LevelFilter::ERROR),
        _ => Err(ConfigError::InvalidLogLevel { level: level.to_string() })
    }
}

fn parse_timeout(seconds: &str) -> Result<Duration, ConfigError> {
    let invalid = || ConfigError::InvalidTimeout { value: seconds.to_string() };
    let parsed: f64 = seconds.trim().parse().map_err(|_| invalid())?;

    if !parsed.is_finite() || parsed <= 0.0 {
        return Err(invalid());
    }

    Duration::try_from_secs_f64(parsed).map_err(|_| invalid())
}
