use thiserror::Error;

#[derive(Debug, Error, Eq, PartialEq)]
pub enum ConfigError {
    #[error("Unknown argument [{argument}]")]
    UnknownArgument {
        argument: String
    },
    #[error("Argument [{flag}] requires a value")]
    MissingValue {
        flag: String
    },
    #[error("Invalid log level [{level}], expected one of: error, warn, info, debug, trace")]
    InvalidLogLevel {
        level: String
    },
    #[error("Invalid timeout [{value}], expected a positive number of seconds")]
    InvalidTimeout {
        value: String
    }
}

impl ConfigError {
    pub fn unknown_argument(argument: &str) -> Self {
        Self::UnknownArgument { argument: argument.to_string() }
    }

    pub fn missing_value(flag: &str) -> Self {
        Self::MissingValue { flag: flag.to_string() }
    }
}
