/// Errors produced while reading a [`CarouselConfig`](crate::CarouselConfig).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidNumber { key: &'static str, value: String },
    UnknownVariant { key: &'static str, value: String },
    OutOfRange { key: &'static str, reason: &'static str },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidNumber { key, value } => {
                write!(f, "{key}: '{value}' is not a number")
            }
            ConfigError::UnknownVariant { key, value } => {
                write!(f, "{key}: unknown value '{value}'")
            }
            ConfigError::OutOfRange { key, reason } => write!(f, "{key}: {reason}"),
        }
    }
}

impl std::error::Error for ConfigError {}
