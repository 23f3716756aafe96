use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("{name} missing")]
    MissingDependency { name: String },

    #[error("{channel} delivery failed: {message}")]
    Delivery { channel: String, message: String },

    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid configuration value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Server error: {message}")]
    Server { message: String },

    #[error("Graceful shutdown did not finish within {grace:?}")]
    ShutdownTimeout { grace: Duration },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Construction,
    Delivery,
    Decode,
    Configuration,
    Server,
}

impl ServiceError {
    pub fn missing(name: impl Into<String>) -> Self {
        Self::MissingDependency { name: name.into() }
    }

    pub fn delivery(channel: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Delivery {
            channel: channel.into(),
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingDependency { .. } => ErrorCategory::Construction,
            Self::Delivery { .. } => ErrorCategory::Delivery,
            Self::Decode(_) => ErrorCategory::Decode,
            Self::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            Self::Server { .. } | Self::ShutdownTimeout { .. } => ErrorCategory::Server,
        }
    }
}

pub type Result<T> = std::result::Result<T, ServiceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_dependency_message() {
        let err = ServiceError::missing("core");
        assert_eq!(err.to_string(), "core missing");
        assert_eq!(err.category(), ErrorCategory::Construction);
    }

    #[test]
    fn test_delivery_category() {
        let err = ServiceError::delivery("sms", "gateway unreachable");
        assert_eq!(err.category(), ErrorCategory::Delivery);
        assert!(err.to_string().contains("gateway unreachable"));
    }

    #[test]
    fn test_decode_from_serde() {
        let serde_err = serde_json::from_str::<serde_json::Value>("}").unwrap_err();
        let err: ServiceError = serde_err.into();
        assert_eq!(err.category(), ErrorCategory::Decode);
    }
}
