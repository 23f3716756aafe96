use crate::utils::error::{Result, ServiceError};
use std::time::Duration;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ServiceError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_non_zero_duration(field_name: &str, value: Duration) -> Result<()> {
    if value.is_zero() {
        return Err(ServiceError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: format!("{:?}", value),
            reason: "Duration must be greater than zero".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("address", "127.0.0.1:8000").is_ok());
        assert!(validate_non_empty_string("address", "").is_err());
        assert!(validate_non_empty_string("address", "   ").is_err());
    }

    #[test]
    fn test_validate_non_zero_duration() {
        assert!(validate_non_zero_duration("shutdown_grace", Duration::from_secs(3)).is_ok());
        assert!(validate_non_zero_duration("shutdown_grace", Duration::ZERO).is_err());
    }
}
