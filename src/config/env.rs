use crate::adapters::http::DEFAULT_ADDRESS;
use crate::adapters::{EmailOptions, ServerConfig, SmsOptions};
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, Validate};
use std::env;

pub const FROM_EMAIL_ADDRESS: &str = "FROM_EMAIL_ADDRESS";
pub const FROM_SMS_NUMBER: &str = "FROM_SMS_NUMBER";
pub const NOTIFY_HTTP_ADDR: &str = "NOTIFY_HTTP_ADDR";
pub const NOTIFY_LOG_FORMAT: &str = "NOTIFY_LOG_FORMAT";

/// Start-up configuration for the HTTP service, read from the environment.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub from_email_address: String,
    pub from_sms_number: String,
    pub http_address: String,
    pub json_logs: bool,
}

impl ServiceConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = Self {
            from_email_address: lookup(FROM_EMAIL_ADDRESS).unwrap_or_default(),
            from_sms_number: lookup(FROM_SMS_NUMBER).unwrap_or_default(),
            http_address: lookup(NOTIFY_HTTP_ADDR).unwrap_or_else(|| DEFAULT_ADDRESS.to_string()),
            json_logs: lookup(NOTIFY_LOG_FORMAT)
                .map(|f| f.eq_ignore_ascii_case("json"))
                .unwrap_or(false),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn email_options(&self) -> EmailOptions {
        EmailOptions {
            from_address: self.from_email_address.clone(),
        }
    }

    pub fn sms_options(&self) -> SmsOptions {
        SmsOptions {
            from_number: self.from_sms_number.clone(),
        }
    }

    pub fn server_config(&self) -> ServerConfig {
        ServerConfig {
            address: self.http_address.clone(),
            ..ServerConfig::default()
        }
    }
}

impl Validate for ServiceConfig {
    fn validate(&self) -> Result<()> {
        // sender identities may legitimately be empty
        validate_non_empty_string(NOTIFY_HTTP_ADDR, &self.http_address)
    }
}
