use crate::adapters::{EmailOptions, SmsOptions};
use crate::domain::model::NotifyRequest;
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "small-notify")]
#[command(about = "Send an email and, optionally, an SMS")]
pub struct CliConfig {
    /// To email address (example@example.com)
    #[arg(short = 't', long, default_value = "")]
    pub to: String,

    /// From email address (example@example.com)
    #[arg(short = 'f', long, default_value = "noreply@company.com")]
    pub from: String,

    /// Message subject
    #[arg(short = 's', long, default_value = "Default title")]
    pub subject: String,

    /// Message content
    #[arg(short = 'b', long, default_value = "Default content")]
    pub body: String,

    /// Mobile number for SMS (0123456789)
    #[arg(short = 'n', long, default_value = "")]
    pub number: String,

    /// Mobile number to send SMS from (0123456789)
    #[arg(short = 'a', long = "fromnumber", default_value = "")]
    pub from_number: String,

    #[arg(short = 'v', long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn to_request(&self) -> NotifyRequest {
        NotifyRequest {
            to: self.to.clone(),
            from: self.from.clone(),
            number: self.number.clone(),
            subject: self.subject.clone(),
            body: self.body.clone(),
        }
    }

    pub fn email_options(&self) -> EmailOptions {
        EmailOptions {
            from_address: self.from.clone(),
        }
    }

    pub fn sms_options(&self) -> SmsOptions {
        SmsOptions {
            from_number: self.from_number.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CliConfig::try_parse_from(["small-notify"]).unwrap();
        assert_eq!(config.to, "");
        assert_eq!(config.from, "noreply@company.com");
        assert_eq!(config.subject, "Default title");
        assert_eq!(config.body, "Default content");
        assert_eq!(config.number, "");
        assert_eq!(config.from_number, "");
        assert!(!config.verbose);
        assert!(!config.to_request().is_number_set());
    }

    #[test]
    fn test_short_flags_map_onto_request() {
        let config = CliConfig::try_parse_from([
            "small-notify",
            "-t",
            "user@example.com",
            "-f",
            "ops@company.com",
            "-s",
            "Hi",
            "-b",
            "Hello there",
            "-n",
            "0123456789",
            "-a",
            "0987654321",
        ])
        .unwrap();

        let request = config.to_request();
        assert_eq!(request.to, "user@example.com");
        assert_eq!(request.from, "ops@company.com");
        assert_eq!(request.subject, "Hi");
        assert_eq!(request.body, "Hello there");
        assert_eq!(request.number, "0123456789");
        assert_eq!(config.email_options().from_address, "ops@company.com");
        assert_eq!(config.sms_options().from_number, "0987654321");
    }

    #[test]
    fn test_long_fromnumber_flag() {
        let config =
            CliConfig::try_parse_from(["small-notify", "--fromnumber", "0987654321"]).unwrap();
        assert_eq!(config.from_number, "0987654321");
    }
}
