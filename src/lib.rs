pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::ServiceConfig;

pub use adapters::{EmailClient, EmailOptions, HttpService, HttpServiceOptions, SmsClient, SmsOptions};
pub use crate::core::client::{CoreClient, CoreOptions};
pub use domain::model::NotifyRequest;
pub use domain::ports::{CoreService, EmailSender, SmsSender};
pub use utils::error::{Result, ServiceError};
pub use utils::must::must;
