// Adapters layer: concrete backends and front-ends around the core.

pub mod email;
pub mod http;
pub mod sms;

pub use email::{EmailClient, EmailOptions};
pub use http::{HttpService, HttpServiceOptions, RunningServer, ServerConfig};
pub use sms::{SmsClient, SmsOptions};
