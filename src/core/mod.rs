pub mod client;
pub mod shutdown;

pub use crate::domain::model::NotifyRequest;
pub use crate::domain::ports::{CoreService, EmailSender, SmsSender};
pub use crate::utils::error::Result;
