use crate::domain::model::NotifyRequest;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Something that can send an email. The sender identity is fixed at construction.
#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<()>;
}

/// Something that can send a text message to a phone number.
#[async_trait]
pub trait SmsSender: Send + Sync {
    async fn send(&self, to: &str, body: &str) -> Result<()>;
}

/// The business operation the front-ends drive.
#[async_trait]
pub trait CoreService: Send + Sync {
    async fn execute(&self, request: &NotifyRequest) -> Result<()>;
}
