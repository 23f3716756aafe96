use crate::domain::ports::EmailSender;
use crate::utils::error::Result;
use async_trait::async_trait;

#[derive(Debug, Clone, Default)]
pub struct EmailOptions {
    pub from_address: String,
}

/// Email backend. Delivery is logged rather than sent.
#[derive(Debug, Clone)]
pub struct EmailClient {
    from_address: String,
}

impl EmailClient {
    pub fn new(opts: EmailOptions) -> Result<Self> {
        Ok(Self {
            from_address: opts.from_address,
        })
    }

    pub fn from_address(&self) -> &str {
        &self.from_address
    }
}

#[async_trait]
impl EmailSender for EmailClient {
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<()> {
        tracing::info!(
            "📧 Sending email: To {}, From: {}, Subject: {}, Body: {}",
            to,
            self.from_address,
            subject,
            body
        );
        Ok(())
    }
}
