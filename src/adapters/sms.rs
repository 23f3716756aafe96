use crate::domain::ports::SmsSender;
use crate::utils::error::Result;
use async_trait::async_trait;

#[derive(Debug, Clone, Default)]
pub struct SmsOptions {
    pub from_number: String,
}

/// SMS backend. Like the email client it only logs.
#[derive(Debug, Clone)]
pub struct SmsClient {
    from_number: String,
}

impl SmsClient {
    pub fn new(opts: SmsOptions) -> Result<Self> {
        Ok(Self {
            from_number: opts.from_number,
        })
    }

    pub fn from_number(&self) -> &str {
        &self.from_number
    }
}

#[async_trait]
impl SmsSender for SmsClient {
    async fn send(&self, to: &str, body: &str) -> Result<()> {
        tracing::info!(
            "📱 Sending SMS: To number: {}, from number {}, Body content: {}",
            to,
            self.from_number,
            body
        );
        Ok(())
    }
}
