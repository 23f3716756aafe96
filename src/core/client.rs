use crate::domain::model::NotifyRequest;
use crate::domain::ports::{CoreService, EmailSender, SmsSender};
use crate::utils::error::{Result, ServiceError};
use async_trait::async_trait;
use std::sync::Arc;

pub const DEFAULT_PASSED_VALUE: &str = "Example value";

#[derive(Clone, Default)]
pub struct CoreOptions {
    pub passed_value: Option<String>,
    pub email: Option<Arc<dyn EmailSender>>,
    pub sms: Option<Arc<dyn SmsSender>>,
}

/// Central business client. Built once through [`CoreClient::new`] and read-only afterwards,
/// so one instance can serve concurrent callers.
pub struct CoreClient {
    passed_value: String,
    email: Arc<dyn EmailSender>,
    sms: Arc<dyn SmsSender>,
}

impl CoreClient {
    pub fn new(opts: CoreOptions) -> Result<Self> {
        let email = opts.email.ok_or_else(|| ServiceError::missing("email"))?;
        let sms = opts.sms.ok_or_else(|| ServiceError::missing("sms"))?;

        let passed_value = opts
            .passed_value
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_PASSED_VALUE.to_string());

        Ok(Self {
            passed_value,
            email,
            sms,
        })
    }

    pub fn passed_value(&self) -> &str {
        &self.passed_value
    }

    /// Sends the email, then the SMS when a number is present.
    ///
    /// Stops at the first failure. Nothing already sent is rolled back.
    pub async fn execute(&self, request: &NotifyRequest) -> Result<()> {
        self.email
            .send(&request.to, &request.subject, &request.body)
            .await?;

        if request.is_number_set() {
            self.sms.send(&request.number, &request.body).await?;
        } else {
            tracing::debug!("No number set, skipping SMS");
        }

        Ok(())
    }
}

#[async_trait]
impl CoreService for CoreClient {
    async fn execute(&self, request: &NotifyRequest) -> Result<()> {
        CoreClient::execute(self, request).await
    }
}
