use crate::adapters::{EmailClient, SmsClient};
use crate::config::CliConfig;
use crate::core::client::{CoreClient, CoreOptions};
use crate::domain::ports::{EmailSender, SmsSender};
use crate::utils::error::Result;
use std::sync::Arc;

/// Logging backends configured from the CLI sender flags.
pub fn default_backends(config: &CliConfig) -> Result<(Arc<dyn EmailSender>, Arc<dyn SmsSender>)> {
    let email: Arc<dyn EmailSender> = Arc::new(EmailClient::new(config.email_options())?);
    let sms: Arc<dyn SmsSender> = Arc::new(SmsClient::new(config.sms_options())?);
    Ok((email, sms))
}

/// Builds the core over the given backends and runs one notification.
pub async fn run(
    config: &CliConfig,
    email: Option<Arc<dyn EmailSender>>,
    sms: Option<Arc<dyn SmsSender>>,
) -> Result<()> {
    let core = CoreClient::new(CoreOptions {
        passed_value: None,
        email,
        sms,
    })?;

    core.execute(&config.to_request()).await?;

    tracing::info!("✅ Notification sent");
    Ok(())
}

/// Process exit status for a finished run.
pub fn exit_code(result: &Result<()>) -> i32 {
    match result {
        Ok(()) => 0,
        Err(e) => {
            tracing::error!("❌ Notification failed: {} (Category: {:?})", e, e.category());
            1
        }
    }
}
