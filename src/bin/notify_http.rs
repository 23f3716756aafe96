use anyhow::{Context, Result};
use small_notify::utils::logger;
use small_notify::{
    must, CoreClient, CoreOptions, EmailClient, HttpService, HttpServiceOptions, ServiceConfig,
    SmsClient,
};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    // 載入環境變數配置
    let config = ServiceConfig::from_env().context("invalid service configuration")?;

    // 初始化日誌
    logger::init_service_logger(config.json_logs);

    tracing::info!("🚀 Starting notify-http v{}", env!("CARGO_PKG_VERSION"));

    // 依賴注入: email / sms -> core -> http
    let core = must(CoreClient::new(CoreOptions {
        passed_value: None,
        email: Some(Arc::new(must(EmailClient::new(config.email_options())))),
        sms: Some(Arc::new(must(SmsClient::new(config.sms_options())))),
    }));

    let service = must(HttpService::new(HttpServiceOptions {
        core: Some(Arc::new(core)),
        server: Some(config.server_config()),
    }));

    service.run().await.context("HTTP service stopped with an error")?;

    Ok(())
}
