use clap::Parser;
use small_notify::app::cli;
use small_notify::utils::logger;
use small_notify::{must, CliConfig};

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting small-notify CLI");
    tracing::debug!("CLI config: {:?}", config);

    // 建立通知客戶端
    let (email, sms) = must(cli::default_backends(&config));

    // 執行一次任務
    let result = cli::run(&config, Some(email), Some(sms)).await;

    let code = cli::exit_code(&result);
    if code != 0 {
        std::process::exit(code);
    }
}
