use anyhow::{anyhow, Context};
use aws_config::BehaviorVersion;
use aws_sdk_sns::config::Region;
use sns_publisher::adapters::SnsTopicClient;
use sns_publisher::config::Configuration;
use sns_publisher::core::TopicService;
use sns_publisher::driver::{report, run_session, SessionDeps};
use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    let config = Configuration::load().context("Failed to load configuration")?;
    sns_publisher::observability::init_tracing(&config.log_level);

    let mut loader = aws_config::defaults(BehaviorVersion::latest());
    if let Some(region) = config.region {
        loader = loader.region(Region::new(region));
    }
    let aws_config = loader.load().await;
    let region = aws_config
        .region()
        .map(|region| region.to_string())
        .ok_or_else(|| anyhow!("No AWS region configured, set AWS_REGION or APP_REGION"))?;
    tracing::info!(%region, "AWS configuration loaded");

    let deps = SessionDeps {
        topics: TopicService::new(SnsTopicClient::new(aws_sdk_sns::Client::new(&aws_config))),
        region,
    };

    let stdin = std::io::stdin();
    let result = run_session(&deps, &mut stdin.lock(), &mut std::io::stdout()).await;

    Ok(ExitCode::from(report(
        &result,
        &mut std::io::stdout(),
        &mut std::io::stderr(),
    )))
}
