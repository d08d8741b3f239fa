use text_responder::{
    error::ResponderError,
    settings::{ApplicationSettings, EnvironmentSource},
    telemetry::{get_tracing_subscriber, init_tracing_subscriber},
};
use tracing::level_filters::LevelFilter;

#[tokio::main]
async fn main() -> Result<(), ResponderError> {
    // stdout에는 시작 안내 한 줄만 쓴다.
    let tracing_subscriber = get_tracing_subscriber(LevelFilter::INFO, std::io::stderr);
    init_tracing_subscriber(tracing_subscriber);

    let settings = ApplicationSettings::default();
    // 바인딩에 실패하면 오류와 함께 종료한다.
    let server = settings.build_server(EnvironmentSource::Process).await?;

    println!("Running on {}", settings.get_base_url());
    tracing::info!(address = %server.local_addr()?, "Starting Server");
    server.run().await?;

    Ok(())
}
