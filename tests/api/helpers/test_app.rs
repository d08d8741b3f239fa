use std::sync::Once;

use text_responder::{
    settings::EnvironmentSource,
    startup::Server,
    telemetry::{get_tracing_subscriber, init_tracing_subscriber},
};
use tokio::net::TcpListener;
use tracing::{level_filters::LevelFilter, Subscriber};
use url::Url;

pub struct TestApp {
    pub port: u16,
    pub api_client: reqwest::Client,
}

impl TestApp {
    /// 주어진 환경 변수로 애플리케이션 인스턴스를 새로 실행한다.
    // 백그라운드에서 애플리케이션을 구동한다.
    // 프로세스 환경 대신 고정된 변수 목록을 사용해서 테스트 격리를 보장한다.
    pub async fn spawn_app(vars: &[(&str, &str)]) -> Result<Self, anyhow::Error> {
        Self::set_tracing();

        // OS가 무작위 포트를 할당한다.
        let tcp_listener = TcpListener::bind("127.0.0.1:0").await?;
        let server = Server::new(tcp_listener, EnvironmentSource::fixed(vars.iter().copied()));
        let port = server.local_addr()?.port();

        // 서버를 백그라운드로 구동한다.
        let _ = tokio::spawn(server.run());

        Ok(TestApp {
            port,
            api_client: reqwest::Client::new(),
        })
    }

    // 테스트 로그 설정을 한다.
    fn set_tracing() {
        // 한번만 실행된다.
        static ONCE: Once = Once::new();
        ONCE.call_once(|| {
            // 트레이트 객체를 사용해서 타입 문제를 해결했다.
            let tracing_subscriber: Box<dyn Subscriber + Send + Sync> = std::env::var("TEST_LOG")
                .map_or(
                    Box::new(get_tracing_subscriber(LevelFilter::ERROR, std::io::sink)),
                    |_| Box::new(get_tracing_subscriber(LevelFilter::TRACE, std::io::stdout)),
                );
            init_tracing_subscriber(tracing_subscriber);
        });
    }

    pub fn uri(&self) -> Result<Url, url::ParseError> {
        Url::parse(&format!("http://127.0.0.1:{}/", self.port))
    }

    pub async fn get(&self, path: &str) -> Result<reqwest::Response, anyhow::Error> {
        let response = self
            .api_client
            .get(self.uri()?.join(path)?)
            .send()
            .await?;
        Ok(response)
    }
}
