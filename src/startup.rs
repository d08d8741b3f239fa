use std::{net::SocketAddr, sync::Arc};

use axum::{body::Body, Router};
use http::Request;
use tokio::net::TcpListener;
use tower_http::trace::{MakeSpan, TraceLayer};
use tracing::{Level, Span};

use crate::{
    routes::respond,
    settings::{ApplicationSettings, EnvironmentSource},
};

pub struct Server {
    tcp_listener: TcpListener,
    source: EnvironmentSource,
}

impl Server {
    /// 설정된 주소에 바인딩한다.
    /// 포트가 사용 중이면 여기에서 실패한다.
    pub async fn build(
        settings: &ApplicationSettings,
        source: EnvironmentSource,
    ) -> Result<Self, std::io::Error> {
        let tcp_listener = settings.get_listener().await?;
        Ok(Self::new(tcp_listener, source))
    }

    // 이미 바인딩된 `TcpListener`를 사용한다.
    // 테스트는 `127.0.0.1:0`에 바인딩해서 전달한다.
    pub fn new(tcp_listener: TcpListener, source: EnvironmentSource) -> Self {
        Self {
            tcp_listener,
            source,
        }
    }

    pub fn local_addr(&self) -> Result<SocketAddr, std::io::Error> {
        self.tcp_listener.local_addr()
    }

    /// 프로세스가 끝날 때까지 요청을 처리한다.
    pub async fn run(self) -> Result<(), std::io::Error> {
        let app = Router::new()
            // 경로와 메서드를 가리지 않고 모든 요청을 같은 핸들러로 보낸다.
            .fallback(respond)
            .layer(TraceLayer::new_for_http().make_span_with(AddRequestID))
            .with_state(Arc::new(self.source));
        axum::serve(self.tcp_listener, app).await
    }
}

// https://docs.rs/tower-http/0.5.2/src/tower_http/trace/make_span.rs.html#65-68의 코드를 참조했음
#[derive(Clone)]
struct AddRequestID;

impl MakeSpan<Body> for AddRequestID {
    fn make_span(&mut self, request: &Request<Body>) -> Span {
        tracing::span!(
            Level::INFO,
            "request",
            request_id = %uuid::Uuid::new_v4(),
            method = %request.method(),
            uri = %request.uri(),
            version = ?request.version(),
            headers = ?request.headers()
        )
    }
}
