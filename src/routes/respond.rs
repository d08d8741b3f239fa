use std::sync::Arc;

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use http::{header, StatusCode};

use crate::settings::EnvironmentSource;

/// 모든 응답에 붙는 `Content-Type`
/// `text/plain`이 아니지만 기존 픽스처와 똑같이 응답하기 위해 그대로 둔다.
pub const RESPONSE_CONTENT_TYPE: &str = "plain/text";

// curl -v http://127.0.0.1:8080/anything => 200 OK, Hello World
// RESPONSE_CODE=404 RESPONSE_BODY=gone => 404 Not Found, gone
pub async fn respond(State(source): State<Arc<EnvironmentSource>>) -> Response {
    // 요청마다 다시 읽는다.
    let settings = source.load();
    let status: StatusCode = settings.code.into();
    let body: String = settings.body.into();

    (status, [(header::CONTENT_TYPE, RESPONSE_CONTENT_TYPE)], body).into_response()
}
