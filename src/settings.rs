use std::net::{IpAddr, Ipv4Addr};

use tokio::net::TcpListener;

use crate::{
    domain::{ResponseBody, ResponseCode},
    startup::Server,
};

/// 응답 설정을 담는 환경 변수의 접두사
/// `RESPONSE_CODE` => `code`, `RESPONSE_BODY` => `body`
pub const ENVIRONMENT_PREFIX: &str = "RESPONSE";

/// 읽는 환경 변수의 이름
/// 대소문자를 구분한다. `response_code`는 무시된다.
pub const RESPONSE_VARIABLES: [&str; 2] = ["RESPONSE_CODE", "RESPONSE_BODY"];

/// 바인딩할 주소
/// 테스트 픽스처이므로 구성할 수 없다.
pub struct ApplicationSettings {
    pub host: IpAddr,
    pub port: u16,
}

impl Default for ApplicationSettings {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 8080,
        }
    }
}

impl ApplicationSettings {
    pub fn get_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn get_base_url(&self) -> String {
        format!("http://{}", self.get_address())
    }

    pub async fn get_listener(&self) -> Result<TcpListener, std::io::Error> {
        TcpListener::bind((self.host, self.port)).await
    }

    pub async fn build_server(&self, source: EnvironmentSource) -> Result<Server, std::io::Error> {
        Server::build(self, source).await
    }
}

/// `RESPONSE_*` 값을 어디에서 읽을지 정한다.
#[derive(Debug, Clone, Default)]
pub enum EnvironmentSource {
    /// 프로세스 환경 변수
    #[default]
    Process,
    /// 주어진 변수 목록
    /// 테스트끼리 프로세스 환경을 공유하지 않도록 사용한다.
    Fixed(config::Map<String, String>),
}

// 환경 변수를 그대로 읽는다.
// 검증은 `ResponseSettings`로 바꿀 때 한다.
#[derive(serde::Deserialize, Default)]
struct RawResponseSettings {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    body: Option<String>,
}

/// 한 요청에 사용할 응답 설정
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponseSettings {
    pub code: ResponseCode,
    pub body: ResponseBody,
}

impl From<RawResponseSettings> for ResponseSettings {
    fn from(raw: RawResponseSettings) -> Self {
        Self {
            code: ResponseCode::parse(raw.code.as_deref()),
            body: ResponseBody::parse(raw.body),
        }
    }
}

impl EnvironmentSource {
    /// 변수 이름과 값의 목록으로 `Fixed`를 만든다.
    pub fn fixed<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self::Fixed(
            vars.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// 응답 설정을 새로 읽는다.
    /// 캐시하지 않으므로 요청마다 호출하면 환경 변수의 변경이 바로 반영된다.
    pub fn load(&self) -> ResponseSettings {
        match self.try_load() {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read the response settings.");
                ResponseSettings::default()
            }
        }
    }

    // `RESPONSE_VARIABLES`에 있는 이름만 정확히 고른다.
    // `config`는 이름을 소문자로 바꿔서 비교하므로 그대로 넘기면 안 된다.
    fn variables(&self) -> config::Map<String, String> {
        match self {
            // `std::env::vars()`는 UTF-8이 아닌 변수가 하나라도 있으면 패닉에 빠진다.
            EnvironmentSource::Process => RESPONSE_VARIABLES
                .iter()
                .filter_map(|name| {
                    std::env::var_os(name)
                        .map(|value| (name.to_string(), value.to_string_lossy().into_owned()))
                })
                .collect(),
            EnvironmentSource::Fixed(vars) => vars
                .iter()
                .filter(|(name, _)| RESPONSE_VARIABLES.contains(&name.as_str()))
                .map(|(name, value)| (name.clone(), value.clone()))
                .collect(),
        }
    }

    fn try_load(&self) -> Result<ResponseSettings, config::ConfigError> {
        let environment = config::Environment::with_prefix(ENVIRONMENT_PREFIX)
            .source(Some(self.variables()));

        let raw = config::Config::builder()
            .add_source(environment)
            .build()?
            .try_deserialize::<RawResponseSettings>()?;

        Ok(raw.into())
    }
}
