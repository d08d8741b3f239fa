/// `RESPONSE_BODY`가 없거나 비어 있을 때 사용하는 본문
pub const DEFAULT_RESPONSE_BODY: &str = "Hello World";

/// 응답에 그대로 쓰이는 본문
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseBody(String);

impl ResponseBody {
    /// 빈 문자열도 값이 없는 것으로 취급한다.
    pub fn parse(raw: Option<String>) -> Self {
        match raw {
            Some(s) if !s.is_empty() => Self(s),
            _ => Self::default(),
        }
    }
}

impl Default for ResponseBody {
    fn default() -> Self {
        Self(DEFAULT_RESPONSE_BODY.to_string())
    }
}

impl AsRef<str> for ResponseBody {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<ResponseBody> for String {
    fn from(body: ResponseBody) -> Self {
        body.0
    }
}
