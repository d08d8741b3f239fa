use http::StatusCode;

/// `RESPONSE_CODE`가 없거나 유효하지 않을 때 사용하는 상태 코드
pub const DEFAULT_RESPONSE_CODE: StatusCode = StatusCode::OK;

#[derive(Debug, thiserror::Error)]
pub enum InvalidResponseCode {
    #[error("{0:?} does not start with an integer.")]
    NotANumber(String),

    #[error("{0:?} is not a status code the HTTP library accepts.")]
    OutOfRange(String),
}

/// 응답에 사용할 상태 코드
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResponseCode(StatusCode);

impl ResponseCode {
    /// 환경 변수의 원본 값으로부터 상태 코드를 얻는다.
    /// 값이 없거나 해석할 수 없으면 조용히 200을 사용한다.
    pub fn parse(raw: Option<&str>) -> Self {
        raw.and_then(|s| Self::try_from(s).ok()).unwrap_or_default()
    }

    pub fn status(&self) -> StatusCode {
        self.0
    }
}

impl Default for ResponseCode {
    fn default() -> Self {
        Self(DEFAULT_RESPONSE_CODE)
    }
}

// 앞쪽의 공백과 부호를 허용하고 숫자가 끝나는 곳까지만 읽는다.
// `"404abc"` => 404
impl TryFrom<&str> for ResponseCode {
    type Error = InvalidResponseCode;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let trimmed = s.trim_start();
        let (negative, unsigned) = match trimmed.as_bytes().first() {
            Some(b'-') => (true, &trimmed[1..]),
            Some(b'+') => (false, &trimmed[1..]),
            _ => (false, trimmed),
        };
        let digits_len = unsigned
            .bytes()
            .take_while(|b| b.is_ascii_digit())
            .count();
        if digits_len == 0 {
            return Err(InvalidResponseCode::NotANumber(s.to_string()));
        }
        // "-0"은 0이므로 어차피 범위를 벗어난다.
        if negative {
            return Err(InvalidResponseCode::OutOfRange(s.to_string()));
        }

        unsigned[..digits_len]
            .parse::<u16>()
            .ok()
            .and_then(|code| StatusCode::from_u16(code).ok())
            .map(Self)
            .ok_or_else(|| InvalidResponseCode::OutOfRange(s.to_string()))
    }
}

impl From<ResponseCode> for StatusCode {
    fn from(code: ResponseCode) -> Self {
        code.0
    }
}
