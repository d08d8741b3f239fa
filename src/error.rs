use crate::utils::error_chain_fmt;

// 오류 관리를 편하게 하기 위한 래퍼 타입
// 지역적으로 사용하는 에러는 사용하는 곳에 정의한다.
#[derive(thiserror::Error)]
pub enum ResponderError {
    #[error("IO Error")]
    IOError(#[from] std::io::Error),
}

impl std::fmt::Debug for ResponderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}
