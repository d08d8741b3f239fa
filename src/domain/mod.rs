mod response_body;
mod response_code;

pub use response_body::{ResponseBody, DEFAULT_RESPONSE_BODY};
pub use response_code::{InvalidResponseCode, ResponseCode, DEFAULT_RESPONSE_CODE};
