mod respond;

pub use respond::{respond, RESPONSE_CONTENT_TYPE};
