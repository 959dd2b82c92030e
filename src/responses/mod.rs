pub(crate) mod client;
pub(crate) mod request;
pub(crate) mod response;

pub use client::{build_request_payload, convert_to_completion};
pub use request::{InputMessage, InputMessageRole, Request};
pub use response::{MessageContent, OutputItem, OutputMessage, Response, Usage};
