pub mod client;
pub mod protocol;

pub use client::{fetch_sessions, RusersClient};
pub use protocol::{DecodeError, ReplyDecoder};
