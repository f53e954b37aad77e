pub mod client;
pub mod message_builder;
pub mod portmap;
pub mod reply_parser;
pub mod resolve;
pub mod xdr;

pub use client::RpcClient;
pub use message_builder::MessageBuilder;
pub use portmap::Portmap;
pub use reply_parser::{ReplyDisposition, ReplyParser};
pub use xdr::{XdrError, XdrReader, XdrWriter};

use thiserror::Error;

/// Failure modes of a single RPC exchange.
#[derive(Debug, Error)]
pub enum RpcError {
    #[error("call timed out")]
    TimedOut,
    #[error("i/o failure: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed reply: {0}")]
    Decode(#[from] XdrError),
    #[error("{0}")]
    Rejected(String),
}
