use async_trait::async_trait;
use rusers_domain::{QueryError, SessionEntry};
use std::net::IpAddr;

/// Raw result of one rusers exchange: the decoded session entries plus the
/// address the daemon answered from.
#[derive(Debug, Clone)]
pub struct SessionReply {
    pub entries: Vec<SessionEntry>,
    pub responder: IpAddr,
}

impl SessionReply {
    pub fn empty(responder: IpAddr) -> Self {
        Self {
            entries: Vec::new(),
            responder,
        }
    }
}

#[async_trait]
pub trait SessionReader: Send + Sync {
    /// Query the rusers daemon on `host` for its current sessions.
    async fn read_sessions(&self, host: &str) -> Result<SessionReply, QueryError>;
}
