#![allow(dead_code)]

use async_trait::async_trait;
use rusers_application::ports::{HostnameResolver, SessionReader, SessionReply};
use rusers_domain::QueryError;
use std::collections::HashMap;
use std::net::IpAddr;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Clone)]
pub struct MockSessionReader {
    replies: Arc<RwLock<HashMap<String, Result<SessionReply, QueryError>>>>,
}

impl MockSessionReader {
    pub fn new() -> Self {
        Self {
            replies: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub async fn set_reply(&self, host: &str, reply: SessionReply) {
        self.replies
            .write()
            .await
            .insert(host.to_string(), Ok(reply));
    }

    pub async fn set_error(&self, host: &str, error: QueryError) {
        self.replies
            .write()
            .await
            .insert(host.to_string(), Err(error));
    }
}

impl Default for MockSessionReader {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionReader for MockSessionReader {
    async fn read_sessions(&self, host: &str) -> Result<SessionReply, QueryError> {
        match self.replies.read().await.get(host) {
            Some(outcome) => outcome.clone(),
            None => Err(QueryError::Transport {
                host: host.to_string(),
                detail: "no reply configured".to_string(),
            }),
        }
    }
}

#[derive(Clone)]
pub struct MockHostnameResolver {
    names: Arc<RwLock<HashMap<IpAddr, String>>>,
    should_fail: Arc<RwLock<bool>>,
}

impl MockHostnameResolver {
    pub fn new() -> Self {
        Self {
            names: Arc::new(RwLock::new(HashMap::new())),
            should_fail: Arc::new(RwLock::new(false)),
        }
    }

    pub async fn set_name(&self, ip: IpAddr, name: &str) {
        self.names.write().await.insert(ip, name.to_string());
    }

    pub async fn set_should_fail(&self, should_fail: bool) {
        *self.should_fail.write().await = should_fail;
    }
}

impl Default for MockHostnameResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HostnameResolver for MockHostnameResolver {
    async fn resolve_hostname(&self, ip: IpAddr) -> Result<Option<String>, QueryError> {
        if *self.should_fail.read().await {
            return Err(QueryError::Transport {
                host: ip.to_string(),
                detail: "reverse lookup refused".to_string(),
            });
        }
        Ok(self.names.read().await.get(&ip).cloned())
    }
}
