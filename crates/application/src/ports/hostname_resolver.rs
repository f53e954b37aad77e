use async_trait::async_trait;
use rusers_domain::QueryError;
use std::net::IpAddr;

#[async_trait]
pub trait HostnameResolver: Send + Sync {
    /// Reverse-resolve `ip` to a hostname. `Ok(None)` means no PTR-style
    /// mapping exists; callers fall back to the dotted address.
    async fn resolve_hostname(&self, ip: IpAddr) -> Result<Option<String>, QueryError>;
}
