use rusers_domain::QueryError;
use std::net::IpAddr;
use std::time::Duration;

/// Resolve `host` to the address its daemons will be queried at.
///
/// The first resolved address wins, the same ordering the platform resolver
/// hands every other client.
pub async fn first_addr(host: &str, timeout: Duration) -> Result<IpAddr, QueryError> {
    let target = format!("{}:0", host);

    let mut addrs = tokio::time::timeout(timeout, tokio::net::lookup_host(&target))
        .await
        .map_err(|_| QueryError::HostResolution {
            host: host.to_string(),
            detail: "lookup timed out".to_string(),
        })?
        .map_err(|e| QueryError::HostResolution {
            host: host.to_string(),
            detail: e.to_string(),
        })?;

    match addrs.next() {
        Some(addr) => Ok(addr.ip()),
        None => Err(QueryError::HostResolution {
            host: host.to_string(),
            detail: "no addresses found".to_string(),
        }),
    }
}
