use super::protocol::{ReplyDecoder, RUSERSPROC_NAMES, RUSERS_PROGRAM, RUSERS_VERSION_IDLE};
use crate::rpc::portmap::{Portmap, PMAP_PORT};
use crate::rpc::{resolve, RpcClient, RpcError};
use async_trait::async_trait;
use rusers_application::ports::{SessionReader, SessionReply};
use rusers_domain::config::QueryConfig;
use rusers_domain::QueryError;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;
use tracing::{debug, warn};

/// The rusers protocol adapter. Resolves the host, locates the daemon
/// through the portmapper and runs the names procedure.
///
/// Failures before the call goes out are reported as errors. Once the call
/// is in flight only a timeout is an error, anything else the daemon or the
/// network does wrong degrades to an empty reply so a sweep over many hosts
/// keeps moving.
pub struct RusersClient {
    resolve_timeout: Duration,
    portmap_timeout: Duration,
    call_timeout: Duration,
}

impl RusersClient {
    pub fn new(config: &QueryConfig) -> Self {
        Self {
            resolve_timeout: Duration::from_millis(config.resolve_timeout_ms),
            portmap_timeout: Duration::from_millis(config.portmap_timeout_ms),
            call_timeout: Duration::from_millis(config.call_timeout_ms),
        }
    }

    async fn establish(&self, host: &str) -> Result<(IpAddr, RpcClient), QueryError> {
        let addr = resolve::first_addr(host, self.resolve_timeout).await?;

        let port = Portmap::udp_port(
            SocketAddr::new(addr, PMAP_PORT),
            RUSERS_PROGRAM,
            RUSERS_VERSION_IDLE,
            self.portmap_timeout,
        )
        .await
        .map_err(|e| QueryError::Transport {
            host: host.to_string(),
            detail: e.to_string(),
        })?;

        let client = RpcClient::open(
            SocketAddr::new(addr, port),
            RUSERS_PROGRAM,
            RUSERS_VERSION_IDLE,
            self.call_timeout,
        )
        .await
        .map_err(|e| QueryError::Transport {
            host: host.to_string(),
            detail: e.to_string(),
        })?;

        debug!(host = %host, addr = %addr, port = port, "Rusers session established");
        Ok((addr, client))
    }
}

#[async_trait]
impl SessionReader for RusersClient {
    async fn read_sessions(&self, host: &str) -> Result<SessionReply, QueryError> {
        let (addr, client) = self.establish(host).await?;
        fetch_sessions(&client, host, addr).await
    }
}

/// Run the names procedure on an established session.
///
/// Exceeding the call window is the one reportable failure. Every other
/// call-stage condition degrades to an empty reply with a warn, so the
/// host counts as answered-with-nobody rather than broken.
pub async fn fetch_sessions(
    client: &RpcClient,
    host: &str,
    responder: IpAddr,
) -> Result<SessionReply, QueryError> {
    let payload = match client.call(RUSERSPROC_NAMES, &[]).await {
        Ok(payload) => payload,
        Err(RpcError::TimedOut) => {
            return Err(QueryError::RpcTimeout {
                host: host.to_string(),
            })
        }
        Err(error) => {
            warn!(host = %host, error = %error, "Rusers call failed, treating host as empty");
            return Ok(SessionReply::empty(responder));
        }
    };

    let entries = match ReplyDecoder::decode(&payload) {
        Ok(entries) => entries,
        Err(error) => {
            warn!(host = %host, error = %error, "Undecodable rusers reply, treating host as empty");
            return Ok(SessionReply::empty(responder));
        }
    };

    debug!(host = %host, entries = entries.len(), "Rusers reply decoded");
    Ok(SessionReply {
        entries,
        responder,
    })
}
