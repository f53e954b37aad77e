use crate::ports::{HostnameResolver, SessionReader};
use rusers_domain::{QueryError, SessionRecord};
use std::sync::Arc;
use tracing::debug;

/// Queries one host for its logged-in users.
///
/// Raw entries come back from the rusers daemon, the responder address is
/// reverse-resolved to a display hostname, and placeholder entries are
/// dropped before the records are returned.
pub struct QueryHostUseCase {
    sessions: Arc<dyn SessionReader>,
    hostnames: Arc<dyn HostnameResolver>,
}

impl QueryHostUseCase {
    pub fn new(sessions: Arc<dyn SessionReader>, hostnames: Arc<dyn HostnameResolver>) -> Self {
        Self {
            sessions,
            hostnames,
        }
    }

    pub async fn execute(&self, host: &str) -> Result<Vec<SessionRecord>, QueryError> {
        let reply = self.sessions.read_sessions(host).await?;

        // A failed or missing reverse mapping is never fatal, the dotted
        // address stands in for the hostname.
        let display_host = match self.hostnames.resolve_hostname(reply.responder).await {
            Ok(Some(name)) => name,
            Ok(None) => reply.responder.to_string(),
            Err(error) => {
                debug!(ip = %reply.responder, error = %error, "Reverse lookup failed, using address");
                reply.responder.to_string()
            }
        };

        let records: Vec<SessionRecord> = reply
            .entries
            .iter()
            .filter_map(|entry| SessionRecord::from_entry(&display_host, entry))
            .collect();

        debug!(
            host = %host,
            display_host = %display_host,
            sessions = records.len(),
            "Host query complete"
        );

        Ok(records)
    }
}
