use crate::use_cases::QueryHostUseCase;
use futures::future::join_all;
use rusers_domain::{Machine, QueryError, SessionRecord};
use std::sync::Arc;
use tracing::warn;

/// Outcome of querying a single machine during a sweep.
#[derive(Debug, Clone)]
pub struct HostReport {
    pub machine: Machine,
    pub outcome: Result<Vec<SessionRecord>, QueryError>,
}

pub struct QueryHostsUseCase {
    query_host: Arc<QueryHostUseCase>,
}

impl QueryHostsUseCase {
    pub fn new(query_host: Arc<QueryHostUseCase>) -> Self {
        Self { query_host }
    }

    /// Query every machine concurrently. A failing host is reported in its
    /// [`HostReport`] instead of aborting the sweep, and reports come back
    /// in the order the machines were given.
    pub async fn execute(&self, machines: &[Machine]) -> Vec<HostReport> {
        let queries = machines.iter().map(|machine| async {
            let outcome = self.query_host.execute(&machine.name).await;
            if let Err(ref error) = outcome {
                warn!(host = %machine.name, error = %error, "Host query failed");
            }
            HostReport {
                machine: machine.clone(),
                outcome,
            }
        });

        join_all(queries).await
    }
}
