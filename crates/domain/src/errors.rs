use thiserror::Error;

/// Failures that cross the query boundary.
///
/// Everything else the pipeline can run into (a denied or garbled RPC
/// reply, an undecodable payload, a failed reverse lookup) is absorbed
/// and surfaces as an empty or reduced result instead.
#[derive(Error, Debug, Clone)]
pub enum QueryError {
    #[error("cannot resolve host {host}: {detail}")]
    HostResolution { host: String, detail: String },

    #[error("rusers session to {host} failed: {detail}")]
    Transport { host: String, detail: String },

    #[error("rusers call to {host} timed out")]
    RpcTimeout { host: String },
}
