use serde::Serialize;

use crate::session_entry::{trim_nul, truncate, SessionEntry, HOST_WIDTH, NAME_WIDTH};

/// Login name rusersd reports for a session slot without a real user.
/// Compared byte-for-byte against the truncated name field.
pub const UNKNOWN_USER: &[u8] = b"(unknown";

/// One remote login session, as exposed to callers.
///
/// All fields are fixed at construction; `hostname` is the reverse-resolved
/// name of the responding host and is identical across every record of one
/// query result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionRecord {
    pub hostname: String,
    pub username: String,
    pub remote_origin: String,
    pub login_time: i64,
    pub idle_time: u32,
}

impl SessionRecord {
    pub fn new(
        hostname: String,
        username: String,
        remote_origin: String,
        login_time: i64,
        idle_time: u32,
    ) -> Self {
        Self {
            hostname,
            username,
            remote_origin,
            login_time,
            idle_time,
        }
    }

    /// Shape one decoded wire entry into a record.
    ///
    /// The name and origin fields are cut at their first NUL and truncated
    /// to the wire widths (8 and 16 bytes). Returns `None` when the
    /// truncated name equals [`UNKNOWN_USER`] exactly; such placeholder
    /// entries never materialize as records.
    pub fn from_entry(hostname: &str, entry: &SessionEntry) -> Option<Self> {
        let name = truncate(trim_nul(&entry.name), NAME_WIDTH);
        if name == UNKNOWN_USER {
            return None;
        }
        let origin = truncate(trim_nul(&entry.host), HOST_WIDTH);

        Some(Self {
            hostname: hostname.to_string(),
            username: String::from_utf8_lossy(name).into_owned(),
            remote_origin: String::from_utf8_lossy(origin).into_owned(),
            login_time: entry.time,
            idle_time: entry.idle,
        })
    }
}
