//! rusers wire protocol
//!
//! Version 2 of the remote-users service, the `utmpidlearr` shape served by
//! classic rusersd. Each array element carries the utmp text fields plus an
//! idle counter.

use crate::rpc::xdr::{XdrError, XdrReader};
use rusers_domain::session_entry::{HOST_WIDTH, LINE_WIDTH, NAME_WIDTH};
use rusers_domain::SessionEntry;
use thiserror::Error;

pub const RUSERS_PROGRAM: u32 = 100_002;
pub const RUSERS_VERSION_IDLE: u32 = 2;
pub const RUSERSPROC_NAMES: u32 = 2;

/// Most entries a reply may carry, MAXUSERS in the original headers.
pub const MAX_ENTRIES: usize = 100;

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error(transparent)]
    Xdr(#[from] XdrError),
    #[error("entry count {count} exceeds the 100 entry limit")]
    TooManyEntries { count: u32 },
}

/// Decodes `utmpidlearr` payloads.
pub struct ReplyDecoder;

impl ReplyDecoder {
    /// Entry order is preserved as sent. Bytes past the declared array are
    /// ignored, some daemons pad their datagrams.
    pub fn decode(payload: &[u8]) -> Result<Vec<SessionEntry>, DecodeError> {
        let mut reader = XdrReader::new(payload);

        let count = reader.read_u32()?;
        if count as usize > MAX_ENTRIES {
            return Err(DecodeError::TooManyEntries { count });
        }

        let mut entries = Vec::with_capacity(count as usize);
        for _ in 0..count {
            let line = reader.read_opaque(LINE_WIDTH)?;
            let name = reader.read_opaque(NAME_WIDTH)?;
            let host = reader.read_opaque(HOST_WIDTH)?;
            let time = i64::from(reader.read_i32()?);
            let idle = reader.read_u32()?;
            entries.push(SessionEntry::new(line, name, host, time, idle));
        }

        Ok(entries)
    }
}
