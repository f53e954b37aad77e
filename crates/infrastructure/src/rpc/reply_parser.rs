//! RPC reply parser
//!
//! Takes received datagrams apart down to the accepted-reply payload and
//! turns every refusal the server can express into an [`RpcError`].

use super::xdr::XdrReader;
use super::RpcError;
use bytes::Bytes;

const REPLY: u32 = 1;

// reply_stat
const MSG_ACCEPTED: u32 = 0;
const MSG_DENIED: u32 = 1;

// accept_stat
const SUCCESS: u32 = 0;
const PROG_UNAVAIL: u32 = 1;
const PROG_MISMATCH: u32 = 2;
const PROC_UNAVAIL: u32 = 3;
const GARBAGE_ARGS: u32 = 4;
const SYSTEM_ERR: u32 = 5;

/// Largest serialized auth body a verifier may carry.
const MAX_AUTH_BYTES: usize = 400;

#[derive(Debug)]
pub enum ReplyDisposition {
    /// Reply belongs to some other call, keep waiting.
    OtherCall,
    /// Accepted with SUCCESS, the procedure result follows.
    Payload(Bytes),
}

pub struct ReplyParser;

impl ReplyParser {
    pub fn parse(expected_xid: u32, datagram: &[u8]) -> Result<ReplyDisposition, RpcError> {
        let mut reader = XdrReader::new(datagram);

        let xid = reader.read_u32()?;
        if xid != expected_xid {
            return Ok(ReplyDisposition::OtherCall);
        }

        let msg_type = reader.read_u32()?;
        if msg_type != REPLY {
            return Err(RpcError::Rejected(format!(
                "unexpected message type {}",
                msg_type
            )));
        }

        match reader.read_u32()? {
            MSG_ACCEPTED => {}
            MSG_DENIED => return Err(Self::denial(&mut reader)),
            other => {
                return Err(RpcError::Rejected(format!(
                    "unknown reply status {}",
                    other
                )))
            }
        }

        // verifier, flavor word plus opaque body
        reader.read_u32()?;
        reader.read_opaque(MAX_AUTH_BYTES)?;

        match reader.read_u32()? {
            SUCCESS => Ok(ReplyDisposition::Payload(Bytes::copy_from_slice(
                reader.rest(),
            ))),
            PROG_UNAVAIL => Err(RpcError::Rejected("program unavailable on server".into())),
            PROG_MISMATCH => Err(Self::mismatch(&mut reader)),
            PROC_UNAVAIL => Err(RpcError::Rejected("procedure unavailable on server".into())),
            GARBAGE_ARGS => Err(RpcError::Rejected(
                "server could not decode arguments".into(),
            )),
            SYSTEM_ERR => Err(RpcError::Rejected("server-side system error".into())),
            other => Err(RpcError::Rejected(format!(
                "unknown accept status {}",
                other
            ))),
        }
    }

    fn denial(reader: &mut XdrReader<'_>) -> RpcError {
        // rejected_reply is RPC_MISMATCH { low, high } or AUTH_ERROR { stat }
        match reader.read_u32() {
            Ok(0) => RpcError::Rejected("call denied, rpc version mismatch".into()),
            Ok(1) => RpcError::Rejected("call denied, authentication error".into()),
            _ => RpcError::Rejected("call denied by server".into()),
        }
    }

    fn mismatch(reader: &mut XdrReader<'_>) -> RpcError {
        match (reader.read_u32(), reader.read_u32()) {
            (Ok(low), Ok(high)) => RpcError::Rejected(format!(
                "program version mismatch, server supports {} through {}",
                low, high
            )),
            _ => RpcError::Rejected("program version mismatch".into()),
        }
    }
}
