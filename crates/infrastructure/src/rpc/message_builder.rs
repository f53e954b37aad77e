//! RPC call builder
//!
//! Serializes RFC 5531 call messages. Every call goes out with null
//! credentials, the queried services do not authenticate.

use super::xdr::XdrWriter;

pub const RPC_VERSION: u32 = 2;
/// msg_type CALL.
const CALL: u32 = 0;
/// auth flavor AUTH_NONE.
const AUTH_NONE: u32 = 0;

/// Builds RPC call messages in wire format.
pub struct MessageBuilder;

impl MessageBuilder {
    /// Build a call message and return it with its transaction id.
    ///
    /// The xid is random so a stale reply from an earlier process using the
    /// same port cannot be taken for an answer. `args` is the
    /// already-serialized procedure argument block, empty for void.
    pub fn build_call(program: u32, version: u32, procedure: u32, args: &[u8]) -> (u32, Vec<u8>) {
        let xid = fastrand::u32(..);

        let mut writer = XdrWriter::new();
        writer.put_u32(xid);
        writer.put_u32(CALL);
        writer.put_u32(RPC_VERSION);
        writer.put_u32(program);
        writer.put_u32(version);
        writer.put_u32(procedure);
        // cred then verf, both AUTH_NONE with empty bodies
        writer.put_u32(AUTH_NONE);
        writer.put_u32(0);
        writer.put_u32(AUTH_NONE);
        writer.put_u32(0);

        let mut datagram = writer.into_bytes().to_vec();
        datagram.extend_from_slice(args);
        (xid, datagram)
    }
}
