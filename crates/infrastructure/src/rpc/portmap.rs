//! Portmapper client
//!
//! Version 2 portmapper, the only registration service the old rusersd
//! deployments ship with.

use super::client::RpcClient;
use super::xdr::{XdrReader, XdrWriter};
use super::RpcError;
use std::net::SocketAddr;
use std::time::Duration;
use tracing::debug;

pub const PMAP_PROGRAM: u32 = 100_000;
pub const PMAP_VERSION: u32 = 2;
pub const PMAP_PORT: u16 = 111;
const PMAPPROC_GETPORT: u32 = 3;
const IPPROTO_UDP: u32 = 17;

pub struct Portmap;

impl Portmap {
    /// Ask the portmapper at `portmap_addr` where `program`/`version`
    /// listens over UDP.
    ///
    /// A zero port in the reply means the program is not registered, which
    /// is how a host without a running daemon answers.
    pub async fn udp_port(
        portmap_addr: SocketAddr,
        program: u32,
        version: u32,
        timeout: Duration,
    ) -> Result<u16, RpcError> {
        let client = RpcClient::open(portmap_addr, PMAP_PROGRAM, PMAP_VERSION, timeout).await?;

        let mut args = XdrWriter::new();
        args.put_u32(program);
        args.put_u32(version);
        args.put_u32(IPPROTO_UDP);
        args.put_u32(0);

        let payload = client
            .call(PMAPPROC_GETPORT, &args.into_bytes())
            .await?;

        let mut reader = XdrReader::new(&payload);
        let port = reader.read_u32()?;
        if port == 0 || port > u32::from(u16::MAX) {
            return Err(RpcError::Rejected(format!(
                "program {} version {} is not registered",
                program, version
            )));
        }

        debug!(portmap = %portmap_addr, program = program, port = port, "Portmapper lookup done");
        Ok(port as u16)
    }
}
