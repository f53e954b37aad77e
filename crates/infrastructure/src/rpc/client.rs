use super::message_builder::MessageBuilder;
use super::reply_parser::{ReplyDisposition, ReplyParser};
use super::RpcError;
use bytes::Bytes;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::UdpSocket;
use tokio::time::Instant;
use tracing::debug;

/// Largest datagram a SunRPC service sends over UDP.
const UDP_MSG_SIZE: usize = 8800;

/// One UDP session against a single RPC program on a single server.
pub struct RpcClient {
    socket: UdpSocket,
    peer: SocketAddr,
    program: u32,
    version: u32,
    call_timeout: Duration,
}

impl RpcClient {
    /// Bind an ephemeral local port and connect it to `peer`.
    pub async fn open(
        peer: SocketAddr,
        program: u32,
        version: u32,
        call_timeout: Duration,
    ) -> Result<Self, RpcError> {
        let socket = UdpSocket::bind("0.0.0.0:0").await?;
        socket.connect(peer).await?;

        Ok(Self {
            socket,
            peer,
            program,
            version,
            call_timeout,
        })
    }

    /// Send one call and wait for its reply.
    ///
    /// The wait is bounded by the call timeout as a whole. Datagrams whose
    /// xid belongs to another call are dropped and the wait continues on
    /// the remaining time, there is no retransmission.
    pub async fn call(&self, procedure: u32, args: &[u8]) -> Result<Bytes, RpcError> {
        let (xid, datagram) =
            MessageBuilder::build_call(self.program, self.version, procedure, args);

        debug!(
            peer = %self.peer,
            program = self.program,
            procedure = procedure,
            xid = xid,
            "Sending RPC call"
        );
        self.socket.send(&datagram).await?;

        let deadline = Instant::now() + self.call_timeout;
        let mut buf = vec![0u8; UDP_MSG_SIZE];

        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                return Err(RpcError::TimedOut);
            }

            let len = tokio::time::timeout(remaining, self.socket.recv(&mut buf))
                .await
                .map_err(|_| RpcError::TimedOut)??;

            match ReplyParser::parse(xid, &buf[..len])? {
                ReplyDisposition::OtherCall => {
                    debug!(peer = %self.peer, "Skipping reply for another call");
                    continue;
                }
                ReplyDisposition::Payload(payload) => return Ok(payload),
            }
        }
    }
}
