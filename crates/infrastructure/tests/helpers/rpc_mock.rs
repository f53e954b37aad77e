#![allow(dead_code)]

use rusers_infrastructure::rpc::XdrWriter;
use std::net::SocketAddr;
use tokio::net::UdpSocket;
use tokio::sync::oneshot;

/// Scripted RPC responder on an ephemeral loopback port.
///
/// The script receives the xid and raw bytes of each incoming call and
/// returns the datagrams to send back, none for a silent server.
pub struct MockRpcServer {
    addr: SocketAddr,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockRpcServer {
    pub async fn start<F>(script: F) -> Result<(Self, SocketAddr), std::io::Error>
    where
        F: Fn(u32, &[u8]) -> Vec<Vec<u8>> + Send + Sync + 'static,
    {
        let socket = UdpSocket::bind("127.0.0.1:0").await?;
        let local_addr = socket.local_addr()?;

        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        tokio::spawn(async move {
            let mut buf = vec![0u8; 9000];

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => {
                        break;
                    }
                    result = socket.recv_from(&mut buf) => {
                        if let Ok((len, peer)) = result {
                            let xid = call_xid(&buf[..len]);
                            for reply in script(xid, &buf[..len]) {
                                let _ = socket.send_to(&reply, peer).await;
                            }
                        }
                    }
                }
            }
        });

        Ok((
            Self {
                addr: local_addr,
                shutdown_tx: Some(shutdown_tx),
            },
            local_addr,
        ))
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for MockRpcServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

fn call_xid(datagram: &[u8]) -> u32 {
    if datagram.len() < 4 {
        return 0;
    }
    u32::from_be_bytes([datagram[0], datagram[1], datagram[2], datagram[3]])
}

/// MSG_ACCEPTED reply with a SUCCESS status and the given result payload.
pub fn accepted_reply(xid: u32, payload: &[u8]) -> Vec<u8> {
    let mut writer = XdrWriter::new();
    writer.put_u32(xid);
    writer.put_u32(1); // REPLY
    writer.put_u32(0); // MSG_ACCEPTED
    writer.put_u32(0); // verf flavor
    writer.put_u32(0); // verf length
    writer.put_u32(0); // SUCCESS
    let mut datagram = writer.into_bytes().to_vec();
    datagram.extend_from_slice(payload);
    datagram
}

/// MSG_DENIED reply with an AUTH_ERROR reason.
pub fn denied_reply(xid: u32) -> Vec<u8> {
    let mut writer = XdrWriter::new();
    writer.put_u32(xid);
    writer.put_u32(1); // REPLY
    writer.put_u32(1); // MSG_DENIED
    writer.put_u32(1); // AUTH_ERROR
    writer.put_u32(2); // AUTH_BADCRED
    writer.into_bytes().to_vec()
}

/// MSG_ACCEPTED reply carrying a non-SUCCESS accept status.
pub fn accept_error_reply(xid: u32, accept_stat: u32) -> Vec<u8> {
    let mut writer = XdrWriter::new();
    writer.put_u32(xid);
    writer.put_u32(1); // REPLY
    writer.put_u32(0); // MSG_ACCEPTED
    writer.put_u32(0); // verf flavor
    writer.put_u32(0); // verf length
    writer.put_u32(accept_stat);
    writer.into_bytes().to_vec()
}

/// GETPORT result payload wrapped in an accepted reply.
pub fn getport_reply(xid: u32, port: u32) -> Vec<u8> {
    let mut writer = XdrWriter::new();
    writer.put_u32(port);
    accepted_reply(xid, &writer.into_bytes())
}

/// Serialized `utmpidlearr` made of (line, name, host, time, idle) rows.
pub fn utmpidlearr_payload(rows: &[(&[u8], &[u8], &[u8], i32, u32)]) -> Vec<u8> {
    let mut writer = XdrWriter::new();
    writer.put_u32(rows.len() as u32);
    for (line, name, host, time, idle) in rows {
        writer.put_opaque(line);
        writer.put_opaque(name);
        writer.put_opaque(host);
        writer.put_i32(*time);
        writer.put_u32(*idle);
    }
    writer.into_bytes().to_vec()
}
