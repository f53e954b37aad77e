//! XDR primitive codec
//!
//! The subset of RFC 4506 the portmapper and rusers exchanges need: 32-bit
//! words and variable-length opaques, big-endian, every item padded to a
//! four byte boundary.

use bytes::{BufMut, Bytes, BytesMut};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum XdrError {
    #[error("need {wanted} more bytes, {remaining} available")]
    Truncated { wanted: usize, remaining: usize },
    #[error("opaque field of {len} bytes exceeds the {limit} byte limit")]
    OversizedOpaque { len: usize, limit: usize },
}

/// Serializes XDR items into a wire buffer.
pub struct XdrWriter {
    buf: BytesMut,
}

impl XdrWriter {
    pub fn new() -> Self {
        Self {
            buf: BytesMut::with_capacity(64),
        }
    }

    pub fn put_u32(&mut self, value: u32) {
        self.buf.put_u32(value);
    }

    pub fn put_i32(&mut self, value: i32) {
        self.buf.put_i32(value);
    }

    /// Length word, contents, then zero padding up to the next word boundary.
    pub fn put_opaque(&mut self, data: &[u8]) {
        self.buf.put_u32(data.len() as u32);
        self.buf.put_slice(data);
        self.buf.put_bytes(0, pad_len(data.len()));
    }

    pub fn into_bytes(self) -> Bytes {
        self.buf.freeze()
    }
}

impl Default for XdrWriter {
    fn default() -> Self {
        Self::new()
    }
}

/// Reads XDR items off a received datagram, refusing to run past its end.
pub struct XdrReader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> XdrReader<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// Everything not yet consumed.
    pub fn rest(&self) -> &'a [u8] {
        &self.buf[self.pos..]
    }

    fn take(&mut self, wanted: usize) -> Result<&'a [u8], XdrError> {
        if self.remaining() < wanted {
            return Err(XdrError::Truncated {
                wanted,
                remaining: self.remaining(),
            });
        }
        let chunk = &self.buf[self.pos..self.pos + wanted];
        self.pos += wanted;
        Ok(chunk)
    }

    pub fn read_u32(&mut self) -> Result<u32, XdrError> {
        let chunk = self.take(4)?;
        Ok(u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
    }

    pub fn read_i32(&mut self) -> Result<i32, XdrError> {
        Ok(self.read_u32()? as i32)
    }

    /// Variable-length opaque with a hard length limit, padding consumed.
    pub fn read_opaque(&mut self, limit: usize) -> Result<Vec<u8>, XdrError> {
        let len = self.read_u32()? as usize;
        if len > limit {
            return Err(XdrError::OversizedOpaque { len, limit });
        }
        let data = self.take(len)?.to_vec();
        self.take(pad_len(len))?;
        Ok(data)
    }
}

fn pad_len(len: usize) -> usize {
    (4 - len % 4) % 4
}
