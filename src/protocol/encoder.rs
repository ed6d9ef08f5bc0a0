//! Protocol encoder
//!
//! Serializes one value into its exact wire bytes.
//!
//! Encoding is a pure in-memory transformation with no suspension points.
//! Arrays are encoded by recursing through the same dispatcher; if any
//! element fails, the whole call fails and no bytes are returned.
//!
//! [`Value::Nil`] encodes as the null-bulk-string token `$-1\r\n`. The
//! decoder does not parse that token back to `Nil` (it produces `Nil` only
//! from a bare `\r\n` line), so the Nil round trip is intentionally
//! asymmetric.

use bytes::{BufMut, Bytes, BytesMut};

use crate::error::{RespError, Result};
use super::value::Value;

const CRLF: &[u8] = b"\r\n";

/// Encode one value into its wire-format bytes
///
/// Returns [`RespError::UnsupportedType`] for value kinds with no wire
/// representation; in that case no bytes are produced, even if part of an
/// array had already been written.
pub fn encode(value: &Value) -> Result<Bytes> {
    let mut buf = BytesMut::new();
    write_value(&mut buf, value)?;
    tracing::trace!("encoded {} bytes", buf.len());
    Ok(buf.freeze())
}

fn write_value(buf: &mut BytesMut, value: &Value) -> Result<()> {
    match value {
        Value::Nil => buf.put_slice(b"$-1\r\n"),
        Value::Integer(i) => {
            buf.put_u8(b':');
            buf.put_slice(i.to_string().as_bytes());
            buf.put_slice(CRLF);
        }
        Value::SimpleString(s) => {
            // Caller's responsibility that the text contains no CR/LF.
            buf.put_u8(b'+');
            buf.put_slice(s);
            buf.put_slice(CRLF);
        }
        Value::BulkString(payload) => {
            buf.put_u8(b'$');
            buf.put_slice(payload.len().to_string().as_bytes());
            buf.put_slice(CRLF);
            buf.put_slice(payload);
            buf.put_slice(CRLF);
        }
        Value::Error(msg) => {
            buf.put_u8(b'-');
            buf.put_slice(msg.as_bytes());
            buf.put_slice(CRLF);
        }
        Value::Array(items) => {
            buf.put_u8(b'*');
            buf.put_slice(items.len().to_string().as_bytes());
            buf.put_slice(CRLF);
            for item in items {
                write_value(buf, item)?;
            }
        }
        // Reachable by design: Double is a RESP3-only kind with no wire
        // form in this protocol version.
        Value::Double(_) => return Err(RespError::UnsupportedType),
    }
    Ok(())
}
