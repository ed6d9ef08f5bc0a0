//! Protocol decoder
//!
//! Reads one RESP value from a caller-supplied byte stream.
//!
//! Decoding is a synchronous sequence of blocking reads: each message is a
//! one-byte type marker followed by the type's framing (see the crate docs
//! for the wire format). The decoder is composed of a line reader, an integer
//! reader, a bulk-payload reader, and an array reader; the top-level
//! dispatcher and the array reader recurse into each other for nested arrays,
//! bounded by [`DecodeConfig::max_depth`].
//!
//! ## Error contract
//!
//! - A clean end-of-stream before any byte of a message is
//!   [`RespError::Eof`] ("no message available").
//! - A stream that ends mid-message is [`RespError::UnexpectedEof`].
//! - Bytes that do not conform to the grammar are
//!   [`RespError::InvalidMessage`].
//! - Inside an array, any element failure that is not an I/O error is
//!   reported as `UnexpectedEof`, whatever its own kind; I/O errors pass
//!   through unchanged. This normalization is part of the compatibility
//!   contract.
//! - `$-1\r\n` is not recognized: negative declared lengths are
//!   `InvalidMessage`. [`Value::Nil`](crate::Value::Nil) is produced only by
//!   a bare `\r\n` line.

use std::io::Read;

use crate::config::DecodeConfig;
use crate::error::{RespError, Result};
use super::value::Value;

const CR: u8 = b'\r';
const LF: u8 = b'\n';

/// Decode one value from a byte stream using the default configuration
pub fn decode<R: Read>(reader: &mut R) -> Result<Value> {
    decode_with_config(reader, &DecodeConfig::default())
}

/// Decode one value from a byte stream
///
/// Blocks until a complete value is read or an error occurs. The first
/// failure at any nesting depth aborts the whole decode; partial values are
/// never returned.
pub fn decode_with_config<R: Read>(reader: &mut R, config: &DecodeConfig) -> Result<Value> {
    let value = read_value(reader, config, 0)?;
    tracing::trace!("decoded value: {:?}", value);
    Ok(value)
}

/// Read one byte, distinguishing clean end-of-stream from failure
fn read_byte<R: Read>(reader: &mut R) -> Result<Option<u8>> {
    let mut byte = [0u8; 1];
    loop {
        match reader.read(&mut byte) {
            Ok(0) => return Ok(None),
            Ok(_) => return Ok(Some(byte[0])),
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(RespError::Io(e)),
        }
    }
}

/// Fill `buf` exactly, mapping a short read to UnexpectedEof
fn read_exact<R: Read>(reader: &mut R, buf: &mut [u8]) -> Result<()> {
    reader.read_exact(buf).map_err(|e| {
        if e.kind() == std::io::ErrorKind::UnexpectedEof {
            RespError::UnexpectedEof
        } else {
            RespError::Io(e)
        }
    })
}

/// Read bytes until a CR LF terminator, returning the bytes before it
///
/// Binary-safe except for the terminator sequence itself. A CR not followed
/// by LF is invalid unless `lenient_lone_cr` is set, in which case the CR and
/// the byte after it are discarded and scanning resumes (legacy behavior).
fn read_line<R: Read>(reader: &mut R, config: &DecodeConfig) -> Result<Vec<u8>> {
    let mut line = Vec::new();
    loop {
        let byte = read_byte(reader)?.ok_or(RespError::UnexpectedEof)?;
        if byte != CR {
            line.push(byte);
            continue;
        }

        let next = read_byte(reader)?.ok_or(RespError::UnexpectedEof)?;
        if next == LF {
            return Ok(line);
        }
        if !config.lenient_lone_cr {
            return Err(RespError::InvalidMessage);
        }
    }
}

/// Read a CR-LF-terminated line and parse it as a base-10 signed 64-bit
/// integer
fn read_integer<R: Read>(reader: &mut R, config: &DecodeConfig) -> Result<i64> {
    let line = read_line(reader, config)?;
    std::str::from_utf8(&line)
        .map_err(|_| RespError::InvalidMessage)?
        .parse::<i64>()
        .map_err(|_| RespError::InvalidMessage)
}

/// Read a length-prefixed bulk payload
///
/// The declared length is validated against the payload actually read; the
/// two bytes after the payload must be CR LF. A zero length consumes and
/// discards the two terminator bytes without inspecting them.
fn read_bulk_string<R: Read>(reader: &mut R, config: &DecodeConfig) -> Result<Vec<u8>> {
    let len = read_integer(reader, config)?;
    if len < 0 {
        // No null-bulk-string form on decode; Nil is encode-only.
        return Err(RespError::InvalidMessage);
    }
    let len = len as usize;
    if len > config.max_bulk_len {
        return Err(RespError::InvalidMessage);
    }

    if len == 0 {
        let mut terminator = [0u8; 2];
        read_exact(reader, &mut terminator)?;
        return Ok(Vec::new());
    }

    let mut payload = vec![0u8; len + 2];
    read_exact(reader, &mut payload)?;
    if payload[len] != CR || payload[len + 1] != LF {
        return Err(RespError::InvalidMessage);
    }
    payload.truncate(len);
    Ok(payload)
}

/// Read a count-prefixed array, decoding each element in order
///
/// Element failures other than I/O errors are normalized to UnexpectedEof;
/// a failed element aborts the whole array.
fn read_array<R: Read>(
    reader: &mut R,
    config: &DecodeConfig,
    depth: usize,
) -> Result<Vec<Value>> {
    let count = read_integer(reader, config)?;
    if count < 0 {
        return Err(RespError::InvalidMessage);
    }
    let count = count as usize;
    if count > config.max_array_len {
        return Err(RespError::InvalidMessage);
    }
    if count == 0 {
        return Ok(Vec::new());
    }

    let mut elements = Vec::with_capacity(count);
    for _ in 0..count {
        match read_value(reader, config, depth) {
            Ok(element) => elements.push(element),
            Err(RespError::Io(e)) => return Err(RespError::Io(e)),
            Err(_) => return Err(RespError::UnexpectedEof),
        }
    }
    Ok(elements)
}

/// Top-level dispatcher: one type-marker byte decides the reader
fn read_value<R: Read>(reader: &mut R, config: &DecodeConfig, depth: usize) -> Result<Value> {
    let marker = read_byte(reader)?.ok_or(RespError::Eof)?;
    match marker {
        // Empty-line convention: a bare CR LF is the null/keepalive token.
        CR => match read_byte(reader)? {
            Some(LF) => Ok(Value::Nil),
            _ => Err(RespError::UnexpectedEof),
        },
        b'+' => read_line(reader, config).map(Value::SimpleString),
        b'-' => {
            let line = read_line(reader, config)?;
            Ok(Value::Error(String::from_utf8_lossy(&line).into_owned()))
        }
        b':' => read_integer(reader, config).map(Value::Integer),
        b'$' => read_bulk_string(reader, config).map(Value::BulkString),
        b'*' => {
            if depth >= config.max_depth {
                return Err(RespError::InvalidMessage);
            }
            read_array(reader, config, depth + 1).map(Value::Array)
        }
        _ => Err(RespError::InvalidMessage),
    }
}
