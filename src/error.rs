//! Error types for respwire
//!
//! Provides a typed error kind for decode and encode failures, so callers can
//! match on the kind instead of comparing strings or sentinel values.

use thiserror::Error;

/// Result type alias using RespError
pub type Result<T> = std::result::Result<T, RespError>;

/// Unified error type for respwire operations
///
/// A RESP error *value* on the wire (`-ERR ...\r\n`) is not represented here:
/// it decodes successfully into [`Value::Error`](crate::Value::Error).
#[derive(Debug, Error)]
pub enum RespError {
    // -------------------------------------------------------------------------
    // Decode Errors
    // -------------------------------------------------------------------------
    /// The stream ended before a structurally required byte count was
    /// satisfied: mid-line, mid-length-field, mid-payload, or mid-array.
    #[error("unexpected EOF while decoding")]
    UnexpectedEof,

    /// Bytes were present but did not conform to the wire grammar:
    /// a non-numeric length or integer field, wrong terminator bytes, or an
    /// unrecognized type marker.
    #[error("invalid message")]
    InvalidMessage,

    /// The stream ended cleanly before any byte of a message was read.
    ///
    /// Distinct from [`UnexpectedEof`](RespError::UnexpectedEof): this means
    /// "no message available", not truncation mid-message.
    #[error("end of stream")]
    Eof,

    // -------------------------------------------------------------------------
    // Encode Errors
    // -------------------------------------------------------------------------
    /// The value handed to the encoder has no defined wire representation.
    #[error("unsupported type")]
    UnsupportedType,

    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    /// Any read failure from the byte source other than end-of-stream,
    /// passed through unchanged.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
