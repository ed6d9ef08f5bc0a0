//! # respwire
//!
//! A codec for RESP, the Redis serialization protocol:
//! - a decoder that reads one typed value from any [`std::io::Read`] stream
//! - an encoder that serializes one value to its exact wire bytes
//! - a typed error taxonomy distinguishing truncation from malformed content
//!
//! The codec is the innermost layer of a client or server speaking the
//! protocol. Transport, connection lifecycle, and command dispatch belong to
//! the caller; this crate only converts between bytes and values.
//!
//! ## Usage
//!
//! ```
//! use std::io::Cursor;
//! use respwire::{decode, encode, Value};
//!
//! let bytes = encode(&Value::Integer(42)).unwrap();
//! assert_eq!(&bytes[..], b":42\r\n");
//!
//! let mut stream = Cursor::new(bytes);
//! assert_eq!(decode(&mut stream).unwrap(), Value::Integer(42));
//! ```
//!
//! Decode and encode share no state: each call is independent and safe to
//! run from multiple threads, provided each uses its own byte source.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod protocol;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{RespError, Result};
pub use config::{DecodeConfig, DecodeConfigBuilder};
pub use protocol::{decode, decode_with_config, encode, Value};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of respwire
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
