//! Value definitions
//!
//! The shared value representation both the decoder and the encoder work on.

use crate::error::RespError;

/// A single RESP value
///
/// Decoding produces exactly one `Value` per message; encoding consumes one.
/// Values carry no identity beyond their content and are owned exclusively by
/// the caller once returned.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Null token. Encodes as `$-1\r\n`; produced on decode only by a bare
    /// `\r\n` line (the empty-line convention). The `$-1\r\n` form does
    /// *not* decode back to `Nil` -- see the decoder docs.
    Nil,

    /// Signed 64-bit integer: `:<decimal>\r\n`
    Integer(i64),

    /// Text line with no embedded CR/LF: `+<text>\r\n`
    SimpleString(Vec<u8>),

    /// Length-prefixed, binary-safe payload: `$<len>\r\n<bytes>\r\n`
    BulkString(Vec<u8>),

    /// A protocol-level error reported by the peer: `-<text>\r\n`
    ///
    /// This is a *successfully decoded* value, not a decode failure.
    Error(String),

    /// Ordered, possibly heterogeneous sequence: `*<count>\r\n<elements>`
    Array(Vec<Value>),

    /// Double-precision float, a RESP3-only kind.
    ///
    /// Callers interoperating with RESP3 peers may hold one, but this
    /// protocol version has no wire form for it: encoding fails with
    /// [`UnsupportedType`](RespError::UnsupportedType).
    Double(f64),
}

impl Value {
    /// Returns true if this is the null token
    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }

    /// Returns the integer payload, if this is an `Integer`
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the byte payload, if this is a `SimpleString` or `BulkString`
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::SimpleString(b) | Value::BulkString(b) => Some(b),
            _ => None,
        }
    }

    /// Returns the error text, if this is an `Error`
    pub fn as_error(&self) -> Option<&str> {
        match self {
            Value::Error(msg) => Some(msg),
            _ => None,
        }
    }

    /// Returns the elements, if this is an `Array`
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }
}

// =============================================================================
// Numeric interop
// =============================================================================
//
// Every signed width and every unsigned width below 64 bits widens losslessly
// into `Integer`. u64 and usize are fallible: values above i64::MAX have no
// wire representation.

macro_rules! impl_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(i: $ty) -> Self {
                    Value::Integer(i64::from(i))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl TryFrom<u64> for Value {
    type Error = RespError;

    fn try_from(i: u64) -> Result<Self, RespError> {
        i64::try_from(i)
            .map(Value::Integer)
            .map_err(|_| RespError::UnsupportedType)
    }
}

impl TryFrom<usize> for Value {
    type Error = RespError;

    fn try_from(i: usize) -> Result<Self, RespError> {
        i64::try_from(i)
            .map(Value::Integer)
            .map_err(|_| RespError::UnsupportedType)
    }
}

// =============================================================================
// Text, byte, and sequence interop
// =============================================================================

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::SimpleString(s.as_bytes().to_vec())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::SimpleString(s.into_bytes())
    }
}

impl From<&[u8]> for Value {
    fn from(b: &[u8]) -> Self {
        Value::BulkString(b.to_vec())
    }
}

impl From<Vec<u8>> for Value {
    fn from(b: Vec<u8>) -> Self {
        Value::BulkString(b)
    }
}

impl From<f64> for Value {
    fn from(d: f64) -> Self {
        Value::Double(d)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}
