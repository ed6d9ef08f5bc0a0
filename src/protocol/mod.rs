//! Protocol Module
//!
//! The RESP wire protocol: value representation, decoder, and encoder.
//!
//! ## Wire Format
//!
//! Every unit begins with a one-byte type marker:
//!
//! | Marker | Type          | Format                                  |
//! |--------|---------------|-----------------------------------------|
//! | `+`    | Simple string | `+<text>\r\n`                           |
//! | `-`    | Error         | `-<text>\r\n`                           |
//! | `:`    | Integer       | `:<decimal>\r\n`                        |
//! | `$`    | Bulk string   | `$<len>\r\n<len raw bytes>\r\n`         |
//! | `*`    | Array         | `*<count>\r\n<count encoded elements>`  |
//!
//! Every line-oriented field is terminated by exactly CR then LF, never LF
//! alone. Bulk string payloads are binary-safe: any byte values, including
//! embedded CR/LF, are carried intact under the length prefix.
//!
//! Two tokens sit outside the marker table:
//! - a bare `\r\n` with no marker decodes to `Nil` (empty/null token,
//!   decode only);
//! - `$-1\r\n` is the null-bulk-string form `Nil` encodes to (encode only).

mod value;
mod decoder;
mod encoder;

pub use value::Value;
pub use decoder::{decode, decode_with_config};
pub use encoder::encode;
