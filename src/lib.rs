//! Streaming encoders for the legacy encodings of the WHATWG Encoding
//! Standard.
//!
//! This crate implements the encoder side of the Encoding Standard for
//! the eight encodings web content may still be serialized into: UTF-8,
//! EUC-JP, ISO-2022-JP, Shift_JIS, EUC-KR, Big5, GB18030 and GBK. The
//! encoders are byte-for-byte conformant with the standard; legacy
//! documents and form submissions depend on exact compatibility, so
//! conformance is the entire point.
//!
//! An encoder consumes any iterator of `char` and pushes bytes into a
//! [`ByteSink`] one at a time, so output can be streamed, counted or
//! percent-escaped without intermediate buffers. Code points the target
//! encoding cannot represent are handled by a shared [`ErrorMode`]
//! policy: replacement bytes, an HTML numeric character reference, or a
//! fatal error.
//!
//! # Example
//!
//! ```
//! use textcodec::{encoder_for, ErrorMode};
//!
//! let encoder = encoder_for("Shift-JIS").unwrap();
//! let bytes = encoder.encode("にほん".chars(), ErrorMode::Fatal).unwrap();
//! assert_eq!(bytes, [0x82, 0xC9, 0x82, 0xD9, 0x82, 0xF1]);
//! ```

#![deny(missing_docs)]

/// The encoder capability: [`Encoder`], [`ErrorMode`], [`ByteSink`].
pub mod encoder;
/// Error types for encoding operations.
pub mod error;
/// Runtime registry mapping names and labels to encoders.
pub mod registry;

mod index;

mod big5;
mod euc_jp;
mod euc_kr;
mod gb18030;
mod iso2022jp;
mod shift_jis;
mod utf8;

pub use encoder::{ByteSink, Encoder, ErrorMode, EscapeHint};
pub use error::{EncodeError, FatalEncodingError};
pub use registry::{encoder_for, encoder_for_exact_name, standardized_name, EncoderEntry};
