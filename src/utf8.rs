//! UTF-8 encoder.
//!
//! The utf-8 encoder of the Encoding Standard: one to four bytes per
//! code point, lead byte carrying the length, continuation bytes
//! carrying six payload bits each. Every Unicode scalar value is
//! representable, so this encoder never consults the error policy.

use crate::encoder::{emit, ByteSink, Encoder, ErrorMode};
use crate::error::EncodeError;
use crate::registry::EncoderEntry;

pub(crate) fn process<I, S>(
    input: I,
    _error_mode: ErrorMode,
    sink: &mut S,
) -> Result<(), EncodeError<S::Error>>
where
    I: IntoIterator<Item = char>,
    S: ByteSink + ?Sized,
{
    for c in input {
        let cp = c as u32;

        // ASCII is a single byte.
        if cp < 0x80 {
            emit(sink, cp as u8)?;
            continue;
        }

        // The range picks the continuation-byte count and the offset
        // folded into the lead byte.
        let (count, offset) = match cp {
            0x80..=0x7FF => (1, 0xC0),
            0x800..=0xFFFF => (2, 0xE0),
            _ => (3, 0xF0),
        };

        emit(sink, ((cp >> (6 * count)) + offset) as u8)?;
        for shift in (0..count).rev() {
            emit(sink, (0x80 | ((cp >> (6 * shift)) & 0x3F)) as u8)?;
        }
    }

    Ok(())
}

inventory::submit! {
    EncoderEntry {
        name: "utf-8",
        labels: &[
            "unicode-1-1-utf-8",
            "unicode11utf8",
            "unicode20utf8",
            "utf-8",
            "utf8",
            "x-unicode20utf8",
        ],
        encoder: Encoder::Utf8,
    }
}
