//! Shift_JIS encoder.
//!
//! Shift_JIS packs the JIS X 0208 plane into lead bytes 0x81..0x9F and
//! 0xE0..0xFC with 188 trail values per lead, leaving 0xA1..0xDF free
//! for single-byte half-width katakana. Pointers 8272..=8835 are
//! reserved slots the encoding cannot express; code points whose lookup
//! lands there are unmappable.
//!
//! Unlike every other encoder in the family, U+0080 passes through as a
//! single 0x80 byte.

use crate::encoder::{emit, unmappable, ByteSink, Encoder, ErrorMode};
use crate::error::EncodeError;
use crate::index;
use crate::registry::EncoderEntry;

pub(crate) fn process<I, S>(
    input: I,
    error_mode: ErrorMode,
    sink: &mut S,
) -> Result<(), EncodeError<S::Error>>
where
    I: IntoIterator<Item = char>,
    S: ByteSink + ?Sized,
{
    for c in input {
        let mut c = c;
        let cp = c as u32;

        // ASCII and U+0080.
        if cp <= 0x80 {
            emit(sink, cp as u8)?;
            continue;
        }

        if c == '\u{A5}' {
            emit(sink, 0x5C)?;
            continue;
        }
        if c == '\u{203E}' {
            emit(sink, 0x7E)?;
            continue;
        }

        // Half-width katakana stays single-byte.
        if ('\u{FF61}'..='\u{FF9F}').contains(&c) {
            emit(sink, (cp - 0xFF61 + 0xA1) as u8)?;
            continue;
        }

        if c == '\u{2212}' {
            c = '\u{FF0D}';
        }

        let Some(pointer) = index::shift_jis_pointer(c) else {
            unmappable(error_mode, c, sink)?;
            continue;
        };

        let lead = pointer / 188;
        let lead_offset = if lead < 0x1F { 0x81 } else { 0xC1 };
        let trail = pointer % 188;
        let trail_offset = if trail < 0x3F { 0x40 } else { 0x41 };

        emit(sink, (lead + lead_offset) as u8)?;
        emit(sink, (trail + trail_offset) as u8)?;
    }

    Ok(())
}

inventory::submit! {
    EncoderEntry {
        name: "shift_jis",
        labels: &[
            "csshiftjis",
            "ms932",
            "ms_kanji",
            "shift-jis",
            "shift_jis",
            "sjis",
            "windows-31j",
            "x-sjis",
        ],
        encoder: Encoder::ShiftJis,
    }
}
