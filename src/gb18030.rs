//! GB18030 and GBK encoder.
//!
//! GB18030 is China's pan-Unicode standard: the GBK two-byte area plus a
//! four-byte form that covers every remaining scalar value through a
//! linear pointer space. GBK is the same encoder with the four-byte form
//! switched off (plus the lone single-byte 0x80 for the euro sign), so
//! both share one implementation parameterized by a mode flag fixed at
//! registration.
//!
//! # Structure
//!
//! - 1 byte: ASCII (and 0x80 for U+20AC under GBK)
//! - 2 bytes: the GBK area, 190 trail values per lead
//! - 4 bytes: everything else, digits base 126/10 offset into
//!   0x81../0x30.. pairs

use crate::encoder::{emit, unmappable, ByteSink, Encoder, ErrorMode};
use crate::error::EncodeError;
use crate::index;
use crate::registry::EncoderEntry;

pub(crate) fn process<I, S>(
    input: I,
    error_mode: ErrorMode,
    sink: &mut S,
    gbk: bool,
) -> Result<(), EncodeError<S::Error>>
where
    I: IntoIterator<Item = char>,
    S: ByteSink + ?Sized,
{
    for c in input {
        let cp = c as u32;

        if cp < 0x80 {
            emit(sink, cp as u8)?;
            continue;
        }

        // U+E5E5 round-trips from no byte sequence; encoding it is
        // always an error.
        if c == '\u{E5E5}' {
            unmappable(error_mode, c, sink)?;
            continue;
        }

        if gbk && c == '\u{20AC}' {
            emit(sink, 0x80)?;
            continue;
        }

        if let Some(pointer) = index::gb18030_pointer(c) {
            let trail = pointer % 190;
            let trail_offset = if trail < 0x3F { 0x40 } else { 0x41 };
            emit(sink, (pointer / 190 + 0x81) as u8)?;
            emit(sink, (trail + trail_offset) as u8)?;
            continue;
        }

        // GBK has no four-byte form.
        if gbk {
            unmappable(error_mode, c, sink)?;
            continue;
        }

        let pointer = index::gb18030_ranges_pointer(c);
        let byte1 = pointer / (10 * 126 * 10);
        let rest = pointer % (10 * 126 * 10);
        let byte2 = rest / (10 * 126);
        let rest = rest % (10 * 126);
        let byte3 = rest / 10;
        let byte4 = rest % 10;

        emit(sink, (byte1 + 0x81) as u8)?;
        emit(sink, (byte2 + 0x30) as u8)?;
        emit(sink, (byte3 + 0x81) as u8)?;
        emit(sink, (byte4 + 0x30) as u8)?;
    }

    Ok(())
}

inventory::submit! {
    EncoderEntry {
        name: "gbk",
        labels: &[
            "chinese",
            "csgb2312",
            "csiso58gb231280",
            "gb2312",
            "gb_2312",
            "gb_2312-80",
            "gbk",
            "iso-ir-58",
            "x-gbk",
        ],
        encoder: Encoder::Gbk,
    }
}

inventory::submit! {
    EncoderEntry {
        name: "gb18030",
        labels: &["gb18030"],
        encoder: Encoder::Gb18030,
    }
}
