//! EUC-JP encoder.
//!
//! EUC-JP (Extended Unix Code for Japanese) spans ASCII, JIS X 0201
//! half-width katakana behind a 0x8E lead, and the JIS X 0208 plane as
//! two bytes offset into 0xA1..0xFE. The encoder never produces the
//! three-byte JIS X 0212 form; code points only representable there are
//! unmappable.

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

        if cp < 0x80 {
            emit(sink, cp as u8)?;
            continue;
        }

        // JIS X 0201 Roman replaces backslash and tilde.
        if c == '\u{A5}' {
            emit(sink, 0x5C)?;
            continue;
        }
        if c == '\u{203E}' {
            emit(sink, 0x7E)?;
            continue;
        }

        // Half-width katakana, one byte behind the 0x8E lead.
        if ('\u{FF61}'..='\u{FF9F}').contains(&c) {
            emit(sink, 0x8E)?;
            emit(sink, (cp - 0xFF61 + 0xA1) as u8)?;
            continue;
        }

        // The minus sign encodes as the full-width hyphen-minus.
        if c == '\u{2212}' {
            c = '\u{FF0D}';
        }

        let Some(pointer) = index::jis0208_pointer(c) else {
            unmappable(error_mode, c, sink)?;
            continue;
        };

        emit(sink, (pointer / 94 + 0xA1) as u8)?;
        emit(sink, (pointer % 94 + 0xA1) as u8)?;
    }

    Ok(())
}

inventory::submit! {
    EncoderEntry {
        name: "euc-jp",
        labels: &["cseucpkdfmtjapanese", "euc-jp", "x-euc-jp"],
        encoder: Encoder::EucJp,
    }
}
