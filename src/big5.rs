//! Big5 encoder.
//!
//! Big5 is the traditional Chinese encoding spanning leads 0x81..0xFE
//! with 157 trail values per lead, split across 0x40..0x7E and
//! 0xA1..0xFE. The encoder never produces the Hong Kong Supplementary
//! Character Set region (the leads below 0xA1); code points that only
//! exist there are unmappable.

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
        let cp = c as u32;

        if cp < 0x80 {
            emit(sink, cp as u8)?;
            continue;
        }

        let Some(pointer) = index::big5_pointer(c) else {
            unmappable(error_mode, c, sink)?;
            continue;
        };

        let trail = pointer % 157;
        let trail_offset = if trail < 0x3F { 0x40 } else { 0x62 };

        emit(sink, (pointer / 157 + 0x81) as u8)?;
        emit(sink, (trail + trail_offset) as u8)?;
    }

    Ok(())
}

inventory::submit! {
    EncoderEntry {
        name: "big5",
        labels: &["big5", "big5-hkscs", "cn-big5", "csbig5", "x-x-big5"],
        encoder: Encoder::Big5,
    }
}

#[cfg(test)]
mod tests {
    use crate::{Encoder, ErrorMode};

    fn encode(input: &str) -> Vec<u8> {
        Encoder::Big5.encode(input.chars(), ErrorMode::Fatal).unwrap()
    }

    #[test]
    fn ascii_passes_through() {
        assert_eq!(encode("1/m"), b"1/m");
    }

    #[test]
    fn common_ideographs() {
        assert_eq!(
            encode("\u{4E2D}\u{83EF}\u{6C11}\u{570B}"),
            [0xA4, 0xA4, 0xB5, 0xD8, 0xA5, 0xC1, 0xB0, 0xEA]
        );
    }

    #[test]
    fn trail_offset_switches_at_0x3f() {
        // U+4E00 has trail 0 (low half), U+4E2D trail 66 (high half).
        assert_eq!(encode("\u{4E00}"), [0xA4, 0x40]);
        assert_eq!(encode("\u{20AC}"), [0xA3, 0xE1]);
        assert_eq!(encode("\u{FFED}"), [0xF9, 0xFE]);
    }

    #[test]
    fn unmappable_code_point_follows_the_error_mode() {
        let replaced = Encoder::Big5
            .encode("\u{1F600}".chars(), ErrorMode::Replacement)
            .unwrap();
        assert_eq!(replaced, [0xFF, 0xFD]);

        let fatal = Encoder::Big5.encode("\u{1F600}".chars(), ErrorMode::Fatal);
        assert_eq!(fatal.unwrap_err().code_point(), '\u{1F600}');
    }
}
