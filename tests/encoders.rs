//! Conformance tests across the encoder family.
//!
//! Per-encoder behavior that every member of the family must share is
//! macro-generated; the concrete byte-level scenarios from the Encoding
//! Standard follow as plain tests.

use paste::paste;
use textcodec::{
    encoder_for, encoder_for_exact_name, EncodeError, Encoder, ErrorMode, EscapeHint,
};

// =============================================================================
// Shared behavior, generated per encoder
// =============================================================================

macro_rules! test_encoder_basics {
    ($name:ident, $encoder:expr, $canonical:literal) => {
        paste! {
            mod [<$name _basics>] {
                use super::*;

                #[test]
                fn registered_under_its_canonical_name() {
                    assert_eq!(encoder_for_exact_name($canonical), Some($encoder));
                    assert_eq!($encoder.name(), $canonical);
                }

                #[test]
                fn empty_input_produces_no_bytes() {
                    let bytes = $encoder.encode("".chars(), ErrorMode::Fatal).unwrap();
                    assert!(bytes.is_empty());
                }

                #[test]
                fn ascii_is_transparent() {
                    // U+000E, U+000F and U+001B are the ISO-2022-JP
                    // escape-sensitive code points; every other ASCII
                    // code point is a single identical byte everywhere.
                    for b in 0u8..0x80 {
                        if matches!(b, 0x0E | 0x0F | 0x1B) {
                            continue;
                        }
                        let c = b as char;
                        let bytes = $encoder.encode([c], ErrorMode::Fatal).unwrap();
                        assert_eq!(bytes, [b], "U+{:04X}", b);
                    }
                }

                #[test]
                fn first_sink_error_aborts() {
                    let mut attempts = 0;
                    let mut sink = |_: u8, _: EscapeHint| -> Result<(), &'static str> {
                        attempts += 1;
                        Err("refused")
                    };
                    let result = $encoder.process("AB".chars(), ErrorMode::Fatal, &mut sink);
                    assert!(matches!(result, Err(EncodeError::Sink("refused"))));
                    assert_eq!(attempts, 1);
                }

                #[test]
                fn replacement_mode_never_fails() {
                    // A code point either encodes or becomes 0xFF 0xFD;
                    // the stream always continues.
                    let bytes = $encoder
                        .encode("a\u{1F600}z".chars(), ErrorMode::Replacement)
                        .unwrap();
                    assert_eq!(*bytes.first().unwrap(), b'a');
                    assert_eq!(*bytes.last().unwrap(), b'z');
                }
            }
        }
    };
}

test_encoder_basics!(utf8, Encoder::Utf8, "utf-8");
test_encoder_basics!(euc_jp, Encoder::EucJp, "euc-jp");
test_encoder_basics!(iso2022jp, Encoder::Iso2022Jp, "iso-2022-jp");
test_encoder_basics!(shift_jis, Encoder::ShiftJis, "shift_jis");
test_encoder_basics!(euc_kr, Encoder::EucKr, "euc-kr");
test_encoder_basics!(big5, Encoder::Big5, "big5");
test_encoder_basics!(gbk, Encoder::Gbk, "gbk");
test_encoder_basics!(gb18030, Encoder::Gb18030, "gb18030");

// =============================================================================
// Byte-level scenarios
// =============================================================================

#[test]
fn utf8_mixed_widths() {
    let bytes = Encoder::Utf8
        .encode("A\u{E9}\u{20AC}\u{1F600}".chars(), ErrorMode::Fatal)
        .unwrap();
    assert_eq!(
        bytes,
        [0x41, 0xC3, 0xA9, 0xE2, 0x82, 0xAC, 0xF0, 0x9F, 0x98, 0x80]
    );
}

#[test]
fn euc_jp_fixups() {
    let bytes = Encoder::EucJp
        .encode("A\u{A5}\u{203E}\u{FF66}".chars(), ErrorMode::Fatal)
        .unwrap();
    assert_eq!(bytes, [0x41, 0x5C, 0x7E, 0x8E, 0xA6]);
}

#[test]
fn shift_jis_minus_sign() {
    let bytes = Encoder::ShiftJis
        .encode("\u{2212}".chars(), ErrorMode::Fatal)
        .unwrap();
    assert_eq!(bytes, [0x81, 0x7C]);
}

#[test]
fn iso_2022_jp_escape_framing() {
    let bytes = Encoder::Iso2022Jp
        .encode("\u{3042}A".chars(), ErrorMode::Fatal)
        .unwrap();
    assert_eq!(bytes, [0x1B, 0x24, 0x42, 0x24, 0x22, 0x1B, 0x28, 0x42, 0x41]);
}

#[test]
fn iso_2022_jp_restores_ascii_iff_the_stream_left_it() {
    let ascii_only = Encoder::Iso2022Jp
        .encode("plain".chars(), ErrorMode::Fatal)
        .unwrap();
    assert!(!ascii_only.windows(3).any(|w| w == [0x1B, 0x28, 0x42]));

    let with_kanji = Encoder::Iso2022Jp
        .encode("\u{65E5}".chars(), ErrorMode::Fatal)
        .unwrap();
    assert_eq!(&with_kanji[with_kanji.len() - 3..], [0x1B, 0x28, 0x42]);
}

#[test]
fn gb18030_euro_two_byte_form() {
    let bytes = Encoder::Gb18030
        .encode("\u{20AC}".chars(), ErrorMode::Fatal)
        .unwrap();
    assert_eq!(bytes, [0xA2, 0xE3]);
}

#[test]
fn gbk_euro_single_byte() {
    let bytes = Encoder::Gbk
        .encode("\u{20AC}".chars(), ErrorMode::Fatal)
        .unwrap();
    assert_eq!(bytes, [0x80]);
}

#[test]
fn gb18030_pinned_range_pointer() {
    let bytes = Encoder::Gb18030
        .encode("\u{E7C7}".chars(), ErrorMode::Fatal)
        .unwrap();
    assert_eq!(bytes, [0x81, 0x35, 0xF4, 0x37]);
}

#[test]
fn html_error_mode_writes_a_numeric_character_reference() {
    let bytes = Encoder::EucJp
        .encode("\u{1F600}".chars(), ErrorMode::Html)
        .unwrap();
    assert_eq!(bytes, b"&#128512;");

    // The digit span is the decimal representation, nothing more.
    assert!(bytes.starts_with(b"&#") && bytes.ends_with(b";"));
    let digits = &bytes[2..bytes.len() - 1];
    assert!(digits.iter().all(u8::is_ascii_digit));
    assert_eq!(digits, b"128512");
}

#[test]
fn replacement_error_mode_marks_bytes_for_escaping() {
    let mut written = Vec::new();
    let mut sink = |byte: u8, escape: EscapeHint| {
        written.push((byte, escape));
        Ok::<_, core::convert::Infallible>(())
    };
    Encoder::EucJp
        .process("a\u{1F600}".chars(), ErrorMode::Replacement, &mut sink)
        .unwrap();
    assert_eq!(
        written,
        [
            (b'a', EscapeHint::No),
            (0xFF, EscapeHint::Always),
            (0xFD, EscapeHint::Always),
        ]
    );
}

#[test]
fn fatal_error_mode_aborts_with_the_code_point() {
    let err = Encoder::Gb18030
        .encode("\u{E5E5}".chars(), ErrorMode::Fatal)
        .unwrap_err();
    assert_eq!(err.code_point(), '\u{E5E5}');
}

#[test]
fn sink_failure_leaves_the_stream_truncated_at_that_byte() {
    let mut written = Vec::new();
    let mut sink = |byte: u8, _: EscapeHint| -> Result<(), &'static str> {
        if written.len() == 3 {
            return Err("full");
        }
        written.push(byte);
        Ok(())
    };
    let result = Encoder::EucJp.process("\u{65E5}\u{672C}".chars(), ErrorMode::Fatal, &mut sink);
    assert!(matches!(result, Err(EncodeError::Sink("full"))));
    assert_eq!(written, [0xC6, 0xFC, 0xCB]);
}

#[test]
fn labels_resolve_through_encoder_for() {
    assert_eq!(encoder_for("UNICODE-1-1-UTF-8"), Some(Encoder::Utf8));
    assert_eq!(encoder_for(" ms932\t"), Some(Encoder::ShiftJis));
    assert_eq!(encoder_for("csiso2022jp"), Some(Encoder::Iso2022Jp));
    assert_eq!(encoder_for("x-euc-jp"), Some(Encoder::EucJp));
    assert_eq!(encoder_for("korean"), Some(Encoder::EucKr));
    assert_eq!(encoder_for("cn-big5"), Some(Encoder::Big5));
    assert_eq!(encoder_for("iso-ir-58"), Some(Encoder::Gbk));
    assert_eq!(encoder_for("gb18030"), Some(Encoder::Gb18030));
    assert_eq!(encoder_for("replacement"), None);
}
