//! Lookups into the index tables of the Encoding Standard.
//!
//! The heavyweight tables (jis0208, EUC-KR, Big5, the GB18030 two-byte
//! area and its four-byte ranges) come from the `encoding-index-*`
//! crates; this module wraps their reverse lookups behind functions that
//! speak in pointers, and owns the two small rules that have no external
//! home: the ISO-2022-JP katakana index and the Shift_JIS pointer
//! exclusion.

use encoding_index_japanese::jis0208;
use encoding_index_korean::euc_kr;
use encoding_index_simpchinese::{gb18030, gb18030_ranges};
use encoding_index_tradchinese::big5;

/// Sentinel the two-byte index crates return for "no entry".
const NO_POINTER: u16 = 0xFFFF;

/// First pointers of the Big5 region reserved for Hong Kong
/// Supplementary Character Set extensions, which the encoder must never
/// produce: (0xA1 - 0x81) * 157.
const BIG5_HKSCS_END: u16 = (0xA1 - 0x81) * 157;

/// Pointer for `c` in index jis0208.
pub(crate) fn jis0208_pointer(c: char) -> Option<u16> {
    match jis0208::backward(c as u32) {
        NO_POINTER => None,
        pointer => Some(pointer),
    }
}

/// Pointer for `c` in index jis0208 under the Shift_JIS exclusion:
/// pointers 8272..=8835 are reserved slots Shift_JIS cannot encode.
pub(crate) fn shift_jis_pointer(c: char) -> Option<u16> {
    let pointer = jis0208_pointer(c)?;
    if (8272..=8835).contains(&pointer) {
        return None;
    }
    Some(pointer)
}

/// Pointer for `c` in index EUC-KR.
pub(crate) fn euc_kr_pointer(c: char) -> Option<u16> {
    match euc_kr::backward(c as u32) {
        NO_POINTER => None,
        pointer => Some(pointer),
    }
}

/// Pointer for `c` in index Big5, excluding the HKSCS region.
pub(crate) fn big5_pointer(c: char) -> Option<u16> {
    match big5::backward(c as u32) {
        NO_POINTER => None,
        pointer if pointer < BIG5_HKSCS_END => None,
        pointer => Some(pointer),
    }
}

/// Pointer for `c` in the GB18030 two-byte area.
pub(crate) fn gb18030_pointer(c: char) -> Option<u16> {
    match gb18030::backward(c as u32) {
        NO_POINTER => None,
        pointer => Some(pointer),
    }
}

/// Pointer for `c` in index gb18030 ranges, the four-byte area.
///
/// The ranges table maps every scalar value outside the two-byte area
/// except U+E7C7, which is pinned to pointer 7457. Callers must only ask
/// about code points that missed the two-byte lookup.
pub(crate) fn gb18030_ranges_pointer(c: char) -> u32 {
    if c == '\u{E7C7}' {
        return 7457;
    }
    let pointer = gb18030_ranges::backward(c as u32);
    debug_assert_ne!(pointer, u32::MAX, "U+{:04X} missing from gb18030 ranges", c as u32);
    pointer
}

/// Index ISO-2022-JP katakana: the full-width equivalents of the
/// half-width forms U+FF61..=U+FF9F, in offset order.
static ISO_2022_JP_KATAKANA: [char; 63] = [
    '。', '「', '」', '、', '・', 'ヲ', 'ァ', 'ィ', 'ゥ', 'ェ', 'ォ', 'ャ',
    'ュ', 'ョ', 'ッ', 'ー', 'ア', 'イ', 'ウ', 'エ', 'オ', 'カ', 'キ', 'ク',
    'ケ', 'コ', 'サ', 'シ', 'ス', 'セ', 'ソ', 'タ', 'チ', 'ツ', 'テ', 'ト',
    'ナ', 'ニ', 'ヌ', 'ネ', 'ノ', 'ハ', 'ヒ', 'フ', 'ヘ', 'ホ', 'マ', 'ミ',
    'ム', 'メ', 'モ', 'ヤ', 'ユ', 'ヨ', 'ラ', 'リ', 'ル', 'レ', 'ロ', 'ワ',
    'ン', '゛', '゜',
];

/// Full-width katakana for the half-width code point U+FF61 + `offset`.
/// Total for offsets 0..=62.
pub(crate) fn iso_2022_jp_katakana(offset: u8) -> char {
    ISO_2022_JP_KATAKANA[offset as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jis0208_minus_sign_pointer() {
        // U+FF0D sits at row 1, cell 61 of JIS X 0208.
        assert_eq!(jis0208_pointer('\u{FF0D}'), Some(60));
        assert_eq!(jis0208_pointer('\u{3042}'), Some(283));
        assert_eq!(jis0208_pointer('\u{1F600}'), None);
    }

    #[test]
    fn shift_jis_exclusion_range() {
        // The exclusion only bites for pointers 8272..=8835; everything
        // the plain lookup resolves below that range passes through.
        assert_eq!(shift_jis_pointer('\u{FF0D}'), Some(60));
        assert_eq!(shift_jis_pointer('\u{65E5}'), Some(3569));
    }

    #[test]
    fn big5_rejects_hkscs_region() {
        // U+4E2D lives in the main plane, well past the HKSCS region.
        let pointer = big5_pointer('\u{4E2D}').unwrap();
        assert!(pointer >= BIG5_HKSCS_END);
    }

    #[test]
    fn gb18030_ranges_special_cases() {
        assert_eq!(gb18030_ranges_pointer('\u{E7C7}'), 7457);
        // First entry of the ranges table: U+0080 is pointer 0.
        assert_eq!(gb18030_ranges_pointer('\u{80}'), 0);
        assert_eq!(gb18030_ranges_pointer('\u{81}'), 1);
        // Last scalar value.
        assert_eq!(gb18030_ranges_pointer('\u{10FFFF}'), 1237575);
    }

    #[test]
    fn katakana_index_covers_the_half_width_block() {
        assert_eq!(iso_2022_jp_katakana(0), '\u{3002}');
        assert_eq!(iso_2022_jp_katakana(5), '\u{30F2}');
        assert_eq!(iso_2022_jp_katakana(62), '\u{309C}');
    }
}
