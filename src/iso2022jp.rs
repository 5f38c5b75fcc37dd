//! ISO-2022-JP encoder.
//!
//! ISO-2022-JP is the one stateful encoding in the family: the byte
//! stream switches between character sets with escape sequences, and the
//! encoder tracks which set is active.
//!
//! # States and escapes
//!
//! - ESC ( B - ASCII (the initial state)
//! - ESC ( J - JIS X 0201 Roman (ASCII with yen sign and overline)
//! - ESC $ B - JIS X 0208
//!
//! The state lives on the stack of a single [`process`] call. When a
//! code point needs a different set, the encoder emits the escape,
//! switches, and goes around again with the same code point; at most two
//! switches happen before the code point lands. A stream that ends
//! outside ASCII is closed with the ASCII-designating escape.

use crate::encoder::{emit, unmappable, ByteSink, Encoder, ErrorMode};
use crate::error::EncodeError;
use crate::index;
use crate::registry::EncoderEntry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Ascii,
    Roman,
    Jis0208,
}

pub(crate) fn process<I, S>(
    input: I,
    error_mode: ErrorMode,
    sink: &mut S,
) -> Result<(), EncodeError<S::Error>>
where
    I: IntoIterator<Item = char>,
    S: ByteSink + ?Sized,
{
    let mut state = State::Ascii;

    for c in input {
        state = process_code_point(c, state, error_mode, sink)?;
    }

    if state != State::Ascii {
        emit(sink, 0x1B)?;
        emit(sink, 0x28)?;
        emit(sink, 0x42)?;
    }

    Ok(())
}

fn process_code_point<S>(
    c: char,
    state: State,
    error_mode: ErrorMode,
    sink: &mut S,
) -> Result<State, EncodeError<S::Error>>
where
    S: ByteSink + ?Sized,
{
    let mut c = c;
    let mut state = state;

    loop {
        let cp = c as u32;

        // Shift Out, Shift In and Escape would corrupt the escape
        // framing; the error policy sees U+FFFD, not the code point.
        if state != State::Jis0208 && matches!(cp, 0x0E | 0x0F | 0x1B) {
            unmappable(error_mode, '\u{FFFD}', sink)?;
            return Ok(state);
        }

        if state == State::Ascii && cp < 0x80 {
            emit(sink, cp as u8)?;
            return Ok(state);
        }

        if state == State::Roman {
            // Roman differs from ASCII only at 0x5C (yen sign) and
            // 0x7E (overline).
            if cp < 0x80 && cp != 0x5C && cp != 0x7E {
                emit(sink, cp as u8)?;
                return Ok(state);
            }
            if c == '\u{A5}' {
                emit(sink, 0x5C)?;
                return Ok(state);
            }
            if c == '\u{203E}' {
                emit(sink, 0x7E)?;
                return Ok(state);
            }
        }

        // An ASCII code point outside the ASCII state drops back first,
        // then goes around again.
        if cp < 0x80 && state != State::Ascii {
            emit(sink, 0x1B)?;
            emit(sink, 0x28)?;
            emit(sink, 0x42)?;
            state = State::Ascii;
            continue;
        }

        if (c == '\u{A5}' || c == '\u{203E}') && state != State::Roman {
            emit(sink, 0x1B)?;
            emit(sink, 0x28)?;
            emit(sink, 0x4A)?;
            state = State::Roman;
            continue;
        }

        if c == '\u{2212}' {
            c = '\u{FF0D}';
        }

        // Half-width katakana folds to its full-width equivalent.
        if ('\u{FF61}'..='\u{FF9F}').contains(&c) {
            c = index::iso_2022_jp_katakana((c as u32 - 0xFF61) as u8);
        }

        match index::jis0208_pointer(c) {
            Some(pointer) => {
                if state != State::Jis0208 {
                    emit(sink, 0x1B)?;
                    emit(sink, 0x24)?;
                    emit(sink, 0x42)?;
                    state = State::Jis0208;
                    continue;
                }
                emit(sink, (pointer / 94 + 0x21) as u8)?;
                emit(sink, (pointer % 94 + 0x21) as u8)?;
                return Ok(state);
            }
            None => {
                if state == State::Jis0208 {
                    // The escape emitted here designates Roman even
                    // though the state continues as ASCII.
                    emit(sink, 0x1B)?;
                    emit(sink, 0x28)?;
                    emit(sink, 0x4A)?;
                    state = State::Ascii;
                    continue;
                }
                unmappable(error_mode, c, sink)?;
                return Ok(state);
            }
        }
    }
}

inventory::submit! {
    EncoderEntry {
        name: "iso-2022-jp",
        labels: &["csiso2022jp", "iso-2022-jp"],
        encoder: Encoder::Iso2022Jp,
    }
}
