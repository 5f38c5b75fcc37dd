//! EUC-KR encoder.
//!
//! EUC-KR as the Encoding Standard defines it is the Unified Hangul Code
//! layout: a flat index of 190 trail values per lead, covering the full
//! 0x81..0xFE lead range. ASCII passes through; everything else is two
//! bytes or unmappable.

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

        let Some(pointer) = index::euc_kr_pointer(c) else {
            unmappable(error_mode, c, sink)?;
            continue;
        };

        emit(sink, (pointer / 190 + 0x81) as u8)?;
        emit(sink, (pointer % 190 + 0x41) as u8)?;
    }

    Ok(())
}

inventory::submit! {
    EncoderEntry {
        name: "euc-kr",
        labels: &[
            "cseuckr",
            "csksc56011987",
            "euc-kr",
            "iso-ir-149",
            "korean",
            "ks_c_5601-1987",
            "ks_c_5601-1989",
            "ksc5601",
            "ksc_5601",
            "windows-949",
        ],
        encoder: Encoder::EucKr,
    }
}
