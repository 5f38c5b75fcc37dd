//! The encoder capability shared by all encodings in this crate.
//!
//! An [`Encoder`] consumes a stream of Unicode scalar values and pushes
//! the encoded bytes into a caller-supplied [`ByteSink`], one byte at a
//! time. The sink may fail on any byte; the first failure aborts the
//! encoder at that byte boundary with the sink's error propagated
//! verbatim. Code points the target encoding cannot represent are
//! handled by a single shared error policy selected with [`ErrorMode`].

use crate::error::{EncodeError, FatalEncodingError};

/// How an encoder reacts to a code point the target encoding cannot
/// represent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorMode {
    /// Emit the two bytes `0xFF 0xFD` (the UTF-8 encoding of U+FFFD),
    /// marked [`EscapeHint::Always`] so an escaping caller keeps them
    /// out of band.
    Replacement,
    /// Emit an HTML numeric character reference, e.g. `&#128512;`.
    Html,
    /// Abort with a [`FatalEncodingError`].
    Fatal,
}

/// Advisory flag attached to every byte an encoder emits.
///
/// [`Always`](EscapeHint::Always) marks bytes a percent-encoding caller
/// must escape unconditionally (the replacement bytes and the `&`, `#`,
/// `;` framing of a numeric character reference); [`No`](EscapeHint::No)
/// marks ordinary output. The encoder itself never escapes anything, and
/// callers without an escaping layer are free to ignore the flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EscapeHint {
    /// The byte must be percent-escaped regardless of its value.
    Always,
    /// Ordinary output.
    No,
}

/// Destination for encoder output, invoked once per byte.
///
/// Implemented for `FnMut(u8, EscapeHint) -> Result<(), E>` closures and
/// for `Vec<u8>` (an infallible collector that drops the hint).
pub trait ByteSink {
    /// The sink's own failure type. The first failure aborts encoding.
    type Error;

    /// Accepts one output byte.
    fn write_byte(&mut self, byte: u8, escape: EscapeHint) -> Result<(), Self::Error>;
}

impl<E, F> ByteSink for F
where
    F: FnMut(u8, EscapeHint) -> Result<(), E>,
{
    type Error = E;

    #[inline]
    fn write_byte(&mut self, byte: u8, escape: EscapeHint) -> Result<(), E> {
        self(byte, escape)
    }
}

impl ByteSink for Vec<u8> {
    type Error = core::convert::Infallible;

    #[inline]
    fn write_byte(&mut self, byte: u8, _escape: EscapeHint) -> Result<(), Self::Error> {
        self.push(byte);
        Ok(())
    }
}

/// A handle to one of the encoders of the WHATWG Encoding Standard.
///
/// Encoders are plain values: they hold no buffers and no state between
/// [`process`](Encoder::process) calls (the ISO-2022-JP escape state
/// lives on the stack of a single call), so a handle can be copied
/// freely and shared between threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Encoder {
    /// UTF-8.
    Utf8,
    /// EUC-JP.
    EucJp,
    /// ISO-2022-JP, the only stateful encoder in the family.
    Iso2022Jp,
    /// Shift_JIS.
    ShiftJis,
    /// EUC-KR.
    EucKr,
    /// Big5.
    Big5,
    /// GBK: the GB18030 byte layout without the four-byte form.
    Gbk,
    /// GB18030.
    Gb18030,
}

impl Encoder {
    /// Returns the canonical name from the Encoding Standard.
    pub const fn name(self) -> &'static str {
        match self {
            Encoder::Utf8 => "utf-8",
            Encoder::EucJp => "euc-jp",
            Encoder::Iso2022Jp => "iso-2022-jp",
            Encoder::ShiftJis => "shift_jis",
            Encoder::EucKr => "euc-kr",
            Encoder::Big5 => "big5",
            Encoder::Gbk => "gbk",
            Encoder::Gb18030 => "gb18030",
        }
    }

    /// Encodes `input`, pushing every output byte into `sink` in strict
    /// left-to-right order.
    ///
    /// The first sink error aborts immediately and is returned as
    /// [`EncodeError::Sink`]. Under [`ErrorMode::Fatal`] an unmappable
    /// code point aborts with [`EncodeError::Fatal`]; under the other
    /// two modes unmappable code points produce replacement output and
    /// the stream continues.
    pub fn process<I, S>(
        self,
        input: I,
        error_mode: ErrorMode,
        sink: &mut S,
    ) -> Result<(), EncodeError<S::Error>>
    where
        I: IntoIterator<Item = char>,
        S: ByteSink + ?Sized,
    {
        match self {
            Encoder::Utf8 => crate::utf8::process(input, error_mode, sink),
            Encoder::EucJp => crate::euc_jp::process(input, error_mode, sink),
            Encoder::Iso2022Jp => crate::iso2022jp::process(input, error_mode, sink),
            Encoder::ShiftJis => crate::shift_jis::process(input, error_mode, sink),
            Encoder::EucKr => crate::euc_kr::process(input, error_mode, sink),
            Encoder::Big5 => crate::big5::process(input, error_mode, sink),
            Encoder::Gbk => crate::gb18030::process(input, error_mode, sink, true),
            Encoder::Gb18030 => crate::gb18030::process(input, error_mode, sink, false),
        }
    }

    /// Encodes `input` into a fresh byte vector, dropping escape hints.
    ///
    /// # Example
    ///
    /// ```
    /// use textcodec::{Encoder, ErrorMode};
    ///
    /// let bytes = Encoder::EucJp.encode("A\u{00A5}".chars(), ErrorMode::Fatal).unwrap();
    /// assert_eq!(bytes, [0x41, 0x5C]);
    /// ```
    pub fn encode<I>(self, input: I, error_mode: ErrorMode) -> Result<Vec<u8>, FatalEncodingError>
    where
        I: IntoIterator<Item = char>,
    {
        let mut output = Vec::new();
        match self.process(input, error_mode, &mut output) {
            Ok(()) => Ok(output),
            Err(EncodeError::Fatal(e)) => Err(e),
            Err(EncodeError::Sink(e)) => match e {},
        }
    }
}

/// Forwards one ordinary byte to the sink.
#[inline]
pub(crate) fn emit<S>(sink: &mut S, byte: u8) -> Result<(), EncodeError<S::Error>>
where
    S: ByteSink + ?Sized,
{
    sink.write_byte(byte, EscapeHint::No).map_err(EncodeError::Sink)
}

#[inline]
fn emit_escaped<S>(sink: &mut S, byte: u8) -> Result<(), EncodeError<S::Error>>
where
    S: ByteSink + ?Sized,
{
    sink.write_byte(byte, EscapeHint::Always).map_err(EncodeError::Sink)
}

/// Reports a code point the target encoding cannot represent.
///
/// Every encoder funnels its misses through here, so the three modes
/// behave identically across the family.
pub(crate) fn unmappable<S>(
    error_mode: ErrorMode,
    code_point: char,
    sink: &mut S,
) -> Result<(), EncodeError<S::Error>>
where
    S: ByteSink + ?Sized,
{
    match error_mode {
        ErrorMode::Replacement => {
            emit_escaped(sink, 0xFF)?;
            emit_escaped(sink, 0xFD)?;
            Ok(())
        }
        ErrorMode::Html => {
            emit_escaped(sink, 0x26)?; // &
            emit_escaped(sink, 0x23)?; // #
            // Shortest decimal form, most significant digit first.
            // U+10FFFF is seven digits, so the scratch never grows.
            let mut digits = [0u8; 7];
            let mut len = 0;
            let mut value = code_point as u32;
            loop {
                digits[len] = 0x30 + (value % 10) as u8;
                len += 1;
                value /= 10;
                if value == 0 {
                    break;
                }
            }
            for &digit in digits[..len].iter().rev() {
                emit(sink, digit)?;
            }
            emit_escaped(sink, 0x3B)?; // ;
            Ok(())
        }
        ErrorMode::Fatal => Err(EncodeError::Fatal(FatalEncodingError::new(code_point))),
    }
}
