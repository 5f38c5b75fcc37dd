//! Runtime lookup from encoding names and labels to encoders.
//!
//! Every encoding module submits an [`EncoderEntry`] via
//! `inventory::submit!`; this module collects the entries and serves the
//! two lookups the Encoding Standard defines: by canonical name and by
//! label.

use crate::encoder::Encoder;

/// A registered encoder.
///
/// Each encoding module registers one of these (the GB18030 module
/// registers two, one per mode).
pub struct EncoderEntry {
    /// Canonical name from the Encoding Standard (e.g. "shift_jis").
    pub name: &'static str,
    /// The labels the Encoding Standard maps to this encoding.
    pub labels: &'static [&'static str],
    /// The encoder itself.
    pub encoder: Encoder,
}

inventory::collect!(EncoderEntry);

/// Returns an iterator over all registered encoders.
pub fn encoders() -> impl Iterator<Item = &'static EncoderEntry> {
    inventory::iter::<EncoderEntry>.into_iter()
}

/// Looks up an encoder by its canonical name, ASCII case-insensitively.
///
/// No label normalization is applied; unknown names yield `None`.
pub fn encoder_for_exact_name(name: &str) -> Option<Encoder> {
    encoders()
        .find(|entry| entry.name.eq_ignore_ascii_case(name))
        .map(|entry| entry.encoder)
}

/// Normalizes a label to the canonical name of the encoding it denotes.
///
/// Leading and trailing ASCII whitespace is stripped and the remainder
/// matched case-insensitively against the label lists of the Encoding
/// Standard. Labels of encodings outside this crate's family yield
/// `None`.
pub fn standardized_name(label: &str) -> Option<&'static str> {
    let label = label.trim_matches(|c: char| matches!(c, '\t' | '\n' | '\x0C' | '\r' | ' '));
    encoders()
        .find(|entry| entry.labels.iter().any(|l| l.eq_ignore_ascii_case(label)))
        .map(|entry| entry.name)
}

/// Looks up an encoder by any of its Encoding Standard labels.
pub fn encoder_for(label: &str) -> Option<Encoder> {
    encoder_for_exact_name(standardized_name(label)?)
}
