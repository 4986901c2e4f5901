//! Error types for the protocol layer.
//!
//! Each crate in Keyward defines its own error enum. A `ProtocolError`
//! always means the card text itself was the problem, never the room
//! graph or the directory.

/// Errors that can occur while decoding or encoding key card text.
///
/// None of these are transient: bad card data stays bad, so callers
/// surface them instead of retrying.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProtocolError {
    /// The card text did not split into exactly the two required fields.
    ///
    /// `fields` is how many fields were actually found, which is usually
    /// enough to tell a truncated card from one with a stray delimiter.
    #[error("malformed card: expected 2 fields, found {fields}")]
    MalformedCard { fields: usize },

    /// The card had the right number of fields but one of them was empty.
    #[error("malformed card: {field} is empty")]
    EmptyField { field: &'static str },

    /// A name can't be written onto a card (it contains the delimiter or
    /// is empty), so the encoded card would not decode back to it.
    #[error("cannot encode {field}: {reason}")]
    InvalidField {
        field: &'static str,
        reason: &'static str,
    },
}
