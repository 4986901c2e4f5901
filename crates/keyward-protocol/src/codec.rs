//! Card codec: turning raw key card text into an [`Identity`] and back.
//!
//! The reader hardware hands us a line of text. The protocol layer doesn't
//! care where it came from; it only needs something implementing
//! [`CardCodec`] to turn it into an `Identity`. [`TextCardCodec`] is the
//! agreed format, `first,last`.
//!
//! Card data is untrusted input. The codec does not authenticate it, but
//! it must parse it deterministically: the same text always yields the
//! same `Identity`, or the same error.

use crate::{Identity, ProtocolError};

/// The field separator of the card text format.
pub const CARD_DELIMITER: char = ',';

/// Something that can decode card text into an identity and encode it back.
///
/// - `Send + Sync` → one codec instance is shared by every concurrent
///   card presentation.
/// - `'static` → it's stored inside long-lived readers.
pub trait CardCodec: Send + Sync + 'static {
    /// Decodes raw card text into the identity it names.
    ///
    /// # Errors
    /// - [`ProtocolError::MalformedCard`] if the field count is wrong
    /// - [`ProtocolError::EmptyField`] if a name is empty
    fn decode(&self, card_data: &str) -> Result<Identity, ProtocolError>;

    /// Writes an identity in card format.
    ///
    /// # Errors
    /// Returns [`ProtocolError::InvalidField`] if a name can't be
    /// represented (contains the delimiter, or is empty).
    fn encode(&self, identity: &Identity) -> Result<String, ProtocolError>;
}

// ---------------------------------------------------------------------------
// TextCardCodec
// ---------------------------------------------------------------------------

/// The `first,last` text format.
///
/// - Splits on every [`CARD_DELIMITER`]; exactly two fields are accepted.
/// - No trimming, no escaping: `" John,Smith"` decodes to a first name
///   with a leading space, which won't match `"John"`.
///
/// ```rust
/// use keyward_protocol::{CardCodec, Identity, TextCardCodec};
///
/// let codec = TextCardCodec;
/// let identity = codec.decode("John,Smith").unwrap();
/// assert_eq!(identity, Identity::new("John", "Smith"));
/// assert!(codec.decode("OnlyOneField").is_err());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TextCardCodec;

impl CardCodec for TextCardCodec {
    fn decode(&self, card_data: &str) -> Result<Identity, ProtocolError> {
        let fields: Vec<&str> = card_data.split(CARD_DELIMITER).collect();

        let [first, last] = fields.as_slice() else {
            tracing::debug!(fields = fields.len(), "rejected malformed card");
            return Err(ProtocolError::MalformedCard {
                fields: fields.len(),
            });
        };

        if first.is_empty() {
            return Err(ProtocolError::EmptyField {
                field: "first name",
            });
        }
        if last.is_empty() {
            return Err(ProtocolError::EmptyField { field: "last name" });
        }

        Ok(Identity::new(*first, *last))
    }

    fn encode(&self, identity: &Identity) -> Result<String, ProtocolError> {
        check_encodable("first name", identity.first_name())?;
        check_encodable("last name", identity.last_name())?;

        Ok(format!(
            "{}{CARD_DELIMITER}{}",
            identity.first_name(),
            identity.last_name()
        ))
    }
}

fn check_encodable(field: &'static str, value: &str) -> Result<(), ProtocolError> {
    if value.is_empty() {
        return Err(ProtocolError::InvalidField {
            field,
            reason: "empty",
        });
    }
    if value.contains(CARD_DELIMITER) {
        return Err(ProtocolError::InvalidField {
            field,
            reason: "contains the card delimiter",
        });
    }
    Ok(())
}

// =========================================================================
// Tests
// =========================================================================
