//! Core value types shared by every Keyward layer.
//!
//! Two types live here:
//!
//! - [`Identity`] — who a card belongs to. Every access decision in the
//!   system is ultimately a comparison between two `Identity` values, so
//!   its equality and hashing are the single source of truth.
//! - [`RoomId`] — the numeric id of a room in the access graph.

use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Identity
// ---------------------------------------------------------------------------

/// A person, identified by first and last name.
///
/// `Identity` is a plain value type: it is built once (from card data or
/// setup data), never mutated, and compared by value everywhere.
///
/// ## Equality contract
///
/// `PartialEq`, `Eq`, `Hash` and `Ord` are all *derived* from the same two
/// fields, in the same order. That means:
///
/// - two identities are equal iff both names match exactly (case-sensitive),
/// - equal identities always hash equal,
/// - there is no way to get a value of this type whose comparison disagrees
///   with its names.
///
/// The fields are private. A struct in Rust cannot be subclassed, and
/// without public fields the only ways to obtain an `Identity` are
/// [`Identity::new`] and deserialization, both of which go through the
/// same derived impls. Allow-list lookups (`HashSet::contains`) therefore
/// always see the real names.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Identity {
    first_name: String,
    last_name: String,
}

impl Identity {
    /// Creates an identity from its two name parts.
    ///
    /// Never fails. Validation of *card text* (field count, empty fields)
    /// happens in the codec, not here; setup data is trusted.
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    /// The first name, exactly as decoded.
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// The last name, exactly as decoded.
    pub fn last_name(&self) -> &str {
        &self.last_name
    }
}

/// Human-readable form: `"Ann Lee"`.
impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.first_name, self.last_name)
    }
}

// ---------------------------------------------------------------------------
// RoomId
// ---------------------------------------------------------------------------

/// The unique numeric id of a room.
///
/// Newtype over `u32` so a room id can't be confused with a count or an
/// index. `#[serde(transparent)]` keeps it a bare number in JSON layouts.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct RoomId(pub u32);

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R-{}", self.0)
    }
}

// =========================================================================
// Tests
// =========================================================================
