//! Identity values and the key card format for Keyward.
//!
//! This crate defines what a card *says*:
//!
//! - **Types** ([`Identity`], [`RoomId`]) — the values every other layer
//!   compares and stores.
//! - **Codec** ([`CardCodec`] trait, [`TextCardCodec`]) — how raw card
//!   text becomes an `Identity`.
//! - **Errors** ([`ProtocolError`]) — what can be wrong with card text.
//!
//! # Architecture
//!
//! ```text
//! Card text → Protocol (Identity) → Room (allows_entrance) → decision
//! ```
//!
//! The protocol layer knows nothing about rooms or directories.

mod codec;
mod error;
mod types;

pub use codec::{CARD_DELIMITER, CardCodec, TextCardCodec};
pub use error::ProtocolError;
pub use types::{Identity, RoomId};
