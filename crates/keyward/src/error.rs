//! Unified error type for the Keyward facade.

use keyward_directory::DirectoryError;
use keyward_protocol::ProtocolError;
use keyward_room::RoomError;

/// Top-level error that wraps all crate-specific errors.
///
/// `#[from]` on each variant lets `?` convert sub-crate errors, so code
/// using the `keyward` crate only ever matches on this one type.
#[derive(Debug, thiserror::Error)]
pub enum KeywardError {
    /// The card text was malformed.
    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    /// The room graph was malformed, or a room wasn't found.
    #[error(transparent)]
    Room(#[from] RoomError),

    /// The home cell directory rejected its initialization.
    #[error(transparent)]
    Directory(#[from] DirectoryError),

    /// The layout document isn't valid JSON for a [`SiteLayout`](crate::SiteLayout).
    #[error("layout parse failed: {0}")]
    LayoutJson(#[from] serde_json::Error),

    /// The layout parsed but is inconsistent.
    #[error("invalid layout: {0}")]
    InvalidLayout(String),
}
