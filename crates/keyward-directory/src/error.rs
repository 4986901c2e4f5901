//! Error types for the directory layer.

use keyward_protocol::{Identity, RoomId};

/// Errors that can occur while initializing the home cell directory.
///
/// Lookups never fail: an identity without a cell is a normal outcome
/// (visitor cards), reported as `None`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DirectoryError {
    /// [`set_all`](crate::RoomDirectory::set_all) was already called.
    /// The directory is write-once.
    #[error("room directory is already initialized")]
    AlreadyInitialized,

    /// A cell assignment names a room that isn't in the graph.
    #[error("cell for {holder} refers to unknown room {room}")]
    UnknownRoom { holder: Identity, room: RoomId },
}
