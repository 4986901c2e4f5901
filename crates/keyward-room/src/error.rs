//! Error types for the room layer.

use keyward_protocol::RoomId;

/// Errors that can occur while building or querying the room graph.
///
/// The build-time variants (`DuplicateRoom`, `UnknownRoom`, `SelfLoop`)
/// are setup mistakes. They are reported by
/// [`RoomGraphBuilder::build`](crate::RoomGraphBuilder::build) so that a
/// graph which exists is always well formed, and traversal never has to
/// fail.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RoomError {
    /// No room with this id exists in the graph.
    #[error("room {0} not found")]
    NotFound(RoomId),

    /// Two rooms were added with the same id.
    #[error("room {0} was added twice")]
    DuplicateRoom(RoomId),

    /// An edge refers to a room that was never added.
    #[error("edge {from} -> {to} refers to unknown room {to}")]
    UnknownRoom { from: RoomId, to: RoomId },

    /// A room was connected to itself.
    #[error("room {0} cannot neighbour itself")]
    SelfLoop(RoomId),
}
