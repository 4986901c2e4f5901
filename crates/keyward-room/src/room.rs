//! A single room: its id, its allow-list, and its neighbour edges.
//!
//! A room is built once with [`Room::builder`] and then frozen. There is
//! no API that changes a room's allow-list after `build()`; the only
//! mutation that ever happens is the graph builder recording neighbour
//! edges, and that is crate-private and finishes before the graph is
//! handed out.
//!
//! # Logging
//!
//! `Display` and `Debug` for [`Room`] deliberately show only the id, the
//! neighbour ids and the *size* of the allow-list. Names of allowed people
//! are rendered only by [`RoomDetails`], which you get by calling
//! [`Room::detailed`] on purpose. Generic `tracing` fields like `%room` or
//! `?room` therefore never leak who may enter.

use std::collections::HashSet;
use std::fmt;

use keyward_protocol::{Identity, RoomId};

// ---------------------------------------------------------------------------
// Room
// ---------------------------------------------------------------------------

/// A node in the access graph.
pub struct Room {
    id: RoomId,
    allowed: HashSet<Identity>,
    neighbours: Vec<RoomId>,
}

impl Room {
    /// Starts building a room with the given id and an empty allow-list.
    pub fn builder(id: RoomId) -> RoomBuilder {
        RoomBuilder {
            id,
            allowed: HashSet::new(),
        }
    }

    /// The room's id.
    pub fn id(&self) -> RoomId {
        self.id
    }

    /// Returns `true` iff `identity` is on this room's allow-list.
    ///
    /// This is the only access decision in the system. It is a plain
    /// `HashSet` lookup, so it is O(1) expected and relies entirely on
    /// `Identity`'s derived `Eq` + `Hash`.
    pub fn allows_entrance(&self, identity: &Identity) -> bool {
        self.allowed.contains(identity)
    }

    /// Ids of the adjacent rooms, in the order the edges were added.
    pub fn neighbours(&self) -> &[RoomId] {
        &self.neighbours
    }

    /// How many identities may enter. Safe to log.
    pub fn allowed_count(&self) -> usize {
        self.allowed.len()
    }

    /// Explicitly requests the allow-list-revealing representation.
    ///
    /// Only call this where showing names is intended (an operator
    /// console, an audit export). Never pass it to generic logging.
    pub fn detailed(&self) -> RoomDetails<'_> {
        RoomDetails { room: self }
    }

    /// Records an edge. Only the graph builder calls this, and only
    /// before the graph is built.
    pub(crate) fn push_neighbour(&mut self, neighbour: RoomId) {
        if !self.neighbours.contains(&neighbour) {
            self.neighbours.push(neighbour);
        }
    }
}

/// Default representation: `room R-3`. No names.
impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "room {}", self.id)
    }
}

/// Hand-written so that `{:?}` is as safe to log as `{}`.
impl fmt::Debug for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Room")
            .field("id", &self.id)
            .field("neighbours", &self.neighbours)
            .field("allowed_count", &self.allowed.len())
            .finish()
    }
}

// ---------------------------------------------------------------------------
// RoomBuilder
// ---------------------------------------------------------------------------

/// Collects a room's allow-list before the room is frozen.
///
/// ```rust
/// use keyward_protocol::{Identity, RoomId};
/// use keyward_room::Room;
///
/// let room = Room::builder(RoomId(1))
///     .allow(Identity::new("Ann", "Lee"))
///     .build();
/// assert!(room.allows_entrance(&Identity::new("Ann", "Lee")));
/// ```
#[derive(Debug, Clone)]
pub struct RoomBuilder {
    id: RoomId,
    allowed: HashSet<Identity>,
}

impl RoomBuilder {
    /// Adds one identity to the allow-list. Duplicates collapse.
    pub fn allow(mut self, identity: Identity) -> Self {
        self.allowed.insert(identity);
        self
    }

    /// Adds every identity from `identities`.
    pub fn allow_all(mut self, identities: impl IntoIterator<Item = Identity>) -> Self {
        self.allowed.extend(identities);
        self
    }

    /// Freezes the allow-list.
    pub fn build(self) -> Room {
        Room {
            id: self.id,
            allowed: self.allowed,
            neighbours: Vec::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// RoomDetails
// ---------------------------------------------------------------------------

/// The detailed, name-revealing view of a room.
///
/// Renders as `room R-3 allows [Ann Lee, John Smith]`, names sorted so the
/// output is stable.
pub struct RoomDetails<'a> {
    room: &'a Room,
}

impl RoomDetails<'_> {
    /// The allowed identities in sorted order.
    pub fn allowed(&self) -> Vec<&Identity> {
        let mut allowed: Vec<&Identity> = self.room.allowed.iter().collect();
        allowed.sort();
        allowed
    }
}

impl fmt::Display for RoomDetails<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} allows [", self.room)?;
        for (i, identity) in self.allowed().into_iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{identity}")?;
        }
        f.write_str("]")
    }
}

// =========================================================================
// Tests
// =========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn ann() -> Identity {
        Identity::new("Ann", "Lee")
    }

    #[test]
    fn test_allows_entrance_listed_identity_returns_true() {
        let room = Room::builder(RoomId(1)).allow(ann()).build();
        assert!(room.allows_entrance(&Identity::new("Ann", "Lee")));
    }

    #[test]
    fn test_allows_entrance_unlisted_identity_returns_false() {
        let room = Room::builder(RoomId(1)).allow(ann()).build();
        assert!(!room.allows_entrance(&Identity::new("John", "Smith")));
        assert!(!room.allows_entrance(&Identity::new("ann", "lee")));
        assert!(!room.allows_entrance(&Identity::new("", "")));
    }

    #[test]
    fn test_allows_entrance_empty_allow_list_denies_everyone() {
        let room = Room::builder(RoomId(1)).build();
        assert!(!room.allows_entrance(&ann()));
        assert_eq!(room.allowed_count(), 0);
    }

    #[test]
    fn test_builder_duplicate_identities_collapse() {
        let room = Room::builder(RoomId(1))
            .allow(ann())
            .allow_all([ann(), Identity::new("John", "Smith")])
            .build();
        assert_eq!(room.allowed_count(), 2);
    }

    #[test]
    fn test_display_does_not_leak_allowed_names() {
        let room = Room::builder(RoomId(4)).allow(ann()).build();

        let shown = room.to_string();
        assert_eq!(shown, "room R-4");
        assert!(!shown.contains("Ann"));
        assert!(!shown.contains("Lee"));
    }

    #[test]
    fn test_debug_does_not_leak_allowed_names() {
        let room = Room::builder(RoomId(4)).allow(ann()).build();

        let shown = format!("{room:?}");
        assert!(shown.contains("allowed_count: 1"));
        assert!(!shown.contains("Ann"));
        assert!(!shown.contains("Lee"));
    }

    #[test]
    fn test_detailed_renders_sorted_names() {
        let room = Room::builder(RoomId(4))
            .allow(Identity::new("John", "Smith"))
            .allow(ann())
            .build();

        let shown = room.detailed().to_string();
        assert_eq!(shown, "room R-4 allows [Ann Lee, John Smith]");
    }

    #[test]
    fn test_push_neighbour_ignores_repeat_edges() {
        let mut room = Room::builder(RoomId(1)).build();
        room.push_neighbour(RoomId(2));
        room.push_neighbour(RoomId(2));
        room.push_neighbour(RoomId(3));
        assert_eq!(room.neighbours(), &[RoomId(2), RoomId(3)]);
    }
}
