//! The room graph: every room, keyed by id, with undirected edges.
//!
//! Rooms reference each other cyclically, so nobody can own their
//! neighbours. Instead the graph owns every [`Room`] and edges are stored
//! as [`RoomId`]s. Building happens in two phases:
//!
//! 1. add rooms (each with its frozen allow-list),
//! 2. connect them.
//!
//! [`RoomGraphBuilder::build`] then checks that every edge points at a
//! room that exists. After that the graph is immutable; share it with
//! `Arc<RoomGraph>` and read it from as many threads as you like.

use std::collections::BTreeMap;

use keyward_protocol::RoomId;

use crate::{Room, RoomError};

/// An immutable, validated graph of rooms.
#[derive(Debug)]
pub struct RoomGraph {
    /// `BTreeMap` so iteration is in id order, which keeps logs and test
    /// expectations stable.
    rooms: BTreeMap<RoomId, Room>,
}

impl RoomGraph {
    /// Starts a new, empty builder.
    pub fn builder() -> RoomGraphBuilder {
        RoomGraphBuilder::default()
    }

    /// Looks up a room by id.
    pub fn room(&self, id: RoomId) -> Option<&Room> {
        self.rooms.get(&id)
    }

    /// Like [`room`](Self::room), but a missing room is an error.
    pub fn get(&self, id: RoomId) -> Result<&Room, RoomError> {
        self.room(id).ok_or(RoomError::NotFound(id))
    }

    /// Returns `true` if a room with this id exists.
    pub fn contains(&self, id: RoomId) -> bool {
        self.rooms.contains_key(&id)
    }

    /// All rooms, in ascending id order.
    pub fn rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms.values()
    }

    /// Number of rooms.
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    /// Returns `true` if the graph has no rooms.
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}

// ---------------------------------------------------------------------------
// RoomGraphBuilder
// ---------------------------------------------------------------------------

/// Two-phase builder for [`RoomGraph`].
///
/// Errors are collected lazily: `add_room` and `connect` never fail, and
/// [`build`](Self::build) reports the first problem it finds. This keeps
/// setup code a straight chain of calls.
///
/// ```rust
/// use keyward_protocol::RoomId;
/// use keyward_room::{Room, RoomGraph};
///
/// let graph = RoomGraph::builder()
///     .add_room(Room::builder(RoomId(1)).build())
///     .add_room(Room::builder(RoomId(2)).build())
///     .connect(RoomId(1), RoomId(2))
///     .build()
///     .unwrap();
/// assert_eq!(graph.get(RoomId(2)).unwrap().neighbours(), &[RoomId(1)]);
/// ```
#[derive(Debug, Default)]
pub struct RoomGraphBuilder {
    rooms: BTreeMap<RoomId, Room>,
    edges: Vec<(RoomId, RoomId)>,
    duplicate: Option<RoomId>,
}

impl RoomGraphBuilder {
    /// Adds a room. Adding the same id twice makes `build` fail.
    pub fn add_room(mut self, room: Room) -> Self {
        let id = room.id();
        if self.rooms.insert(id, room).is_some() && self.duplicate.is_none() {
            self.duplicate = Some(id);
        }
        self
    }

    /// Connects two rooms in both directions. Repeating an edge is a no-op.
    pub fn connect(mut self, a: RoomId, b: RoomId) -> Self {
        self.edges.push((a, b));
        self
    }

    /// Validates the edges and freezes the graph.
    ///
    /// # Errors
    /// - [`RoomError::DuplicateRoom`] if an id was added twice
    /// - [`RoomError::SelfLoop`] if a room was connected to itself
    /// - [`RoomError::UnknownRoom`] if an edge names a room never added
    pub fn build(mut self) -> Result<RoomGraph, RoomError> {
        if let Some(id) = self.duplicate {
            return Err(RoomError::DuplicateRoom(id));
        }

        for &(a, b) in &self.edges {
            if a == b {
                return Err(RoomError::SelfLoop(a));
            }
            for (from, to) in [(a, b), (b, a)] {
                if !self.rooms.contains_key(&to) {
                    return Err(RoomError::UnknownRoom { from, to });
                }
            }
        }

        for (a, b) in self.edges {
            // Both ends were checked above.
            if let Some(room) = self.rooms.get_mut(&a) {
                room.push_neighbour(b);
            }
            if let Some(room) = self.rooms.get_mut(&b) {
                room.push_neighbour(a);
            }
        }

        tracing::debug!(rooms = self.rooms.len(), "room graph built");
        Ok(RoomGraph { rooms: self.rooms })
    }
}

// =========================================================================
// Tests
// =========================================================================
