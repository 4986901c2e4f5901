//! Site layout: the setup data a site is built from.
//!
//! A layout is what the setup collaborator hands over: rooms with their
//! allow-lists, the edges between them, and each resident's home cell.
//! It's a plain serde model, so it can come from a JSON file or be built
//! in code.
//!
//! ```json
//! {
//!   "rooms": [
//!     { "id": 1, "allowed": [{ "first_name": "Ann", "last_name": "Lee" }] },
//!     { "id": 2 }
//!   ],
//!   "edges": [[1, 2]],
//!   "cells": [{ "holder": { "first_name": "Ann", "last_name": "Lee" }, "room": 1 }]
//! }
//! ```

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use keyward_protocol::{Identity, RoomId};
use keyward_room::{Room, RoomGraph};
use serde::{Deserialize, Serialize};

use crate::KeywardError;

/// The whole site: rooms, edges, cells.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteLayout {
    /// Every room and who may enter it.
    #[serde(default)]
    pub rooms: Vec<RoomLayout>,

    /// Undirected edges, as `[a, b]` pairs.
    #[serde(default)]
    pub edges: Vec<(RoomId, RoomId)>,

    /// Home cell assignments.
    #[serde(default)]
    pub cells: Vec<CellAssignment>,
}

/// One room of a [`SiteLayout`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomLayout {
    pub id: RoomId,
    #[serde(default)]
    pub allowed: Vec<Identity>,
}

/// One home cell assignment of a [`SiteLayout`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellAssignment {
    pub holder: Identity,
    pub room: RoomId,
}

impl SiteLayout {
    /// Parses a layout from JSON.
    ///
    /// # Errors
    /// Returns [`KeywardError::LayoutJson`] if the text isn't a valid layout.
    pub fn from_json(json: &str) -> Result<Self, KeywardError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Builds the room graph and the cell mapping this layout describes.
    ///
    /// # Errors
    /// - [`KeywardError::Room`] if the graph is malformed
    /// - [`KeywardError::InvalidLayout`] if someone is assigned two cells
    pub fn into_parts(self) -> Result<(RoomGraph, HashMap<Identity, RoomId>), KeywardError> {
        let mut builder = RoomGraph::builder();
        for room in self.rooms {
            builder = builder.add_room(Room::builder(room.id).allow_all(room.allowed).build());
        }
        for (a, b) in self.edges {
            builder = builder.connect(a, b);
        }
        let graph = builder.build()?;

        let mut cells = HashMap::with_capacity(self.cells.len());
        for CellAssignment { holder, room } in self.cells {
            match cells.entry(holder) {
                Entry::Vacant(slot) => {
                    slot.insert(room);
                }
                Entry::Occupied(slot) if *slot.get() == room => {}
                Entry::Occupied(slot) => {
                    return Err(KeywardError::InvalidLayout(format!(
                        "card holder assigned to both {} and {}",
                        slot.get(),
                        room
                    )));
                }
            }
        }

        Ok((graph, cells))
    }
}

// =========================================================================
// Tests
// =========================================================================
