//! The home cell directory: which room is each person's own.
//!
//! The directory is written exactly once, by the setup code, and read by
//! every card presentation afterwards. That lifecycle is enforced by
//! `std::sync::OnceLock`:
//!
//! - [`RoomDirectory::set_all`] publishes the whole mapping in one step;
//!   a second call fails with [`DirectoryError::AlreadyInitialized`].
//! - [`RoomDirectory::cell_for`] reads without locking. `OnceLock`
//!   guarantees that once a reader sees the mapping, it sees all of it.
//!
//! There is no global instance. Create one per site and hand it to the
//! components that need it (usually as `Arc<RoomDirectory>`), which keeps
//! tests hermetic and lets several independent sites live in one process.

use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use keyward_protocol::{Identity, RoomId};
use keyward_room::{Room, RoomGraph};

use crate::DirectoryError;

/// Construct-once, read-many mapping from identity to home cell.
#[derive(Debug)]
pub struct RoomDirectory {
    /// The graph every cell id is resolved against.
    graph: Arc<RoomGraph>,

    /// Empty until `set_all`; then frozen.
    cells: OnceLock<HashMap<Identity, RoomId>>,
}

impl RoomDirectory {
    /// Creates an uninitialized directory over `graph`.
    pub fn new(graph: Arc<RoomGraph>) -> Self {
        Self {
            graph,
            cells: OnceLock::new(),
        }
    }

    /// One-time bulk initialization.
    ///
    /// Every target room must exist in the graph; the mapping is checked
    /// before anything is published, so a failed call leaves the directory
    /// uninitialized and it can be retried with corrected data.
    ///
    /// # Errors
    /// - [`DirectoryError::UnknownRoom`] if a cell id isn't in the graph
    /// - [`DirectoryError::AlreadyInitialized`] on any call after the
    ///   first successful one
    pub fn set_all(&self, cells: HashMap<Identity, RoomId>) -> Result<(), DirectoryError> {
        if self.cells.get().is_some() {
            return Err(DirectoryError::AlreadyInitialized);
        }

        if let Some((holder, &room)) = cells.iter().find(|(_, room)| !self.graph.contains(**room)) {
            return Err(DirectoryError::UnknownRoom {
                holder: holder.clone(),
                room,
            });
        }

        let count = cells.len();
        self.cells
            .set(cells)
            .map_err(|_| DirectoryError::AlreadyInitialized)?;

        tracing::info!(cells = count, "room directory initialized");
        Ok(())
    }

    /// Returns the home cell assigned to `identity`, if any.
    ///
    /// `None` covers both "no cell assigned" and "directory not yet
    /// initialized". Neither is an error.
    pub fn cell_for(&self, identity: &Identity) -> Option<&Room> {
        let id = self.cells.get()?.get(identity)?;
        self.graph.room(*id)
    }

    /// Returns `true` once `set_all` has succeeded.
    pub fn is_initialized(&self) -> bool {
        self.cells.get().is_some()
    }

    /// Number of assigned cells (0 before initialization).
    pub fn len(&self) -> usize {
        self.cells.get().map_or(0, HashMap::len)
    }

    /// Returns `true` if no cells are assigned.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The graph this directory resolves cells against.
    pub fn graph(&self) -> &Arc<RoomGraph> {
        &self.graph
    }
}

// =========================================================================
// Tests
// =========================================================================
