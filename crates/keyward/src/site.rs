//! `Site` builder and the card presentation path.
//!
//! This is the entry point for using Keyward. It ties the layers
//! together: card text → protocol (Identity) → room (allow-list) → decision.

use std::collections::HashMap;
use std::sync::Arc;

use keyward_directory::RoomDirectory;
use keyward_protocol::{Identity, RoomId};
use keyward_room::{Room, RoomGraph};

use crate::{KeyCardReader, KeywardError, ReaderConfig, SiteLayout};

/// Builder for a [`Site`].
///
/// # Example
///
/// ```rust
/// use std::collections::HashMap;
///
/// use keyward::prelude::*;
///
/// let ann = Identity::new("Ann", "Lee");
/// let graph = RoomGraph::builder()
///     .add_room(Room::builder(RoomId(1)).allow(ann.clone()).build())
///     .build()
///     .unwrap();
///
/// let site = Site::builder()
///     .graph(graph)
///     .cells(HashMap::from([(ann, RoomId(1))]))
///     .build()
///     .unwrap();
///
/// assert!(site.present("Ann,Lee", RoomId(1)).unwrap());
/// assert!(!site.present("John,Smith", RoomId(1)).unwrap());
/// ```
pub struct SiteBuilder {
    graph: Option<RoomGraph>,
    cells: HashMap<Identity, RoomId>,
    reader_config: ReaderConfig,
}

impl SiteBuilder {
    /// Creates a builder with no rooms, no cells and default reader config.
    pub fn new() -> Self {
        Self {
            graph: None,
            cells: HashMap::new(),
            reader_config: ReaderConfig::default(),
        }
    }

    /// Sets the room graph.
    pub fn graph(mut self, graph: RoomGraph) -> Self {
        self.graph = Some(graph);
        self
    }

    /// Sets the home cell assignments.
    pub fn cells(mut self, cells: HashMap<Identity, RoomId>) -> Self {
        self.cells = cells;
        self
    }

    /// Sets the reader configuration.
    pub fn reader_config(mut self, config: ReaderConfig) -> Self {
        self.reader_config = config;
        self
    }

    /// Freezes the graph, initializes the directory and wires the reader.
    ///
    /// # Errors
    /// Returns [`KeywardError::Directory`] if a cell names a room that
    /// isn't in the graph.
    pub fn build(self) -> Result<Site, KeywardError> {
        let graph = match self.graph {
            Some(graph) => graph,
            None => RoomGraph::builder().build()?,
        };
        let graph = Arc::new(graph);

        let directory = Arc::new(RoomDirectory::new(Arc::clone(&graph)));
        directory.set_all(self.cells)?;

        let reader = KeyCardReader::with_config(Arc::clone(&directory), self.reader_config);

        tracing::info!(rooms = graph.len(), cells = directory.len(), "site ready");
        Ok(Site {
            graph,
            directory,
            reader,
        })
    }
}

impl Default for SiteBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A fully set up access-control site.
///
/// Immutable once built. Share it with `Arc<Site>`; every method takes
/// `&self` and is safe to call from many threads or tasks at once.
#[derive(Debug)]
pub struct Site {
    graph: Arc<RoomGraph>,
    directory: Arc<RoomDirectory>,
    reader: KeyCardReader,
}

impl Site {
    /// Creates a new builder.
    pub fn builder() -> SiteBuilder {
        SiteBuilder::new()
    }

    /// Builds a site from layout data.
    ///
    /// # Errors
    /// Any graph, cell or layout consistency error.
    pub fn from_layout(layout: SiteLayout) -> Result<Self, KeywardError> {
        let (graph, cells) = layout.into_parts()?;
        Self::builder().graph(graph).cells(cells).build()
    }

    /// Handles one card presentation at `room_id`.
    ///
    /// Decodes the card, then asks the target room whether the decoded
    /// identity is on its allow-list. Returns that answer unchanged.
    ///
    /// # Errors
    /// - [`KeywardError::Protocol`] if the card text is malformed
    /// - [`KeywardError::Room`] if there is no room `room_id`
    pub fn present(&self, card_data: &str, room_id: RoomId) -> Result<bool, KeywardError> {
        let identity = self.reader.read(card_data)?;
        let room = self.graph.get(room_id)?;

        let granted = room.allows_entrance(&identity);
        tracing::info!(%room_id, granted, "card presented");
        Ok(granted)
    }

    /// Looks up a room.
    pub fn room(&self, id: RoomId) -> Option<&Room> {
        self.graph.room(id)
    }

    /// The card reader.
    pub fn reader(&self) -> &KeyCardReader {
        &self.reader
    }

    /// The home cell directory.
    pub fn directory(&self) -> &Arc<RoomDirectory> {
        &self.directory
    }

    /// The room graph.
    pub fn graph(&self) -> &Arc<RoomGraph> {
        &self.graph
    }
}
