//! # Keyward
//!
//! Key card access control over a graph of rooms.
//!
//! A card is presented at a room; the card text is decoded into an
//! [`Identity`](keyward_protocol::Identity); the room answers whether that
//! identity is on its allow-list. Everything else (home cells, reachable
//! rooms, audits) is read-only context that never changes the answer.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use keyward::prelude::*;
//!
//! # fn main() -> Result<(), KeywardError> {
//! let layout = SiteLayout::from_json(&std::fs::read_to_string("site.json").unwrap())?;
//! let site = Site::from_layout(layout)?;
//! let granted = site.present("Ann,Lee", RoomId(1))?;
//! # Ok(())
//! # }
//! ```

mod error;
mod layout;
mod reader;
mod site;

pub use error::KeywardError;
pub use layout::{CellAssignment, RoomLayout, SiteLayout};
pub use reader::{CardAudit, KeyCardReader, ReaderConfig};
pub use site::{Site, SiteBuilder};

/// Everything needed to set up a site and present cards.
pub mod prelude {
    pub use crate::{
        CardAudit, KeyCardReader, KeywardError, ReaderConfig, Site, SiteBuilder, SiteLayout,
    };
    pub use keyward_directory::{DirectoryError, RoomDirectory};
    pub use keyward_protocol::{CardCodec, Identity, ProtocolError, RoomId, TextCardCodec};
    pub use keyward_room::{Room, RoomDetails, RoomError, RoomGraph, reachable_from};
}
