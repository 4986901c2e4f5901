//! Home cell directory for Keyward.
//!
//! Maps each [`Identity`](keyward_protocol::Identity) to the room that is
//! their own cell. Absence of a cell is a normal result (visitors).
//!
//! # How it fits in the stack
//!
//! ```text
//! Card reader (above)  ← looks up the card holder's cell for auditing
//!     ↕
//! Directory (this crate)  ← write-once Identity → RoomId mapping
//!     ↕
//! Room layer (below)  ← resolves RoomId to Room
//! ```

mod directory;
mod error;

pub use directory::RoomDirectory;
pub use error::DirectoryError;
