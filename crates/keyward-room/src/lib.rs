//! Rooms and the access graph for Keyward.
//!
//! Each room guards entry with a fixed allow-list and is connected to its
//! neighbours in an undirected, possibly cyclic graph.
//!
//! # Key types
//!
//! - [`Room`] — id, frozen allow-list, neighbour ids
//! - [`RoomBuilder`] — the only way to give a room its allow-list
//! - [`RoomDetails`] — the explicitly requested, name-revealing view
//! - [`RoomGraph`] / [`RoomGraphBuilder`] — two-phase, validated graph
//! - [`reachable_from`] — breadth-first enumeration of reachable rooms
//! - [`RoomError`] — graph build and lookup errors

mod error;
mod graph;
mod room;
mod traversal;

pub use error::RoomError;
pub use graph::{RoomGraph, RoomGraphBuilder};
pub use room::{Room, RoomBuilder, RoomDetails};
pub use traversal::reachable_from;
