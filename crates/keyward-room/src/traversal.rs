//! Breadth-first enumeration of the rooms reachable from a start room.

use std::collections::{BTreeMap, HashSet, VecDeque};

use keyward_protocol::RoomId;

use crate::{Room, RoomGraph};

/// Returns every room reachable from `start` through one or more edges,
/// keyed by id.
///
/// - `None` start → empty map.
/// - The start room itself is never in the result, even when a cycle
///   leads back to it.
/// - Each room appears exactly once, however many paths reach it.
///
/// A room is marked visited when it is *enqueued*, not when it is
/// dequeued, so nothing is ever queued twice and nothing reachable is
/// ever skipped. Terminates after at most one visit per room.
///
/// `start` should belong to `graph`. Neighbour ids the graph doesn't know
/// can't occur for a graph built by [`RoomGraphBuilder`](crate::RoomGraphBuilder).
pub fn reachable_from<'g>(
    graph: &'g RoomGraph,
    start: Option<&Room>,
) -> BTreeMap<RoomId, &'g Room> {
    let mut reachable = BTreeMap::new();
    let Some(start) = start else {
        return reachable;
    };

    let mut visited: HashSet<RoomId> = HashSet::from([start.id()]);
    let mut queue: VecDeque<RoomId> = VecDeque::new();

    for &id in start.neighbours() {
        if visited.insert(id) {
            queue.push_back(id);
        }
    }

    while let Some(id) = queue.pop_front() {
        let Some(room) = graph.room(id) else {
            continue;
        };
        reachable.insert(id, room);

        for &next in room.neighbours() {
            if visited.insert(next) {
                queue.push_back(next);
            }
        }
    }

    tracing::trace!(start = %start.id(), reachable = reachable.len(), "walked room graph");
    reachable
}

// =========================================================================
// Tests
// =========================================================================
