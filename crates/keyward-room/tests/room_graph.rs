//! Integration tests for the room graph and its traversal.
//!
//! The randomized test compares `reachable_from` against a plain
//! depth-first connected-component computation on seeded random graphs,
//! so any failure is reproducible from the printed seed.

use std::collections::{BTreeSet, HashMap};

use keyward_protocol::{Identity, RoomId};
use keyward_room::{Room, RoomError, RoomGraph, reachable_from};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// =========================================================================
// Helpers
// =========================================================================

fn random_graph(rng: &mut StdRng, rooms: u32, edge_chance: f64) -> (RoomGraph, Vec<(u32, u32)>) {
    let mut builder = RoomGraph::builder();
    for id in 0..rooms {
        builder = builder.add_room(Room::builder(RoomId(id)).build());
    }

    let mut edges = Vec::new();
    for a in 0..rooms {
        for b in (a + 1)..rooms {
            if rng.random_bool(edge_chance) {
                // Randomize edge direction to shuffle neighbour order.
                let edge = if rng.random_bool(0.5) { (a, b) } else { (b, a) };
                builder = builder.connect(RoomId(edge.0), RoomId(edge.1));
                edges.push(edge);
            }
        }
    }

    (builder.build().expect("random graph should build"), edges)
}

/// Everything in `start`'s connected component, except `start`.
fn expected_reachable(edges: &[(u32, u32)], start: u32) -> BTreeSet<u32> {
    let mut adjacency: HashMap<u32, Vec<u32>> = HashMap::new();
    for &(a, b) in edges {
        adjacency.entry(a).or_default().push(b);
        adjacency.entry(b).or_default().push(a);
    }

    let mut seen = BTreeSet::from([start]);
    let mut stack = vec![start];
    while let Some(node) = stack.pop() {
        for &next in adjacency.get(&node).into_iter().flatten() {
            if seen.insert(next) {
                stack.push(next);
            }
        }
    }
    seen.remove(&start);
    seen
}

// =========================================================================
// Traversal
// =========================================================================

#[test]
fn test_reachable_from_matches_connected_component_on_random_graphs() {
    for seed in 0..200u64 {
        let mut rng = StdRng::seed_from_u64(seed);
        let rooms = rng.random_range(1..24);
        let chance = rng.random_range(0.02..0.4);
        let (graph, edges) = random_graph(&mut rng, rooms, chance);

        let start = rng.random_range(0..rooms);
        let result = reachable_from(&graph, graph.room(RoomId(start)));
        let got: BTreeSet<u32> = result.keys().map(|id| id.0).collect();

        assert_eq!(got, expected_reachable(&edges, start), "seed {seed}");
        assert!(!result.contains_key(&RoomId(start)), "seed {seed}");
        for (id, room) in &result {
            assert_eq!(*id, room.id(), "seed {seed}");
        }
    }
}

#[test]
fn test_reachable_from_scenario_line_and_diamond() {
    let line = RoomGraph::builder()
        .add_room(Room::builder(RoomId(1)).build())
        .add_room(Room::builder(RoomId(2)).build())
        .add_room(Room::builder(RoomId(3)).build())
        .connect(RoomId(1), RoomId(2))
        .connect(RoomId(2), RoomId(3))
        .build()
        .unwrap();
    let result = reachable_from(&line, line.room(RoomId(1)));
    assert_eq!(result.keys().copied().collect::<Vec<_>>(), vec![RoomId(2), RoomId(3)]);

    let diamond = RoomGraph::builder()
        .add_room(Room::builder(RoomId(1)).build())
        .add_room(Room::builder(RoomId(2)).build())
        .add_room(Room::builder(RoomId(3)).build())
        .add_room(Room::builder(RoomId(4)).build())
        .connect(RoomId(1), RoomId(2))
        .connect(RoomId(1), RoomId(3))
        .connect(RoomId(2), RoomId(4))
        .connect(RoomId(3), RoomId(4))
        .build()
        .unwrap();
    let result = reachable_from(&diamond, diamond.room(RoomId(1)));
    assert_eq!(
        result.keys().copied().collect::<Vec<_>>(),
        vec![RoomId(2), RoomId(3), RoomId(4)]
    );
}

// =========================================================================
// Allow-lists inside a graph
// =========================================================================

#[test]
fn test_allow_lists_unchanged_after_traversal() {
    let ann = Identity::new("Ann", "Lee");
    let john = Identity::new("John", "Smith");
    let graph = RoomGraph::builder()
        .add_room(Room::builder(RoomId(1)).allow(ann.clone()).build())
        .add_room(Room::builder(RoomId(2)).allow(john.clone()).build())
        .connect(RoomId(1), RoomId(2))
        .build()
        .unwrap();

    for _ in 0..3 {
        let _ = reachable_from(&graph, graph.room(RoomId(1)));
    }

    let r1 = graph.get(RoomId(1)).unwrap();
    let r2 = graph.get(RoomId(2)).unwrap();
    assert!(r1.allows_entrance(&ann) && !r1.allows_entrance(&john));
    assert!(r2.allows_entrance(&john) && !r2.allows_entrance(&ann));
    assert_eq!(r1.allowed_count(), 1);
    assert_eq!(r2.allowed_count(), 1);
}

#[test]
fn test_allows_entrance_matches_membership_across_rooms() {
    let people: Vec<Identity> = ["Ann,Lee", "John,Smith", "Mia,Wong", "Olu,Ade"]
        .iter()
        .map(|s| {
            let (first, last) = s.split_once(',').unwrap();
            Identity::new(first, last)
        })
        .collect();

    let mut rng = StdRng::seed_from_u64(7);
    let mut builder = RoomGraph::builder();
    let mut lists: Vec<Vec<Identity>> = Vec::new();
    for id in 0..10 {
        let list: Vec<Identity> = people
            .iter()
            .filter(|_| rng.random_bool(0.5))
            .cloned()
            .collect();
        builder = builder.add_room(Room::builder(RoomId(id)).allow_all(list.clone()).build());
        lists.push(list);
    }
    let graph = builder.build().unwrap();

    for (id, list) in lists.iter().enumerate() {
        let room = graph.get(RoomId(id as u32)).unwrap();
        for person in &people {
            // Fresh value, not the stored one: equality is by value.
            let presented = Identity::new(person.first_name(), person.last_name());
            assert_eq!(room.allows_entrance(&presented), list.contains(person));
        }
    }
}

#[test]
fn test_graph_lookup_unknown_room_is_not_found() {
    let graph = RoomGraph::builder().build().unwrap();
    assert!(graph.is_empty());
    assert_eq!(graph.get(RoomId(1)).unwrap_err(), RoomError::NotFound(RoomId(1)));
}

#[test]
fn test_graph_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RoomGraph>();
    assert_send_sync::<Room>();
}
