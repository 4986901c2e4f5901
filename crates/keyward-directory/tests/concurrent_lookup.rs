//! Concurrency tests: one initialization, many concurrent readers.

use std::collections::HashMap;
use std::sync::Arc;

use keyward_directory::{DirectoryError, RoomDirectory};
use keyward_protocol::{Identity, RoomId};
use keyward_room::{Room, RoomGraph};

fn directory() -> Arc<RoomDirectory> {
    let mut builder = RoomGraph::builder();
    for id in 0..8 {
        builder = builder.add_room(Room::builder(RoomId(id)).build());
    }
    Arc::new(RoomDirectory::new(Arc::new(builder.build().unwrap())))
}

fn person(n: u32) -> Identity {
    Identity::new(format!("Inmate{n}"), "Doe")
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_cell_for_concurrent_readers_see_full_mapping() {
    let dir = directory();
    let cells: HashMap<Identity, RoomId> = (0..8).map(|n| (person(n), RoomId(n))).collect();
    dir.set_all(cells).expect("should initialize");

    let mut tasks = Vec::new();
    for worker in 0..16u32 {
        let dir = Arc::clone(&dir);
        tasks.push(tokio::spawn(async move {
            for round in 0..100u32 {
                let n = (worker + round) % 8;
                let cell = dir.cell_for(&person(n)).expect("every inmate has a cell");
                assert_eq!(cell.id(), RoomId(n));
                assert!(dir.cell_for(&Identity::new("Visitor", "Doe")).is_none());
            }
        }));
    }

    for task in tasks {
        task.await.expect("reader task should not panic");
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_set_all_racing_initializers_exactly_one_wins() {
    let dir = directory();

    let mut tasks = Vec::new();
    for n in 0..8u32 {
        let dir = Arc::clone(&dir);
        tasks.push(tokio::spawn(async move {
            dir.set_all(HashMap::from([(person(n), RoomId(n))]))
        }));
    }

    let mut wins = 0;
    for task in tasks {
        match task.await.expect("task should not panic") {
            Ok(()) => wins += 1,
            Err(DirectoryError::AlreadyInitialized) => {}
            Err(other) => panic!("unexpected error: {other}"),
        }
    }

    assert_eq!(wins, 1);
    assert_eq!(dir.len(), 1);
}
