//! Gatehouse: a console door controller for a Keyward site.
//!
//! ```text
//! cargo run -p gatehouse -- demos/gatehouse/site.json
//! 1 Ann,Lee        → GRANTED
//! 3 Ann,Lee        → DENIED
//! audit Ann,Lee    → cell and reachable rooms
//! details 2        → the room's allow-list (operator only)
//! ```
//!
//! Set `RUST_LOG=debug` to see the reader's audit events.

use keyward::prelude::*;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

enum Command<'a> {
    Present { room: RoomId, card: &'a str },
    Audit { card: &'a str },
    Details { room: RoomId },
}

fn parse_command(line: &str) -> Result<Command<'_>, String> {
    let (head, rest) = line
        .split_once(' ')
        .ok_or_else(|| "expected `<room> <card>`, `audit <card>` or `details <room>`".to_string())?;

    let room_id = |text: &str| {
        text.parse::<u32>()
            .map(RoomId)
            .map_err(|_| format!("not a room id: {text}"))
    };

    match head {
        "audit" => Ok(Command::Audit { card: rest }),
        "details" => Ok(Command::Details {
            room: room_id(rest)?,
        }),
        _ => Ok(Command::Present {
            room: room_id(head)?,
            card: rest,
        }),
    }
}

fn run(site: &Site, command: Command<'_>) -> Result<String, KeywardError> {
    match command {
        Command::Present { room, card } => {
            let granted = site.present(card, room)?;
            Ok(if granted { "GRANTED" } else { "DENIED" }.to_string())
        }
        Command::Audit { card } => {
            let (identity, audit) = site.reader().inspect(card)?;
            let cell = audit
                .cell
                .map_or_else(|| "none".to_string(), |id| id.to_string());
            Ok(format!(
                "{identity}: cell {cell}, nearby {:?}, admitted {:?}",
                audit.nearby, audit.admitted_nearby
            ))
        }
        Command::Details { room } => {
            let room = site.graph().get(room)?;
            Ok(room.detailed().to_string())
        }
    }
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let path = std::env::args()
        .nth(1)
        .ok_or("usage: gatehouse <layout.json>")?;
    let layout = SiteLayout::from_json(&tokio::fs::read_to_string(&path).await?)?;
    let site = Site::from_layout(layout)?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let reply = match parse_command(line) {
            Ok(command) => run(&site, command).unwrap_or_else(|e| format!("error: {e}")),
            Err(usage) => format!("error: {usage}"),
        };
        println!("{reply}");
    }

    tracing::info!("stdin closed, gatehouse shutting down");
    Ok(())
}
