use std::io;

use dispatch_board::board::DepartureBoard;
use dispatch_board::console::Console;
use dispatch_board::domain::{BoardTime, Departure};
use tracing_subscriber::EnvFilter;

/// The demo timetable the board starts with.
const SEED_TIMETABLE: [((u32, u32), &str, &str, &str); 4] = [
    ((12, 0), "L1", "23", "Trondheim"),
    ((12, 20), "R3", "26", "Oslo S"),
    ((12, 40), "B56", "25", "Stjørdal"),
    ((13, 0), "C5", "64", "Røros"),
];

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    Console::new(seed_board(), stdin.lock(), stdout.lock()).run()
}

/// Build a board preloaded with the demo timetable.
fn seed_board() -> DepartureBoard {
    let mut board = DepartureBoard::new();
    for ((hour, minute), line, number, destination) in SEED_TIMETABLE {
        let time = BoardTime::new(hour, minute).expect("seed timetable time is valid");
        let departure = Departure::new(Some(time), line, number, destination)
            .expect("seed timetable departure is valid");
        if let Err(e) = board.register(departure) {
            eprintln!("Could not seed departure {number}: {e}");
        }
    }
    board
}
