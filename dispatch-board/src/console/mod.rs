//! Terminal menu for the dispatch board.
//!
//! Thin presentation layer: collects and parses operator input, calls the
//! board, and prints results. Every rejected operation prints its error
//! message verbatim and the loop carries on; no operator input can crash
//! the process.

mod input;

use std::io::{self, BufRead, Write};

use crate::board::DepartureBoard;
use crate::domain::Departure;

const LIST_ALL_TRAINS: i32 = 1;
const ADD_TRAIN_DEPARTURE: i32 = 2;
const ASSIGN_TRACK: i32 = 3;
const ADD_DELAY: i32 = 4;
const SEARCH_BY_NUMBER: i32 = 5;
const SEARCH_BY_DESTINATION: i32 = 6;
const DELETE_BY_NUMBER: i32 = 7;
const UPDATE_TIME: i32 = 8;
const EXIT: i32 = 0;

const NO_DEPARTURES: &str = "|-----------------No train departure found-------------------------|";
const NO_TRAINS_TO_DESTINATION: &str =
    "|--------------No trains going to this destination-----------------|";
const HEADER: &str = "|--------------------Train departure found-------------------------|\n\
                      |-Departure Time-|-Line-|-Number-|---Destination---|-Track | Delay-|";

const MENU: &str = "\n***** Train Dispatch System *****\n\
                    1. List all train departures\n\
                    2. Add train departure\n\
                    3. Assign track to train departure\n\
                    4. Add delay to train departure\n\
                    5. Search train departure by train number\n\
                    6. Search train departure by destination\n\
                    7. Delete train departure\n\
                    8. Update time of day\n\
                    0. Quit\n\n\
                    Please enter a number between 0 and 8.";

/// The interactive menu loop around a [`DepartureBoard`].
///
/// Generic over its input and output streams so tests can drive it with
/// in-memory buffers.
pub struct Console<R, W> {
    board: DepartureBoard,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Wrap a board with the given streams.
    pub fn new(board: DepartureBoard, input: R, output: W) -> Self {
        Self {
            board,
            input,
            output,
        }
    }

    /// Run the menu loop until the operator quits.
    ///
    /// Returns an error only when a stream fails (for stdin, that means the
    /// input was closed before the operator quit).
    pub fn run(mut self) -> io::Result<()> {
        loop {
            writeln!(self.output, "{MENU}")?;
            let line = input::read_line(&mut self.input, &mut self.output)?;
            let Ok(choice) = line.trim().parse::<i32>() else {
                writeln!(self.output, "You must enter a number, not text")?;
                continue;
            };

            match choice {
                LIST_ALL_TRAINS => self.list_all()?,
                ADD_TRAIN_DEPARTURE => self.add_departure()?,
                ASSIGN_TRACK => self.assign_track()?,
                ADD_DELAY => self.add_delay()?,
                SEARCH_BY_NUMBER => self.search_by_number()?,
                SEARCH_BY_DESTINATION => self.search_by_destination()?,
                DELETE_BY_NUMBER => self.delete_by_number()?,
                UPDATE_TIME => self.update_time()?,
                EXIT => {
                    writeln!(self.output, "Thank you for using the Train Dispatch System!")?;
                    return Ok(());
                }
                _ => writeln!(
                    self.output,
                    "Unrecognized menu selection, enter a number between 0 and 8"
                )?,
            }
        }
    }

    fn list_all(&mut self) -> io::Result<()> {
        let Some(all) = self.board.sorted() else {
            return writeln!(self.output, "{NO_DEPARTURES}");
        };
        let rows: Vec<String> = all.iter().map(|d| d.board_row()).collect();

        writeln!(self.output, "Time now: {}", self.board.current_time())?;
        writeln!(self.output, "{HEADER}")?;
        for row in rows {
            writeln!(self.output, "{row}")?;
        }
        Ok(())
    }

    fn add_departure(&mut self) -> io::Result<()> {
        writeln!(
            self.output,
            "{}, what is the new train number:",
            self.board.train_numbers()
        )?;
        let mut train_number = input::read_nonblank(&mut self.input, &mut self.output)?;
        while self.board.has_train_number(&train_number) {
            writeln!(self.output, "Invalid, {train_number} already exists!")?;
            train_number = input::read_nonblank(&mut self.input, &mut self.output)?;
        }

        writeln!(self.output, "What time does the train depart?")?;
        let mut departure_time = input::read_time(&mut self.input, &mut self.output)?;
        while departure_time < self.board.current_time().plus_minutes(1) {
            writeln!(
                self.output,
                "Can't set the time before {}",
                self.board.current_time().plus_minutes(1)
            )?;
            departure_time = input::read_time(&mut self.input, &mut self.output)?;
        }

        writeln!(self.output, "Destination:")?;
        let destination = input::read_nonblank(&mut self.input, &mut self.output)?;
        writeln!(self.output, "What line is the train on?")?;
        let line = input::read_nonblank(&mut self.input, &mut self.output)?;

        match Departure::new(Some(departure_time), &line, &train_number, &destination) {
            Ok(departure) => match self.board.register(departure) {
                Ok(()) => writeln!(self.output, "{train_number} has been registered")?,
                Err(e) => writeln!(self.output, "{e}")?,
            },
            Err(e) => writeln!(self.output, "{e}")?,
        }
        Ok(())
    }

    fn assign_track(&mut self) -> io::Result<()> {
        if self.empty_board_notice()? {
            return Ok(());
        }
        writeln!(
            self.output,
            "{}, which train do you want to assign a track:",
            self.board.train_numbers()
        )?;
        let train_number = self.read_existing_number()?;

        writeln!(self.output, "What track do you want to assign to {train_number}:")?;
        let track = input::read_int(&mut self.input, &mut self.output)?;

        if let Some(departure) = self.board.find_by_number_mut(&train_number) {
            match departure.set_track(track) {
                Ok(()) => {
                    writeln!(self.output, "{train_number} has now been assigned track {track}")?;
                }
                Err(e) => writeln!(self.output, "{e}")?,
            }
        }
        Ok(())
    }

    fn add_delay(&mut self) -> io::Result<()> {
        if self.empty_board_notice()? {
            return Ok(());
        }
        writeln!(
            self.output,
            "{}, what train do you want to add a delay to?",
            self.board.train_numbers()
        )?;
        let train_number = self.read_existing_number()?;

        writeln!(self.output, "What delay do you want to assign to {train_number}:")?;
        let delay = input::read_time(&mut self.input, &mut self.output)?;

        if let Some(departure) = self.board.find_by_number_mut(&train_number) {
            match departure.set_delay(Some(delay)) {
                Ok(()) => {
                    writeln!(self.output, "{train_number} has now been delayed with {delay}")?;
                }
                Err(e) => writeln!(self.output, "{e}")?,
            }
        }
        Ok(())
    }

    fn search_by_number(&mut self) -> io::Result<()> {
        if self.empty_board_notice()? {
            return Ok(());
        }
        writeln!(
            self.output,
            "{}, what train number do you want to check:",
            self.board.train_numbers()
        )?;
        let train_number = self.read_existing_number()?;

        let row = self
            .board
            .find_by_number(&train_number)
            .map(|d| d.board_row());
        writeln!(self.output, "{HEADER}")?;
        if let Some(row) = row {
            writeln!(self.output, "{row}")?;
        }
        Ok(())
    }

    fn search_by_destination(&mut self) -> io::Result<()> {
        if self.empty_board_notice()? {
            return Ok(());
        }
        writeln!(self.output, "What destination do you want to check:")?;
        let destination = input::read_nonblank(&mut self.input, &mut self.output)?;

        if !self.board.has_destination(&destination) {
            return writeln!(self.output, "{NO_TRAINS_TO_DESTINATION}");
        }
        let rows: Vec<String> = self
            .board
            .find_by_destination(&destination)
            .iter()
            .map(|d| d.board_row())
            .collect();
        writeln!(self.output, "{HEADER}")?;
        for row in rows {
            writeln!(self.output, "{row}")?;
        }
        Ok(())
    }

    fn delete_by_number(&mut self) -> io::Result<()> {
        if self.empty_board_notice()? {
            return Ok(());
        }
        writeln!(
            self.output,
            "{}, what train do you want to delete?",
            self.board.train_numbers()
        )?;
        let train_number = self.read_existing_number()?;

        self.board.remove_by_number(&train_number);
        writeln!(self.output, "{train_number} has been removed from the register")?;
        Ok(())
    }

    fn update_time(&mut self) -> io::Result<()> {
        writeln!(self.output, "What time is it now:")?;
        let new_time = input::read_time(&mut self.input, &mut self.output)?;

        if let Err(e) = self.board.advance_time(new_time) {
            writeln!(self.output, "{e}")?;
        }
        Ok(())
    }

    /// Re-prompt until the operator names a registered train.
    fn read_existing_number(&mut self) -> io::Result<String> {
        let mut train_number = input::read_nonblank(&mut self.input, &mut self.output)?;
        while !self.board.has_train_number(&train_number) {
            writeln!(self.output, "Train not found, try again:")?;
            train_number = input::read_nonblank(&mut self.input, &mut self.output)?;
        }
        Ok(train_number)
    }

    /// Print the empty-board notice; true if there was nothing to work on.
    fn empty_board_notice(&mut self) -> io::Result<bool> {
        if self.board.is_empty() {
            writeln!(self.output, "{NO_DEPARTURES}")?;
            return Ok(true);
        }
        Ok(false)
    }
}
