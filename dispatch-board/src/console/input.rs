//! Line-oriented input helpers for the terminal menu.
//!
//! All text parsing happens here; the board and the domain only ever see
//! already-typed values. Each helper re-prompts until the operator supplies
//! something usable, and fails only when the input stream closes.

use std::io::{self, BufRead, Write};

use crate::domain::BoardTime;

/// Read one line, stripped of the trailing newline.
///
/// Returns `UnexpectedEof` when the input stream is closed.
pub fn read_line<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<String> {
    output.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
    }
    Ok(line.trim_end_matches(['\r', '\n']).to_owned())
}

/// Read a line containing at least one non-whitespace character.
pub fn read_nonblank<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<String> {
    loop {
        let line = read_line(input, output)?;
        if !line.trim().is_empty() {
            return Ok(line);
        }
        writeln!(output, "Invalid input, try again")?;
    }
}

/// Read an integer, re-prompting on anything that does not parse.
pub fn read_int<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<i32> {
    loop {
        let line = read_line(input, output)?;
        match line.trim().parse() {
            Ok(value) => return Ok(value),
            Err(_) => writeln!(output, "Invalid number, try again")?,
        }
    }
}

/// Read an "HH:mm" time, re-prompting on malformed input.
pub fn read_time<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<BoardTime> {
    writeln!(output, "Enter time HH:mm")?;
    loop {
        let line = read_line(input, output)?;
        match BoardTime::parse_hhmm(line.trim()) {
            Ok(time) => return Ok(time),
            Err(_) => {
                writeln!(output, "Invalid input format. Please enter time in HH:mm format.")?;
            }
        }
    }
}
