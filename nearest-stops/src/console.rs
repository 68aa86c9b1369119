//! Terminal prompt and result printing.

use std::io::{self, BufRead, Write};

use crate::domain::StopPoint;

/// Prompt shown before reading the postcode.
pub const PROMPT: &str = "\nEnter your postcode: ";

/// Write the prompt and read one line of input.
///
/// The line is returned as typed, minus its line ending. `input` is consumed
/// so the handle is released as soon as the line has been read. End of input
/// yields an empty string.
pub fn prompt_for_postcode<R: BufRead, W: Write>(
    mut input: R,
    output: &mut W,
) -> io::Result<String> {
    output.write_all(PROMPT.as_bytes())?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;

    Ok(strip_line_ending(&line).to_string())
}

fn strip_line_ending(line: &str) -> &str {
    line.strip_suffix('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .unwrap_or(line)
}

/// Print each stop's name on its own line, in order.
pub fn display_stop_points<W: Write>(
    output: &mut W,
    stop_points: &[StopPoint],
) -> io::Result<()> {
    for stop in stop_points {
        writeln!(output, "{}", stop.common_name)?;
    }
    output.flush()
}
