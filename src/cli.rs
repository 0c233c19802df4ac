//! Input assembly for the `cardid` command-line tool.
//!
//! Input is either the process arguments joined by spaces or one line read
//! from standard input. Both are bounded to the size of a fixed line buffer.

use std::io::{self, BufRead, Read, Write};

/// Line buffer size, including one byte of headroom.
pub const INPUT_CAPACITY: usize = 256;

/// Prompt shown before reading from standard input.
pub const PROMPT: &str = "Number: ";

/// Join arguments with single spaces.
///
/// Joining stops at the first argument that would not fit in
/// [`INPUT_CAPACITY`]; that argument and all later ones are dropped.
#[must_use]
pub fn join_args<S: AsRef<str>>(args: &[S]) -> String {
    let mut input = String::with_capacity(INPUT_CAPACITY);

    for (i, arg) in args.iter().enumerate() {
        let arg = arg.as_ref();
        if input.len() + arg.len() + 1 >= INPUT_CAPACITY {
            break;
        }
        input.push_str(arg);
        if i + 1 < args.len() && input.len() + 1 < INPUT_CAPACITY {
            input.push(' ');
        }
    }

    input
}

/// Read one line, keeping its trailing newline.
///
/// At most `INPUT_CAPACITY - 1` bytes are consumed; invalid UTF-8 is replaced.
/// Returns `Ok(None)` at end of input.
///
/// # Errors
///
/// Returns any error from the underlying reader.
pub fn read_line<R: BufRead>(reader: &mut R) -> io::Result<Option<String>> {
    let mut buf = Vec::with_capacity(INPUT_CAPACITY);
    let limit = u64::try_from(INPUT_CAPACITY - 1).unwrap_or(u64::MAX);

    let read = reader.by_ref().take(limit).read_until(b'\n', &mut buf)?;
    if read == 0 {
        return Ok(None);
    }

    Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
}

/// Write the prompt, then read one line.
///
/// # Errors
///
/// Returns an error if the prompt cannot be written or the line cannot be read.
pub fn prompt_line<R: BufRead, W: Write>(reader: &mut R, writer: &mut W) -> io::Result<Option<String>> {
    writer.write_all(PROMPT.as_bytes())?;
    writer.flush()?;
    read_line(reader)
}
