use crossterm::{cursor::Show, queue, tty::IsTty};
use std::io::{self, Stdout, Write};

/// An output device the status block can be drawn on: a raw byte sink that also knows its
/// dimensions.
pub trait Terminal: Write {
    /// Returns `(columns, rows)`, or an error if the sink is not attached to a terminal.
    fn size(&self) -> io::Result<(u16, u16)>;
}

impl Terminal for Stdout {
    fn size(&self) -> io::Result<(u16, u16)> {
        if !self.is_tty() {
            return Err(io::Error::new(
                io::ErrorKind::Other,
                "stdout is not attached to a terminal",
            ));
        }
        crossterm::terminal::size()
    }
}

/// Makes the cursor visible again.
///
/// Meant for interrupt handlers and panic hooks installed by the caller; the normal release
/// path is [LineMultiplexer::finish](crate::LineMultiplexer::finish).
pub fn restore_cursor<W: Write>(output: &mut W) -> io::Result<()> {
    queue!(output, Show)?;
    output.flush()
}
