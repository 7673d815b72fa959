use crate::error::{Error, Result};
use crate::handle::LineHandle;
use crate::row::normalize_row;
use crate::terminal::Terminal;
use crossterm::{
    cursor::{Hide, MoveDown, MoveLeft, MoveUp, Show},
    queue,
    style::Print,
};
use log::{debug, trace, warn};
use std::cmp::Ordering;
use std::io::{self, Stdout, Write};
use std::sync::atomic::{AtomicBool, Ordering as AtomicOrdering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Where the physical cursor sits, together with the device it sits on. Only ever touched
/// under the multiplexer's lock.
struct Cursor<W> {
    line: usize,
    output: W,
}

impl<W: Write> Cursor<W> {
    /// Queues the movement from the current row to column 0 of `line`.
    ///
    /// The bookkeeping is updated before anything is emitted: a failed write still counts as
    /// having moved.
    fn seek(&mut self, line: usize, columns: u16) -> io::Result<()> {
        let from = self.line;
        self.line = line;
        // Both rows are below the line count, which fits the terminal height.
        match from.cmp(&line) {
            Ordering::Greater => queue!(self.output, MoveUp((from - line) as u16))?,
            Ordering::Less => queue!(self.output, MoveDown((line - from) as u16))?,
            Ordering::Equal => {}
        }
        queue!(self.output, MoveLeft(columns))
    }
}

/// A block of terminal rows that can be rewritten independently from any thread.
pub struct LineMultiplexer<W: Terminal = Stdout> {
    line_count: usize,
    columns: u16,
    finished: AtomicBool,
    cursor: Mutex<Cursor<W>>,
}

impl LineMultiplexer<Stdout> {
    /// Reserves `line_count` rows on stdout.
    pub fn new(line_count: usize) -> Result<Self> {
        Self::with_terminal(line_count, io::stdout())
    }
}

impl<W: Terminal> LineMultiplexer<W> {
    /// Reserves `line_count` rows below the cursor of `terminal` and hides the cursor.
    ///
    /// The rows are made by printing `line_count - 1` newlines, which scrolls earlier output up
    /// if needed, and the cursor is left on the first of them. The terminal width at this
    /// moment is used for every row from then on.
    pub fn with_terminal(line_count: usize, mut terminal: W) -> Result<Self> {
        if line_count == 0 {
            return Err(Error::InvalidDimensions);
        }

        let (columns, rows) = terminal.size().map_err(Error::TerminalQueryFailed)?;
        if columns == 0 {
            return Err(Error::InvalidDimensions);
        }
        if line_count > usize::from(rows) {
            return Err(Error::TerminalTooSmall {
                lines: line_count,
                rows,
            });
        }

        let spare = line_count - 1;
        queue!(terminal, Print("\n".repeat(spare)))?;
        if spare > 0 {
            queue!(terminal, MoveUp(spare as u16))?;
        }
        queue!(terminal, Hide)?;
        terminal.flush()?;
        debug!("reserved {line_count} status line(s), {columns} column(s) wide");

        Ok(Self {
            line_count,
            columns,
            finished: AtomicBool::new(false),
            cursor: Mutex::new(Cursor {
                line: 0,
                output: terminal,
            }),
        })
    }

    /// Number of reserved rows.
    pub fn line_count(&self) -> usize {
        self.line_count
    }

    /// The width every row is padded or truncated to.
    pub fn row_width(&self) -> usize {
        usize::from(self.columns)
    }

    /// Replaces the contents of row `index` with `text`, see [normalize_row].
    ///
    /// Returns the number of characters printed. Once the block is finished this does nothing
    /// and returns `Ok(0)`, whatever the index.
    pub fn write(&self, index: usize, text: &str) -> Result<usize> {
        if self.is_finished() {
            return Ok(0);
        }
        if index >= self.line_count {
            return Err(Error::InvalidLineIndex {
                index,
                line_count: self.line_count,
            });
        }

        let row = normalize_row(text, self.row_width());
        let mut cursor = self.lock();
        // Finish may have won the race for the lock.
        if self.is_finished() {
            return Ok(0);
        }

        cursor.seek(index, self.columns)?;
        queue!(cursor.output, Print(&row))?;
        cursor.output.flush()?;

        let written = row.chars().count();
        trace!("wrote {written} char(s) to status line {index}");
        Ok(written)
    }

    /// One handle per line, in index order. Empty once the block is finished.
    pub fn build_line_handles(self: &Arc<Self>) -> Vec<LineHandle<W>> {
        if self.is_finished() {
            return Vec::new();
        }
        (0..self.line_count)
            .map(|index| LineHandle::new(Arc::clone(self), index))
            .collect()
    }

    /// Moves the cursor below the block, shows it again and stops accepting writes.
    ///
    /// Only the first call has any effect. The block counts as released even if the
    /// terminal write fails.
    pub fn finish(&self) -> Result<()> {
        if self.is_finished() {
            return Ok(());
        }

        let mut cursor = self.lock();
        if self.is_finished() {
            return Ok(());
        }
        let released = self.release(&mut cursor);
        self.finished.store(true, AtomicOrdering::Release);
        debug!("released {} status line(s)", self.line_count);
        released.map_err(Error::from)
    }

    /// Advisory only: a write can still be in flight when this flips to `true`.
    pub fn is_finished(&self) -> bool {
        self.finished.load(AtomicOrdering::Acquire)
    }

    fn release(&self, cursor: &mut Cursor<W>) -> io::Result<()> {
        if cursor.line < self.line_count {
            let below = self.line_count - cursor.line;
            cursor.line = self.line_count;
            queue!(cursor.output, MoveDown(below as u16))?;
        }
        queue!(cursor.output, MoveLeft(self.columns), Print("\n"), Show)?;
        cursor.output.flush()
    }

    fn lock(&self) -> MutexGuard<'_, Cursor<W>> {
        // Bookkeeping is updated before output, so the recorded line stays consistent after a
        // panicking writer. Commands it already queued may still go out with the next flush.
        self.cursor.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<W: Terminal> Drop for LineMultiplexer<W> {
    fn drop(&mut self) {
        if let Err(err) = self.finish() {
            warn!("failed to release status lines: {err}");
        }
    }
}
