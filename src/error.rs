use std::io;

/// Errors produced while reserving, writing to, or releasing a status block.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid dimensions: a status block needs at least one line and one column")]
    InvalidDimensions,

    #[error("terminal too small for {lines} line(s): only {rows} row(s) available")]
    TerminalTooSmall { lines: usize, rows: u16 },

    #[error("failed to query terminal size: {0}")]
    TerminalQueryFailed(#[source] io::Error),

    #[error("invalid line index {index}: block has {line_count} line(s)")]
    InvalidLineIndex { index: usize, line_count: usize },

    #[error("terminal write failed: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
