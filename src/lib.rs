/*
Status lines on a shared terminal.

Construction reserves a block of N rows below the current cursor position and hides the cursor.
Each row is addressed by index; every write moves the physical cursor from the row it last
touched to the target row, rewinds to column 0 and prints the row padded or truncated to the
terminal width captured at construction.

All physical output goes through one mutex together with the cursor bookkeeping, so writes
from any number of threads land as whole, non-interleaved bursts.

Finish moves below the block and restores the cursor. It is the only way to release the block
(dropping an unfinished multiplexer calls it). Callers that want the cursor back after a signal
have to install their own hook, see `restore_cursor`.
*/
mod error;
mod handle;
mod multiplexer;
mod row;
mod terminal;

#[cfg(test)]
mod vte_actions;

pub use error::{Error, Result};
pub use handle::LineHandle;
pub use multiplexer::LineMultiplexer;
pub use row::{normalize_row, TRUNCATION_MARKER};
pub use terminal::{restore_cursor, Terminal};
