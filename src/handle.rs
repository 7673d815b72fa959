use crate::error::Result;
use crate::multiplexer::LineMultiplexer;
use crate::terminal::Terminal;
use std::fmt;
use std::io::Stdout;
use std::sync::Arc;

/// Write access to a single line of a [LineMultiplexer].
///
/// Handles are cheap to clone and can be moved to other threads; any number of them may
/// target the same line.
pub struct LineHandle<W: Terminal = Stdout> {
    multiplexer: Arc<LineMultiplexer<W>>,
    index: usize,
}

impl<W: Terminal> LineHandle<W> {
    pub(crate) fn new(multiplexer: Arc<LineMultiplexer<W>>, index: usize) -> Self {
        Self { multiplexer, index }
    }

    /// The line this handle writes to.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Replaces the contents of this handle's line, see [LineMultiplexer::write].
    pub fn write(&self, text: &str) -> Result<usize> {
        self.multiplexer.write(self.index, text)
    }
}

impl<W: Terminal> Clone for LineHandle<W> {
    fn clone(&self) -> Self {
        Self::new(Arc::clone(&self.multiplexer), self.index)
    }
}

impl<W: Terminal> fmt::Debug for LineHandle<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LineHandle")
            .field("index", &self.index)
            .field("line_count", &self.multiplexer.line_count())
            .finish()
    }
}
