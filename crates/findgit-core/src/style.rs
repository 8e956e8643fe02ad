//! Utilities for styling command-line output.

const MAX_WIDTH: usize = 100;

/// Get the width to wrap text at, if stdout is a terminal
pub fn text_width() -> Option<usize> {
    term_size::dimensions().map(|(w, _)| w.min(MAX_WIDTH))
}
