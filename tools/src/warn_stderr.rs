use std::fmt;
use warn::Warn;

/// Prints each warning to stderr as it arrives.
pub struct Stderr;

impl<W: fmt::Display> Warn<W> for Stderr {
    fn warn(&mut self, warning: W) {
        eprintln!("warning: {}", warning);
    }
}
