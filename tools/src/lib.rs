extern crate intcnv;
extern crate warn;

pub mod cli;
pub mod warn_stderr;
