//! End-to-end tests for tally-validator.
//!
//! Each module drives the public API the way a command-line tool would:
//! build a list, feed it user input, read the messages back.

mod list;
mod manifest;
mod paths;
mod rendering;
