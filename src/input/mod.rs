//! Input adapter: Raw terminal events in, buffer commands out.
//!
//! The buffer's only input boundary is the closed [`Command`] set. This
//! module owns the translation from crossterm's event stream to that set:
//! a pure [`decode`] function plus a [`CommandReader`] thread that polls
//! the terminal and ships commands over a crossbeam channel.

mod command;
mod reader;

pub use command::Command;
pub use reader::{decode, CommandReader};
