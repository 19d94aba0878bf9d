//! # Gridpad
//!
//! A cursor-driven console notepad built on a four-way linked grid of
//! character cells.
//!
//! The core is [`LinkedTextBuffer`]: a mutable graph of character cells,
//! each linked to up to four neighbors, supporting cursor-driven insertion,
//! deletion, line creation, multi-directional navigation, and a single
//! level of undo. Cells live in an arena and are addressed by stable
//! indices, so the link graph can be rewired freely without dangling
//! references.
//!
//! ## Core Concepts
//!
//! - **Linked cell grid**: rows are doubly-linked horizontal chains;
//!   row-leading cells chain the rows vertically
//! - **Arena ownership**: one owner for every cell, one release point
//! - **One-step undo**: a single tagged history slot, nothing deeper
//! - **Narrow boundaries**: a closed command set in, a lazy row sequence
//!   out
//!
//! ## Example
//!
//! ```rust
//! use gridpad::{Command, LinkedTextBuffer};
//!
//! let mut buffer = LinkedTextBuffer::new();
//! buffer.apply(Command::InsertChar('H'));
//! buffer.apply(Command::InsertChar('i'));
//! buffer.apply(Command::NewLine);
//! buffer.apply(Command::InsertChar('!'));
//!
//! assert_eq!(buffer.to_string(), "Hi\n!");
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod buffer;
pub mod input;
pub mod render;
pub mod session;

// Re-exports for convenience
pub use buffer::{CellId, LinkedTextBuffer, RowChars, Rows};
pub use input::{decode, Command, CommandReader};
pub use render::{AnsiBuffer, Screen};
pub use session::{Session, SessionConfig};
