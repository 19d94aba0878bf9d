//! Buffer module: The two-dimensional linked cell grid.
//!
//! This module contains:
//! - [`CellId`]: stable index handle to a cell
//! - `CellArena`: slab owner of every cell (crate-internal)
//! - [`LinkedTextBuffer`]: the editable grid with cursor and one-step undo
//! - [`Rows`]/[`RowChars`]: the lazy row sequence the renderer consumes

mod arena;
mod cell;
mod text_buffer;
mod undo;

pub use cell::CellId;
pub use text_buffer::{LinkedTextBuffer, RowChars, Rows};
