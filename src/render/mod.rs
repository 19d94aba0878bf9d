//! Renderer: Consumes the buffer's row sequence and owns the screen.
//!
//! - [`AnsiBuffer`]: accumulates a frame's escape sequences, flushed in one
//!   syscall
//! - [`Screen`]: walks `rows()`, paints each line, parks the cursor

mod output;
mod screen;

pub use output::AnsiBuffer;
pub use screen::Screen;
