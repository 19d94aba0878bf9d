//! Interactive notepad: The full editing loop on a real terminal.
//!
//! Type to insert, Backspace to delete, Enter for a new line, arrows to
//! navigate, Ctrl+Z to undo one step, Esc (or Ctrl+C) to exit.

use gridpad::Session;

fn main() -> std::io::Result<()> {
    let mut session = Session::new()?;
    session.run()?;

    // The terminal is restored on drop; report what was written.
    let text = session.buffer().to_string();
    drop(session);
    println!("Final buffer ({} lines):", text.lines().count().max(1));
    println!("{text}");
    Ok(())
}
