//! The closed set of commands a buffer consumes.
//!
//! The input adapter turns each logical key press into exactly one command;
//! this enum is the whole protocol between the adapter and the buffer.

/// One decoded editing, navigation, or control action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Insert a printable character at the cursor.
    InsertChar(char),
    /// Remove the character at the cursor (backspace semantics).
    DeleteChar,
    /// Open a new row below the cursor's row.
    NewLine,
    /// Reverse the last mutating operation (one step).
    Undo,
    /// Move the cursor to the row above.
    MoveUp,
    /// Move the cursor to the row below.
    MoveDown,
    /// Move the cursor one cell left.
    MoveLeft,
    /// Move the cursor one cell right.
    MoveRight,
    /// End the editing session.
    Stop,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commands_are_comparable() {
        assert_eq!(Command::InsertChar('a'), Command::InsertChar('a'));
        assert_ne!(Command::InsertChar('a'), Command::InsertChar('b'));
        assert_ne!(Command::MoveUp, Command::MoveDown);
    }
}
