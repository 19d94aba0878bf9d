//! Scripted session: Drives the buffer through the command set without a
//! terminal and prints each rendered state.

use gridpad::{Command, LinkedTextBuffer};

fn show(step: &str, buffer: &LinkedTextBuffer) {
    println!("-- {step}");
    let (row, col) = buffer.cursor_position();
    for line in buffer.rows() {
        println!("  |{}|", line.collect::<String>());
    }
    println!("  cursor: row {row}, col {col}");
}

fn main() {
    let mut buffer = LinkedTextBuffer::new();
    show("blank buffer", &buffer);

    for ch in "Hello".chars() {
        buffer.apply(Command::InsertChar(ch));
    }
    show("insert 'Hello'", &buffer);

    buffer.apply(Command::NewLine);
    for ch in "world".chars() {
        buffer.apply(Command::InsertChar(ch));
    }
    show("new line + 'world'", &buffer);

    buffer.apply(Command::DeleteChar);
    show("backspace", &buffer);

    buffer.apply(Command::Undo);
    show("undo restores the 'd'", &buffer);

    buffer.apply(Command::MoveUp);
    buffer.apply(Command::MoveLeft);
    buffer.apply(Command::InsertChar('!'));
    show("navigate up, left, insert '!'", &buffer);
}
