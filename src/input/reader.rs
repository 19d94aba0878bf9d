//! Command reader: Dedicated thread that decodes terminal events.
//!
//! The reader polls crossterm events in its own thread and ships decoded
//! [`Command`]s to the session loop over a channel, so the loop never
//! blocks on the terminal. Decoding itself is a pure function, testable
//! without a terminal.

use super::command::Command;
use crossbeam_channel::Sender;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Decode one crossterm event into at most one command.
///
/// Exactly one command per logical key press: key release and repeat
/// events, mouse events, and keys outside the mapping all decode to
/// `None`.
///
/// Bindings: printable characters insert themselves; Backspace deletes;
/// Enter opens a row; Ctrl+Z undoes; arrows navigate; Esc or Ctrl+C stops.
pub fn decode(event: &Event) -> Option<Command> {
    let Event::Key(key) = event else {
        return None;
    };
    if key.kind != KeyEventKind::Press {
        return None;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);

    match key.code {
        KeyCode::Char(c) if ctrl => match c.to_ascii_lowercase() {
            'z' => Some(Command::Undo),
            'c' => Some(Command::Stop),
            _ => None,
        },
        KeyCode::Char(c) if !alt => Some(Command::InsertChar(c)),
        KeyCode::Backspace => Some(Command::DeleteChar),
        KeyCode::Enter => Some(Command::NewLine),
        KeyCode::Up => Some(Command::MoveUp),
        KeyCode::Down => Some(Command::MoveDown),
        KeyCode::Left => Some(Command::MoveLeft),
        KeyCode::Right => Some(Command::MoveRight),
        KeyCode::Esc => Some(Command::Stop),
        _ => None,
    }
}

/// Polls terminal events on a dedicated thread and sends decoded commands.
pub struct CommandReader {
    /// Handle to the reader thread.
    handle: Option<JoinHandle<()>>,
    /// Flag to signal shutdown.
    shutdown: Arc<AtomicBool>,
}

impl CommandReader {
    /// Spawn the reader thread.
    ///
    /// `poll_timeout` bounds how long the thread waits for an event before
    /// re-checking the shutdown flag.
    ///
    /// # Panics
    /// Panics if the thread cannot be spawned.
    pub fn spawn(sender: Sender<Command>, poll_timeout: Duration) -> Self {
        let shutdown = Arc::new(AtomicBool::new(false));
        let shutdown_clone = shutdown.clone();

        let handle = thread::Builder::new()
            .name("gridpad-input".to_string())
            .spawn(move || {
                Self::run_loop(&sender, &shutdown_clone, poll_timeout);
            })
            .expect("Failed to spawn input thread");

        Self {
            handle: Some(handle),
            shutdown,
        }
    }

    /// Signal the reader thread to shut down.
    pub fn shutdown(&self) {
        self.shutdown.store(true, Ordering::Relaxed);
    }

    /// Signal shutdown and wait for the thread to finish.
    pub fn join(mut self) {
        self.shutdown();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }

    /// Main polling loop.
    fn run_loop(sender: &Sender<Command>, shutdown: &Arc<AtomicBool>, poll_timeout: Duration) {
        loop {
            if shutdown.load(Ordering::Relaxed) {
                break;
            }

            match event::poll(poll_timeout) {
                Ok(true) => match event::read() {
                    Ok(event) => {
                        if let Some(command) = decode(&event) {
                            if sender.send(command).is_err() {
                                // Receiver dropped, exit
                                break;
                            }
                        }
                    }
                    Err(_) => {
                        let _ = sender.send(Command::Stop);
                        break;
                    }
                },
                Ok(false) => {
                    // No event, continue loop (will check shutdown)
                }
                Err(_) => {
                    let _ = sender.send(Command::Stop);
                    break;
                }
            }
        }
    }
}

impl Drop for CommandReader {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyEventState};

    fn press(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        })
    }

    #[test]
    fn test_decode_printable_chars() {
        assert_eq!(
            decode(&press(KeyCode::Char('a'), KeyModifiers::NONE)),
            Some(Command::InsertChar('a'))
        );
        assert_eq!(
            decode(&press(KeyCode::Char('Z'), KeyModifiers::SHIFT)),
            Some(Command::InsertChar('Z'))
        );
    }

    #[test]
    fn test_decode_editing_keys() {
        assert_eq!(
            decode(&press(KeyCode::Backspace, KeyModifiers::NONE)),
            Some(Command::DeleteChar)
        );
        assert_eq!(
            decode(&press(KeyCode::Enter, KeyModifiers::NONE)),
            Some(Command::NewLine)
        );
    }

    #[test]
    fn test_decode_undo_is_ctrl_z() {
        assert_eq!(
            decode(&press(KeyCode::Char('z'), KeyModifiers::CONTROL)),
            Some(Command::Undo)
        );
        // A bare 'z' types the letter; the original bound it to undo and
        // made the letter untypable.
        assert_eq!(
            decode(&press(KeyCode::Char('z'), KeyModifiers::NONE)),
            Some(Command::InsertChar('z'))
        );
    }

    #[test]
    fn test_decode_arrows() {
        assert_eq!(
            decode(&press(KeyCode::Up, KeyModifiers::NONE)),
            Some(Command::MoveUp)
        );
        assert_eq!(
            decode(&press(KeyCode::Down, KeyModifiers::NONE)),
            Some(Command::MoveDown)
        );
        assert_eq!(
            decode(&press(KeyCode::Left, KeyModifiers::NONE)),
            Some(Command::MoveLeft)
        );
        assert_eq!(
            decode(&press(KeyCode::Right, KeyModifiers::NONE)),
            Some(Command::MoveRight)
        );
    }

    #[test]
    fn test_decode_stop_keys() {
        assert_eq!(
            decode(&press(KeyCode::Esc, KeyModifiers::NONE)),
            Some(Command::Stop)
        );
        assert_eq!(
            decode(&press(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Command::Stop)
        );
    }

    #[test]
    fn test_decode_ignores_release_and_unmapped() {
        let release = Event::Key(KeyEvent {
            code: KeyCode::Char('a'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert_eq!(decode(&release), None);
        assert_eq!(decode(&press(KeyCode::F(5), KeyModifiers::NONE)), None);
        assert_eq!(decode(&press(KeyCode::Tab, KeyModifiers::NONE)), None);
        assert_eq!(
            decode(&press(KeyCode::Char('x'), KeyModifiers::ALT)),
            None
        );
        assert_eq!(decode(&Event::FocusGained), None);
    }
}
