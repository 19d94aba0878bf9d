//! Session: Owns one buffer and drives it from decoded commands.
//!
//! A caller constructs one session, which owns the buffer for its whole
//! lifetime and feeds it from the command channel until `Stop`. There is
//! no process-global state: dropping the session restores the terminal and
//! everything it owned goes with it.

use crate::buffer::LinkedTextBuffer;
use crate::input::{Command, CommandReader};
use crate::render::Screen;
use crossbeam_channel::{bounded, Receiver, RecvTimeoutError};
use crossterm::{
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Write};
use std::time::Duration;

/// Configuration for a [`Session`].
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Input poll timeout for the reader thread.
    pub poll_timeout: Duration,
    /// How long the loop waits on the channel before idling.
    pub recv_timeout: Duration,
    /// Whether to use the alternate screen buffer.
    pub alternate_screen: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            poll_timeout: Duration::from_millis(10),
            recv_timeout: Duration::from_millis(100),
            alternate_screen: true,
        }
    }
}

/// An interactive editing session over one [`LinkedTextBuffer`].
pub struct Session {
    /// Configuration.
    config: SessionConfig,
    /// The buffer this session owns and mutates.
    buffer: LinkedTextBuffer,
    /// Decoded command receiver.
    commands: Receiver<Command>,
    /// Reader thread handle.
    reader: Option<CommandReader>,
    /// Frame painter.
    screen: Screen,
}

impl Session {
    /// Create a session with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal setup fails (raw mode, alternate
    /// screen).
    pub fn new() -> io::Result<Self> {
        Self::with_config(SessionConfig::default())
    }

    /// Create a session with custom configuration.
    ///
    /// Enables raw mode, optionally enters the alternate screen, and
    /// spawns the command reader thread.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal setup fails.
    pub fn with_config(config: SessionConfig) -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        if config.alternate_screen {
            execute!(io::stdout(), EnterAlternateScreen)?;
        }

        let (command_tx, command_rx) = bounded::<Command>(64);
        let reader = CommandReader::spawn(command_tx, config.poll_timeout);

        Ok(Self {
            config,
            buffer: LinkedTextBuffer::new(),
            commands: command_rx,
            reader: Some(reader),
            screen: Screen::new(),
        })
    }

    /// The buffer being edited.
    pub const fn buffer(&self) -> &LinkedTextBuffer {
        &self.buffer
    }

    /// Run the editing loop until `Stop` or the channel closes.
    ///
    /// Every applied command is followed by a repaint; idle timeouts paint
    /// nothing.
    ///
    /// # Errors
    ///
    /// Returns an error if painting a frame fails.
    pub fn run(&mut self) -> io::Result<()> {
        let mut stdout = io::stdout();
        self.screen.paint(&self.buffer, &mut stdout)?;

        loop {
            match self.commands.recv_timeout(self.config.recv_timeout) {
                Ok(Command::Stop) => break,
                Ok(command) => {
                    self.buffer.apply(command);
                    self.screen.paint(&self.buffer, &mut stdout)?;
                }
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => break,
            }
        }
        Ok(())
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        if let Some(reader) = self.reader.take() {
            reader.join();
        }

        // Restore terminal state
        let mut stdout = io::stdout();
        if self.config.alternate_screen {
            let _ = execute!(stdout, LeaveAlternateScreen);
        }
        let _ = terminal::disable_raw_mode();
        let _ = stdout.flush();
    }
}
