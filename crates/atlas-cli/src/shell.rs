//! Interactive menu shell
//!
//! The shell owns the console's read/write ends and dispatches menu
//! selections to the action handlers in `commands`. It is generic over the
//! reader and writer so tests can script a whole session against in-memory
//! buffers.

use std::sync::Arc;

use atlas_storage::StorageBackend;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::commands;
use crate::config::Config;

pub const MAIN_MENU: &str = "Main Menu - Select an action:\n1. Help\n2. Add\n3. Delete\n4. Path\n5. Exit";
pub const MODEL_MENU: &str = "Select model:\n1. City\n2. Road";
pub const HELP_TEXT: &str =
    "Select a number from shown menu and enter. For example 1 is for help.";
pub const INVALID_INPUT: &str = "Invalid input. Please enter 1 for more info.";

/// A main-menu action selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Help,
    Add,
    Delete,
    Path,
    Exit,
}

impl MenuAction {
    /// Map a numeric selector to an action
    pub fn from_selector(s: &str) -> Option<Self> {
        match s.trim().parse::<u32>().ok()? {
            1 => Some(Self::Help),
            2 => Some(Self::Add),
            3 => Some(Self::Delete),
            4 => Some(Self::Path),
            5 => Some(Self::Exit),
            _ => None,
        }
    }
}

/// The interactive console shell
pub struct Shell<R, W> {
    reader: R,
    writer: W,
    storage: Arc<dyn StorageBackend>,
    config: Config,
}

impl<R, W> Shell<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(reader: R, writer: W, storage: Arc<dyn StorageBackend>, config: Config) -> Self {
        Self {
            reader,
            writer,
            storage,
            config,
        }
    }

    pub(crate) fn storage(&self) -> &dyn StorageBackend {
        self.storage.as_ref()
    }

    pub(crate) fn config(&self) -> &Config {
        &self.config
    }

    /// Run the menu loop until Exit or end of input
    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            self.write_line(MAIN_MENU).await?;

            let Some(line) = self.read_line().await? else {
                break;
            };

            match MenuAction::from_selector(&line) {
                Some(MenuAction::Help) => self.write_line(HELP_TEXT).await?,
                Some(MenuAction::Add) => commands::add::run(self).await?,
                Some(MenuAction::Delete) => commands::delete::run(self).await?,
                Some(MenuAction::Path) => commands::path::run(self).await?,
                Some(MenuAction::Exit) => break,
                None => self.write_line(INVALID_INPUT).await?,
            }
        }

        tracing::debug!("Shell loop finished");
        Ok(())
    }

    /// Read one trimmed line; `None` means end of input
    pub(crate) async fn read_line(&mut self) -> std::io::Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line).await? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Write a line and flush so prompts appear before the next read
    pub(crate) async fn write_line(&mut self, text: &str) -> std::io::Result<()> {
        self.writer.write_all(text.as_bytes()).await?;
        self.writer.write_all(b"\n").await?;
        self.writer.flush().await?;
        Ok(())
    }
}
