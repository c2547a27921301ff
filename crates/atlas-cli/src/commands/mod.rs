//! Shell action handlers

use std::fmt::Display;
use std::str::FromStr;

use tokio::io::{AsyncBufRead, AsyncWrite};

use crate::shell::Shell;

pub mod add;
pub mod delete;
pub mod path;

/// The entity kinds the console manages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    City,
    Road,
}

impl EntityKind {
    /// Map a numeric selector to a kind
    pub fn from_selector(s: &str) -> Option<Self> {
        match s.trim().parse::<u32>().ok()? {
            1 => Some(Self::City),
            2 => Some(Self::Road),
            _ => None,
        }
    }

    /// Label used in console messages
    pub fn label(&self) -> &'static str {
        match self {
            Self::City => "City",
            Self::Road => "Road",
        }
    }
}

/// Prompt for one field value until it parses; `None` means end of input
pub(crate) async fn prompt_field<R, W, T>(
    shell: &mut Shell<R, W>,
    field: &str,
) -> anyhow::Result<Option<T>>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
    T: FromStr,
    T::Err: Display,
{
    loop {
        shell.write_line(&format!("{field}=?")).await?;
        let Some(line) = shell.read_line().await? else {
            return Ok(None);
        };
        match line.parse::<T>() {
            Ok(value) => return Ok(Some(value)),
            Err(e) => {
                shell
                    .write_line(&format!("Invalid value for {field}: {e}"))
                    .await?
            }
        }
    }
}
