use std::path::PathBuf;

pub mod create;
pub mod init;
pub mod regen;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Files written by the command, in write order.
    pub written: Vec<PathBuf>,
    /// Record file names listed in the regenerated index.
    pub listed: Vec<String>,
    /// The user declined a destructive step; nothing was changed.
    pub aborted: bool,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_written(mut self, paths: Vec<PathBuf>) -> Self {
        self.written = paths;
        self
    }

    pub fn with_listed(mut self, names: Vec<String>) -> Self {
        self.listed = names;
        self
    }

    pub fn aborted() -> Self {
        Self {
            aborted: true,
            ..Self::default()
        }
    }
}
