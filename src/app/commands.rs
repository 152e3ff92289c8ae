//! Commands posted by table callbacks.
//!
//! Action, row-click and page-size handlers run while a table is being drawn
//! and only see the row they were invoked with. They post a command here
//! instead of touching application state; the app drains the channel once
//! per frame.

use std::sync::mpsc::{channel, Receiver, Sender};

use logiview::RowId;

use crate::state::Tab;

/// A request raised from inside a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardCommand {
    /// Show a record in the details panel
    Inspect { tab: Tab, id: RowId },
    /// Overwrite a record's status field
    SetStatus { tab: Tab, id: RowId, status: String },
    /// Remove records from a dataset
    Delete { tab: Tab, ids: Vec<RowId> },
    /// The page-size selector of a table was changed
    PageSizeChanged { tab: Tab, size: usize },
}

pub type CommandSender = Sender<DashboardCommand>;

/// Both ends of the command channel.
pub struct CommandChannel {
    sender: CommandSender,
    receiver: Receiver<DashboardCommand>,
}

impl Default for CommandChannel {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandChannel {
    pub fn new() -> Self {
        let (sender, receiver) = channel();
        Self { sender, receiver }
    }

    /// A sender for a new handler.
    pub fn sender(&self) -> CommandSender {
        self.sender.clone()
    }

    /// Takes every command posted since the last call.
    pub fn drain(&self) -> Vec<DashboardCommand> {
        self.receiver.try_iter().collect()
    }
}
