//! Commands produced by the dispatcher and the host callback surface

use crate::models::{Folder, MessageId};

/// A single host action requested by the dispatcher.
///
/// At most one command is produced per keystroke. A command is a plain
/// side-effect description; routing to the host happens in
/// [`Command::apply`], so dispatch logic stays testable without a UI
/// harness.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    OpenCompose,
    Reply(MessageId),
    ReplyAll(MessageId),
    Forward(MessageId),
    NavigateFolder(Folder),
    ToggleStar(MessageId),
    MarkUnread(MessageId),
    DeleteItem(MessageId),
    ToggleCommandPalette,
    OpenShortcutsHelp,
    CloseShortcutsHelp,
    CloseCommandPalette,
}

/// Host-supplied action callbacks.
///
/// Implemented by the host against its own state containers. Callbacks
/// may mutate host state freely; the dispatcher never inspects the
/// result and never surfaces errors.
pub trait ShortcutActions {
    fn open_compose(&mut self);
    fn open_compose_reply(&mut self, target: &MessageId);
    fn open_compose_reply_all(&mut self, target: &MessageId);
    fn open_compose_forward(&mut self, target: &MessageId);
    fn navigate_folder(&mut self, folder: Folder);
    fn toggle_star(&mut self, id: &MessageId);
    fn mark_unread(&mut self, id: &MessageId);
    fn delete_item(&mut self, id: &MessageId);
    fn toggle_command_palette(&mut self);
    fn open_shortcuts_help(&mut self);
    fn close_shortcuts_help(&mut self);
    fn close_command_palette(&mut self);
}

impl Command {
    /// Invoke the host callback corresponding to this command
    pub fn apply(&self, actions: &mut dyn ShortcutActions) {
        match self {
            Command::OpenCompose => actions.open_compose(),
            Command::Reply(target) => actions.open_compose_reply(target),
            Command::ReplyAll(target) => actions.open_compose_reply_all(target),
            Command::Forward(target) => actions.open_compose_forward(target),
            Command::NavigateFolder(folder) => actions.navigate_folder(*folder),
            Command::ToggleStar(id) => actions.toggle_star(id),
            Command::MarkUnread(id) => actions.mark_unread(id),
            Command::DeleteItem(id) => actions.delete_item(id),
            Command::ToggleCommandPalette => actions.toggle_command_palette(),
            Command::OpenShortcutsHelp => actions.open_shortcuts_help(),
            Command::CloseShortcutsHelp => actions.close_shortcuts_help(),
            Command::CloseCommandPalette => actions.close_command_palette(),
        }
    }
}
