//! Keyboard shortcut definitions and help text
//!
//! Gmail-style bindings: single keys for mail actions, two-key G
//! sequences for folder navigation. The tables are static and read-only
//! at dispatch time; [`validate`] checks the no-collision invariant.

use thiserror::Error;

use crate::command::Command;
use crate::context::ShortcutContext;
use crate::models::{Folder, MessageId};

/// Fixed two-key sequences (lower-cased) mapped to folder navigation
const SEQUENCES: &[(&str, Folder)] = &[
    ("gi", Folder::Inbox),
    ("gs", Folder::Starred),
    ("gt", Folder::Sent),
    ("gd", Folder::Drafts),
];

/// What a single-key trigger does when it fires
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SingleAction {
    Compose,
    Reply,
    ReplyAll,
    Forward,
    ToggleStar,
    Delete,
}

impl SingleAction {
    fn command(self, selected: Option<&MessageId>) -> Option<Command> {
        match self {
            SingleAction::Compose => Some(Command::OpenCompose),
            SingleAction::Reply => selected.cloned().map(Command::Reply),
            SingleAction::ReplyAll => selected.cloned().map(Command::ReplyAll),
            SingleAction::Forward => selected.cloned().map(Command::Forward),
            SingleAction::ToggleStar => selected.cloned().map(Command::ToggleStar),
            SingleAction::Delete => selected.cloned().map(Command::DeleteItem),
        }
    }
}

/// A single-key trigger with an optional requires-selection guard
struct SingleKeyBinding {
    key: &'static str,
    requires_selection: bool,
    action: SingleAction,
}

const SINGLE_KEYS: &[SingleKeyBinding] = &[
    SingleKeyBinding {
        key: "c",
        requires_selection: false,
        action: SingleAction::Compose,
    },
    SingleKeyBinding {
        key: "s",
        requires_selection: true,
        action: SingleAction::ToggleStar,
    },
    SingleKeyBinding {
        key: "#",
        requires_selection: true,
        action: SingleAction::Delete,
    },
    SingleKeyBinding {
        key: "r",
        requires_selection: true,
        action: SingleAction::Reply,
    },
    SingleKeyBinding {
        key: "a",
        requires_selection: true,
        action: SingleAction::ReplyAll,
    },
    SingleKeyBinding {
        key: "f",
        requires_selection: true,
        action: SingleAction::Forward,
    },
];

/// Look up an exact sequence match for the lower-cased buffer contents
pub fn sequence_command(sequence: &str) -> Option<Command> {
    SEQUENCES
        .iter()
        .find(|(s, _)| *s == sequence)
        .map(|(_, folder)| Command::NavigateFolder(*folder))
}

/// Look up a single-key trigger for a raw key identifier.
///
/// Matching is case-sensitive: `C` (shift held) is not the compose key.
/// Returns `None` both for unbound keys and for guard failures; either
/// way the key stays in the sequence buffer as a prefix candidate.
pub fn single_key_command(key: &str, ctx: &ShortcutContext) -> Option<Command> {
    let binding = SINGLE_KEYS.iter().find(|b| b.key == key)?;
    if binding.requires_selection && !ctx.has_selection() {
        return None;
    }
    binding.action.command(ctx.selected.as_ref())
}

/// Shifted single-key trigger, evaluated outside the sequence buffer:
/// shift+U with a selection marks the item unread.
pub fn shifted_command(key: &str, ctx: &ShortcutContext) -> Option<Command> {
    if key == "U" {
        return ctx.selected.clone().map(Command::MarkUnread);
    }
    None
}

/// Command-table invariant violation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum KeymapError {
    #[error("duplicate sequence trigger: {0:?}")]
    DuplicateSequence(String),
    #[error("duplicate single-key trigger: {0:?}")]
    DuplicateKey(String),
    #[error("single-key trigger {key:?} shadows sequence {sequence:?}")]
    PrefixShadowed { key: String, sequence: String },
}

/// Check the no-collision invariant over the static tables.
///
/// A single-key trigger equal to the first key of a sequence would fire
/// and clear the buffer before the second key could arrive, making the
/// sequence unreachable.
pub fn validate() -> Result<(), KeymapError> {
    validate_tables(SEQUENCES, SINGLE_KEYS)
}

fn validate_tables(
    sequences: &[(&str, Folder)],
    single_keys: &[SingleKeyBinding],
) -> Result<(), KeymapError> {
    for (i, (seq, _)) in sequences.iter().enumerate() {
        if sequences[..i].iter().any(|(s, _)| s == seq) {
            return Err(KeymapError::DuplicateSequence((*seq).to_string()));
        }
    }
    for (i, binding) in single_keys.iter().enumerate() {
        if single_keys[..i].iter().any(|b| b.key == binding.key) {
            return Err(KeymapError::DuplicateKey(binding.key.to_string()));
        }
    }
    for (seq, _) in sequences {
        if let Some(binding) = single_keys.iter().find(|b| seq.starts_with(b.key)) {
            return Err(KeymapError::PrefixShadowed {
                key: binding.key.to_string(),
                sequence: (*seq).to_string(),
            });
        }
    }
    Ok(())
}

/// A category of keyboard shortcuts for display in the help overlay
pub struct ShortcutCategory {
    pub name: &'static str,
    pub shortcuts: Vec<Shortcut>,
}

/// A single keyboard shortcut for display
pub struct Shortcut {
    pub keys: &'static str,
    pub description: &'static str,
}

/// Returns categorized shortcuts for the help overlay
pub fn shortcuts_help() -> Vec<ShortcutCategory> {
    vec![
        ShortcutCategory {
            name: "Compose",
            shortcuts: vec![
                Shortcut {
                    keys: "C",
                    description: "New message",
                },
                Shortcut {
                    keys: "R",
                    description: "Reply",
                },
                Shortcut {
                    keys: "A",
                    description: "Reply all",
                },
                Shortcut {
                    keys: "F",
                    description: "Forward",
                },
            ],
        },
        ShortcutCategory {
            name: "Actions",
            shortcuts: vec![
                Shortcut {
                    keys: "S",
                    description: "Toggle star",
                },
                Shortcut {
                    keys: "Shift U",
                    description: "Mark as unread",
                },
                Shortcut {
                    keys: "#",
                    description: "Delete",
                },
            ],
        },
        ShortcutCategory {
            name: "Go To",
            shortcuts: vec![
                Shortcut {
                    keys: "G I",
                    description: "Go to Inbox",
                },
                Shortcut {
                    keys: "G S",
                    description: "Go to Starred",
                },
                Shortcut {
                    keys: "G T",
                    description: "Go to Sent",
                },
                Shortcut {
                    keys: "G D",
                    description: "Go to Drafts",
                },
            ],
        },
        ShortcutCategory {
            name: "Overlays",
            shortcuts: vec![
                Shortcut {
                    keys: "⌘K / Ctrl+K",
                    description: "Toggle command palette",
                },
                Shortcut {
                    keys: "?",
                    description: "Show this help",
                },
                Shortcut {
                    keys: "Escape",
                    description: "Close overlay",
                },
            ],
        },
    ]
}
