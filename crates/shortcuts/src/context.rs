//! Host UI snapshot used for suppression and guard decisions

use crate::models::MessageId;

/// Read-only snapshot of host UI state, supplied with every key event.
///
/// The dispatcher holds no reference to host state between events; each
/// decision is made against the snapshot for that keystroke. The
/// selected item carries its id (not just a presence flag) so guarded
/// actions can hand it to the matching callback.
#[derive(Debug, Clone)]
pub struct ShortcutContext {
    /// Master switch from user preferences
    pub shortcuts_enabled: bool,
    /// Compose overlay is open (blocking modal)
    pub compose_open: bool,
    /// Settings panel is open (blocking modal)
    pub settings_open: bool,
    pub command_palette_open: bool,
    pub shortcuts_help_open: bool,
    /// Currently selected mail item, if any
    pub selected: Option<MessageId>,
}

impl Default for ShortcutContext {
    fn default() -> Self {
        Self {
            shortcuts_enabled: true,
            compose_open: false,
            settings_open: false,
            command_palette_open: false,
            shortcuts_help_open: false,
            selected: None,
        }
    }
}

impl ShortcutContext {
    /// Whether a blocking modal is open.
    ///
    /// Permissive on conflicting flags: any modal flag being true is
    /// sufficient to suppress shortcuts.
    pub fn modal_open(&self) -> bool {
        self.compose_open || self.settings_open
    }

    pub fn has_selection(&self) -> bool {
        self.selected.is_some()
    }
}
