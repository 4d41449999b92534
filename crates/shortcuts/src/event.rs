//! Key event input type
//!
//! Hosts translate their native key-down events into [`KeyEvent`]s
//! before handing them to the dispatcher. Key identifiers follow the DOM
//! convention: printable keys are the character itself ("c", "?", "U"),
//! everything else is a name ("Escape", "Enter", "ArrowDown").

/// One physical keystroke as seen by the dispatcher
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyEvent {
    /// Logical key identifier
    pub key: String,
    /// Shift was held
    pub shift: bool,
    /// Control was held
    pub ctrl: bool,
    /// Meta (Cmd/Win) was held
    pub meta: bool,
    /// The event target is a text-input-like element
    pub editable_target: bool,
}

impl KeyEvent {
    /// Create an unmodified key event
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            shift: false,
            ctrl: false,
            meta: false,
            editable_target: false,
        }
    }

    pub fn with_shift(mut self) -> Self {
        self.shift = true;
        self
    }

    pub fn with_ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    pub fn with_meta(mut self) -> Self {
        self.meta = true;
        self
    }

    /// Mark the event as originating from an editable element
    pub fn in_editable(mut self) -> Self {
        self.editable_target = true;
        self
    }

    /// Either of the command modifiers (Ctrl on Linux/Windows, Cmd on macOS)
    pub fn meta_or_ctrl(&self) -> bool {
        self.ctrl || self.meta
    }

    /// The single printable character for this key, if it is one.
    ///
    /// Named keys like "Escape" or "Enter" return `None`; they can never
    /// extend a sequence.
    pub(crate) fn as_char(&self) -> Option<char> {
        let mut chars = self.key.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Some(c),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_flags() {
        let event = KeyEvent::new("k").with_ctrl();
        assert!(event.meta_or_ctrl());
        assert!(!event.shift);

        let event = KeyEvent::new("k").with_meta();
        assert!(event.meta_or_ctrl());

        let event = KeyEvent::new("k");
        assert!(!event.meta_or_ctrl());
    }

    #[test]
    fn test_as_char() {
        assert_eq!(KeyEvent::new("c").as_char(), Some('c'));
        assert_eq!(KeyEvent::new("#").as_char(), Some('#'));
        assert_eq!(KeyEvent::new("Escape").as_char(), None);
        assert_eq!(KeyEvent::new("").as_char(), None);
    }
}
