//! Shortcuts crate - keyboard shortcut layer for the Whymail client
//!
//! This crate provides everything between a raw key-down event and a
//! host action callback:
//! - Key event and host context snapshot types
//! - A static command table with Gmail-style bindings
//! - The sequence-aware keystroke dispatcher
//! - The shortcut catalog rendered by the help overlay
//! - The persisted user preference cache
//!
//! This crate has zero UI dependencies. The host supplies key events, a
//! context snapshot per event, a timer facility for the sequence reset,
//! and the action callbacks.

pub mod command;
pub mod context;
pub mod dispatcher;
pub mod event;
pub mod keymap;
pub mod models;
pub mod prefs;
pub mod timer;

pub use command::{Command, ShortcutActions};
pub use context::ShortcutContext;
pub use dispatcher::{Dispatcher, SEQUENCE_TIMEOUT};
pub use event::KeyEvent;
pub use keymap::{KeymapError, Shortcut, ShortcutCategory, shortcuts_help};
pub use models::{Folder, MessageId};
pub use prefs::{Density, Preferences, Theme};
pub use timer::{TimerHost, TimerToken};
