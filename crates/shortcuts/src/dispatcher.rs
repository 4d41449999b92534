//! Keystroke dispatcher
//!
//! Consumes raw key-down events from the host, filters out events that
//! must not trigger shortcuts (editable focus, blocking modals, the
//! global preference switch), recognizes single-key and two-key sequence
//! triggers, and produces at most one [`Command`] per keystroke.
//!
//! The dispatcher is a small state machine over its sequence buffer:
//! idle until a qualifying key arrives, buffering while a sequence
//! prefix is pending, back to idle on a match, a timeout, or a
//! disqualifying event. The quiet-period reset is a cancellable alarm on
//! the host's timer facility, never a blocking wait. Nothing here ever
//! raises a user-visible error; an event matching no rule is consumed
//! silently.

use std::time::Duration;

use log::debug;

use crate::command::{Command, ShortcutActions};
use crate::context::ShortcutContext;
use crate::event::KeyEvent;
use crate::keymap;
use crate::timer::{TimerHost, TimerToken};

/// Quiet period after which a pending sequence prefix is discarded
pub const SEQUENCE_TIMEOUT: Duration = Duration::from_millis(1000);

const ESCAPE: &str = "Escape";

/// Multi-key shortcut dispatcher. One instance per UI session; no state
/// survives the session.
#[derive(Debug, Default)]
pub struct Dispatcher {
    /// Lower-cased characters accumulated since the last reset
    buffer: String,
    /// Token of the armed reset alarm, if any
    pending: Option<TimerToken>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pending sequence prefix, for hosts that display it
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Process one key-down event against the current host context.
    ///
    /// Returns at most one command. `timers` is the host alarm facility
    /// used to arm and cancel the sequence reset.
    pub fn handle(
        &mut self,
        event: &KeyEvent,
        ctx: &ShortcutContext,
        timers: &mut dyn TimerHost,
    ) -> Option<Command> {
        if !ctx.shortcuts_enabled {
            return None;
        }
        // Typing in a field never triggers shortcuts
        if event.editable_target {
            return None;
        }
        // A blocking modal swallows everything except Escape
        if ctx.modal_open() && event.key != ESCAPE {
            return None;
        }

        // Palette toggle wins over any pending sequence
        if event.meta_or_ctrl() && event.key == "k" {
            self.reset(timers);
            return Some(Command::ToggleCommandPalette);
        }

        if event.key == ESCAPE {
            // Highest-priority overlay first; other overlays handle
            // Escape themselves outside this layer
            if ctx.command_palette_open {
                return Some(Command::CloseCommandPalette);
            }
            if ctx.shortcuts_help_open {
                return Some(Command::CloseShortcutsHelp);
            }
            return None;
        }

        if event.key == "?" {
            self.reset(timers);
            return Some(Command::OpenShortcutsHelp);
        }

        // Shift+U skips the buffer entirely: it neither joins a sequence
        // nor disturbs one when its guard fails
        if event.shift && event.key == "U" {
            if let Some(cmd) = keymap::shifted_command(&event.key, ctx) {
                self.reset(timers);
                return Some(cmd);
            }
            return None;
        }

        let Some(ch) = event.as_char() else {
            // Named keys (Enter, arrows, bare modifiers) cannot extend a
            // sequence; drop any pending prefix
            self.reset(timers);
            return None;
        };

        if let Some(token) = self.pending.take() {
            timers.cancel(token);
        }
        self.buffer.extend(ch.to_lowercase());

        if let Some(cmd) = keymap::sequence_command(&self.buffer) {
            debug!("sequence {:?} matched", self.buffer);
            self.buffer.clear();
            return Some(cmd);
        }

        self.pending = Some(timers.schedule(SEQUENCE_TIMEOUT));

        // Single-key triggers only engage as the first key of a would-be
        // sequence; any buffered prefix suppresses them. A guard failure
        // leaves the key buffered as a sequence candidate.
        if self.buffer.chars().count() == 1
            && let Some(cmd) = keymap::single_key_command(&event.key, ctx)
        {
            self.reset(timers);
            return Some(cmd);
        }

        None
    }

    /// Handle the event and route any resulting command to the host
    pub fn dispatch(
        &mut self,
        event: &KeyEvent,
        ctx: &ShortcutContext,
        timers: &mut dyn TimerHost,
        actions: &mut dyn ShortcutActions,
    ) {
        if let Some(cmd) = self.handle(event, ctx, timers) {
            cmd.apply(actions);
        }
    }

    /// Host callback for a fired reset alarm.
    ///
    /// Clears the buffer iff `token` is the currently armed alarm;
    /// fires from cancelled or superseded alarms are ignored.
    pub fn on_timeout(&mut self, token: TimerToken) {
        if self.pending == Some(token) {
            debug!("sequence {:?} timed out", self.buffer);
            self.pending = None;
            self.buffer.clear();
        }
    }

    fn reset(&mut self, timers: &mut dyn TimerHost) {
        self.buffer.clear();
        if let Some(token) = self.pending.take() {
            timers.cancel(token);
        }
    }
}
