//! Timer seam for the sequence reset alarm
//!
//! The dispatcher never sleeps. It asks the host to schedule a one-shot
//! alarm and clears its sequence buffer when the host reports the fire
//! through `Dispatcher::on_timeout`. Fires are delivered on the same
//! single-threaded queue as key events, so a keystroke arriving before
//! the fire always cancels it first.

use std::time::Duration;

/// Opaque handle for a scheduled reset alarm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerToken(pub u64);

/// Host timer facility: a cancellable one-shot alarm.
///
/// At most one alarm is live per dispatcher; arming a new one always
/// cancels the previous token first.
pub trait TimerHost {
    /// Schedule a one-shot alarm after `after`, returning its token
    fn schedule(&mut self, after: Duration) -> TimerToken;

    /// Cancel a previously scheduled alarm. Unknown or already-fired
    /// tokens must be ignored.
    fn cancel(&mut self, token: TimerToken);
}
