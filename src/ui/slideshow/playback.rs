// SPDX-License-Identifier: MPL-2.0
//! Auto-advance state machine.
//!
//! The repeating timer is an `iced::time::every` subscription that exists
//! only while the state is [`AutoAdvance::Running`]. Each start gets a fresh
//! [`TimerHandle`] generation and every tick carries the generation it was
//! scheduled under, so a tick queued before a stop is recognised as stale.

/// Identity of one run of the auto-advance timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle {
    generation: u64,
}

impl TimerHandle {
    #[must_use]
    pub fn generation(self) -> u64 {
        self.generation
    }
}

/// Auto-advance is either stopped or running under a live handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AutoAdvance {
    #[default]
    Stopped,
    Running(TimerHandle),
}

impl AutoAdvance {
    #[must_use]
    pub fn is_running(self) -> bool {
        matches!(self, Self::Running(_))
    }

    #[must_use]
    pub fn handle(self) -> Option<TimerHandle> {
        match self {
            Self::Running(handle) => Some(handle),
            Self::Stopped => None,
        }
    }

    /// True if a tick scheduled under `generation` belongs to the live run.
    #[must_use]
    pub fn accepts(self, generation: u64) -> bool {
        matches!(self, Self::Running(handle) if handle.generation == generation)
    }
}

/// Issues timer handles and owns the auto-advance state.
#[derive(Debug, Clone, Default)]
pub struct Playback {
    state: AutoAdvance,
    next_generation: u64,
}

impl Playback {
    #[must_use]
    pub fn state(&self) -> AutoAdvance {
        self.state
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.state.is_running()
    }

    /// Starts a new run if stopped. Returns the live handle either way.
    pub fn start(&mut self) -> TimerHandle {
        if let AutoAdvance::Running(handle) = self.state {
            return handle;
        }
        let handle = TimerHandle {
            generation: self.next_generation,
        };
        self.next_generation = self.next_generation.wrapping_add(1);
        self.state = AutoAdvance::Running(handle);
        handle
    }

    /// Cancels the current run. Stopping while stopped is a no-op.
    ///
    /// Returns the handle that was cancelled, if any.
    pub fn stop(&mut self) -> Option<TimerHandle> {
        let cancelled = self.state.handle();
        self.state = AutoAdvance::Stopped;
        cancelled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_stopped() {
        let playback = Playback::default();
        assert_eq!(playback.state(), AutoAdvance::Stopped);
        assert!(!playback.is_running());
    }

    #[test]
    fn each_start_gets_a_new_generation() {
        let mut playback = Playback::default();
        let first = playback.start();
        playback.stop();
        let second = playback.start();
        assert_ne!(first.generation(), second.generation());
    }

    #[test]
    fn start_while_running_keeps_handle() {
        let mut playback = Playback::default();
        let first = playback.start();
        assert_eq!(playback.start(), first);
    }

    #[test]
    fn stop_is_idempotent() {
        let mut playback = Playback::default();
        let handle = playback.start();
        assert_eq!(playback.stop(), Some(handle));
        assert_eq!(playback.stop(), None);
        assert_eq!(playback.state(), AutoAdvance::Stopped);
    }

    #[test]
    fn stale_generations_are_rejected() {
        let mut playback = Playback::default();
        let old = playback.start();
        playback.stop();
        assert!(!playback.state().accepts(old.generation()));

        let live = playback.start();
        assert!(playback.state().accepts(live.generation()));
        assert!(!playback.state().accepts(old.generation()));
    }
}
