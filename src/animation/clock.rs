use crate::transform::non_linear::{clamp01, sanitize_delta};

/// Progress units gained per second of playback (a full run takes 2 s).
pub const PROGRESS_PER_SECOND: f32 = 0.5;

/// Coarse view of an [`AnimationClock`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum PlaybackPhase {
    /// Stopped before reaching the end (initial and after reset).
    Idle,
    /// Advancing on every tick.
    Playing,
    /// Stopped at progress 1.
    Done,
}

/// Progress of one animation.
///
/// Progress stays in `[0, 1]` and the playing flag is never set at progress 1.
/// All transitions return a new value.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize)]
pub struct AnimationClock {
    progress: f32,
    playing: bool,
}

impl AnimationClock {
    /// Progress 0, not playing.
    pub const IDLE: Self = Self {
        progress: 0.0,
        playing: false,
    };

    /// Stopped at the end pose.
    pub const COMPLETED: Self = Self {
        progress: 1.0,
        playing: false,
    };

    /// Current progress in `[0, 1]`.
    pub fn progress(self) -> f32 {
        self.progress
    }

    /// Playing flag; never set at progress 1.
    pub fn is_playing(self) -> bool {
        self.playing
    }

    /// Derived phase; see [`PlaybackPhase`].
    pub fn phase(self) -> PlaybackPhase {
        if self.playing {
            PlaybackPhase::Playing
        } else if self.progress >= 1.0 {
            PlaybackPhase::Done
        } else {
            PlaybackPhase::Idle
        }
    }

    /// Restart from progress 0, whatever the current phase.
    #[must_use]
    pub fn start(self) -> Self {
        Self {
            progress: 0.0,
            playing: true,
        }
    }

    /// Back to [`AnimationClock::IDLE`] from any phase.
    #[must_use]
    pub fn reset(self) -> Self {
        Self::IDLE
    }

    /// Advance by `delta_secs` of wall-clock time. No-op unless playing.
    #[must_use]
    pub fn tick(self, delta_secs: f32) -> Self {
        if !self.playing {
            return self;
        }
        let progress = (self.progress + PROGRESS_PER_SECOND * sanitize_delta(delta_secs)).min(1.0);
        Self {
            progress,
            playing: progress < 1.0,
        }
    }

    /// Paused at `progress` (clamped).
    pub fn paused_at(progress: f32) -> Self {
        Self {
            progress: clamp01(progress),
            playing: false,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/clock.rs"]
mod tests;
