use serde::{Deserialize, Serialize};

/// Duration-based progress over the game timeline.
///
/// `advance(now)` maps elapsed time into [0.0, 1.0]. A looping timer wraps
/// back to zero, a one-shot timer freezes at 1.0 and raises `completed`
/// permanently. Pausing preserves elapsed progress exactly: resuming shifts
/// the start forward by the paused duration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Timer {
    start_time: f32,
    duration: f32,
    looping: bool,
    paused: bool,
    pause_time: f32,
    completed: bool,
}

impl Timer {
    pub fn new(now: f32, duration: f32) -> Self {
        Self {
            start_time: now,
            duration,
            looping: false,
            paused: false,
            pause_time: 0.0,
            completed: false,
        }
    }

    pub fn looping(now: f32, duration: f32) -> Self {
        Self {
            looping: true,
            ..Self::new(now, duration)
        }
    }

    pub fn advance(&mut self, now: f32) -> Option<f32> {
        if self.paused {
            return None;
        }
        if self.completed {
            return Some(1.0);
        }
        let elapsed = now - self.start_time;
        let mut progress = elapsed / self.duration;
        if progress >= 1.0 {
            if self.looping {
                self.start_time = now;
                progress = 0.0;
            } else {
                self.completed = true;
                progress = 1.0;
            }
        }
        Some(progress.max(0.0))
    }

    pub fn pause(&mut self, now: f32) {
        if !self.paused {
            self.paused = true;
            self.pause_time = now;
        }
    }

    pub fn resume(&mut self, now: f32) {
        if self.paused {
            self.start_time += now - self.pause_time;
            self.paused = false;
        }
    }

    pub fn reset(&mut self, now: f32) {
        self.start_time = now;
        self.completed = false;
    }

    /// Shifts the timeline anchor forward, used when the whole match
    /// was suspended and every live timer must keep its elapsed value.
    pub fn shift(&mut self, seconds: f32) {
        self.start_time += seconds;
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }
}
