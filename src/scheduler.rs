//! Redraw cadence for the watch face
//!
//! Ticks land on wall-clock multiples of the period, so the animation stays
//! in step with the second hand. Times are plain milliseconds so the logic
//! can be driven from tests without a real clock.

use std::time::Duration;

/// What the event loop should do when a tick fires
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// Step the simulation, then repaint
    Advance,
    /// Repaint only (ambient mode keeps the hands current)
    Repaint,
}

pub struct Scheduler {
    rate_ms: u64,
    ambient_rate_ms: u64,
    visible: bool,
    ambient: bool,
    due_ms: u64,
}

impl Scheduler {
    pub fn new(rate: Duration, ambient_rate: Duration) -> Self {
        Self {
            rate_ms: (rate.as_millis() as u64).max(1),
            ambient_rate_ms: (ambient_rate.as_millis() as u64).max(1),
            visible: true,
            ambient: false,
            due_ms: 0,
        }
    }

    /// Simulation only runs while visible and interactive
    pub fn is_running(&self) -> bool {
        self.visible && !self.ambient
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_ambient(&self) -> bool {
        self.ambient
    }

    /// Returns true if the visibility changed
    pub fn set_visible(&mut self, visible: bool) -> bool {
        if self.visible == visible {
            return false;
        }
        self.visible = visible;
        self.due_ms = 0;
        true
    }

    /// Returns true if ambient mode changed
    pub fn set_ambient(&mut self, ambient: bool) -> bool {
        if self.ambient == ambient {
            return false;
        }
        self.ambient = ambient;
        self.due_ms = 0;
        true
    }

    /// Change the interactive cadence
    pub fn set_rate(&mut self, rate: Duration) {
        self.rate_ms = (rate.as_millis() as u64).max(1);
        self.due_ms = 0;
    }

    pub fn rate(&self) -> Duration {
        Duration::from_millis(self.rate_ms)
    }

    fn period_ms(&self) -> u64 {
        if self.ambient {
            self.ambient_rate_ms
        } else {
            self.rate_ms
        }
    }

    /// How long the event loop may block before the next tick is due
    pub fn timeout(&self, now_ms: u64) -> Duration {
        Duration::from_millis(self.due_ms.saturating_sub(now_ms))
    }

    /// Fire the tick if it is due and schedule the next one
    pub fn poll(&mut self, now_ms: u64) -> Option<Tick> {
        if now_ms < self.due_ms {
            return None;
        }
        let period = self.period_ms();
        self.due_ms = now_ms + period - now_ms % period;

        if !self.visible {
            None
        } else if self.ambient {
            Some(Tick::Repaint)
        } else {
            Some(Tick::Advance)
        }
    }
}
