//! Timed scroll animation used by in-page navigation.

use std::f64::consts::PI;

/// Swing easing: slow start, slow finish.
pub fn swing(progress: f64) -> f64 {
    0.5 - (progress * PI).cos() / 2.0
}

/// A vertical scroll from `from` to `to` over a fixed duration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollPlan {
    pub from: f64,
    pub to: f64,
    pub duration_ms: u32,
}

impl ScrollPlan {
    /// Plan a scroll that lands `header_offset` pixels above `section_top`.
    pub fn to_section(from: f64, section_top: f64, header_offset: f64, duration_ms: u32) -> Self {
        Self {
            from,
            to: (section_top - header_offset).max(0.0),
            duration_ms,
        }
    }

    /// Scroll position `elapsed_ms` after the animation started.
    pub fn position_at(&self, elapsed_ms: f64) -> f64 {
        if self.is_finished(elapsed_ms) {
            return self.to;
        }
        let progress = (elapsed_ms / f64::from(self.duration_ms)).clamp(0.0, 1.0);
        self.from + (self.to - self.from) * swing(progress)
    }

    pub fn is_finished(&self, elapsed_ms: f64) -> bool {
        elapsed_ms >= f64::from(self.duration_ms)
    }
}
