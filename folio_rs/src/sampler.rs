//! Probability-gated logging of clicks inside page sections.
//!
//! Logging every click would flood the activity log, so only draws above the
//! configured threshold are reported. The random source is injected.

use std::collections::VecDeque;

/// Uniform draws in `[0, 1)`.
pub trait RandomSource {
    fn next_draw(&mut self) -> f64;
}

/// Replays a fixed sequence of draws, then returns `0.0`.
#[derive(Debug, Clone, Default)]
pub struct ScriptedDraws {
    draws: VecDeque<f64>,
}

impl ScriptedDraws {
    pub fn new(draws: impl IntoIterator<Item = f64>) -> Self {
        Self {
            draws: draws.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.draws.len()
    }
}

impl RandomSource for ScriptedDraws {
    fn next_draw(&mut self) -> f64 {
        self.draws.pop_front().unwrap_or(0.0)
    }
}

/// What the browser found around a click target.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionClick {
    /// `id` of the nearest enclosing `<section>`; `None` when there is none.
    pub section_id: Option<String>,
    /// The target sits inside a button, link, input or textarea.
    pub on_control: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionSampler {
    threshold: f64,
}

impl Default for SectionSampler {
    fn default() -> Self {
        Self { threshold: 0.95 }
    }
}

impl SectionSampler {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Section id to report for `click`, if this click is sampled.
    ///
    /// Ineligible clicks consume no draw.
    pub fn sample<'a>(
        &self,
        click: &'a SectionClick,
        rng: &mut impl RandomSource,
    ) -> Option<&'a str> {
        if click.on_control {
            return None;
        }
        let section = click.section_id.as_deref()?;
        (rng.next_draw() > self.threshold).then_some(section)
    }
}
