//! Site configuration.
//!
//! Page content (owner, nav links, filters, projects, skills) and the timing
//! constants of every effect come from one TOML document embedded in the
//! page binary.

use std::collections::HashSet;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::types::ALL_FILTER;

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub owner: String,
    pub role: String,
    pub tagline: String,
    /// Address written to the clipboard by the copy control.
    pub email: String,
    pub skills: Vec<String>,
    pub nav: Vec<NavLink>,
    pub filters: Vec<FilterControl>,
    pub projects: Vec<ProjectEntry>,
    pub demo: DemoCard,
    pub timings: Timings,
    pub sampler: SamplerConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            owner: "Portfolio".into(),
            role: String::new(),
            tagline: String::new(),
            email: String::new(),
            skills: Vec::new(),
            nav: Vec::new(),
            filters: vec![FilterControl {
                name: ALL_FILTER.into(),
                label: "All".into(),
            }],
            projects: Vec::new(),
            demo: DemoCard::default(),
            timings: Timings::default(),
            sampler: SamplerConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NavLink {
    pub label: String,
    /// `#section` for in-page links, anything else navigates away.
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FilterControl {
    /// Compared against each card's category; `all` reveals everything.
    pub name: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProjectEntry {
    pub title: String,
    pub category: String,
    pub tag: String,
    #[serde(default)]
    pub description: String,
}

/// Template for cards created by the add control.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DemoCard {
    pub category: String,
    pub tag: String,
    pub description: String,
}

impl Default for DemoCard {
    fn default() -> Self {
        Self {
            category: "web".into(),
            tag: "Web".into(),
            description: "Created dynamically from the add control.".into(),
        }
    }
}

/// Durations in milliseconds, offsets in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct Timings {
    pub copy_restore_ms: u32,
    pub highlight_ms: u32,
    pub scroll_ms: u32,
    /// Height of the fixed header subtracted from scroll targets.
    pub header_offset: f64,
    pub fade_in_ms: u32,
    pub fade_out_ms: u32,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            copy_restore_ms: 2000,
            highlight_ms: 800,
            scroll_ms: 500,
            header_offset: 70.0,
            fade_in_ms: 300,
            fade_out_ms: 200,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct SamplerConfig {
    /// Draws strictly above this value are logged.
    pub threshold: f64,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self { threshold: 0.95 }
    }
}

impl SiteConfig {
    /// Parse and validate a TOML site document.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: SiteConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse `source`, falling back to the default site when it is unusable.
    pub fn load_or_default(source: &str) -> Self {
        match Self::from_toml_str(source) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(error = %e, "falling back to default site config");
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.filters.is_empty() {
            return Err(Error::InvalidConfig("no filter controls".into()));
        }

        let mut seen = HashSet::new();
        for filter in &self.filters {
            if !seen.insert(filter.name.as_str()) {
                return Err(Error::InvalidConfig(format!(
                    "duplicate filter '{}'",
                    filter.name
                )));
            }
        }
        if !seen.contains(ALL_FILTER) {
            return Err(Error::InvalidConfig(format!(
                "missing '{ALL_FILTER}' filter"
            )));
        }

        if let Some(link) = self.nav.iter().find(|l| l.href.trim().is_empty()) {
            return Err(Error::InvalidConfig(format!(
                "nav link '{}' has an empty href",
                link.label
            )));
        }

        let t = &self.timings;
        if t.copy_restore_ms == 0 || t.highlight_ms == 0 {
            return Err(Error::InvalidConfig(
                "revert delays must be positive".into(),
            ));
        }
        if !t.header_offset.is_finite() {
            return Err(Error::InvalidConfig("header offset must be finite".into()));
        }
        if !(0.0..=1.0).contains(&self.sampler.threshold) {
            return Err(Error::InvalidConfig(format!(
                "sampler threshold {} outside [0, 1]",
                self.sampler.threshold
            )));
        }

        Ok(())
    }
}
