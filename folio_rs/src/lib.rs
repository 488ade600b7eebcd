//! # folio
//!
//! Interactive state for the folio portfolio page.
//!
//! The page itself is a Leptos CSR application (`folio-landing`). Everything
//! it does in response to user events lives here as plain Rust, so the
//! behaviour is testable without a browser:
//!
//! - **Activity log** - append-only trace of user actions rendered on the page
//! - **Theme, nav and filter state** - explicit fields of one [`Portfolio`] record
//! - **Project cards** - filtering, demo-card insertion, neighbor lookup
//! - **Timed reverts** - temporary overrides keyed by target, stale reverts dropped
//! - **Section sampler** - probability-gated click logging with an injected RNG
//!
//! ## Quick Start
//!
//! ```rust
//! use folio::{Portfolio, SiteConfig};
//!
//! let config = SiteConfig::from_toml_str(r#"
//! owner = "Ada"
//!
//! [[projects]]
//! title = "Parser"
//! category = "tools"
//! tag = "Tool"
//! "#).unwrap();
//!
//! let mut page = Portfolio::from_config(&config);
//! page.toggle_theme();
//! page.apply_filter("tools");
//!
//! assert_eq!(page.log().last(), Some("Filter: showing 'tools' projects"));
//! ```
//!
//! ## Architecture
//!
//! - [`portfolio`] - the state record and one method per handler
//! - [`config`] - TOML site document and timing constants
//! - [`effects`] - revert tickets for temporary overrides
//! - [`sampler`] - random source trait and section-click sampling
//! - [`scroll`] - eased scroll animation plans
//! - [`types`] - cards, theme, contact form
//!
//! ---
//!
//! Developed with 💀 by The Folio Team (c)2026

pub mod activity;
pub mod config;
pub mod effects;
pub mod error;
pub mod portfolio;
pub mod sampler;
pub mod scroll;
pub mod types;

pub use activity::ActivityLog;
pub use config::SiteConfig;
pub use error::{Error, Result};
pub use portfolio::{ContactSubmission, NavOutcome, Portfolio, is_internal_link};
pub use sampler::{RandomSource, ScriptedDraws, SectionClick};
pub use types::{ALL_FILTER, CardId, ContactForm, CopyButton, ProjectCard, Theme};
