//! The page state record and every user-facing transition.
//!
//! Each method corresponds to one DOM event handler. It mutates the state,
//! appends to the [`ActivityLog`] and returns whatever the browser layer needs
//! to finish the job (a scroll plan, a revert ticket to schedule).

use crate::activity::ActivityLog;
use crate::config::{DemoCard, SiteConfig, Timings};
use crate::effects::{EffectTarget, PendingReverts, RevertTicket};
use crate::error::Error;
use crate::sampler::{RandomSource, SectionClick, SectionSampler};
use crate::scroll::ScrollPlan;
use crate::types::{ALL_FILTER, CardId, ContactForm, CopyButton, ProjectCard, Theme};

/// `true` for links that target a section of this page.
pub fn is_internal_link(href: &str) -> bool {
    href.starts_with('#')
}

/// Result of clicking a nav link.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NavOutcome {
    /// Not an in-page link; let the browser navigate.
    Follow,
    /// In-page link: default navigation suppressed and the link marked active.
    /// `scroll` is `None` when the target section is not on the page.
    Highlighted { scroll: Option<ScrollPlan> },
}

/// What a contact submission produced.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactSubmission {
    /// Field values as they were before clearing.
    pub form: ContactForm,
    /// Revert for the section highlight.
    pub ticket: RevertTicket,
}

/// Complete interactive state of the page.
#[derive(Debug, Clone)]
pub struct Portfolio {
    log: ActivityLog,
    theme: Theme,
    active_nav: Option<String>,
    active_filter: String,
    cards: Vec<ProjectCard>,
    next_card_id: CardId,
    demo: DemoCard,
    contact: ContactForm,
    success_visible: bool,
    contact_highlighted: bool,
    copy_button: CopyButton,
    footer_year: Option<i32>,
    reverts: PendingReverts,
    sampler: SectionSampler,
    timings: Timings,
}

impl Default for Portfolio {
    fn default() -> Self {
        Self::from_config(&SiteConfig::default())
    }
}

impl Portfolio {
    /// Build the initial state: dark theme, `all` filter, every card visible.
    pub fn from_config(config: &SiteConfig) -> Self {
        let mut portfolio = Self {
            log: ActivityLog::new(),
            theme: Theme::default(),
            active_nav: None,
            active_filter: ALL_FILTER.to_string(),
            cards: Vec::with_capacity(config.projects.len()),
            next_card_id: 0,
            demo: config.demo.clone(),
            contact: ContactForm::default(),
            success_visible: false,
            contact_highlighted: false,
            copy_button: CopyButton::Idle,
            footer_year: None,
            reverts: PendingReverts::new(),
            sampler: SectionSampler::new(config.sampler.threshold),
            timings: config.timings,
        };
        for entry in &config.projects {
            portfolio.push_card(
                entry.title.clone(),
                entry.category.clone(),
                entry.tag.clone(),
                entry.description.clone(),
            );
        }
        portfolio
    }

    // ---------------------------------------------------------------------
    // Accessors
    // ---------------------------------------------------------------------

    pub fn log(&self) -> &ActivityLog {
        &self.log
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn active_nav(&self) -> Option<&str> {
        self.active_nav.as_deref()
    }

    pub fn is_nav_active(&self, href: &str) -> bool {
        self.active_nav.as_deref() == Some(href)
    }

    pub fn active_filter(&self) -> &str {
        &self.active_filter
    }

    pub fn is_filter_active(&self, name: &str) -> bool {
        self.active_filter == name
    }

    pub fn cards(&self) -> &[ProjectCard] {
        &self.cards
    }

    pub fn card(&self, id: CardId) -> Option<&ProjectCard> {
        self.cards.iter().find(|c| c.id == id)
    }

    pub fn contact(&self) -> &ContactForm {
        &self.contact
    }

    /// Input bindings write through here.
    pub fn contact_mut(&mut self) -> &mut ContactForm {
        &mut self.contact
    }

    pub fn success_visible(&self) -> bool {
        self.success_visible
    }

    pub fn contact_highlighted(&self) -> bool {
        self.contact_highlighted
    }

    pub fn copy_button(&self) -> CopyButton {
        self.copy_button
    }

    pub fn footer_year(&self) -> Option<i32> {
        self.footer_year
    }

    pub fn timings(&self) -> &Timings {
        &self.timings
    }

    // ---------------------------------------------------------------------
    // Handlers
    // ---------------------------------------------------------------------

    /// Append a line to the activity log.
    pub fn record(&mut self, message: impl Into<String>) {
        self.log.push(message);
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.record(format!("Theme switched to {} Mode", self.theme.name()));
        self.theme
    }

    /// Clipboard write resolved. Shows the confirmation until the returned
    /// ticket is passed to [`Portfolio::revert`].
    pub fn copy_succeeded(&mut self, email: &str) -> RevertTicket {
        self.copy_button = CopyButton::Copied;
        self.record(format!("Email copied to clipboard: {email}"));
        self.reverts.arm(EffectTarget::CopyButton)
    }

    /// Clipboard write rejected. The button keeps its appearance.
    pub fn copy_failed(&mut self, error: &Error) {
        tracing::warn!(%error, "clipboard write rejected");
        self.record(error.to_string());
    }

    /// Undo a temporary override if `ticket` is still the newest for its
    /// target. Returns whether anything changed.
    pub fn revert(&mut self, ticket: RevertTicket) -> bool {
        if !self.reverts.settle(ticket) {
            return false;
        }
        match ticket.target() {
            EffectTarget::CopyButton => self.copy_button = CopyButton::Idle,
            EffectTarget::ContactSection => self.contact_highlighted = false,
            EffectTarget::Card(id) => {
                if let Some(card) = self.cards.iter_mut().find(|c| c.id == id) {
                    card.highlighted = false;
                }
            }
        }
        true
    }

    /// Nav link clicked. `scroll_y` is the current window offset and
    /// `section_top` the document offset of the target, if it exists.
    pub fn navigate(&mut self, href: &str, scroll_y: f64, section_top: Option<f64>) -> NavOutcome {
        if !is_internal_link(href) {
            return NavOutcome::Follow;
        }

        self.active_nav = Some(href.to_string());
        let scroll = section_top.map(|top| {
            ScrollPlan::to_section(
                scroll_y,
                top,
                self.timings.header_offset,
                self.timings.scroll_ms,
            )
        });
        if scroll.is_none() {
            tracing::debug!(href, "nav target not found on page");
        }
        self.record(format!("Navigated to section: {href}"));
        NavOutcome::Highlighted { scroll }
    }

    /// Filter control clicked. Returns the number of visible cards.
    pub fn apply_filter(&mut self, filter: &str) -> usize {
        self.active_filter = filter.to_string();

        if filter == ALL_FILTER {
            for card in &mut self.cards {
                card.visible = true;
            }
            self.record("Filter: all projects shown");
        } else {
            for card in &mut self.cards {
                card.visible = card.category == filter;
            }
            self.record(format!("Filter: showing '{filter}' projects"));
        }

        let visible = self.cards.iter().filter(|c| c.visible).count();
        tracing::debug!(filter, visible, "filter applied");
        visible
    }

    /// Add control clicked. Appends `Demo Project #k` with `k` = card count
    /// + 1 and highlights it until the returned ticket is reverted.
    pub fn add_demo_card(&mut self) -> RevertTicket {
        let number = self.cards.len() + 1;
        let title = format!("Demo Project #{number}");
        let id = self.push_card(
            title,
            self.demo.category.clone(),
            self.demo.tag.clone(),
            self.demo.description.clone(),
        );
        if let Some(card) = self.cards.last_mut() {
            card.highlighted = true;
        }
        self.record(format!("Added Demo Project #{number}"));
        self.reverts.arm(EffectTarget::Card(id))
    }

    /// Contact form submitted. Emits two log lines, clears the fields, shows
    /// the success message and highlights the section.
    pub fn submit_contact(&mut self) -> ContactSubmission {
        let form = self.contact.clone();
        tracing::info!(name = %form.name, email = %form.email, "contact form submitted");
        if form.name.trim().is_empty() || form.email.trim().is_empty() {
            tracing::warn!("contact form submitted without a name or email");
        }

        self.record(format!("Form submitted by {} ({})", form.name, form.email));
        self.success_visible = true;
        self.contact.clear();
        self.contact_highlighted = true;
        let ticket = self.reverts.arm(EffectTarget::ContactSection);
        self.record("Form cleared and section highlighted");

        ContactSubmission { form, ticket }
    }

    /// Card clicked. Logs the headings of its neighbors, next first.
    /// Returns the number of lines written.
    pub fn inspect_neighbors(&mut self, id: CardId) -> usize {
        let Some(index) = self.cards.iter().position(|c| c.id == id) else {
            return 0;
        };

        let next = self.cards.get(index + 1).map(|c| c.title.clone());
        let previous = index
            .checked_sub(1)
            .and_then(|i| self.cards.get(i))
            .map(|c| c.title.clone());

        let mut written = 0;
        if let Some(title) = next {
            self.record(format!("Next project: {title}"));
            written += 1;
        }
        if let Some(title) = previous {
            self.record(format!("Previous project: {title}"));
            written += 1;
        }
        written
    }

    /// One-time initialisation: first skill, then the footer year.
    pub fn startup(&mut self, skills: &[String], year: i32) {
        if let Some(first) = skills.first() {
            self.record(format!("First listed skill: {first}"));
        }
        self.footer_year = Some(year);
        self.record(format!("Year set in footer: {year}"));
    }

    /// Click somewhere in `<main>`. Returns whether it was logged.
    pub fn section_clicked(&mut self, click: &SectionClick, rng: &mut impl RandomSource) -> bool {
        match self.sampler.sample(click, rng) {
            Some(section) => {
                let line = format!("Clicked in section: {section}");
                self.record(line);
                true
            }
            None => false,
        }
    }

    fn push_card(&mut self, title: String, category: String, tag: String, description: String) -> CardId {
        let id = self.next_card_id;
        self.next_card_id += 1;
        self.cards.push(ProjectCard {
            id,
            title,
            category,
            tag,
            description,
            visible: true,
            highlighted: false,
        });
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ProjectEntry;
    use crate::sampler::ScriptedDraws;
    use pretty_assertions::assert_eq;

    fn project(title: &str, category: &str) -> ProjectEntry {
        ProjectEntry {
            title: title.into(),
            category: category.into(),
            tag: category.to_uppercase(),
            description: String::new(),
        }
    }

    fn sample_site() -> SiteConfig {
        SiteConfig {
            projects: vec![
                project("Weather Dashboard", "web"),
                project("Log Shipper", "tools"),
                project("Landing Page", "web"),
            ],
            ..SiteConfig::default()
        }
    }

    fn titles(portfolio: &Portfolio) -> Vec<&str> {
        portfolio.cards().iter().map(|c| c.title.as_str()).collect()
    }

    #[test]
    fn starts_dark_unfiltered_and_silent() {
        let portfolio = Portfolio::from_config(&sample_site());

        assert_eq!(portfolio.theme(), Theme::Dark);
        assert_eq!(portfolio.active_filter(), ALL_FILTER);
        assert_eq!(portfolio.active_nav(), None);
        assert!(portfolio.cards().iter().all(|c| c.visible));
        assert!(portfolio.log().is_empty());
    }

    #[test]
    fn theme_toggle_round_trips() {
        let mut portfolio = Portfolio::default();

        assert_eq!(portfolio.toggle_theme(), Theme::Light);
        assert_eq!(portfolio.theme().toggle_label(), "Dark Mode");
        assert_eq!(portfolio.toggle_theme(), Theme::Dark);
        assert_eq!(portfolio.theme().toggle_label(), "Light Mode");
        assert_eq!(
            portfolio.log().entries(),
            &[
                "Theme switched to Light Mode".to_string(),
                "Theme switched to Dark Mode".to_string(),
            ]
        );
    }

    #[test]
    fn copy_success_restores_after_revert() {
        let mut portfolio = Portfolio::default();
        let ticket = portfolio.copy_succeeded("me@example.com");

        assert!(portfolio.copy_button().is_copied());
        assert_eq!(portfolio.log().last(), Some("Email copied to clipboard: me@example.com"));
        assert!(portfolio.revert(ticket));
        assert_eq!(portfolio.copy_button(), CopyButton::Idle);
    }

    #[test]
    fn second_copy_outlives_first_restore() {
        let mut portfolio = Portfolio::default();
        let first = portfolio.copy_succeeded("me@example.com");
        let second = portfolio.copy_succeeded("me@example.com");

        assert!(!portfolio.revert(first));
        assert!(portfolio.copy_button().is_copied());
        assert!(portfolio.revert(second));
        assert!(!portfolio.copy_button().is_copied());
    }

    #[test]
    fn copy_failure_logs_reason_and_keeps_button() {
        let mut portfolio = Portfolio::default();
        portfolio.copy_failed(&Error::Clipboard("denied".into()));

        assert_eq!(portfolio.copy_button(), CopyButton::Idle);
        assert_eq!(portfolio.log().last(), Some("Failed to copy: denied"));
    }

    #[test]
    fn internal_links_scroll_and_activate() {
        let mut portfolio = Portfolio::default();

        let outcome = portfolio.navigate("#projects", 0.0, Some(1200.0));
        assert_eq!(
            outcome,
            NavOutcome::Highlighted {
                scroll: Some(ScrollPlan {
                    from: 0.0,
                    to: 1130.0,
                    duration_ms: 500,
                })
            }
        );
        assert!(portfolio.is_nav_active("#projects"));

        portfolio.navigate("#contact", 1130.0, Some(2000.0));
        assert!(portfolio.is_nav_active("#contact"));
        assert!(!portfolio.is_nav_active("#projects"));
        assert_eq!(portfolio.log().last(), Some("Navigated to section: #contact"));
    }

    #[test]
    fn external_links_are_not_intercepted() {
        let mut portfolio = Portfolio::default();
        portfolio.navigate("#about", 0.0, Some(10.0));

        assert_eq!(portfolio.navigate("about.html", 0.0, None), NavOutcome::Follow);
        assert_eq!(portfolio.navigate("index.html#projects", 0.0, None), NavOutcome::Follow);
        assert!(portfolio.is_nav_active("#about"));
        assert_eq!(portfolio.log().len(), 1);
    }

    #[test]
    fn missing_section_still_activates_link() {
        let mut portfolio = Portfolio::default();
        let outcome = portfolio.navigate("#nowhere", 0.0, None);

        assert_eq!(outcome, NavOutcome::Highlighted { scroll: None });
        assert!(portfolio.is_nav_active("#nowhere"));
    }

    #[test]
    fn filter_reveals_matching_categories() {
        let mut portfolio = Portfolio::from_config(&sample_site());

        assert_eq!(portfolio.apply_filter("web"), 2);
        let visible: Vec<bool> = portfolio.cards().iter().map(|c| c.visible).collect();
        assert_eq!(visible, vec![true, false, true]);
        assert!(portfolio.is_filter_active("web"));
        assert!(!portfolio.is_filter_active(ALL_FILTER));
        assert_eq!(portfolio.log().last(), Some("Filter: showing 'web' projects"));

        assert_eq!(portfolio.apply_filter(ALL_FILTER), 3);
        assert_eq!(portfolio.log().last(), Some("Filter: all projects shown"));
    }

    #[test]
    fn unknown_filter_hides_everything() {
        let mut portfolio = Portfolio::from_config(&sample_site());
        assert_eq!(portfolio.apply_filter("mobile"), 0);
    }

    #[test]
    fn demo_cards_number_from_grid_size() {
        let mut portfolio = Portfolio::from_config(&sample_site());
        let ticket = portfolio.add_demo_card();
        portfolio.add_demo_card();

        assert_eq!(
            titles(&portfolio),
            vec![
                "Weather Dashboard",
                "Log Shipper",
                "Landing Page",
                "Demo Project #4",
                "Demo Project #5",
            ]
        );
        let added = &portfolio.cards()[3];
        assert_eq!(added.category, "web");
        assert_eq!(added.tag, "Web");
        assert!(added.highlighted);
        assert_eq!(ticket.target(), EffectTarget::Card(added.id));

        assert!(portfolio.revert(ticket));
        assert!(!portfolio.cards()[3].highlighted);
        assert!(portfolio.cards()[4].highlighted);
        assert_eq!(portfolio.log().last(), Some("Added Demo Project #5"));
    }

    #[test]
    fn demo_cards_on_empty_grid_number_from_one() {
        let mut portfolio = Portfolio::from_config(&SiteConfig::default());
        assert!(portfolio.cards().is_empty());

        for _ in 0..3 {
            portfolio.add_demo_card();
        }

        assert_eq!(
            titles(&portfolio),
            vec!["Demo Project #1", "Demo Project #2", "Demo Project #3"]
        );
        assert_eq!(
            portfolio.log().entries(),
            &[
                "Added Demo Project #1".to_string(),
                "Added Demo Project #2".to_string(),
                "Added Demo Project #3".to_string(),
            ]
        );
    }

    #[test]
    fn contact_submission_clears_and_logs_twice() {
        let mut portfolio = Portfolio::default();
        {
            let form = portfolio.contact_mut();
            form.name = "Ada".into();
            form.email = "a@b.com".into();
            form.message = "hi".into();
        }

        let submission = portfolio.submit_contact();

        assert_eq!(submission.form.name, "Ada");
        assert_eq!(submission.form.message, "hi");
        assert!(portfolio.contact().is_empty());
        assert!(portfolio.success_visible());
        assert!(portfolio.contact_highlighted());
        assert_eq!(
            portfolio.log().entries(),
            &[
                "Form submitted by Ada (a@b.com)".to_string(),
                "Form cleared and section highlighted".to_string(),
            ]
        );

        assert!(portfolio.revert(submission.ticket));
        assert!(!portfolio.contact_highlighted());
        assert!(portfolio.success_visible());
    }

    #[test]
    fn blank_submission_is_accepted() {
        let mut portfolio = Portfolio::default();
        let submission = portfolio.submit_contact();

        assert!(submission.form.is_empty());
        assert_eq!(portfolio.log().len(), 2);
        assert_eq!(portfolio.log().entries()[0], "Form submitted by  ()");
    }

    #[test]
    fn neighbors_logged_next_then_previous() {
        let mut portfolio = Portfolio::from_config(&sample_site());
        let ids: Vec<CardId> = portfolio.cards().iter().map(|c| c.id).collect();

        assert_eq!(portfolio.inspect_neighbors(ids[1]), 2);
        assert_eq!(
            portfolio.log().entries(),
            &[
                "Next project: Landing Page".to_string(),
                "Previous project: Weather Dashboard".to_string(),
            ]
        );

        assert_eq!(portfolio.inspect_neighbors(ids[0]), 1);
        assert_eq!(portfolio.log().last(), Some("Next project: Log Shipper"));

        assert_eq!(portfolio.inspect_neighbors(ids[2]), 1);
        assert_eq!(portfolio.log().last(), Some("Previous project: Log Shipper"));
    }

    #[test]
    fn hidden_cards_still_count_as_neighbors() {
        let mut portfolio = Portfolio::from_config(&sample_site());
        portfolio.apply_filter("web");
        let first = portfolio.cards()[0].id;

        portfolio.inspect_neighbors(first);
        assert_eq!(portfolio.log().last(), Some("Next project: Log Shipper"));
    }

    #[test]
    fn lone_or_unknown_card_logs_nothing() {
        let mut portfolio = Portfolio::from_config(&SiteConfig {
            projects: vec![project("Solo", "web")],
            ..SiteConfig::default()
        });
        let id = portfolio.cards()[0].id;

        assert_eq!(portfolio.inspect_neighbors(id), 0);
        assert_eq!(portfolio.inspect_neighbors(99), 0);
        assert!(portfolio.log().is_empty());
    }

    #[test]
    fn startup_logs_skill_then_year() {
        let mut portfolio = Portfolio::default();
        portfolio.startup(&["Rust".to_string(), "SQL".to_string()], 2026);

        assert_eq!(portfolio.footer_year(), Some(2026));
        assert_eq!(
            portfolio.log().entries(),
            &[
                "First listed skill: Rust".to_string(),
                "Year set in footer: 2026".to_string(),
            ]
        );
    }

    #[test]
    fn startup_without_skills_only_sets_year() {
        let mut portfolio = Portfolio::default();
        portfolio.startup(&[], 2026);
        assert_eq!(portfolio.log().entries(), &["Year set in footer: 2026".to_string()]);
    }

    #[test]
    fn section_clicks_are_sampled() {
        let mut portfolio = Portfolio::default();
        let click = SectionClick {
            section_id: Some("skills".into()),
            on_control: false,
        };
        let mut rng = ScriptedDraws::new([0.1, 0.97]);

        assert!(!portfolio.section_clicked(&click, &mut rng));
        assert!(portfolio.section_clicked(&click, &mut rng));
        assert_eq!(portfolio.log().entries(), &["Clicked in section: skills".to_string()]);
    }
}
