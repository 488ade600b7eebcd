//! Data structures for the page state.
//!
//! These are plain values; [`crate::Portfolio`] owns them and applies the
//! transitions triggered by user events.

use serde::Serialize;

/// Stable identity of a project card, assigned in insertion order.
pub type CardId = u32;

/// Filter name that reveals every card.
pub const ALL_FILTER: &str = "all";

/// Colour scheme of the page.
///
/// The page starts dark. Light mode is rendered as [`Theme::BODY_CLASS`] on
/// `<body>`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Class carried by `<body>` while the light theme is active.
    pub const BODY_CLASS: &'static str = "light-mode";

    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn is_light(self) -> bool {
        matches!(self, Theme::Light)
    }

    pub fn name(self) -> &'static str {
        match self {
            Theme::Dark => "Dark",
            Theme::Light => "Light",
        }
    }

    /// Label for the toggle control: the action that would switch away.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Theme::Dark => "Light Mode",
            Theme::Light => "Dark Mode",
        }
    }
}

/// One portfolio project in the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectCard {
    pub id: CardId,
    /// Heading text, used by the neighbor lookup.
    pub title: String,
    /// Category label compared against the active filter.
    pub category: String,
    /// Short badge rendered above the heading.
    pub tag: String,
    pub description: String,
    pub visible: bool,
    /// Border highlight applied right after insertion.
    pub highlighted: bool,
}

/// Current values of the contact form inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn clear(&mut self) {
        self.name.clear();
        self.email.clear();
        self.message.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.message.is_empty()
    }

    /// JSON object written to the developer console on submission.
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Display state of the copy-email control.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CopyButton {
    #[default]
    Idle,
    /// Showing the confirmation text and highlight style.
    Copied,
}

impl CopyButton {
    pub fn is_copied(self) -> bool {
        matches!(self, CopyButton::Copied)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_label_names_the_reverse_action() {
        assert_eq!(Theme::Dark.toggle_label(), "Light Mode");
        assert_eq!(Theme::Light.toggle_label(), "Dark Mode");
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
    }

    #[test]
    fn contact_form_json_keeps_field_names() {
        let form = ContactForm {
            name: "Ada".into(),
            email: "a@b.com".into(),
            message: "hi".into(),
        };
        let json = form.to_json().expect("encode");
        assert_eq!(json, r#"{"name":"Ada","email":"a@b.com","message":"hi"}"#);
    }

    #[test]
    fn clearing_empties_every_field() {
        let mut form = ContactForm {
            name: "Ada".into(),
            email: "a@b.com".into(),
            message: "hi".into(),
        };
        form.clear();
        assert!(form.is_empty());
    }
}
