// Portfolio page sections
// Developed with 💀 by The Folio Team (c)2026

mod activity_log;
mod contact;
mod footer;
mod hero;
mod nav;
mod projects;
mod skills;

pub use activity_log::ActivityLog;
pub use contact::Contact;
pub use footer::Footer;
pub use hero::Hero;
pub use nav::Nav;
pub use projects::Projects;
pub use skills::Skills;
