// folio Portfolio Page — Leptos 0.8 Edition
// Developed with 💀 by The Folio Team (c)2026

mod browser;
mod sections;
mod state;
mod styles;

use folio::{Portfolio, SiteConfig};
use leptos::ev::MouseEvent;
use leptos::prelude::*;
use sections::*;

/// Page content and timings, embedded at build time.
const SITE: &str = include_str!("../site.toml");

fn main() {
    console_error_panic_hook::set_once();
    browser::init_tracing();
    leptos::mount::mount_to_body(App);
}

#[component]
fn App() -> impl IntoView {
    let config = SiteConfig::load_or_default(SITE);
    let portfolio = RwSignal::new(Portfolio::from_config(&config));
    portfolio.update(|p| p.startup(&config.skills, browser::current_year()));
    tracing::info!(owner = %config.owner, cards = config.projects.len(), "page mounted");

    provide_context(portfolio);
    provide_context(config);

    Effect::new(move || browser::apply_theme(portfolio.with(|p| p.theme())));

    let sample_click = move |ev: MouseEvent| {
        let click = browser::describe_click(&ev);
        portfolio.update(|p| {
            p.section_clicked(&click, &mut browser::MathRandom);
        });
    };

    view! {
        <style>{styles::PAGE_CSS}</style>
        <Nav />
        <main on:click=sample_click>
            <Hero />
            <Skills />
            <Projects />
            <Contact />
        </main>
        <ActivityLog />
        <Footer />
    }
}
