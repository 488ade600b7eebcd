use leptos::prelude::*;

use crate::state::{use_portfolio, use_site};

#[component]
pub fn Footer() -> impl IntoView {
    let portfolio = use_portfolio();
    let owner = use_site().owner;

    let year = move || {
        portfolio
            .with(|p| p.footer_year())
            .map(|y| y.to_string())
            .unwrap_or_default()
    };

    view! {
        <footer class="footer">
            <div class="container">
                <p class="footer-copyright">
                    "(c) " <span id="year">{year}</span> " " {owner}
                </p>
                <p class="footer-note">"Built with Rust + Leptos."</p>
            </div>
        </footer>
    }
}
