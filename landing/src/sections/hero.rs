use leptos::prelude::*;

use crate::browser;
use crate::state::{schedule_revert, use_portfolio, use_site};

#[component]
pub fn Hero() -> impl IntoView {
    let site = use_site();

    view! {
        <section id="about" class="hero glass">
            <div class="container">
                <p class="hero-eyebrow">{site.role}</p>
                <h1 class="hero-title">{site.owner}</h1>
                <p class="hero-description">{site.tagline}</p>
                <div class="hero-actions">
                    <a href="#projects" class="btn btn-primary">"See Projects"</a>
                    <CopyEmail email=site.email restore_ms=site.timings.copy_restore_ms />
                </div>
            </div>
        </section>
    }
}

#[component]
fn CopyEmail(email: String, restore_ms: u32) -> impl IntoView {
    let portfolio = use_portfolio();
    let copied = move || portfolio.with(|p| p.copy_button().is_copied());
    let data_email = email.clone();

    let copy_email = move |_| {
        let email = email.clone();
        wasm_bindgen_futures::spawn_local(async move {
            match browser::write_clipboard(&email).await {
                Ok(()) => {
                    if let Some(ticket) = portfolio.try_update(|p| p.copy_succeeded(&email)) {
                        schedule_revert(portfolio, ticket, restore_ms);
                    }
                }
                Err(err) => portfolio.update(|p| p.copy_failed(&err)),
            }
        });
    };

    view! {
        <button
            id="copy-email-btn"
            class="btn btn-secondary copy-btn"
            data-email=data_email
            class:copied=copied
            on:click=copy_email
        >
            {move || if copied() { "Copied!" } else { "✉ Copy Email" }}
        </button>
    }
}
