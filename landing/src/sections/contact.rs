use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::browser;
use crate::state::{schedule_revert, use_portfolio, use_site};

#[component]
pub fn Contact() -> impl IntoView {
    let portfolio = use_portfolio();
    let highlight_ms = use_site().timings.highlight_ms;

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if let Some(submission) = portfolio.try_update(|p| p.submit_contact()) {
            browser::console_submission(&submission.form);
            schedule_revert(portfolio, submission.ticket, highlight_ms);
        }
    };

    view! {
        <section
            id="contact"
            class="contact glass"
            class:is-highlighted=move || portfolio.with(|p| p.contact_highlighted())
        >
            <div class="container">
                <h2 class="section-title">"Contact"</h2>
                <form class="contact-form" on:submit=on_submit>
                    <label for="name">"Name"</label>
                    <input
                        id="name"
                        name="name"
                        type="text"
                        prop:value=move || portfolio.with(|p| p.contact().name.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            portfolio.update(|p| p.contact_mut().name = value);
                        }
                    />
                    <label for="email">"Email"</label>
                    <input
                        id="email"
                        name="email"
                        type="email"
                        prop:value=move || portfolio.with(|p| p.contact().email.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            portfolio.update(|p| p.contact_mut().email = value);
                        }
                    />
                    <label for="message">"Message"</label>
                    <textarea
                        id="message"
                        name="message"
                        rows="5"
                        prop:value=move || portfolio.with(|p| p.contact().message.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            portfolio.update(|p| p.contact_mut().message = value);
                        }
                    ></textarea>
                    <button type="submit" class="btn btn-primary">"Send"</button>
                </form>
                <p
                    id="success-msg"
                    class="success-msg"
                    class:is-visible=move || portfolio.with(|p| p.success_visible())
                >
                    "Thanks! Your message has been noted."
                </p>
            </div>
        </section>
    }
}
