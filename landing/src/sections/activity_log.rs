use leptos::html::Div;
use leptos::prelude::*;

use crate::state::use_portfolio;

/// On-page trace of every handler. Keeps the newest entry in view.
#[component]
pub fn ActivityLog() -> impl IntoView {
    let portfolio = use_portfolio();
    let container = NodeRef::<Div>::new();

    // Append-only: the length is all the view tracks.
    let log_len = Memo::new(move |_| portfolio.with(|p| p.log().len()));

    let line = move |index: usize| {
        portfolio.with_untracked(|p| p.log().entries().get(index).cloned().unwrap_or_default())
    };

    Effect::new(move || {
        log_len.track();
        request_animation_frame(move || {
            if let Some(el) = container.get_untracked() {
                el.set_scroll_top(el.scroll_height());
            }
        });
    });

    view! {
        <aside class="activity glass">
            <h3 class="activity-title">"Activity Log"</h3>
            <div class="log-container" node_ref=container>
                <ul id="log-list">
                    <For
                        each=move || 0..log_len.get()
                        key=|index| *index
                        children=move |index| view! { <li>{line(index)}</li> }
                    />
                </ul>
            </div>
        </aside>
    }
}
