use std::time::Duration;

use folio::CardId;
use folio::config::FilterControl;
use leptos::prelude::*;

use crate::state::{schedule_revert, use_portfolio, use_site};

#[component]
pub fn Projects() -> impl IntoView {
    let portfolio = use_portfolio();
    let site = use_site();
    let highlight_ms = site.timings.highlight_ms;

    let add_card = move |_| {
        if let Some(ticket) = portfolio.try_update(|p| p.add_demo_card()) {
            schedule_revert(portfolio, ticket, highlight_ms);
        }
    };

    let card_ids =
        Memo::new(move |_| portfolio.with(|p| p.cards().iter().map(|c| c.id).collect::<Vec<_>>()));

    view! {
        <section id="projects" class="projects glass">
            <div class="container">
                <h2 class="section-title">"Projects"</h2>
                <div class="filter-bar">
                    {site
                        .filters
                        .into_iter()
                        .map(|control| view! { <FilterButton control=control /> })
                        .collect_view()}
                    <button id="add-project" class="filter-btn add-btn" on:click=add_card>
                        "+ Add Demo"
                    </button>
                </div>
                <div class="projects-grid">
                    <For
                        each=move || card_ids.get()
                        key=|id| *id
                        children=move |id| view! { <ProjectCardView id=id /> }
                    />
                </div>
            </div>
        </section>
    }
}

#[component]
fn FilterButton(control: FilterControl) -> impl IntoView {
    let portfolio = use_portfolio();
    let name = control.name.clone();
    let active_name = control.name.clone();

    view! {
        <button
            class="filter-btn"
            class:active=move || portfolio.with(|p| p.is_filter_active(&active_name))
            data-filter=control.name
            on:click=move |_| {
                portfolio.update(|p| {
                    p.apply_filter(&name);
                })
            }
        >
            {control.label}
        </button>
    }
}

#[component]
fn ProjectCardView(id: CardId) -> impl IntoView {
    let portfolio = use_portfolio();
    let timings = portfolio.with_untracked(|p| *p.timings());
    let Some(card) = portfolio.with_untracked(|p| p.card(id).cloned()) else {
        return ().into_any();
    };

    let visible = Memo::new(move |_| portfolio.with(|p| p.card(id).is_some_and(|c| c.visible)));
    let highlighted =
        Memo::new(move |_| portfolio.with(|p| p.card(id).is_some_and(|c| c.highlighted)));
    // Hidden cards keep their grid slot until the fade-out has finished.
    let faded = RwSignal::new(!visible.get_untracked());
    let collapsed = RwSignal::new(!visible.get_untracked());
    Effect::new(move || {
        if visible.get() {
            collapsed.set(false);
            request_animation_frame(move || {
                if visible.get_untracked() {
                    faded.set(false);
                }
            });
        } else {
            faded.set(true);
            set_timeout(
                move || {
                    if !visible.get_untracked() {
                        collapsed.set(true);
                    }
                },
                Duration::from_millis(u64::from(timings.fade_out_ms)),
            );
        }
    });

    let transition = move || {
        let ms = if visible.get() {
            timings.fade_in_ms
        } else {
            timings.fade_out_ms
        };
        format!("opacity {ms}ms ease, visibility {ms}ms ease")
    };

    view! {
        <article
            class="project-card glass"
            class:is-hidden=move || faded.get()
            class:is-collapsed=move || collapsed.get()
            class:is-highlighted=move || highlighted.get()
            data-type=card.category
            style:transition=transition
            on:click=move |_| {
                portfolio.update(|p| {
                    p.inspect_neighbors(id);
                })
            }
        >
            <span class="project-tag">{card.tag}</span>
            <h3>{card.title}</h3>
            <p>{card.description}</p>
        </article>
    }
    .into_any()
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use folio::Portfolio;
    use leptos::mount::mount_to;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    async fn sleep(ms: i32) {
        let done = js_sys::Promise::new(&mut |resolve, _| {
            if let Some(window) = web_sys::window() {
                let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms);
            }
        });
        let _ = JsFuture::from(done).await;
    }

    fn mount_card(portfolio: RwSignal<Portfolio>, id: CardId) -> web_sys::Element {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .expect("document");
        let host: web_sys::HtmlElement = document
            .create_element("div")
            .expect("create host")
            .dyn_into()
            .expect("div is an HtmlElement");
        document
            .body()
            .expect("body")
            .append_child(&host)
            .expect("attach host");

        mount_to(host.clone(), move || {
            provide_context(portfolio);
            view! { <ProjectCardView id=id /> }
        })
        .forget();

        host.query_selector(".project-card")
            .expect("valid selector")
            .expect("card rendered")
    }

    #[wasm_bindgen_test]
    async fn hidden_card_collapses_only_after_fading_out() {
        let portfolio = RwSignal::new(Portfolio::default());
        let id = portfolio.with_untracked(|p| p.cards().len() as CardId);
        portfolio.update(|p| {
            p.add_demo_card();
        });
        let fade_out = portfolio.with_untracked(|p| p.timings().fade_out_ms) as i32;
        let card = mount_card(portfolio, id);
        sleep(20).await;
        assert!(!card.class_list().contains("is-hidden"));

        portfolio.update(|p| {
            p.apply_filter("tools");
        });
        sleep(20).await;
        assert!(card.class_list().contains("is-hidden"));
        assert!(!card.class_list().contains("is-collapsed"));

        sleep(fade_out + 50).await;
        assert!(card.class_list().contains("is-collapsed"));

        portfolio.update(|p| {
            p.apply_filter("all");
        });
        sleep(50).await;
        assert!(!card.class_list().contains("is-collapsed"));
        assert!(!card.class_list().contains("is-hidden"));
    }
}
