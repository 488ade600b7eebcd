use folio::NavOutcome;
use folio::config::NavLink;
use leptos::ev::MouseEvent;
use leptos::prelude::*;

use crate::browser;
use crate::state::{use_portfolio, use_site};

#[component]
pub fn Nav() -> impl IntoView {
    let portfolio = use_portfolio();
    let site = use_site();
    let scrolling = StoredValue::new(None::<IntervalHandle>);

    let toggle_theme = move |_| {
        portfolio.update(|p| {
            p.toggle_theme();
        })
    };

    view! {
        <nav class="nav">
            <div class="nav-inner">
                <a href="#about" class="nav-brand">
                    <span class="nav-title">{site.owner}</span>
                </a>
                <ul class="nav-links">
                    {site
                        .nav
                        .into_iter()
                        .map(|link| view! { <NavItem link=link scrolling=scrolling /> })
                        .collect_view()}
                </ul>
                <button id="theme-toggle" class="theme-toggle" on:click=toggle_theme>
                    {move || portfolio.with(|p| p.theme().toggle_label())}
                </button>
            </div>
        </nav>
    }
}

#[component]
fn NavItem(link: NavLink, scrolling: StoredValue<Option<IntervalHandle>>) -> impl IntoView {
    let portfolio = use_portfolio();
    let href = link.href.clone();
    let active_href = link.href.clone();

    let on_click = move |ev: MouseEvent| {
        let section_top = href
            .strip_prefix('#')
            .and_then(browser::section_top);
        let outcome = portfolio.try_update(|p| p.navigate(&href, browser::scroll_y(), section_top));

        // External links fall through to normal navigation.
        if let Some(NavOutcome::Highlighted { scroll }) = outcome {
            ev.prevent_default();
            if let Some(plan) = scroll {
                browser::animate_scroll(plan, scrolling);
            }
        }
    };

    view! {
        <li class="nav-item">
            <a
                href=link.href
                class="nav-link"
                class:active=move || portfolio.with(|p| p.is_nav_active(&active_href))
                on:click=on_click
            >
                {link.label}
            </a>
        </li>
    }
}
