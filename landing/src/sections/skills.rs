use leptos::prelude::*;

use crate::state::use_site;

#[component]
pub fn Skills() -> impl IntoView {
    let skills = use_site().skills;

    view! {
        <section id="skills" class="skills glass">
            <div class="container">
                <h2 class="section-title">"Skills"</h2>
                <ul class="skills-list">
                    {skills
                        .into_iter()
                        .map(|skill| view! { <li class="skill">{skill}</li> })
                        .collect_view()}
                </ul>
            </div>
        </section>
    }
}
