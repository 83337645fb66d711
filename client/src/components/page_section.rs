//! Generic titled section used for the anchors that only list entries
//! (skills, education, experience, certifications, projects).

use leptos::prelude::*;

use crate::state::nav::Section;

#[component]
pub fn PageSection(section: Section, title: &'static str, entries: &'static [&'static str]) -> impl IntoView {
    view! {
        <section id=section.id() class="page-section">
            <div class="section__header">
                <h2 class="section__title">{title}</h2>
            </div>
            <ul class="page-section__list">
                {entries.iter().map(|entry| view! { <li class="card">{*entry}</li> }).collect::<Vec<_>>()}
            </ul>
        </section>
    }
}
