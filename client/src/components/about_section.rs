//! About section: profile card, achievements, tabbed story/values/strengths.

use leptos::prelude::*;

use crate::state::nav::Section;
use crate::state::ui::{AboutTab, UiState};
use crate::util::dom;

pub const RESUME_URL: &str = "/resume.pdf";
pub const RESUME_FILENAME: &str = "Sachit_Kaistha_Resume.pdf";

struct Highlight {
    title: &'static str,
    description: &'static str,
}

const ACHIEVEMENTS: [(&str, &str); 4] = [
    ("2.7+", "Years Experience"),
    ("15+", "Technologies Mastered"),
    ("10+", "Projects Completed"),
    ("100%", "Client Satisfaction"),
];

const CORE_VALUES: [Highlight; 4] = [
    Highlight {
        title: "Excellence",
        description: "Committed to delivering high-quality solutions that exceed expectations and drive business success.",
    },
    Highlight {
        title: "Collaboration",
        description: "Believe in the power of teamwork and open communication to achieve extraordinary results.",
    },
    Highlight {
        title: "Innovation",
        description: "Constantly learning and adapting to new technologies to stay ahead in the rapidly evolving tech landscape.",
    },
    Highlight {
        title: "Passion",
        description: "Genuinely love what I do and bring enthusiasm to every project, making work feel like play.",
    },
];

const UNIQUE_QUALITIES: [Highlight; 4] = [
    Highlight {
        title: "Speed & Efficiency",
        description: "Lightning-fast development with automated CI/CD pipelines that reduce deployment time by 80%.",
    },
    Highlight {
        title: "Precision & Reliability",
        description: "Zero-downtime deployments with comprehensive testing and monitoring for bulletproof systems.",
    },
    Highlight {
        title: "Dev-Ops Bridge",
        description: "Unique blend of development expertise and operations knowledge for seamless collaboration.",
    },
    Highlight {
        title: "Innovation Focus",
        description: "Always exploring cutting-edge technologies and implementing creative solutions to complex problems.",
    },
];

const STORY: [&str; 3] = [
    "My journey began with a curiosity for code and two and a half years building web applications with PHP and Laravel.",
    "The transition to DevOps felt like a natural next step: the same love for building, pointed at pipelines, containers and cloud infrastructure.",
    "Today, I'm driven by the challenge of bridging the gap between development and operations.",
];

fn highlight_grid(items: &'static [Highlight]) -> impl IntoView {
    view! {
        <div class="about__grid">
            {items
                .iter()
                .map(|item| {
                    view! {
                        <div class="about__highlight">
                            <h4>{item.title}</h4>
                            <p>{item.description}</p>
                        </div>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}

#[component]
pub fn AboutSection() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let active_tab = move || ui.with(|s| s.about_tab);

    view! {
        <section id=Section::About.id() class="about">
            <div class="section__header">
                <h2 class="section__title">"About Me"</h2>
                <p class="section__lead">"DevOps engineer with a developer's heart."</p>
            </div>

            <div class="about__layout">
                <aside class="about__profile card">
                    <div class="about__portrait">"S"</div>
                    <span class="about__badge">"Available for work"</span>
                    <div class="about__achievements">
                        {ACHIEVEMENTS
                            .iter()
                            .map(|(number, label)| {
                                view! {
                                    <div class="about__achievement">
                                        <div class="about__achievement-number">{*number}</div>
                                        <div class="about__achievement-label">{*label}</div>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                    <button class="btn btn--primary" on:click=move |_| dom::scroll_into_view(Section::Contact)>
                        "Let's Connect"
                    </button>
                    <button class="btn btn--secondary" on:click=move |_| dom::download(RESUME_URL, RESUME_FILENAME)>
                        "Download Resume"
                    </button>
                </aside>

                <div class="about__content">
                    <div class="about__tabs" role="tablist">
                        {AboutTab::ALL
                            .into_iter()
                            .map(|tab| {
                                view! {
                                    <button
                                        role="tab"
                                        class="about__tab"
                                        class:about__tab--active=move || active_tab() == tab
                                        on:click=move |_| ui.update(|u| u.about_tab = tab)
                                    >
                                        {tab.label()}
                                    </button>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>

                    <div class="about__panel">
                        {move || match active_tab() {
                            AboutTab::Story => {
                                view! {
                                    <div class="about__story">
                                        <h3>"From Code to Cloud"</h3>
                                        {STORY.iter().map(|p| view! { <p>{*p}</p> }).collect::<Vec<_>>()}
                                        <blockquote>
                                            "The best DevOps engineers don't just automate processes, they automate success."
                                        </blockquote>
                                    </div>
                                }
                                    .into_any()
                            }
                            AboutTab::Values => {
                                view! {
                                    <div>
                                        <h3>"What Drives Me"</h3>
                                        {highlight_grid(&CORE_VALUES)}
                                    </div>
                                }
                                    .into_any()
                            }
                            AboutTab::Unique => {
                                view! {
                                    <div>
                                        <h3>"What Sets Me Apart"</h3>
                                        {highlight_grid(&UNIQUE_QUALITIES)}
                                    </div>
                                }
                                    .into_any()
                            }
                        }}
                    </div>
                </div>
            </div>
        </section>
    }
}
