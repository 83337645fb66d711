//! The single portfolio page: hero, content sections, contact, chat widget.

use leptos::prelude::*;

use crate::components::about_section::{AboutSection, RESUME_FILENAME, RESUME_URL};
use crate::components::chat_widget::ChatWidget;
use crate::components::contact_section::ContactSection;
use crate::components::navbar::{Navbar, navigate_to};
use crate::components::page_section::PageSection;
use crate::state::nav::{NavState, Section};
use crate::util::dom;

const SKILLS: &[&str] = &[
    "DevOps: Docker, Jenkins, GitHub Actions, AWS, Linux",
    "Backend: PHP, Laravel, MySQL, API development",
    "Cloud: AWS services, infrastructure automation",
    "Tools: Git, Nginx, Bash scripting, Postman",
];

const EDUCATION: &[&str] = &[
    "Master of Computer Applications (MCA), 2023-2025",
    "Bachelor of Computer Applications (BCA), 2019-2022",
    "PHP Development Training, 6 months intensive course",
];

const EXPERIENCE: &[&str] = &[
    "DevOps Engineer: CI/CD, containerization and cloud infrastructure",
    "PHP Web Developer (2.7 years): web applications with PHP/Laravel",
];

const CERTIFICATIONS: &[&str] = &[
    "PHP Fundamentals (Udemy)",
    "Linux World Informatics Internship: AI integration & DevOps automation",
];

const PROJECTS: &[&str] = &[
    "DevFlow AI: multi-tool dashboard with AI integration",
    "Remote Docker Manager: SSH-based container management",
    "AI Story Co-Writer: creative writing assistant",
    "Universal Code Generator: AI-powered development tool",
    "Linux Command Menu: system administration utility",
];

#[component]
pub fn HomePage() -> impl IntoView {
    let nav = expect_context::<RwSignal<NavState>>();

    view! {
        <Navbar/>
        <main class="home">
            <section id=Section::Hero.id() class="hero">
                <p class="hero__eyebrow">"Hi, I'm"</p>
                <h1 class="hero__name">"Sachit Kaistha"</h1>
                <p class="hero__role">"DevOps Engineer \u{2022} PHP Developer"</p>
                <div class="hero__actions">
                    <button class="btn btn--primary" on:click=move |_| dom::download(RESUME_URL, RESUME_FILENAME)>
                        "Download Resume"
                    </button>
                    <button class="btn btn--secondary" on:click=move |_| navigate_to(nav, Section::Projects)>
                        "View Projects"
                    </button>
                </div>
            </section>
            <AboutSection/>
            <PageSection section=Section::Skills title="Skills" entries=SKILLS/>
            <PageSection section=Section::Education title="Education" entries=EDUCATION/>
            <PageSection section=Section::Experience title="Experience" entries=EXPERIENCE/>
            <PageSection section=Section::Certifications title="Certifications" entries=CERTIFICATIONS/>
            <PageSection section=Section::Projects title="Projects" entries=PROJECTS/>
            <ContactSection/>
        </main>
        <ChatWidget/>
    }
}
