//! Fixed navigation bar, scroll progress strip, and mobile overlay.
//!
//! SYSTEM CONTEXT
//! ==============
//! Listens to window scroll (throttled), folds each sample into `NavState`,
//! and renders the active-section highlight from it. Navigation buttons
//! smooth-scroll to the section anchors rendered by the home page.

use leptos::prelude::*;

use crate::components::theme_toggle::ThemeToggle;
use crate::state::nav::{NavState, Section};
use crate::util::dom;

/// Close the mobile overlay and smooth-scroll to `section`.
///
/// The overlay closes even when the anchor is missing from the page.
pub fn navigate_to(nav: RwSignal<NavState>, section: Section) {
    let offset_top = dom::section_offset_top(section);
    let target = nav.try_update(|n| n.begin_navigation(section, offset_top.unwrap_or_default()));
    if let (Some(_), Some(top)) = (offset_top, target) {
        dom::smooth_scroll_to(top);
    }
}

#[cfg(feature = "hydrate")]
fn track_scroll(nav: RwSignal<NavState>) {
    use std::cell::RefCell;
    use std::rc::Rc;

    use crate::util::clock;
    use crate::util::schedule::TaskScope;
    use crate::util::throttle::{ThrottleDecision, Throttle};

    let sample = move || {
        let metrics = dom::scroll_metrics();
        let rects = dom::section_rects();
        nav.try_update(|n| n.apply_scroll(metrics, &rects));
    };

    let throttle = Rc::new(RefCell::new(Throttle::default()));
    let scope = TaskScope::new();
    let handle = {
        let scope = scope.clone();
        window_event_listener(leptos::ev::scroll, move |_| {
            let decision = throttle.borrow_mut().admit(clock::now_ms());
            match decision {
                ThrottleDecision::Run => sample(),
                ThrottleDecision::Defer(wait_ms) => {
                    let throttle = Rc::clone(&throttle);
                    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                    let wait_ms = wait_ms.ceil().max(0.0) as u32;
                    scope.schedule(wait_ms, move || {
                        throttle.borrow_mut().trailing_fired(clock::now_ms());
                        sample();
                    });
                }
                ThrottleDecision::Skip => {}
            }
        })
    };

    // Pick up the initial position (e.g. reload mid-page).
    sample();

    on_cleanup(move || {
        scope.cancel();
        handle.remove();
    });
}

/// Top navigation bar with section links, theme toggle and "Let's Talk" CTA.
#[component]
pub fn Navbar() -> impl IntoView {
    let nav = expect_context::<RwSignal<NavState>>();

    // Runs once after mount; nothing inside is tracked.
    #[cfg(feature = "hydrate")]
    {
        Effect::new(move || track_scroll(nav));
    }

    let link = move |section: Section, class: &'static str, active_class: &'static str| {
        view! {
            <button
                class=move || {
                    if nav.with(|s| s.is_active(section)) { format!("{class} {active_class}") } else { class.to_owned() }
                }
                on:click=move |_| navigate_to(nav, section)
            >
                {section.label()}
            </button>
        }
    };

    view! {
        <nav class="navbar" class:navbar--scrolled=move || nav.with(|s| s.scrolled)>
            <div class="navbar__inner">
                <div class="navbar__brand">
                    <span class="navbar__logo">"S"</span>
                    <div class="navbar__title">
                        <h1>"Sachit"</h1>
                        <p>"DevOps Engineer"</p>
                    </div>
                </div>

                <div class="navbar__links">
                    {Section::ALL
                        .into_iter()
                        .map(|section| link(section, "navbar__link", "navbar__link--active"))
                        .collect::<Vec<_>>()}
                </div>

                <div class="navbar__controls">
                    <ThemeToggle/>
                    <button class="btn btn--primary navbar__cta" on:click=move |_| navigate_to(nav, Section::Contact)>
                        "Let's Talk"
                    </button>
                    <button
                        class="navbar__menu-toggle"
                        aria-label="Toggle menu"
                        on:click=move |_| nav.update(NavState::toggle_menu)
                    >
                        {move || if nav.with(|s| s.menu_open) { "\u{2715}" } else { "\u{2630}" }}
                    </button>
                </div>
            </div>

            <div class="navbar__mobile" class:navbar__mobile--open=move || nav.with(|s| s.menu_open)>
                <div class="navbar__mobile-grid">
                    {Section::ALL
                        .into_iter()
                        .map(|section| link(section, "navbar__mobile-link", "navbar__mobile-link--active"))
                        .collect::<Vec<_>>()}
                </div>
                <button
                    class="btn btn--primary navbar__mobile-cta"
                    on:click=move |_| navigate_to(nav, Section::Contact)
                >
                    "Let's Talk"
                </button>
            </div>
        </nav>

        <div class="scroll-progress">
            <div class="scroll-progress__bar" style:width=move || format!("{:.2}%", nav.with(|s| s.progress))></div>
        </div>

        <Show when=move || nav.with(|s| s.menu_open)>
            <div class="navbar__backdrop" on:click=move |_| nav.update(NavState::close_menu)></div>
        </Show>
    }
}
