//! "Let's Connect" section: contact details, social links, and message form.

use leptos::prelude::*;

use crate::net::api;
use crate::state::contact::{ContactField, ContactState, STATUS_RESET_MS, SubmitStatus};
use crate::state::nav::Section;
use crate::util::schedule::TaskScope;

const INPUT_CLASS: &str = "contact__input";

fn field_input(contact: RwSignal<ContactState>, field: ContactField, kind: &'static str, label: &'static str, placeholder: &'static str) -> impl IntoView + use<> {
    view! {
        <div class="contact__field">
            <label for=field.name() class="contact__label">{label}</label>
            <input
                class=INPUT_CLASS
                type=kind
                id=field.name()
                name=field.name()
                required=true
                placeholder=placeholder
                prop:value=move || contact.with(|c| c.form.get(field).to_owned())
                on:input=move |ev| contact.update(|c| c.form.set(field, event_target_value(&ev)))
            />
        </div>
    }
}

#[component]
pub fn ContactSection() -> impl IntoView {
    let contact = expect_context::<RwSignal<ContactState>>();

    let scope = TaskScope::new();
    {
        let scope = scope.clone();
        on_cleanup(move || scope.cancel());
    }
    let scope = StoredValue::new(scope);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(request) = contact.try_update(ContactState::begin_submit).flatten() else {
            return;
        };
        let tasks = scope.get_value();
        leptos::task::spawn_local(async move {
            let outcome = api::submit_contact(&request).await.map(|_| ());
            let succeeded = outcome.is_ok();
            let Some(seq) = contact.try_update(|c| c.finish_submit(outcome)) else {
                return;
            };
            if succeeded {
                tasks.schedule(STATUS_RESET_MS, move || {
                    contact.try_update(|c| c.reset_status(seq));
                });
            }
        });
    };

    let submitting = move || contact.with(|s| s.submitting);

    view! {
        <section id=Section::Contact.id() class="contact">
            <div class="section__header">
                <h2 class="section__title">"Let's Connect"</h2>
                <p class="section__lead">
                    "Ready to bring your ideas to life? Let's discuss how we can work together to create something amazing."
                </p>
            </div>

            <div class="contact__grid">
                <div class="contact__info">
                    <div class="card">
                        <h3>"Get in Touch"</h3>
                        <ul class="contact__channels">
                            <li>
                                <span class="contact__channel-label">"Email"</span>
                                <a href="mailto:sachit@example.com">"sachit@example.com"</a>
                            </li>
                            <li>
                                <span class="contact__channel-label">"Phone"</span>
                                <a href="tel:+1234567890">"+1 (234) 567-8900"</a>
                            </li>
                            <li>
                                <span class="contact__channel-label">"Location"</span>
                                <span>"India"</span>
                            </li>
                        </ul>
                    </div>
                    <div class="card">
                        <h3>"Follow Me"</h3>
                        <div class="contact__socials">
                            <a href="https://github.com/sachit" target="_blank" rel="noopener noreferrer">"GitHub"</a>
                            <a href="https://linkedin.com/in/sachit" target="_blank" rel="noopener noreferrer">"LinkedIn"</a>
                            <a href="https://sachit.dev" target="_blank" rel="noopener noreferrer">"Website"</a>
                        </div>
                    </div>
                </div>

                <form class="card contact__form" on:submit=on_submit>
                    <h3>"Send Message"</h3>
                    <div class="contact__row">
                        {field_input(contact, ContactField::Name, "text", "Name", "Your name")}
                        {field_input(contact, ContactField::Email, "email", "Email", "your@email.com")}
                    </div>
                    {field_input(contact, ContactField::Subject, "text", "Subject", "What's this about?")}
                    <div class="contact__field">
                        <label for=ContactField::Message.name() class="contact__label">"Message"</label>
                        <textarea
                            class=INPUT_CLASS
                            id=ContactField::Message.name()
                            name=ContactField::Message.name()
                            rows=6
                            required=true
                            placeholder="Tell me about your project..."
                            prop:value=move || contact.with(|c| c.form.message.clone())
                            on:input=move |ev| contact.update(|c| c.form.set(ContactField::Message, event_target_value(&ev)))
                        ></textarea>
                    </div>

                    <button type="submit" class="btn btn--primary contact__submit" disabled=submitting>
                        {move || if submitting() { "Sending..." } else { "Send Message" }}
                    </button>

                    {move || match contact.with(|s| s.status.clone()) {
                        SubmitStatus::Idle => None,
                        SubmitStatus::Success => Some(
                            view! {
                                <div class="contact__status contact__status--success">
                                    "Message sent successfully! I'll get back to you soon."
                                </div>
                            }
                                .into_any(),
                        ),
                        SubmitStatus::Error(message) => Some(
                            view! { <div class="contact__status contact__status--error">{message}</div> }.into_any(),
                        ),
                    }}
                </form>
            </div>
        </section>
    }
}
