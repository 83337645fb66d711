//! Floating FAQ chat widget.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders `ChatState` and turns each user turn's `PendingReply` into timers:
//! one to deliver the bot reply after the typing delay, and for some quick
//! actions a second one to scroll the page to the related section.
//!
//! Timers run in a `TaskScope` that is cancelled when the widget unmounts, and
//! queued tickets are dropped at the same time, so nothing fires into a
//! discarded widget.

use leptos::prelude::*;

use crate::state::chat::{ChatMessage, ChatState, PendingReply, Sender};
use crate::state::chat_replies::{QUICK_OPTIONS, QuickAction, VISIBLE_QUICK_OPTIONS};
use crate::util::clock;
use crate::util::dom;
use crate::util::schedule::TaskScope;

#[component]
pub fn ChatWidget() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();

    let input = RwSignal::new(String::new());
    let messages_ref = NodeRef::<leptos::html::Div>::new();
    let input_ref = NodeRef::<leptos::html::Input>::new();

    let scope = TaskScope::new();
    {
        let scope = scope.clone();
        on_cleanup(move || {
            scope.cancel();
            chat.try_update(ChatState::cancel_pending);
        });
    }
    let scope = StoredValue::new(scope);

    Effect::new(move || {
        // Re-run whenever a message lands or the typing indicator toggles.
        chat.track();

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                el.set_scroll_top(el.scroll_height());
            }
        }
    });

    Effect::new(move || {
        let open = chat.with(|s| s.is_open);
        #[cfg(feature = "hydrate")]
        {
            if open {
                if let Some(input_el) = input_ref.get() {
                    let _ = input_el.focus();
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = open;
        }
    });

    let deliver = move |pending: PendingReply| {
        let tasks = scope.get_value();
        let ticket = pending.ticket;
        tasks.schedule(pending.delay_ms, move || {
            chat.try_update(|c| c.complete_reply(ticket, clock::now_ms()));
        });
        if let Some(scroll) = pending.scroll {
            tasks.schedule(scroll.delay_ms, move || dom::scroll_into_view(scroll.section));
        }
    };

    let do_send = move || {
        let text = input.get_untracked();
        let pending = chat
            .try_update(|c| c.send_text(&text, clock::now_ms(), clock::random_unit()))
            .flatten();
        if let Some(pending) = pending {
            input.set(String::new());
            deliver(pending);
        }
    };

    let on_quick = move |action: QuickAction| {
        if let Some(pending) = chat.try_update(|c| c.send_quick_action(action, clock::now_ms(), clock::random_unit())) {
            deliver(pending);
        }
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            do_send();
        }
    };

    let toggle_open = move |_| chat.update(|c| c.toggle_open(clock::now_ms()));
    let can_send = move || !input.get().trim().is_empty();

    view! {
        <div class="chat-widget" class:chat-widget--open=move || chat.with(|s| s.is_open)>
            <Show
                when=move || chat.with(|s| s.is_open)
                fallback=move || {
                    view! {
                        <button class="chat-widget__launcher" aria-label="Open chat" on:click=toggle_open>
                            <span class="chat-widget__launcher-icon">"\u{1f4ac}"</span>
                            <Show when=move || chat.with(|s| s.has_unread)>
                                <span class="chat-widget__unread"></span>
                            </Show>
                            <span class="chat-widget__tooltip">"Chat with Sachit's AI Assistant"</span>
                        </button>
                    }
                }
            >
                <div class="chat-widget__window" class:chat-widget__window--minimized=move || chat.with(|s| s.is_minimized)>
                    <div class="chat-widget__header">
                        <div class="chat-widget__identity">
                            <span class="chat-widget__avatar">"\u{1f916}"</span>
                            <div>
                                <h3>"Sachit's AI Assistant"</h3>
                                <p class="chat-widget__presence">"Online \u{2022} Ready to help"</p>
                            </div>
                        </div>
                        <div class="chat-widget__header-actions">
                            <button
                                class="chat-widget__icon-btn"
                                aria-label=move || if chat.with(|s| s.is_minimized) { "Maximize" } else { "Minimize" }
                                on:click=move |_| chat.update(ChatState::toggle_minimized)
                            >
                                {move || if chat.with(|s| s.is_minimized) { "\u{25a2}" } else { "\u{2013}" }}
                            </button>
                            <button class="chat-widget__icon-btn" aria-label="Close chat" on:click=toggle_open>
                                "\u{2715}"
                            </button>
                        </div>
                    </div>

                    <Show when=move || !chat.with(|s| s.is_minimized)>
                        <div class="chat-widget__messages" node_ref=messages_ref>
                            {move || chat.with(|s| s.messages().iter().map(message_row).collect::<Vec<_>>())}

                            {move || {
                                chat.with(ChatState::is_composing)
                                    .then(|| {
                                        view! {
                                            <div class="chat-widget__row">
                                                <span class="chat-widget__avatar chat-widget__avatar--bot">"\u{1f916}"</span>
                                                <div class="chat-widget__typing">
                                                    <span></span>
                                                    <span></span>
                                                    <span></span>
                                                </div>
                                            </div>
                                        }
                                    })
                            }}
                        </div>

                        <Show when=move || chat.with(|s| s.shows_quick_options())>
                            <div class="chat-widget__quick">
                                <p class="chat-widget__quick-title">"Quick questions:"</p>
                                <div class="chat-widget__quick-grid">
                                    {QUICK_OPTIONS
                                        .iter()
                                        .take(VISIBLE_QUICK_OPTIONS)
                                        .map(|option| {
                                            let action = option.action;
                                            view! {
                                                <button class="chat-widget__quick-btn" on:click=move |_| on_quick(action)>
                                                    {option.text}
                                                </button>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </div>
                            </div>
                        </Show>

                        <div class="chat-widget__input-row">
                            <input
                                class="chat-widget__input"
                                type="text"
                                placeholder="Ask me anything about Sachit..."
                                node_ref=input_ref
                                prop:value=move || input.get()
                                on:input=move |ev| input.set(event_target_value(&ev))
                                on:keydown=on_keydown
                            />
                            <button
                                class="btn btn--primary chat-widget__send"
                                aria-label="Send"
                                on:click=move |_| do_send()
                                disabled=move || !can_send()
                            >
                                "\u{27a4}"
                            </button>
                        </div>
                    </Show>
                </div>
            </Show>
        </div>
    }
}

fn message_row(msg: &ChatMessage) -> impl IntoView + use<> {
    let is_user = msg.sender == Sender::User;
    let text = msg.text.clone();
    let time = clock::time_label(msg.timestamp);

    view! {
        <div class="chat-widget__row" class:chat-widget__row--user=is_user>
            <span class="chat-widget__avatar" class:chat-widget__avatar--bot=!is_user>
                {if is_user { "\u{1f464}" } else { "\u{1f916}" }}
            </span>
            <div class="chat-widget__bubble" class:chat-widget__bubble--user=is_user>
                <p class="chat-widget__text">{text}</p>
                <p class="chat-widget__time">{time}</p>
            </div>
        </div>
    }
}
