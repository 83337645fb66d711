//! Chat widget session state.
//!
//! DESIGN
//! ======
//! The message log is append-only for the lifetime of a widget session:
//! messages are only ever pushed, and the vector is private so nothing outside
//! this module can edit or remove entries.
//!
//! Bot replies are two-phase. `send_text`/`send_quick_action` append the user
//! message, register a pending ticket, and hand back a [`PendingReply`] that
//! the component schedules. When the timer fires it calls `complete_reply`
//! with the ticket. A ticket that was cancelled (widget torn down) or already
//! completed is ignored, so a late timer can never append twice or touch a
//! discarded session.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use crate::state::chat_replies::{QuickAction, Topic, route_free_text};
use crate::state::nav::Section;

/// Lower bound of the simulated typing delay.
pub const TYPING_DELAY_MIN_MS: u32 = 1000;

/// Width of the random range added on top of [`TYPING_DELAY_MIN_MS`].
pub const TYPING_DELAY_SPREAD_MS: u32 = 1000;

/// Delay between queueing a quick-action reply and scrolling to its anchor.
pub const QUICK_ACTION_SCROLL_DELAY_MS: u32 = 2000;

/// Quick options are offered until the log grows past this many messages.
pub const QUICK_OPTIONS_MAX_LOG_LEN: usize = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

/// A single chat message. Immutable once logged.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatMessage {
    pub id: u64,
    pub text: String,
    pub sender: Sender,
    /// Creation time in milliseconds since the Unix epoch.
    pub timestamp: f64,
}

/// Handle for a bot reply that has been queued but not yet delivered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ReplyTicket(u64);

/// Work the widget must schedule after a user turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingReply {
    pub ticket: ReplyTicket,
    pub topic: Topic,
    pub delay_ms: u32,
    pub scroll: Option<ScheduledScroll>,
}

/// Deferred scroll to a page anchor triggered by a quick action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScheduledScroll {
    pub section: Section,
    pub delay_ms: u32,
}

#[derive(Clone, Debug, PartialEq)]
struct PendingEntry {
    ticket: ReplyTicket,
    topic: Topic,
}

/// State for the floating chat widget.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChatState {
    messages: Vec<ChatMessage>,
    pending: Vec<PendingEntry>,
    next_message_id: u64,
    next_ticket: u64,
    pub is_open: bool,
    pub is_minimized: bool,
    pub has_unread: bool,
}

/// Map a uniform sample in `[0, 1)` onto the typing delay range.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn typing_delay_ms(sample: f64) -> u32 {
    let sample = if sample.is_finite() { sample.clamp(0.0, 1.0) } else { 0.0 };
    let extra = (sample * f64::from(TYPING_DELAY_SPREAD_MS)) as u32;
    TYPING_DELAY_MIN_MS + extra.min(TYPING_DELAY_SPREAD_MS - 1)
}

impl ChatState {
    #[must_use]
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// True while at least one bot reply is queued.
    #[must_use]
    pub fn is_composing(&self) -> bool {
        !self.pending.is_empty()
    }

    #[must_use]
    pub fn shows_quick_options(&self) -> bool {
        self.messages.len() <= QUICK_OPTIONS_MAX_LOG_LEN
    }

    /// Open the widget. An empty log is seeded with the greeting right away.
    pub fn open(&mut self, now_ms: f64) {
        self.is_open = true;
        self.has_unread = false;
        if self.messages.is_empty() {
            self.push(Topic::Greeting.reply().to_owned(), Sender::Bot, now_ms);
        }
    }

    pub fn close(&mut self) {
        self.is_open = false;
        self.has_unread = false;
    }

    pub fn toggle_open(&mut self, now_ms: f64) {
        if self.is_open {
            self.close();
        } else {
            self.open(now_ms);
        }
    }

    pub fn toggle_minimized(&mut self) {
        self.is_minimized = !self.is_minimized;
    }

    /// Log a free-text user turn and queue the routed reply.
    ///
    /// Returns `None` for blank input, which is ignored entirely.
    pub fn send_text(&mut self, raw: &str, now_ms: f64, delay_sample: f64) -> Option<PendingReply> {
        let text = raw.trim();
        if text.is_empty() {
            return None;
        }
        let topic = route_free_text(text);
        self.push(text.to_owned(), Sender::User, now_ms);
        Some(self.queue_reply(topic, typing_delay_ms(delay_sample), None))
    }

    /// Log a quick-action turn and queue its fixed reply plus any scroll.
    pub fn send_quick_action(&mut self, action: QuickAction, now_ms: f64, delay_sample: f64) -> PendingReply {
        self.push(action.text().to_owned(), Sender::User, now_ms);
        let scroll = action
            .scroll_target()
            .map(|section| ScheduledScroll { section, delay_ms: QUICK_ACTION_SCROLL_DELAY_MS });
        self.queue_reply(action.topic(), typing_delay_ms(delay_sample), scroll)
    }

    /// Deliver a queued reply. Returns `false` if the ticket is no longer
    /// pending (already delivered or cancelled).
    pub fn complete_reply(&mut self, ticket: ReplyTicket, now_ms: f64) -> bool {
        let Some(idx) = self.pending.iter().position(|p| p.ticket == ticket) else {
            return false;
        };
        let entry = self.pending.remove(idx);
        self.push(entry.topic.reply().to_owned(), Sender::Bot, now_ms);
        if !self.is_open {
            self.has_unread = true;
        }
        true
    }

    /// Drop every queued reply. Used on teardown.
    pub fn cancel_pending(&mut self) {
        self.pending.clear();
    }

    fn queue_reply(&mut self, topic: Topic, delay_ms: u32, scroll: Option<ScheduledScroll>) -> PendingReply {
        let ticket = ReplyTicket(self.next_ticket);
        self.next_ticket += 1;
        self.pending.push(PendingEntry { ticket, topic });
        PendingReply { ticket, topic, delay_ms, scroll }
    }

    fn push(&mut self, text: String, sender: Sender, now_ms: f64) {
        let id = self.next_message_id;
        self.next_message_id += 1;
        self.messages.push(ChatMessage { id, text, sender, timestamp: now_ms });
    }
}

