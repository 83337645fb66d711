//! Canned replies and keyword routing for the chat widget.
//!
//! DESIGN
//! ======
//! Free text is routed through [`KEYWORD_ROUTES`], an ordered table of
//! `(topic, keywords)` rows. The input is case-folded and the first row with
//! any keyword contained in it wins; no match falls through to
//! [`Topic::Default`]. Routing is total and never fails.
//!
//! Matching is plain substring containment, so short keywords like `hi` also
//! hit inside longer words ("this", "which"). Row order decides those cases.

#[cfg(test)]
#[path = "chat_replies_test.rs"]
mod chat_replies_test;

use crate::state::nav::Section;

/// Topic selected for a bot reply.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Topic {
    Skills,
    Projects,
    Resume,
    Contact,
    Experience,
    Education,
    Greeting,
    Default,
}

impl Topic {
    /// Canned reply text for this topic.
    #[must_use]
    pub fn reply(self) -> &'static str {
        match self {
            Self::Skills => SKILLS_REPLY,
            Self::Projects => PROJECTS_REPLY,
            Self::Resume => RESUME_REPLY,
            Self::Contact => CONTACT_REPLY,
            Self::Experience => EXPERIENCE_REPLY,
            Self::Education => EDUCATION_REPLY,
            Self::Greeting => GREETING_REPLY,
            Self::Default => DEFAULT_REPLY,
        }
    }
}

/// Keyword groups in priority order.
pub const KEYWORD_ROUTES: &[(Topic, &[&str])] = &[
    (Topic::Skills, &["skill", "technology", "tech"]),
    (Topic::Projects, &["project", "work", "portfolio"]),
    (Topic::Resume, &["resume", "cv", "download"]),
    (Topic::Contact, &["contact", "email", "phone", "reach"]),
    (Topic::Experience, &["experience", "job", "career"]),
    (Topic::Education, &["education", "study", "degree"]),
    (Topic::Greeting, &["hello", "hi", "hey"]),
];

/// Route free-text input to a topic.
#[must_use]
pub fn route_free_text(input: &str) -> Topic {
    let folded = input.to_lowercase();
    KEYWORD_ROUTES
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|kw| folded.contains(kw)))
        .map_or(Topic::Default, |(topic, _)| *topic)
}

/// Predefined quick-question buttons.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum QuickAction {
    Skills,
    Projects,
    Resume,
    Contact,
    Experience,
    Education,
}

/// A quick-question button: display text plus the action it triggers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuickOption {
    pub text: &'static str,
    pub action: QuickAction,
}

pub const QUICK_OPTIONS: [QuickOption; 6] = [
    QuickOption { text: "Tell me about Sachit's skills", action: QuickAction::Skills },
    QuickOption { text: "Show me his projects", action: QuickAction::Projects },
    QuickOption { text: "View his resume", action: QuickAction::Resume },
    QuickOption { text: "How to contact him?", action: QuickAction::Contact },
    QuickOption { text: "His experience", action: QuickAction::Experience },
    QuickOption { text: "Education background", action: QuickAction::Education },
];

/// Number of quick options rendered in the widget.
pub const VISIBLE_QUICK_OPTIONS: usize = 4;

impl QuickAction {
    /// Text posted as the user's message when the button is pressed.
    #[must_use]
    pub fn text(self) -> &'static str {
        QUICK_OPTIONS
            .iter()
            .find(|opt| opt.action == self)
            .map_or("", |opt| opt.text)
    }

    #[must_use]
    pub fn topic(self) -> Topic {
        match self {
            Self::Skills => Topic::Skills,
            Self::Projects => Topic::Projects,
            Self::Resume => Topic::Resume,
            Self::Contact => Topic::Contact,
            Self::Experience => Topic::Experience,
            Self::Education => Topic::Education,
        }
    }

    /// Page anchor to scroll to after the reply is queued, if any.
    #[must_use]
    pub fn scroll_target(self) -> Option<Section> {
        match self {
            Self::Resume => Some(Section::Hero),
            Self::Projects => Some(Section::Projects),
            Self::Contact => Some(Section::Contact),
            Self::Skills | Self::Experience | Self::Education => None,
        }
    }
}

const SKILLS_REPLY: &str = "Sachit is a skilled DevOps Engineer with 2.7 years of PHP development experience. His expertise includes:\n\n\u{1f527} DevOps: Docker, Jenkins, GitHub Actions, AWS, Linux\n\u{1f4bb} Backend: PHP, Laravel, MySQL, API development\n\u{2601}\u{fe0f} Cloud: AWS services, infrastructure automation\n\u{1f6e0}\u{fe0f} Tools: Git, Nginx, Bash scripting, Postman\n\nWould you like to know more about any specific skill?";

const PROJECTS_REPLY: &str = "Sachit has worked on several impressive projects:\n\n\u{1f680} DevFlow AI - Multi-tool dashboard with AI integration\n\u{1f433} Remote Docker Manager - SSH-based container management\n\u{1f4d6} AI Story Co-Writer - Creative writing assistant\n\u{1f4bb} Universal Code Generator - AI-powered development tool\n\u{1f427} Linux Command Menu - System administration utility\n\nWould you like details about any specific project?";

const RESUME_REPLY: &str = "You can download Sachit's resume by clicking the 'Download Resume' button in the hero section, or I can scroll you there! His resume includes detailed information about his DevOps expertise, PHP development experience, certifications, and project portfolio.";

const CONTACT_REPLY: &str = "You can reach Sachit through multiple channels:\n\n\u{1f4e7} Email: skaistha16@gmail.com\n\u{1f4f1} Phone: +91 7876434370\n\u{1f4cd} Location: Chandigarh, India\n\u{1f4bc} LinkedIn: linkedin.com/in/sachit-kaistha-306849190\n\u{1f419} GitHub: github.com/sachitkaistha\n\nShall I scroll you to the contact form?";

const EXPERIENCE_REPLY: &str = "Sachit has a strong professional background:\n\n\u{1f504} Current: DevOps Engineer - Focusing on CI/CD, containerization, and cloud infrastructure\n\u{1f4bb} Previous: PHP Web Developer (2.7 years) - Built robust web applications using PHP/Laravel\n\nHe's passionate about automation, scalable systems, and bridging development with operations.";

const EDUCATION_REPLY: &str = "Sachit's educational background:\n\n\u{1f393} Master of Computer Applications (MCA) - Currently pursuing (2023-2025)\n\u{1f393} Bachelor of Computer Applications (BCA) - Completed (2019-2022)\n\u{1f4dc} PHP Development Training - 6 months intensive course\n\u{1f3c6} Linux World Informatics Internship - AI integration & DevOps automation\n\nHe's also certified in PHP fundamentals through Udemy.";

const DEFAULT_REPLY: &str = "Hi! I'm Sachit's AI assistant. I can help you learn about his skills, projects, experience, and how to get in touch with him. What would you like to know?";

const GREETING_REPLY: &str = "Hello! \u{1f44b} Welcome to Sachit's portfolio. I'm here to help you explore his work and expertise. Feel free to ask me anything about his skills, projects, or experience!";
