use super::*;

// =============================================================
// Free-text routing
// =============================================================

#[test]
fn skills_question_routes_to_skills() {
    assert_eq!(route_free_text("What are your skills?"), Topic::Skills);
}

#[test]
fn unmatched_text_routes_to_default() {
    assert_eq!(route_free_text("gibberish text"), Topic::Default);
    assert_eq!(route_free_text("the weather today"), Topic::Default);
}

#[test]
fn routing_is_case_insensitive() {
    assert_eq!(route_free_text("TECHNOLOGY STACK"), Topic::Skills);
    assert_eq!(route_free_text("Send me your CV"), Topic::Resume);
}

#[test]
fn each_group_routes_on_a_single_keyword() {
    let cases = [
        ("tech stack?", Topic::Skills),
        ("any portfolio pieces?", Topic::Projects),
        ("can I download it", Topic::Resume),
        ("how can I reach you", Topic::Contact),
        ("any job openings?", Topic::Experience),
        ("where did you study?", Topic::Education),
        ("hey there", Topic::Greeting),
    ];
    for (input, expected) in cases {
        assert_eq!(route_free_text(input), expected, "input: {input}");
    }
}

#[test]
fn earlier_group_wins_when_several_match() {
    // "project" (projects) outranks "email" (contact).
    assert_eq!(route_free_text("email me about a project"), Topic::Projects);
    // "skill" outranks "degree".
    assert_eq!(route_free_text("degree or skills?"), Topic::Skills);
}

#[test]
fn greeting_substring_matches_inside_words() {
    assert_eq!(route_free_text("this"), Topic::Greeting);
}

#[test]
fn every_topic_has_non_empty_reply() {
    let topics = [
        Topic::Skills,
        Topic::Projects,
        Topic::Resume,
        Topic::Contact,
        Topic::Experience,
        Topic::Education,
        Topic::Greeting,
        Topic::Default,
    ];
    for topic in topics {
        assert!(!topic.reply().is_empty(), "{topic:?}");
    }
}

// =============================================================
// Quick actions
// =============================================================

#[test]
fn quick_actions_map_to_their_topic() {
    for option in QUICK_OPTIONS {
        // Each tag is also a keyword of its own group.
        assert_eq!(route_free_text(option.action.tag()), option.action.topic());
    }
    assert_eq!(QuickAction::Contact.topic(), Topic::Contact);
}

#[test]
fn quick_action_text_comes_from_option_table() {
    assert_eq!(QuickAction::Resume.text(), "View his resume");
    assert_eq!(QuickAction::Education.text(), "Education background");
}

#[test]
fn only_resume_projects_contact_scroll() {
    assert_eq!(QuickAction::Resume.scroll_target(), Some(Section::Hero));
    assert_eq!(QuickAction::Projects.scroll_target(), Some(Section::Projects));
    assert_eq!(QuickAction::Contact.scroll_target(), Some(Section::Contact));
    assert_eq!(QuickAction::Skills.scroll_target(), None);
    assert_eq!(QuickAction::Experience.scroll_target(), None);
    assert_eq!(QuickAction::Education.scroll_target(), None);
}
