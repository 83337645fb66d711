use super::*;

fn filled() -> ContactState {
    let mut state = ContactState::default();
    state.form.set(ContactField::Name, "Ada".to_owned());
    state.form.set(ContactField::Email, "ada@example.com".to_owned());
    state.form.set(ContactField::Subject, "Hello".to_owned());
    state.form.set(ContactField::Message, "Let's build something.".to_owned());
    state
}

#[test]
fn field_names_match_wire_keys() {
    let names = [ContactField::Name, ContactField::Email, ContactField::Subject, ContactField::Message].map(ContactField::name);
    assert_eq!(names, ["name", "email", "subject", "message"]);
}

#[test]
fn set_replaces_only_one_field() {
    let mut state = filled();
    state.form.set(ContactField::Subject, "Consulting".to_owned());
    assert_eq!(state.form.get(ContactField::Subject), "Consulting");
    assert_eq!(state.form.get(ContactField::Name), "Ada");
    assert_eq!(state.form.get(ContactField::Message), "Let's build something.");
}

#[test]
fn begin_submit_returns_payload_and_blocks_double_submit() {
    let mut state = filled();
    let request = state.begin_submit().unwrap();
    assert_eq!(request.email, "ada@example.com");
    assert!(state.submitting);
    assert!(state.begin_submit().is_none());
}

#[test]
fn success_clears_form_and_shows_banner() {
    let mut state = filled();
    state.begin_submit();
    let seq = state.finish_submit(Ok(()));

    assert!(!state.submitting);
    assert_eq!(state.status, SubmitStatus::Success);
    assert_eq!(state.form, FormState::default());

    state.reset_status(seq);
    assert_eq!(state.status, SubmitStatus::Idle);
}

#[test]
fn failure_keeps_fields_and_reports_message() {
    let mut state = filled();
    state.begin_submit();
    state.finish_submit(Err("email is invalid".to_owned()));

    assert_eq!(state.status, SubmitStatus::Error("email is invalid".to_owned()));
    assert_eq!(state.form.name, "Ada");
}

#[test]
fn stale_reset_does_not_clobber_newer_status() {
    let mut state = filled();
    state.begin_submit();
    let first = state.finish_submit(Ok(()));

    state.form.set(ContactField::Name, "Grace".to_owned());
    state.begin_submit();
    state.finish_submit(Err("server unavailable".to_owned()));

    state.reset_status(first);
    assert_eq!(state.status, SubmitStatus::Error("server unavailable".to_owned()));
}

#[test]
fn begin_submit_clears_previous_banner() {
    let mut state = filled();
    state.begin_submit();
    state.finish_submit(Err("nope".to_owned()));
    state.begin_submit();
    assert_eq!(state.status, SubmitStatus::Idle);
}
