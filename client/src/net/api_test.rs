use super::*;

#[test]
fn contact_failed_message_prefers_server_error() {
    let err = ApiError { error: "email is invalid".into(), code: "E_EMAIL_INVALID".into(), field: Some("email".into()) };
    assert_eq!(contact_failed_message(422, Some(&err)), "email is invalid");
}

#[test]
fn contact_failed_message_falls_back_to_status() {
    assert_eq!(contact_failed_message(502, None), "message could not be sent (status 502)");
    let blank = ApiError { error: String::new(), code: "E_INTERNAL".into(), field: None };
    assert_eq!(contact_failed_message(500, Some(&blank)), "message could not be sent (status 500)");
}

