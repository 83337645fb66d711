use super::*;

#[test]
fn contact_request_uses_plain_field_names() {
    let req = ContactRequest {
        name: "Ada".into(),
        email: "ada@example.com".into(),
        subject: "Hi".into(),
        message: "Hello there".into(),
    };
    let value = serde_json::to_value(&req).unwrap();
    assert_eq!(value["name"], "Ada");
    assert_eq!(value["email"], "ada@example.com");
    assert_eq!(value["subject"], "Hi");
    assert_eq!(value["message"], "Hello there");
}

#[test]
fn api_error_omits_missing_field() {
    let err = ApiError { error: "boom".into(), code: "E_INTERNAL".into(), field: None };
    let json = serde_json::to_string(&err).unwrap();
    assert!(!json.contains("field"));
}

#[test]
fn api_error_parses_without_field() {
    let err: ApiError = serde_json::from_str(r#"{"error":"bad","code":"E_X"}"#).unwrap();
    assert_eq!(err.field, None);
    assert_eq!(err.code, "E_X");
}
