use super::*;

// =============================================================
// interpret
// =============================================================

#[test]
fn interpret_ok_true_with_message_is_success() {
    let result = interpret(200, r#"{"ok":true,"message":"Got it!"}"#);
    assert_eq!(result, SubmissionResult::Success { message: Some("Got it!".to_owned()) });
    assert_eq!(result.status_text(), "Got it!");
    assert!(result.clears_form());
}

#[test]
fn interpret_ok_true_without_message_uses_default_thanks() {
    let result = interpret(201, r#"{"ok":true}"#);
    assert_eq!(result.status_text(), "Thanks! Message sent.");
    assert!(result.clears_form());
}

#[test]
fn interpret_ok_true_with_empty_message_uses_default_thanks() {
    let result = interpret(200, r#"{"ok":true,"message":""}"#);
    assert_eq!(result.status_text(), DEFAULT_SUCCESS_MESSAGE);
}

#[test]
fn interpret_ok_false_is_rejected_with_server_message() {
    let result = interpret(200, r#"{"ok":false,"message":"Invalid email."}"#);
    assert_eq!(result, SubmissionResult::Rejected { message: Some("Invalid email.".to_owned()) });
    assert_eq!(result.status_text(), "Invalid email.");
    assert!(!result.clears_form());
}

#[test]
fn interpret_ok_false_on_error_status_is_still_rejected() {
    let result = interpret(422, r#"{"ok":false}"#);
    assert_eq!(result, SubmissionResult::Rejected { message: None });
    assert_eq!(result.status_text(), "Server rejected the submission.");
}

#[test]
fn interpret_object_without_ok_is_rejected() {
    let result = interpret(200, r#"{"status":"queued"}"#);
    assert_eq!(result, SubmissionResult::Rejected { message: None });
}

#[test]
fn interpret_ok_true_on_error_status_falls_back_to_raw_text() {
    let body = r#"{"ok":true}"#;
    let result = interpret(500, body);
    assert_eq!(result, SubmissionResult::ServerError { raw_text: body.to_owned() });
    assert!(!result.clears_form());
}

#[test]
fn interpret_plain_text_error_shows_body() {
    let result = interpret(500, "Internal Error");
    assert_eq!(result.status_text(), "Internal Error");
    assert!(!result.clears_form());
}

#[test]
fn interpret_html_success_status_shows_body() {
    let body = "<html><body>Thanks</body></html>";
    let result = interpret(200, body);
    assert_eq!(result, SubmissionResult::ServerError { raw_text: body.to_owned() });
}

#[test]
fn interpret_empty_body_uses_default_server_error() {
    let result = interpret(502, "");
    assert_eq!(result.status_text(), "Server error. Try again later.");
}

#[test]
fn interpret_truthy_json_scalar_is_rejected() {
    for body in ["true", r#""queued""#, "[1]", "5"] {
        let result = interpret(200, body);
        assert_eq!(result, SubmissionResult::Rejected { message: None }, "body {body}");
        assert_eq!(result.status_text(), "Server rejected the submission.");
    }
}

#[test]
fn interpret_falsy_json_falls_back_to_raw_text() {
    for body in ["null", "false", "0", r#""""#] {
        let result = interpret(200, body);
        assert_eq!(result, SubmissionResult::ServerError { raw_text: body.to_owned() }, "body {body}");
    }
}

#[test]
fn interpret_numeric_rejection_message_is_rendered() {
    let result = interpret(200, r#"{"ok":false,"message":42}"#);
    assert_eq!(result, SubmissionResult::Rejected { message: Some("42".to_owned()) });
    assert_eq!(result.status_text(), "42");
}

// =============================================================
// Ack
// =============================================================

#[test]
fn ack_reads_ok_leniently() {
    assert!(Ack::from_body(r#"{"ok":1}"#).unwrap().ok);
    assert!(Ack::from_body(r#"{"ok":"yes"}"#).unwrap().ok);
    assert!(Ack::from_body(r#"{"ok":{}}"#).unwrap().ok);
    assert!(!Ack::from_body(r#"{"ok":0}"#).unwrap().ok);
    assert!(!Ack::from_body(r#"{"ok":""}"#).unwrap().ok);
    assert!(!Ack::from_body(r#"{"ok":null}"#).unwrap().ok);
}

#[test]
fn ack_renders_non_string_message_as_text() {
    let message = |body: &str| Ack::from_body(body).unwrap().message;
    assert_eq!(message(r#"{"ok":true,"message":42}"#).as_deref(), Some("42"));
    assert_eq!(message(r#"{"ok":true,"message":2.5}"#).as_deref(), Some("2.5"));
    assert_eq!(message(r#"{"ok":true,"message":3.0}"#).as_deref(), Some("3"));
    assert_eq!(message(r#"{"ok":true,"message":true}"#).as_deref(), Some("true"));
    assert_eq!(message(r#"{"ok":false,"message":["a",1]}"#).as_deref(), Some("a,1"));
    assert_eq!(message(r#"{"ok":false,"message":{"x":1}}"#).as_deref(), Some("[object Object]"));
}

#[test]
fn ack_drops_falsy_message() {
    for body in [r#"{"ok":true,"message":0}"#, r#"{"ok":true,"message":false}"#, r#"{"ok":true,"message":null}"#] {
        assert_eq!(Ack::from_body(body).unwrap().message, None, "body {body}");
    }
}

#[test]
fn ack_from_array_has_no_ok() {
    assert_eq!(Ack::from_body("[1]"), Some(Ack { ok: false, message: None }));
}

#[test]
fn ack_rejects_non_json() {
    assert_eq!(Ack::from_body("Internal Error"), None);
    assert_eq!(Ack::from_body(""), None);
}

// =============================================================
// SubmissionResult
// =============================================================

#[test]
fn network_error_has_fixed_message() {
    assert_eq!(SubmissionResult::NetworkError.status_text(), "Network error. Please try again.");
    assert!(!SubmissionResult::NetworkError.clears_form());
}

#[test]
fn success_status_range() {
    assert!(is_success_status(200));
    assert!(is_success_status(204));
    assert!(is_success_status(299));
    assert!(!is_success_status(199));
    assert!(!is_success_status(300));
    assert!(!is_success_status(500));
}
