// Tests for the recognition-service wire messages
//
// The JSON shapes here mirror what the recognition service publishes on the
// speech.event.* subjects and what subvox publishes on speech.control.*.

use subvox::nats::messages::{
    decode_event, ControlMessage, ResultBatchMessage, END_SUBJECT, ERROR_SUBJECT, RESULT_SUBJECT,
};
use subvox::recognizer::RecognitionEvent;

#[test]
fn result_batch_matches_the_platform_shape() {
    let json = r#"{
        "session_id": "caption-1",
        "result_index": 1,
        "results": [
            { "final": false, "alternatives": [{ "transcript": "Hel" }] },
            { "final": true, "alternatives": [{ "transcript": "Hello world" }] }
        ]
    }"#;

    let msg: ResultBatchMessage = serde_json::from_str(json).unwrap();
    assert_eq!(msg.session_id, "caption-1");
    assert_eq!(msg.result_index, 1);
    assert_eq!(msg.results.len(), 2);
    assert!(!msg.results[0].is_final);
    assert!(msg.results[1].is_final);

    let batch = msg.into_batch();
    assert_eq!(batch.result_index, 1);
    assert_eq!(batch.results[1].alternatives[0].transcript, "Hello world");
}

#[test]
fn result_serialization_uses_the_final_field_name() {
    let json = r#"{
        "session_id": "caption-1",
        "result_index": 0,
        "results": [{ "final": true, "alternatives": [{ "transcript": "ok" }] }]
    }"#;

    let msg: ResultBatchMessage = serde_json::from_str(json).unwrap();
    let round_trip = serde_json::to_string(&msg).unwrap();

    assert!(round_trip.contains("\"final\":true"));
    assert!(!round_trip.contains("is_final"));
}

#[test]
fn control_message_skips_absent_language() {
    let stop = ControlMessage {
        session_id: "caption-1".to_string(),
        command: "stop".to_string(),
        language: None,
        timestamp: "2026-08-07T12:00:00Z".to_string(),
    };

    let json = serde_json::to_string(&stop).unwrap();
    assert!(json.contains("\"command\":\"stop\""));
    assert!(!json.contains("language"));

    let start = ControlMessage {
        session_id: "caption-1".to_string(),
        command: "start".to_string(),
        language: Some("de-DE".to_string()),
        timestamp: "2026-08-07T12:00:00Z".to_string(),
    };

    let json = serde_json::to_string(&start).unwrap();
    assert!(json.contains("\"language\":\"de-DE\""));
}

#[test]
fn decode_event_dispatches_on_subject() {
    let result_payload = br#"{
        "session_id": "caption-1",
        "result_index": 0,
        "results": [{ "final": true, "alternatives": [{ "transcript": "hi" }] }]
    }"#;

    let envelope = decode_event(RESULT_SUBJECT, result_payload).unwrap().unwrap();
    assert_eq!(envelope.session_id, "caption-1");
    assert!(matches!(envelope.event, RecognitionEvent::Results(_)));

    let error_payload = br#"{ "session_id": "caption-1", "code": "not-allowed" }"#;
    let envelope = decode_event(ERROR_SUBJECT, error_payload).unwrap().unwrap();
    match envelope.event {
        RecognitionEvent::Error { code } => assert_eq!(code, "not-allowed"),
        other => panic!("expected error event, got {:?}", other),
    }

    let end_payload = br#"{ "session_id": "caption-1" }"#;
    let envelope = decode_event(END_SUBJECT, end_payload).unwrap().unwrap();
    assert!(matches!(envelope.event, RecognitionEvent::End));
}

#[test]
fn unrelated_subjects_are_ignored() {
    let decoded = decode_event("speech.control.caption-1", b"{}").unwrap();
    assert!(decoded.is_none());

    let decoded = decode_event("speech.event.metrics", b"{}").unwrap();
    assert!(decoded.is_none());
}

#[test]
fn malformed_payloads_are_errors() {
    assert!(decode_event(RESULT_SUBJECT, b"not json").is_err());
    assert!(decode_event(ERROR_SUBJECT, b"[]").is_err());
}
