// Unit tests for transcript assembly
//
// These tests verify finalized segment accumulation, interim buffer
// semantics, and timestamp formatting.

use subvox::recognizer::{RecognitionAlternative, RecognitionResult};
use subvox::{format_timestamp, Segment, Transcript};

#[test]
fn final_results_append_segments_in_order() {
    let mut transcript = Transcript::new();

    transcript.apply(1.0, &[RecognitionResult::final_text("one")], 0);
    transcript.apply(2.5, &[RecognitionResult::final_text("two")], 0);
    transcript.apply(4.0, &[RecognitionResult::final_text("three")], 0);

    let segments = transcript.segments();
    assert_eq!(segments.len(), 3);
    assert_eq!(segments[0].text, "one");
    assert_eq!(segments[1].text, "two");
    assert_eq!(segments[2].text, "three");

    // Offsets never decrease
    for pair in segments.windows(2) {
        assert!(pair[1].offset_secs >= pair[0].offset_secs);
    }
}

#[test]
fn dictation_scenario_produces_expected_lines() {
    let mut transcript = Transcript::new();

    transcript.apply(5.2, &[RecognitionResult::final_text("Hello world")], 0);
    transcript.apply(9.8, &[RecognitionResult::final_text("This is a test")], 0);

    let segments = transcript.segments();
    assert_eq!(segments.len(), 2);
    assert_eq!(segments[0].offset_secs, 5.2);
    assert_eq!(segments[1].offset_secs, 9.8);
    assert_eq!(segments[0].display_line(), "[00:00:05] Hello world");
    assert_eq!(segments[1].display_line(), "[00:00:09] This is a test");

    assert_eq!(
        transcript.live_display(),
        "[00:00:05] Hello world\n[00:00:09] This is a test\n"
    );
}

#[test]
fn interim_results_only_touch_the_live_display() {
    let mut transcript = Transcript::new();

    transcript.apply(1.0, &[RecognitionResult::interim_text("Hel")], 0);

    assert_eq!(transcript.live_display(), "Hel");
    assert_eq!(transcript.interim(), "Hel");
    assert!(transcript.segments().is_empty());
}

#[test]
fn interim_buffer_is_rebuilt_on_every_batch() {
    let mut transcript = Transcript::new();

    transcript.apply(1.0, &[RecognitionResult::interim_text("Hel")], 0);
    transcript.apply(1.5, &[RecognitionResult::interim_text("Hello wor")], 0);

    // Only the most recent batch is reflected
    assert_eq!(transcript.live_display(), "Hello wor");

    // A batch with no interim results leaves the buffer empty
    transcript.apply(2.0, &[RecognitionResult::final_text("Hello world")], 0);
    assert_eq!(transcript.interim(), "");
    assert_eq!(transcript.live_display(), "[00:00:02] Hello world\n");
}

#[test]
fn batch_consumption_starts_at_result_index() {
    let mut transcript = Transcript::new();

    // The first result was already delivered in an earlier batch
    let results = vec![
        RecognitionResult::final_text("already seen"),
        RecognitionResult::final_text("new"),
    ];

    transcript.apply(3.0, &results, 1);

    let segments = transcript.segments();
    assert_eq!(segments.len(), 1);
    assert_eq!(segments[0].text, "new");
}

#[test]
fn result_texts_are_trimmed() {
    let mut transcript = Transcript::new();

    transcript.apply(1.0, &[RecognitionResult::final_text("  Hello world  ")], 0);
    transcript.apply(2.0, &[RecognitionResult::interim_text("  pending ")], 0);

    assert_eq!(transcript.segments()[0].text, "Hello world");
    assert_eq!(transcript.interim(), "pending");
}

#[test]
fn only_top_candidate_is_used() {
    let mut transcript = Transcript::new();

    let result = RecognitionResult {
        is_final: true,
        alternatives: vec![
            RecognitionAlternative {
                transcript: "primary".to_string(),
            },
            RecognitionAlternative {
                transcript: "secondary".to_string(),
            },
        ],
    };

    transcript.apply(1.0, &[result], 0);

    assert_eq!(transcript.segments().len(), 1);
    assert_eq!(transcript.segments()[0].text, "primary");
}

#[test]
fn results_without_candidates_are_skipped() {
    let mut transcript = Transcript::new();

    let result = RecognitionResult {
        is_final: true,
        alternatives: vec![],
    };

    transcript.apply(1.0, &[result], 0);

    assert!(transcript.segments().is_empty());
    assert_eq!(transcript.live_display(), "");
}

#[test]
fn mixed_batch_appends_finals_and_rebuilds_interim() {
    let mut transcript = Transcript::new();

    let results = vec![
        RecognitionResult::final_text("Done"),
        RecognitionResult::interim_text("nex"),
    ];

    transcript.apply(4.0, &results, 0);

    assert_eq!(transcript.segments().len(), 1);
    assert_eq!(transcript.interim(), "nex");
    assert_eq!(transcript.live_display(), "[00:00:04] Done\nnex");
}

#[test]
fn interim_results_concatenate_within_a_batch() {
    let mut transcript = Transcript::new();

    let results = vec![
        RecognitionResult::interim_text("foo"),
        RecognitionResult::interim_text("bar"),
    ];

    transcript.apply(1.0, &results, 0);

    assert_eq!(transcript.interim(), "foobar");
}

#[test]
fn reset_clears_segments_and_interim() {
    let mut transcript = Transcript::new();

    transcript.apply(1.0, &[RecognitionResult::final_text("one")], 0);
    transcript.apply(2.0, &[RecognitionResult::interim_text("two")], 0);

    transcript.reset();

    assert!(transcript.segments().is_empty());
    assert_eq!(transcript.interim(), "");
    assert_eq!(transcript.live_display(), "");
}

#[test]
fn offsets_keep_two_decimal_precision() {
    let segment = Segment::new(9.789, "x");
    assert_eq!(segment.offset_secs, 9.79);

    let segment = Segment::new(5.199999, "y");
    assert_eq!(segment.offset_secs, 5.2);
}

#[test]
fn timestamps_truncate_to_whole_seconds() {
    assert_eq!(format_timestamp(0.0), "00:00:00");
    assert_eq!(format_timestamp(5.2), "00:00:05");
    assert_eq!(format_timestamp(59.99), "00:00:59");
    assert_eq!(format_timestamp(60.0), "00:01:00");
    assert_eq!(format_timestamp(3661.5), "01:01:01");
}
