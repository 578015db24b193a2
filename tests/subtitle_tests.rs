// Tests for subtitle rendering and export
//
// The export is a pure function of the finalized segments: a 1-based index
// line, a timestamp+text line, and a blank separator per segment.

use subvox::recognizer::RecognitionResult;
use subvox::{Segment, SubtitleDocument, Transcript, SUBTITLE_FILENAME};

#[test]
fn empty_transcript_renders_empty_document() {
    let document = SubtitleDocument::from_segments(&[]);

    assert!(document.is_empty());
    assert_eq!(document.as_str(), "");
    assert!(document.into_bytes().is_empty());
}

#[test]
fn blocks_match_the_export_format() {
    let segments = vec![
        Segment::new(5.2, "Hello world"),
        Segment::new(9.8, "This is a test"),
    ];

    let document = SubtitleDocument::from_segments(&segments);

    assert_eq!(
        document.as_str(),
        "1\n00:00:05 Hello world\n\n2\n00:00:09 This is a test\n\n"
    );
}

#[test]
fn block_indices_are_one_based_and_sequential() {
    let segments: Vec<Segment> = (0..5)
        .map(|i| Segment::new(i as f64 * 2.0, format!("line {}", i)))
        .collect();

    let document = SubtitleDocument::from_segments(&segments);
    let lines: Vec<&str> = document.as_str().lines().collect();

    // Three lines per block: index, timestamp+text, blank separator
    assert_eq!(lines.len(), 3 * segments.len());

    for (i, _) in segments.iter().enumerate() {
        assert_eq!(lines[3 * i], (i + 1).to_string());
        assert_eq!(lines[3 * i + 2], "");
    }
}

#[test]
fn export_lines_carry_no_brackets() {
    let segment = Segment::new(5.2, "Hello world");

    // The live display brackets the timestamp; the export strips it
    assert_eq!(segment.display_line(), "[00:00:05] Hello world");

    let document = SubtitleDocument::from_segments(&[segment]);
    assert_eq!(document.as_str(), "1\n00:00:05 Hello world\n\n");
}

#[test]
fn interim_text_never_reaches_the_export() {
    let mut transcript = Transcript::new();

    transcript.apply(2.0, &[RecognitionResult::final_text("Hello world")], 0);
    transcript.apply(3.0, &[RecognitionResult::interim_text("pending")], 0);

    let document = SubtitleDocument::from_segments(transcript.segments());

    assert!(document.as_str().contains("Hello world"));
    assert!(!document.as_str().contains("pending"));
}

#[test]
fn write_to_saves_the_document() {
    let segments = vec![Segment::new(1.0, "saved line")];
    let document = SubtitleDocument::from_segments(&segments);

    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join(SUBTITLE_FILENAME);

    document.write_to(&path).unwrap();

    let saved = std::fs::read_to_string(&path).unwrap();
    assert_eq!(saved, document.as_str());
}
