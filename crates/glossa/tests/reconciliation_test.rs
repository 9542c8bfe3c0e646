//! Integration tests for annotation reconciliation.
//!
//! These exercise the full repair -> compose pipeline on the scenarios a
//! real explanation result produces: correct claims, misplaced claims,
//! claims for text that is not in the sentence, and mutually overlapping
//! claims.

use glossa::annotation::{compose, repair, Annotation, AnnotationKind, Segment};

const SENTENCE: &str = "I have went to the store yesterday.";

fn annotation(text: &str, start: usize, end: usize, kind: AnnotationKind) -> Annotation {
    Annotation::new(text, start, end, kind, "explanation")
}

fn rebuilt(segments: &[Segment]) -> String {
    segments.iter().map(Segment::text).collect()
}

// =============================================================================
// Repair scenarios
// =============================================================================

#[test]
fn correct_offsets_pass_through_unchanged() {
    let claims = vec![annotation("have went", 2, 11, AnnotationKind::Grammar)];
    let repaired = repair(SENTENCE, &claims);

    assert_eq!(repaired.len(), 1);
    assert_eq!((repaired[0].start, repaired[0].end), (2, 11));
    assert_eq!(repaired[0].text, "have went");
}

#[test]
fn wrong_offsets_relocate_to_true_occurrence() {
    // "went" is actually at index 7; the model claimed 99.
    let claims = vec![annotation("went", 99, 103, AnnotationKind::Grammar)];
    let repaired = repair(SENTENCE, &claims);

    assert_eq!(repaired.len(), 1);
    assert_eq!((repaired[0].start, repaired[0].end), (7, 11));
}

#[test]
fn unfindable_text_is_dropped_without_error() {
    let claims = vec![
        annotation("have went", 2, 11, AnnotationKind::Grammar),
        annotation("xyz", 0, 3, AnnotationKind::Vocabulary),
    ];
    let repaired = repair(SENTENCE, &claims);

    // Exactly one annotation dropped, no panic.
    assert_eq!(repaired.len(), claims.len() - 1);
    assert_eq!(repaired[0].text, "have went");
}

#[test]
fn only_unfindable_annotation_yields_single_plain_segment() {
    let claims = vec![annotation("xyz", 0, 3, AnnotationKind::Vocabulary)];
    let segments = compose(SENTENCE, &repair(SENTENCE, &claims));

    assert_eq!(segments.len(), 1);
    assert!(segments[0].annotation().is_none());
    assert_eq!(segments[0].text(), SENTENCE);
}

#[test]
fn repeated_text_resolves_to_occurrence_nearest_claim() {
    let sentence = "Die Katze und die Maus und der Hund.";
    // "und" occurs at byte 10 and 23; the claim points near the second.
    let claims = vec![annotation("und", 21, 24, AnnotationKind::Grammar)];
    let repaired = repair(sentence, &claims);

    assert_eq!(repaired[0].start, 23);
    assert_eq!(&sentence[repaired[0].range()], "und");
}

// =============================================================================
// Compose scenarios
// =============================================================================

#[test]
fn grammar_annotation_renders_expected_segments() {
    let claims = vec![annotation("have went", 2, 11, AnnotationKind::Grammar)];
    let segments = compose(SENTENCE, &repair(SENTENCE, &claims));

    assert_eq!(segments.len(), 3);
    assert_eq!(segments[0].text(), "I ");
    assert_eq!(segments[1].text(), "have went");
    assert_eq!(segments[1].annotation().unwrap().kind, AnnotationKind::Grammar);
    assert_eq!(segments[2].text(), " to the store yesterday.");
    assert_eq!(rebuilt(&segments), SENTENCE);
}

#[test]
fn identical_ranges_keep_exactly_one() {
    // Two categorizations of the same words; the compositor keeps the
    // earlier in sort order and drops the other.
    let claims = vec![
        annotation("have went", 2, 11, AnnotationKind::Grammar),
        annotation("have went", 2, 11, AnnotationKind::Structure),
    ];
    let repaired = repair(SENTENCE, &claims);
    assert_eq!(repaired.len(), 2);

    let segments = compose(SENTENCE, &repaired);
    let annotated: Vec<_> = segments.iter().filter_map(Segment::annotation).collect();

    assert_eq!(annotated.len(), 1);
    assert_eq!(annotated[0].identity, 0);
    assert_eq!(annotated[0].kind, AnnotationKind::Grammar);
    assert_eq!(rebuilt(&segments), SENTENCE);
}

#[test]
fn partially_overlapping_claims_drop_later_starter() {
    let claims = vec![
        annotation("went to the", 7, 18, AnnotationKind::Structure),
        annotation("the store", 15, 24, AnnotationKind::Vocabulary),
    ];
    let segments = compose(SENTENCE, &repair(SENTENCE, &claims));
    let annotated: Vec<_> = segments.iter().filter_map(Segment::annotation).collect();

    assert_eq!(annotated.len(), 1);
    assert_eq!(annotated[0].text, "went to the");
    assert_eq!(rebuilt(&segments), SENTENCE);
}

#[test]
fn disjoint_claims_all_survive() {
    let claims = vec![
        annotation("have went", 2, 11, AnnotationKind::Grammar),
        annotation("store", 19, 24, AnnotationKind::Vocabulary),
        annotation("yesterday", 25, 34, AnnotationKind::Vocabulary),
    ];
    let segments = compose(SENTENCE, &repair(SENTENCE, &claims));
    let annotated: Vec<_> = segments.iter().filter_map(Segment::annotation).collect();

    assert_eq!(annotated.len(), 3);
    assert_eq!(rebuilt(&segments), SENTENCE);
}

#[test]
fn identities_survive_sorting_for_ui_lookup() {
    // Claims arrive out of reading order; identities must still point at
    // the model's original list positions.
    let claims = vec![
        annotation("yesterday", 25, 34, AnnotationKind::Vocabulary),
        annotation("have went", 2, 11, AnnotationKind::Grammar),
    ];
    let segments = compose(SENTENCE, &repair(SENTENCE, &claims));
    let annotated: Vec<_> = segments.iter().filter_map(Segment::annotation).collect();

    assert_eq!(annotated[0].identity, 1);
    assert_eq!(annotated[0].text, "have went");
    assert_eq!(annotated[1].identity, 0);
    assert_eq!(annotated[1].text, "yesterday");
}

#[test]
fn umlauts_do_not_break_reconciliation() {
    let sentence = "Gestern ging es über die Brücke.";
    let claims = vec![
        annotation("über", 0, 4, AnnotationKind::Grammar),
        annotation("Brücke", 99, 105, AnnotationKind::Vocabulary),
    ];
    let segments = compose(sentence, &repair(sentence, &claims));

    assert_eq!(rebuilt(&segments), sentence);
    let annotated: Vec<_> = segments.iter().filter_map(Segment::annotation).collect();
    assert_eq!(annotated.len(), 2);
    for ann in annotated {
        assert_eq!(&sentence[ann.start..ann.end], ann.text);
    }
}
