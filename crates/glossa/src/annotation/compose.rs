//! Disjoint span composition for rendering.
//!
//! Takes repaired annotations and partitions the sentence into an ordered
//! sequence of plain and annotated segments. Overlapping claims are
//! resolved greedily: the earlier-starting span (then the earlier identity)
//! wins and later overlapping claims are dropped, which matches the model
//! listing annotations roughly in reading order.

use serde::{Deserialize, Serialize};

use super::types::RepairedAnnotation;

/// A contiguous piece of a rendered sentence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "segment", rename_all = "lowercase")]
pub enum Segment {
    /// An unannotated run of sentence text.
    Plain { text: String },
    /// A highlighted run carrying its annotation.
    Annotated {
        text: String,
        annotation: RepairedAnnotation,
    },
}

impl Segment {
    /// The sentence text this segment covers.
    pub fn text(&self) -> &str {
        match self {
            Segment::Plain { text } => text,
            Segment::Annotated { text, .. } => text,
        }
    }

    /// The annotation carried by this segment, if any.
    pub fn annotation(&self) -> Option<&RepairedAnnotation> {
        match self {
            Segment::Plain { .. } => None,
            Segment::Annotated { annotation, .. } => Some(annotation),
        }
    }
}

/// Partition `sentence` into plain and annotated segments.
///
/// Guarantees: the concatenated segment text equals `sentence` exactly, no
/// two annotated segments overlap, and no empty plain segment is emitted.
/// Spans that cannot slice the sentence are skipped rather than panicked
/// on, so the function is total over arbitrary input.
pub fn compose(sentence: &str, repaired: &[RepairedAnnotation]) -> Vec<Segment> {
    let mut sorted: Vec<&RepairedAnnotation> = repaired.iter().collect();
    sorted.sort_by_key(|r| (r.start, r.identity));

    let mut segments = Vec::new();
    let mut cursor = 0;

    for ann in sorted {
        // Overlaps a span already placed; the first claim in sort order wins.
        if ann.start < cursor {
            continue;
        }
        // Spans must slice the sentence on character boundaries.
        if ann.start >= ann.end
            || ann.end > sentence.len()
            || !sentence.is_char_boundary(ann.start)
            || !sentence.is_char_boundary(ann.end)
        {
            continue;
        }

        if ann.start > cursor {
            segments.push(Segment::Plain {
                text: sentence[cursor..ann.start].to_string(),
            });
        }
        segments.push(Segment::Annotated {
            text: sentence[ann.start..ann.end].to_string(),
            annotation: ann.clone(),
        });
        cursor = ann.end;
    }

    if cursor < sentence.len() {
        segments.push(Segment::Plain {
            text: sentence[cursor..].to_string(),
        });
    }

    segments
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotation::{repair, Annotation, AnnotationKind};

    const SENTENCE: &str = "I have went to the store yesterday.";

    fn repaired(identity: usize, text: &str, start: usize) -> RepairedAnnotation {
        RepairedAnnotation {
            identity,
            text: text.to_string(),
            start,
            end: start + text.len(),
            kind: AnnotationKind::Grammar,
            explanation: "test".to_string(),
            examples: Vec::new(),
        }
    }

    fn concat(segments: &[Segment]) -> String {
        segments.iter().map(Segment::text).collect()
    }

    #[test]
    fn test_no_annotations_single_plain_segment() {
        let segments = compose(SENTENCE, &[]);
        assert_eq!(segments, vec![Segment::Plain { text: SENTENCE.to_string() }]);
    }

    #[test]
    fn test_annotation_at_start() {
        let segments = compose(SENTENCE, &[repaired(0, "I have went", 0)]);

        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].text(), "I have went");
        assert!(segments[0].annotation().is_some());
        assert_eq!(segments[1].text(), " to the store yesterday.");
        assert_eq!(concat(&segments), SENTENCE);
    }

    #[test]
    fn test_annotation_in_middle() {
        let segments = compose(SENTENCE, &[repaired(0, "store", 19)]);

        assert_eq!(segments.len(), 3);
        assert_eq!(segments[0].text(), "I have went to the ");
        assert_eq!(segments[1].text(), "store");
        assert_eq!(segments[2].text(), " yesterday.");
        assert_eq!(concat(&segments), SENTENCE);
    }

    #[test]
    fn test_overlapping_spans_first_wins() {
        let spans = vec![repaired(0, "have went", 2), repaired(1, "went to", 7)];
        let segments = compose(SENTENCE, &spans);

        let annotated: Vec<_> = segments.iter().filter_map(Segment::annotation).collect();
        assert_eq!(annotated.len(), 1);
        assert_eq!(annotated[0].identity, 0);
        assert_eq!(concat(&segments), SENTENCE);
    }

    #[test]
    fn test_identical_ranges_earlier_identity_wins() {
        let spans = vec![repaired(1, "have", 2), repaired(0, "have", 2)];
        let segments = compose(SENTENCE, &spans);

        let annotated: Vec<_> = segments.iter().filter_map(Segment::annotation).collect();
        assert_eq!(annotated.len(), 1);
        assert_eq!(annotated[0].identity, 0);
    }

    #[test]
    fn test_adjacent_spans_no_gap_segment() {
        let spans = vec![repaired(0, "have ", 2), repaired(1, "went", 7)];
        let segments = compose(SENTENCE, &spans);

        assert_eq!(segments[0].text(), "I ");
        assert_eq!(segments[1].text(), "have ");
        assert_eq!(segments[2].text(), "went");
        assert!(segments[1].annotation().is_some());
        assert!(segments[2].annotation().is_some());
        assert_eq!(concat(&segments), SENTENCE);
    }

    #[test]
    fn test_annotation_covering_whole_sentence() {
        let segments = compose(SENTENCE, &[repaired(0, SENTENCE, 0)]);
        assert_eq!(segments.len(), 1);
        assert!(segments[0].annotation().is_some());
    }

    #[test]
    fn test_out_of_bounds_span_skipped() {
        let bad = RepairedAnnotation {
            identity: 0,
            text: "tail".to_string(),
            start: 30,
            end: 99,
            kind: AnnotationKind::Vocabulary,
            explanation: String::new(),
            examples: Vec::new(),
        };
        let segments = compose(SENTENCE, &[bad]);
        assert_eq!(segments, vec![Segment::Plain { text: SENTENCE.to_string() }]);
    }

    #[test]
    fn test_zero_width_span_skipped() {
        let mut zero = repaired(0, "", 5);
        zero.end = zero.start;
        let segments = compose(SENTENCE, &[zero]);
        assert_eq!(concat(&segments), SENTENCE);
        assert!(segments.iter().all(|s| s.annotation().is_none()));
    }

    #[test]
    fn test_empty_sentence() {
        assert!(compose("", &[]).is_empty());
    }

    #[test]
    fn test_repair_then_compose_grammar_annotation() {
        let anns = vec![Annotation::new(
            "have went",
            2,
            11,
            AnnotationKind::Grammar,
            "Use 'went' alone or 'have gone'.",
        )];
        let segments = compose(SENTENCE, &repair(SENTENCE, &anns));

        assert_eq!(segments.len(), 3);
        assert_eq!(segments[0].text(), "I ");
        assert_eq!(segments[1].text(), "have went");
        assert!(segments[1].annotation().is_some());
        assert_eq!(segments[2].text(), " to the store yesterday.");
    }
}
