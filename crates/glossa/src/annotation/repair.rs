//! Span validation and repair against the literal sentence text.
//!
//! Model-supplied offsets are routinely wrong: miscounted, stale, or
//! computed over a paraphrased sentence. Each annotation is checked and,
//! where possible, relocated so its offsets provably slice the sentence to
//! its claimed text. Annotations that cannot be matched at all are dropped;
//! a bad annotation must never break rendering of the rest of the sentence.

use super::types::{Annotation, RepairedAnnotation};

/// Verify and repair a list of claimed annotations against `sentence`.
///
/// Each annotation is handled independently:
///
/// 1. If the claimed range already slices the sentence to the claimed
///    text, it is accepted as-is.
/// 2. Otherwise every literal occurrence of the text is located
///    (overlapping occurrences included) and the one whose start is
///    numerically closest to the claimed start wins, ties going to the
///    earlier occurrence. The claimed offset is a hint, not ground truth.
/// 3. If the text occurs nowhere, the search is retried with leading and
///    trailing whitespace stripped, updating the annotation's text on
///    success.
/// 4. Annotations still unmatched are dropped silently.
///
/// The result is sorted ascending by corrected start offset, ties by
/// identity. Input order survives only through the `identity` field.
pub fn repair(sentence: &str, annotations: &[Annotation]) -> Vec<RepairedAnnotation> {
    let mut repaired: Vec<RepairedAnnotation> = annotations
        .iter()
        .enumerate()
        .filter_map(|(identity, ann)| repair_one(sentence, identity, ann))
        .collect();

    repaired.sort_by_key(|r| (r.start, r.identity));
    repaired
}

/// Repair a single annotation, or drop it.
fn repair_one(sentence: &str, identity: usize, ann: &Annotation) -> Option<RepairedAnnotation> {
    // An empty claim would produce a zero-width span.
    if ann.text.is_empty() {
        return None;
    }

    // Fast path: the claimed range already slices to the claimed text.
    // `get` handles out-of-bounds and mid-character offsets without panicking.
    if sentence.get(ann.start..ann.end) == Some(ann.text.as_str()) {
        return Some(build(identity, ann, &ann.text, ann.start));
    }

    // The offsets are wrong; find the text ourselves, using the claimed
    // start as a proximity hint.
    if let Some(start) = closest_occurrence(sentence, &ann.text, ann.start) {
        return Some(build(identity, ann, &ann.text, start));
    }

    // The model may have included surrounding whitespace that is not in
    // the sentence.
    let trimmed = ann.text.trim();
    if trimmed.is_empty() || trimmed == ann.text {
        return None;
    }
    closest_occurrence(sentence, trimmed, ann.start)
        .map(|start| build(identity, ann, trimmed, start))
}

fn build(identity: usize, ann: &Annotation, text: &str, start: usize) -> RepairedAnnotation {
    RepairedAnnotation {
        identity,
        text: text.to_string(),
        start,
        end: start + text.len(),
        kind: ann.kind,
        explanation: ann.explanation.clone(),
        examples: ann.examples.clone(),
    }
}

/// Find the occurrence of `needle` in `haystack` whose start is closest to
/// `hint`, scanning all occurrences including overlapping ones. Ties are
/// resolved toward the earlier occurrence.
fn closest_occurrence(haystack: &str, needle: &str, hint: usize) -> Option<usize> {
    let mut best: Option<usize> = None;
    let mut from = 0;

    while let Some(rel) = haystack[from..].find(needle) {
        let pos = from + rel;
        if best.is_none_or(|b| pos.abs_diff(hint) < b.abs_diff(hint)) {
            best = Some(pos);
        }
        // Advance one character past the match start so overlapping
        // occurrences are still seen.
        from = pos + haystack[pos..].chars().next().map_or(1, char::len_utf8);
    }

    best
}
