//! Word-level diff between original and corrected text.
//!
//! Thin wrapper over the `similar` crate. The diff algorithm itself is an
//! external collaborator; this module only fixes the output shape the
//! renderers consume.

use serde::{Deserialize, Serialize};
use similar::{ChangeTag, TextDiff};

/// One run of a word-level diff.
///
/// `added` and `removed` are mutually exclusive; both false means the run
/// is unchanged between the two texts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffPart {
    /// The run's text, including any word separators.
    pub value: String,
    /// Present only in the corrected text.
    #[serde(default)]
    pub added: bool,
    /// Present only in the original text.
    #[serde(default)]
    pub removed: bool,
}

/// Diff two texts word by word.
///
/// Consecutive tokens with the same change tag are merged, so consumers
/// see word groups rather than individual tokens. Concatenating the
/// non-added parts reproduces `original`; the non-removed parts reproduce
/// `corrected`.
pub fn diff_words(original: &str, corrected: &str) -> Vec<DiffPart> {
    let diff = TextDiff::from_words(original, corrected);
    let mut parts: Vec<DiffPart> = Vec::new();

    for change in diff.iter_all_changes() {
        let (added, removed) = match change.tag() {
            ChangeTag::Equal => (false, false),
            ChangeTag::Insert => (true, false),
            ChangeTag::Delete => (false, true),
        };

        match parts.last_mut() {
            Some(last) if last.added == added && last.removed == removed => {
                last.value.push_str(change.value());
            }
            _ => parts.push(DiffPart {
                value: change.value().to_string(),
                added,
                removed,
            }),
        }
    }

    parts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn original_of(parts: &[DiffPart]) -> String {
        parts
            .iter()
            .filter(|p| !p.added)
            .map(|p| p.value.as_str())
            .collect()
    }

    fn corrected_of(parts: &[DiffPart]) -> String {
        parts
            .iter()
            .filter(|p| !p.removed)
            .map(|p| p.value.as_str())
            .collect()
    }

    #[test]
    fn test_identical_texts_single_equal_part() {
        let parts = diff_words("same text here", "same text here");
        assert_eq!(parts.len(), 1);
        assert!(!parts[0].added && !parts[0].removed);
        assert_eq!(parts[0].value, "same text here");
    }

    #[test]
    fn test_word_replacement() {
        let parts = diff_words("I have went home", "I have gone home");

        assert!(parts.iter().any(|p| p.removed && p.value.contains("went")));
        assert!(parts.iter().any(|p| p.added && p.value.contains("gone")));
    }

    #[test]
    fn test_reconstruction() {
        let original = "Ich habe gestern in den Laden gegangen.";
        let corrected = "Ich bin gestern in den Laden gegangen.";
        let parts = diff_words(original, corrected);

        assert_eq!(original_of(&parts), original);
        assert_eq!(corrected_of(&parts), corrected);
    }

    #[test]
    fn test_empty_original() {
        let parts = diff_words("", "all new");
        assert_eq!(parts.len(), 1);
        assert!(parts[0].added);
        assert_eq!(corrected_of(&parts), "all new");
    }

    #[test]
    fn test_added_and_removed_exclusive() {
        let parts = diff_words("one two three", "one 2 three four");
        assert!(parts.iter().all(|p| !(p.added && p.removed)));
    }
}
