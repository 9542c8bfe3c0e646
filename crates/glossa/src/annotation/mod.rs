//! Annotation reconciliation: verify, repair, and compose model-supplied
//! highlight spans.
//!
//! The model returns highlight annotations with claimed character offsets
//! that are frequently wrong, stale, or mutually overlapping. This module
//! turns that untrusted input into a renderable segment sequence in two
//! passes:
//!
//! 1. [`repair`] verifies each annotation's offsets against the literal
//!    sentence text, relocating or dropping claims that do not match.
//! 2. [`compose`] partitions the sentence into disjoint plain/annotated
//!    segments, dropping spans that overlap one already placed.
//!
//! Both passes are pure functions over in-memory strings; a sentence's
//! annotations can be reconciled independently of any other sentence.
//!
//! # Example
//!
//! ```
//! use glossa::annotation::{compose, repair, Annotation, AnnotationKind};
//!
//! let sentence = "I have went to the store yesterday.";
//! // The model claimed the wrong offsets for "went".
//! let claimed = vec![Annotation::new(
//!     "went", 99, 103, AnnotationKind::Grammar, "Past participle needed.",
//! )];
//!
//! let repaired = repair(sentence, &claimed);
//! assert_eq!(&sentence[repaired[0].range()], "went");
//!
//! let segments = compose(sentence, &repaired);
//! let rebuilt: String = segments.iter().map(|s| s.text()).collect();
//! assert_eq!(rebuilt, sentence);
//! ```

mod compose;
mod repair;
mod selection;
mod types;

pub use compose::{compose, Segment};
pub use repair::repair;
pub use selection::Selection;
pub use types::{Annotation, AnnotationKind, RepairedAnnotation, Sentence};
