//! Expansion state for one rendered sentence.

/// Which annotation, if any, is currently expanded in a sentence view.
///
/// At most one annotation is expanded at a time; modeling the state as a
/// single enum makes that an enforced invariant rather than a convention
/// spread over per-annotation flags. The state is keyed by annotation
/// identity so it survives the repaired list being re-sorted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    /// No annotation expanded.
    #[default]
    Collapsed,
    /// Exactly one annotation expanded, keyed by identity.
    Expanded(usize),
}

impl Selection {
    /// Create a collapsed selection.
    pub fn new() -> Self {
        Selection::Collapsed
    }

    /// Toggle the annotation with the given identity.
    ///
    /// Toggling the expanded annotation collapses the view; toggling any
    /// other annotation switches directly to it, with no intermediate
    /// collapsed state.
    pub fn toggle(&mut self, identity: usize) {
        *self = match *self {
            Selection::Expanded(current) if current == identity => Selection::Collapsed,
            _ => Selection::Expanded(identity),
        };
    }

    /// Collapse regardless of current state. Called when a new result
    /// replaces the sentence list.
    pub fn reset(&mut self) {
        *self = Selection::Collapsed;
    }

    /// Identity of the expanded annotation, if any.
    pub fn expanded(&self) -> Option<usize> {
        match self {
            Selection::Collapsed => None,
            Selection::Expanded(identity) => Some(*identity),
        }
    }

    /// Check whether the annotation with the given identity is expanded.
    pub fn is_expanded(&self, identity: usize) -> bool {
        self.expanded() == Some(identity)
    }
}
