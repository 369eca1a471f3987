use super::ArgSet;
use serde::Serialize;
use std::fmt::Display;

/// The label given to an argument by a [Labelling].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Label {
    /// The argument is accepted.
    In,
    /// The argument is rejected.
    Out,
    /// The argument is neither accepted nor rejected.
    Undec,
}

impl Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Label::In => write!(f, "IN"),
            Label::Out => write!(f, "OUT"),
            Label::Undec => write!(f, "UNDEC"),
        }
    }
}

/// A total function from the arguments of a framework to [Label] values.
///
/// Labellings are indexed by argument ids.
/// Ids that do not refer to an argument (removed arguments) have no label.
///
/// The arguments labelled [Label::In] form the extension associated with the labelling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labelling {
    labels: Vec<Option<Label>>,
}

impl Labelling {
    pub(crate) fn new(labels: Vec<Option<Label>>) -> Self {
        Self { labels }
    }

    /// Returns the label of the argument with the given id, if such an argument exists.
    pub fn label_of(&self, id: usize) -> Option<Label> {
        self.labels.get(id).copied().flatten()
    }

    /// Returns the set of ids of the arguments with the given label.
    pub fn ids_with(&self, label: Label) -> ArgSet {
        ArgSet::from_ids(
            self.labels.len(),
            self.labels
                .iter()
                .enumerate()
                .filter(|(_, l)| **l == Some(label))
                .map(|(i, _)| i),
        )
    }

    /// Returns the extension of this labelling, that is the set of arguments labelled [Label::In].
    pub fn in_set(&self) -> ArgSet {
        self.ids_with(Label::In)
    }

    /// Returns the number of arguments with the given label.
    pub fn count(&self, label: Label) -> usize {
        self.labels.iter().filter(|l| **l == Some(label)).count()
    }
}
