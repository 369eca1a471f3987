use crate::{solvers::Enumeration, utils::ArgSet};
use serde::Serialize;

/// The relationships between the extensions of the semantics of a framework.
///
/// On a fully enumerated framework, the first three properties always hold;
/// they are computed rather than assumed so that they can be checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SemanticsRelationships {
    /// The grounded extension is included in every complete extension.
    pub grounded_in_all_complete: bool,
    /// Each complete extension is included in a preferred extension.
    pub complete_in_some_preferred: bool,
    /// Each stable extension is a preferred extension.
    pub stable_are_preferred: bool,
    /// The framework has at least one stable extension.
    pub has_stable: bool,
    /// The number of complete extensions.
    pub n_complete: usize,
    /// The number of preferred extensions.
    pub n_preferred: usize,
    /// The number of stable extensions.
    pub n_stable: usize,
    /// Whether one of the enumerations was stopped by its limits.
    pub partial: bool,
}

impl SemanticsRelationships {
    /// Computes the relationships from the extensions of the four semantics.
    pub fn from_extensions(
        grounded: &ArgSet,
        complete: &Enumeration<ArgSet>,
        preferred: &Enumeration<ArgSet>,
        stable: &Enumeration<ArgSet>,
    ) -> Self {
        Self {
            grounded_in_all_complete: complete.iter().all(|c| grounded.is_subset(c)),
            complete_in_some_preferred: complete
                .iter()
                .all(|c| preferred.iter().any(|p| c.is_subset(p))),
            stable_are_preferred: stable
                .iter()
                .all(|s| preferred.extensions().contains(s)),
            has_stable: !stable.is_empty(),
            n_complete: complete.len(),
            n_preferred: preferred.len(),
            n_stable: stable.len(),
            partial: complete.is_partial() || preferred.is_partial() || stable.is_partial(),
        }
    }
}
