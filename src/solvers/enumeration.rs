use crate::aa::Semantics;

/// Limits applied to the enumeration of extensions.
///
/// Each step of the search for labellings (assigning a label to an argument) counts as a candidate.
/// When the maximal number of candidates is exceeded, the search stops
/// and the extensions found so far are returned as a [partial](Enumeration::is_partial) enumeration.
///
/// ```
/// # use dungsem::solvers::EnumerationLimits;
/// assert_eq!(None, EnumerationLimits::default().max_candidates());
/// assert_eq!(Some(10), EnumerationLimits::with_max_candidates(10).max_candidates());
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct EnumerationLimits {
    max_candidates: Option<usize>,
}

impl EnumerationLimits {
    /// Builds limits with no bound on the number of candidates.
    pub fn unlimited() -> Self {
        Self::default()
    }

    /// Builds limits stopping the search after the given number of candidates.
    pub fn with_max_candidates(max_candidates: usize) -> Self {
        Self {
            max_candidates: Some(max_candidates),
        }
    }

    /// Returns the maximal number of candidates, if any.
    pub fn max_candidates(&self) -> Option<usize> {
        self.max_candidates
    }
}

/// The extensions computed for a semantics.
///
/// The extensions are sorted by the ascending sequences of their argument ids,
/// making enumerations reproducible.
///
/// An enumeration is partial when the search was stopped by its [EnumerationLimits];
/// in this case, the extensions it contains are correct but some may be missing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enumeration<E> {
    semantics: Semantics,
    extensions: Vec<E>,
    partial: bool,
}

impl<E> Enumeration<E> {
    pub(crate) fn new(semantics: Semantics, extensions: Vec<E>, partial: bool) -> Self {
        Self {
            semantics,
            extensions,
            partial,
        }
    }

    /// Returns the semantics that produced these extensions.
    pub fn semantics(&self) -> Semantics {
        self.semantics
    }

    /// Returns the extensions.
    pub fn extensions(&self) -> &[E] {
        &self.extensions
    }

    /// Consumes the enumeration and returns its extensions.
    pub fn into_extensions(self) -> Vec<E> {
        self.extensions
    }

    /// Returns `true` iff the enumeration was stopped before its end.
    pub fn is_partial(&self) -> bool {
        self.partial
    }

    /// Returns the number of extensions.
    pub fn len(&self) -> usize {
        self.extensions.len()
    }

    /// Returns `true` iff no extension was found.
    pub fn is_empty(&self) -> bool {
        self.extensions.is_empty()
    }

    /// Iterates over the extensions.
    pub fn iter(&self) -> impl Iterator<Item = &E> + '_ {
        self.extensions.iter()
    }

    /// Translates the extensions, keeping the semantics and the partial flag.
    pub fn map<F, U>(self, f: F) -> Enumeration<U>
    where
        F: FnMut(E) -> U,
    {
        Enumeration {
            semantics: self.semantics,
            extensions: self.extensions.into_iter().map(f).collect(),
            partial: self.partial,
        }
    }

    /// Translates the extensions by reference.
    pub fn map_ref<F, U>(&self, f: F) -> Enumeration<U>
    where
        F: FnMut(&E) -> U,
    {
        Enumeration {
            semantics: self.semantics,
            extensions: self.extensions.iter().map(f).collect(),
            partial: self.partial,
        }
    }
}
