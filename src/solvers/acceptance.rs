/// The answer to a credulous or skeptical acceptance query.
///
/// The answer holds the acceptance status, and may hold a certificate
/// (an extension witnessing the status, see the acceptance traits for its exact nature).
///
/// When the search for extensions was stopped by its [EnumerationLimits](crate::solvers::EnumerationLimits)
/// before the status could be established, the answer is [partial](Self::is_partial):
/// the status is then the one obtained from the extensions found so far, and may be wrong.
/// A status witnessed by a certificate found before the limit is reached is never partial,
/// unless the certificate itself may be invalidated by the missing extensions.
///
/// ```
/// # use dungsem::aa::ArgumentSet;
/// # use dungsem::aa::AAFramework;
/// # use dungsem::solvers::{EnumerationLimits, PreferredSemanticsSolver, SkepticalAcceptanceComputer};
/// let mut af = AAFramework::new_with_argument_set(ArgumentSet::new_with_labels(&["a", "b"]));
/// af.add_attack(&"a", &"b").unwrap();
/// let mut solver = PreferredSemanticsSolver::new(&af);
/// let answer = solver.is_skeptically_accepted_with_certificate(af.argument_set().get_argument(&"a").unwrap());
/// assert!(answer.status());
/// assert!(!answer.is_partial());
/// assert!(answer.certificate().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Acceptance<E> {
    status: bool,
    certificate: Option<E>,
    partial: bool,
}

impl<E> Acceptance<E> {
    pub(crate) fn new(status: bool, certificate: Option<E>) -> Self {
        Self {
            status,
            certificate,
            partial: false,
        }
    }

    pub(crate) fn with_partial(mut self, partial: bool) -> Self {
        self.partial |= partial;
        self
    }

    /// Returns `true` iff the argument is accepted.
    pub fn status(&self) -> bool {
        self.status
    }

    /// Returns the certificate, if any.
    pub fn certificate(&self) -> Option<&E> {
        self.certificate.as_ref()
    }

    /// Consumes the answer and returns its certificate, if any.
    pub fn into_certificate(self) -> Option<E> {
        self.certificate
    }

    /// Returns `true` iff the status was not established because of the enumeration limits.
    pub fn is_partial(&self) -> bool {
        self.partial
    }

    /// Translates the certificate, keeping the status and the partial flag.
    pub fn map<F, U>(self, f: F) -> Acceptance<U>
    where
        F: FnOnce(E) -> U,
    {
        Acceptance {
            status: self.status,
            certificate: self.certificate.map(f),
            partial: self.partial,
        }
    }
}
