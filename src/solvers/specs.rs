use super::{Acceptance, Enumeration};
use crate::aa::{Argument, LabelType};

/// A trait for solvers able to compute an extension.
pub trait SingleExtensionComputer<T>
where
    T: LabelType,
{
    /// Computes a single extension.
    ///
    /// In case the problem admits no extension, [Option::None] is return.
    /// In case an extension is found, it is returned as a vector of arguments.
    fn compute_one_extension(&mut self) -> Option<Vec<&Argument<T>>>;
}

/// A trait for solvers able to enumerate all the extensions of a semantics.
pub trait ExtensionEnumerator<T>
where
    T: LabelType,
{
    /// Enumerates the extensions.
    ///
    /// Each extension is given as a vector of arguments sorted by their ids,
    /// and the extensions are sorted by the ascending sequences of these ids.
    /// The enumeration may be [partial](Enumeration::is_partial) if the solver was given limits.
    fn enumerate_extensions(&mut self) -> Enumeration<Vec<&Argument<T>>>;
}

/// A trait for solvers able to check the credulous acceptance of an argument.
pub trait CredulousAcceptanceComputer<T>
where
    T: LabelType,
{
    /// Checks the credulous acceptance of an argument.
    ///
    /// If the enumeration limits of the solver stopped the search before the answer was established,
    /// the result is computed from the extensions found so far;
    /// use [is_credulously_accepted_with_certificate](Self::is_credulously_accepted_with_certificate) to detect this case.
    fn is_credulously_accepted(&mut self, arg: &Argument<T>) -> bool;

    /// Checks the credulous acceptance of an argument, and provide a certificate if it is the case.
    ///
    /// The certificate is set to `None` if the result of the test is `false`.
    /// Otherwise, the certificate is provided as a set of arguments.
    /// The exact nature of this certificate depends on underlying semantics.
    /// The answer is [partial](Acceptance::is_partial) if the enumeration limits prevented to establish it.
    fn is_credulously_accepted_with_certificate(
        &mut self,
        arg: &Argument<T>,
    ) -> Acceptance<Vec<&Argument<T>>>;
}

/// A trait for solvers able to check the skeptical acceptance of an argument.
pub trait SkepticalAcceptanceComputer<T>
where
    T: LabelType,
{
    /// Checks the skeptical acceptance of an argument.
    ///
    /// If the enumeration limits of the solver stopped the search before the answer was established,
    /// the result is computed from the extensions found so far;
    /// use [is_skeptically_accepted_with_certificate](Self::is_skeptically_accepted_with_certificate) to detect this case.
    fn is_skeptically_accepted(&mut self, arg: &Argument<T>) -> bool;

    /// Checks the skeptical acceptance of an argument, and provide a certificate if it is not the case.
    ///
    /// The certificate is set to `None` if the result of the test is `true`.
    /// Otherwise, the certificate is provided as a set of arguments.
    /// The exact nature of this certificate depends on underlying semantics.
    /// The answer is [partial](Acceptance::is_partial) if the enumeration limits prevented to establish it.
    fn is_skeptically_accepted_with_certificate(
        &mut self,
        arg: &Argument<T>,
    ) -> Acceptance<Vec<&Argument<T>>>;
}
