use super::{
    utils, Acceptance, CredulousAcceptanceComputer, Enumeration, EnumerationLimits,
    ExtensionEnumerator, SelfAttackPolicy, SemanticsEngine, SingleExtensionComputer,
    SkepticalAcceptanceComputer,
};
use crate::aa::{AAFramework, Argument, LabelType};

/// A solver for the preferred semantics.
///
/// The preferred extensions are the complete extensions that are maximal with respect to set inclusion.
/// Each framework admits at least one of them.
///
/// An argument is credulously accepted under the preferred semantics iff it is credulously accepted under the complete one;
/// the certificate is a preferred extension containing the argument.
/// When an argument is not skeptically accepted, the certificate is a preferred extension that does not contain it.
///
/// When the enumeration limits stop the search, the extensions found so far are only maximal among the complete extensions found,
/// and may be strictly included in a missing one.
/// Thus, any acceptance answer computed from a partial enumeration is [partial](crate::solvers::Acceptance::is_partial).
pub struct PreferredSemanticsSolver<'a, T>
where
    T: LabelType,
{
    engine: SemanticsEngine<'a, T>,
    limits: EnumerationLimits,
}

impl<'a, T> PreferredSemanticsSolver<'a, T>
where
    T: LabelType,
{
    /// Builds a new solver for the preferred semantics, using the classical self-attack policy and no enumeration limits.
    pub fn new(af: &'a AAFramework<T>) -> Self {
        Self::new_with_policy(af, SelfAttackPolicy::default())
    }

    /// Builds a new solver for the preferred semantics, using the given self-attack policy.
    pub fn new_with_policy(af: &'a AAFramework<T>, policy: SelfAttackPolicy) -> Self {
        Self {
            engine: SemanticsEngine::new(af, policy),
            limits: EnumerationLimits::default(),
        }
    }

    /// Sets the limits applied to the enumeration of the complete extensions the preferred ones are selected from.
    pub fn set_enumeration_limits(&mut self, limits: EnumerationLimits) {
        self.limits = limits;
    }
}

impl<T> SingleExtensionComputer<T> for PreferredSemanticsSolver<'_, T>
where
    T: LabelType,
{
    fn compute_one_extension(&mut self) -> Option<Vec<&Argument<T>>> {
        self.engine
            .preferred_extensions(self.limits)
            .iter()
            .next()
            .map(|ext| self.engine.arguments_of(ext))
    }
}

impl<T> ExtensionEnumerator<T> for PreferredSemanticsSolver<'_, T>
where
    T: LabelType,
{
    fn enumerate_extensions(&mut self) -> Enumeration<Vec<&Argument<T>>> {
        utils::enumeration_to_arguments(&self.engine, self.engine.preferred_extensions(self.limits))
    }
}

impl<T> CredulousAcceptanceComputer<T> for PreferredSemanticsSolver<'_, T>
where
    T: LabelType,
{
    fn is_credulously_accepted(&mut self, arg: &Argument<T>) -> bool {
        self.is_credulously_accepted_with_certificate(arg).status()
    }

    fn is_credulously_accepted_with_certificate(
        &mut self,
        arg: &Argument<T>,
    ) -> Acceptance<Vec<&Argument<T>>> {
        let extensions = self.engine.preferred_extensions(self.limits);
        utils::credulous_acceptance(&self.engine, &extensions, arg)
            .with_partial(extensions.is_partial())
    }
}

impl<T> SkepticalAcceptanceComputer<T> for PreferredSemanticsSolver<'_, T>
where
    T: LabelType,
{
    fn is_skeptically_accepted(&mut self, arg: &Argument<T>) -> bool {
        self.is_skeptically_accepted_with_certificate(arg).status()
    }

    fn is_skeptically_accepted_with_certificate(
        &mut self,
        arg: &Argument<T>,
    ) -> Acceptance<Vec<&Argument<T>>> {
        let extensions = self.engine.preferred_extensions(self.limits);
        utils::skeptical_acceptance(&self.engine, &extensions, arg)
            .with_partial(extensions.is_partial())
    }
}
