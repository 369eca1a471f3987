use super::{
    utils, Acceptance, CredulousAcceptanceComputer, Enumeration, EnumerationLimits,
    ExtensionEnumerator, SelfAttackPolicy, SemanticsEngine, SingleExtensionComputer,
    SkepticalAcceptanceComputer,
};
use crate::aa::{AAFramework, Argument, LabelType};

/// A solver for the complete semantics.
///
/// A complete extension is a conflict-free set of arguments which is a fixpoint of the characteristic function:
/// it contains exactly the arguments it defends.
/// The complete extensions are enumerated by a backtracking search over the labellings of the framework,
/// starting from the grounded labelling (see [SemanticsEngine]).
///
/// A special case of complete extension is the grounded extension, which is the minimal one.
/// Thus, computing one extension and checking the skeptical acceptance of an argument resume to the (polynomial time) computation of the grounded extension.
/// The certificate provided in case an argument is credulously accepted is a complete extension containing the argument;
/// in case it is not skeptically accepted, the certificate is the grounded extension.
pub struct CompleteSemanticsSolver<'a, T>
where
    T: LabelType,
{
    engine: SemanticsEngine<'a, T>,
    limits: EnumerationLimits,
}

impl<'a, T> CompleteSemanticsSolver<'a, T>
where
    T: LabelType,
{
    /// Builds a new solver for the complete semantics, using the classical self-attack policy and no enumeration limits.
    ///
    /// # Example
    ///
    /// ```
    /// # use dungsem::aa::{AAFramework, Argument, LabelType};
    /// # use dungsem::solvers::{CredulousAcceptanceComputer, CompleteSemanticsSolver};
    /// fn check_credulous_acceptance<T>(af: &AAFramework<T>, arg: &Argument<T>) -> bool where T: LabelType {
    ///     let mut solver = CompleteSemanticsSolver::new(af);
    ///     solver.is_credulously_accepted(arg)
    /// }
    /// # let mut af = AAFramework::default();
    /// # af.add_argument("a").unwrap();
    /// # assert!(check_credulous_acceptance::<&str>(&af, af.argument_set().get_argument(&"a").unwrap()));
    /// ```
    pub fn new(af: &'a AAFramework<T>) -> Self {
        Self::new_with_policy(af, SelfAttackPolicy::default())
    }

    /// Builds a new solver for the complete semantics, using the given self-attack policy.
    pub fn new_with_policy(af: &'a AAFramework<T>, policy: SelfAttackPolicy) -> Self {
        Self {
            engine: SemanticsEngine::new(af, policy),
            limits: EnumerationLimits::default(),
        }
    }

    /// Sets the limits applied to the enumeration of the complete extensions.
    pub fn set_enumeration_limits(&mut self, limits: EnumerationLimits) {
        self.limits = limits;
    }
}

impl<T> SingleExtensionComputer<T> for CompleteSemanticsSolver<'_, T>
where
    T: LabelType,
{
    fn compute_one_extension(&mut self) -> Option<Vec<&Argument<T>>> {
        Some(self.engine.arguments_of(&self.engine.grounded_extension()))
    }
}

impl<T> ExtensionEnumerator<T> for CompleteSemanticsSolver<'_, T>
where
    T: LabelType,
{
    fn enumerate_extensions(&mut self) -> Enumeration<Vec<&Argument<T>>> {
        utils::enumeration_to_arguments(&self.engine, self.engine.complete_extensions(self.limits))
    }
}

impl<T> CredulousAcceptanceComputer<T> for CompleteSemanticsSolver<'_, T>
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
        let extensions = self.engine.complete_extensions(self.limits);
        utils::credulous_acceptance(&self.engine, &extensions, arg)
    }
}

impl<T> SkepticalAcceptanceComputer<T> for CompleteSemanticsSolver<'_, T>
where
    T: LabelType,
{
    fn is_skeptically_accepted(&mut self, arg: &Argument<T>) -> bool {
        self.engine.grounded_extension().contains(arg.id())
    }

    fn is_skeptically_accepted_with_certificate(
        &mut self,
        arg: &Argument<T>,
    ) -> Acceptance<Vec<&Argument<T>>> {
        let grounded = self.engine.grounded_extension();
        if grounded.contains(arg.id()) {
            Acceptance::new(true, None)
        } else {
            Acceptance::new(false, Some(self.engine.arguments_of(&grounded)))
        }
    }
}
