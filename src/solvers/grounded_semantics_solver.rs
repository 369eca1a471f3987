use super::{
    Acceptance, CredulousAcceptanceComputer, Enumeration, ExtensionEnumerator, SelfAttackPolicy,
    SemanticsEngine, SingleExtensionComputer, SkepticalAcceptanceComputer,
};
use crate::aa::{AAFramework, Argument, LabelType, Semantics};

/// A solver used to solve queries for the grounded semantics.
///
/// The (unique) grounded extension is the minimal complete extension (see [CompleteSemanticsSolver](crate::solvers::CompleteSemanticsSolver) for more information).
/// It is computed in time polynomial in the size of the framework.
///
/// This solver implements [SingleExtensionComputer], [ExtensionEnumerator] and both [CredulousAcceptanceComputer] and [SkepticalAcceptanceComputer] interfaces.
/// In these four cases, the computation resumes to the (polynomial time) computation of the grounded extension.
///
/// When a certificate is provided, the certificate is the grounded extension itself.
pub struct GroundedSemanticsSolver<'a, T>
where
    T: LabelType,
{
    engine: SemanticsEngine<'a, T>,
}

impl<'a, T> GroundedSemanticsSolver<'a, T>
where
    T: LabelType,
{
    /// Builds a new solver dedicated to the grounded semantics, using the classical self-attack policy.
    ///
    /// # Example
    ///
    /// ```
    /// # use dungsem::aa::{AAFramework, LabelType};
    /// # use dungsem::solvers::{SingleExtensionComputer, GroundedSemanticsSolver};
    /// fn search_one_extension<T>(af: &AAFramework<T>) where T: LabelType {
    ///     let mut solver = GroundedSemanticsSolver::new(af);
    ///     let ext = solver.compute_one_extension().unwrap();
    ///     println!("found the grounded extension: {:?}", ext);
    /// }
    /// # search_one_extension::<usize>(&AAFramework::default());
    /// ```
    pub fn new(af: &'a AAFramework<T>) -> Self {
        Self::new_with_policy(af, SelfAttackPolicy::default())
    }

    /// Builds a new solver dedicated to the grounded semantics, using the given self-attack policy.
    pub fn new_with_policy(af: &'a AAFramework<T>, policy: SelfAttackPolicy) -> Self {
        Self {
            engine: SemanticsEngine::new(af, policy),
        }
    }

    fn grounded_extension(&self) -> Vec<&'a Argument<T>> {
        self.engine
            .arguments_of(&self.engine.grounded_extension())
    }
}

impl<T> SingleExtensionComputer<T> for GroundedSemanticsSolver<'_, T>
where
    T: LabelType,
{
    fn compute_one_extension(&mut self) -> Option<Vec<&Argument<T>>> {
        Some(self.grounded_extension())
    }
}

impl<T> ExtensionEnumerator<T> for GroundedSemanticsSolver<'_, T>
where
    T: LabelType,
{
    fn enumerate_extensions(&mut self) -> Enumeration<Vec<&Argument<T>>> {
        Enumeration::new(Semantics::GR, vec![self.grounded_extension()], false)
    }
}

impl<T> CredulousAcceptanceComputer<T> for GroundedSemanticsSolver<'_, T>
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
        let ext = self.grounded_extension();
        if ext.contains(&arg) {
            Acceptance::new(true, Some(ext))
        } else {
            Acceptance::new(false, None)
        }
    }
}

impl<T> SkepticalAcceptanceComputer<T> for GroundedSemanticsSolver<'_, T>
where
    T: LabelType,
{
    fn is_skeptically_accepted(&mut self, arg: &Argument<T>) -> bool {
        self.grounded_extension().contains(&arg)
    }

    fn is_skeptically_accepted_with_certificate(
        &mut self,
        arg: &Argument<T>,
    ) -> Acceptance<Vec<&Argument<T>>> {
        let ext = self.grounded_extension();
        if ext.contains(&arg) {
            Acceptance::new(true, None)
        } else {
            Acceptance::new(false, Some(ext))
        }
    }
}
