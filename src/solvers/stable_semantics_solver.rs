use super::{
    utils, Acceptance, CredulousAcceptanceComputer, Enumeration, EnumerationLimits,
    ExtensionEnumerator, SelfAttackPolicy, SemanticsEngine, SingleExtensionComputer,
    SkepticalAcceptanceComputer,
};
use crate::aa::{AAFramework, Argument, LabelType};

/// A solver for the stable semantics.
///
/// A stable extension is a conflict-free set of arguments attacking every argument outside of it;
/// in terms of labellings, it is a complete labelling with no undecided argument.
/// Frameworks may admit no stable extension, in which case no argument is credulously accepted
/// and every argument is (vacuously) skeptically accepted.
pub struct StableSemanticsSolver<'a, T>
where
    T: LabelType,
{
    engine: SemanticsEngine<'a, T>,
    limits: EnumerationLimits,
}

impl<'a, T> StableSemanticsSolver<'a, T>
where
    T: LabelType,
{
    /// Builds a new solver for the stable semantics, using the classical self-attack policy and no enumeration limits.
    pub fn new(af: &'a AAFramework<T>) -> Self {
        Self::new_with_policy(af, SelfAttackPolicy::default())
    }

    /// Builds a new solver for the stable semantics, using the given self-attack policy.
    pub fn new_with_policy(af: &'a AAFramework<T>, policy: SelfAttackPolicy) -> Self {
        Self {
            engine: SemanticsEngine::new(af, policy),
            limits: EnumerationLimits::default(),
        }
    }

    /// Sets the limits applied to the enumeration of the stable extensions.
    pub fn set_enumeration_limits(&mut self, limits: EnumerationLimits) {
        self.limits = limits;
    }
}

impl<T> SingleExtensionComputer<T> for StableSemanticsSolver<'_, T>
where
    T: LabelType,
{
    fn compute_one_extension(&mut self) -> Option<Vec<&Argument<T>>> {
        self.engine
            .stable_extensions(self.limits)
            .iter()
            .next()
            .map(|ext| self.engine.arguments_of(ext))
    }
}

impl<T> ExtensionEnumerator<T> for StableSemanticsSolver<'_, T>
where
    T: LabelType,
{
    fn enumerate_extensions(&mut self) -> Enumeration<Vec<&Argument<T>>> {
        utils::enumeration_to_arguments(&self.engine, self.engine.stable_extensions(self.limits))
    }
}

impl<T> CredulousAcceptanceComputer<T> for StableSemanticsSolver<'_, T>
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
        let extensions = self.engine.stable_extensions(self.limits);
        utils::credulous_acceptance(&self.engine, &extensions, arg)
    }
}

impl<T> SkepticalAcceptanceComputer<T> for StableSemanticsSolver<'_, T>
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
        let extensions = self.engine.stable_extensions(self.limits);
        utils::skeptical_acceptance(&self.engine, &extensions, arg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::{InstanceReader, TgfReader};

    macro_rules! test_for_policy {
        ($policy:expr, $suffix:literal) => {
            paste::item! {
    #[test]
    fn [< test_stable_ $suffix >] () {
        let instance = "a0\na1\na2\n#\na0 a1\na1 a0\na1 a2\n";
        let af = TgfReader::default().read(&mut instance.as_bytes()).unwrap();
        let mut solver = StableSemanticsSolver::new_with_policy(&af, $policy);
        let extensions = solver.enumerate_extensions();
        assert_eq!(2, extensions.len());
        let a2 = af.argument_set().get_argument(&"a2".to_string()).unwrap();
        assert!(solver.is_credulously_accepted(a2));
        assert!(!solver.is_skeptically_accepted(a2));
        assert_eq!(
            vec!["a0", "a2"],
            solver
                .compute_one_extension()
                .unwrap()
                .iter()
                .map(|a| a.label().as_str())
                .collect::<Vec<&str>>()
        );
    }

    #[test]
    fn [< test_no_stable_ $suffix >] () {
        let instance = "a0\na1\na2\n#\na0 a1\na1 a2\na2 a0\n";
        let af = TgfReader::default().read(&mut instance.as_bytes()).unwrap();
        let mut solver = StableSemanticsSolver::new_with_policy(&af, $policy);
        assert!(solver.compute_one_extension().is_none());
        assert!(solver.enumerate_extensions().is_empty());
        let a0 = af.argument_set().get_argument(&"a0".to_string()).unwrap();
        let credulous = solver.is_credulously_accepted_with_certificate(a0);
        assert!(!credulous.status());
        assert!(credulous.certificate().is_none());
        let skeptical = solver.is_skeptically_accepted_with_certificate(a0);
        assert!(skeptical.status());
        assert!(skeptical.certificate().is_none());
        assert!(!skeptical.is_partial());
    }
            }
        };
    }

    test_for_policy!(SelfAttackPolicy::Classical, "classical");
    test_for_policy!(SelfAttackPolicy::Enhanced, "enhanced");

    #[test]
    fn test_capped_acceptance() {
        let instance = "a0\na1\na2\na3\n#\na0 a1\na1 a0\na2 a3\na3 a2\n";
        let af = TgfReader::default().read(&mut instance.as_bytes()).unwrap();
        let mut solver = StableSemanticsSolver::new(&af);
        solver.set_enumeration_limits(EnumerationLimits::with_max_candidates(1));
        assert!(solver.enumerate_extensions().len() < 4);
        for arg in af.argument_set().iter() {
            let credulous = solver.is_credulously_accepted_with_certificate(arg);
            assert_eq!(credulous.status(), !credulous.is_partial());
            let skeptical = solver.is_skeptically_accepted_with_certificate(arg);
            assert_eq!(skeptical.status(), skeptical.is_partial());
        }
    }

    #[test]
    fn test_self_attacker_prevents_stability() {
        let instance = "x\ny\n#\nx x\nx y\n";
        let af = TgfReader::default().read(&mut instance.as_bytes()).unwrap();
        for policy in [SelfAttackPolicy::Classical, SelfAttackPolicy::Enhanced] {
            let mut solver = StableSemanticsSolver::new_with_policy(&af, policy);
            assert!(solver.compute_one_extension().is_none());
        }
    }
}
