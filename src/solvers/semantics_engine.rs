use super::{
    labelling_search::LabellingSearch, Enumeration, EnumerationLimits, SelfAttackPolicy,
};
use crate::{
    aa::{AAFramework, Argument, LabelType, Semantics},
    utils::{attack_table::AttackTable, grounded_labelling, ArgSet, Labelling},
};
use log::debug;

/// The core computations of Dung's semantics on a framework.
///
/// The engine computes the grounded, complete, preferred and stable extensions of a framework,
/// given a [SelfAttackPolicy] telling how the attacks emitted by self-attacking arguments are handled.
/// It also provides the basic checks (conflict-freeness, defense, admissibility) and the characteristic function.
///
/// Sets of arguments are handled as [ArgSet] bitsets of argument ids;
/// [arg_set_of](Self::arg_set_of) and [arguments_of](Self::arguments_of) convert them from and to arguments.
///
/// Extensions are always returned sorted by the ascending sequences of their argument ids.
///
/// # Example
///
/// ```
/// # use dungsem::aa::{AAFramework, ArgumentSet};
/// # use dungsem::solvers::{EnumerationLimits, SelfAttackPolicy, SemanticsEngine};
/// let mut af = AAFramework::new_with_argument_set(ArgumentSet::new_with_labels(&["a", "b"]));
/// af.add_attack(&"a", &"b").unwrap();
/// af.add_attack(&"b", &"a").unwrap();
/// let engine = SemanticsEngine::new(&af, SelfAttackPolicy::Classical);
/// let preferred = engine.preferred_extensions(EnumerationLimits::default());
/// assert_eq!(2, preferred.len());
/// assert!(engine.grounded_extension().is_empty());
/// ```
pub struct SemanticsEngine<'a, T>
where
    T: LabelType,
{
    af: &'a AAFramework<T>,
    policy: SelfAttackPolicy,
    table: AttackTable,
}

impl<'a, T> SemanticsEngine<'a, T>
where
    T: LabelType,
{
    /// Builds an engine for the given framework and self-attack policy.
    pub fn new(af: &'a AAFramework<T>, policy: SelfAttackPolicy) -> Self {
        Self {
            af,
            policy,
            table: AttackTable::new(af, policy),
        }
    }

    /// Returns the framework this engine works on.
    pub fn framework(&self) -> &'a AAFramework<T> {
        self.af
    }

    /// Returns the self-attack policy in use.
    pub fn policy(&self) -> SelfAttackPolicy {
        self.policy
    }

    /// Returns an empty set with a width suitable for this framework.
    pub fn empty_set(&self) -> ArgSet {
        ArgSet::with_width(self.table.width())
    }

    /// Returns the set of ids of the given arguments.
    pub fn arg_set_of(&self, args: &[&Argument<T>]) -> ArgSet {
        ArgSet::from_ids(self.table.width(), args.iter().map(|a| a.id()))
    }

    /// Returns the arguments whose ids are in the given set, in ascending id order.
    ///
    /// # Panics
    ///
    /// If an id of the set does not refer to an argument of the framework.
    pub fn arguments_of(&self, set: &ArgSet) -> Vec<&'a Argument<T>> {
        set.iter()
            .map(|id| self.af.argument_set().get_argument_by_id(id))
            .collect()
    }

    /// Checks that no argument of the set attacks an argument of the set (itself included).
    ///
    /// The whole attack relation is considered, regardless of the self-attack policy.
    pub fn is_conflict_free(&self, set: &ArgSet) -> bool {
        set.iter().all(|id| !self.table.raw_attackers(id).intersects(set))
    }

    /// Checks that each effective attacker of the argument is attacked by the set.
    pub fn is_defended(&self, id: usize, set: &ArgSet) -> bool {
        self.table
            .attackers(id)
            .iter()
            .all(|attacker| self.table.attacker_set(*attacker).intersects(set))
    }

    /// Checks the set is conflict-free and defends each of its arguments.
    pub fn is_admissible(&self, set: &ArgSet) -> bool {
        self.is_conflict_free(set) && set.iter().all(|id| self.is_defended(id, set))
    }

    /// Returns the set of arguments defended by the given set.
    pub fn characteristic_function(&self, set: &ArgSet) -> ArgSet {
        ArgSet::from_ids(
            self.table.width(),
            self.table
                .present()
                .iter()
                .filter(|id| self.is_defended(*id, set)),
        )
    }

    /// Computes the grounded extension as the least fixpoint of the characteristic function.
    ///
    /// The characteristic function is iterated from the empty set; the number of iterations
    /// is bounded by the number of arguments.
    pub fn grounded_extension(&self) -> ArgSet {
        let mut current = self.empty_set();
        let mut n_rounds = 0;
        loop {
            let next = self.characteristic_function(&current);
            n_rounds += 1;
            if next == current {
                debug!(
                    "grounded fixpoint reached after {} round(s) with {} argument(s)",
                    n_rounds,
                    next.len()
                );
                return next;
            }
            current = next;
        }
    }

    /// Computes the grounded labelling.
    ///
    /// The IN part of this labelling is the [grounded extension](Self::grounded_extension).
    pub fn grounded_labelling(&self) -> Labelling {
        grounded_labelling(&self.table)
    }

    /// Enumerates the complete labellings.
    ///
    /// The labellings are sorted by the ascending id sequences of their IN parts.
    pub fn complete_labellings(&self, limits: EnumerationLimits) -> Enumeration<Labelling> {
        self.search_labellings(Semantics::CO, true, limits)
    }

    /// Enumerates the complete extensions.
    pub fn complete_extensions(&self, limits: EnumerationLimits) -> Enumeration<ArgSet> {
        into_sorted_extensions(self.complete_labellings(limits))
    }

    /// Enumerates the preferred extensions, that is the complete extensions that are maximal w.r.t. set inclusion.
    ///
    /// A framework always has at least one preferred extension.
    /// In case the enumeration of the complete extensions is partial, the maximality is only checked against the extensions found so far.
    pub fn preferred_extensions(&self, limits: EnumerationLimits) -> Enumeration<ArgSet> {
        let complete = self.complete_extensions(limits);
        let partial = complete.is_partial();
        let all = complete.into_extensions();
        let maximal = all
            .iter()
            .filter(|e| !all.iter().any(|other| e.is_strict_subset(other)))
            .cloned()
            .collect();
        Enumeration::new(Semantics::PR, maximal, partial)
    }

    /// Enumerates the stable extensions, that is the complete extensions with no undecided argument.
    ///
    /// Frameworks may have no stable extensions.
    pub fn stable_extensions(&self, limits: EnumerationLimits) -> Enumeration<ArgSet> {
        into_sorted_extensions(self.search_labellings(Semantics::ST, false, limits))
    }

    /// Enumerates the extensions of the given semantics.
    ///
    /// The grounded semantics is handled as a semantics with exactly one extension, and is never partial.
    pub fn extensions(&self, semantics: Semantics, limits: EnumerationLimits) -> Enumeration<ArgSet> {
        match semantics {
            Semantics::GR => Enumeration::new(semantics, vec![self.grounded_extension()], false),
            Semantics::CO => self.complete_extensions(limits),
            Semantics::PR => self.preferred_extensions(limits),
            Semantics::ST => self.stable_extensions(limits),
        }
    }

    fn search_labellings(
        &self,
        semantics: Semantics,
        allow_undec: bool,
        limits: EnumerationLimits,
    ) -> Enumeration<Labelling> {
        let grounded = self.grounded_labelling();
        let result = LabellingSearch::new(&self.table, &grounded, allow_undec, limits).run();
        let mut labellings = result.labellings;
        labellings.sort_by_cached_key(|l| l.in_set());
        Enumeration::new(semantics, labellings, result.partial)
    }
}

fn into_sorted_extensions(labellings: Enumeration<Labelling>) -> Enumeration<ArgSet> {
    let (semantics, partial) = (labellings.semantics(), labellings.is_partial());
    let mut extensions = labellings.map(|l| l.in_set()).into_extensions();
    extensions.sort_unstable();
    Enumeration::new(semantics, extensions, partial)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{aa::ArgumentSet, generators::random_framework};

    fn af_from(labels: &[&'static str], attacks: &[(&'static str, &'static str)]) -> AAFramework<&'static str> {
        let mut af = AAFramework::new_with_argument_set(ArgumentSet::new_with_labels(labels));
        for (from, to) in attacks {
            af.add_attack(from, to).unwrap();
        }
        af
    }

    fn labels_of(engine: &SemanticsEngine<&'static str>, set: &ArgSet) -> Vec<&'static str> {
        engine
            .arguments_of(set)
            .iter()
            .map(|a| *a.label())
            .collect()
    }

    fn all_labels(
        engine: &SemanticsEngine<&'static str>,
        e: &Enumeration<ArgSet>,
    ) -> Vec<Vec<&'static str>> {
        e.iter().map(|s| labels_of(engine, s)).collect()
    }

    #[test]
    fn test_basic_checks() {
        let af = af_from(&["a", "b", "c"], &[("a", "b"), ("b", "c"), ("c", "c")]);
        let engine = SemanticsEngine::new(&af, SelfAttackPolicy::Classical);
        let a = engine.arg_set_of(&[af.argument_set().get_argument(&"a").unwrap()]);
        assert!(engine.is_conflict_free(&a));
        assert!(engine.is_admissible(&a));
        let c = ArgSet::from_ids(3, [2]);
        assert!(!engine.is_conflict_free(&c));
        let ab = ArgSet::from_ids(3, [0, 1]);
        assert!(!engine.is_conflict_free(&ab));
        assert!(!engine.is_defended(2, &a));
        assert!(!engine.is_defended(1, &engine.empty_set()));
        assert_eq!(
            vec!["a"],
            labels_of(&engine, &engine.characteristic_function(&engine.empty_set()))
        );
        assert_eq!(vec!["a"], labels_of(&engine, &engine.characteristic_function(&a)));
    }

    #[test]
    fn test_defense() {
        let af = af_from(&["a", "b", "c"], &[("a", "b"), ("b", "c")]);
        let engine = SemanticsEngine::new(&af, SelfAttackPolicy::Classical);
        let a = ArgSet::from_ids(3, [0]);
        assert!(engine.is_defended(2, &a));
        assert!(engine.is_admissible(&ArgSet::from_ids(3, [0, 2])));
        assert!(!engine.is_admissible(&ArgSet::from_ids(3, [2])));
        assert_eq!(vec!["a", "c"], labels_of(&engine, &engine.characteristic_function(&a)));
    }

    #[test]
    fn test_grounded_fixpoint_matches_labelling() {
        let af = af_from(
            &["a", "b", "c", "d", "e", "f"],
            &[
                ("a", "b"),
                ("b", "c"),
                ("b", "d"),
                ("c", "e"),
                ("d", "e"),
                ("e", "f"),
            ],
        );
        for policy in [SelfAttackPolicy::Classical, SelfAttackPolicy::Enhanced] {
            let engine = SemanticsEngine::new(&af, policy);
            let grounded = engine.grounded_extension();
            assert_eq!(vec!["a", "c", "d", "f"], labels_of(&engine, &grounded));
            assert_eq!(grounded, engine.grounded_labelling().in_set());
        }
    }

    #[test]
    fn test_mutual_attack() {
        let af = af_from(&["a", "b"], &[("a", "b"), ("b", "a")]);
        let engine = SemanticsEngine::new(&af, SelfAttackPolicy::Classical);
        let limits = EnumerationLimits::default();
        let complete = engine.complete_extensions(limits);
        assert_eq!(Semantics::CO, complete.semantics());
        assert_eq!(
            vec![vec![], vec!["a"], vec!["b"]],
            all_labels(&engine, &complete)
        );
        assert_eq!(
            vec![vec!["a"], vec!["b"]],
            all_labels(&engine, &engine.preferred_extensions(limits))
        );
        assert_eq!(
            vec![vec!["a"], vec!["b"]],
            all_labels(&engine, &engine.stable_extensions(limits))
        );
    }

    #[test]
    fn test_odd_cycle() {
        let af = af_from(&["a", "b", "c"], &[("a", "b"), ("b", "c"), ("c", "a")]);
        let engine = SemanticsEngine::new(&af, SelfAttackPolicy::Classical);
        let limits = EnumerationLimits::default();
        assert_eq!(vec![Vec::<&str>::new()], all_labels(&engine, &engine.complete_extensions(limits)));
        assert_eq!(vec![Vec::<&str>::new()], all_labels(&engine, &engine.preferred_extensions(limits)));
        let stable = engine.stable_extensions(limits);
        assert_eq!(Semantics::ST, stable.semantics());
        assert!(stable.is_empty());
        assert!(!stable.is_partial());
    }

    #[test]
    fn test_self_attacker_policies() {
        let af = af_from(
            &["contradiction", "conclusion"],
            &[
                ("contradiction", "contradiction"),
                ("contradiction", "conclusion"),
            ],
        );
        let limits = EnumerationLimits::default();
        let classical = SemanticsEngine::new(&af, SelfAttackPolicy::Classical);
        assert!(classical.grounded_extension().is_empty());
        assert!(classical.stable_extensions(limits).is_empty());
        let enhanced = SemanticsEngine::new(&af, SelfAttackPolicy::Enhanced);
        assert_eq!(
            vec!["conclusion"],
            labels_of(&enhanced, &enhanced.grounded_extension())
        );
        assert_eq!(
            vec![vec!["conclusion"]],
            all_labels(&enhanced, &enhanced.preferred_extensions(limits))
        );
        assert!(enhanced.stable_extensions(limits).is_empty());
        assert!(!enhanced.is_conflict_free(&ArgSet::from_ids(2, [0])));
    }

    #[test]
    fn test_extensions_are_complete_fixpoints() {
        let af = af_from(
            &["a", "b", "c", "d", "e"],
            &[
                ("a", "b"),
                ("b", "a"),
                ("b", "c"),
                ("c", "d"),
                ("d", "e"),
                ("e", "c"),
            ],
        );
        let engine = SemanticsEngine::new(&af, SelfAttackPolicy::Classical);
        let complete = engine.complete_extensions(EnumerationLimits::default());
        assert!(!complete.is_empty());
        let grounded = engine.grounded_extension();
        for ext in complete.iter() {
            assert!(engine.is_conflict_free(ext));
            assert_eq!(*ext, engine.characteristic_function(ext));
            assert!(grounded.is_subset(ext));
        }
        let sorted = complete.extensions().windows(2).all(|w| w[0] < w[1]);
        assert!(sorted);
    }

    #[test]
    fn test_cap_gives_partial_enumeration() {
        let af = af_from(
            &["a", "b", "c", "d"],
            &[("a", "b"), ("b", "a"), ("c", "d"), ("d", "c")],
        );
        let engine = SemanticsEngine::new(&af, SelfAttackPolicy::Classical);
        let capped = engine.complete_extensions(EnumerationLimits::with_max_candidates(1));
        assert!(capped.is_partial());
        let full = engine.complete_extensions(EnumerationLimits::default());
        assert!(!full.is_partial());
        assert_eq!(9, full.len());
    }

    #[test]
    fn test_removed_arguments_are_ignored() {
        let mut af = af_from(&["a", "b", "c"], &[("a", "b"), ("b", "c")]);
        af.remove_argument(&"a").unwrap();
        let engine = SemanticsEngine::new(&af, SelfAttackPolicy::Classical);
        assert_eq!(vec!["b"], labels_of(&engine, &engine.grounded_extension()));
        assert_eq!(
            vec![vec!["b"]],
            all_labels(&engine, &engine.extensions(Semantics::ST, EnumerationLimits::default()))
        );
    }

    // Brute force over all the subsets of a framework whose ids are 0..n.
    struct Oracle {
        n: usize,
        attacks: Vec<Vec<bool>>,
    }

    impl Oracle {
        fn new(af: &AAFramework<String>, policy: SelfAttackPolicy) -> Self {
            let n = af.n_arguments();
            let attacks = (0..n)
                .map(|i| {
                    (0..n)
                        .map(|j| {
                            af.has_attack_by_ids(i, j)
                                && policy.is_effective(i, j, af.has_attack_by_ids(i, i))
                        })
                        .collect()
                })
                .collect();
            Self { n, attacks }
        }

        fn is_attacked_by(&self, a: usize, set: &ArgSet) -> bool {
            set.iter().any(|s| self.attacks[s][a])
        }

        fn is_conflict_free(&self, set: &ArgSet) -> bool {
            set.iter().all(|a| !self.is_attacked_by(a, set))
        }

        fn defended(&self, set: &ArgSet) -> ArgSet {
            ArgSet::from_ids(
                self.n,
                (0..self.n).filter(|a| {
                    (0..self.n)
                        .filter(|b| self.attacks[*b][*a])
                        .all(|b| self.is_attacked_by(b, set))
                }),
            )
        }

        fn grounded(&self) -> ArgSet {
            let mut current = ArgSet::with_width(self.n);
            loop {
                let next = self.defended(&current);
                if next == current {
                    return current;
                }
                current = next;
            }
        }

        fn complete(&self) -> Vec<ArgSet> {
            let mut result = (0..1usize << self.n)
                .map(|mask| {
                    ArgSet::from_ids(self.n, (0..self.n).filter(|i| mask & (1usize << *i) != 0))
                })
                .filter(|set| self.is_conflict_free(set) && self.defended(set) == *set)
                .collect::<Vec<ArgSet>>();
            result.sort_unstable();
            result
        }

        fn preferred(&self, complete: &[ArgSet]) -> Vec<ArgSet> {
            complete
                .iter()
                .filter(|e| !complete.iter().any(|other| e.is_strict_subset(other)))
                .cloned()
                .collect()
        }

        fn stable(&self, complete: &[ArgSet]) -> Vec<ArgSet> {
            complete
                .iter()
                .filter(|e| (0..self.n).all(|a| e.contains(a) || self.is_attacked_by(a, e)))
                .cloned()
                .collect()
        }
    }

    #[test]
    fn test_enumerations_match_brute_force() {
        let limits = EnumerationLimits::default();
        for policy in [SelfAttackPolicy::Classical, SelfAttackPolicy::Enhanced] {
            for n in 0..7 {
                for probability in [0.1, 0.2, 0.35, 0.5] {
                    for seed in 0..15 {
                        let af = random_framework(n, probability, seed).unwrap();
                        let engine = SemanticsEngine::new(&af, policy);
                        let oracle = Oracle::new(&af, policy);
                        let context = format!("{} n={} p={} seed={}", policy, n, probability, seed);
                        let grounded = engine.grounded_extension();
                        assert_eq!(oracle.grounded(), grounded, "{}", context);
                        assert_eq!(engine.grounded_labelling().in_set(), grounded, "{}", context);
                        let complete = oracle.complete();
                        assert_eq!(
                            complete,
                            engine.complete_extensions(limits).into_extensions(),
                            "{}",
                            context
                        );
                        assert_eq!(
                            oracle.preferred(&complete),
                            engine.preferred_extensions(limits).into_extensions(),
                            "{}",
                            context
                        );
                        assert_eq!(
                            oracle.stable(&complete),
                            engine.stable_extensions(limits).into_extensions(),
                            "{}",
                            context
                        );
                    }
                }
            }
        }
    }
}
