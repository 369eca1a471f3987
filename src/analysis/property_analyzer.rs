use super::SemanticsRelationships;
use crate::{
    aa::{AAFramework, Argument, LabelType},
    solvers::{EnumerationLimits, SelfAttackPolicy, SemanticsEngine},
};
use serde::Serialize;

/// Structural metrics of a framework, as computed by a [PropertyAnalyzer].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameworkProperties {
    /// The number of arguments.
    pub argument_count: usize,
    /// The number of attacks.
    pub attack_count: usize,
    /// Whether the attack graph contains a cycle (self-attacks included).
    pub has_cycles: bool,
    /// Whether each attack is countered by the reverse attack.
    pub is_symmetric: bool,
    /// The ratio between the number of attacks and the square of the number of arguments.
    pub density: f64,
    /// The labels of the self-attacking arguments.
    pub self_attacking_arguments: Vec<String>,
    /// The labels of the arguments that are not attacked.
    pub unattacked_arguments: Vec<String>,
}

/// Read-only structural analysis of a framework.
///
/// # Example
///
/// ```
/// # use dungsem::aa::{AAFramework, ArgumentSet};
/// # use dungsem::analysis::PropertyAnalyzer;
/// let mut af = AAFramework::new_with_argument_set(ArgumentSet::new_with_labels(&["a", "b"]));
/// af.add_attack(&"a", &"b").unwrap();
/// let analyzer = PropertyAnalyzer::new(&af);
/// assert!(!analyzer.has_cycles());
/// assert_eq!(0.25, analyzer.density());
/// ```
pub struct PropertyAnalyzer<'a, T>
where
    T: LabelType,
{
    af: &'a AAFramework<T>,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Color {
    White,
    Gray,
    Black,
}

impl<'a, T> PropertyAnalyzer<'a, T>
where
    T: LabelType,
{
    /// Builds an analyzer for the given framework.
    pub fn new(af: &'a AAFramework<T>) -> Self {
        Self { af }
    }

    /// Returns the number of arguments.
    pub fn argument_count(&self) -> usize {
        self.af.n_arguments()
    }

    /// Returns the number of attacks.
    pub fn attack_count(&self) -> usize {
        self.af.n_attacks()
    }

    /// Checks whether the attack graph contains a cycle.
    ///
    /// Self-attacks are cycles of length one.
    pub fn has_cycles(&self) -> bool {
        let width = self.af.argument_set().id_bound();
        let mut colors = vec![Color::White; width];
        for root in self.af.argument_set().iter().map(|a| a.id()) {
            if colors[root] != Color::White {
                continue;
            }
            colors[root] = Color::Gray;
            let mut stack = vec![(root, self.successors(root), 0)];
            while let Some((node, successors, next)) = stack.last_mut() {
                if *next == successors.len() {
                    colors[*node] = Color::Black;
                    stack.pop();
                    continue;
                }
                let succ = successors[*next];
                *next += 1;
                match colors[succ] {
                    Color::Gray => return true,
                    Color::Black => {}
                    Color::White => {
                        colors[succ] = Color::Gray;
                        let succ_successors = self.successors(succ);
                        stack.push((succ, succ_successors, 0));
                    }
                }
            }
        }
        false
    }

    fn successors(&self, id: usize) -> Vec<usize> {
        self.af
            .iter_attacks_from_id(id)
            .map(|att| att.attacked().id())
            .collect()
    }

    /// Checks whether each attack `(a, b)` comes with the attack `(b, a)`.
    ///
    /// The empty framework is symmetric.
    pub fn is_symmetric(&self) -> bool {
        self.af.iter_attacks().all(|att| {
            self.af
                .has_attack_by_ids(att.attacked().id(), att.attacker().id())
        })
    }

    /// Returns the number of attacks divided by the square of the number of arguments.
    ///
    /// The density of the empty framework is zero.
    pub fn density(&self) -> f64 {
        let n = self.argument_count();
        if n == 0 {
            return 0.;
        }
        self.attack_count() as f64 / (n * n) as f64
    }

    /// Returns the self-attacking arguments, in id order.
    pub fn self_attacking_arguments(&self) -> Vec<&'a Argument<T>> {
        self.af
            .argument_set()
            .iter()
            .filter(|a| self.af.has_attack_by_ids(a.id(), a.id()))
            .collect()
    }

    /// Returns the arguments that are not attacked, in id order.
    pub fn unattacked_arguments(&self) -> Vec<&'a Argument<T>> {
        self.af
            .argument_set()
            .iter()
            .filter(|a| self.af.iter_attacks_to_id(a.id()).next().is_none())
            .collect()
    }

    /// Computes all the structural metrics at once.
    pub fn properties(&self) -> FrameworkProperties {
        let labels = |args: Vec<&Argument<T>>| -> Vec<String> {
            args.iter().map(|a| a.label().to_string()).collect()
        };
        FrameworkProperties {
            argument_count: self.argument_count(),
            attack_count: self.attack_count(),
            has_cycles: self.has_cycles(),
            is_symmetric: self.is_symmetric(),
            density: self.density(),
            self_attacking_arguments: labels(self.self_attacking_arguments()),
            unattacked_arguments: labels(self.unattacked_arguments()),
        }
    }

    /// Computes the extensions of the four semantics and checks the relationships that hold between them.
    pub fn semantics_relationships(
        &self,
        policy: SelfAttackPolicy,
        limits: EnumerationLimits,
    ) -> SemanticsRelationships {
        let engine = SemanticsEngine::new(self.af, policy);
        SemanticsRelationships::from_extensions(
            &engine.grounded_extension(),
            &engine.complete_extensions(limits),
            &engine.preferred_extensions(limits),
            &engine.stable_extensions(limits),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aa::ArgumentSet;

    fn af_from(labels: &[&'static str], attacks: &[(&'static str, &'static str)]) -> AAFramework<&'static str> {
        let mut af = AAFramework::new_with_argument_set(ArgumentSet::new_with_labels(labels));
        for (from, to) in attacks {
            af.add_attack(from, to).unwrap();
        }
        af
    }

    #[test]
    fn test_empty_framework() {
        let af = AAFramework::<&str>::default();
        let props = PropertyAnalyzer::new(&af).properties();
        assert_eq!(0, props.argument_count);
        assert_eq!(0., props.density);
        assert!(!props.has_cycles);
        assert!(props.is_symmetric);
    }

    #[test]
    fn test_cycles() {
        assert!(!PropertyAnalyzer::new(&af_from(&["a", "b", "c"], &[("a", "b"), ("b", "c"), ("a", "c")])).has_cycles());
        assert!(PropertyAnalyzer::new(&af_from(&["a", "b", "c"], &[("a", "b"), ("b", "c"), ("c", "a")])).has_cycles());
        assert!(PropertyAnalyzer::new(&af_from(&["a"], &[("a", "a")])).has_cycles());
    }

    #[test]
    fn test_cycle_reached_from_later_root() {
        let af = af_from(&["a", "b", "c", "d"], &[("a", "b"), ("c", "d"), ("d", "c")]);
        assert!(PropertyAnalyzer::new(&af).has_cycles());
    }

    #[test]
    fn test_properties() {
        let af = af_from(
            &["contradiction", "conclusion", "x"],
            &[("contradiction", "contradiction"), ("contradiction", "conclusion")],
        );
        let props = PropertyAnalyzer::new(&af).properties();
        assert_eq!(3, props.argument_count);
        assert_eq!(2, props.attack_count);
        assert!(props.has_cycles);
        assert!(!props.is_symmetric);
        assert!((props.density - 2. / 9.).abs() < 1e-9);
        assert_eq!(vec!["contradiction"], props.self_attacking_arguments);
        assert_eq!(vec!["x"], props.unattacked_arguments);
    }

    #[test]
    fn test_symmetric() {
        let af = af_from(&["a", "b", "c"], &[("a", "b"), ("b", "a"), ("c", "c")]);
        assert!(PropertyAnalyzer::new(&af).is_symmetric());
    }

    #[test]
    fn test_relationships() {
        let af = af_from(&["a", "b", "c"], &[("a", "b"), ("b", "c"), ("c", "a")]);
        let rel = PropertyAnalyzer::new(&af)
            .semantics_relationships(SelfAttackPolicy::Classical, EnumerationLimits::default());
        assert!(rel.grounded_in_all_complete);
        assert!(rel.complete_in_some_preferred);
        assert!(rel.stable_are_preferred);
        assert!(!rel.has_stable);
        assert_eq!(1, rel.n_complete);
        assert_eq!(1, rel.n_preferred);
        assert_eq!(0, rel.n_stable);
        assert!(!rel.partial);
    }
}
