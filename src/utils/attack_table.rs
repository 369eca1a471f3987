use super::ArgSet;
use crate::{
    aa::{AAFramework, LabelType},
    solvers::SelfAttackPolicy,
};

/// Adjacency data of a framework, indexed by argument ids.
///
/// Two relations are stored: the raw attack relation (used for conflict-freeness)
/// and the effective one, filtered by a [SelfAttackPolicy] (used for defense and labelling legality).
pub(crate) struct AttackTable {
    present: ArgSet,
    raw_attackers: Vec<ArgSet>,
    attackers: Vec<Vec<usize>>,
    targets: Vec<Vec<usize>>,
    attacker_sets: Vec<ArgSet>,
}

impl AttackTable {
    pub(crate) fn new<T>(af: &AAFramework<T>, policy: SelfAttackPolicy) -> Self
    where
        T: LabelType,
    {
        let width = af.argument_set().id_bound();
        let present = ArgSet::from_ids(width, af.argument_set().iter().map(|a| a.id()));
        let mut raw_attackers = vec![ArgSet::with_width(width); width];
        let mut attackers = vec![Vec::new(); width];
        let mut targets = vec![Vec::new(); width];
        let mut attacker_sets = vec![ArgSet::with_width(width); width];
        for att in af.iter_attacks() {
            let (from, to) = (att.attacker().id(), att.attacked().id());
            raw_attackers[to].insert(from);
            if policy.is_effective(from, to, af.has_attack_by_ids(from, from)) {
                attackers[to].push(from);
                targets[from].push(to);
                attacker_sets[to].insert(from);
            }
        }
        Self {
            present,
            raw_attackers,
            attackers,
            targets,
            attacker_sets,
        }
    }

    pub(crate) fn width(&self) -> usize {
        self.present.width()
    }

    pub(crate) fn present(&self) -> &ArgSet {
        &self.present
    }

    pub(crate) fn raw_attackers(&self, id: usize) -> &ArgSet {
        &self.raw_attackers[id]
    }

    pub(crate) fn attackers(&self, id: usize) -> &[usize] {
        &self.attackers[id]
    }

    pub(crate) fn targets(&self, id: usize) -> &[usize] {
        &self.targets[id]
    }

    pub(crate) fn attacker_set(&self, id: usize) -> &ArgSet {
        &self.attacker_sets[id]
    }
}
