use super::{Argument, ArgumentSet, FrameworkError, LabelType};
use anyhow::{Context, Result};
use std::collections::HashMap;

/// An Abstract Argumentation framework as defined in Dung semantics.
///
/// The framework owns its arguments and its attack relation.
/// Attacks are kept in insertion order, and adding an attack that already exists has no effect.
///
/// Each structural modification increases the [revision](Self::revision) of the framework,
/// allowing the objects that cache results computed from a framework to detect outdated values.
#[derive(Debug)]
pub struct AAFramework<T>
where
    T: LabelType,
{
    arguments: ArgumentSet<T>,
    attacks: Vec<Option<(usize, usize)>>,
    attack_ids: HashMap<(usize, usize), usize>,
    attacks_from: Vec<Vec<usize>>,
    attacks_to: Vec<Vec<usize>>,
    n_removed_attacks: usize,
    revision: u64,
}

impl<T> Default for AAFramework<T>
where
    T: LabelType,
{
    fn default() -> Self {
        Self::new_with_argument_set(ArgumentSet::default())
    }
}

/// An attack, represented as a couple of two arguments.
///
/// Attacks are built by [`AAFramework`] objects.
pub struct Attack<'a, T>(&'a Argument<T>, &'a Argument<T>)
where
    T: LabelType;

impl<'a, T> Attack<'a, T>
where
    T: LabelType,
{
    /// Returns the attacker.
    ///
    /// # Example
    ///
    /// ```
    /// # use dungsem::aa::{Attack, LabelType};
    /// fn describe_attack<T: LabelType>(attack: &Attack<T>) {
    ///     println!("{} attacks {}", attack.attacker(), attack.attacked());
    /// }
    /// ```
    pub fn attacker(&self) -> &'a Argument<T> {
        self.0
    }

    /// Returns the attacked argument.
    pub fn attacked(&self) -> &'a Argument<T> {
        self.1
    }

    /// Returns `true` iff the attacker and the attacked argument are the same.
    pub fn is_self_attack(&self) -> bool {
        self.0.id() == self.1.id()
    }
}

impl<T> AAFramework<T>
where
    T: LabelType,
{
    /// Builds an AA framework.
    ///
    /// The set of arguments used in the framework is provided.
    ///
    /// # Example
    ///
    /// ```
    /// # use dungsem::aa::{ArgumentSet, AAFramework};
    /// let arguments = ArgumentSet::new_with_labels(&["a", "b", "c"]);
    /// let framework = AAFramework::new_with_argument_set(arguments);
    /// assert_eq!(3, framework.n_arguments());
    /// assert_eq!(0, framework.iter_attacks().count());
    /// ```
    pub fn new_with_argument_set(arguments: ArgumentSet<T>) -> Self {
        let attacks_from = (0..arguments.id_bound()).map(|_| vec![]).collect();
        let attacks_to = (0..arguments.id_bound()).map(|_| vec![]).collect();
        AAFramework {
            arguments,
            attacks: vec![],
            attack_ids: HashMap::new(),
            attacks_from,
            attacks_to,
            n_removed_attacks: 0,
            revision: 0,
        }
    }

    /// Adds a new argument to this argumentation framework and returns its id.
    ///
    /// If an argument with the same label exists, a [FrameworkError::DuplicateArgument] is returned and the framework is left unchanged.
    pub fn add_argument(&mut self, label: T) -> Result<usize> {
        let id = self.arguments.new_argument(label)?;
        self.attacks_from.push(Vec::new());
        self.attacks_to.push(Vec::new());
        self.revision += 1;
        Ok(id)
    }

    /// Removes an argument from this argumentation framework.
    ///
    /// All the attacks involving this argument are removed too.
    /// The argument id will not be attributed to new arguments.
    pub fn remove_argument(&mut self, label: &T) -> Result<()> {
        let removed = self
            .arguments
            .remove_argument(label)
            .with_context(|| format!("cannot remove argument {:?}", label))?;
        let removed_id = removed.id();
        let incident = self.attacks_from[removed_id]
            .iter()
            .chain(self.attacks_to[removed_id].iter())
            .copied()
            .collect::<Vec<usize>>();
        for attack_id in incident {
            if let Some(attack) = self.attacks[attack_id].take() {
                self.attack_ids.remove(&attack);
                self.n_removed_attacks += 1;
            }
        }
        self.attacks_from[removed_id].clear();
        self.attacks_to[removed_id].clear();
        self.revision += 1;
        Ok(())
    }

    /// Adds a new attack given the labels of the source and destination arguments.
    ///
    /// If one of the provided arguments is undefined, a [FrameworkError::UnknownArgument] is returned and the framework is left unchanged.
    /// If the attack already exists, nothing is done.
    ///
    /// # Example
    ///
    /// ```
    /// # use dungsem::aa::{ArgumentSet, AAFramework};
    /// let labels = vec!["a", "b", "c"];
    /// let arguments = ArgumentSet::new_with_labels(&labels);
    /// let mut framework = AAFramework::new_with_argument_set(arguments);
    /// framework.add_attack(&labels[0], &labels[1]).unwrap();
    /// framework.add_attack(&labels[0], &labels[1]).unwrap();
    /// assert_eq!(1, framework.n_attacks());
    /// assert!(framework.add_attack(&labels[0], &"d").is_err());
    /// ```
    pub fn add_attack(&mut self, from: &T, to: &T) -> Result<()> {
        let context = || format!("cannot add an attack from {:?} to {:?}", from, to);
        let attacker_id = self
            .arguments
            .get_argument_index(from)
            .with_context(context)?;
        let attacked_id = self
            .arguments
            .get_argument_index(to)
            .with_context(context)?;
        self.push_attack(attacker_id, attacked_id);
        Ok(())
    }

    /// Adds a new attack given the IDs of the source and destination arguments.
    ///
    /// If one of the provided ids does not refer to an existing argument, a [FrameworkError::UnknownArgument] is returned.
    /// If the attack already exists, nothing is done.
    pub fn add_attack_by_ids(&mut self, from: usize, to: usize) -> Result<()> {
        for id in [from, to] {
            if !self.arguments.has_argument_with_id(id) {
                return Err(FrameworkError::UnknownArgument(format!("#{}", id))).with_context(
                    || format!("cannot add an attack from ids {} to {}", from, to),
                );
            }
        }
        self.push_attack(from, to);
        Ok(())
    }

    fn push_attack(&mut self, from: usize, to: usize) {
        if self.attack_ids.contains_key(&(from, to)) {
            return;
        }
        let attack_id = self.attacks.len();
        self.attacks.push(Some((from, to)));
        self.attack_ids.insert((from, to), attack_id);
        self.attacks_from[from].push(attack_id);
        self.attacks_to[to].push(attack_id);
        self.revision += 1;
    }

    /// Removes an attack.
    ///
    /// If the provided attack or one of its arguments does not belong to this framework, an error is returned.
    pub fn remove_attack(&mut self, from: &T, to: &T) -> Result<()> {
        let context = || format!("while removing an attack from {:?} to {:?}", from, to);
        let attacker_id = self
            .arguments
            .get_argument_index(from)
            .with_context(context)?;
        let attacked_id = self
            .arguments
            .get_argument_index(to)
            .with_context(context)?;
        let attack_id = self
            .attack_ids
            .remove(&(attacker_id, attacked_id))
            .ok_or_else(|| anyhow::anyhow!("no such attack"))
            .with_context(context)?;
        self.attacks[attack_id] = None;
        self.attacks_from[attacker_id].retain(|i| *i != attack_id);
        self.attacks_to[attacked_id].retain(|i| *i != attack_id);
        self.n_removed_attacks += 1;
        self.revision += 1;
        Ok(())
    }

    /// Returns `true` iff the framework contains an attack between the arguments with the given ids.
    pub fn has_attack_by_ids(&self, from: usize, to: usize) -> bool {
        self.attack_ids.contains_key(&(from, to))
    }

    /// Returns the arguments attacking the argument with the given label, in attack insertion order.
    ///
    /// # Example
    ///
    /// ```
    /// # use dungsem::aa::{ArgumentSet, AAFramework};
    /// let mut framework = AAFramework::new_with_argument_set(ArgumentSet::new_with_labels(&["a", "b", "c"]));
    /// framework.add_attack(&"c", &"a").unwrap();
    /// framework.add_attack(&"b", &"a").unwrap();
    /// let attackers = framework.attackers_of(&"a").unwrap();
    /// assert_eq!(vec!["c", "b"], attackers.iter().map(|a| *a.label()).collect::<Vec<_>>());
    /// ```
    pub fn attackers_of(&self, label: &T) -> Result<Vec<&Argument<T>>> {
        let arg = self.arguments.get_argument(label)?;
        Ok(self.iter_attacks_to(arg).map(|att| att.attacker()).collect())
    }

    /// Returns the arguments attacked by the argument with the given label, in attack insertion order.
    pub fn attacked_by(&self, label: &T) -> Result<Vec<&Argument<T>>> {
        let arg = self.arguments.get_argument(label)?;
        Ok(self
            .iter_attacks_from(arg)
            .map(|att| att.attacked())
            .collect())
    }

    /// Returns the argument set of the framework.
    pub fn argument_set(&self) -> &ArgumentSet<T> {
        &self.arguments
    }

    fn attack_of(&self, attack: &(usize, usize)) -> Attack<'_, T> {
        Attack(
            self.arguments.get_argument_by_id(attack.0),
            self.arguments.get_argument_by_id(attack.1),
        )
    }

    /// Provides an iterator to the attacks, in insertion order.
    pub fn iter_attacks(&self) -> impl Iterator<Item = Attack<'_, T>> + '_ {
        self.attacks
            .iter()
            .filter_map(|o| o.as_ref())
            .map(|att| self.attack_of(att))
    }

    /// Provides an iterator to the attacks that have the given argument as attacker.
    pub fn iter_attacks_from(&self, arg: &Argument<T>) -> impl Iterator<Item = Attack<'_, T>> + '_ {
        self.iter_attacks_from_id(arg.id())
    }

    /// Provides an iterator to the attacks in which the attacker is the one given by the id.
    pub fn iter_attacks_from_id(
        &self,
        attacker_id: usize,
    ) -> impl Iterator<Item = Attack<'_, T>> + '_ {
        self.attacks_from[attacker_id]
            .iter()
            .filter_map(|i| self.attacks[*i].as_ref())
            .map(|att| self.attack_of(att))
    }

    /// Provides an iterator to the attacks that have the given argument as attacked.
    pub fn iter_attacks_to(&self, arg: &Argument<T>) -> impl Iterator<Item = Attack<'_, T>> + '_ {
        self.iter_attacks_to_id(arg.id())
    }

    /// Provides an iterator to the attacks in which the attacked argument is the one given by the id.
    pub fn iter_attacks_to_id(
        &self,
        attacked_id: usize,
    ) -> impl Iterator<Item = Attack<'_, T>> + '_ {
        self.attacks_to[attacked_id]
            .iter()
            .filter_map(|i| self.attacks[*i].as_ref())
            .map(|att| self.attack_of(att))
    }

    /// Returns the number of arguments in this framework.
    pub fn n_arguments(&self) -> usize {
        self.argument_set().len()
    }

    /// Returns the maximal argument id given so far.
    ///
    /// This id may refer to a removed argument.
    pub fn max_argument_id(&self) -> Option<usize> {
        self.argument_set().max_id()
    }

    /// Returns the number of attacks in this framework.
    pub fn n_attacks(&self) -> usize {
        self.attacks.len() - self.n_removed_attacks
    }

    /// Returns the revision of this framework.
    ///
    /// The revision is increased by each structural modification (argument or attack addition and removal).
    pub fn revision(&self) -> u64 {
        self.revision
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels() -> Vec<String> {
        vec!["a".to_string(), "b".to_string(), "c".to_string()]
    }

    fn framework() -> AAFramework<String> {
        AAFramework::new_with_argument_set(ArgumentSet::new_with_labels(&labels()))
    }

    #[test]
    fn test_n_args() {
        let af = framework();
        assert_eq!(3, af.n_arguments());
    }

    #[test]
    fn test_add_attack_ok() {
        let arg_labels = labels();
        let mut af = framework();
        assert_eq!(0, af.n_attacks());
        af.add_attack(&arg_labels[0], &arg_labels[0]).unwrap();
        assert_eq!(1, af.n_attacks());
        assert_eq!((0, 0), af.attacks[0].unwrap());
        assert!(af.iter_attacks().next().unwrap().is_self_attack());
    }

    #[test]
    fn test_add_attack_is_idempotent() {
        let arg_labels = labels();
        let mut af = framework();
        af.add_attack(&arg_labels[0], &arg_labels[1]).unwrap();
        let revision = af.revision();
        af.add_attack(&arg_labels[0], &arg_labels[1]).unwrap();
        af.add_attack_by_ids(0, 1).unwrap();
        assert_eq!(1, af.n_attacks());
        assert_eq!(revision, af.revision());
    }

    #[test]
    fn test_add_attack_unknown_label_1() {
        let arg_labels = labels();
        let mut af = framework();
        let err = af.add_attack(&"d".to_string(), &arg_labels[0]).unwrap_err();
        assert_eq!(
            Some(&FrameworkError::UnknownArgument("d".to_string())),
            err.downcast_ref::<FrameworkError>()
        );
        assert_eq!(0, af.n_attacks());
    }

    #[test]
    fn test_add_attack_unknown_label_2() {
        let arg_labels = labels();
        let mut af = framework();
        let revision = af.revision();
        af.add_attack(&arg_labels[0], &"d".to_string()).unwrap_err();
        assert_eq!(0, af.n_attacks());
        assert_eq!(revision, af.revision());
    }

    #[test]
    fn test_add_attack_by_ids_ok() {
        let mut af = framework();
        af.add_attack_by_ids(0, 0).unwrap();
        assert_eq!(1, af.n_attacks());
        assert!(af.has_attack_by_ids(0, 0));
    }

    #[test]
    fn test_add_attack_by_ids_unknown_id() {
        let mut af = framework();
        af.add_attack_by_ids(3, 0).unwrap_err();
        af.add_attack_by_ids(0, 3).unwrap_err();
        assert_eq!(0, af.n_attacks());
    }

    #[test]
    fn test_add_argument() {
        let mut af = framework();
        assert_eq!(3, af.add_argument("d".to_string()).unwrap());
        assert_eq!(4, af.n_arguments());
        af.add_argument("d".to_string()).unwrap_err();
        assert_eq!(4, af.n_arguments());
        af.add_attack(&"d".to_string(), &"a".to_string()).unwrap();
        assert_eq!(1, af.n_attacks());
    }

    #[test]
    fn test_attackers_and_attacked_in_insertion_order() {
        let mut af = framework();
        let (a, b, c) = ("a".to_string(), "b".to_string(), "c".to_string());
        af.add_attack(&c, &a).unwrap();
        af.add_attack(&b, &a).unwrap();
        af.add_attack(&a, &c).unwrap();
        af.add_attack(&a, &b).unwrap();
        let attackers = af.attackers_of(&a).unwrap();
        assert_eq!(
            vec!["c", "b"],
            attackers.iter().map(|x| x.label().as_str()).collect::<Vec<_>>()
        );
        let attacked = af.attacked_by(&a).unwrap();
        assert_eq!(
            vec!["c", "b"],
            attacked.iter().map(|x| x.label().as_str()).collect::<Vec<_>>()
        );
        assert!(af.attackers_of(&"e".to_string()).is_err());
    }

    #[test]
    fn test_remove_attack() {
        let arg_labels = labels();
        let mut af = framework();
        for i in 0..3 {
            for j in 0..3 {
                af.add_attack(&arg_labels[i], &arg_labels[j]).unwrap();
            }
        }
        assert_eq!(9, af.n_attacks());
        assert!(af.remove_attack(&arg_labels[0], &arg_labels[0]).is_ok());
        assert!(af.remove_attack(&arg_labels[0], &arg_labels[0]).is_err());
        assert_eq!(8, af.n_attacks());
        assert!(af
            .iter_attacks()
            .all(|att| att.attacker().label() != "a" || att.attacked().label() != "a"));
        assert_eq!(2, af.attackers_of(&arg_labels[0]).unwrap().len());
    }

    #[test]
    fn test_remove_argument() {
        let arg_labels = labels();
        let mut af = framework();
        for i in 0..3 {
            for j in 0..3 {
                af.add_attack(&arg_labels[i], &arg_labels[j]).unwrap();
            }
        }
        assert_eq!(9, af.n_attacks());
        let revision = af.revision();
        assert!(af.remove_argument(&arg_labels[0]).is_ok());
        assert!(af.remove_argument(&arg_labels[0]).is_err());
        assert!(af.revision() > revision);
        assert_eq!(4, af.n_attacks());
        assert!(af
            .iter_attacks()
            .all(|att| att.attacker().label() != "a" && att.attacked().label() != "a"));
        assert_eq!(
            vec!["b", "c"],
            af.attackers_of(&arg_labels[1])
                .unwrap()
                .iter()
                .map(|x| x.label().as_str())
                .collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_readd_removed_attack() {
        let arg_labels = labels();
        let mut af = framework();
        af.add_attack(&arg_labels[0], &arg_labels[1]).unwrap();
        af.remove_argument(&arg_labels[1]).unwrap();
        af.add_argument(arg_labels[1].clone()).unwrap();
        af.add_attack(&arg_labels[0], &arg_labels[1]).unwrap();
        assert_eq!(1, af.n_attacks());
        assert_eq!(3, af.argument_set().get_argument(&arg_labels[1]).unwrap().id());
    }
}
