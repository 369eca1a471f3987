use super::FrameworkError;
use anyhow::Result;
use std::collections::HashMap;
use std::fmt::Debug;
use std::fmt::Display;
use std::hash::Hash;

/// The trait for argument labels.
///
/// Arguments may be labeled by any type implementing some traits.
/// This trait is used to combine them.
///
/// Simple types like [usize], [&str] and [String] implement [LabelType].
pub trait LabelType: Clone + Debug + Display + Eq + Hash {}
impl<T: Clone + Debug + Display + Eq + Hash> LabelType for T {}

/// Handles a single argument.
///
/// Each argument has a label and an identifier which is unique in an argument set.
/// Identifiers are dense integers starting at zero, given in insertion order.
///
/// Arguments are built by [`ArgumentSet`] objects.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Argument<T: LabelType> {
    id: usize,
    label: T,
}

impl<T> Argument<T>
where
    T: LabelType,
{
    /// Returns the label of the argument.
    ///
    /// # Example
    ///
    /// ```
    /// # use dungsem::aa::{Argument, LabelType};
    /// fn describe_argument<T: LabelType>(a: &Argument<T>) {
    ///     println!("argument with id {} has the label {}", a.id(), a.label());
    /// }
    /// ```
    pub fn label(&self) -> &T {
        &self.label
    }

    /// Returns the id of the argument.
    pub fn id(&self) -> usize {
        self.id
    }
}

impl<T> Display for Argument<T>
where
    T: LabelType,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label)
    }
}

/// Handles the set of arguments of an AA framework.
///
/// Labels are interned to dense identifiers.
/// Arguments may be removed; the identifier of a removed argument is never given again,
/// even if an argument with the same label is added later.
#[derive(Debug)]
pub struct ArgumentSet<T>
where
    T: LabelType,
{
    arguments: Vec<Option<Argument<T>>>,
    label_to_id: HashMap<T, usize>,
    n_removed: usize,
}

impl<T> Default for ArgumentSet<T>
where
    T: LabelType,
{
    fn default() -> Self {
        Self {
            arguments: Vec::new(),
            label_to_id: HashMap::new(),
            n_removed: 0,
        }
    }
}

impl<T> ArgumentSet<T>
where
    T: LabelType,
{
    /// Builds a new argument set given the labels of the arguments.
    ///
    /// Each argument will be assigned an id equal to its index in the provided slice of argument labels.
    /// If a label appears multiple times, the first occurrence is the only one that is considered.
    ///
    /// # Example
    ///
    /// ```
    /// # use dungsem::aa::ArgumentSet;
    /// let labels = vec!["a", "b", "c"];
    /// let arguments = ArgumentSet::new_with_labels(&labels);
    /// assert_eq!(3, arguments.len());
    /// ```
    pub fn new_with_labels(labels: &[T]) -> Self {
        let mut argument_set = ArgumentSet {
            arguments: Vec::with_capacity(labels.len()),
            label_to_id: HashMap::with_capacity(labels.len()),
            n_removed: 0,
        };
        labels.iter().for_each(|l| {
            let _ = argument_set.new_argument(l.clone());
        });
        argument_set.arguments.shrink_to_fit();
        argument_set.label_to_id.shrink_to_fit();
        argument_set
    }

    /// Adds a new argument to this set and returns its id.
    ///
    /// The id of the new argument is the previous maximal id plus one.
    /// If an argument with the same label is already defined, a [FrameworkError::DuplicateArgument] is returned and the set is left unchanged.
    ///
    /// # Example
    ///
    /// ```
    /// # use dungsem::aa::ArgumentSet;
    /// let mut arguments = ArgumentSet::new_with_labels(&["a"]);
    /// assert_eq!(1, arguments.new_argument("b").unwrap());
    /// assert!(arguments.new_argument("b").is_err());
    /// ```
    pub fn new_argument(&mut self, label: T) -> Result<usize> {
        if self.label_to_id.contains_key(&label) {
            return Err(FrameworkError::DuplicateArgument(label.to_string()).into());
        }
        let id = self.arguments.len();
        self.label_to_id.insert(label.clone(), id);
        self.arguments.push(Some(Argument { id, label }));
        Ok(id)
    }

    /// Removes an argument from this set.
    ///
    /// The argument id will not be attributed to new arguments.
    pub fn remove_argument(&mut self, label: &T) -> Result<Argument<T>> {
        match self
            .label_to_id
            .remove(label)
            .and_then(|id| self.arguments[id].take())
        {
            Some(arg) => {
                self.n_removed += 1;
                Ok(arg)
            }
            None => Err(FrameworkError::UnknownArgument(label.to_string()).into()),
        }
    }

    /// Returns the number of arguments in the set.
    pub fn len(&self) -> usize {
        self.arguments.len() - self.n_removed
    }

    /// Returns the maximal argument id given so far, or `None` if no argument has been added yet.
    ///
    /// This id may refer to a removed argument.
    pub fn max_id(&self) -> Option<usize> {
        if self.arguments.is_empty() {
            None
        } else {
            Some(self.arguments.len() - 1)
        }
    }

    /// Returns the number of identifiers given so far, including the ones of removed arguments.
    ///
    /// All the identifiers are strictly lower than this bound.
    pub fn id_bound(&self) -> usize {
        self.arguments.len()
    }

    /// Returns `true` iff the set has no argument.
    pub fn is_empty(&self) -> bool {
        self.arguments.len() == self.n_removed
    }

    /// Returns the unique index associated to an argument label.
    ///
    /// If no such label exists, an error is returned.
    ///
    /// # Example
    ///
    /// ```
    /// # use dungsem::aa::ArgumentSet;
    /// let labels = vec!["a", "b", "c"];
    /// let arguments = ArgumentSet::new_with_labels(&labels);
    /// assert_eq!(0, arguments.get_argument_index(&labels[0]).unwrap());
    /// assert_eq!(2, arguments.get_argument_index(&labels[2]).unwrap());
    /// assert!(arguments.get_argument_index(&"d").is_err());
    /// ```
    pub fn get_argument_index(&self, label: &T) -> Result<usize> {
        self.label_to_id
            .get(label)
            .copied()
            .ok_or_else(|| FrameworkError::UnknownArgument(label.to_string()).into())
    }

    /// Returns the argument associated to an argument label.
    pub fn get_argument(&self, label: &T) -> Result<&Argument<T>> {
        self.label_to_id
            .get(label)
            .and_then(|i| self.arguments[*i].as_ref())
            .ok_or_else(|| FrameworkError::UnknownArgument(label.to_string()).into())
    }

    /// Returns the argument with the corresponding id.
    ///
    /// # Panics
    ///
    /// Panics if no argument has such id, or if it has been removed.
    pub fn get_argument_by_id(&self, id: usize) -> &Argument<T> {
        self.arguments[id].as_ref().unwrap()
    }

    /// Returns `true` iff an argument with the provided id exists and has not been removed.
    pub fn has_argument_with_id(&self, id: usize) -> bool {
        id < self.arguments.len() && self.arguments[id].is_some()
    }

    /// Returns an iterator to the arguments, in insertion order.
    ///
    /// # Example
    ///
    /// ```
    /// # use dungsem::aa::ArgumentSet;
    /// let labels = vec!["a", "b", "c"];
    /// let arguments = ArgumentSet::new_with_labels(&labels);
    /// assert_eq!(3, arguments.iter().count());
    /// ```
    pub fn iter(&self) -> impl Iterator<Item = &Argument<T>> + '_ {
        self.arguments.iter().filter_map(|o| o.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_with_labels() {
        let arg_labels = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        let args = ArgumentSet::new_with_labels(&arg_labels);
        assert_eq!(3, args.arguments.len());
        assert_eq!(3, args.label_to_id.len());
        assert_eq!(3, args.len());
        assert!(!args.is_empty());
        for (i, opt_a) in args.arguments.iter().enumerate() {
            let a = opt_a.as_ref().unwrap();
            assert_eq!(i, a.id);
            assert_eq!(arg_labels[i], a.label);
        }
    }

    #[test]
    fn test_new_with_empty_labels() {
        let args = ArgumentSet::new_with_labels(&[] as &[String]);
        assert_eq!(0, args.len());
        assert!(args.is_empty());
        assert!(args.max_id().is_none());
    }

    #[test]
    fn test_new_repeated_labels() {
        let arg_labels = vec!["a".to_string(), "b".to_string(), "a".to_string()];
        let args = ArgumentSet::new_with_labels(&arg_labels);
        assert_eq!(2, args.arguments.len());
    }

    #[test]
    fn test_duplicate_argument() {
        let mut args = ArgumentSet::new_with_labels(&["a".to_string()]);
        let err = args.new_argument("a".to_string()).unwrap_err();
        assert_eq!(
            Some(&FrameworkError::DuplicateArgument("a".to_string())),
            err.downcast_ref::<FrameworkError>()
        );
        assert_eq!(1, args.len());
    }

    #[test]
    fn test_iter_in_insertion_order() {
        let arg_labels = vec!["c".to_string(), "a".to_string(), "b".to_string()];
        let args = ArgumentSet::new_with_labels(&arg_labels);
        let iter_labels = args
            .iter()
            .map(|a| a.label().clone())
            .collect::<Vec<String>>();
        assert_eq!(arg_labels, iter_labels);
    }

    #[test]
    fn test_remove_then_add_gets_new_id() {
        let mut args = ArgumentSet::new_with_labels(&["a", "b"]);
        args.remove_argument(&"b").unwrap();
        assert_eq!(1, args.len());
        assert!(!args.has_argument_with_id(1));
        assert_eq!(2, args.new_argument("b").unwrap());
        assert_eq!(3, args.id_bound());
        assert_eq!(2, args.get_argument(&"b").unwrap().id());
    }

    #[test]
    #[should_panic(expected = "no such argument: c")]
    fn test_remove_nonexisting_argument() {
        let arg_labels = vec!["a".to_string(), "b".to_string()];
        let mut args = ArgumentSet::new_with_labels(&arg_labels);
        args.remove_argument(&"c".to_string()).unwrap();
    }
}
