use std::{
    cmp::Ordering,
    hash::{Hash, Hasher},
};

const WORD_BITS: usize = 64;

/// A fixed-width set of argument ids, stored as a bitset.
///
/// The width is given at construction time, usually as the id bound of a framework
/// (see [ArgumentSet::id_bound](crate::aa::ArgumentSet::id_bound)).
/// Membership tests are O(1), while inclusion and intersection tests process 64 ids at once.
///
/// Sets are ordered by the lexicographic order of their ascending id sequences:
/// `{} < {0} < {0, 1} < {1}`.
/// Equality, hashing and ordering only depend on the ids, not on the width.
///
/// # Example
///
/// ```
/// # use dungsem::utils::ArgSet;
/// let mut s = ArgSet::with_width(100);
/// s.insert(3);
/// s.insert(70);
/// assert!(s.contains(70));
/// assert_eq!(vec![3, 70], s.iter().collect::<Vec<usize>>());
/// ```
#[derive(Clone, Debug)]
pub struct ArgSet {
    words: Vec<u64>,
    width: usize,
}

impl ArgSet {
    /// Builds an empty set able to contain the ids in `0..width`.
    pub fn with_width(width: usize) -> Self {
        Self {
            words: vec![0; (width + WORD_BITS - 1) / WORD_BITS],
            width,
        }
    }

    /// Builds a set of the given width from a sequence of ids.
    ///
    /// # Panics
    ///
    /// Panics if an id is not lower than the width.
    pub fn from_ids<I>(width: usize, ids: I) -> Self
    where
        I: IntoIterator<Item = usize>,
    {
        let mut set = Self::with_width(width);
        ids.into_iter().for_each(|id| set.insert(id));
        set
    }

    /// Returns the width of the set.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Adds an id to the set.
    ///
    /// # Panics
    ///
    /// Panics if the id is not lower than the width.
    pub fn insert(&mut self, id: usize) {
        assert!(id < self.width, "id {} out of set width {}", id, self.width);
        self.words[id / WORD_BITS] |= 1 << (id % WORD_BITS);
    }

    /// Removes an id from the set.
    pub fn remove(&mut self, id: usize) {
        if id < self.width {
            self.words[id / WORD_BITS] &= !(1 << (id % WORD_BITS));
        }
    }

    /// Returns `true` iff the id belongs to the set.
    pub fn contains(&self, id: usize) -> bool {
        id < self.width && self.words[id / WORD_BITS] & (1 << (id % WORD_BITS)) != 0
    }

    /// Returns the number of ids in the set.
    pub fn len(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Returns `true` iff the set has no id.
    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|w| *w == 0)
    }

    fn word(&self, i: usize) -> u64 {
        self.words.get(i).copied().unwrap_or(0)
    }

    /// Returns `true` iff every id of this set belongs to the other one.
    pub fn is_subset(&self, other: &ArgSet) -> bool {
        self.words
            .iter()
            .enumerate()
            .all(|(i, w)| w & !other.word(i) == 0)
    }

    /// Returns `true` iff this set is a subset of the other one and they differ.
    pub fn is_strict_subset(&self, other: &ArgSet) -> bool {
        self.is_subset(other) && self.len() < other.len()
    }

    /// Returns `true` iff the two sets share at least one id.
    pub fn intersects(&self, other: &ArgSet) -> bool {
        self.words
            .iter()
            .enumerate()
            .any(|(i, w)| w & other.word(i) != 0)
    }

    /// Adds all the ids of the other set to this one.
    pub fn union_with(&mut self, other: &ArgSet) {
        self.words
            .iter_mut()
            .enumerate()
            .for_each(|(i, w)| *w |= other.word(i));
    }

    /// Iterates over the ids of the set, in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.words.iter().enumerate().flat_map(|(i, w)| {
            let mut word = *w;
            std::iter::from_fn(move || {
                if word == 0 {
                    None
                } else {
                    let bit = word.trailing_zeros() as usize;
                    word &= word - 1;
                    Some(i * WORD_BITS + bit)
                }
            })
        })
    }
}

impl PartialEq for ArgSet {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl Eq for ArgSet {}

impl Hash for ArgSet {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.iter().for_each(|id| id.hash(state));
        self.len().hash(state);
    }
}

impl PartialOrd for ArgSet {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ArgSet {
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_remove() {
        let mut s = ArgSet::with_width(130);
        assert!(s.is_empty());
        s.insert(0);
        s.insert(64);
        s.insert(129);
        assert_eq!(3, s.len());
        assert!(s.contains(64));
        assert!(!s.contains(63));
        assert!(!s.contains(1000));
        s.remove(64);
        assert!(!s.contains(64));
        assert_eq!(vec![0, 129], s.iter().collect::<Vec<usize>>());
    }

    #[test]
    #[should_panic(expected = "out of set width")]
    fn test_insert_out_of_width() {
        ArgSet::with_width(3).insert(3);
    }

    #[test]
    fn test_zero_width() {
        let s = ArgSet::with_width(0);
        assert!(s.is_empty());
        assert_eq!(0, s.iter().count());
        assert!(s.is_subset(&ArgSet::with_width(0)));
    }

    #[test]
    fn test_subset() {
        let a = ArgSet::from_ids(70, [1, 65]);
        let b = ArgSet::from_ids(70, [1, 2, 65]);
        assert!(a.is_subset(&b));
        assert!(a.is_strict_subset(&b));
        assert!(!b.is_subset(&a));
        assert!(a.is_subset(&a));
        assert!(!a.is_strict_subset(&a));
        assert!(a.intersects(&b));
        assert!(!a.intersects(&ArgSet::from_ids(70, [2])));
    }

    #[test]
    fn test_union() {
        let mut a = ArgSet::from_ids(10, [1]);
        a.union_with(&ArgSet::from_ids(10, [3, 1]));
        assert_eq!(vec![1, 3], a.iter().collect::<Vec<usize>>());
    }

    #[test]
    fn test_order() {
        let mut sets = vec![
            ArgSet::from_ids(3, [1]),
            ArgSet::from_ids(3, [0, 1]),
            ArgSet::with_width(3),
            ArgSet::from_ids(3, [0]),
        ];
        sets.sort();
        assert_eq!(
            vec![vec![], vec![0], vec![0, 1], vec![1]],
            sets.iter()
                .map(|s| s.iter().collect::<Vec<usize>>())
                .collect::<Vec<Vec<usize>>>()
        );
    }

    #[test]
    fn test_width_does_not_matter() {
        let narrow = ArgSet::from_ids(3, [0]);
        let wide = ArgSet::from_ids(130, [0]);
        assert_eq!(Ordering::Equal, narrow.cmp(&wide));
        assert_eq!(narrow, wide);
        let hashed = |s: &ArgSet| {
            let mut hasher = std::collections::hash_map::DefaultHasher::new();
            s.hash(&mut hasher);
            hasher.finish()
        };
        assert_eq!(hashed(&narrow), hashed(&wide));
        assert_ne!(narrow, ArgSet::from_ids(130, [0, 64]));
        assert!(ArgSet::with_width(0) < ArgSet::from_ids(1, [0]));
    }
}
