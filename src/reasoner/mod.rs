//! A stateful entry point gathering a framework and the computations made on it.

mod extension_cache;
use extension_cache::{CacheKey, ExtensionCache};

use crate::{
    aa::{AAFramework, Semantics},
    analysis::{FrameworkProperties, PropertyAnalyzer, SemanticsRelationships},
    solvers::{Enumeration, EnumerationLimits, SelfAttackPolicy, SemanticsEngine},
    utils::ArgSet,
};
use anyhow::Result;
use std::cell::RefCell;

/// A framework together with the parameters of the semantics and a cache of the computed extensions.
///
/// The extensions are computed on demand, and kept until the framework, the self-attack policy or the enumeration limits change.
/// Each structural modification of the framework increases its [revision](AAFramework::revision),
/// so cached extensions are never returned for an outdated framework.
///
/// Extensions are returned as lists of argument labels, sorted by argument ids
/// (that is, in the order the arguments were added).
///
/// # Example
///
/// ```
/// # use dungsem::reasoner::Reasoner;
/// let mut reasoner = Reasoner::default();
/// reasoner.add_argument("a").unwrap();
/// reasoner.add_argument("b").unwrap();
/// reasoner.add_attack("a", "b").unwrap();
/// assert_eq!(vec!["a"], reasoner.get_grounded_extension());
/// reasoner.add_attack("b", "a").unwrap();
/// assert!(reasoner.get_grounded_extension().is_empty());
/// assert_eq!(2, reasoner.get_preferred_extensions().len());
/// ```
#[derive(Default)]
pub struct Reasoner {
    af: AAFramework<String>,
    policy: SelfAttackPolicy,
    limits: EnumerationLimits,
    cache: RefCell<ExtensionCache>,
}

impl Reasoner {
    /// Builds a reasoner for an existing framework, using the given self-attack policy.
    pub fn new(af: AAFramework<String>, policy: SelfAttackPolicy) -> Self {
        Self {
            af,
            policy,
            ..Default::default()
        }
    }

    /// Sets the limits applied to the enumerations of extensions.
    pub fn with_limits(mut self, limits: EnumerationLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Returns the underlying framework.
    pub fn framework(&self) -> &AAFramework<String> {
        &self.af
    }

    /// Returns the self-attack policy in use.
    pub fn policy(&self) -> SelfAttackPolicy {
        self.policy
    }

    /// Changes the self-attack policy.
    pub fn set_policy(&mut self, policy: SelfAttackPolicy) {
        self.policy = policy;
    }

    /// Returns the enumeration limits in use.
    pub fn limits(&self) -> EnumerationLimits {
        self.limits
    }

    /// Changes the enumeration limits.
    pub fn set_limits(&mut self, limits: EnumerationLimits) {
        self.limits = limits;
    }

    /// Adds an argument.
    ///
    /// An error is returned if an argument with the same label exists.
    pub fn add_argument(&mut self, label: &str) -> Result<()> {
        self.af.add_argument(label.to_string()).map(|_| ())
    }

    /// Adds an attack.
    ///
    /// An error is returned if one of the arguments does not exist.
    /// Adding an existing attack has no effect.
    pub fn add_attack(&mut self, from: &str, to: &str) -> Result<()> {
        self.af.add_attack(&from.to_string(), &to.to_string())
    }

    /// Removes an argument and the attacks it is involved in.
    pub fn remove_argument(&mut self, label: &str) -> Result<()> {
        self.af.remove_argument(&label.to_string())
    }

    /// Removes an attack.
    pub fn remove_attack(&mut self, from: &str, to: &str) -> Result<()> {
        self.af.remove_attack(&from.to_string(), &to.to_string())
    }

    fn enumeration(&self, semantics: Semantics) -> Enumeration<ArgSet> {
        let key = CacheKey {
            revision: self.af.revision(),
            policy: self.policy,
            limits: self.limits,
        };
        self.cache.borrow_mut().get_or_compute(key, semantics, || {
            SemanticsEngine::new(&self.af, self.policy).extensions(semantics, self.limits)
        })
    }

    fn labels_of(&self, set: &ArgSet) -> Vec<String> {
        set.iter()
            .map(|id| {
                self.af
                    .argument_set()
                    .get_argument_by_id(id)
                    .label()
                    .clone()
            })
            .collect()
    }

    fn labelled_enumeration(&self, semantics: Semantics) -> Enumeration<Vec<String>> {
        self.enumeration(semantics).map(|ext| self.labels_of(&ext))
    }

    /// Returns the grounded extension.
    pub fn get_grounded_extension(&self) -> Vec<String> {
        self.labelled_enumeration(Semantics::GR)
            .into_extensions()
            .into_iter()
            .next()
            .unwrap_or_default()
    }

    /// Returns the complete extensions.
    pub fn get_complete_extensions(&self) -> Enumeration<Vec<String>> {
        self.labelled_enumeration(Semantics::CO)
    }

    /// Returns the preferred extensions.
    pub fn get_preferred_extensions(&self) -> Enumeration<Vec<String>> {
        self.labelled_enumeration(Semantics::PR)
    }

    /// Returns the stable extensions.
    pub fn get_stable_extensions(&self) -> Enumeration<Vec<String>> {
        self.labelled_enumeration(Semantics::ST)
    }

    /// Returns the structural properties of the framework.
    pub fn get_framework_properties(&self) -> FrameworkProperties {
        PropertyAnalyzer::new(&self.af).properties()
    }

    /// Returns the relationships between the extensions of the four semantics.
    pub fn get_semantics_relationships(&self) -> SemanticsRelationships {
        let grounded = self.enumeration(Semantics::GR);
        let empty = ArgSet::with_width(self.af.argument_set().id_bound());
        SemanticsRelationships::from_extensions(
            grounded.extensions().first().unwrap_or(&empty),
            &self.enumeration(Semantics::CO),
            &self.enumeration(Semantics::PR),
            &self.enumeration(Semantics::ST),
        )
    }

    /// Returns the number of cache hits and misses since the creation of the reasoner.
    pub fn cache_statistics(&self) -> (usize, usize) {
        let cache = self.cache.borrow();
        (cache.n_hits(), cache.n_misses())
    }
}
