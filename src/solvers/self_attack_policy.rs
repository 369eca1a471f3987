use serde::Serialize;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// The way self-attacking arguments are handled by the semantics.
///
/// In both policies, a self-attacking argument is never accepted,
/// and it is rejected only if it is attacked by an accepted argument.
/// The policies differ on the attacks a self-attacking argument emits toward other arguments.
///
/// With the [Classical](SelfAttackPolicy::Classical) policy, these attacks count as any other attack:
/// they must be countered for their targets to be defended.
///
/// With the [Enhanced](SelfAttackPolicy::Enhanced) policy, these attacks are ignored when the defense of their targets is evaluated,
/// since an internally inconsistent argument cannot project a successful attack.
/// This amounts to applying the classical semantics to the framework in which the attacks from self-attacking arguments
/// to other arguments have been removed.
///
/// ```
/// # use dungsem::solvers::SelfAttackPolicy;
/// # use std::str::FromStr;
/// assert_eq!(SelfAttackPolicy::Enhanced, SelfAttackPolicy::from_str("enhanced").unwrap());
/// assert_eq!(SelfAttackPolicy::Classical, SelfAttackPolicy::default());
/// ```
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    AsRefStr,
    EnumIter,
    EnumString,
    Serialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum SelfAttackPolicy {
    /// Textbook Dung semantics.
    #[default]
    Classical,
    /// Attacks from self-attacking arguments to other arguments are neutralized.
    Enhanced,
}

impl SelfAttackPolicy {
    /// Returns `true` iff an attack must be taken into account when evaluating the status of the attacked argument.
    ///
    /// The `attacker_is_self_attacking` parameter tells if the attacker attacks itself.
    pub fn is_effective(
        &self,
        attacker: usize,
        attacked: usize,
        attacker_is_self_attacking: bool,
    ) -> bool {
        match self {
            SelfAttackPolicy::Classical => true,
            SelfAttackPolicy::Enhanced => attacker == attacked || !attacker_is_self_attacking,
        }
    }
}
