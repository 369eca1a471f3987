use crate::aa::{AAFramework, ArgumentSet};
use anyhow::{anyhow, Context, Result};
use log::info;
use rand::{rngs::StdRng, Rng, SeedableRng};

/// A source of Bernoulli trials used to draw the attacks of random frameworks.
pub trait RandomSource {
    /// Returns `true` with probability `p`.
    fn gen_bool(&mut self, p: f64) -> bool;
}

impl RandomSource for StdRng {
    fn gen_bool(&mut self, p: f64) -> bool {
        Rng::gen_bool(self, p)
    }
}

/// Generates a random framework from a seed.
///
/// The framework has `size` arguments labelled `"0"` to `"size-1"`.
/// Each ordered pair of arguments `(src, dst)`, self-pairs included, is an attack with probability `attack_probability`;
/// the pairs are drawn in row-major order from a [StdRng] seeded by `seed`.
/// Calling this function twice with the same parameters yields the same framework.
///
/// An error is returned if the probability is not in `[0, 1]`.
///
/// ```
/// # use dungsem::generators::random_framework;
/// let af1 = random_framework(5, 0.3, 42).unwrap();
/// let af2 = random_framework(5, 0.3, 42).unwrap();
/// assert_eq!(af1.n_attacks(), af2.n_attacks());
/// assert!(random_framework(5, 1.5, 42).is_err());
/// ```
pub fn random_framework(
    size: usize,
    attack_probability: f64,
    seed: u64,
) -> Result<AAFramework<String>> {
    info!(
        "generating a random framework with {} arguments, attack probability {} and seed {}",
        size, attack_probability, seed
    );
    random_framework_with_source(
        size,
        attack_probability,
        &mut StdRng::seed_from_u64(seed),
    )
}

/// Generates a random framework, drawing the attacks from the given source.
///
/// See [random_framework] for more information.
pub fn random_framework_with_source(
    size: usize,
    attack_probability: f64,
    source: &mut dyn RandomSource,
) -> Result<AAFramework<String>> {
    if !(0. ..=1.).contains(&attack_probability) {
        return Err(anyhow!(
            "attack probability must be in [0, 1], got {}",
            attack_probability
        ));
    }
    let labels = (0..size).map(|i| i.to_string()).collect::<Vec<String>>();
    let mut af = AAFramework::new_with_argument_set(ArgumentSet::new_with_labels(&labels));
    for src in 0..size {
        for dst in 0..size {
            if source.gen_bool(attack_probability) {
                af.add_attack_by_ids(src, dst)
                    .context("while generating a random framework")?;
            }
        }
    }
    Ok(af)
}
