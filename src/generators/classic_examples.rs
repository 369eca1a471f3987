use crate::aa::{AAFramework, ArgumentSet};
use anyhow::{anyhow, Context, Result};

type Fixture = (&'static str, &'static [&'static str], &'static [(&'static str, &'static str)]);

const FIXTURES: &[Fixture] = &[
    ("triangle", &["A", "B", "C"], &[("A", "B"), ("B", "C"), ("C", "A")]),
    ("self_defending", &["A", "B"], &[("A", "B"), ("B", "A")]),
    (
        "nixon_diamond",
        &["quaker", "republican", "pacifist", "hawk"],
        &[
            ("quaker", "republican"),
            ("republican", "quaker"),
            ("pacifist", "hawk"),
            ("hawk", "pacifist"),
            ("quaker", "hawk"),
            ("republican", "pacifist"),
        ],
    ),
    (
        "self_attacking",
        &["contradiction", "conclusion"],
        &[
            ("contradiction", "contradiction"),
            ("contradiction", "conclusion"),
        ],
    ),
    ("reinstatement", &["a", "b", "c"], &[("a", "b"), ("b", "c")]),
];

fn build(labels: &[&str], attacks: &[(&str, &str)]) -> Result<AAFramework<String>> {
    let labels = labels.iter().map(|l| l.to_string()).collect::<Vec<String>>();
    let mut af = AAFramework::new_with_argument_set(ArgumentSet::new_with_labels(&labels));
    for (from, to) in attacks {
        af.add_attack(&from.to_string(), &to.to_string())?;
    }
    Ok(af)
}

/// Returns the canonical frameworks, with their names.
///
/// The fixtures are given in this order:
///   * `triangle`: an odd cycle `A -> B -> C -> A`;
///   * `self_defending`: two arguments attacking each other;
///   * `nixon_diamond`: two mutual attacks (`quaker`/`republican` and `pacifist`/`hawk`) linked by `quaker -> hawk` and `republican -> pacifist`;
///   * `self_attacking`: a self-attacking `contradiction` attacking a `conclusion`;
///   * `reinstatement`: a chain `a -> b -> c` in which `a` reinstates `c`.
///
/// ```
/// # use dungsem::generators::classic_examples;
/// let names = classic_examples().unwrap().into_iter().map(|(n, _)| n).collect::<Vec<&str>>();
/// assert_eq!(vec!["triangle", "self_defending", "nixon_diamond", "self_attacking", "reinstatement"], names);
/// ```
pub fn classic_examples() -> Result<Vec<(&'static str, AAFramework<String>)>> {
    FIXTURES
        .iter()
        .map(|(name, labels, attacks)| {
            build(labels, attacks)
                .with_context(|| format!("while building the {} example", name))
                .map(|af| (*name, af))
        })
        .collect()
}

/// Returns the canonical framework with the given name (see [classic_examples]).
pub fn classic_example(name: &str) -> Result<AAFramework<String>> {
    let (_, labels, attacks) = FIXTURES
        .iter()
        .find(|(n, _, _)| *n == name)
        .ok_or_else(|| {
            anyhow!(
                "no such example: {} (available: {})",
                name,
                classic_example_names().join(", ")
            )
        })?;
    build(labels, attacks)
}

/// Returns the names of the canonical frameworks.
pub fn classic_example_names() -> Vec<&'static str> {
    FIXTURES.iter().map(|(n, _, _)| *n).collect()
}
