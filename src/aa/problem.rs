use anyhow::{anyhow, Context, Result};
use serde::Serialize;
use std::str::FromStr;
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// The semantics associated with a problem.
///
/// Semantics are read and displayed using the two letters used in ICCMA competitions,
/// or their full name (case insensitive).
///
/// ```
/// # use dungsem::aa::Semantics;
/// # use std::str::FromStr;
/// assert_eq!(Semantics::PR, Semantics::from_str("pr").unwrap());
/// assert_eq!(Semantics::PR, Semantics::from_str("Preferred").unwrap());
/// assert_eq!("PR", Semantics::PR.to_string());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr, EnumIter, EnumString, Serialize,
)]
#[strum(ascii_case_insensitive)]
pub enum Semantics {
    /// The grounded semantics
    #[strum(to_string = "GR", serialize = "grounded")]
    GR,
    /// The complete semantics
    #[strum(to_string = "CO", serialize = "complete")]
    CO,
    /// The preferred semantics
    #[strum(to_string = "PR", serialize = "preferred")]
    PR,
    /// The stable semantics
    #[strum(to_string = "ST", serialize = "stable")]
    ST,
}

impl Semantics {
    /// Returns the full, lower case, name of the semantics.
    pub fn full_name(&self) -> &'static str {
        match self {
            Semantics::GR => "grounded",
            Semantics::CO => "complete",
            Semantics::PR => "preferred",
            Semantics::ST => "stable",
        }
    }
}

/// The query to compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr, EnumIter, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum Query {
    /// Enumerate all the extensions
    EE,
    /// Compute a single extension
    SE,
    /// Check credulous acceptance
    DC,
    /// Check skeptical acceptance
    DS,
}

/// Reads a string depicting a problem with an XX-YY pattern.
///
/// The string is split at the first hyphen found in it.
/// The substring before this hyphen is considered as the query, while the substring after it is considered as the semantics.
///
/// In case there is no hyphen, an error is returned.
///
/// ```
/// # use dungsem::aa::{read_problem_string, Query, Semantics};
/// assert_eq!((Query::EE, Semantics::ST), read_problem_string("EE-ST").unwrap());
/// ```
pub fn read_problem_string(problem: &str) -> Result<(Query, Semantics)> {
    let context = || format!(r#"while parsing problem string "{}""#, problem);
    match problem.find('-') {
        Some(n) => {
            let query = Query::from_str(&problem[0..n])
                .map_err(|_| anyhow!(r#"undefined query "{}""#, &problem[0..n]))
                .with_context(context)?;
            let semantics = Semantics::from_str(&problem[1 + n..])
                .map_err(|_| anyhow!(r#"undefined semantics "{}""#, &problem[1 + n..]))
                .with_context(context)?;
            Ok((query, semantics))
        }
        None => Err(anyhow!("no hyphen in problem string")).with_context(context),
    }
}

/// Iterates over the problem strings handled by the library, like `EE-PR` or `DC-ST`.
pub fn iter_problem_strings() -> impl Iterator<Item = String> {
    Query::iter().flat_map(|q| Semantics::iter().map(move |s| format!("{}-{}", q, s)))
}
