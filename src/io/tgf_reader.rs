use super::{InstanceReader, WarningHandler};
use crate::aa::{AAFramework, Argument, FrameworkError};
use anyhow::{Context, Result};
use lazy_static::lazy_static;
use log::info;
use regex::Regex;
use std::io::{BufRead, BufReader, Read};

lazy_static! {
    static ref NODE_LINE_PATTERN: Regex = Regex::new(r"^\s*(\S+)(?:\s+(.*?))?\s*$").unwrap();
    static ref EDGE_LINE_PATTERN: Regex =
        Regex::new(r"^\s*(\S+)\s+(\S+)(?:\s+(.*?))?\s*$").unwrap();
    static ref SEPARATOR_LINE_PATTERN: Regex = Regex::new(r"^\s*#\s*$").unwrap();
}

/// A reader for the Trivial Graph Format (TGF).
///
/// This object is used to read an [`AAFramework`] encoded using the TGF format.
/// The [LabelType](crate::aa::LabelType) of the returned argument frameworks is [String].
///
/// # TGF format
///
/// A TGF file begins with a list of nodes, one per line, made of an identifier optionally followed by a label.
/// A line containing a single `#` follows, and then the list of edges, one per line, made of two node identifiers
/// optionally followed by a label.
/// Arguments are identified by the node identifiers; node and edge labels are ignored.
///
/// The following content defines an Argumentation Framework with three arguments `a`, `b` and `c` and three attacks (`a` and `b` attack each other and `c` attacks `b`).
///
/// ```text
/// a a
/// b b
/// c c
/// #
/// a b
/// b a
/// c b
/// ```
///
/// Empty lines are ignored.
/// Any syntax error, duplicate argument or unknown attack endpoint makes the whole reading fail with a [FrameworkError::MalformedImport] error.
///
/// # Example
///
/// ```
/// # use dungsem::aa::AAFramework;
/// # use dungsem::io::{TgfReader, InstanceReader};
/// fn read_af_from_str(s: &str) -> AAFramework<String> {
///     let reader = TgfReader::default();
///     reader.read(&mut s.as_bytes()).expect("invalid TGF AF")
/// }
/// # read_af_from_str("a a\nb b\n#\na b\n");
/// ```
#[derive(Default)]
pub struct TgfReader {
    warning_handlers: Vec<WarningHandler>,
}

impl TgfReader {
    fn warn(&self, line: usize, message: String) {
        self.warning_handlers
            .iter()
            .for_each(|h| (h)(line, message.clone()));
    }
}

fn malformed(message: String) -> FrameworkError {
    FrameworkError::MalformedImport(message)
}

impl InstanceReader<String> for TgfReader {
    fn read(&self, reader: &mut dyn Read) -> Result<AAFramework<String>> {
        let mut af = AAFramework::default();
        let mut in_edges = false;
        let br = BufReader::new(reader);
        for (i, line) in br.lines().enumerate() {
            let context = || format!("while reading TGF line with index {}", i);
            let l = &line.with_context(context)?;
            if l.trim().is_empty() {
                continue;
            }
            if SEPARATOR_LINE_PATTERN.is_match(l) {
                if in_edges {
                    return Err(malformed("multiple separator lines".to_string()))
                        .with_context(context);
                }
                in_edges = true;
                continue;
            }
            if in_edges {
                let c = EDGE_LINE_PATTERN
                    .captures(l)
                    .ok_or_else(|| malformed(format!("expected an edge, got \"{}\"", l.trim())))
                    .with_context(context)?;
                if let Some(label) = c.get(3) {
                    self.warn(1 + i, format!("ignoring edge label \"{}\"", label.as_str()));
                }
                let (from, to) = (c[1].to_string(), c[2].to_string());
                if af.add_attack(&from, &to).is_err() {
                    return Err(malformed(format!(
                        "attack from {} to {} involves an undeclared argument",
                        from, to
                    )))
                    .with_context(context);
                }
            } else {
                let c = NODE_LINE_PATTERN
                    .captures(l)
                    .ok_or_else(|| malformed(format!("expected a node, got \"{}\"", l.trim())))
                    .with_context(context)?;
                let id = c[1].to_string();
                if let Some(label) = c.get(2).filter(|m| m.as_str() != id) {
                    self.warn(
                        1 + i,
                        format!("ignoring label \"{}\" of node {}", label.as_str(), id),
                    );
                }
                if af.add_argument(id.clone()).is_err() {
                    return Err(malformed(format!("argument {} is defined twice", id)))
                        .with_context(context);
                }
            }
        }
        info!(
            "read a TGF framework with {} arguments and {} attacks",
            af.n_arguments(),
            af.n_attacks()
        );
        Ok(af)
    }

    fn read_arg_from_str<'a>(
        &self,
        af: &'a AAFramework<String>,
        arg: &str,
    ) -> Result<&'a Argument<String>> {
        af.argument_set().get_argument(&arg.to_string())
    }

    fn add_warning_handler(&mut self, h: WarningHandler) {
        self.warning_handlers.push(h);
    }
}
