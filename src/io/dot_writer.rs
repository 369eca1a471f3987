use super::FrameworkWriter;
use crate::aa::{AAFramework, LabelType};
use anyhow::{Context, Result};
use std::io::Write;

/// A writer for the Graphviz DOT format.
///
/// Arguments are written as quoted node identifiers, and attacks as directed edges, in insertion order.
/// Double quotes and backslashes in argument labels are escaped.
///
/// # Example
///
/// ```
/// # use dungsem::aa::{AAFramework, ArgumentSet};
/// # use dungsem::io::{DotWriter, FrameworkWriter};
/// let mut af = AAFramework::new_with_argument_set(ArgumentSet::new_with_labels(&["a", "b"]));
/// af.add_attack(&"a", &"b").unwrap();
/// let mut buffer: Vec<u8> = Vec::new();
/// DotWriter::default().write_framework(&af, &mut buffer).unwrap();
/// assert_eq!(
///     "digraph {\n    \"a\";\n    \"b\";\n    \"a\" -> \"b\";\n}\n",
///     String::from_utf8(buffer).unwrap()
/// );
/// ```
#[derive(Default)]
pub struct DotWriter;

fn escape(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

impl<T> FrameworkWriter<T> for DotWriter
where
    T: LabelType,
{
    fn write_framework(&self, framework: &AAFramework<T>, writer: &mut dyn Write) -> Result<()> {
        let context = "while writing a DOT framework";
        writeln!(writer, "digraph {{").context(context)?;
        for arg in framework.argument_set().iter() {
            writeln!(writer, "    \"{}\";", escape(&arg.to_string())).context(context)?;
        }
        for attack in framework.iter_attacks() {
            writeln!(
                writer,
                "    \"{}\" -> \"{}\";",
                escape(&attack.attacker().to_string()),
                escape(&attack.attacked().to_string())
            )
            .context(context)?;
        }
        writeln!(writer, "}}").context(context)?;
        writer.flush().context(context)
    }
}
