use super::FrameworkWriter;
use crate::aa::{AAFramework, LabelType};
use anyhow::{Context, Result};
use log::warn;
use std::io::Write;

/// A writer for the Trivial Graph Format (TGF).
///
/// Each argument is written on its own line, as a node whose identifier and label are the argument label.
/// A `#` line follows, and then the attacks, one per line, in insertion order.
/// See [TgfReader](super::TgfReader) for more information on the format.
///
/// # Example
///
/// ```
/// # use dungsem::aa::{AAFramework, ArgumentSet};
/// # use dungsem::io::{FrameworkWriter, TgfWriter};
/// let mut af = AAFramework::new_with_argument_set(ArgumentSet::new_with_labels(&["a", "b"]));
/// af.add_attack(&"a", &"b").unwrap();
/// let mut buffer: Vec<u8> = Vec::new();
/// TgfWriter::default().write_framework(&af, &mut buffer).unwrap();
/// assert_eq!("a a\nb b\n#\na b\n", String::from_utf8(buffer).unwrap());
/// ```
#[derive(Default)]
pub struct TgfWriter;

impl<T> FrameworkWriter<T> for TgfWriter
where
    T: LabelType,
{
    fn write_framework(&self, framework: &AAFramework<T>, writer: &mut dyn Write) -> Result<()> {
        let context = "while writing a TGF framework";
        for arg in framework.argument_set().iter() {
            let label = arg.label().to_string();
            if label.contains(char::is_whitespace) {
                warn!(
                    "argument \"{}\" contains whitespaces; the TGF output will be ambiguous",
                    label
                );
            }
            writeln!(writer, "{} {}", label, label).context(context)?;
        }
        writeln!(writer, "#").context(context)?;
        for attack in framework.iter_attacks() {
            writeln!(writer, "{} {}", attack.attacker(), attack.attacked()).context(context)?;
        }
        writer.flush().context(context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        aa::ArgumentSet,
        io::{InstanceReader, TgfReader},
    };

    #[test]
    fn test_write_then_read() {
        let arg_names = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        let mut framework =
            AAFramework::new_with_argument_set(ArgumentSet::new_with_labels(&arg_names));
        framework.add_attack(&arg_names[0], &arg_names[0]).unwrap();
        framework.add_attack(&arg_names[1], &arg_names[2]).unwrap();
        let mut buffer: Vec<u8> = Vec::new();
        TgfWriter.write_framework(&framework, &mut buffer).unwrap();
        assert_eq!(
            "a a\nb b\nc c\n#\na a\nb c\n",
            String::from_utf8(buffer.clone()).unwrap()
        );
        let read = TgfReader::default().read(&mut buffer.as_slice()).unwrap();
        assert_eq!(3, read.n_arguments());
        assert!(read.has_attack_by_ids(1, 2));
    }

    #[test]
    fn test_write_empty() {
        let mut buffer: Vec<u8> = Vec::new();
        TgfWriter
            .write_framework(&AAFramework::<String>::default(), &mut buffer)
            .unwrap();
        assert_eq!("#\n", String::from_utf8(buffer).unwrap());
    }
}
