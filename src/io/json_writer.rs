use super::FrameworkWriter;
use crate::aa::{AAFramework, LabelType};
use anyhow::{Context, Result};
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
struct JsonFramework {
    arguments: Vec<String>,
    attacks: Vec<(String, String)>,
}

impl JsonFramework {
    fn from_framework<T: LabelType>(framework: &AAFramework<T>) -> Self {
        Self {
            arguments: framework
                .argument_set()
                .iter()
                .map(|a| a.to_string())
                .collect(),
            attacks: framework
                .iter_attacks()
                .map(|att| (att.attacker().to_string(), att.attacked().to_string()))
                .collect(),
        }
    }
}

/// A writer for the JSON format.
///
/// Frameworks are written as a JSON object with two fields:
/// `arguments`, the list of the argument labels, and `attacks`, the list of the attacks given as `[attacker, attacked]` pairs.
/// Both lists follow the insertion order.
///
/// # Example
///
/// ```
/// # use dungsem::aa::{AAFramework, ArgumentSet};
/// # use dungsem::io::{FrameworkWriter, JsonWriter};
/// let mut af = AAFramework::new_with_argument_set(ArgumentSet::new_with_labels(&["a", "b"]));
/// af.add_attack(&"a", &"b").unwrap();
/// let mut buffer: Vec<u8> = Vec::new();
/// JsonWriter::default().write_framework(&af, &mut buffer).unwrap();
/// assert_eq!(r#"{"arguments":["a","b"],"attacks":[["a","b"]]}"#, String::from_utf8(buffer).unwrap());
/// ```
#[derive(Default)]
pub struct JsonWriter {
    pretty: bool,
}

impl JsonWriter {
    /// Builds a writer producing indented JSON.
    pub fn new_pretty() -> Self {
        Self { pretty: true }
    }
}

impl<T> FrameworkWriter<T> for JsonWriter
where
    T: LabelType,
{
    fn write_framework(&self, framework: &AAFramework<T>, writer: &mut dyn Write) -> Result<()> {
        let context = "while writing a JSON framework";
        let json = JsonFramework::from_framework(framework);
        if self.pretty {
            serde_json::to_writer_pretty(&mut *writer, &json).context(context)?;
            writeln!(writer).context(context)?;
        } else {
            serde_json::to_writer(&mut *writer, &json).context(context)?;
        }
        writer.flush().context(context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aa::ArgumentSet;

    #[test]
    fn test_pretty() {
        let mut af = AAFramework::new_with_argument_set(ArgumentSet::new_with_labels(&["a"]));
        af.add_attack(&"a", &"a").unwrap();
        let mut buffer: Vec<u8> = Vec::new();
        JsonWriter::new_pretty()
            .write_framework(&af, &mut buffer)
            .unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(
            serde_json::json!({"arguments": ["a"], "attacks": [["a", "a"]]}),
            value
        );
        assert!(String::from_utf8(buffer).unwrap().ends_with("}\n"));
    }
}
