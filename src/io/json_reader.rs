use super::{InstanceReader, WarningHandler};
use crate::aa::{AAFramework, Argument, FrameworkError};
use anyhow::{Context, Result};
use log::info;
use serde::Deserialize;
use std::io::Read;

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct JsonFramework {
    arguments: Vec<JsonId>,
    attacks: Vec<Vec<JsonId>>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum JsonId {
    Text(String),
    Number(u64),
}

impl JsonId {
    fn into_label(self) -> String {
        match self {
            JsonId::Text(s) => s,
            JsonId::Number(n) => n.to_string(),
        }
    }
}

/// A reader for the JSON format written by [JsonWriter](super::JsonWriter).
///
/// Argument identifiers may be given as strings or as non-negative integers; integers are turned into their decimal representation.
/// The whole reading fails with a [FrameworkError::MalformedImport] error if the input does not follow the format
/// (unknown fields included), if an argument is defined twice, or if an attack is not a pair of declared arguments.
///
/// # Example
///
/// ```
/// # use dungsem::io::{InstanceReader, JsonReader};
/// let af = JsonReader::default()
///     .read(&mut r#"{"arguments": ["a", 1], "attacks": [["a", 1]]}"#.as_bytes())
///     .unwrap();
/// assert_eq!(2, af.n_arguments());
/// assert_eq!(1, af.n_attacks());
/// ```
#[derive(Default)]
pub struct JsonReader {
    warning_handlers: Vec<WarningHandler>,
}

fn malformed(message: String) -> FrameworkError {
    FrameworkError::MalformedImport(message)
}

impl InstanceReader<String> for JsonReader {
    fn read(&self, reader: &mut dyn Read) -> Result<AAFramework<String>> {
        let context = "while reading a JSON framework";
        let json: JsonFramework = serde_json::from_reader(reader)
            .map_err(|e| malformed(e.to_string()))
            .context(context)?;
        let mut af = AAFramework::default();
        for id in json.arguments {
            let label = id.into_label();
            if af.add_argument(label.clone()).is_err() {
                return Err(malformed(format!("argument {} is defined twice", label)))
                    .context(context);
            }
        }
        for (i, pair) in json.attacks.into_iter().enumerate() {
            let n = pair.len();
            let mut it = pair.into_iter();
            let (from, to) = match (it.next(), it.next()) {
                (Some(from), Some(to)) if n == 2 => (from.into_label(), to.into_label()),
                _ => {
                    return Err(malformed(format!(
                        "attack with index {} is not a pair of arguments",
                        i
                    )))
                    .context(context)
                }
            };
            let n_attacks = af.n_attacks();
            if af.add_attack(&from, &to).is_err() {
                return Err(malformed(format!(
                    "attack from {} to {} involves an undeclared argument",
                    from, to
                )))
                .context(context);
            }
            if af.n_attacks() == n_attacks {
                self.warning_handlers.iter().for_each(|h| {
                    (h)(i, format!("ignoring duplicate attack from {} to {}", from, to))
                });
            }
        }
        info!(
            "read a JSON framework with {} arguments and {} attacks",
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
