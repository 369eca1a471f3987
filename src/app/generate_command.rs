use super::{cli_manager, command::Command, common};
use anyhow::{anyhow, Context, Result};
use clap::{App, AppSettings, Arg, ArgGroup, ArgMatches, SubCommand};
use dungsem::{generators, io};
use std::{path::Path, str::FromStr};

const CMD_NAME: &str = "generate";

const ARG_CLASSIC: &str = "CLASSIC";
const ARG_RANDOM: &str = "RANDOM";
const ARG_PROBABILITY: &str = "PROBABILITY";
const ARG_SEED: &str = "SEED";
const ARG_WRITER: &str = "WRITER";

pub(crate) struct GenerateCommand;

impl GenerateCommand {
    pub(crate) fn new() -> Self {
        GenerateCommand
    }
}

impl<'a> Command<'a> for GenerateCommand {
    fn name(&self) -> &str {
        CMD_NAME
    }

    fn clap_subcommand(&self) -> App<'a, 'a> {
        SubCommand::with_name(CMD_NAME)
            .about("Generates a classic or a random AF")
            .setting(AppSettings::DisableVersion)
            .arg(
                Arg::with_name(ARG_CLASSIC)
                    .long("classic")
                    .empty_values(false)
                    .multiple(false)
                    .help("the name of a classic example (triangle, self_defending, nixon_diamond, self_attacking, reinstatement)"),
            )
            .arg(
                Arg::with_name(ARG_RANDOM)
                    .long("random")
                    .empty_values(false)
                    .multiple(false)
                    .requires_all(&[ARG_PROBABILITY, ARG_SEED])
                    .help("the number of arguments of a random AF"),
            )
            .arg(
                Arg::with_name(ARG_PROBABILITY)
                    .long("probability")
                    .empty_values(false)
                    .multiple(false)
                    .requires(ARG_RANDOM)
                    .help("the probability of each attack of a random AF"),
            )
            .arg(
                Arg::with_name(ARG_SEED)
                    .long("seed")
                    .empty_values(false)
                    .multiple(false)
                    .requires(ARG_RANDOM)
                    .help("the seed of a random AF"),
            )
            .group(
                ArgGroup::with_name("GENERATOR")
                    .args(&[ARG_CLASSIC, ARG_RANDOM])
                    .required(true),
            )
            .arg(common::output_arg())
            .arg(
                Arg::with_name(ARG_WRITER)
                    .short("w")
                    .long("writer")
                    .empty_values(false)
                    .multiple(false)
                    .possible_values(&["json", "tgf", "dot"])
                    .default_value("json")
                    .help("the output file format"),
            )
            .arg(cli_manager::logging_level_cli_arg())
    }

    fn execute(&self, arg_matches: &ArgMatches<'_>) -> Result<()> {
        let af = match arg_matches.value_of(ARG_CLASSIC) {
            Some(name) => generators::classic_example(name)?,
            None => {
                let size = parse_value::<usize>(arg_matches, ARG_RANDOM, "number of arguments")?;
                let probability = parse_value::<f64>(arg_matches, ARG_PROBABILITY, "probability")?;
                let seed = parse_value::<u64>(arg_matches, ARG_SEED, "seed")?;
                generators::random_framework(size, probability, seed)?
            }
        };
        let output = Path::new(arg_matches.value_of(common::ARG_OUTPUT).unwrap());
        match arg_matches.value_of(ARG_WRITER) {
            Some("tgf") => io::export_to_tgf(&af, output),
            Some("dot") => io::export_to_dot(&af, output),
            _ => io::export_to_json(&af, output),
        }
    }
}

fn parse_value<T>(arg_matches: &ArgMatches<'_>, arg: &str, what: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let value = arg_matches
        .value_of(arg)
        .ok_or_else(|| anyhow!("missing {} on the command line", what))?;
    T::from_str(value).with_context(|| format!(r#"while parsing the {} "{}""#, what, value))
}
