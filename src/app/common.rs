use super::{
    app_helper::AppHelper, command::Command, AnalyzeCommand, AuthorsCommand, CheckCommand,
    GenerateCommand, ProblemsCommand, SolveCommand,
};
use anyhow::{anyhow, Context, Result};
use clap::{Arg, ArgMatches};
use dungsem::{
    aa::{AAFramework, LabelType},
    io::{InstanceReader, JsonReader, TgfReader},
    solvers::{EnumerationLimits, SelfAttackPolicy},
};
use log::{info, warn};
use std::{
    fs::{self, File},
    io::{BufReader, Read},
    path::{Path, PathBuf},
    str::FromStr,
};

pub(crate) fn create_app_helper() -> AppHelper<'static> {
    let app_name = option_env!("CARGO_PKG_NAME").unwrap_or("unknown app name");
    let app_version = option_env!("CARGO_PKG_VERSION").unwrap_or("unknown version");
    let authors = option_env!("CARGO_PKG_AUTHORS").unwrap_or("unknown authors");
    let mut app = AppHelper::new(
        app_name,
        app_version,
        authors,
        "Dungsem, a reasoner for Dung's abstract argumentation semantics.",
    );
    let commands: Vec<Box<dyn Command>> = vec![
        Box::new(AnalyzeCommand::new()),
        Box::new(AuthorsCommand::new(app_name, app_version, authors)),
        Box::new(CheckCommand::new()),
        Box::new(GenerateCommand::new()),
        Box::new(ProblemsCommand::new()),
        Box::new(SolveCommand::new()),
    ];
    for c in commands {
        app.add_command(c);
    }
    app
}

pub(crate) const ARG_INPUT: &str = "INPUT";

pub(crate) fn input_args() -> Arg<'static, 'static> {
    Arg::with_name(ARG_INPUT)
        .short("f")
        .empty_values(false)
        .multiple(false)
        .help("the input file that contains the AF")
        .required(true)
}

pub(crate) const ARG_OUTPUT: &str = "OUTPUT";

pub(crate) fn output_arg() -> Arg<'static, 'static> {
    Arg::with_name(ARG_OUTPUT)
        .short("o")
        .long("output")
        .empty_values(false)
        .multiple(false)
        .help("the file to write; it is replaced atomically if it exists")
        .required(true)
}

pub(crate) const ARG_PROBLEM: &str = "PROBLEM";
pub(crate) const ARG_ARG: &str = "ARG";

pub(crate) fn problem_args() -> Vec<Arg<'static, 'static>> {
    vec![
        Arg::with_name(ARG_PROBLEM)
            .short("p")
            .empty_values(false)
            .multiple(false)
            .help("the problem to solve")
            .required(true),
        Arg::with_name(ARG_ARG)
            .short("a")
            .empty_values(false)
            .multiple(false)
            .help("the argument (for DC/DS queries)")
            .required(false),
    ]
}

pub(crate) const ARG_READER: &str = "READER";

pub(crate) fn reader_arg() -> Arg<'static, 'static> {
    Arg::with_name(ARG_READER)
        .short("r")
        .long("reader")
        .empty_values(false)
        .multiple(false)
        .possible_values(&["json", "tgf"])
        .help("the input file format (guessed from the file extension if absent, JSON by default)")
        .required(false)
}

pub(crate) const ARG_POLICY: &str = "POLICY";

pub(crate) fn policy_arg() -> Arg<'static, 'static> {
    Arg::with_name(ARG_POLICY)
        .long("policy")
        .empty_values(false)
        .multiple(false)
        .possible_values(&["classical", "enhanced"])
        .default_value("classical")
        .help("the way attacks from self-attacking arguments are handled")
        .required(false)
}

pub(crate) fn read_policy(arg_matches: &ArgMatches<'_>) -> Result<SelfAttackPolicy> {
    match arg_matches.value_of(ARG_POLICY) {
        Some(p) => SelfAttackPolicy::from_str(p)
            .map_err(|_| anyhow!(r#"undefined self-attack policy "{}""#, p)),
        None => Ok(SelfAttackPolicy::default()),
    }
}

pub(crate) const ARG_MAX_CANDIDATES: &str = "MAX_CANDIDATES";

pub(crate) fn max_candidates_arg() -> Arg<'static, 'static> {
    Arg::with_name(ARG_MAX_CANDIDATES)
        .long("max-candidates")
        .empty_values(false)
        .multiple(false)
        .help("the maximal number of candidates explored by enumerations (unlimited if absent)")
        .required(false)
}

pub(crate) fn read_limits(arg_matches: &ArgMatches<'_>) -> Result<EnumerationLimits> {
    match arg_matches.value_of(ARG_MAX_CANDIDATES) {
        Some(n) => {
            let max = usize::from_str(n)
                .with_context(|| format!(r#"while parsing the number of candidates "{}""#, n))?;
            info!("enumerations are limited to {} candidates", max);
            Ok(EnumerationLimits::with_max_candidates(max))
        }
        None => Ok(EnumerationLimits::unlimited()),
    }
}

/// Returns the reader selected on the command line, or the one matching the file extension.
pub(crate) fn instance_reader(
    arg_matches: &ArgMatches<'_>,
    file_path: &str,
) -> Box<dyn InstanceReader<String>> {
    let format = arg_matches.value_of(ARG_READER).unwrap_or_else(|| {
        match Path::new(file_path).extension().and_then(|e| e.to_str()) {
            Some(e) if e.eq_ignore_ascii_case("tgf") => "tgf",
            _ => "json",
        }
    });
    info!("reading the input file with the {} reader", format);
    match format {
        "tgf" => Box::<TgfReader>::default(),
        _ => Box::<JsonReader>::default(),
    }
}

pub(crate) fn read_file_path<T>(
    file_path: &str,
    reader: &mut dyn InstanceReader<T>,
) -> Result<AAFramework<T>>
where
    T: LabelType,
{
    reader.add_warning_handler(Box::new(|line, msg| warn!("at line {}: {}", line, msg)));
    let af = read_file_path_with(file_path, &|r| reader.read(r))?;
    info!(
        "the argumentation framework has {} argument(s) and {} attack(s)",
        af.n_arguments(),
        af.n_attacks(),
    );
    Ok(af)
}

pub(crate) fn read_file_path_with<F, R>(file_path: &str, reader: &F) -> Result<R>
where
    F: Fn(&mut dyn Read) -> Result<R>,
{
    let canonicalized = canonicalize_file_path(file_path)?;
    info!("reading input file {:?}", canonicalized);
    let mut file_reader = BufReader::new(
        File::open(&canonicalized)
            .with_context(|| format!("while opening file {:?}", canonicalized))?,
    );
    (reader)(&mut file_reader)
}

/// Canonicalize a path given by the user.
pub(crate) fn canonicalize_file_path(file_path: &str) -> Result<PathBuf> {
    fs::canonicalize(PathBuf::from(file_path))
        .with_context(|| format!(r#"while opening file "{}""#, file_path))
}
