use super::{
    cli_manager,
    command::Command,
    common::{self, ARG_ARG, ARG_PROBLEM},
};
use anyhow::{anyhow, Context, Result};
use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};
use dungsem::{
    aa::{self, AAFramework, Argument, Query, Semantics},
    io::{ExtensionWriter, ResponseWriter},
    solvers::{
        Acceptance, CompleteSemanticsSolver, CredulousAcceptanceComputer, EnumerationLimits,
        ExtensionEnumerator, GroundedSemanticsSolver, PreferredSemanticsSolver, SelfAttackPolicy,
        SingleExtensionComputer, SkepticalAcceptanceComputer, StableSemanticsSolver,
    },
};
use log::{info, warn};
use std::io::Write;

const CMD_NAME: &str = "solve";

const ARG_WITH_CERTIFICATE: &str = "WITH_CERTIFICATE";

pub(crate) struct SolveCommand;

impl SolveCommand {
    pub(crate) fn new() -> Self {
        SolveCommand
    }
}

impl<'a> Command<'a> for SolveCommand {
    fn name(&self) -> &str {
        CMD_NAME
    }

    fn clap_subcommand(&self) -> App<'a, 'a> {
        SubCommand::with_name(CMD_NAME)
            .about("Solves an argumentation framework problem")
            .setting(AppSettings::DisableVersion)
            .arg(common::input_args())
            .args(&common::problem_args())
            .arg(common::reader_arg())
            .arg(common::policy_arg())
            .arg(common::max_candidates_arg())
            .arg(
                Arg::with_name(ARG_WITH_CERTIFICATE)
                    .long("with-certificate")
                    .takes_value(false)
                    .help("give a certificate after the answers of DC and DS queries, when one exists")
                    .required(false),
            )
            .arg(cli_manager::logging_level_cli_arg())
    }

    fn execute(&self, arg_matches: &ArgMatches<'_>) -> Result<()> {
        let (query, semantics) =
            aa::read_problem_string(arg_matches.value_of(ARG_PROBLEM).unwrap())?;
        let policy = common::read_policy(arg_matches)?;
        let limits = common::read_limits(arg_matches)?;
        let file = arg_matches.value_of(common::ARG_INPUT).unwrap();
        let mut reader = common::instance_reader(arg_matches, file);
        let af = common::read_file_path(file, reader.as_mut())?;
        let arg = arg_matches
            .value_of(ARG_ARG)
            .map(|a| reader.read_arg_from_str(&af, a))
            .transpose()
            .context("while parsing the argument passed to the command line")?;
        check_arg_definition(query, &arg)?;
        info!(
            "solving {}-{} with the {} self-attack policy",
            query, semantics, policy
        );
        let mut solver = create_solver(&af, semantics, policy, limits);
        let writer: &dyn ResponseWriter<String> = &ExtensionWriter;
        let mut out = std::io::stdout();
        let with_certificate = arg_matches.is_present(ARG_WITH_CERTIFICATE);
        match (query, arg) {
            (Query::EE, _) => {
                let enumeration = solver.enumerate_extensions();
                if enumeration.is_partial() {
                    warn!("the enumeration was stopped by the limits; some extensions may be missing");
                }
                if enumeration.is_empty() {
                    writer.write_no_extension(&mut out)
                } else {
                    enumeration
                        .iter()
                        .try_for_each(|ext| writer.write_single_extension(&mut out, ext))
                }
            }
            (Query::SE, _) => match solver.compute_one_extension() {
                Some(ext) => writer.write_single_extension(&mut out, &ext),
                None => writer.write_no_extension(&mut out),
            },
            (Query::DC, Some(a)) => {
                let answer = solver.is_credulously_accepted_with_certificate(a);
                write_acceptance(writer, &mut out, answer, with_certificate)
            }
            (Query::DS, Some(a)) => {
                let answer = solver.is_skeptically_accepted_with_certificate(a);
                write_acceptance(writer, &mut out, answer, with_certificate)
            }
            (Query::DC | Query::DS, None) => Err(anyhow!(
                "missing argument on the command line (required for query {})",
                query.as_ref()
            )),
        }
    }
}

trait ProblemSolver<T>:
    SingleExtensionComputer<T>
    + ExtensionEnumerator<T>
    + CredulousAcceptanceComputer<T>
    + SkepticalAcceptanceComputer<T>
where
    T: aa::LabelType,
{
}

impl<T, S> ProblemSolver<T> for S
where
    T: aa::LabelType,
    S: SingleExtensionComputer<T>
        + ExtensionEnumerator<T>
        + CredulousAcceptanceComputer<T>
        + SkepticalAcceptanceComputer<T>,
{
}

fn create_solver<'a>(
    af: &'a AAFramework<String>,
    semantics: Semantics,
    policy: SelfAttackPolicy,
    limits: EnumerationLimits,
) -> Box<dyn ProblemSolver<String> + 'a> {
    match semantics {
        Semantics::GR => Box::new(GroundedSemanticsSolver::new_with_policy(af, policy)),
        Semantics::CO => {
            let mut solver = CompleteSemanticsSolver::new_with_policy(af, policy);
            solver.set_enumeration_limits(limits);
            Box::new(solver)
        }
        Semantics::PR => {
            let mut solver = PreferredSemanticsSolver::new_with_policy(af, policy);
            solver.set_enumeration_limits(limits);
            Box::new(solver)
        }
        Semantics::ST => {
            let mut solver = StableSemanticsSolver::new_with_policy(af, policy);
            solver.set_enumeration_limits(limits);
            Box::new(solver)
        }
    }
}

fn check_arg_definition(query: Query, arg: &Option<&Argument<String>>) -> Result<()> {
    match query {
        Query::EE | Query::SE => {
            if arg.is_some() {
                warn!(
                    "unexpected argument on the command line (useless for query {})",
                    query.as_ref()
                );
            }
            Ok(())
        }
        Query::DC | Query::DS => {
            if arg.is_none() {
                Err(anyhow!(
                    "missing argument on the command line (required for query {})",
                    query.as_ref()
                ))
            } else {
                Ok(())
            }
        }
    }
}

fn write_acceptance(
    writer: &dyn ResponseWriter<String>,
    out: &mut dyn Write,
    answer: Acceptance<Vec<&Argument<String>>>,
    with_certificate: bool,
) -> Result<()> {
    if answer.is_partial() {
        return Err(anyhow!(
            "the search was stopped by the limits before the answer was established (raise --max-candidates)"
        ));
    }
    writer.write_acceptance_status(out, answer.status())?;
    match answer.into_certificate() {
        Some(c) if with_certificate => writer.write_single_extension(out, &c),
        _ => Ok(()),
    }
}
