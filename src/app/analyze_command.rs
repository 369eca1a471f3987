use super::{cli_manager, command::Command, common};
use anyhow::Result;
use clap::{App, AppSettings, ArgMatches, SubCommand};
use dungsem::io;

const CMD_NAME: &str = "analyze";

pub(crate) struct AnalyzeCommand;

impl AnalyzeCommand {
    pub(crate) fn new() -> Self {
        AnalyzeCommand
    }
}

impl<'a> Command<'a> for AnalyzeCommand {
    fn name(&self) -> &str {
        CMD_NAME
    }

    fn clap_subcommand(&self) -> App<'a, 'a> {
        SubCommand::with_name(CMD_NAME)
            .about("Writes a JSON report about the properties and the extensions of an AF")
            .setting(AppSettings::DisableVersion)
            .arg(common::input_args())
            .arg(common::output_arg())
            .arg(common::reader_arg())
            .arg(common::max_candidates_arg())
            .arg(cli_manager::logging_level_cli_arg())
    }

    fn execute(&self, arg_matches: &ArgMatches<'_>) -> Result<()> {
        let limits = common::read_limits(arg_matches)?;
        let file = arg_matches.value_of(common::ARG_INPUT).unwrap();
        let mut reader = common::instance_reader(arg_matches, file);
        let af = common::read_file_path(file, reader.as_mut())?;
        let output = arg_matches.value_of(common::ARG_OUTPUT).unwrap();
        io::export_analysis_report(&af, output, limits)
    }
}
