use super::{cli_manager, command::Command, common};
use anyhow::Result;
use clap::{App, AppSettings, ArgMatches, SubCommand};
use dungsem::analysis::PropertyAnalyzer;
use log::info;

const CMD_NAME: &str = "check";

pub(crate) struct CheckCommand;

impl CheckCommand {
    pub(crate) fn new() -> Self {
        CheckCommand
    }
}

impl<'a> Command<'a> for CheckCommand {
    fn name(&self) -> &str {
        CMD_NAME
    }

    fn clap_subcommand(&self) -> App<'a, 'a> {
        SubCommand::with_name(CMD_NAME)
            .about("Checks input AF files for errors")
            .setting(AppSettings::DisableVersion)
            .arg(common::input_args())
            .arg(common::reader_arg())
            .arg(cli_manager::logging_level_cli_arg())
    }

    fn execute(&self, arg_matches: &ArgMatches<'_>) -> Result<()> {
        let file = arg_matches.value_of(common::ARG_INPUT).unwrap();
        let mut reader = common::instance_reader(arg_matches, file);
        let af = common::read_file_path(file, reader.as_mut())?;
        let analyzer = PropertyAnalyzer::new(&af);
        let self_attacking = analyzer.self_attacking_arguments();
        if !self_attacking.is_empty() {
            info!(
                "the framework has {} self-attacking argument(s)",
                self_attacking.len()
            );
        }
        Ok(())
    }
}
