mod analyze_command;
pub(crate) use analyze_command::AnalyzeCommand;

pub(crate) mod app_helper;

mod authors_command;
pub(crate) use authors_command::AuthorsCommand;

mod check_command;
pub(crate) use check_command::CheckCommand;

pub(crate) mod cli_manager;

pub(crate) mod command;

pub(crate) mod common;

mod generate_command;
pub(crate) use generate_command::GenerateCommand;

mod problems_command;
pub(crate) use problems_command::ProblemsCommand;

mod solve_command;
pub(crate) use solve_command::SolveCommand;
