use anyhow::Result;
use clap::{App, ArgMatches};

/// A command of the app, like `solve` or `generate`.
///
/// A command declares its own CLI arguments as a clap subcommand,
/// and executes itself given the values clap matched against them.
/// Command names must be unique in an app.
pub(crate) trait Command<'a> {
    /// Returns the name of the command, as used on the command line.
    fn name(&self) -> &str;

    /// Returns the clap subcommand describing the arguments of this command.
    fn clap_subcommand(&self) -> App<'a, 'a>;

    /// Executes the command.
    ///
    /// An error makes the app exit with a failure status code.
    fn execute(&self, arg_matches: &ArgMatches<'_>) -> Result<()>;
}
