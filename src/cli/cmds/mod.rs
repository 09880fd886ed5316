use crate::{App, Result};

use clap::{ArgMatches, SubCommand};

mod init;
mod placeholder;

/// One entry in the command table: how to build the clap subcommand and
/// which function handles it.
pub(crate) struct Command {
    pub name: &'static str,
    pub about: &'static str,
    pub args: fn(clap::App<'static, 'static>) -> clap::App<'static, 'static>,
    pub run: fn(&mut App, &ArgMatches) -> Result<()>,
}

impl Command {
    fn subcommand(&self) -> clap::App<'static, 'static> {
        (self.args)(SubCommand::with_name(self.name).about(self.about))
    }
}

/// Build the table of every command minigit knows about, sorted by name.
pub(crate) fn commands() -> Vec<Command> {
    let mut commands = vec![init::command()];
    commands.extend(placeholder::commands());
    commands.sort_by_key(|c| c.name);
    commands
}

pub(crate) fn add_subcommands(
    app: clap::App<'static, 'static>,
    commands: &[Command],
) -> clap::App<'static, 'static> {
    commands
        .iter()
        .fold(app, |app, command| app.subcommand(command.subcommand()))
}

pub(crate) fn dispatch(app: &mut App, commands: &[Command]) -> Result<()> {
    let matches = app.arg_matches.clone();
    // ^^ Need an independent copy of matches so we can still pass
    // the App struct through to the command handlers.

    match matches.subcommand() {
        (name, Some(m)) => match commands.iter().find(|c| c.name == name) {
            Some(command) => (command.run)(app, m),
            None => unreachable!(),
            // unreachable: clap only accepts subcommands built from this table.
        },
        _ => unreachable!(),
        // unreachable: Should have exited out with appropriate help or
        // error message if no subcommand was given.
    }
}
