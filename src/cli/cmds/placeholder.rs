// Commands that minigit names but doesn't implement yet. Each one still
// requires an enclosing repository, so running it outside of one reports
// that first.

use tracing::debug;

use super::{App, Command, Result};
use crate::find_repo;

use clap::{AppSettings, Arg, ArgMatches};

const PLACEHOLDERS: &[(&str, &str)] = &[
    ("add", "Add files contents to the index"),
    ("cat-file", "Provide content of repository objects"),
    ("check-ignore", "Check path(s) against ignore rules"),
    ("checkout", "Checkout a commit inside of a directory"),
    ("commit", "Record changes to the repository"),
    ("hash-object", "Compute object ID and optionally create a blob from a file"),
    ("log", "Display history of a given commit"),
    ("ls-files", "List all the staged files"),
    ("ls-tree", "Pretty-print a tree object"),
    ("rev-parse", "Parse revision (or other objects) identifiers"),
    ("rm", "Remove files from the working tree and the index"),
    ("show-ref", "List references"),
    ("status", "Show the working tree status"),
    ("tag", "List and create tags"),
];

pub(crate) fn commands() -> Vec<Command> {
    PLACEHOLDERS
        .iter()
        .map(|&(name, about)| Command {
            name,
            about,
            args,
            run,
        })
        .collect()
}

fn args(app: clap::App<'static, 'static>) -> clap::App<'static, 'static> {
    app.setting(AppSettings::TrailingVarArg)
        .setting(AppSettings::AllowLeadingHyphen)
        .arg(
            Arg::with_name("args")
                .multiple(true)
                .allow_hyphen_values(true),
        )
}

fn run(app: &mut App, _matches: &ArgMatches) -> Result<()> {
    let name = app
        .arg_matches
        .subcommand_name()
        .unwrap_or_default()
        .to_string();

    let repo = find_repo::from_current_dir()?;
    debug!(command = %name, work_dir = %repo.work_dir().display(), "placeholder command");

    Err(format!("'{}' is not implemented yet", name).into())
}
