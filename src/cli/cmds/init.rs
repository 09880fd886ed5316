use std::{io::Write, path::Path};

use super::{App, Command, Result};

use clap::{Arg, ArgMatches};
use minigit::repo;

pub(crate) fn command() -> Command {
    Command {
        name: "init",
        about: "Initialize a new, empty repository",
        args,
        run,
    }
}

fn args(app: clap::App<'static, 'static>) -> clap::App<'static, 'static> {
    app.arg(
        Arg::with_name("directory")
            .default_value(".")
            .help("Where to create the repository"),
    )
}

fn run(app: &mut App, init_matches: &ArgMatches) -> Result<()> {
    let dir = init_matches.value_of("directory").unwrap_or(".");

    let repo = repo::init(Path::new(dir))?;

    writeln!(
        app,
        "Initialized empty Git repository in {}",
        repo.git_dir().display()
    )?;

    Ok(())
}
