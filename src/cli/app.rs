use std::io::Write;

#[cfg(test)]
use std::ffi::OsString;

use crate::{
    cmds::{self, Command},
    Result,
};

use clap::{crate_version, AppSettings, ArgMatches};

pub(crate) fn clap_app(commands: &[Command]) -> clap::App<'static, 'static> {
    let app = clap::App::new("minigit")
        .version(crate_version!())
        .about("content tracker")
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .setting(AppSettings::VersionlessSubcommands);

    cmds::add_subcommands(app, commands)
}

pub(crate) struct App<'a> {
    pub arg_matches: ArgMatches<'a>,
    pub stdout: &'a mut dyn Write,
}

impl<'a> App<'a> {
    pub fn run(&mut self, commands: &[Command]) -> Result<()> {
        cmds::dispatch(self, commands)
    }

    #[cfg(test)]
    pub fn run_with_args<I, T>(args: I) -> Result<Vec<u8>>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let mut args: Vec<OsString> = args.into_iter().map(|x| x.into()).collect();
        args.insert(0, OsString::from("minigit"));

        let commands = cmds::commands();
        let mut stdout = Vec::new();

        App {
            arg_matches: clap_app(&commands).get_matches_from_safe(args)?,
            stdout: &mut stdout,
        }
        .run(&commands)?;

        Ok(stdout)
    }
}

impl<'a> Write for App<'a> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.stdout.write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.stdout.flush()
    }
}

#[cfg(test)]
mod tests {
    use crate::App;

    #[test]
    fn no_subcommand_is_an_error() {
        let err = App::run_with_args(Vec::<String>::new()).unwrap_err();

        let errmsg = err.to_string();
        assert!(
            errmsg.contains("USAGE:"),
            "\nincorrect error message:\n\n{}",
            errmsg
        );
    }

    #[test]
    fn unknown_subcommand() {
        let err = App::run_with_args(vec!["bogus"]).unwrap_err();

        let errmsg = err.to_string();
        assert!(
            errmsg.contains("bogus"),
            "\nincorrect error message:\n\n{}",
            errmsg
        );
    }
}
