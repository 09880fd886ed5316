use std::{
    error::Error,
    io::{self, Write},
};

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod app;
pub(crate) use app::App;

mod cmds;
mod find_repo;

#[cfg(test)]
mod temp_cwd;

pub(crate) type Result<T> = std::result::Result<T, Box<dyn Error>>;

/// Environment variable holding the log filter, e.g. `MINIGIT_LOG=debug`.
const LOG_ENV: &str = "MINIGIT_LOG";

#[allow(unused_must_use)]
fn main() {
    // Keep this function as thin as possible; everything else is reachable
    // from the unit tests through `App::run_with_args`.

    init_logging();

    let commands = cmds::commands();

    let stdout = io::stdout();
    let mut stdout = stdout.lock();

    let mut app = App {
        arg_matches: app::clap_app(&commands).get_matches(),
        stdout: &mut stdout,
    };

    let r = app.run(&commands);

    app.flush();
    // Intentionally ignoring the result of this flush.

    std::process::exit(match r {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("ERROR: {}", err);
            1
        }
    });
}

// Logs go to stderr so that stdout carries only command output.
fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}
