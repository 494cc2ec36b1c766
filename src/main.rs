//! `lin_pid` - print the LIN 2.1 Protected Identifier for a frame ID.

use std::io::{self, IsTerminal};
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let stdout = io::stdout();
    let stderr = io::stderr();
    let out_is_terminal = stdout.is_terminal();
    let code = lin_pid::cli::run(
        std::env::args_os(),
        &mut stdout.lock(),
        &mut stderr.lock(),
        out_is_terminal,
    );
    ExitCode::from(code)
}
