//! Binary entrypoint for `nestmatch`; all behaviour lives in
//! [`nestmatch_cli::run`].

use std::io::{self, IsTerminal};
use std::process::ExitCode;

fn main() -> ExitCode {
    let stdout = io::stdout();
    let stdout_is_terminal = stdout.is_terminal();
    nestmatch_cli::run(
        std::env::args_os(),
        &mut io::stdin().lock(),
        &mut stdout.lock(),
        &mut io::stderr().lock(),
        stdout_is_terminal,
    )
}
