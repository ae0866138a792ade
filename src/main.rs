//! Binary entrypoint for the `dirmatch` CLI.

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(err) = dirmatch::config::load_dotenv() {
        eprintln!("{err}");
        return ExitCode::FAILURE;
    }
    match dirmatch::run(std::env::args_os()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
