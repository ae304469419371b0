use bureaulog::{Cli, run};
use clap::Parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    // `bureaulog big.log | head` must exit quietly instead of panicking
    #[cfg(unix)]
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_DFL);
    }

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}
