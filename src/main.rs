//! repo-wordlist: build path wordlists from a directory or a GitHub repository
//!
//! Lists every file as `/path` and every directory as `/path/`, files first,
//! each block ordered by depth, and writes them one per line.

use std::process::ExitCode;

use repo_wordlist::cli;

fn main() -> ExitCode {
    match cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", cli::failure_message(&err));
            ExitCode::FAILURE
        }
    }
}
