mod cli;
mod error;
mod source;
#[cfg(test)]
mod testing;

use std::{
    io::{self, IsTerminal},
    process,
};

use allthesame::TryIsUniform;
use cli::{Args, Mode};
use owo_colors::OwoColorize;

type Result<T, E = error::Error> = std::result::Result<T, E>;

fn main() {
    let args = Args::parse();
    let result = run(&args);

    match &result {
        Ok(uniform) if !args.quiet => print_result(*uniform),
        Ok(_) => {}
        Err(e) => eprintln!("{e}"),
    }

    process::exit(status(&result));
}

/// 0 if uniform, 1 if not, 2 if we couldn't tell.
fn status(result: &Result<bool>) -> i32 {
    match result {
        Ok(true) => 0,
        Ok(false) => 1,
        Err(_) => 2,
    }
}

fn run(args: &Args) -> Result<bool> {
    args.validate()?;

    // Both sources are lazy, so a mismatch early on means later lines are never read and later
    // files are never hashed (or even opened).
    let uniform = match args.mode() {
        Mode::Lines => source::lines(&args.paths, args.ignore_case).try_is_uniform()?,
        Mode::Files => source::digests(&args.paths).try_is_uniform()?,
    };

    Ok(uniform)
}

fn print_result(uniform: bool) {
    let colorize = io::stdout().is_terminal();

    match (uniform, colorize) {
        (true, true) => println!("{}", "True".green()),
        (false, true) => println!("{}", "False".red()),
        (true, false) => println!("True"),
        (false, false) => println!("False"),
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use clap::Parser;

    use super::{run, status, Args};
    use crate::{error::Error, testing::Scratch};

    fn run_with(argv: &[&str]) -> crate::Result<bool> {
        run(&Args::try_parse_from(argv).unwrap())
    }

    #[test]
    fn uniform_lines() {
        let file = Scratch::new("run-uniform", "a\na\n");
        let result = run_with(&["allthesame", file.path().as_str()]);
        assert!(matches!(result, Ok(true)));
        assert_eq!(status(&result), 0);
    }

    #[test]
    fn non_uniform_lines() {
        let file = Scratch::new("run-non-uniform", "a\nb\n");
        let result = run_with(&["allthesame", file.path().as_str()]);
        assert!(matches!(result, Ok(false)));
        assert_eq!(status(&result), 1);
    }

    #[test]
    fn uniform_files() {
        let a = Scratch::new("run-files-a", "same");
        let b = Scratch::new("run-files-b", "same");
        let (a, b) = (a.path(), b.path());
        let result = run_with(&["allthesame", "-m", "files", a.as_str(), b.as_str()]);
        assert!(matches!(result, Ok(true)));
    }

    #[test]
    fn missing_file_is_an_error() {
        let result = run_with(&["allthesame", "/definitely/not/here/allthesame"]);
        assert!(matches!(result, Err(Error::Io(_))));
        assert_eq!(status(&result), 2);
    }

    #[test]
    fn files_mode_without_paths_is_an_error() {
        let result = run_with(&["allthesame", "-m", "files"]);
        assert!(matches!(result, Err(Error::MissingPaths)));
        assert_eq!(status(&result), 2);
    }

    #[test]
    fn io_errors_map_to_error_status() {
        let result = Err(io::Error::other("boom").into());
        assert_eq!(status(&result), 2);
    }
}
