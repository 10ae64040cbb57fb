use clap::{Parser, ValueEnum};

use crate::error::Error;

/// check whether every item of a sequence is the same
///
/// Reads lines (or file contents) one at a time and stops at the first item
/// that differs from the first one. Exits with status 0 if everything was the
/// same, 1 if not, and 2 on error.
#[derive(Clone, Debug, Parser)]
#[command(version)]
pub struct Args {
    /// files to read
    ///
    /// In lines mode, lines are read from each file in turn, or from stdin if
    /// no files are given. In files mode, each file's contents are compared
    /// as a whole.
    pub paths: Vec<String>,

    /// what to compare
    ///
    /// The default is lines, but the default may be overridden by setting an
    /// environment variable called ALLTHESAME_MODE.
    #[arg(short, long, value_enum, env = "ALLTHESAME_MODE")]
    mode: Option<Mode>,

    /// compare lines without regard to ASCII case
    ///
    /// Only meaningful in lines mode; files mode rejects it.
    #[arg(short, long)]
    pub ignore_case: bool,

    /// print nothing; report through the exit status only
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// each line is an item
    #[default]
    Lines,

    /// each file is an item
    Files,
}

impl Args {
    pub fn parse() -> Self {
        Parser::parse()
    }

    pub fn mode(&self) -> Mode {
        self.mode.unwrap_or_default()
    }

    pub fn validate(&self) -> crate::Result<()> {
        if self.mode() != Mode::Files {
            return Ok(());
        }

        if self.paths.is_empty() {
            return Err(Error::MissingPaths);
        }

        if self.ignore_case {
            return Err(Error::IgnoreCaseWithFiles);
        }

        Ok(())
    }
}
