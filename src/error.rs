use std::{fmt::Display, io, rc::Rc};

#[derive(Clone, Debug)]
pub enum Error {
    // Only files mode refuses to fall back on stdin.
    MissingPaths,
    // Files are compared byte for byte.
    IgnoreCaseWithFiles,
    Io(Rc<io::Error>),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::MissingPaths => f.write_str("files mode requires at least one path"),
            Error::IgnoreCaseWithFiles => {
                f.write_str("--ignore-case cannot be used in files mode")
            }
            Error::Io(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for Error {}

impl From<io::Error> for Error {
    fn from(v: io::Error) -> Self {
        Self::Io(Rc::new(v))
    }
}
