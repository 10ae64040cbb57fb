use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    iter,
    path::Path,
};

use uncased::Uncased;

/// A line of text.
///
/// Exact and case-folded lines never compare equal to each other.
#[derive(Clone, Debug, PartialEq)]
pub enum Line {
    Exact(String),
    Folded(Uncased<'static>),
}

impl Line {
    pub fn new(text: impl Into<String>, ignore_case: bool) -> Self {
        let text = text.into();
        if ignore_case {
            Line::Folded(Uncased::new(text))
        } else {
            Line::Exact(text)
        }
    }
}

/// Lines of each file in turn, or of stdin if no paths are given.
///
/// A file is not opened until the previous one has been read to the end.
pub fn lines<'a>(
    paths: &'a [String],
    ignore_case: bool,
) -> Box<dyn Iterator<Item = io::Result<Line>> + 'a> {
    let text: Box<dyn Iterator<Item = io::Result<String>> + 'a> = if paths.is_empty() {
        Box::new(io::stdin().lock().lines())
    } else {
        Box::new(paths.iter().flat_map(|path| read_lines(path)))
    };

    Box::new(text.map(move |line| line.map(|text| Line::new(text, ignore_case))))
}

fn read_lines(path: &str) -> Box<dyn Iterator<Item = io::Result<String>>> {
    match File::open(path) {
        Ok(file) => Box::new(BufReader::new(file).lines()),
        Err(e) => Box::new(iter::once(Err(e))),
    }
}

/// Content digest of each file, hashed only when pulled.
pub fn digests(paths: &[String]) -> impl Iterator<Item = io::Result<blake3::Hash>> + '_ {
    paths.iter().map(|path| digest(path.as_ref()))
}

fn digest(path: &Path) -> io::Result<blake3::Hash> {
    let mut hasher = blake3::Hasher::new();
    let mut reader = File::open(path)?;
    io::copy(&mut reader, &mut hasher)?;
    Ok(hasher.finalize())
}
