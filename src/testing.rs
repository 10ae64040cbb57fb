use std::{fs, path::PathBuf};

/// A temp file that is removed again on drop.
pub struct Scratch(PathBuf);

impl Scratch {
    pub fn new(name: &str, contents: &str) -> Self {
        let path = std::env::temp_dir().join(format!("allthesame-{}-{name}", std::process::id()));
        fs::write(&path, contents).unwrap();
        Scratch(path)
    }

    pub fn path(&self) -> String {
        self.0.to_string_lossy().into_owned()
    }
}

impl Drop for Scratch {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.0);
    }
}
