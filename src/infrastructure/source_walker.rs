use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::WalkError;

/// Lazily yields every regular source file under a root.
///
/// Directories are descended into but never yielded. The first traversal
/// error ends the walk: it is yielded as `Err` and nothing follows it.
pub struct SourceWalker {
    root: PathBuf,
    extension: String,
    entries: walkdir::IntoIter,
    failed: bool,
}

impl SourceWalker {
    pub fn new(root: &Path, extension: &str) -> Self {
        Self {
            root: root.to_path_buf(),
            extension: extension.to_string(),
            entries: WalkDir::new(root).into_iter(),
            failed: false,
        }
    }

    fn selects(&self, path: &Path) -> bool {
        path.extension() == Some(OsStr::new(&self.extension))
    }
}

impl Iterator for SourceWalker {
    type Item = Result<PathBuf, WalkError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        loop {
            let entry = match self.entries.next()? {
                Ok(entry) => entry,
                Err(error) => {
                    self.failed = true;
                    return Some(Err(WalkError {
                        root: self.root.clone(),
                        error,
                    }));
                }
            };

            if entry.file_type().is_dir() {
                continue;
            }

            if self.selects(entry.path()) {
                return Some(Ok(entry.into_path()));
            }
        }
    }
}
