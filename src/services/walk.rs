//! Depth-first directory traversal shared by both checks.
//!
//! [`visit`] yields one [`WalkEvent`] per regular file and one per entry
//! that could not be read. Errors never stop the walk; the caller decides
//! whether they fail the run.

use camino::{Utf8Path, Utf8PathBuf};
use indexmap::IndexSet;
use thiserror::Error;
use walkdir::{DirEntry, WalkDir};

/// Which directories below the root are pruned. The root itself is never pruned.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WalkOptions {
    /// Prune directories whose name starts with `.`
    pub skip_hidden_dirs: bool,

    /// Prune directories with exactly these names.
    pub skip_dirs: IndexSet<String>,
}

impl WalkOptions {
    fn prunes(&self, entry: &DirEntry) -> bool {
        if entry.depth() == 0 || !entry.file_type().is_dir() {
            return false;
        }
        let name = entry.file_name().to_string_lossy();
        (self.skip_hidden_dirs && name.starts_with('.')) || self.skip_dirs.contains(&*name)
    }
}

/// Errors surfaced while walking. Each one covers a single entry or subtree.
#[derive(Error, Debug)]
pub enum WalkError {
    #[error("{path}: {message}")]
    Traverse {
        path: String,
        message: String,
        /// The failing path is a directory (or a symlink loop back to one)
        directory: bool,
    },

    #[error("path is not valid UTF-8: {0}")]
    NonUtf8Path(String),
}

impl WalkError {
    /// The offending path, lossily rendered.
    pub fn path(&self) -> &str {
        match self {
            WalkError::Traverse { path, .. } => path,
            WalkError::NonUtf8Path(path) => path,
        }
    }

    /// True when a whole subtree was lost rather than a single file.
    pub fn is_directory(&self) -> bool {
        match self {
            WalkError::Traverse { directory, .. } => *directory,
            WalkError::NonUtf8Path(_) => false,
        }
    }

    /// The underlying failure without the path prefix.
    pub fn message(&self) -> String {
        match self {
            WalkError::Traverse { message, .. } => message.clone(),
            WalkError::NonUtf8Path(_) => "path is not valid UTF-8".to_string(),
        }
    }
}

impl From<walkdir::Error> for WalkError {
    fn from(err: walkdir::Error) -> Self {
        let directory = err.loop_ancestor().is_some() || err.path().is_some_and(|p| p.is_dir());
        let path = err
            .path()
            .map(|p| strip_current_dir(&p.to_string_lossy()).to_string())
            .unwrap_or_default();
        let message = match err.io_error() {
            Some(io) => io.to_string(),
            None => err.to_string(),
        };
        WalkError::Traverse {
            path,
            message,
            directory,
        }
    }
}

/// One step of the traversal.
#[derive(Debug)]
pub enum WalkEvent {
    File(Utf8PathBuf),
    Error(WalkError),
}

type Pruner = Box<dyn FnMut(&DirEntry) -> bool>;

/// Iterator returned by [`visit`].
pub struct Walk {
    inner: walkdir::FilterEntry<walkdir::IntoIter, Pruner>,
}

impl Iterator for Walk {
    type Item = WalkEvent;

    fn next(&mut self) -> Option<WalkEvent> {
        loop {
            let entry = match self.inner.next()? {
                Ok(entry) => entry,
                Err(err) => {
                    let err = WalkError::from(err);
                    tracing::debug!("Walk error: {}", err);
                    return Some(WalkEvent::Error(err));
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }

            return Some(match Utf8PathBuf::try_from(entry.into_path()) {
                Ok(path) => {
                    let path = Utf8PathBuf::from(strip_current_dir(path.as_str()));
                    tracing::debug!("Visiting {}", path);
                    WalkEvent::File(path)
                }
                Err(err) => WalkEvent::Error(WalkError::NonUtf8Path(
                    err.as_path().to_string_lossy().into_owned(),
                )),
            });
        }
    }
}

/// Walk `root` depth-first in file-name order, following symlinks.
///
/// Symlink loops and unreadable directories come back as [`WalkEvent::Error`].
pub fn visit(root: &Utf8Path, options: &WalkOptions) -> Walk {
    let options = options.clone();
    let pruner: Pruner = Box::new(move |entry| !options.prunes(entry));

    Walk {
        inner: WalkDir::new(root)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(pruner),
    }
}

/// Drop a leading `./` so a walk rooted at `.` reports `lib/x.md`, not `./lib/x.md`.
pub fn strip_current_dir(path: &str) -> &str {
    match path.strip_prefix("./") {
        Some(rest) if !rest.is_empty() => rest,
        _ => path,
    }
}

/// Exact match on the final extension, as `Utf8Path::extension` sees it.
///
/// A dotfile such as `.json` has no extension and never matches.
pub fn has_extension(path: &Utf8Path, extensions: &IndexSet<String>) -> bool {
    match path.extension() {
        Some(ext) => extensions.iter().any(|allowed| allowed.strip_prefix('.') == Some(ext)),
        None => false,
    }
}

/// Suffix match on the file name, so `.md` itself counts as a `.md` file.
pub fn has_suffix(path: &Utf8Path, suffixes: &IndexSet<String>) -> bool {
    match path.file_name() {
        Some(name) => suffixes.iter().any(|suffix| name.ends_with(suffix.as_str())),
        None => false,
    }
}
