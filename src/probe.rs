//! Existence and type checks for filesystem paths.
//!
//! A missing path is a normal outcome, not an error. [`path_state`] keeps other OS errors apart from
//! both outcomes; [`is_dir`] and [`is_file`] fold them into `false`, so a `false` from those means
//! "not confirmed", not "confirmed to be something else".

use std::{fs, io, path::Path};
use tracing::debug;

#[derive(Debug)]
pub enum PathState {
    Exists,
    DoesNotExist,
    Error(io::Error),
}

impl PathState {
    pub fn exists(&self) -> bool {
        matches!(self, PathState::Exists)
    }

    pub fn into_result(self) -> io::Result<bool> {
        match self {
            PathState::Exists => Ok(true),
            PathState::DoesNotExist => Ok(false),
            PathState::Error(error) => Err(error),
        }
    }
}

pub fn path_state(path: impl AsRef<Path>) -> PathState {
    let path = path.as_ref();
    match fs::metadata(path) {
        Ok(_) => PathState::Exists,
        Err(error) if error.kind() == io::ErrorKind::NotFound => PathState::DoesNotExist,
        Err(error) => {
            debug!(path = %path.display(), %error, "could not stat path");
            PathState::Error(error)
        }
    }
}

pub fn path_exists(path: impl AsRef<Path>) -> io::Result<bool> {
    path_state(path).into_result()
}

pub fn is_dir(path: impl AsRef<Path>) -> bool {
    metadata(path.as_ref()).map_or(false, |metadata| metadata.is_dir())
}

pub fn is_file(path: impl AsRef<Path>) -> bool {
    metadata(path.as_ref()).map_or(false, |metadata| metadata.is_file())
}

fn metadata(path: &Path) -> Option<fs::Metadata> {
    match fs::metadata(path) {
        Ok(metadata) => Some(metadata),
        Err(error) => {
            if error.kind() != io::ErrorKind::NotFound {
                debug!(path = %path.display(), %error, "treating unreadable path as absent");
            }
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{is_dir, is_file, path_exists, path_state, PathState};
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn directory() {
        let dir = tempdir().unwrap();
        assert!(path_state(dir.path()).exists());
        assert!(path_exists(dir.path()).unwrap());
        assert!(is_dir(dir.path()));
        assert!(!is_file(dir.path()));
    }

    #[test]
    fn file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("file.txt");
        fs::write(&path, b"content").unwrap();
        assert!(path_exists(&path).unwrap());
        assert!(is_file(&path));
        assert!(!is_dir(&path));
    }

    #[test]
    fn missing() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing");
        assert!(matches!(path_state(&path), PathState::DoesNotExist));
        assert!(!path_exists(&path).unwrap());
        assert!(!is_dir(&path));
        assert!(!is_file(&path));
    }

    #[cfg(unix)]
    #[test]
    fn error() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("file.txt");
        fs::write(&file, b"content").unwrap();
        // A path below a regular file fails with ENOTDIR rather than ENOENT.
        let path = file.join("child");
        assert!(matches!(path_state(&path), PathState::Error(_)));
        assert!(path_exists(&path).is_err());
        assert!(!is_dir(&path));
        assert!(!is_file(&path));
    }
}
