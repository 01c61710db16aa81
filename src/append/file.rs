// Copyright 2024 FastLabs Developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::fs;
use std::fs::File;
use std::fs::OpenOptions;
use std::io;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;

use crate::Error;

/// A log file opened in append mode.
///
/// Append mode makes the kernel position every write at the current end of
/// file, so several threads or processes can share one log file.
#[derive(Debug, Clone)]
pub struct FileDestination {
    path: PathBuf,
    file: Arc<File>,
}

impl FileDestination {
    /// Open `path` for appending, creating the file when missing.
    ///
    /// The parent directory must already exist; it is never created.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is empty, exists but is not writable by the
    /// current user, or cannot be opened.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            return Err(Error::new("log file path is empty"));
        }

        if path.exists() && !is_writable(path) {
            return Err(Error::new("log file is not writable")
                .with_context("path", path.display())
                .with_source(io::Error::from(io::ErrorKind::PermissionDenied)));
        }

        let file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(path)
            .map_err(|err| {
                Error::new("failed to open log file")
                    .with_context("path", path.display())
                    .with_source(err)
            })?;

        Ok(Self {
            path: path.to_path_buf(),
            file: Arc::new(file),
        })
    }

    /// The path this destination was opened from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub(crate) fn write_line(&self, line: &[u8]) -> io::Result<()> {
        (&*self.file).write_all(line)
    }

    /// Rebind the process's standard error to this file.
    ///
    /// Anything written to fd 2 afterwards, by this crate or by foreign code,
    /// lands in the file. Lasts until the process exits or stderr is rebound.
    #[cfg(unix)]
    pub fn redirect_stderr(&self) -> Result<(), Error> {
        use std::os::fd::AsRawFd;

        // SAFETY: both descriptors are valid for the duration of the call; dup2
        // atomically closes and replaces STDERR_FILENO.
        let result = unsafe { libc::dup2(self.file.as_raw_fd(), libc::STDERR_FILENO) };
        if result < 0 {
            return Err(Error::new("failed to redirect stderr")
                .with_context("path", self.path.display())
                .with_source(io::Error::last_os_error()));
        }
        Ok(())
    }

    /// Rebind the process's standard error to this file.
    ///
    /// Not supported on this platform; lines still reach the file directly.
    #[cfg(not(unix))]
    pub fn redirect_stderr(&self) -> Result<(), Error> {
        Ok(())
    }
}

#[cfg(unix)]
fn is_writable(path: &Path) -> bool {
    use std::ffi::CString;
    use std::os::unix::ffi::OsStrExt;

    let Ok(path) = CString::new(path.as_os_str().as_bytes()) else {
        return false;
    };
    // SAFETY: path is a valid NUL-terminated string.
    unsafe { libc::access(path.as_ptr(), libc::W_OK) == 0 }
}

#[cfg(not(unix))]
fn is_writable(path: &Path) -> bool {
    fs::metadata(path)
        .map(|meta| !meta.permissions().readonly())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use rand::Rng;
    use rand::distr::Alphanumeric;
    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn test_creates_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.log");
        assert!(!path.exists());

        let destination = FileDestination::open(&path).unwrap();
        assert!(path.exists());
        assert_eq!(destination.path(), path);
    }

    #[test]
    fn test_missing_parent_directory_is_not_created() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("nested");
        let path = nested.join("deeper").join("app.log");

        let err = FileDestination::open(&path).unwrap_err();
        assert_eq!(err.message(), "failed to open log file");
        assert!(!nested.exists());
    }

    #[test]
    fn test_appends_to_existing_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"existing\n").unwrap();

        let destination = FileDestination::open(temp_file.path()).unwrap();
        let line = format!("{}\n", generate_random_string());
        destination.write_line(line.as_bytes()).unwrap();

        let contents = fs::read_to_string(temp_file.path()).unwrap();
        assert_eq!(contents, format!("existing\n{line}"));
    }

    #[test]
    fn test_rejects_empty_path() {
        let err = FileDestination::open("").unwrap_err();
        assert_eq!(err.to_string(), "log file path is empty");
    }

    #[test]
    fn test_rejects_directory() {
        let dir = tempfile::tempdir().unwrap();
        assert!(FileDestination::open(dir.path()).is_err());
    }

    #[test]
    fn test_rejects_path_below_regular_file() {
        let temp_file = NamedTempFile::new().unwrap();
        let path = temp_file.path().join("app.log");
        let err = FileDestination::open(&path).unwrap_err();
        assert_eq!(err.message(), "failed to open log file");
    }

    #[cfg(unix)]
    #[test]
    fn test_rejects_read_only_file() {
        use std::os::unix::fs::PermissionsExt;

        // root passes every access(2) check
        if unsafe { libc::geteuid() } == 0 {
            return;
        }

        let temp_file = NamedTempFile::new().unwrap();
        let read_only = fs::Permissions::from_mode(0o444);
        fs::set_permissions(temp_file.path(), read_only).unwrap();

        let err = FileDestination::open(temp_file.path()).unwrap_err();
        assert_eq!(err.message(), "log file is not writable");
    }

    fn generate_random_string() -> String {
        let mut rng = rand::rng();
        let len = rng.random_range(50..=100);
        std::iter::repeat(())
            .map(|()| rng.sample(Alphanumeric))
            .map(char::from)
            .take(len)
            .collect()
    }
}
