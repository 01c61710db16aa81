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

use std::path::Path;
use std::path::PathBuf;

use crate::Error;
use crate::Level;
use crate::append::Destination;
use crate::append::FileDestination;
use crate::layout::LineLayout;
use crate::logger;

/// Environment variable read by [`Builder::from_env`] for the threshold.
pub const LEVEL_ENV: &str = "LOGLINE_LEVEL";

/// Environment variable read by [`Builder::from_env`] for the log file.
pub const FILE_ENV: &str = "LOGLINE_FILE";

/// Initialize the logger with a threshold rank and an optional log file.
///
/// An unrecognized `rank` leaves the threshold unchanged. A `None` or empty
/// `path` keeps the current destination. Otherwise the file is opened for
/// appending and the process's stderr is redirected to it.
///
/// Returns `false`, changing nothing, if the file exists but is not writable
/// or cannot be opened.
///
/// ```
/// assert!(logline::init(logline::Level::Debug.rank(), None));
/// assert!(logline::enabled(logline::Level::Debug));
///
/// // out of range: silently ignored
/// assert!(logline::init(9999, None));
/// assert_eq!(logline::level(), logline::Level::Debug);
/// ```
pub fn init(rank: i32, path: Option<&Path>) -> bool {
    try_init(Level::from_rank(rank), path).is_ok()
}

/// Like [`init`], with a typed level and the failure reason.
///
/// # Errors
///
/// Returns an error if the log file cannot be used; nothing is changed then.
pub fn try_init(level: Option<Level>, path: Option<&Path>) -> Result<(), Error> {
    let mut builder = builder();
    builder.level = level;
    builder.file = path.map(Path::to_path_buf);
    builder.apply()
}

/// Create a new [`Builder`] with no overrides.
///
/// ```
/// use logline::Level;
///
/// logline::builder().level(Level::Warn).apply().unwrap();
/// assert!(!logline::enabled(Level::Info));
/// ```
pub fn builder() -> Builder {
    Builder::default()
}

/// Collects a logger configuration and installs it with [`apply`](Builder::apply).
///
/// Unset options keep whatever the running process currently uses.
#[must_use = "call `apply` to install the configuration"]
#[derive(Debug)]
pub struct Builder {
    level: Option<Level>,
    file: Option<PathBuf>,
    redirect_stderr: bool,
    layout: Option<LineLayout>,
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            level: None,
            file: None,
            redirect_stderr: true,
            layout: None,
        }
    }
}

impl Builder {
    /// Set the threshold.
    pub fn level(mut self, level: Level) -> Self {
        self.level = Some(level);
        self
    }

    /// Append to the file at `path`. An empty path is ignored.
    pub fn file(mut self, path: impl Into<PathBuf>) -> Self {
        self.file = Some(path.into());
        self
    }

    /// Whether [`file`](Builder::file) also rebinds the process's stderr.
    ///
    /// Default to `true`.
    pub fn redirect_stderr(mut self, redirect: bool) -> Self {
        self.redirect_stderr = redirect;
        self
    }

    /// Set the layout used to render lines.
    pub fn layout(mut self, layout: LineLayout) -> Self {
        self.layout = Some(layout);
        self
    }

    /// Read [`LEVEL_ENV`] and [`FILE_ENV`] from the process environment.
    ///
    /// See [`from_lookup`](Builder::from_lookup).
    pub fn from_env(self) -> Self {
        self.from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the threshold and log file with `lookup`.
    ///
    /// The level accepts a name (`info`, `WARNING`, ...) or a rank (`30`).
    /// Unrecognized values are ignored, like an out-of-range rank in [`init`].
    pub fn from_lookup<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let level = lookup(LEVEL_ENV).and_then(|value| value.parse().ok());
        if let Some(level) = level {
            self.level = Some(level);
        }
        if let Some(file) = lookup(FILE_ENV).filter(|value| !value.trim().is_empty()) {
            self.file = Some(PathBuf::from(file));
        }
        self
    }

    /// Install this configuration for the whole process.
    ///
    /// # Errors
    ///
    /// Returns an error if the log file cannot be opened or stderr cannot be
    /// redirected. The running configuration is left untouched in that case.
    pub fn apply(self) -> Result<(), Error> {
        let Builder {
            level,
            file,
            redirect_stderr,
            layout,
        } = self;

        let destination = match file.filter(|path| !path.as_os_str().is_empty()) {
            Some(path) => {
                let file = FileDestination::open(&path)?;
                if redirect_stderr {
                    file.redirect_stderr()?;
                }
                Some(Destination::File(file))
            }
            None => None,
        };

        logger::configure(level, destination, layout);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<HashMap<_, _>>();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = builder();
        assert_eq!(config.level, None);
        assert_eq!(config.file, None);
        assert!(config.redirect_stderr);
        assert!(config.layout.is_none());
    }

    #[test]
    fn test_from_lookup() {
        let config = builder().from_lookup(lookup(&[
            (LEVEL_ENV, "warning"),
            (FILE_ENV, "/tmp/app.log"),
        ]));
        assert_eq!(config.level, Some(Level::Warn));
        assert_eq!(config.file, Some(PathBuf::from("/tmp/app.log")));

        let config = builder().from_lookup(lookup(&[(LEVEL_ENV, "20")]));
        assert_eq!(config.level, Some(Level::Debug));
        assert_eq!(config.file, None);
    }

    #[test]
    fn test_from_lookup_ignores_garbage() {
        let config = builder()
            .level(Level::Error)
            .from_lookup(lookup(&[(LEVEL_ENV, "9999"), (FILE_ENV, "  ")]));
        assert_eq!(config.level, Some(Level::Error));
        assert_eq!(config.file, None);
    }

    #[test]
    fn test_unwritable_file_fails_before_any_change() {
        let temp_file = tempfile::NamedTempFile::new().unwrap();
        let err = builder()
            .file(temp_file.path().join("app.log"))
            .apply()
            .unwrap_err();
        assert_eq!(err.message(), "failed to open log file");
    }
}
