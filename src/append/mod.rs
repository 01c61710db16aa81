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

//! Destinations receiving rendered log lines.

use std::io;
use std::io::Write;

mod file;

pub use self::file::FileDestination;

/// The sink that rendered lines are written to.
///
/// Exactly one destination is active per process; see [`crate::bind_destination`].
#[derive(Debug, Clone, Default)]
pub enum Destination {
    /// The process's standard error stream.
    #[default]
    Stderr,
    /// A file opened in append mode.
    File(FileDestination),
}

impl Destination {
    /// Write one rendered line.
    ///
    /// The whole line is handed to the OS in a single call so that lines from
    /// concurrent writers do not interleave. Failures are dropped.
    pub fn write(&self, line: &[u8]) {
        let _ = self.try_write(line);
    }

    pub(crate) fn try_write(&self, line: &[u8]) -> io::Result<()> {
        match self {
            Destination::Stderr => io::stderr().lock().write_all(line),
            Destination::File(file) => file.write_line(line),
        }
    }

    /// Return `true` if this destination writes to standard error.
    pub fn is_stderr(&self) -> bool {
        matches!(self, Destination::Stderr)
    }
}

impl From<FileDestination> for Destination {
    fn from(file: FileDestination) -> Self {
        Destination::File(file)
    }
}
