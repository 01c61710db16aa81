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

//! Bridge for the [`log`] crate.

use std::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering;

use crate::Error;
use crate::Level;

static INSTALLED: AtomicBool = AtomicBool::new(false);

struct LogCrateLogger(());

impl log::Log for LogCrateLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        crate::enabled(metadata.level().into())
    }

    fn log(&self, record: &log::Record) {
        let level = Level::from(record.level());
        if crate::enabled(level) {
            crate::write(level.label(), *record.args());
        }
    }

    fn flush(&self) {}
}

/// Set up logline as the global logger of the [`log`] crate.
///
/// Records from `log::info!` and friends pass the same threshold and reach the
/// same destination as [`info!`](crate::info). `log`'s max level follows the
/// threshold from then on.
///
/// # Errors
///
/// Returns an error if a global logger has already been set for the `log` crate.
pub fn try_setup_log_crate() -> Result<(), Error> {
    static LOGGER: LogCrateLogger = LogCrateLogger(());

    if let Err(source) = log::set_logger(&LOGGER) {
        let err = Error::new("failed to set up the log crate logger");
        return Err(err.with_source(source));
    }
    INSTALLED.store(true, Ordering::Release);
    log::set_max_level(crate::level().into());
    Ok(())
}

/// Set up logline as the global logger of the [`log`] crate.
///
/// # Panics
///
/// Panics if a global logger has already been set for the `log` crate.
pub fn setup_log_crate() {
    try_setup_log_crate().expect(
        "logline::bridge::setup_log_crate must be called before the log crate global logger initialized",
    )
}

pub(crate) fn sync_max_level(level: Level) {
    if INSTALLED.load(Ordering::Acquire) {
        log::set_max_level(level.into());
    }
}
