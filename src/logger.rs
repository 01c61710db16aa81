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

use std::fmt;
use std::io;
use std::mem;
use std::sync::PoisonError;
use std::sync::RwLock;
use std::sync::RwLockReadGuard;
use std::sync::RwLockWriteGuard;
use std::sync::atomic::AtomicU8;
use std::sync::atomic::Ordering;

use crate::Level;
use crate::append::Destination;
use crate::layout::LineLayout;

/// Exit status of a fatal emission when no OS error is pending.
pub const EXIT_FAILURE: i32 = 1;

static THRESHOLD: AtomicU8 = AtomicU8::new(Level::DEFAULT as u8);

static SINK: RwLock<Sink> = RwLock::new(Sink {
    destination: Destination::Stderr,
    layout: LineLayout::new(),
});

#[derive(Debug)]
struct Sink {
    destination: Destination,
    layout: LineLayout,
}

fn read_sink() -> RwLockReadGuard<'static, Sink> {
    SINK.read().unwrap_or_else(PoisonError::into_inner)
}

fn write_sink() -> RwLockWriteGuard<'static, Sink> {
    SINK.write().unwrap_or_else(PoisonError::into_inner)
}

/// Install a configuration in one step.
///
/// `None` fields keep their current value. The destination must already be
/// opened, so this cannot fail half way.
pub(crate) fn configure(
    level: Option<Level>,
    destination: Option<Destination>,
    layout: Option<LineLayout>,
) {
    let mut sink = write_sink();
    if let Some(destination) = destination {
        sink.destination = destination;
    }
    if let Some(layout) = layout {
        sink.layout = layout;
    }
    if let Some(level) = level {
        store_threshold(level);
    }
}

fn store_threshold(level: Level) {
    THRESHOLD.store(level as u8, Ordering::Release);

    #[cfg(feature = "bridge-log")]
    crate::bridge::sync_max_level(level);
}

/// Set the threshold.
pub fn set_level(level: Level) {
    let _sink = write_sink();
    store_threshold(level);
}

/// Return the current threshold.
pub fn level() -> Level {
    Level::from_u8(THRESHOLD.load(Ordering::Acquire))
}

/// Check whether a message at `level` would be written.
///
/// True iff the threshold is not [`Level::Off`] and `level` ranks at or above it.
pub fn enabled(level: Level) -> bool {
    Level::admits(self::level(), level)
}

/// Replace the active destination, returning the previous one.
///
/// Unlike [`init`](crate::init), this does not touch the process's stderr.
pub fn bind_destination(destination: impl Into<Destination>) -> Destination {
    mem::replace(&mut write_sink().destination, destination.into())
}

/// Return a handle to the active destination.
pub fn destination() -> Destination {
    read_sink().destination.clone()
}

/// Write one line labelled `label`, bypassing the threshold.
///
/// Prefer the leveled macros such as [`info!`](crate::info), which check the
/// threshold before evaluating their arguments.
pub fn write(label: &str, args: fmt::Arguments) {
    // Formatting runs outside the lock: a Display impl may log on its own.
    let (layout, destination) = {
        let sink = read_sink();
        (sink.layout.clone(), sink.destination.clone())
    };
    let line = layout.format(label, args);
    destination.write(&line);
}

/// Write one line at `level` if the threshold admits it.
pub fn emit(level: Level, args: fmt::Arguments) {
    if enabled(level) {
        write(level.label(), args);
    }
}

/// Ends the process after a fatal line has been written.
pub trait Terminate {
    /// Terminate with the given exit status.
    fn terminate(&self, code: i32);
}

/// The [`Terminate`] used by [`fatal!`](crate::fatal): calls [`std::process::exit`].
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessExit;

impl Terminate for ProcessExit {
    fn terminate(&self, code: i32) {
        std::process::exit(code)
    }
}

/// Write a FATAL line and terminate the process.
///
/// The exit status is the pending OS error code, or [`EXIT_FAILURE`]. Returns
/// without writing or exiting when the threshold is [`Level::Off`].
pub fn emit_fatal(args: fmt::Arguments) {
    emit_fatal_with(&ProcessExit, args)
}

/// Like [`emit_fatal`], with a caller-provided terminator.
pub fn emit_fatal_with(terminator: &dyn Terminate, args: fmt::Arguments) {
    let os_error = io::Error::last_os_error().raw_os_error().unwrap_or(0);
    if !enabled(Level::Fatal) {
        return;
    }

    write(Level::Fatal.label(), args);
    terminator.terminate(exit_code(os_error));
}

fn exit_code(os_error: i32) -> i32 {
    if os_error != 0 {
        os_error
    } else {
        EXIT_FAILURE
    }
}
