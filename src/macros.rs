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

#[doc(hidden)]
#[macro_export]
macro_rules! __emit {
    ($level:expr, $($arg:tt)+) => {
        if $crate::enabled($level) {
            $crate::write($level.label(), format_args!($($arg)+));
        }
    };
}

/// Logs a message at the trace level.
///
/// The arguments are evaluated only when the threshold admits the message.
///
/// ```
/// logline::trace!("entering {}", "parse");
/// ```
#[macro_export]
macro_rules! trace {
    ($($arg:tt)+) => {
        $crate::__emit!($crate::Level::Trace, $($arg)+)
    };
}

/// Logs a message at the debug level.
///
/// ```
/// let retries = 3;
/// logline::debug!("retrying, {retries} attempts left");
/// ```
#[macro_export]
macro_rules! debug {
    ($($arg:tt)+) => {
        $crate::__emit!($crate::Level::Debug, $($arg)+)
    };
}

/// Logs a message at the info level.
///
/// ```
/// logline::info!("listening on port {}", 8080);
/// ```
#[macro_export]
macro_rules! info {
    ($($arg:tt)+) => {
        $crate::__emit!($crate::Level::Info, $($arg)+)
    };
}

/// Logs a message at the info level; the default log call.
#[macro_export]
macro_rules! log {
    ($($arg:tt)+) => {
        $crate::info!($($arg)+)
    };
}

/// Logs a message at the warn level, labelled `WARNING`.
#[macro_export]
macro_rules! warn {
    ($($arg:tt)+) => {
        $crate::__emit!($crate::Level::Warn, $($arg)+)
    };
}

/// Logs a message at the error level.
#[macro_export]
macro_rules! error {
    ($($arg:tt)+) => {
        $crate::__emit!($crate::Level::Error, $($arg)+)
    };
}

/// Logs a message at the fatal level, then exits the process.
///
/// The exit status is the pending OS error code if any, else `1`. Nothing
/// happens when the threshold is [`Level::Off`](crate::Level::Off).
///
/// ```no_run
/// let path = "/etc/app.toml";
/// logline::fatal!("cannot read configuration from {path}");
/// ```
#[macro_export]
macro_rules! fatal {
    ($($arg:tt)+) => {
        if $crate::enabled($crate::Level::Fatal) {
            $crate::emit_fatal(format_args!($($arg)+));
        }
    };
}

/// Logs at the trace level when `cond` holds; the message is not evaluated otherwise.
#[macro_export]
macro_rules! trace_if {
    ($cond:expr, $($arg:tt)+) => {
        if $cond {
            $crate::trace!($($arg)+);
        }
    };
}

/// Logs at the debug level when `cond` holds; the message is not evaluated otherwise.
#[macro_export]
macro_rules! debug_if {
    ($cond:expr, $($arg:tt)+) => {
        if $cond {
            $crate::debug!($($arg)+);
        }
    };
}

/// Logs at the info level when `cond` holds; the message is not evaluated otherwise.
///
/// ```
/// let joined = true;
/// logline::info_if!(joined, "worker {} joined", 3);
/// ```
#[macro_export]
macro_rules! info_if {
    ($cond:expr, $($arg:tt)+) => {
        if $cond {
            $crate::info!($($arg)+);
        }
    };
}

/// Logs at the warn level when `cond` holds; the message is not evaluated otherwise.
#[macro_export]
macro_rules! warn_if {
    ($cond:expr, $($arg:tt)+) => {
        if $cond {
            $crate::warn!($($arg)+);
        }
    };
}

/// Logs at the error level when `cond` holds; the message is not evaluated otherwise.
#[macro_export]
macro_rules! error_if {
    ($cond:expr, $($arg:tt)+) => {
        if $cond {
            $crate::error!($($arg)+);
        }
    };
}

/// Logs at the fatal level and exits when `cond` holds.
///
/// ```
/// let threads = 4;
/// logline::fatal_if!(threads == 0, "no threads");
/// ```
#[macro_export]
macro_rules! fatal_if {
    ($cond:expr, $($arg:tt)+) => {
        if $cond {
            $crate::fatal!($($arg)+);
        }
    };
}
