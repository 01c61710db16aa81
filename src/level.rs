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

//! Severity levels and the threshold predicate.

use std::fmt;
use std::str::FromStr;

use crate::Error;

/// An enum representing the available severity levels, in increasing rank.
///
/// [`Level::Off`] is only meaningful as a threshold: it disables all output.
#[repr(u8)]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
pub enum Level {
    /// Disables all levels.
    Off = 0,
    /// Designates very low priority, often extremely verbose, information.
    Trace = 10,
    /// Designates lower priority information.
    Debug = 20,
    /// Designates useful information.
    #[default]
    Info = 30,
    /// Designates hazardous situations.
    Warn = 40,
    /// Designates very serious errors.
    Error = 50,
    /// Designates errors after which the process cannot continue.
    Fatal = 60,
}

impl Level {
    /// The threshold in effect before any initialization.
    pub const DEFAULT: Level = Level::Info;

    /// All levels, `Off` first, in increasing rank.
    pub const ALL: [Level; 7] = [
        Level::Off,
        Level::Trace,
        Level::Debug,
        Level::Info,
        Level::Warn,
        Level::Error,
        Level::Fatal,
    ];

    /// Return the numeric rank used for threshold comparison.
    pub const fn rank(self) -> i32 {
        self as i32
    }

    /// Look up the level with exactly the given rank.
    ///
    /// ```
    /// use logline::Level;
    ///
    /// assert_eq!(Level::from_rank(20), Some(Level::Debug));
    /// assert_eq!(Level::from_rank(25), None);
    /// assert_eq!(Level::from_rank(9999), None);
    /// ```
    pub const fn from_rank(rank: i32) -> Option<Level> {
        match rank {
            0 => Some(Level::Off),
            10 => Some(Level::Trace),
            20 => Some(Level::Debug),
            30 => Some(Level::Info),
            40 => Some(Level::Warn),
            50 => Some(Level::Error),
            60 => Some(Level::Fatal),
            _ => None,
        }
    }

    /// Return the label printed in the level column of a log line.
    pub const fn label(self) -> &'static str {
        match self {
            Level::Off => "OFF",
            Level::Trace => "TRACE",
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARNING",
            Level::Error => "ERROR",
            Level::Fatal => "FATAL",
        }
    }

    /// Return the lowercase name of the level, as accepted by [`FromStr`].
    pub const fn as_str(self) -> &'static str {
        match self {
            Level::Off => "off",
            Level::Trace => "trace",
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Warn => "warn",
            Level::Error => "error",
            Level::Fatal => "fatal",
        }
    }

    /// Check whether a message at `level` passes `threshold`.
    ///
    /// An `Off` threshold rejects everything, and `Off` is never a valid message level.
    ///
    /// ```
    /// use logline::Level;
    ///
    /// assert!(Level::admits(Level::Info, Level::Warn));
    /// assert!(!Level::admits(Level::Info, Level::Debug));
    /// assert!(!Level::admits(Level::Off, Level::Fatal));
    /// ```
    pub const fn admits(threshold: Level, level: Level) -> bool {
        !matches!(threshold, Level::Off)
            && !matches!(level, Level::Off)
            && level.rank() >= threshold.rank()
    }

    pub(crate) const fn from_u8(rank: u8) -> Level {
        match Level::from_rank(rank as i32) {
            Some(level) => level,
            None => Level::DEFAULT,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Level {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(rank) = s.parse::<i32>() {
            return match Level::from_rank(rank) {
                Some(level) => Ok(level),
                None => Err(unrecognized("rank", s)),
            };
        }

        match s.to_ascii_lowercase().as_str() {
            "off" => Ok(Level::Off),
            "trace" => Ok(Level::Trace),
            "debug" => Ok(Level::Debug),
            "info" => Ok(Level::Info),
            "warn" | "warning" => Ok(Level::Warn),
            "error" => Ok(Level::Error),
            "fatal" => Ok(Level::Fatal),
            _ => Err(unrecognized("name", s)),
        }
    }
}

fn unrecognized(kind: &str, input: &str) -> Error {
    Error::new(format!("unrecognized level {kind}"))
        .with_context("input", input)
}

#[cfg(feature = "bridge-log")]
impl From<log::Level> for Level {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Error => Level::Error,
            log::Level::Warn => Level::Warn,
            log::Level::Info => Level::Info,
            log::Level::Debug => Level::Debug,
            log::Level::Trace => Level::Trace,
        }
    }
}

#[cfg(feature = "bridge-log")]
impl From<Level> for log::LevelFilter {
    fn from(level: Level) -> Self {
        // `log` has no level above Error, so a Fatal threshold still lets
        // Error records reach the gate, which rejects them.
        match level {
            Level::Off => log::LevelFilter::Off,
            Level::Trace => log::LevelFilter::Trace,
            Level::Debug => log::LevelFilter::Debug,
            Level::Info => log::LevelFilter::Info,
            Level::Warn => log::LevelFilter::Warn,
            Level::Error | Level::Fatal => log::LevelFilter::Error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admits_every_pair() {
        for threshold in Level::ALL {
            for level in Level::ALL {
                let expected = threshold != Level::Off
                    && level != Level::Off
                    && level.rank() >= threshold.rank();
                assert_eq!(
                    Level::admits(threshold, level),
                    expected,
                    "threshold={threshold}, level={level}"
                );
            }
        }
    }

    #[test]
    fn test_info_threshold() {
        let admitted = Level::ALL
            .into_iter()
            .filter(|level| Level::admits(Level::Info, *level))
            .collect::<Vec<_>>();
        assert_eq!(
            admitted,
            vec![Level::Info, Level::Warn, Level::Error, Level::Fatal]
        );
    }

    #[test]
    fn test_ranks_round_trip() {
        for level in Level::ALL {
            assert_eq!(Level::from_rank(level.rank()), Some(level));
            assert_eq!(Level::from_u8(level as u8), level);
        }
        assert_eq!(Level::from_rank(-1), None);
        assert_eq!(Level::from_rank(61), None);
        assert_eq!(Level::from_rank(35), None);
    }

    #[test]
    fn test_labels_fit_column() {
        for level in Level::ALL {
            assert!(level.label().len() <= 7, "{}", level.label());
        }
        assert_eq!(Level::Warn.label(), "WARNING");
    }

    #[test]
    fn test_parse() {
        assert_eq!("WARNING".parse::<Level>().unwrap(), Level::Warn);
        assert_eq!(" debug ".parse::<Level>().unwrap(), Level::Debug);
        assert_eq!("0".parse::<Level>().unwrap(), Level::Off);
        assert_eq!("60".parse::<Level>().unwrap(), Level::Fatal);

        let err = "verbose".parse::<Level>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "unrecognized level name, context: { input: verbose }"
        );
        assert!("9999".parse::<Level>().is_err());
    }

    #[test]
    fn test_default_is_info() {
        assert_eq!(Level::default(), Level::DEFAULT);
        assert_eq!(Level::from_u8(99), Level::Info);
    }
}
