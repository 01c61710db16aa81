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

//! Logline is a minimal process-wide logger: one formatted line per call, written
//! to standard error or appended to a file, gated by a global threshold.
//!
//! # Overview
//!
//! Every line has the shape
//!
//! ```text
//! {timestamp} | {pid:>6} | {thread_id} | {LEVEL:<7} | {message}
//! ```
//!
//! and reaches the destination in a single write, so lines from concurrent
//! threads or processes sharing one file never mix.
//!
//! # Examples
//!
//! Log to stderr at the default `INFO` threshold:
//!
//! ```
//! logline::info!("This is an info message.");
//! logline::debug!("Not written: below the threshold.");
//! ```
//!
//! Lower the threshold and append to a file:
//!
//! ```no_run
//! use logline::Level;
//!
//! logline::builder()
//!     .level(Level::Debug)
//!     .file("/var/log/app.log")
//!     .apply()
//!     .unwrap();
//!
//! logline::debug!("Now written to /var/log/app.log.");
//! logline::warn_if!(1 + 1 == 2, "Conditional, labelled WARNING.");
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub mod append;
#[cfg(feature = "bridge-log")]
pub mod bridge;
pub mod layout;

mod builder;
mod error;
mod level;
mod logger;
mod macros;

pub use self::append::Destination;
pub use self::builder::*;
pub use self::error::Error;
pub use self::layout::LineLayout;
pub use self::level::Level;
pub use self::logger::*;
