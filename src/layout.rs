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

//! Rendering of one log line.

use std::fmt;
use std::fmt::Write;

use jiff::Zoned;
use jiff::fmt::strtime;
use jiff::tz::TimeZone;

/// Default upper bound of a rendered line in bytes, newline included.
pub const DEFAULT_MAX_LEN: usize = 1024;

// ISO 8601 with a numeric offset, e.g. 2022-04-07T16:09:33+0100
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%z";

/// A layout that renders `timestamp | pid | thread | LEVEL | message`.
///
/// Output format:
///
/// ```text
/// 2022-04-07T16:09:33+0100 |  12345 | 140245 | INFO    | Hello info!
/// 2022-04-07T16:09:33+0100 |  12345 | 140245 | WARNING | Hello warn!
/// ```
///
/// Lines longer than [`max_len`](LineLayout::max_len) are cut, never split.
#[derive(Debug, Clone)]
pub struct LineLayout {
    tz: Option<TimeZone>,
    max_len: usize,
}

impl Default for LineLayout {
    fn default() -> Self {
        Self::new()
    }
}

impl LineLayout {
    /// Create a layout using the system time zone and [`DEFAULT_MAX_LEN`].
    pub const fn new() -> Self {
        Self {
            tz: None,
            max_len: DEFAULT_MAX_LEN,
        }
    }

    /// Render timestamps in `tz` instead of the system time zone.
    pub fn timezone(mut self, tz: TimeZone) -> Self {
        self.tz = Some(tz);
        self
    }

    /// Set the maximum number of bytes in one rendered line, trailing newline included.
    pub fn max_len(mut self, max_len: usize) -> Self {
        self.max_len = max_len;
        self
    }

    /// Render a line for `label` and `args` at the current time on the calling thread.
    pub fn format(&self, label: &str, args: fmt::Arguments) -> Vec<u8> {
        let timestamp = self.timestamp();
        self.format_parts(&timestamp, std::process::id(), thread_id(), label, args)
    }

    fn timestamp(&self) -> String {
        let now = match self.tz.clone() {
            Some(tz) => Zoned::now().with_time_zone(tz),
            None => Zoned::now(),
        };
        // an unrenderable timestamp leaves the field empty
        strtime::format(TIMESTAMP_FORMAT, &now).unwrap_or_default()
    }

    pub(crate) fn format_parts(
        &self,
        timestamp: &str,
        pid: u32,
        tid: u64,
        label: &str,
        args: fmt::Arguments,
    ) -> Vec<u8> {
        let mut line = BoundedLine::new(self.max_len.saturating_sub(1));

        // Both writes stop at capacity; the error only signals truncation.
        let _ = write!(&mut line, "{timestamp} | {pid:>6} | {tid} | {label:<7} | ");
        let _ = line.write_fmt(args);

        line.finish()
    }
}

struct BoundedLine {
    text: String,
    capacity: usize,
    truncated: bool,
}

impl BoundedLine {
    fn new(capacity: usize) -> Self {
        Self {
            text: String::with_capacity(capacity.min(DEFAULT_MAX_LEN) + 1),
            capacity,
            truncated: false,
        }
    }

    fn finish(mut self) -> Vec<u8> {
        if self.truncated || !self.text.ends_with('\n') {
            self.text.push('\n');
        }
        self.text.into_bytes()
    }
}

impl Write for BoundedLine {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        if self.truncated {
            return Err(fmt::Error);
        }

        let room = self.capacity - self.text.len();
        if s.len() <= room {
            self.text.push_str(s);
            return Ok(());
        }

        let mut end = room;
        while !s.is_char_boundary(end) {
            end -= 1;
        }
        self.text.push_str(&s[..end]);
        self.truncated = true;
        Err(fmt::Error)
    }
}

/// Return an identifier of the calling thread, stable for the thread's lifetime.
#[cfg(unix)]
pub fn thread_id() -> u64 {
    // SAFETY: pthread_self has no preconditions and always succeeds.
    let tid = unsafe { libc::pthread_self() };
    tid as usize as u64
}

/// Return an identifier of the calling thread, stable for the thread's lifetime.
#[cfg(not(unix))]
pub fn thread_id() -> u64 {
    use std::sync::atomic::AtomicU64;
    use std::sync::atomic::Ordering;

    static NEXT_ID: AtomicU64 = AtomicU64::new(1);

    thread_local! {
        static THREAD_ID: u64 = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    }

    THREAD_ID.with(|id| *id)
}
