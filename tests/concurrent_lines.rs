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

use std::collections::HashMap;
use std::fs;
use std::thread;

use logline::Level;

const THREADS: usize = 8;
const LINES_PER_THREAD: usize = 500;

fn main() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("concurrent.log");

    logline::builder()
        .level(Level::Info)
        .file(&path)
        .redirect_stderr(false)
        .apply()
        .unwrap();

    let workers = (0..THREADS)
        .map(|worker| {
            thread::spawn(move || {
                // padding makes a torn write easy to spot
                let padding = "x".repeat(worker * 10);
                for seq in 0..LINES_PER_THREAD {
                    logline::info!("[worker {worker}] seq {seq} {padding}");
                    logline::debug!("[worker {worker}] filtered {seq}");
                }
            })
        })
        .collect::<Vec<_>>();
    for worker in workers {
        worker.join().unwrap();
    }

    let contents = fs::read_to_string(&path).unwrap();
    assert!(contents.ends_with('\n'));

    let lines = contents.lines().collect::<Vec<_>>();
    assert_eq!(lines.len(), THREADS * LINES_PER_THREAD);

    let mut next_seq = HashMap::new();
    let mut thread_ids = HashMap::new();
    for line in lines {
        let fields = line.split(" | ").collect::<Vec<_>>();
        assert_eq!(fields.len(), 5, "torn line: {line}");
        assert_eq!(fields[1].trim(), std::process::id().to_string(), "{line}");
        assert_eq!(fields[3].trim_end(), "INFO", "{line}");

        let message = fields[4];
        let rest = message.strip_prefix("[worker ").expect(line);
        let (worker, rest) = rest.split_once("] seq ").expect(line);
        let worker = worker.parse::<usize>().unwrap();
        let (seq, padding) = rest.split_once(' ').expect(line);
        let seq = seq.parse::<usize>().unwrap();
        assert_eq!(padding, "x".repeat(worker * 10), "{line}");

        // per-thread call order survives
        let expected = next_seq.entry(worker).or_insert(0);
        assert_eq!(seq, *expected, "{line}");
        *expected += 1;

        // one stable thread id per worker
        let tid = thread_ids.entry(worker).or_insert(fields[2]);
        assert_eq!(*tid, fields[2], "{line}");
    }

    assert_eq!(next_seq.len(), THREADS);
    assert!(next_seq.values().all(|seq| *seq == LINES_PER_THREAD));
}
