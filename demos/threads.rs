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

//! Spawns worker threads that log concurrently to stderr.
//!
//! Usage: `threads [num-threads]`, at most 50.

use std::thread;
use std::time::Duration;

const ROUNDS: usize = 5;

fn main() {
    let args = std::env::args().collect::<Vec<_>>();
    if args.len() > 2 {
        println!("Usage: {} [num-threads]", args[0]);
        std::process::exit(1);
    }

    let max_threads = match args.get(1) {
        Some(arg) => arg.parse::<usize>().unwrap_or(0),
        None => 10,
    };

    logline::builder().from_env().apply().unwrap();

    logline::fatal_if!(max_threads == 0, "No threads");
    logline::fatal_if!(max_threads > 50, "Too many threads ({max_threads})");

    logline::info!("Launching {max_threads} threads");

    let workers = (0..max_threads)
        .map(|id| {
            thread::Builder::new()
                .name(format!("worker-{id}"))
                .spawn(move || run(id))
        })
        .collect::<Vec<_>>();

    logline::info!("[Main] waiting... {}", logline::layout::thread_id());
    for (id, worker) in workers.into_iter().enumerate() {
        let joined = match worker {
            Ok(handle) => handle.join().map_err(|_| "worker panicked".to_string()),
            Err(err) => Err(err.to_string()),
        };
        logline::info_if!(joined.is_ok(), "[Main] thread {id} joined!");
        logline::error_if!(
            joined.is_err(),
            "[Main] unable to join thread {id}: {joined:?}"
        );
    }

    logline::info!("[Main] done!");
}

fn run(id: usize) {
    logline::info!("[Thread {id}] starting {}", logline::layout::thread_id());
    for round in 0..ROUNDS {
        logline::info!("[Thread {id}] working hard: {round}");
        logline::debug!("[Thread {id}] sleeping");
        thread::sleep(Duration::from_millis(10 * (id % 5) as u64));
    }
}
