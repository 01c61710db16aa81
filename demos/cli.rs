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

//! Writes one line per level, to stderr or to the file given as the only
//! argument, and ends with a fatal exit.

use std::path::Path;

fn main() {
    let args = std::env::args().collect::<Vec<_>>();
    logline::fatal_if!(args.len() > 2, "Invalid arguments count: {}", args.len());

    let path = args.get(1).map(Path::new);
    match path {
        Some(path) => println!("Log file path is: {}", path.display()),
        None => println!("No file selected, logging to STDERR"),
    }

    let mut builder = logline::builder().from_env();
    if let Some(path) = path {
        builder = builder.file(path);
    }
    if let Err(err) = builder.apply() {
        println!("Unable to initialise the log engine: {err}");
        std::process::exit(1);
    }

    let name = &args[0];

    logline::log!("This is a default log message with no args");
    logline::log!("This is a default log message with args: {name}");

    logline::trace!("This is a trace log with no args");
    logline::trace!("This is a trace log with args: {name}");

    logline::debug!("This is a debug log with no args");
    logline::debug!("This is a debug log with args: {name}");

    logline::info!("This is an info log with no args");
    logline::info!("This is an info log with args: {name}");

    logline::warn!("This is a warning log with no args");
    logline::warn!("This is a warning log with args: {name}");
    logline::warn_if!(args.len() < 2, "Arguments count is just {}", args.len());

    logline::error!("This is an error log with no args");
    logline::error!("This is an error log with args: {name}");
    logline::error_if!(args.len() < 2, "Arguments count is just {}", args.len());

    logline::fatal!("This is a fatal log with no args");
    logline::fatal!("This is a fatal log with args: {name}");
}
