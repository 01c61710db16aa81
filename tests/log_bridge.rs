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

use std::fs;

use logline::Level;

fn main() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bridge.log");

    logline::builder()
        .level(Level::Info)
        .file(&path)
        .redirect_stderr(false)
        .apply()
        .unwrap();
    logline::bridge::setup_log_crate();
    assert_eq!(log::max_level(), log::LevelFilter::Info);
    assert!(logline::bridge::try_setup_log_crate().is_err());

    log::info!("info through log");
    log::debug!("dropped");
    log::warn!("warn through log");

    logline::set_level(Level::Debug);
    assert_eq!(log::max_level(), log::LevelFilter::Debug);
    log::debug!("debug through log");
    log::trace!("dropped");

    logline::set_level(Level::Fatal);
    assert_eq!(log::max_level(), log::LevelFilter::Error);
    log::error!("dropped: below fatal");

    assert!(logline::init(Level::Off.rank(), None));
    assert_eq!(log::max_level(), log::LevelFilter::Off);
    log::error!("dropped");

    let contents = fs::read_to_string(&path).unwrap();
    let lines = contents.lines().collect::<Vec<_>>();
    assert_eq!(lines.len(), 3, "{contents}");
    assert!(
        lines[0].ends_with("| INFO    | info through log"),
        "{contents}"
    );
    assert!(
        lines[1].ends_with("| WARNING | warn through log"),
        "{contents}"
    );
    assert!(
        lines[2].ends_with("| DEBUG   | debug through log"),
        "{contents}"
    );
}
