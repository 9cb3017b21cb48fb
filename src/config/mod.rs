// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Application configuration.
//!
//! This module manages the application configuration file, which says where
//! the catalog API lives and how to talk to it.

use std::time::Duration;

use log::LevelFilter;
use serde::{Deserialize, Serialize};

const CONFIG_NAME: &str = "albumedit";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub version: u32,
    /// Base address of the catalog REST API.
    pub base_url: String,
    /// Status code the API answers with when a write would create a duplicate.
    pub conflict_status: u16,
    pub timeout_secs: u64,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            base_url: "http://localhost:8080".to_string(),
            conflict_status: 302,
            timeout_secs: 15,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// The configured log level, `Info` when it does not parse.
    pub fn log_level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }
}

pub fn load_config() -> AppConfig {
    confy::load(CONFIG_NAME, None).unwrap_or_default()
}
