// Copyright 2025 Lablup Inc. and Jeongkyu Shin
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

use clap::{Parser, ValueEnum};

use crate::common::config::AppConfig;
use crate::inventory::HostEntry;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Hosts to query, as IP=NODE pairs.
    #[arg(long, num_args = 1..)]
    pub hosts: Option<Vec<HostEntry>>,
    /// A file with one "IP NODE" (or IP=NODE) pair per line. Lines starting with '#' are ignored.
    #[arg(long)]
    pub hostfile: Option<String>,
    /// Login user, without the realm.
    #[arg(short, long, default_value = AppConfig::DEFAULT_USERNAME)]
    pub username: String,
    /// Login password.
    #[arg(short, long)]
    pub password: String,
    /// Authentication realm.
    #[arg(long, default_value = AppConfig::DEFAULT_REALM)]
    pub realm: String,
    /// Maximum number of hosts queried at once. Use 1 to query hosts one after another.
    #[arg(short, long)]
    pub concurrency: Option<usize>,
    /// HTTP timeout in seconds for each request.
    #[arg(short, long, default_value_t = AppConfig::CONNECTION_TIMEOUT_SECS)]
    pub timeout: u64,
    /// Output format.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
    /// Log per-host progress to stderr.
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Tab-separated table, highest usage first.
    Table,
    /// A single JSON document including failed hosts.
    Json,
}
