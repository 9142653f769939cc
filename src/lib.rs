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

//! Thin-LVM pool utilization report for Proxmox VE hosts.
//!
//! The crate authenticates against each host's management API, reads the
//! node's thin pools and renders a report ordered by usage.

pub mod cli;
pub mod error;
pub mod inventory;
pub mod metrics;
pub mod network;
pub mod prelude;
pub mod report;
pub mod traits;
pub mod utils;

pub mod common {
    pub mod config;
}

pub use error::{Error, Result};
