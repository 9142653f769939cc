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

//! The thinpool-report prelude.
//!
//! ```rust
//! use thinpool_report::prelude::*;
//! ```

pub use crate::error::{Error, Result};

pub use crate::inventory::{dedup_hosts, load_hostfile, parse_host_list, HostEntry};

pub use crate::network::{
    ApiEndpoint, ClientConfig, Credentials, PveClient, SessionCredential, ThinPoolStat,
};

pub use crate::metrics::{collect_usage, CollectionReport, HostFailure, HostOutcome, UsageRecord};

pub use crate::traits::ThinPoolSource;
