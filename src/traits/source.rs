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

use async_trait::async_trait;

use crate::error::Result;
use crate::inventory::HostEntry;
use crate::network::types::ThinPoolStat;

/// Something that can report thin pool statistics for a host.
///
/// The aggregator only depends on this trait, so the HTTP client can be
/// swapped for an in-memory source in tests.
#[async_trait]
pub trait ThinPoolSource: Send + Sync {
    /// Authenticate against the host (if needed) and return its thin pools.
    async fn query_thin_pools(&self, host: &HostEntry) -> Result<Vec<ThinPoolStat>>;

    /// Name used in log messages
    fn source_name(&self) -> &str;
}
