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

use futures_util::stream::{FuturesUnordered, StreamExt};
use serde::Serialize;
use tokio::sync::Semaphore;
use tracing::{debug, info, warn};

use crate::error::Error;
use crate::inventory::HostEntry;
use crate::metrics::usage::UsageRecord;
use crate::traits::ThinPoolSource;

/// A host whose query failed, and why.
#[derive(Debug)]
pub struct HostFailure {
    pub host: HostEntry,
    pub error: Error,
}

impl Serialize for HostFailure {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("HostFailure", 4)?;
        state.serialize_field("ip", &self.host.ip)?;
        state.serialize_field("hostname", &self.host.hostname)?;
        state.serialize_field("kind", self.error.kind())?;
        state.serialize_field("error", &self.error.to_string())?;
        state.end()
    }
}

/// What happened to a single host.
#[derive(Debug)]
pub enum HostOutcome {
    Record(UsageRecord),
    /// No pool data (empty array or zero-sized pool).
    Skipped(HostEntry),
    Failed(HostFailure),
}

/// Result of polling every configured host.
#[derive(Debug, Default)]
pub struct CollectionReport {
    pub records: Vec<UsageRecord>,
    pub skipped: Vec<HostEntry>,
    pub failures: Vec<HostFailure>,
}

impl CollectionReport {
    pub fn push(&mut self, outcome: HostOutcome) {
        match outcome {
            HostOutcome::Record(record) => self.records.push(record),
            HostOutcome::Skipped(host) => self.skipped.push(host),
            HostOutcome::Failed(failure) => self.failures.push(failure),
        }
    }

    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    /// Number of hosts that were attempted.
    pub fn attempted(&self) -> usize {
        self.records.len() + self.skipped.len() + self.failures.len()
    }
}

/// Query one host and turn the first pool entry into a record.
pub async fn collect_host<S>(source: &S, host: &HostEntry) -> HostOutcome
where
    S: ThinPoolSource + ?Sized,
{
    match source.query_thin_pools(host).await {
        Ok(pools) => match pools.first() {
            Some(pool) => match UsageRecord::from_pool(host.ip.clone(), pool) {
                Some(record) => {
                    debug!(ip = %host.ip, usage = %record.usage_percent, "collected thin pool usage");
                    HostOutcome::Record(record)
                }
                None => {
                    info!(ip = %host.ip, node = %host.hostname, "thin pool reports zero size, skipping");
                    HostOutcome::Skipped(host.clone())
                }
            },
            None => {
                info!(ip = %host.ip, node = %host.hostname, "no thin pools reported, skipping");
                HostOutcome::Skipped(host.clone())
            }
        },
        Err(error) => {
            warn!(
                ip = %host.ip,
                node = %host.hostname,
                source = source.source_name(),
                "query failed: {error}"
            );
            HostOutcome::Failed(HostFailure {
                host: host.clone(),
                error,
            })
        }
    }
}

/// Poll every host with at most `max_concurrency` queries in flight.
///
/// Returns only after every host has been attempted. A failing host never
/// prevents the others from being reported.
pub async fn collect_usage<S>(
    source: &S,
    hosts: &[HostEntry],
    max_concurrency: usize,
) -> CollectionReport
where
    S: ThinPoolSource + ?Sized,
{
    let semaphore = Semaphore::new(max_concurrency.max(1));
    let mut pending = FuturesUnordered::new();

    for host in hosts {
        let semaphore = &semaphore;
        pending.push(async move {
            // The semaphore is never closed
            let _permit = semaphore.acquire().await.ok();
            collect_host(source, host).await
        });
    }

    let mut report = CollectionReport::default();
    while let Some(outcome) = pending.next().await {
        report.push(outcome);
    }

    debug!(
        records = report.records.len(),
        skipped = report.skipped.len(),
        failed = report.failures.len(),
        "collection finished"
    );
    report
}
