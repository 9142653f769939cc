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

use serde::{Deserialize, Serialize};

use crate::network::types::ThinPoolStat;
use crate::utils::{bytes_to_tib, percent_of, two_decimals};

/// Per-host thin pool utilization, ready for display.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct UsageRecord {
    pub ip: String,
    /// Used percentage, two decimals.
    pub usage_percent: String,
    /// Free capacity in TiB, two decimals.
    pub free_tib: String,
}

impl UsageRecord {
    /// Build a record from a pool entry. Returns `None` for a zero-sized pool,
    /// which has no meaningful usage percentage.
    pub fn from_pool(ip: impl Into<String>, pool: &ThinPoolStat) -> Option<Self> {
        if pool.size_bytes == 0 {
            return None;
        }

        let usage_value = percent_of(pool.used_bytes, pool.size_bytes);
        let free_value = bytes_to_tib(pool.size_bytes.saturating_sub(pool.used_bytes));

        Some(Self {
            ip: ip.into(),
            usage_percent: two_decimals(usage_value),
            free_tib: two_decimals(free_value),
        })
    }

    /// Numeric value of the formatted usage, as displayed.
    pub fn usage_value(&self) -> f64 {
        self.usage_percent.parse().unwrap_or(f64::NEG_INFINITY)
    }
}
