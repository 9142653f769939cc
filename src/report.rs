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

//! Rendering of collected usage records.
//!
//! Rows are ordered by usage percentage, highest first. Each record is
//! printed exactly once; records sharing a usage value all appear, ordered
//! by address.

use std::collections::HashSet;
use std::io::{self, Write};

use chrono::{DateTime, TimeZone};
use serde::Serialize;

use crate::metrics::{CollectionReport, HostFailure, UsageRecord};

pub const TABLE_HEADER: &str = "host_ip\t\t|\tused%\t|\tfree_size(TiB)";

/// Order records for display: one row per address, highest usage first.
pub fn sort_records(records: &[UsageRecord]) -> Vec<&UsageRecord> {
    let mut seen = HashSet::new();
    let mut rows: Vec<&UsageRecord> = records
        .iter()
        .filter(|record| seen.insert(record.ip.as_str()))
        .collect();

    rows.sort_by(|a, b| {
        b.usage_value()
            .total_cmp(&a.usage_value())
            .then_with(|| a.ip.cmp(&b.ip))
    });
    rows
}

/// `exec time: 2025-01-06 09:30:00 Monday`
pub fn format_banner<Tz>(now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    format!("exec time: {}", now.format("%Y-%m-%d %H:%M:%S %A"))
}

pub fn format_row(record: &UsageRecord) -> String {
    format!(
        "{}\t|\t{}\t|\t{}",
        record.ip, record.usage_percent, record.free_tib
    )
}

/// Write the banner, header and sorted rows.
pub fn render_table<W, Tz>(
    out: &mut W,
    now: &DateTime<Tz>,
    records: &[UsageRecord],
) -> io::Result<()>
where
    W: Write,
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    writeln!(out, "{}\n", format_banner(now))?;
    writeln!(out, "{TABLE_HEADER}")?;
    for record in sort_records(records) {
        writeln!(out, "{}", format_row(record))?;
    }
    Ok(())
}

#[derive(Serialize)]
struct JsonReport<'a> {
    exec_time: String,
    records: Vec<&'a UsageRecord>,
    failures: &'a [HostFailure],
}

/// Write the report as a single JSON document.
pub fn render_json<W, Tz>(
    out: &mut W,
    now: &DateTime<Tz>,
    report: &CollectionReport,
) -> io::Result<()>
where
    W: Write,
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let document = JsonReport {
        exec_time: now.to_rfc3339(),
        records: sort_records(&report.records),
        failures: &report.failures,
    };
    serde_json::to_writer_pretty(&mut *out, &document)?;
    writeln!(out)
}

/// Summarize failed hosts, one line each.
pub fn render_failures<W: Write>(out: &mut W, failures: &[HostFailure]) -> io::Result<()> {
    for failure in failures {
        writeln!(
            out,
            "failed: {} ({}): {}",
            failure.host.ip, failure.host.hostname, failure.error
        )?;
    }
    Ok(())
}
