//! Types that mirror the endpoint's JSON schema, plus the reduced history projection.

use chrono::{DateTime, Local, NaiveDateTime, TimeZone};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Snapshot {
    pub timestamp: String,
    pub cpu_usage_percent: f64,
    pub cpu_usage_label: String,
    pub memory_total_gb: f64,
    pub memory_used_gb: f64,
    pub memory_remaining_gb: f64,
    pub memory_percent: f64,
    pub disk_total_gb: f64,
    pub disk_used_gb: f64,
    pub disk_remaining_gb: f64,
    pub disk_percent: f64,
}

/// Which of the three tracked percentages a series refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Cpu,
    Memory,
    Disk,
}

impl Metric {
    pub const ALL: [Metric; 3] = [Metric::Cpu, Metric::Memory, Metric::Disk];

    pub fn title(self) -> &'static str {
        match self {
            Metric::Cpu => "CPU Usage",
            Metric::Memory => "Memory Usage",
            Metric::Disk => "Disk Usage",
        }
    }

    pub fn percent_of(self, s: &Snapshot) -> f64 {
        match self {
            Metric::Cpu => s.cpu_usage_percent,
            Metric::Memory => s.memory_percent,
            Metric::Disk => s.disk_percent,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HistoryPoint {
    // display form, already converted to local wall-clock time
    pub timestamp: String,
    pub cpu_usage_percent: f64,
    pub memory_percent: f64,
    pub disk_percent: f64,
}

impl HistoryPoint {
    pub fn from_snapshot(s: &Snapshot) -> Self {
        Self {
            timestamp: display_time(&s.timestamp),
            cpu_usage_percent: s.cpu_usage_percent,
            memory_percent: s.memory_percent,
            disk_percent: s.disk_percent,
        }
    }

    pub fn value(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Cpu => self.cpu_usage_percent,
            Metric::Memory => self.memory_percent,
            Metric::Disk => self.disk_percent,
        }
    }
}

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];

/// Reformat a snapshot timestamp as local `HH:MM:SS`; unparseable input is returned as-is.
pub fn display_time(raw: &str) -> String {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.with_timezone(&Local).format("%H:%M:%S").to_string();
    }
    for fmt in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt) {
            // naive stamps are taken as already local
            return match Local.from_local_datetime(&naive).earliest() {
                Some(dt) => dt.format("%H:%M:%S").to_string(),
                None => naive.format("%H:%M:%S").to_string(),
            };
        }
    }
    raw.to_string()
}

#[cfg(test)]
pub(crate) fn sample_snapshot(cpu: f64) -> Snapshot {
    Snapshot {
        timestamp: "2024-05-01 13:45:10".into(),
        cpu_usage_percent: cpu,
        cpu_usage_label: format!("{cpu:.2}%"),
        memory_total_gb: 16.0,
        memory_used_gb: 8.0,
        memory_remaining_gb: 8.0,
        memory_percent: 50.0,
        disk_total_gb: 512.0,
        disk_used_gb: 128.0,
        disk_remaining_gb: 384.0,
        disk_percent: 25.0,
    }
}
