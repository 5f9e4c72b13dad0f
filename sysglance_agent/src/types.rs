//! Wire format of `GET /system-info`.
//! Keep this module minimal and stable: the dashboard decodes every field strictly.

use serde::Serialize;

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct SystemInfo {
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
