//! Metrics collection using sysinfo for sysglance_agent.

use std::collections::HashSet;

use chrono::Local;
use tracing::debug;

use crate::state::AppState;
use crate::types::SystemInfo;

const GIB: f64 = 1024.0 * 1024.0 * 1024.0;

pub fn bytes_to_gb(bytes: u64) -> f64 {
    bytes as f64 / GIB
}

pub fn percent(used: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        used as f64 / total as f64 * 100.0
    }
}

/// Raw readings in bytes (CPU in percent) before unit conversion.
#[derive(Debug, Clone, Copy, Default)]
pub struct Readings {
    pub cpu_percent: f32,
    pub mem_total: u64,
    pub mem_available: u64,
    pub disk_total: u64,
    pub disk_available: u64,
}

pub fn build_info(r: Readings, timestamp: String) -> SystemInfo {
    let cpu = f64::from(r.cpu_percent).clamp(0.0, 100.0);
    let mem_used = r.mem_total.saturating_sub(r.mem_available);
    let disk_used = r.disk_total.saturating_sub(r.disk_available);
    SystemInfo {
        timestamp,
        cpu_usage_percent: cpu,
        cpu_usage_label: format!("{cpu:.2}%"),
        memory_total_gb: bytes_to_gb(r.mem_total),
        memory_used_gb: bytes_to_gb(mem_used),
        memory_remaining_gb: bytes_to_gb(r.mem_available),
        memory_percent: percent(mem_used, r.mem_total),
        disk_total_gb: bytes_to_gb(r.disk_total),
        disk_used_gb: bytes_to_gb(disk_used),
        disk_remaining_gb: bytes_to_gb(r.disk_available),
        disk_percent: percent(disk_used, r.disk_total),
    }
}

pub async fn collect_system_info(state: &AppState) -> SystemInfo {
    let mut readings = Readings::default();
    {
        let mut sys = state.sys.lock().await;
        sys.refresh_cpu_usage();
        sys.refresh_memory();
        readings.cpu_percent = sys.global_cpu_usage();
        readings.mem_total = sys.total_memory();
        readings.mem_available = sys.available_memory();
    }
    {
        let mut disks = state.disks.lock().await;
        disks.refresh(false); // don't drop missing disks
        // the same device can be mounted more than once; count it once
        let mut seen = HashSet::new();
        for d in disks.list().iter().filter(|d| seen.insert(d.name().to_owned())) {
            readings.disk_total = readings.disk_total.saturating_add(d.total_space());
            readings.disk_available = readings.disk_available.saturating_add(d.available_space());
        }
    }
    debug!(?readings, "collected system info");

    let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    build_info(readings, timestamp)
}
