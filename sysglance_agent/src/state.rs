//! Shared agent state: persistent sysinfo handles reused across requests.

use std::sync::Arc;
use sysinfo::{CpuRefreshKind, Disks, MemoryRefreshKind, RefreshKind, System};
use tokio::sync::Mutex;

pub type SharedSystem = Arc<Mutex<System>>;
pub type SharedDisks = Arc<Mutex<Disks>>;

#[derive(Clone)]
pub struct AppState {
    pub sys: SharedSystem,
    pub disks: SharedDisks,
}

impl AppState {
    pub fn new() -> Self {
        let refresh_kind = RefreshKind::nothing()
            .with_cpu(CpuRefreshKind::everything())
            .with_memory(MemoryRefreshKind::everything());
        let mut sys = System::new_with_specifics(refresh_kind);
        // CPU usage is a delta: take the baseline now so the first request has one
        sys.refresh_cpu_usage();

        Self {
            sys: Arc::new(Mutex::new(sys)),
            disks: Arc::new(Mutex::new(Disks::new_with_refreshed_list())),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
