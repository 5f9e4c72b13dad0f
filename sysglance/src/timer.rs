//! Auto-refresh timer handle. Arming spawns one periodic task; dropping the
//! handle aborts it, so no polling outlives the dashboard.

use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, warn};

use crate::poller::PollEvent;

pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(60);

pub struct RefreshTimer {
    handle: JoinHandle<()>,
    period: Duration,
    generation: u64,
}

impl RefreshTimer {
    /// First tick fires one full period after arming. Returns `None` when the
    /// first deadline is not representable.
    pub fn arm(
        period: Duration,
        generation: u64,
        tx: UnboundedSender<PollEvent>,
    ) -> Option<Self> {
        let Some(start) = Instant::now().checked_add(period) else {
            warn!(?period, "auto-refresh interval out of range; timer not armed");
            return None;
        };
        let handle = tokio::spawn(async move {
            let mut ticks = interval_at(start, period);
            ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticks.tick().await;
                if tx.send(PollEvent::Tick { generation }).is_err() {
                    break;
                }
            }
        });
        debug!(?period, generation, "auto-refresh armed");
        Some(Self {
            handle,
            period,
            generation,
        })
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl Drop for RefreshTimer {
    fn drop(&mut self) {
        self.handle.abort();
        debug!(generation = self.generation, "auto-refresh disarmed");
    }
}
