//! Acquisition loop: fetch-on-demand plus optional fixed-interval auto-refresh.
//!
//! Fetches run as spawned tasks and report back over a channel, so every state
//! mutation happens wherever the owner drives [`Poller::pump`] (or
//! [`Poller::next_event`] + [`Poller::handle`]). Manual and timer fetches are not
//! fenced against each other unless the dashboard was built with fencing on.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::debug;

use crate::error::FetchError;
use crate::source::SnapshotSource;
use crate::state::{Dashboard, FetchTicket, ViewMode};
use crate::timer::RefreshTimer;
use crate::types::Snapshot;

#[derive(Debug)]
pub enum PollEvent {
    Tick { generation: u64 },
    Fetched(FetchTicket, Result<Snapshot, FetchError>),
}

pub struct Poller<S: SnapshotSource> {
    state: Dashboard,
    source: Arc<S>,
    interval: Duration,
    tx: UnboundedSender<PollEvent>,
    rx: UnboundedReceiver<PollEvent>,
    // at most one live timer
    timer: Option<RefreshTimer>,
    generation: u64,
}

impl<S: SnapshotSource> Poller<S> {
    pub fn new(source: S, interval: Duration, state: Dashboard) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            state,
            source: Arc::new(source),
            interval,
            tx,
            rx,
            timer: None,
            generation: 0,
        }
    }

    pub fn state(&self) -> &Dashboard {
        &self.state
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn timer_armed(&self) -> bool {
        self.timer.is_some()
    }

    /// Initial fetch happens regardless of the auto-refresh flag.
    pub fn mount(&mut self) {
        self.start_fetch();
        if self.state.auto_refresh() {
            self.arm_timer();
        }
    }

    /// Returns false when a request is already outstanding.
    pub fn refresh_now(&mut self) -> bool {
        if !self.state.can_refresh() {
            return false;
        }
        self.start_fetch();
        true
    }

    pub fn toggle_auto_refresh(&mut self) -> bool {
        let on = self.state.toggle_auto_refresh();
        if on {
            self.arm_timer();
        } else {
            self.disarm_timer();
        }
        on
    }

    pub fn select_view(&mut self, mode: ViewMode) -> bool {
        self.state.select_view(mode)
    }

    pub async fn next_event(&mut self) -> Option<PollEvent> {
        self.rx.recv().await
    }

    pub fn handle(&mut self, event: PollEvent) {
        match event {
            PollEvent::Tick { generation } => {
                let live = self.timer.as_ref().map(RefreshTimer::generation);
                if live == Some(generation) {
                    self.start_fetch();
                } else {
                    debug!(generation, "ignoring tick from a disarmed timer");
                }
            }
            PollEvent::Fetched(ticket, result) => self.state.complete_fetch(ticket, result),
        }
    }

    /// Wait for one event and apply it.
    pub async fn pump(&mut self) {
        if let Some(ev) = self.next_event().await {
            self.handle(ev);
        }
    }

    /// Disarm the timer. Results of fetches still in flight are dropped with the receiver.
    pub fn teardown(mut self) {
        self.disarm_timer();
    }

    fn start_fetch(&mut self) {
        let ticket = self.state.begin_fetch();
        let source = Arc::clone(&self.source);
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = source.fetch().await;
            // send fails only after teardown
            let _ = tx.send(PollEvent::Fetched(ticket, result));
        });
    }

    fn arm_timer(&mut self) {
        self.disarm_timer();
        self.generation += 1;
        self.timer = RefreshTimer::arm(self.interval, self.generation, self.tx.clone());
    }

    fn disarm_timer(&mut self) {
        self.timer = None;
    }
}
