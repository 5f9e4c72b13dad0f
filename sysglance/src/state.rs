//! Dashboard state: the latest snapshot, its rolling history, and UI flags.
//!
//! All mutation happens on the event loop; fetches only hand their results
//! back through [`Dashboard::complete_fetch`].

use tracing::{debug, warn};

use crate::error::FetchError;
use crate::history::HistoryBuffer;
use crate::types::{HistoryPoint, Snapshot};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Current,
    History,
}

impl ViewMode {
    pub fn other(self) -> Self {
        match self {
            ViewMode::Current => ViewMode::History,
            ViewMode::History => ViewMode::Current,
        }
    }
}

/// Issued when a fetch starts; handed back with its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    pub seq: u64,
}

#[derive(Debug)]
pub struct Dashboard {
    snapshot: Option<Snapshot>,
    history: HistoryBuffer,
    loading: bool,
    // empty means no error
    error: String,
    view_mode: ViewMode,
    auto_refresh: bool,

    // Request sequencing for optional stale-response fencing
    next_seq: u64,
    last_applied: Option<u64>,
    fence_stale: bool,
}

impl Dashboard {
    pub fn new(history_cap: usize, auto_refresh: bool, fence_stale: bool) -> Self {
        Self {
            snapshot: None,
            history: HistoryBuffer::new(history_cap),
            loading: false,
            error: String::new(),
            view_mode: ViewMode::Current,
            auto_refresh,
            next_seq: 0,
            last_applied: None,
            fence_stale,
        }
    }

    pub fn snapshot(&self) -> Option<&Snapshot> {
        self.snapshot.as_ref()
    }

    pub fn history(&self) -> &HistoryBuffer {
        &self.history
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        if self.error.is_empty() {
            None
        } else {
            Some(&self.error)
        }
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn auto_refresh(&self) -> bool {
        self.auto_refresh
    }

    /// The manual refresh control is disabled while any request is outstanding.
    pub fn can_refresh(&self) -> bool {
        !self.loading
    }

    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.loading = true;
        self.error.clear();
        let ticket = FetchTicket { seq: self.next_seq };
        self.next_seq += 1;
        ticket
    }

    pub fn complete_fetch(&mut self, ticket: FetchTicket, result: Result<Snapshot, FetchError>) {
        match result {
            Ok(snap) => {
                if self.is_stale(ticket) {
                    debug!(seq = ticket.seq, "discarding stale system info response");
                } else {
                    debug!(seq = ticket.seq, cpu = snap.cpu_usage_percent, "system info updated");
                    self.history.push(HistoryPoint::from_snapshot(&snap));
                    self.snapshot = Some(snap);
                    self.last_applied = Some(ticket.seq);
                }
            }
            Err(err) => {
                warn!(seq = ticket.seq, error = %err, "system info fetch failed");
                self.error = err.user_message().to_string();
            }
        }
        self.loading = false;
    }

    fn is_stale(&self, ticket: FetchTicket) -> bool {
        self.fence_stale && self.last_applied.is_some_and(|last| ticket.seq < last)
    }

    /// Returns whether the mode actually changed.
    pub fn select_view(&mut self, mode: ViewMode) -> bool {
        if self.view_mode == mode {
            return false;
        }
        self.view_mode = mode;
        true
    }

    pub fn toggle_auto_refresh(&mut self) -> bool {
        self.auto_refresh = !self.auto_refresh;
        self.auto_refresh
    }
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new(crate::history::HISTORY_CAP, true, false)
    }
}
