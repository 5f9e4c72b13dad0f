//! Bounded history buffer feeding the trend charts.

use std::collections::{vec_deque, VecDeque};

use crate::types::{HistoryPoint, Metric};

/// Roughly one hour of points at the default one-minute refresh.
pub const HISTORY_CAP: usize = 60;

pub fn push_capped<T>(dq: &mut VecDeque<T>, v: T, cap: usize) {
    if cap == 0 {
        return;
    }
    while dq.len() >= cap {
        dq.pop_front();
    }
    dq.push_back(v);
}

// Oldest first; drops from the front once full
#[derive(Debug, Clone)]
pub struct HistoryBuffer {
    points: VecDeque<HistoryPoint>,
    cap: usize,
}

impl HistoryBuffer {
    pub fn new(cap: usize) -> Self {
        Self {
            points: VecDeque::with_capacity(cap),
            cap,
        }
    }

    pub fn push(&mut self, p: HistoryPoint) {
        push_capped(&mut self.points, p, self.cap);
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn cap(&self) -> usize {
        self.cap
    }

    pub fn iter(&self) -> vec_deque::Iter<'_, HistoryPoint> {
        self.points.iter()
    }

    pub fn series(&self, metric: Metric) -> Vec<f64> {
        self.points.iter().map(|p| p.value(metric)).collect()
    }

    /// `(index, percent)` pairs for a chart dataset.
    pub fn chart_points(&self, metric: Metric) -> Vec<(f64, f64)> {
        self.points
            .iter()
            .enumerate()
            .map(|(i, p)| (i as f64, p.value(metric)))
            .collect()
    }

    pub fn labels(&self) -> Vec<&str> {
        self.points.iter().map(|p| p.timestamp.as_str()).collect()
    }
}

impl Default for HistoryBuffer {
    fn default() -> Self {
        Self::new(HISTORY_CAP)
    }
}
