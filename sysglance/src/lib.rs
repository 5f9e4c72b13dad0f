//! sysglance: terminal dashboard for a host metrics endpoint.
//!
//! Polls `GET /system-info` on demand and on a fixed interval, keeps the latest
//! snapshot plus a capped rolling history, and renders either live gauges or
//! trend charts.

pub mod app;
pub mod config;
pub mod error;
pub mod history;
pub mod logging;
pub mod poller;
pub mod profiles;
pub mod source;
pub mod state;
pub mod timer;
pub mod types;
pub mod ui;
