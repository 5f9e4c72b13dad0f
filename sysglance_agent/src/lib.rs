//! sysglance_agent: serves host CPU, memory and disk readings at `GET /system-info`.

pub mod api;
pub mod cli;
pub mod metrics;
pub mod state;
pub mod types;

pub use api::router;
pub use state::AppState;
