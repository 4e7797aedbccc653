use feed::DashboardSnapshot;
use serde::{Deserialize, Serialize};

pub mod feed;
pub mod holdings;
pub mod metrics;
pub mod transaction;
pub mod tui;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub enum AppEvent {
    Snapshot(DashboardSnapshot),
}
