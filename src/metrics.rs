use std::fmt::Display;

use colored::Colorize;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct DashboardMetrics {
    pub balance: Decimal,
    pub total_trades: u32,
    pub net_pnl: Decimal,
    pub active_positions: u32,
}

impl Display for DashboardMetrics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let pnl = self.net_pnl.round_dp(2).to_string();
        write!(
            f,
            "$ {} / {} trades / pnl {} / {} open",
            self.balance.round_dp(2).to_string().yellow(),
            self.total_trades,
            if self.net_pnl.is_sign_negative() {
                pnl.red()
            } else {
                pnl.green()
            },
            self.active_positions
        )
    }
}
