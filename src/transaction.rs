use std::fmt::Display;

use colored::Colorize;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
pub enum TransactionSide {
    Buy,
    Sell,
}

// date is a display string, most recent rows first by convention
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Transaction {
    pub id: Uuid,
    pub date: String,
    pub symbol: String,
    pub side: TransactionSide,
    pub amount: Decimal,
    pub user: String,
}

impl Display for Transaction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {} $ {} ({})",
            self.date,
            match self.side {
                TransactionSide::Buy => "BUY ".green(),
                TransactionSide::Sell => "SELL".red(),
            },
            self.symbol,
            self.amount.round_dp(2),
            self.user
        )
    }
}
