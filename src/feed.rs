use chrono::{Duration, Utc};
use rand::seq::IndexedRandom;
use rand::Rng;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::holdings::HoldingPoint;
use crate::metrics::DashboardMetrics;
use crate::transaction::{Transaction, TransactionSide};

const SYMBOLS: [&str; 6] = ["BTC", "ETH", "SOL", "ADA", "XRP", "DOT"];
const USERS: [&str; 5] = ["alice", "bob", "carol", "dave", "erin"];
const MONTHS: [&str; 9] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep",
];

pub const TRANSACTION_COUNT: usize = 8;

// the three feeds bundled for the one-shot send to the view, each view
// instance owns its own copy
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct DashboardSnapshot {
    pub metrics: DashboardMetrics,
    pub transactions: Vec<Transaction>,
    pub holdings: Vec<HoldingPoint>,
}

pub fn snapshot() -> DashboardSnapshot {
    DashboardSnapshot {
        metrics: metrics(),
        transactions: recent_transactions(),
        holdings: holdings(),
    }
}

pub fn metrics() -> DashboardMetrics {
    let mut rng = rand::rng();
    DashboardMetrics {
        balance: Decimal::new(rng.random_range(500_000..=10_000_000), 2),
        total_trades: rng.random_range(25..=500),
        net_pnl: Decimal::new(rng.random_range(-500_000..=1_500_000), 2),
        active_positions: rng.random_range(0..=12),
    }
}

// most recent first, one transaction per day counting back from today
pub fn recent_transactions() -> Vec<Transaction> {
    let mut rng = rand::rng();
    let today = Utc::now().date_naive();

    (0..TRANSACTION_COUNT)
        .map(|i| Transaction {
            id: Uuid::new_v4(),
            date: (today - Duration::days(i as i64))
                .format("%Y-%m-%d")
                .to_string(),
            symbol: SYMBOLS.choose(&mut rng).unwrap_or(&"BTC").to_string(),
            side: if rng.random_bool(0.5) {
                TransactionSide::Buy
            } else {
                TransactionSide::Sell
            },
            amount: Decimal::new(rng.random_range(5_000..=2_500_000), 2),
            user: USERS.choose(&mut rng).unwrap_or(&"alice").to_string(),
        })
        .collect()
}

pub fn holdings() -> Vec<HoldingPoint> {
    let mut rng = rand::rng();
    MONTHS
        .iter()
        .map(|month| HoldingPoint::new(month, Decimal::from(rng.random_range(10_000u32..=90_000))))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::collections::HashSet;

    #[test]
    fn test_metrics_within_ranges() {
        let metrics = metrics();
        assert!(metrics.balance >= dec!(5000) && metrics.balance <= dec!(100000));
        assert!((25..=500).contains(&metrics.total_trades));
        assert!(metrics.net_pnl >= dec!(-5000) && metrics.net_pnl <= dec!(15000));
        assert!(metrics.active_positions <= 12);
    }

    #[test]
    fn test_transactions_have_unique_ids() {
        let transactions = recent_transactions();
        assert_eq!(transactions.len(), TRANSACTION_COUNT);
        let ids: HashSet<_> = transactions.iter().map(|tx| tx.id).collect();
        assert_eq!(ids.len(), transactions.len());
    }

    #[test]
    fn test_transactions_drawn_from_known_sets() {
        for tx in recent_transactions() {
            assert!(SYMBOLS.contains(&tx.symbol.as_str()));
            assert!(USERS.contains(&tx.user.as_str()));
            assert!(tx.amount >= dec!(50) && tx.amount <= dec!(25000));
        }
    }

    #[test]
    fn test_holdings_keep_month_order() {
        let holdings = holdings();
        let labels: Vec<&str> = holdings.iter().map(|point| point.label.as_str()).collect();
        assert_eq!(labels, MONTHS);
        for point in &holdings {
            assert!(point.value >= dec!(10000) && point.value <= dec!(90000));
        }
    }

    #[test]
    fn test_calls_are_independent() {
        let first = recent_transactions();
        let second = recent_transactions();
        let first_ids: HashSet<_> = first.iter().map(|tx| tx.id).collect();
        assert!(second.iter().all(|tx| !first_ids.contains(&tx.id)));
    }
}
