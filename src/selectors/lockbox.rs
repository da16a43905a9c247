//! Lockbox dashboard transaction list.

use serde::Serialize;

use crate::config::Defaults;
use crate::remote::{lift2, RemoteValue};
use crate::state::{AppState, LockboxState, Remote, Transaction};

use super::interest::get_wallet_currency;

/// What to show under the last transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ListFooter {
    /// Another page is being fetched.
    Loading,
    /// Every page has been fetched and the list is not empty.
    EndOfList,
    /// Every page has been fetched and there is nothing to show.
    Empty,
}

impl ListFooter {
    /// Message id and English default, if the footer carries text.
    pub fn message(self) -> Option<(&'static str, &'static str)> {
        match self {
            ListFooter::EndOfList => Some((
                "scenes.lockbox.dashboard.transactions.thatsit",
                "That's it! No more transactions 📭",
            )),
            ListFooter::Empty => Some((
                "scenes.lockbox.dashboard.transactions.empty",
                "No transactions yet",
            )),
            ListFooter::Loading => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransactionListView {
    /// Newest first.
    pub transactions: Vec<Transaction>,
    pub currency: String,
    pub footer: Option<ListFooter>,
}

/// Newest-first ordering. Transactions sharing a timestamp come out in
/// reverse insertion order.
pub fn sort_by_time(mut transactions: Vec<Transaction>) -> Vec<Transaction> {
    transactions.sort_by_key(|tx| tx.time);
    transactions.reverse();
    transactions
}

fn footer(lockbox: &LockboxState) -> Option<ListFooter> {
    if lockbox.is_loading {
        Some(ListFooter::Loading)
    } else if lockbox.at_bounds {
        if lockbox.transactions.is_empty() {
            Some(ListFooter::Empty)
        } else {
            Some(ListFooter::EndOfList)
        }
    } else {
        None
    }
}

pub fn get_data(state: &AppState, defaults: &Defaults) -> Remote<TransactionListView> {
    lift2(
        |lockbox: LockboxState, currency| TransactionListView {
            footer: footer(&lockbox),
            transactions: sort_by_time(lockbox.transactions),
            currency,
        },
        RemoteValue::of(state.lockbox.clone()),
        RemoteValue::of(get_wallet_currency(state, defaults)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exchange::Coin;
    use crate::state::{BaseAmount, TxDirection};

    fn tx(hash: &str, time: u64) -> Transaction {
        Transaction {
            hash: hash.into(),
            coin: Coin::Eth,
            time,
            amount: BaseAmount(1),
            direction: TxDirection::Received,
            description: None,
        }
    }

    fn view(lockbox: LockboxState) -> TransactionListView {
        let state = AppState {
            lockbox,
            ..AppState::default()
        };
        get_data(&state, &Defaults::default()).get_or_fail().unwrap()
    }

    #[test]
    fn sorts_newest_first() {
        let sorted = sort_by_time(vec![tx("old", 1), tx("new", 3), tx("mid", 2)]);
        let hashes: Vec<_> = sorted.iter().map(|t| t.hash.as_str()).collect();
        assert_eq!(hashes, vec!["new", "mid", "old"]);
    }

    #[test]
    fn equal_times_reverse_insertion_order() {
        let sorted = sort_by_time(vec![tx("first", 5), tx("second", 5)]);
        assert_eq!(sorted[0].hash, "second");
    }

    #[test]
    fn loading_footer_wins() {
        let v = view(LockboxState {
            transactions: vec![],
            at_bounds: true,
            is_loading: true,
        });
        assert_eq!(v.footer, Some(ListFooter::Loading));
    }

    #[test]
    fn end_of_list_and_empty() {
        let v = view(LockboxState {
            transactions: vec![tx("a", 1)],
            at_bounds: true,
            is_loading: false,
        });
        assert_eq!(v.footer, Some(ListFooter::EndOfList));
        assert_eq!(
            v.footer.and_then(ListFooter::message).map(|(id, _)| id),
            Some("scenes.lockbox.dashboard.transactions.thatsit")
        );

        let v = view(LockboxState {
            transactions: vec![],
            at_bounds: true,
            is_loading: false,
        });
        assert_eq!(v.footer, Some(ListFooter::Empty));
    }

    #[test]
    fn more_pages_pending_shows_no_footer() {
        let v = view(LockboxState {
            transactions: vec![tx("a", 1)],
            at_bounds: false,
            is_loading: false,
        });
        assert_eq!(v.footer, None);
        assert_eq!(v.currency, "USD");
    }
}
