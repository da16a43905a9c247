//! Wallet-info lookups (`info.bitcoin.final_balance` and friends).

use serde::Serialize;

use crate::remote::{lift3, RemoteValue};
use crate::state::{AppState, Remote};

pub fn get_balance(state: &AppState) -> Option<u64> {
    state.info.bitcoin.as_ref()?.final_balance
}

pub fn get_number_transactions(state: &AppState) -> Option<u64> {
    state.info.bitcoin.as_ref()?.n_tx
}

pub fn get_ether_balance(state: &AppState) -> Option<u64> {
    state.info.ethereum.as_ref()?.final_balance
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WalletInfoView {
    pub btc_balance: u64,
    pub btc_transactions: u64,
    pub eth_balance: u64,
}

/// All three info values, `NotAsked` until each one is present.
pub fn get_data(state: &AppState) -> Remote<WalletInfoView> {
    lift3(
        |btc_balance, btc_transactions, eth_balance| WalletInfoView {
            btc_balance,
            btc_transactions,
            eth_balance,
        },
        RemoteValue::from(get_balance(state)),
        RemoteValue::from(get_number_transactions(state)),
        RemoteValue::from(get_ether_balance(state)),
    )
}
