//! Values reported to the analytics agent.

use std::collections::HashMap;

use serde::Serialize;

use crate::exchange::Coin;
use crate::state::{AppState, BaseAmount, Remote, UserTiers};

/// KYC tiers, defaulting to tier 0 until the profile loads.
pub fn get_user_tiers(state: &AppState) -> UserTiers {
    state.profile.user_tiers.clone().get_or_else(UserTiers::default())
}

pub fn get_user_id(state: &AppState) -> Remote<Option<String>> {
    state.kv_store.user_id.clone()
}

pub fn is_authenticated(state: &AppState) -> bool {
    state.auth.is_authenticated
}

/// Whether user data finished loading, successfully or not.
pub fn is_user_data_settled(state: &AppState) -> bool {
    let user_data = &state.profile.user_data;
    user_data.is_success() || user_data.is_failure()
}

/// Which coins hold a non-zero balance.
///
/// Balances that are not loaded count as zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct BalanceFlags {
    pub btc: bool,
    pub bch: bool,
    pub eth: bool,
    pub pax: bool,
    pub usdt: bool,
    pub xlm: bool,
}

fn sum_context(context: &[String], balances: &HashMap<String, Remote<BaseAmount>>) -> u128 {
    context
        .iter()
        .map(|address| {
            balances
                .get(address)
                .cloned()
                .unwrap_or_default()
                .get_or_else(BaseAmount(0))
                .0
        })
        .fold(0u128, u128::saturating_add)
}

fn erc20_balance(state: &AppState, coin: Coin) -> BaseAmount {
    state
        .coins
        .erc20_balances
        .get(&coin)
        .cloned()
        .unwrap_or_default()
        .get_or_else(BaseAmount(0))
}

pub fn get_balance_flags(state: &AppState) -> BalanceFlags {
    let coins = &state.coins;
    let btc = sum_context(&state.wallet.btc_spendable_context, &coins.btc_final_balances);
    let bch = sum_context(&state.kv_store.bch_spendable_context, &coins.bch_final_balances);

    BalanceFlags {
        btc: btc != 0,
        bch: bch != 0,
        eth: !coins.eth_balance.clone().get_or_else(BaseAmount(0)).is_zero(),
        pax: !erc20_balance(state, Coin::Pax).is_zero(),
        usdt: !erc20_balance(state, Coin::Usdt).is_zero(),
        xlm: !coins.xlm_total_balance.clone().get_or_else(BaseAmount(0)).is_zero(),
    }
}
