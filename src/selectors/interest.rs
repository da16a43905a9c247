//! Interest-account withdrawal form.

use serde::Serialize;

use crate::config::Defaults;
use crate::exchange::{convert_base_to_standard, Coin, Rates};
use crate::remote::{lift4, RemoteValue};
use crate::state::{AppState, BaseAmount, Remote, WithdrawalMinimum};

/// Withdrawal minimums, or an empty list when none are loaded.
pub fn get_withdrawal_minimums(state: &AppState) -> Vec<WithdrawalMinimum> {
    state.interest.withdrawal_minimums.clone().get_or_else(Vec::new())
}

/// Minimum for `coin` in standard units.
///
/// A coin without a published minimum has no lower bound, so this
/// returns `"0"` rather than failing.
pub fn find_minimum(minimums: &[WithdrawalMinimum], coin: Coin) -> String {
    match minimums.iter().find(|m| m.symbol == coin) {
        Some(minimum) => minimum.value.clone(),
        None => {
            tracing::warn!(%coin, "No withdrawal minimum published, using zero");
            "0".to_string()
        }
    }
}

/// User's fiat currency, falling back to the configured default.
pub fn get_wallet_currency(state: &AppState, defaults: &Defaults) -> String {
    state
        .settings
        .currency
        .clone()
        .get_or_else_with(|| defaults.currency.clone())
}

/// Everything the withdrawal form and its validators need.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WithdrawalFormView {
    pub coin: Coin,
    /// Amounts are entered in coin units rather than fiat.
    pub display_coin: bool,
    pub wallet_currency: String,
    pub available: BaseAmount,
    /// `available` in standard units.
    pub available_standard: String,
    /// Minimum withdrawal in standard units.
    pub minimum: String,
    /// Fiat rates for `coin`; empty when the coin has none.
    pub rates: Rates,
}

pub fn get_data(
    state: &AppState,
    coin: Coin,
    display_coin: bool,
    defaults: &Defaults,
) -> Remote<WithdrawalFormView> {
    let wallet_currency = RemoteValue::of(get_wallet_currency(state, defaults));

    let available = state
        .interest
        .available_to_withdraw
        .as_ref()
        .map(|balances| balances.get(&coin).copied().unwrap_or_default());

    let rates = state
        .coins
        .rates
        .as_ref()
        .map(|all| all.get(&coin).cloned().unwrap_or_default());

    let minimums = state.interest.withdrawal_minimums.as_ref().map(|m| find_minimum(m, coin));

    lift4(
        |available: BaseAmount, rates: Rates, minimum: String, wallet_currency: String| {
            WithdrawalFormView {
                coin,
                display_coin,
                wallet_currency,
                available,
                available_standard: convert_base_to_standard(coin, available.0),
                minimum,
                rates,
            }
        },
        available.map_err(Clone::clone),
        rates.map_err(Clone::clone),
        minimums.map_err(Clone::clone),
        wallet_currency,
    )
}
