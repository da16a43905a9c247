//! Reducer for the application state tree.

use crate::mvi::{Reducer, Snapshot};

use super::intent::StateIntent;
use super::tree::AppState;

impl Snapshot for AppState {}

pub struct StateReducer;

impl Reducer for StateReducer {
    type State = AppState;
    type Intent = StateIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            StateIntent::Domains(domains) => state.wallet_options.domains = domains,
            StateIntent::Card(card) => state.simple_buy.card = card,
            StateIntent::ProviderDetails(details) => state.simple_buy.provider_details = details,
            StateIntent::ThreeDsDetails(details) => state.simple_buy.three_ds_details = details,
            StateIntent::WithdrawalMinimums(minimums) => {
                state.interest.withdrawal_minimums = minimums
            }
            StateIntent::AvailableToWithdraw(available) => {
                state.interest.available_to_withdraw = available
            }
            StateIntent::Rates(rates) => state.coins.rates = rates,
            StateIntent::EthBalance(balance) => state.coins.eth_balance = balance,
            StateIntent::Erc20Balance { coin, balance } => {
                state.coins.erc20_balances.insert(coin, balance);
            }
            StateIntent::XlmBalance(balance) => state.coins.xlm_total_balance = balance,
            StateIntent::BtcAddressBalance { address, balance } => {
                state.coins.btc_final_balances.insert(address, balance);
            }
            StateIntent::BchAddressBalance { address, balance } => {
                state.coins.bch_final_balances.insert(address, balance);
            }
            StateIntent::Info { bitcoin, ethereum } => {
                state.info.bitcoin = bitcoin;
                state.info.ethereum = ethereum;
            }
            StateIntent::HdWallet {
                wallet,
                btc_spendable_context,
            } => {
                state.wallet.default_hd_wallet = Some(wallet);
                state.wallet.btc_spendable_context = btc_spendable_context;
            }
            StateIntent::BchSpendableContext(context) => {
                state.kv_store.bch_spendable_context = context
            }
            StateIntent::UserId(user_id) => state.kv_store.user_id = user_id,
            StateIntent::UserData(user_data) => state.profile.user_data = user_data,
            StateIntent::UserTiers(tiers) => state.profile.user_tiers = tiers,
            StateIntent::Currency(currency) => state.settings.currency = currency,
            StateIntent::Authenticated(is_authenticated) => {
                state.auth.is_authenticated = is_authenticated
            }
            StateIntent::LockboxLoadMore => {
                // Nothing left to fetch once the list hit its bounds
                if !state.lockbox.at_bounds {
                    state.lockbox.is_loading = true;
                }
            }
            StateIntent::LockboxPage {
                transactions,
                at_bounds,
            } => {
                let lockbox = &mut state.lockbox;
                for tx in transactions {
                    if !lockbox.transactions.iter().any(|t| t.hash == tx.hash) {
                        lockbox.transactions.push(tx);
                    }
                }
                lockbox.at_bounds = at_bounds;
                lockbox.is_loading = false;
            }
            StateIntent::LockboxPageFailed => state.lockbox.is_loading = false,
        }
        state
    }
}
