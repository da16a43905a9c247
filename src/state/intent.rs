//! Intents that publish new state snapshots.

use std::collections::HashMap;

use crate::exchange::{Coin, Rates};
use crate::mvi::Intent;

use super::tree::{
    BaseAmount, Card, ChainInfo, Domains, HdWallet, ProviderDetails, Remote, ThreeDsDetails,
    Transaction, UserData, UserTiers, WithdrawalMinimum,
};

/// Every way effect code can move the state tree forward.
///
/// Remote-backed slots are replaced wholesale with the new snapshot of the
/// request, so `Loading`, `Failure` and `Success` all travel through the
/// same variant.
#[derive(Debug, Clone)]
pub enum StateIntent {
    Domains(Remote<Domains>),
    Card(Remote<Card>),
    ProviderDetails(Remote<ProviderDetails>),
    ThreeDsDetails(Remote<ThreeDsDetails>),
    WithdrawalMinimums(Remote<Vec<WithdrawalMinimum>>),
    AvailableToWithdraw(Remote<HashMap<Coin, BaseAmount>>),
    Rates(Remote<HashMap<Coin, Rates>>),
    EthBalance(Remote<BaseAmount>),
    Erc20Balance {
        coin: Coin,
        balance: Remote<BaseAmount>,
    },
    XlmBalance(Remote<BaseAmount>),
    BtcAddressBalance {
        address: String,
        balance: Remote<BaseAmount>,
    },
    BchAddressBalance {
        address: String,
        balance: Remote<BaseAmount>,
    },
    Info {
        bitcoin: Option<ChainInfo>,
        ethereum: Option<ChainInfo>,
    },
    HdWallet {
        wallet: HdWallet,
        btc_spendable_context: Vec<String>,
    },
    BchSpendableContext(Vec<String>),
    UserId(Remote<Option<String>>),
    UserData(Remote<UserData>),
    UserTiers(Remote<UserTiers>),
    Currency(Remote<String>),
    Authenticated(bool),
    /// The user scrolled to the end of the lockbox list.
    LockboxLoadMore,
    /// A lockbox page arrived.
    LockboxPage {
        transactions: Vec<Transaction>,
        at_bounds: bool,
    },
    /// A lockbox page request failed; the list stays as it was.
    LockboxPageFailed,
}

impl Intent for StateIntent {}
