//! Typed application state tree.
//!
//! Every slice defaults, so a snapshot with missing keys deserializes into
//! `NotAsked` remote values and empty collections instead of failing.

use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::exchange::{Coin, Rates};
use crate::remote::RemoteValue;

/// Remote value whose failure carries a human-readable message.
pub type Remote<T> = RemoteValue<T, String>;

/// Amount in base units (satoshi, wei, stroop).
///
/// Serialized as a decimal string because wei balances overflow the
/// integer range JSON consumers can represent. Plain JSON numbers are
/// accepted on input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct BaseAmount(pub u128);

impl BaseAmount {
    pub fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl From<u128> for BaseAmount {
    fn from(value: u128) -> Self {
        BaseAmount(value)
    }
}

impl Serialize for BaseAmount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0.to_string())
    }
}

impl<'de> Deserialize<'de> for BaseAmount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Number(u64),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Number(n) => Ok(BaseAmount(u128::from(n))),
            Raw::Text(s) => s
                .trim()
                .parse::<u128>()
                .map(BaseAmount)
                .map_err(|_| serde::de::Error::custom(format!("invalid base amount '{s}'"))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppState {
    pub wallet_options: WalletOptionsState,
    pub simple_buy: SimpleBuyState,
    pub info: InfoState,
    pub interest: InterestState,
    pub coins: CoinsState,
    pub wallet: WalletState,
    pub kv_store: KvStoreState,
    pub profile: ProfileState,
    pub auth: AuthState,
    pub lockbox: LockboxState,
    pub settings: SettingsState,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WalletOptionsState {
    pub domains: Remote<Domains>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Domains {
    pub root: String,
    pub api: String,
    pub wallet_helper: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SimpleBuyState {
    pub card: Remote<Card>,
    pub provider_details: Remote<ProviderDetails>,
    pub three_ds_details: Remote<ThreeDsDetails>,
}

/// Card registered for simple-buy purchases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: String,
    pub currency: String,
    pub state: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub last4: Option<String>,
}

/// Card-processor account details needed to complete 3DS.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderDetails {
    pub api_username: String,
    pub mobile_token: String,
}

/// Challenge details issued by the card processor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThreeDsDetails {
    pub payment_link: String,
    #[serde(default)]
    pub payment_state: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InfoState {
    pub bitcoin: Option<ChainInfo>,
    pub ethereum: Option<ChainInfo>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ChainInfo {
    pub final_balance: Option<u64>,
    pub n_tx: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InterestState {
    pub withdrawal_minimums: Remote<Vec<WithdrawalMinimum>>,
    pub available_to_withdraw: Remote<HashMap<Coin, BaseAmount>>,
}

/// Smallest withdrawal accepted for a coin, in standard units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WithdrawalMinimum {
    pub symbol: Coin,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CoinsState {
    pub rates: Remote<HashMap<Coin, Rates>>,
    pub eth_balance: Remote<BaseAmount>,
    pub erc20_balances: HashMap<Coin, Remote<BaseAmount>>,
    pub xlm_total_balance: Remote<BaseAmount>,
    pub btc_final_balances: HashMap<String, Remote<BaseAmount>>,
    pub bch_final_balances: HashMap<String, Remote<BaseAmount>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WalletState {
    pub default_hd_wallet: Option<HdWallet>,
    pub btc_spendable_context: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HdWallet {
    pub seed_hex: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct KvStoreState {
    /// Analytics user id persisted in the metadata store, if one was saved.
    pub user_id: Remote<Option<String>>,
    pub bch_spendable_context: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileState {
    pub user_data: Remote<UserData>,
    pub user_tiers: Remote<UserTiers>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UserData {
    pub id: String,
    pub state: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UserTiers {
    pub current: u8,
    pub selected: u8,
    pub next: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthState {
    pub is_authenticated: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LockboxState {
    pub transactions: Vec<Transaction>,
    /// No further pages exist.
    pub at_bounds: bool,
    /// A page request is in flight.
    pub is_loading: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub hash: String,
    pub coin: Coin,
    /// Unix timestamp in seconds.
    pub time: u64,
    pub amount: BaseAmount,
    #[serde(rename = "type")]
    pub direction: TxDirection,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TxDirection {
    Sent,
    Received,
    Transferred,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsState {
    pub currency: Remote<String>,
}
