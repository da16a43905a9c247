//! Application state: the typed tree, its intents, reducer and store.

mod intent;
mod reducer;
mod store;
mod tree;

pub use intent::StateIntent;
pub use reducer::StateReducer;
pub use store::StateStore;
pub use tree::{
    AppState, AuthState, BaseAmount, Card, ChainInfo, CoinsState, Domains, HdWallet, InfoState,
    InterestState, KvStoreState, LockboxState, ProfileState, ProviderDetails, Remote,
    SettingsState, SimpleBuyState, ThreeDsDetails, Transaction, TxDirection, UserData, UserTiers,
    WalletOptionsState, WalletState, WithdrawalMinimum,
};
