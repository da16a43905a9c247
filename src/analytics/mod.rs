//! Analytics session tracking as explicit commands.
//!
//! ```text
//! AnalyticsClient ──mpsc──→ AnalyticsService ──→ AnalyticsHandler ──→ MessageBridge
//!        ↑                                              │
//!        └──────────────── oneshot Result ──────────────┘
//! ```
//!
//! Commands are handled strictly in the order they were sent. Every
//! failure is logged and also returned to the sender.

mod bridge;
mod client;
mod service;
mod types;
mod user_id;

pub use bridge::{DetachedBridge, JsonLinesBridge, MessageBridge};
pub use client::AnalyticsClient;
pub use service::{AnalyticsHandler, AnalyticsService};
pub use types::{
    AnalyticsCommand, AnalyticsError, AnalyticsMessage, BridgeError, CustomVariable,
    DerivationError, CRYPTO_BALANCES, KYC_TIER, LOG_LOCATION,
};
pub use user_id::{
    analytics_purpose, generate_unique_user_id, session_user_id, KeyDeriver, NoKeyDeriver,
};

use tokio::sync::mpsc;

pub struct AnalyticsLayer;

impl AnalyticsLayer {
    pub fn new(capacity: usize) -> (AnalyticsClient, AnalyticsService) {
        let (sender, receiver) = mpsc::channel(capacity.max(1));
        (AnalyticsClient::new(sender), AnalyticsService::new(receiver))
    }
}
