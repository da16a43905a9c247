use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::oneshot;

use crate::remote::UnwrapError;

/// Log location attached to every analytics failure.
pub const LOG_LOCATION: &str = "analytics";

/// Commands the analytics service understands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AnalyticsCommand {
    /// Identify the user, log the landing page and report custom variables.
    InitUserSession,
    StartSession { guid: String },
    StopSession,
    LogEvent { event: serde_json::Value },
    LogPageView { route: String },
    CreateAbTest { test: String },
    LogGoal { goal_id: u32 },
}

impl AnalyticsCommand {
    pub fn name(&self) -> &'static str {
        match self {
            AnalyticsCommand::InitUserSession => "initUserSession",
            AnalyticsCommand::StartSession { .. } => "startSession",
            AnalyticsCommand::StopSession => "stopSession",
            AnalyticsCommand::LogEvent { .. } => "logEvent",
            AnalyticsCommand::LogPageView { .. } => "logPageView",
            AnalyticsCommand::CreateAbTest { .. } => "createABTest",
            AnalyticsCommand::LogGoal { .. } => "logGoal",
        }
    }

    /// Whether handling waits on state or timers and must not block
    /// the commands queued behind it.
    pub fn runs_detached(&self) -> bool {
        matches!(self, AnalyticsCommand::InitUserSession)
    }
}

pub(crate) struct CommandEnvelope {
    pub command: AnalyticsCommand,
    pub respond_to: oneshot::Sender<Result<(), AnalyticsError>>,
}

/// Message handed to the embedded analytics agent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsMessage {
    pub method: String,
    pub message_data: serde_json::Value,
}

impl AnalyticsMessage {
    pub fn new(method: impl Into<String>, message_data: serde_json::Value) -> Self {
        Self {
            method: method.into(),
            message_data,
        }
    }
}

/// Visit-scoped custom variable slot in the analytics agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CustomVariable {
    pub id: u32,
    pub name: &'static str,
}

pub const KYC_TIER: CustomVariable = CustomVariable {
    id: 1,
    name: "kyc_tier",
};

pub const CRYPTO_BALANCES: CustomVariable = CustomVariable {
    id: 2,
    name: "crypto_balances",
};

#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("analytics frame missing")]
    TargetMissing,

    #[error("failed to encode analytics message: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("failed to write analytics message: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
#[error("key derivation failed: {0}")]
pub struct DerivationError(pub String);

#[derive(Debug, Error)]
pub enum AnalyticsError {
    #[error(transparent)]
    Bridge(#[from] BridgeError),

    #[error("user id unavailable: {0}")]
    UserId(#[from] UnwrapError),

    #[error("no default HD wallet to derive a user id from")]
    MissingHdWallet,

    #[error(transparent)]
    Derivation(#[from] DerivationError),

    #[error("user data did not load within {timeout_ms}ms")]
    UserDataTimeout { timeout_ms: u64 },

    #[error("analytics service disconnected")]
    Disconnected,
}
