//! Pseudonymous analytics identity.
//!
//! The analytics user id is either the one saved in the metadata store or
//! an address derived from the wallet seed on a dedicated hardened path, so
//! it is stable per wallet without exposing the wallet GUID.

use sha2::{Digest, Sha256};

use crate::selectors::analytics::get_user_id;
use crate::state::AppState;

use super::types::{AnalyticsError, DerivationError};

const PURPOSE_SEED: &str = "info.blockchain.matomo";
const SESSION_ID_LEN: usize = 15;

/// Wallet key derivation, provided by the wallet's crypto layer.
pub trait KeyDeriver: Send + Sync {
    /// Address of the hardened child `index` of the master node for `seed_hex`.
    fn derive_hardened_address(&self, seed_hex: &str, index: u32) -> Result<String, DerivationError>;
}

/// Deriver for hosts without wallet crypto. Always fails.
pub struct NoKeyDeriver;

impl KeyDeriver for NoKeyDeriver {
    fn derive_hardened_address(&self, _seed_hex: &str, _index: u32) -> Result<String, DerivationError> {
        Err(DerivationError("no key deriver configured".to_string()))
    }
}

/// Hardened child index reserved for analytics ids.
pub fn analytics_purpose() -> u32 {
    let hash = Sha256::digest(PURPOSE_SEED.as_bytes());
    let prefix = [hash[0], hash[1], hash[2], hash[3]];
    u32::from_be_bytes(prefix) & 0x7fff_ffff
}

/// Id reported with `setUserId`: first 15 hex chars of SHA-256(guid).
pub fn session_user_id(guid: &str) -> String {
    let mut digest = hex::encode(Sha256::digest(guid.as_bytes()));
    digest.truncate(SESSION_ID_LEN);
    digest
}

/// Saved user id if there is one, otherwise derive it from the seed.
///
/// The caller must have waited for user data; a stored id that is still
/// pending is reported as an error.
pub fn generate_unique_user_id(
    state: &AppState,
    deriver: &dyn KeyDeriver,
) -> Result<String, AnalyticsError> {
    if let Some(user_id) = get_user_id(state).get_or_fail()? {
        if !user_id.is_empty() {
            return Ok(user_id);
        }
    }

    let wallet = state
        .wallet
        .default_hd_wallet
        .as_ref()
        .ok_or(AnalyticsError::MissingHdWallet)?;
    let purpose = analytics_purpose();
    tracing::debug!(purpose, "Deriving analytics user id");
    Ok(deriver.derive_hardened_address(&wallet.seed_hex, purpose)?)
}
