//! Coin metadata and unit conversion.
//!
//! Balances travel in base units (satoshi, wei, stroop) as integers. Display
//! code converts them to standard units with exact decimal arithmetic and
//! only drops to `f64` when a fiat rate is involved.

use std::collections::HashMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Supported assets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Coin {
    Btc,
    Bch,
    Eth,
    Pax,
    Usdt,
    Xlm,
}

impl Coin {
    pub const ALL: [Coin; 6] = [
        Coin::Btc,
        Coin::Bch,
        Coin::Eth,
        Coin::Pax,
        Coin::Usdt,
        Coin::Xlm,
    ];

    /// Number of base units per standard unit, as a power of ten.
    pub fn decimals(self) -> u32 {
        match self {
            Coin::Btc | Coin::Bch => 8,
            Coin::Eth | Coin::Pax => 18,
            Coin::Usdt => 6,
            Coin::Xlm => 7,
        }
    }

    pub fn ticker(self) -> &'static str {
        match self {
            Coin::Btc => "BTC",
            Coin::Bch => "BCH",
            Coin::Eth => "ETH",
            Coin::Pax => "PAX",
            Coin::Usdt => "USDT",
            Coin::Xlm => "XLM",
        }
    }

    /// Ticker shown to users. PAX is branded as USD Digital.
    pub fn display_ticker(self) -> &'static str {
        match self {
            Coin::Pax => "USD-D",
            other => other.ticker(),
        }
    }
}

impl std::fmt::Display for Coin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.ticker())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExchangeError {
    #[error("unknown coin '{0}'")]
    UnknownCoin(String),

    #[error("invalid amount '{0}'")]
    InvalidAmount(String),

    #[error("no {currency} rate for {coin}")]
    MissingRate { coin: Coin, currency: String },
}

impl FromStr for Coin {
    type Err = ExchangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Coin::ALL
            .into_iter()
            .find(|coin| coin.ticker().eq_ignore_ascii_case(s))
            .ok_or_else(|| ExchangeError::UnknownCoin(s.to_string()))
    }
}

/// Spot price of one coin in one fiat currency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FiatRate {
    pub last: f64,
    #[serde(default)]
    pub symbol: String,
}

/// Fiat rates for a single coin, keyed by currency code (`"USD"`).
pub type Rates = HashMap<String, FiatRate>;

/// Convert base units to an exact standard-unit decimal string.
///
/// Trailing fractional zeros are trimmed: `50_000_000` satoshi is `"0.5"`.
pub fn convert_base_to_standard(coin: Coin, base: u128) -> String {
    let scale = 10u128.pow(coin.decimals());
    let whole = base / scale;
    let fraction = base % scale;
    if fraction == 0 {
        return whole.to_string();
    }
    let digits = format!("{:0width$}", fraction, width = coin.decimals() as usize);
    format!("{}.{}", whole, digits.trim_end_matches('0'))
}

/// Parse a standard-unit decimal string back into base units.
///
/// Digits beyond the coin's precision are rejected rather than rounded.
pub fn convert_standard_to_base(coin: Coin, standard: &str) -> Result<u128, ExchangeError> {
    let invalid = || ExchangeError::InvalidAmount(standard.to_string());
    let trimmed = standard.trim();
    let (whole, fraction) = match trimmed.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (trimmed, ""),
    };
    if whole.is_empty() && fraction.is_empty() {
        return Err(invalid());
    }
    if fraction.len() > coin.decimals() as usize {
        return Err(invalid());
    }
    let all_digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());
    if !all_digits(whole) || !all_digits(fraction) {
        return Err(invalid());
    }

    let scale = 10u128.pow(coin.decimals());
    let whole: u128 = if whole.is_empty() {
        0
    } else {
        whole.parse().map_err(|_| invalid())?
    };
    let padded = format!("{:0<width$}", fraction, width = coin.decimals() as usize);
    let fraction: u128 = padded.parse().map_err(|_| invalid())?;
    whole
        .checked_mul(scale)
        .and_then(|w| w.checked_add(fraction))
        .ok_or_else(invalid)
}

/// Standard amount followed by the user-facing ticker, e.g. `"0.5 BTC"`.
pub fn display_coin_to_coin(coin: Coin, base: u128) -> String {
    format!("{} {}", convert_base_to_standard(coin, base), coin.display_ticker())
}

/// Value of `standard` units of `coin` in `currency`, rounded to cents.
pub fn convert_coin_to_fiat(
    standard: f64,
    coin: Coin,
    currency: &str,
    rates: &Rates,
) -> Result<f64, ExchangeError> {
    let rate = rates
        .get(currency)
        .ok_or_else(|| ExchangeError::MissingRate {
            coin,
            currency: currency.to_string(),
        })?;
    Ok((standard * rate.last * 100.0).round() / 100.0)
}
