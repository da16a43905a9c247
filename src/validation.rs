//! Field validators for the interest withdrawal form.
//!
//! Validators return `None` when the value is acceptable and a
//! [`ValidationMessage`] otherwise. A rejected value is an ordinary
//! outcome, so nothing here is an error type.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::exchange::{convert_coin_to_fiat, convert_standard_to_base, Coin};
use crate::selectors::interest::WithdrawalFormView;

/// Translatable message: a stable id, an English default with `{name}`
/// placeholders, and the values to substitute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationMessage {
    pub id: &'static str,
    pub default_message: &'static str,
    pub values: BTreeMap<&'static str, String>,
}

impl ValidationMessage {
    fn new(id: &'static str, default_message: &'static str) -> Self {
        Self {
            id,
            default_message,
            values: BTreeMap::new(),
        }
    }

    fn with(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.values.insert(key, value.into());
        self
    }

    /// The default message with placeholders filled in.
    pub fn render(&self) -> String {
        self.values
            .iter()
            .fold(self.default_message.to_string(), |text, (key, value)| {
                text.replace(&format!("{{{key}}}"), value)
            })
    }
}

pub const ABOVE_MAX_ID: &str = "interest.withdrawal.validation.abovemax";
pub const BELOW_MIN_ID: &str = "interest.withdrawal.validation.belowminamount";
pub const INVALID_ID: &str = "interest.withdrawal.validation.invalid";

fn invalid_amount() -> ValidationMessage {
    ValidationMessage::new(INVALID_ID, "Enter a valid amount.")
}

fn above_max() -> ValidationMessage {
    ValidationMessage::new(
        ABOVE_MAX_ID,
        "Amount is above the maximum withdrawal amount.",
    )
}

/// Coin-mode input, parsed exactly into base units.
fn parse_coin_amount(value: &str, coin: Coin) -> Result<u128, ValidationMessage> {
    convert_standard_to_base(coin, value).map_err(|_| invalid_amount())
}

fn parse_fiat_amount(value: &str) -> Result<f64, ValidationMessage> {
    match value.trim().parse::<f64>() {
        Ok(amount) if amount.is_finite() => Ok(amount),
        _ => Err(invalid_amount()),
    }
}

/// Withdrawal minimum in base units. An unparsable minimum is no bound.
fn minimum_base(props: &WithdrawalFormView) -> u128 {
    convert_standard_to_base(props.coin, &props.minimum).unwrap_or_else(|err| {
        tracing::warn!(coin = %props.coin, error = %err, "Ignoring unparsable withdrawal minimum");
        0
    })
}

/// Value of a standard coin amount in the wallet currency.
///
/// `None` when no rate is known, which skips the check.
fn fiat_bound(standard: &str, props: &WithdrawalFormView) -> Option<f64> {
    let standard: f64 = standard.parse().unwrap_or(0.0);
    match convert_coin_to_fiat(standard, props.coin, &props.wallet_currency, &props.rates) {
        Ok(fiat) => Some(fiat),
        Err(err) => {
            tracing::warn!(error = %err, "Cannot convert withdrawal bound to fiat");
            None
        }
    }
}

/// Rejects amounts above what the user can withdraw.
pub fn maximum_withdrawal_amount(value: &str, props: &WithdrawalFormView) -> Option<ValidationMessage> {
    if props.display_coin {
        return match parse_coin_amount(value, props.coin) {
            Ok(amount) => (props.available.0 < amount).then(above_max),
            Err(message) => Some(message),
        };
    }

    let amount = match parse_fiat_amount(value) {
        Ok(amount) => amount,
        Err(message) => return Some(message),
    };
    let limit = fiat_bound(&props.available_standard, props)?;
    (limit < amount).then(above_max)
}

/// Rejects amounts below the coin's minimum withdrawal.
pub fn minimum_withdrawal_amount(value: &str, props: &WithdrawalFormView) -> Option<ValidationMessage> {
    let (shown_min, currency) = if props.display_coin {
        let amount = match parse_coin_amount(value, props.coin) {
            Ok(amount) => amount,
            Err(message) => return Some(message),
        };
        if minimum_base(props) <= amount {
            return None;
        }
        (props.minimum.clone(), props.coin.display_ticker().to_string())
    } else {
        let amount = match parse_fiat_amount(value) {
            Ok(amount) => amount,
            Err(message) => return Some(message),
        };
        let withdrawal_min = fiat_bound(&props.minimum, props)?;
        if withdrawal_min <= amount {
            return None;
        }
        (format!("{:.2}", withdrawal_min), props.wallet_currency.clone())
    };

    Some(
        ValidationMessage::new(
            BELOW_MIN_ID,
            "Amount is below the minimum withdrawal amount of {withdrawalMin} {currency}.",
        )
        .with("withdrawalMin", shown_min)
        .with("currency", currency),
    )
}
