//! Formatting of a single coin amount.

use crate::exchange::{convert_base_to_standard, display_coin_to_coin, Coin};
use crate::remote::{lift2, RemoteValue};
use crate::state::{BaseAmount, Remote};

/// Amount in standard units, with the ticker unless `hide_coin_ticker`.
pub fn get_data(coin: Coin, amount: BaseAmount, hide_coin_ticker: bool) -> Remote<String> {
    let convert = |coin: Coin, amount: BaseAmount| {
        if hide_coin_ticker {
            convert_base_to_standard(coin, amount.0)
        } else {
            display_coin_to_coin(coin, amount.0)
        }
    };
    lift2(convert, RemoteValue::of(coin), RemoteValue::of(amount))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shows_ticker_by_default() {
        assert_eq!(
            get_data(Coin::Btc, BaseAmount(150_000_000), false),
            RemoteValue::of("1.5 BTC".to_string())
        );
    }

    #[test]
    fn hides_ticker_on_request() {
        assert_eq!(
            get_data(Coin::Usdt, BaseAmount(2_500_000), true),
            RemoteValue::of("2.5".to_string())
        );
    }

    #[test]
    fn pax_shows_brand_ticker() {
        assert_eq!(
            get_data(Coin::Pax, BaseAmount(10u128.pow(18)), false),
            RemoteValue::of("1 USD-D".to_string())
        );
    }
}
