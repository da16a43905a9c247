//! View model for the 3DS challenge modal of simple-buy card payments.

use serde::Serialize;

use crate::config::Defaults;
use crate::remote::lift3;
use crate::state::{AppState, Card, Domains, ProviderDetails, Remote, ThreeDsDetails};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThreeDsView {
    pub card: Card,
    pub domains: Domains,
    pub provider_details: ProviderDetails,
    pub three_ds_details: ThreeDsDetails,
}

/// Helper-service domains, falling back to the configured helper domain
/// until wallet options arrive.
pub fn get_domains(state: &AppState, defaults: &Defaults) -> Domains {
    state
        .wallet_options
        .domains
        .clone()
        .get_or_else_with(|| Domains {
            wallet_helper: defaults.wallet_helper_domain.clone(),
            ..Domains::default()
        })
}

pub fn get_data(state: &AppState, defaults: &Defaults) -> Remote<ThreeDsView> {
    let simple_buy = &state.simple_buy;
    let domains = get_domains(state, defaults);

    let transform = |card, provider_details, three_ds_details| ThreeDsView {
        card,
        domains,
        provider_details,
        three_ds_details,
    };

    lift3(
        transform,
        simple_buy.card.clone(),
        simple_buy.provider_details.clone(),
        simple_buy.three_ds_details.clone(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::remote::RemoteValue;

    fn card() -> Card {
        Card {
            id: "card-1".into(),
            currency: "EUR".into(),
            state: "PENDING".into(),
            label: Some("Visa".into()),
            last4: Some("1111".into()),
        }
    }

    fn provider() -> ProviderDetails {
        ProviderDetails {
            api_username: "user".into(),
            mobile_token: "token".into(),
        }
    }

    fn details() -> ThreeDsDetails {
        ThreeDsDetails {
            payment_link: "https://pay.example.com/3ds".into(),
            payment_state: None,
        }
    }

    fn loaded_state() -> AppState {
        let mut state = AppState::default();
        state.simple_buy.card = RemoteValue::of(card());
        state.simple_buy.provider_details = RemoteValue::of(provider());
        state.simple_buy.three_ds_details = RemoteValue::of(details());
        state
    }

    #[test]
    fn uses_default_helper_domain_when_options_missing() {
        let view = get_data(&loaded_state(), &Defaults::default())
            .get_or_fail()
            .unwrap();
        assert_eq!(view.domains.wallet_helper, "https://wallet-helper.blockchain.com");
        assert_eq!(view.card, card());
    }

    #[test]
    fn loaded_domains_win_over_default() {
        let mut state = loaded_state();
        state.wallet_options.domains = RemoteValue::of(Domains {
            root: "https://example.com".into(),
            api: "https://api.example.com".into(),
            wallet_helper: "https://helper.example.com".into(),
        });
        let view = get_data(&state, &Defaults::default()).get_or_fail().unwrap();
        assert_eq!(view.domains.wallet_helper, "https://helper.example.com");
    }

    #[test]
    fn failing_provider_details_fail_the_view() {
        let mut state = loaded_state();
        state.simple_buy.provider_details = RemoteValue::Failure("network error".into());
        assert_eq!(
            get_data(&state, &Defaults::default()),
            RemoteValue::Failure("network error".to_string())
        );
    }

    #[test]
    fn loading_card_keeps_view_loading() {
        let mut state = loaded_state();
        state.simple_buy.card = RemoteValue::Loading;
        assert!(get_data(&state, &Defaults::default()).is_loading());
    }
}
