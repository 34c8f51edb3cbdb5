// SPDX-License-Identifier: MPL-2.0
//! Localized services catalog.
//!
//! Turns the static [`SERVICE_CATALOG`] into text-ready cards for the
//! current locale.

use crate::domain::booking::{GroupLimit, ServiceOffering, ServiceTag, SERVICE_CATALOG};
use crate::i18n::I18n;
use fluent_bundle::FluentArgs;

/// One services page card with every string resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceCard {
    pub tag: ServiceTag,
    pub image: &'static str,
    pub name: String,
    pub price: String,
    /// Subtitle followed by the pricing unit, e.g. `Get certified · per person`.
    pub subtitle: String,
    /// `None` for services without a group restriction.
    pub group_limit: Option<String>,
    pub description: String,
    pub audience: String,
    /// Park-fee notice, absent for services that include it.
    pub park_fee_notice: Option<String>,
    pub booking_href: String,
}

/// Renders the group restriction line, e.g. `Minimum 3 people`.
#[must_use]
pub fn group_limit_text(limit: GroupLimit, i18n: &I18n) -> Option<String> {
    let (key, count) = match limit {
        GroupLimit::None => return None,
        GroupLimit::Min(count) => ("services-min-group", count),
        GroupLimit::Max(count) => ("services-max-group", count),
    };
    let mut args = FluentArgs::new();
    args.set("count", count);
    Some(i18n.tr_with_args(key, &args))
}

impl ServiceCard {
    #[must_use]
    pub fn localize(offering: &ServiceOffering, i18n: &I18n) -> Self {
        let park_fee_notice = offering.shows_park_fee_notice().then(|| {
            format!(
                "{}: {}",
                i18n.tr("services-not-includes"),
                i18n.tr("services-park-fee-desc")
            )
        });

        Self {
            tag: offering.tag,
            image: offering.image,
            name: i18n.tr(&offering.text_key("name")),
            price: i18n.tr(&offering.text_key("price")),
            subtitle: format!(
                "{} · {}",
                i18n.tr(&offering.text_key("subtitle")),
                i18n.tr(offering.pricing.i18n_key())
            ),
            group_limit: group_limit_text(offering.group_limit, i18n),
            description: i18n.tr(&offering.text_key("description")),
            audience: i18n.tr(&offering.text_key("audience")),
            park_fee_notice,
            booking_href: offering.booking_href(),
        }
    }
}

/// All service cards in page order.
#[must_use]
pub fn service_cards(i18n: &I18n) -> Vec<ServiceCard> {
    SERVICE_CATALOG
        .iter()
        .map(|offering| ServiceCard::localize(offering, i18n))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn english() -> I18n {
        I18n::new(Some("en".to_string()), &Config::default())
    }

    #[test]
    fn cards_follow_catalog_order() {
        let tags: Vec<ServiceTag> = service_cards(&english()).iter().map(|c| c.tag).collect();
        assert_eq!(
            tags,
            vec![
                ServiceTag::Buceo,
                ServiceTag::Discovery,
                ServiceTag::Snorkeling,
                ServiceTag::OpenWater,
                ServiceTag::Adaptive,
                ServiceTag::Proposal,
            ]
        );
    }

    #[test]
    fn cards_resolve_every_string() {
        for card in service_cards(&english()) {
            for text in [&card.name, &card.price, &card.subtitle, &card.description, &card.audience] {
                assert!(!text.contains("MISSING"), "{:?}: {text}", card.tag);
            }
        }
        let mut spanish = english();
        spanish.set_locale("es".parse().expect("locale"));
        for card in service_cards(&spanish) {
            assert!(!card.name.contains("MISSING"), "{:?}", card.tag);
            assert!(!card.subtitle.contains("MISSING"), "{:?}", card.tag);
        }
    }

    #[test]
    fn group_limits_are_localized() {
        let i18n = english();
        assert_eq!(group_limit_text(GroupLimit::None, &i18n), None);
        assert_eq!(
            group_limit_text(GroupLimit::Min(5), &i18n).as_deref(),
            Some("Minimum 5 people")
        );
        assert_eq!(
            group_limit_text(GroupLimit::Max(2), &i18n).as_deref(),
            Some("Maximum 2 people")
        );
    }

    #[test]
    fn proposal_card_is_per_couple_without_park_fee() {
        let cards = service_cards(&english());
        let proposal = cards
            .iter()
            .find(|card| card.tag == ServiceTag::Proposal)
            .expect("proposal card");
        assert!(proposal.subtitle.ends_with("per couple"));
        assert_eq!(proposal.park_fee_notice, None);
        assert_eq!(proposal.booking_href, "/booking?service=proposal");

        let snorkeling = &cards[2];
        assert!(snorkeling.subtitle.ends_with("per person"));
        assert!(snorkeling.park_fee_notice.is_some());
    }
}
