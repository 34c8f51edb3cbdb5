// SPDX-License-Identifier: MPL-2.0
//! Bookable services and the static catalog shown on the services page.

use std::fmt;
use std::str::FromStr;

/// Identifier of a bookable offering.
///
/// The same tag keys the services page anchors, the booking form options and
/// the `service` deep-link parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceTag {
    Buceo,
    Discovery,
    Snorkeling,
    OpenWater,
    Adaptive,
    Proposal,
    Fishing,
    Other,
}

impl ServiceTag {
    /// Booking form option order.
    pub const ALL: [ServiceTag; 8] = [
        ServiceTag::Buceo,
        ServiceTag::Discovery,
        ServiceTag::Snorkeling,
        ServiceTag::OpenWater,
        ServiceTag::Adaptive,
        ServiceTag::Proposal,
        ServiceTag::Fishing,
        ServiceTag::Other,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ServiceTag::Buceo => "buceo",
            ServiceTag::Discovery => "discovery",
            ServiceTag::Snorkeling => "snorkeling",
            ServiceTag::OpenWater => "open_water",
            ServiceTag::Adaptive => "adaptive",
            ServiceTag::Proposal => "proposal",
            ServiceTag::Fishing => "fishing",
            ServiceTag::Other => "other",
        }
    }

    /// i18n key of the option label in the booking form.
    #[must_use]
    pub fn option_key(self) -> String {
        format!("booking-service-{}", self.as_str().replace('_', "-"))
    }

    /// Parses a tag, returning `None` for anything outside the enumeration.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tag| tag.as_str() == value)
    }
}

impl fmt::Display for ServiceTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ServiceTag {
    type Err = crate::error::BookingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| crate::error::BookingError::UnknownService(s.to_string()))
    }
}

/// Group size restriction printed on a service card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupLimit {
    None,
    Min(u8),
    Max(u8),
}

/// How a service's price is quoted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pricing {
    PerPerson,
    Couple,
}

impl Pricing {
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            Pricing::PerPerson => "services-per-person",
            Pricing::Couple => "services-couple",
        }
    }
}

/// A card on the services page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceOffering {
    pub tag: ServiceTag,
    pub image: &'static str,
    pub group_limit: GroupLimit,
    pub pricing: Pricing,
}

/// Services with a card on the services page, in display order.
///
/// `fishing` and `other` are bookable but only get a text blurb.
pub const SERVICE_CATALOG: [ServiceOffering; 6] = [
    ServiceOffering {
        tag: ServiceTag::Buceo,
        image: "/images/services/buceo.jpg",
        group_limit: GroupLimit::Min(3),
        pricing: Pricing::PerPerson,
    },
    ServiceOffering {
        tag: ServiceTag::Discovery,
        image: "/images/services/discovery.jpg",
        group_limit: GroupLimit::Min(2),
        pricing: Pricing::PerPerson,
    },
    ServiceOffering {
        tag: ServiceTag::Snorkeling,
        image: "/images/services/snorkeling.jpg",
        group_limit: GroupLimit::Min(5),
        pricing: Pricing::PerPerson,
    },
    ServiceOffering {
        tag: ServiceTag::OpenWater,
        image: "/images/services/open-water.jpg",
        group_limit: GroupLimit::None,
        pricing: Pricing::PerPerson,
    },
    ServiceOffering {
        tag: ServiceTag::Adaptive,
        image: "/images/services/adaptive.jpg",
        group_limit: GroupLimit::Max(2),
        pricing: Pricing::PerPerson,
    },
    ServiceOffering {
        tag: ServiceTag::Proposal,
        image: "/images/services/proposal.jpg",
        group_limit: GroupLimit::Min(2),
        pricing: Pricing::Couple,
    },
];

impl ServiceOffering {
    /// Looks up the card for `tag`, if it has one.
    #[must_use]
    pub fn find(tag: ServiceTag) -> Option<&'static ServiceOffering> {
        SERVICE_CATALOG.iter().find(|offering| offering.tag == tag)
    }

    /// i18n key for one of the card's per-service texts
    /// (`name`, `price`, `subtitle`, `description`, `audience`).
    #[must_use]
    pub fn text_key(&self, field: &str) -> String {
        format!("services-{}-{}", self.tag.as_str().replace('_', "-"), field)
    }

    /// Whether the card carries the park-fee "not included" notice.
    #[must_use]
    pub fn shows_park_fee_notice(&self) -> bool {
        self.tag != ServiceTag::Proposal
    }

    /// Link to the booking form with this service preselected.
    #[must_use]
    pub fn booking_href(&self) -> String {
        format!("/booking?service={}", self.tag.as_str())
    }
}
