// SPDX-License-Identifier: MPL-2.0
//! Booking domain types: service tags, the services catalog and party sizes.

mod party_size;
mod service;

pub use party_size::PartySize;
pub use service::{GroupLimit, Pricing, ServiceOffering, ServiceTag, SERVICE_CATALOG};
