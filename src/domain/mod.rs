// SPDX-License-Identifier: MPL-2.0
//! Domain layer - pure types and business rules.
//!
//! Nothing in here performs I/O or touches translations; values carry
//! i18n keys which the presentation side resolves.
//!
//! # Modules
//!
//! - [`gallery`]: Gallery types ([`Photo`](gallery::Photo), [`Video`](gallery::Video),
//!   [`Category`](gallery::Category))
//! - [`booking`]: Booking types ([`ServiceTag`](booking::ServiceTag),
//!   [`ServiceOffering`](booking::ServiceOffering), [`PartySize`](booking::PartySize))

pub mod booking;
pub mod gallery;
