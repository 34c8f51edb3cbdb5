// SPDX-License-Identifier: MPL-2.0
//! Application layer - per-view state and the operations that mutate it.
//!
//! Each type here is owned by one interactive view and mutated through
//! `&mut self`; nothing is shared or global.
//!
//! - [`gallery`]: category filter and lightbox ([`GalleryEngine`])
//! - [`booking`]: booking form intake ([`BookingIntake`])
//! - [`services`]: localized services catalog cards

pub mod booking;
pub mod gallery;
pub mod services;

pub use booking::{BookingIntake, BookingRecord, BookingRequest, FormState};
pub use gallery::{Direction, GalleryEngine, Lightbox, LightboxSession, Message};
