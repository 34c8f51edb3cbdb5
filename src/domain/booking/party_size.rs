// SPDX-License-Identifier: MPL-2.0
//! Party size newtype.

use crate::config::defaults::{MAX_PARTY_SIZE, MIN_PARTY_SIZE};

/// Number of people on a booking, guaranteed to be within
/// `MIN_PARTY_SIZE..=MAX_PARTY_SIZE`.
///
/// Unlike the clamping UI newtypes, out-of-range input is rejected: the form
/// field refuses it rather than silently adjusting the count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PartySize(u8);

impl PartySize {
    /// Returns `None` when `people` is outside the allowed bounds.
    #[must_use]
    pub fn new(people: u32) -> Option<Self> {
        let people = u8::try_from(people).ok()?;
        (MIN_PARTY_SIZE..=MAX_PARTY_SIZE)
            .contains(&people)
            .then_some(Self(people))
    }

    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }
}
