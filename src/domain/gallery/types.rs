// SPDX-License-Identifier: MPL-2.0
//! Gallery media records.
//!
//! Both types hold asset path strings only; resolving and fetching the bytes
//! is left to whatever renders the page.

use serde::{Deserialize, Serialize};

/// A still photo shown in the grid and in the lightbox.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Photo {
    /// Asset path, e.g. `/images/gallery/marine/shark.jpg`.
    pub source: String,
    /// Alternative text for the image element.
    #[serde(rename = "alt")]
    pub alt_text: String,
}

impl Photo {
    #[must_use]
    pub fn new(source: impl Into<String>, alt_text: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            alt_text: alt_text.into(),
        }
    }
}

/// A clip in the gallery's video section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Video {
    pub source: String,
    /// i18n key of the caption shown under the player.
    pub title_key: String,
}
