// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Locale**: Fallback locale
//! - **Booking**: Party size bounds and the phone country prefix
//! - **Files**: Settings directory and file names

// ==========================================================================
// Locale Defaults
// ==========================================================================

/// Locale used when neither CLI, config nor OS select a shipped locale.
pub const DEFAULT_LOCALE: &str = "es";

// ==========================================================================
// Booking Defaults
// ==========================================================================

/// Smallest party a booking may be made for.
pub const MIN_PARTY_SIZE: u8 = 1;

/// Largest party a booking may be made for.
pub const MAX_PARTY_SIZE: u8 = 20;

/// Country calling code shown in front of the phone field.
pub const PHONE_PREFIX: &str = "+507";

// ==========================================================================
// File Defaults
// ==========================================================================

/// Directory name under the OS config dir.
pub const APP_NAME: &str = "Scubba507";

/// Settings file name.
pub const CONFIG_FILE: &str = "settings.toml";

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_PARTY_SIZE > 0);
    assert!(MAX_PARTY_SIZE >= MIN_PARTY_SIZE);
};
