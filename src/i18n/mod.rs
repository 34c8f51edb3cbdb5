// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the site.
//!
//! This module provides localization capabilities using the Fluent localization system.
//! Domain and application types only carry message keys; everything user-facing is
//! resolved here.
//!
//! # Features
//!
//! - Locale resolution from CLI, config, or system settings
//! - Embedded `.ftl` translation files (`en`, `es`)
//! - Runtime language switching
//! - Fallback to the default locale when a requested one is not shipped

pub mod fluent;

pub use fluent::I18n;
