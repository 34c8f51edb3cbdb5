// SPDX-License-Identifier: MPL-2.0
//! `scubba_site` holds the interactive state behind a bilingual scuba-diving
//! tour website.
//!
//! It provides the gallery's category filter and lightbox navigation, the
//! services catalog, and booking form intake, with Fluent translations and
//! user preferences stored in TOML. Rendering is left to the host.

pub mod application;
pub mod catalog;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
