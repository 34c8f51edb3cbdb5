// SPDX-License-Identifier: MPL-2.0
//! Gallery domain types.

mod category;
mod types;

pub use category::Category;
pub use types::{Photo, Video};
