// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Tait colors and color domains.
//!
//! - Color: one of the three edge colors (0..NCOLORS-1)
//! - ColorSet: bitset of colors, used as the candidate domain of a conflict vertex

pub mod color;
pub mod color_set;

pub use color::{Color, NCOLORS};
pub use color_set::ColorSet;
