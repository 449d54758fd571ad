// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Extendability of ring precolorings.

pub mod extension;

pub use extension::ExtensionSolver;
