//! Pallet footprint type

use serde::{Deserialize, Serialize};

/// A pallet footprint in millimeters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PalletSize {
    pub length: f64,
    pub width: f64,
}

impl PalletSize {
    /// Footprint area in mm²
    pub fn area(&self) -> f64 {
        self.length * self.width
    }
}
