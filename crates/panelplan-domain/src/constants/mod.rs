//! Static loading tables: pallet catalog, stacking limits, pallet weights

pub mod pallet_sizes;
pub mod pallet_weights;
pub mod stacking_limits;

pub use pallet_sizes::{PALLET_HEIGHT_MM, PALLET_SIZES};
pub use pallet_weights::pallet_weight;
pub use stacking_limits::{stacking_limit, DEFAULT_STACKING_LIMIT};
