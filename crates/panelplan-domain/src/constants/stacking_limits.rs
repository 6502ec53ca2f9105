//! Maximum safe stacking amounts per pallet
//!
//! Three tables, one per core material. Rows are nominal panel widths
//! (1000 / 1250 / 1500 mm), columns are panel length tiers up to 6000 mm
//! plus an overflow tier. Values come from the manufacturer's loading
//! charts; heavier cores and longer panels tolerate fewer panels per
//! stack.

use std::collections::HashMap;
use std::sync::LazyLock;

use panelplan_types::CoreType;

/// Fallback when the core type is unrecognized or the lookup fails
pub const DEFAULT_STACKING_LIMIT: u32 = 25;

/// Ascending panel length tiers in mm; lengths above the last tier fall
/// into the overflow column
pub const LENGTH_TIERS: [f64; 10] = [
    1999.0, 2499.0, 2999.0, 3199.0, 3499.0, 3999.0, 4499.0, 4999.0, 5499.0, 6000.0,
];

/// Nominal panel width buckets in mm
pub const WIDTH_BUCKETS: [f64; 3] = [1000.0, 1250.0, 1500.0];

// One row per width bucket, one column per length tier plus overflow.
type StackingTable = [[u32; 11]; 3];

static STACKING_LIMITS: LazyLock<HashMap<CoreType, StackingTable>> = LazyLock::new(|| {
    let mut m = HashMap::new();

    m.insert(
        CoreType::Pe,
        [
            [100, 100, 85, 75, 75, 65, 60, 50, 40, 30, 25],
            [100, 90, 80, 75, 75, 60, 50, 45, 40, 30, 25],
            [100, 90, 75, 70, 65, 60, 50, 45, 40, 30, 25],
        ],
    );

    m.insert(
        CoreType::Fr,
        [
            [90, 80, 70, 65, 60, 50, 45, 40, 35, 30, 25],
            [90, 80, 70, 65, 60, 50, 45, 40, 35, 30, 25],
            [80, 70, 60, 55, 50, 45, 35, 35, 30, 25, 20],
        ],
    );

    m.insert(
        CoreType::A2,
        [
            [75, 60, 50, 47, 43, 38, 33, 30, 27, 20, 17],
            [60, 48, 40, 38, 34, 30, 27, 24, 22, 20, 17],
            [50, 40, 33, 31, 29, 25, 22, 20, 18, 17, 16],
        ],
    );

    m
});

/// Map a panel width to its nominal width bucket index
pub(crate) fn width_bucket_index(width_mm: f64) -> usize {
    if width_mm > 1375.0 {
        2
    } else if width_mm > 1125.0 {
        1
    } else {
        0
    }
}

/// Map a panel length to its length tier index (10 = overflow)
pub(crate) fn length_tier_index(length_mm: f64) -> usize {
    LENGTH_TIERS
        .iter()
        .position(|&tier| length_mm <= tier)
        .unwrap_or(LENGTH_TIERS.len())
}

/// Maximum panels of the given core/width/length safely stackable on one
/// pallet.
///
/// Unrecognized cores use [`DEFAULT_STACKING_LIMIT`]; the result is
/// always at least 16.
pub fn stacking_limit(core: &str, width_mm: f64, length_mm: f64) -> u32 {
    let Some(core) = CoreType::parse(core) else {
        return DEFAULT_STACKING_LIMIT;
    };
    let row = width_bucket_index(width_mm);
    let col = length_tier_index(length_mm);
    STACKING_LIMITS
        .get(&core)
        .map(|table| table[row][col])
        .unwrap_or(DEFAULT_STACKING_LIMIT)
}
