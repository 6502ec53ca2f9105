//! Empty pallet weight estimates
//!
//! Measured construction weights per pallet size, not derived from a
//! formula. Width tiers: up to 1000 mm, up to 1250 mm, wider. Length
//! bands run in 500 mm steps up to 6000 mm with one overflow value per
//! tier.

/// Upper bounds of the length bands in mm
const LENGTH_BANDS: [f64; 9] = [
    2000.0, 2500.0, 3000.0, 3500.0, 4000.0, 4500.0, 5000.0, 5500.0, 6000.0,
];

// Rows: width tier. Columns: length band, last value is the overflow.
static PALLET_WEIGHTS_KG: [[f64; 10]; 3] = [
    [40.91, 46.0, 51.09, 56.17, 61.26, 71.44, 81.62, 91.79, 101.97, 112.15],
    [51.14, 57.5, 63.86, 70.22, 76.58, 89.3, 102.02, 114.74, 127.46, 140.18],
    [61.36, 69.0, 76.63, 84.26, 91.89, 107.16, 122.42, 137.69, 152.95, 168.22],
];

fn width_tier_index(width_mm: f64) -> usize {
    if width_mm <= 1000.0 {
        0
    } else if width_mm <= 1250.0 {
        1
    } else {
        2
    }
}

fn length_band_index(length_mm: f64) -> usize {
    LENGTH_BANDS
        .iter()
        .position(|&band| length_mm <= band)
        .unwrap_or(LENGTH_BANDS.len())
}

/// Estimated weight in kg of one empty pallet sized for the given panel
pub fn pallet_weight(width_mm: f64, length_mm: f64) -> f64 {
    PALLET_WEIGHTS_KG[width_tier_index(width_mm)][length_band_index(length_mm)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_weights() {
        assert!((pallet_weight(1000.0, 2000.0) - 40.91).abs() < 0.001);
        assert!((pallet_weight(1250.0, 2800.0) - 63.86).abs() < 0.001);
        assert!((pallet_weight(1500.0, 6200.0) - 168.22).abs() < 0.001);
    }

    #[test]
    fn test_tier_edges() {
        // 1000mm is still the narrow tier, 1001mm is not
        assert!((pallet_weight(1000.0, 3000.0) - 51.09).abs() < 0.001);
        assert!((pallet_weight(1001.0, 3000.0) - 63.86).abs() < 0.001);
        assert!((pallet_weight(1251.0, 3000.0) - 76.63).abs() < 0.001);
    }

    #[test]
    fn test_weights_non_decreasing_with_length() {
        for width in [1000.0, 1250.0, 1500.0] {
            let mut prev = 0.0;
            for &band in &LENGTH_BANDS {
                let weight = pallet_weight(width, band);
                assert!(weight >= prev);
                prev = weight;
            }
            assert!(pallet_weight(width, 6500.0) >= prev);
        }
    }
}
