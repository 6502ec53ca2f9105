//! Pallet size selection for a panel footprint

use crate::constants::PALLET_SIZES;
use crate::model::PalletSize;

/// Margin added to a fabricated pallet when the catalog is empty
const FABRICATED_MARGIN_MM: f64 = 100.0;

/// Find the smallest standard pallet that fits a panel.
pub fn select_pallet(width_mm: f64, length_mm: f64) -> PalletSize {
    select_pallet_from(&PALLET_SIZES, width_mm, length_mm)
}

/// Find the smallest pallet in `catalog` whose footprint covers the
/// panel, allowing a 90° rotation as a second chance. Falls back to the
/// largest catalog entry, or to a fabricated size when the catalog is
/// empty. Never fails.
pub fn select_pallet_from(catalog: &[PalletSize], width_mm: f64, length_mm: f64) -> PalletSize {
    let mut sorted: Vec<PalletSize> = catalog.to_vec();
    sorted.sort_by(|a, b| a.area().total_cmp(&b.area()));

    for pallet in &sorted {
        if pallet.width >= width_mm && pallet.length >= length_mm {
            return *pallet;
        }
    }

    // No direct fit; try the panel rotated 90 degrees
    for pallet in &sorted {
        if pallet.width >= length_mm && pallet.length >= width_mm {
            return *pallet;
        }
    }

    if let Some(largest) = sorted.last() {
        return *largest;
    }

    PalletSize {
        width: width_mm + FABRICATED_MARGIN_MM,
        length: length_mm + FABRICATED_MARGIN_MM,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_smallest_fitting_pallet() {
        // 1250x2800 panel: the 1250x3010 pallet is the smallest cover
        let pallet = select_pallet(1250.0, 2800.0);
        assert!((pallet.width - 1250.0).abs() < f64::EPSILON);
        assert!((pallet.length - 3010.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_narrow_panel_gets_narrow_pallet() {
        let pallet = select_pallet(1000.0, 2000.0);
        assert!((pallet.width - 1000.0).abs() < f64::EPSILON);
        assert!((pallet.length - 2010.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_rotation_fallback() {
        let catalog = [PalletSize {
            length: 3000.0,
            width: 1200.0,
        }];
        // 2000x1000 panel does not fit directly (width 2000 > 1200) but
        // fits rotated
        let pallet = select_pallet_from(&catalog, 2000.0, 1000.0);
        assert!((pallet.length - 3000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_largest_fallback_when_nothing_fits() {
        let pallet = select_pallet(1700.0, 7000.0);
        // Largest catalog entry by area is 1500x6410
        assert!((pallet.width - 1500.0).abs() < f64::EPSILON);
        assert!((pallet.length - 6410.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_catalog_fabricates() {
        let pallet = select_pallet_from(&[], 1250.0, 2800.0);
        assert!((pallet.width - 1350.0).abs() < f64::EPSILON);
        assert!((pallet.length - 2900.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_fit_when_cover_exists() {
        // Whenever some catalog entry covers the panel (possibly
        // rotated), the selection must cover it too
        for (w, l) in [(900.0, 1800.0), (1250.0, 6400.0), (1300.0, 3200.0), (1600.0, 3700.0)] {
            let pallet = select_pallet(w, l);
            let fits = (pallet.width >= w && pallet.length >= l)
                || (pallet.width >= l && pallet.length >= w);
            assert!(fits, "pallet {:?} does not cover {}x{}", pallet, w, l);
        }
    }
}
