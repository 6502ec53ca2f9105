//! Standard pallet footprint catalog

use crate::model::PalletSize;

/// Pallet base height in millimeters
pub const PALLET_HEIGHT_MM: f64 = 200.0;

/// Standard pallet footprints in mm, grouped by width
pub const PALLET_SIZES: [PalletSize; 59] = [
    // 1000mm wide pallets
    PalletSize { length: 2010.0, width: 1000.0 },
    PalletSize { length: 2260.0, width: 1000.0 },
    PalletSize { length: 2510.0, width: 1000.0 },
    PalletSize { length: 2760.0, width: 1000.0 },
    PalletSize { length: 3010.0, width: 1000.0 },
    PalletSize { length: 3210.0, width: 1000.0 },
    PalletSize { length: 3510.0, width: 1000.0 },
    PalletSize { length: 3760.0, width: 1000.0 },
    PalletSize { length: 4010.0, width: 1000.0 },
    PalletSize { length: 4260.0, width: 1000.0 },
    PalletSize { length: 4510.0, width: 1000.0 },
    PalletSize { length: 4760.0, width: 1000.0 },
    PalletSize { length: 5010.0, width: 1000.0 },
    PalletSize { length: 5260.0, width: 1000.0 },
    PalletSize { length: 5510.0, width: 1000.0 },
    PalletSize { length: 5760.0, width: 1000.0 },
    PalletSize { length: 6010.0, width: 1000.0 },
    PalletSize { length: 6260.0, width: 1000.0 },
    PalletSize { length: 6410.0, width: 1000.0 },
    // 1250mm wide pallets
    PalletSize { length: 2010.0, width: 1250.0 },
    PalletSize { length: 2260.0, width: 1250.0 },
    PalletSize { length: 2510.0, width: 1250.0 },
    PalletSize { length: 2760.0, width: 1250.0 },
    PalletSize { length: 3010.0, width: 1250.0 },
    PalletSize { length: 3210.0, width: 1250.0 },
    PalletSize { length: 3510.0, width: 1250.0 },
    PalletSize { length: 3760.0, width: 1250.0 },
    PalletSize { length: 4010.0, width: 1250.0 },
    PalletSize { length: 4260.0, width: 1250.0 },
    PalletSize { length: 4510.0, width: 1250.0 },
    PalletSize { length: 4760.0, width: 1250.0 },
    PalletSize { length: 5010.0, width: 1250.0 },
    PalletSize { length: 5260.0, width: 1250.0 },
    PalletSize { length: 5510.0, width: 1250.0 },
    PalletSize { length: 5760.0, width: 1250.0 },
    PalletSize { length: 6010.0, width: 1250.0 },
    PalletSize { length: 6260.0, width: 1250.0 },
    PalletSize { length: 6410.0, width: 1250.0 },
    // 1300mm wide pallets
    PalletSize { length: 3210.0, width: 1300.0 },
    // 1500mm wide pallets
    PalletSize { length: 2010.0, width: 1500.0 },
    PalletSize { length: 2260.0, width: 1500.0 },
    PalletSize { length: 2510.0, width: 1500.0 },
    PalletSize { length: 2760.0, width: 1500.0 },
    PalletSize { length: 3010.0, width: 1500.0 },
    PalletSize { length: 3210.0, width: 1500.0 },
    PalletSize { length: 3510.0, width: 1500.0 },
    PalletSize { length: 3760.0, width: 1500.0 },
    PalletSize { length: 4010.0, width: 1500.0 },
    PalletSize { length: 4260.0, width: 1500.0 },
    PalletSize { length: 4510.0, width: 1500.0 },
    PalletSize { length: 4760.0, width: 1500.0 },
    PalletSize { length: 5010.0, width: 1500.0 },
    PalletSize { length: 5260.0, width: 1500.0 },
    PalletSize { length: 5510.0, width: 1500.0 },
    PalletSize { length: 5760.0, width: 1500.0 },
    PalletSize { length: 6010.0, width: 1500.0 },
    PalletSize { length: 6260.0, width: 1500.0 },
    PalletSize { length: 6410.0, width: 1500.0 },
    // 1600mm wide pallets
    PalletSize { length: 3760.0, width: 1600.0 },
];
