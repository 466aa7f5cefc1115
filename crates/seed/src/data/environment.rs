//! Environment and sanitation sample data: toilet types by ward.

use palika_core::categories::ToiletType;

/// Households by toilet type, per ward.
pub const WARD_TOILET_TYPE: &[(i16, ToiletType, i64)] = &[
    (1, ToiletType::FlushSepticTank, 980),
    (1, ToiletType::Ordinary, 790),
    (1, ToiletType::NoToilet, 85),
    (2, ToiletType::FlushSepticTank, 620),
    (2, ToiletType::Ordinary, 745),
    (2, ToiletType::Public, 12),
    (2, ToiletType::NoToilet, 88),
    (3, ToiletType::FlushSepticTank, 540),
    (3, ToiletType::Ordinary, 830),
    (3, ToiletType::NoToilet, 140),
    (4, ToiletType::FlushSepticTank, 710),
    (4, ToiletType::Ordinary, 760),
    (4, ToiletType::Public, 8),
    (4, ToiletType::NoToilet, 102),
    (5, ToiletType::FlushSepticTank, 1060),
    (5, ToiletType::Ordinary, 690),
    (5, ToiletType::NoToilet, 65),
    (6, ToiletType::FlushSepticTank, 1185),
    (6, ToiletType::Ordinary, 805),
    (6, ToiletType::NoToilet, 77),
    (7, ToiletType::FlushSepticTank, 680),
    (7, ToiletType::Ordinary, 810),
    (7, ToiletType::NoToilet, 95),
    (8, ToiletType::Ordinary, 565),
    (8, ToiletType::FlushSepticTank, 150),
    (8, ToiletType::NoToilet, 155),
];
