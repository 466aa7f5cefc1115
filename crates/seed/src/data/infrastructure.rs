//! Infrastructure sample data: roads and drinking water by ward.

use palika_core::categories::{DrinkingWaterSource, RoadStatus};

/// Households by status of the road serving them, per ward.
pub const WARD_ROAD_STATUS: &[(i16, RoadStatus, i64)] = &[
    (1, RoadStatus::BlackTopped, 420),
    (1, RoadStatus::Graveled, 610),
    (1, RoadStatus::Earthen, 740),
    (1, RoadStatus::NoRoad, 85),
    (2, RoadStatus::Graveled, 485),
    (2, RoadStatus::Earthen, 820),
    (2, RoadStatus::NoRoad, 160),
    (3, RoadStatus::Graveled, 390),
    (3, RoadStatus::Earthen, 905),
    (3, RoadStatus::NoRoad, 215),
    (4, RoadStatus::BlackTopped, 180),
    (4, RoadStatus::Graveled, 530),
    (4, RoadStatus::Earthen, 760),
    (4, RoadStatus::NoRoad, 110),
    (5, RoadStatus::BlackTopped, 520),
    (5, RoadStatus::Graveled, 640),
    (5, RoadStatus::Earthen, 595),
    (5, RoadStatus::NoRoad, 60),
    (6, RoadStatus::BlackTopped, 610),
    (6, RoadStatus::Graveled, 705),
    (6, RoadStatus::Earthen, 680),
    (6, RoadStatus::NoRoad, 72),
    (7, RoadStatus::Graveled, 455),
    (7, RoadStatus::Earthen, 890),
    (7, RoadStatus::NoRoad, 240),
    (8, RoadStatus::Earthen, 560),
    (8, RoadStatus::NoRoad, 310),
];

/// Households by main drinking water source, per ward.
pub const WARD_DRINKING_WATER_SOURCE: &[(i16, DrinkingWaterSource, i64)] = &[
    (1, DrinkingWaterSource::PipedTap, 1240),
    (1, DrinkingWaterSource::Spring, 380),
    (1, DrinkingWaterSource::CoveredWell, 145),
    (1, DrinkingWaterSource::Other, 90),
    (2, DrinkingWaterSource::PipedTap, 880),
    (2, DrinkingWaterSource::Spring, 425),
    (2, DrinkingWaterSource::RiverStream, 110),
    (2, DrinkingWaterSource::OpenWell, 50),
    (3, DrinkingWaterSource::PipedTap, 765),
    (3, DrinkingWaterSource::Spring, 540),
    (3, DrinkingWaterSource::RiverStream, 155),
    (3, DrinkingWaterSource::OpenWell, 50),
    (4, DrinkingWaterSource::PipedTap, 1010),
    (4, DrinkingWaterSource::Spring, 310),
    (4, DrinkingWaterSource::TubeWell, 180),
    (4, DrinkingWaterSource::CoveredWell, 80),
    (5, DrinkingWaterSource::PipedTap, 1385),
    (5, DrinkingWaterSource::Spring, 265),
    (5, DrinkingWaterSource::TubeWell, 105),
    (5, DrinkingWaterSource::Other, 60),
    (6, DrinkingWaterSource::PipedTap, 1490),
    (6, DrinkingWaterSource::Spring, 320),
    (6, DrinkingWaterSource::CoveredWell, 170),
    (6, DrinkingWaterSource::OpenWell, 87),
    (7, DrinkingWaterSource::PipedTap, 940),
    (7, DrinkingWaterSource::Spring, 465),
    (7, DrinkingWaterSource::RiverStream, 180),
    (8, DrinkingWaterSource::Spring, 480),
    (8, DrinkingWaterSource::RiverStream, 245),
    (8, DrinkingWaterSource::PipedTap, 145),
];
