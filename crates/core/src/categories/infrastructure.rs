//! Infrastructure categories: road access and drinking water.

use super::CategoryGroup;

/// Status of the road serving a household.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoadStatus {
    BlackTopped,
    Graveled,
    Earthen,
    NoRoad,
}

impl CategoryGroup for RoadStatus {
    const ALL: &'static [Self] = &[
        Self::BlackTopped,
        Self::Graveled,
        Self::Earthen,
        Self::NoRoad,
    ];

    fn code(self) -> &'static str {
        match self {
            Self::BlackTopped => "BLACK_TOPPED",
            Self::Graveled => "GRAVELED",
            Self::Earthen => "EARTHEN",
            Self::NoRoad => "NO_ROAD",
        }
    }

    fn label_np(self) -> &'static str {
        match self {
            Self::BlackTopped => "कालोपत्रे सडक",
            Self::Graveled => "ग्राभेल सडक",
            Self::Earthen => "कच्ची सडक",
            Self::NoRoad => "सडक सुविधा नभएको",
        }
    }
}

/// Main source of drinking water for a household.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DrinkingWaterSource {
    PipedTap,
    TubeWell,
    CoveredWell,
    OpenWell,
    Spring,
    RiverStream,
    Other,
}

impl CategoryGroup for DrinkingWaterSource {
    const ALL: &'static [Self] = &[
        Self::PipedTap,
        Self::TubeWell,
        Self::CoveredWell,
        Self::OpenWell,
        Self::Spring,
        Self::RiverStream,
        Self::Other,
    ];

    fn code(self) -> &'static str {
        match self {
            Self::PipedTap => "PIPED_TAP",
            Self::TubeWell => "TUBE_WELL",
            Self::CoveredWell => "COVERED_WELL",
            Self::OpenWell => "OPEN_WELL",
            Self::Spring => "SPRING",
            Self::RiverStream => "RIVER_STREAM",
            Self::Other => "OTHER",
        }
    }

    fn label_np(self) -> &'static str {
        match self {
            Self::PipedTap => "पाइपधारा",
            Self::TubeWell => "ट्युबवेल",
            Self::CoveredWell => "ढाकिएको इनार",
            Self::OpenWell => "खुला इनार",
            Self::Spring => "मूल धारा",
            Self::RiverStream => "नदी खोला",
            Self::Other => "अन्य",
        }
    }
}
