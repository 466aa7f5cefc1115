//! Demographic categories: religion and caste/ethnicity.

use super::CategoryGroup;

/// Religion followed by a household's members.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Religion {
    Hindu,
    Buddhist,
    Kirant,
    Christian,
    Islam,
    Nature,
    Other,
}

impl CategoryGroup for Religion {
    const ALL: &'static [Self] = &[
        Self::Hindu,
        Self::Buddhist,
        Self::Kirant,
        Self::Christian,
        Self::Islam,
        Self::Nature,
        Self::Other,
    ];

    fn code(self) -> &'static str {
        match self {
            Self::Hindu => "HINDU",
            Self::Buddhist => "BUDDHIST",
            Self::Kirant => "KIRANT",
            Self::Christian => "CHRISTIAN",
            Self::Islam => "ISLAM",
            Self::Nature => "NATURE",
            Self::Other => "OTHER",
        }
    }

    fn label_np(self) -> &'static str {
        match self {
            Self::Hindu => "हिन्दू",
            Self::Buddhist => "बौद्ध",
            Self::Kirant => "किराँत",
            Self::Christian => "क्रिश्चियन",
            Self::Islam => "इस्लाम",
            Self::Nature => "प्रकृति",
            Self::Other => "अन्य",
        }
    }
}

/// Caste / ethnic group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CasteGroup {
    Chhetri,
    BrahmanHill,
    Magar,
    Tamang,
    Newar,
    Rai,
    Kami,
    Damai,
    Sarki,
    Other,
}

impl CategoryGroup for CasteGroup {
    const ALL: &'static [Self] = &[
        Self::Chhetri,
        Self::BrahmanHill,
        Self::Magar,
        Self::Tamang,
        Self::Newar,
        Self::Rai,
        Self::Kami,
        Self::Damai,
        Self::Sarki,
        Self::Other,
    ];

    fn code(self) -> &'static str {
        match self {
            Self::Chhetri => "CHHETRI",
            Self::BrahmanHill => "BRAHMAN_HILL",
            Self::Magar => "MAGAR",
            Self::Tamang => "TAMANG",
            Self::Newar => "NEWAR",
            Self::Rai => "RAI",
            Self::Kami => "KAMI",
            Self::Damai => "DAMAI",
            Self::Sarki => "SARKI",
            Self::Other => "OTHER",
        }
    }

    fn label_np(self) -> &'static str {
        match self {
            Self::Chhetri => "क्षेत्री",
            Self::BrahmanHill => "ब्राह्मण (पहाडी)",
            Self::Magar => "मगर",
            Self::Tamang => "तामाङ",
            Self::Newar => "नेवार",
            Self::Rai => "राई",
            Self::Kami => "कामी",
            Self::Damai => "दमाई",
            Self::Sarki => "सार्की",
            Self::Other => "अन्य",
        }
    }
}
