//! Environment and sanitation categories.

use super::CategoryGroup;

/// Type of toilet used by a household.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToiletType {
    FlushSepticTank,
    Ordinary,
    Public,
    NoToilet,
}

impl CategoryGroup for ToiletType {
    const ALL: &'static [Self] = &[
        Self::FlushSepticTank,
        Self::Ordinary,
        Self::Public,
        Self::NoToilet,
    ];

    fn code(self) -> &'static str {
        match self {
            Self::FlushSepticTank => "FLUSH_SEPTIC_TANK",
            Self::Ordinary => "ORDINARY",
            Self::Public => "PUBLIC",
            Self::NoToilet => "NO_TOILET",
        }
    }

    fn label_np(self) -> &'static str {
        match self {
            Self::FlushSepticTank => "फ्लस चर्पी (सेप्टिक ट्यांक)",
            Self::Ordinary => "साधारण चर्पी",
            Self::Public => "सार्वजनिक चर्पी",
            Self::NoToilet => "चर्पी नभएको",
        }
    }
}
