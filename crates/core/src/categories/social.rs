//! Social categories: literacy.

use super::CategoryGroup;

/// Literacy status of a person aged five or older.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LiteracyStatus {
    BothReadWrite,
    ReadOnly,
    Illiterate,
}

impl CategoryGroup for LiteracyStatus {
    const ALL: &'static [Self] = &[Self::BothReadWrite, Self::ReadOnly, Self::Illiterate];

    fn code(self) -> &'static str {
        match self {
            Self::BothReadWrite => "BOTH_READ_WRITE",
            Self::ReadOnly => "READ_ONLY",
            Self::Illiterate => "ILLITERATE",
        }
    }

    fn label_np(self) -> &'static str {
        match self {
            Self::BothReadWrite => "पढ्न लेख्न जान्ने",
            Self::ReadOnly => "पढ्न मात्र जान्ने",
            Self::Illiterate => "पढ्न लेख्न नजान्ने",
        }
    }
}
