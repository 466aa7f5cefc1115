//! Social sample data: literacy by ward.

use palika_core::categories::LiteracyStatus;

/// Population aged five or older by literacy status, per ward.
pub const WARD_LITERACY_STATUS: &[(i16, LiteracyStatus, i64)] = &[
    (1, LiteracyStatus::BothReadWrite, 5230),
    (1, LiteracyStatus::ReadOnly, 860),
    (1, LiteracyStatus::Illiterate, 1420),
    (2, LiteracyStatus::BothReadWrite, 4180),
    (2, LiteracyStatus::ReadOnly, 940),
    (2, LiteracyStatus::Illiterate, 1580),
    (3, LiteracyStatus::BothReadWrite, 3890),
    (3, LiteracyStatus::ReadOnly, 1020),
    (3, LiteracyStatus::Illiterate, 1705),
    (4, LiteracyStatus::BothReadWrite, 4265),
    (4, LiteracyStatus::ReadOnly, 885),
    (4, LiteracyStatus::Illiterate, 1390),
    (5, LiteracyStatus::BothReadWrite, 4980),
    (5, LiteracyStatus::ReadOnly, 790),
    (5, LiteracyStatus::Illiterate, 1215),
    (6, LiteracyStatus::BothReadWrite, 5520),
    (6, LiteracyStatus::ReadOnly, 905),
    (6, LiteracyStatus::Illiterate, 1340),
    (7, LiteracyStatus::BothReadWrite, 4420),
    (7, LiteracyStatus::ReadOnly, 1080),
    (7, LiteracyStatus::Illiterate, 1810),
    (8, LiteracyStatus::BothReadWrite, 1890),
    (8, LiteracyStatus::ReadOnly, 540),
    (8, LiteracyStatus::Illiterate, 1120),
];
