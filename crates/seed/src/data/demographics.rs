//! Demographic sample data: religion and caste by ward.

use palika_core::categories::{CasteGroup, Religion};

/// Population by religion per ward, from the household survey.
pub const WARD_RELIGION_POPULATION: &[(i16, Religion, i64)] = &[
    (1, Religion::Hindu, 7625),
    (1, Religion::Buddhist, 312),
    (1, Religion::Christian, 95),
    (2, Religion::Hindu, 5584),
    (2, Religion::Buddhist, 1204),
    (2, Religion::Kirant, 342),
    (3, Religion::Hindu, 5407),
    (3, Religion::Buddhist, 880),
    (3, Religion::Kirant, 610),
    (3, Religion::Nature, 41),
    (4, Religion::Hindu, 5695),
    (4, Religion::Buddhist, 463),
    (4, Religion::Christian, 182),
    (5, Religion::Hindu, 6663),
    (5, Religion::Buddhist, 290),
    (5, Religion::Christian, 57),
    (5, Religion::Islam, 24),
    (6, Religion::Hindu, 7349),
    (6, Religion::Buddhist, 517),
    (6, Religion::Christian, 123),
    (7, Religion::Hindu, 6055),
    (7, Religion::Buddhist, 1125),
    (7, Religion::Kirant, 488),
    (8, Religion::Hindu, 553),
    (8, Religion::Buddhist, 2214),
    (8, Religion::Kirant, 915),
    (8, Religion::Nature, 88),
];

/// Population by caste/ethnic group per ward.
pub const WARD_CASTE_POPULATION: &[(i16, CasteGroup, i64)] = &[
    (1, CasteGroup::Chhetri, 3120),
    (1, CasteGroup::BrahmanHill, 2485),
    (1, CasteGroup::Magar, 1210),
    (1, CasteGroup::Kami, 740),
    (1, CasteGroup::Other, 477),
    (2, CasteGroup::Chhetri, 2250),
    (2, CasteGroup::Magar, 1980),
    (2, CasteGroup::Tamang, 1340),
    (2, CasteGroup::Damai, 520),
    (2, CasteGroup::Other, 1040),
    (3, CasteGroup::Rai, 2105),
    (3, CasteGroup::Chhetri, 1820),
    (3, CasteGroup::Magar, 1615),
    (3, CasteGroup::Sarki, 430),
    (3, CasteGroup::Other, 968),
    (4, CasteGroup::Chhetri, 2540),
    (4, CasteGroup::BrahmanHill, 1725),
    (4, CasteGroup::Newar, 880),
    (4, CasteGroup::Kami, 655),
    (4, CasteGroup::Other, 540),
    (5, CasteGroup::Chhetri, 2890),
    (5, CasteGroup::BrahmanHill, 2230),
    (5, CasteGroup::Magar, 1025),
    (5, CasteGroup::Damai, 389),
    (5, CasteGroup::Other, 500),
    (6, CasteGroup::Chhetri, 3260),
    (6, CasteGroup::BrahmanHill, 2412),
    (6, CasteGroup::Magar, 1148),
    (6, CasteGroup::Kami, 692),
    (6, CasteGroup::Other, 477),
    (7, CasteGroup::Rai, 2480),
    (7, CasteGroup::Chhetri, 2015),
    (7, CasteGroup::Tamang, 1530),
    (7, CasteGroup::Sarki, 476),
    (7, CasteGroup::Other, 1167),
    (8, CasteGroup::Tamang, 1610),
    (8, CasteGroup::Rai, 1025),
    (8, CasteGroup::Magar, 540),
    (8, CasteGroup::Other, 595),
];
