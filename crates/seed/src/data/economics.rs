//! Economic sample data: occupation and remittance usage by ward.

use palika_core::categories::{Occupation, RemittanceAmountGroup, RemittanceExpense};

/// Economically active population by major occupation per ward.
pub const WARD_MAJOR_OCCUPATION: &[(i16, Occupation, i64)] = &[
    (1, Occupation::Agriculture, 2840),
    (1, Occupation::ForeignEmployment, 910),
    (1, Occupation::Business, 420),
    (1, Occupation::DailyWage, 385),
    (1, Occupation::GovernmentService, 160),
    (2, Occupation::Agriculture, 2310),
    (2, Occupation::ForeignEmployment, 745),
    (2, Occupation::DailyWage, 410),
    (2, Occupation::HouseholdWork, 370),
    (3, Occupation::Agriculture, 2195),
    (3, Occupation::ForeignEmployment, 682),
    (3, Occupation::DailyWage, 445),
    (3, Occupation::Other, 212),
    (4, Occupation::Agriculture, 2420),
    (4, Occupation::ForeignEmployment, 758),
    (4, Occupation::Business, 365),
    (4, Occupation::NonGovernmentService, 148),
    (5, Occupation::Agriculture, 2695),
    (5, Occupation::ForeignEmployment, 880),
    (5, Occupation::Business, 510),
    (5, Occupation::GovernmentService, 205),
    (6, Occupation::Agriculture, 2980),
    (6, Occupation::ForeignEmployment, 925),
    (6, Occupation::DailyWage, 468),
    (6, Occupation::Business, 430),
    (7, Occupation::Agriculture, 2550),
    (7, Occupation::ForeignEmployment, 810),
    (7, Occupation::DailyWage, 520),
    (7, Occupation::HouseholdWork, 295),
    (8, Occupation::Agriculture, 1240),
    (8, Occupation::DailyWage, 310),
    (8, Occupation::ForeignEmployment, 285),
    (8, Occupation::Other, 96),
];

/// Remittance-receiving households by main expense area per ward.
pub const WARD_REMITTANCE_EXPENSES: &[(i16, RemittanceExpense, i64)] = &[
    (1, RemittanceExpense::HouseholdUse, 512),
    (1, RemittanceExpense::Education, 180),
    (1, RemittanceExpense::LoanPayment, 95),
    (1, RemittanceExpense::Saving, 64),
    (2, RemittanceExpense::HouseholdUse, 438),
    (2, RemittanceExpense::Education, 142),
    (2, RemittanceExpense::Health, 88),
    (3, RemittanceExpense::HouseholdUse, 395),
    (3, RemittanceExpense::LoanPayment, 120),
    (3, RemittanceExpense::Education, 105),
    (4, RemittanceExpense::HouseholdUse, 441),
    (4, RemittanceExpense::Education, 156),
    (4, RemittanceExpense::LandPurchase, 72),
    (5, RemittanceExpense::HouseholdUse, 505),
    (5, RemittanceExpense::Education, 198),
    (5, RemittanceExpense::Saving, 92),
    (6, RemittanceExpense::HouseholdUse, 548),
    (6, RemittanceExpense::Education, 201),
    (6, RemittanceExpense::Business, 85),
    (7, RemittanceExpense::HouseholdUse, 470),
    (7, RemittanceExpense::LoanPayment, 134),
    (7, RemittanceExpense::Health, 97),
    (8, RemittanceExpense::HouseholdUse, 205),
    (8, RemittanceExpense::Education, 58),
    (8, RemittanceExpense::Other, 31),
];

/// Remittance-sending population by annual amount band per ward.
///
/// Every band keeps its own code; nothing is collapsed.
pub const WARD_REMITTANCE_AMOUNT_GROUP: &[(i16, RemittanceAmountGroup, i64)] = &[
    (1, RemittanceAmountGroup::Rs0To49999, 98),
    (1, RemittanceAmountGroup::Rs50000To99999, 215),
    (1, RemittanceAmountGroup::Rs100000To199999, 320),
    (1, RemittanceAmountGroup::Rs200000To299999, 185),
    (1, RemittanceAmountGroup::Rs300000Plus, 92),
    (2, RemittanceAmountGroup::Rs0To49999, 84),
    (2, RemittanceAmountGroup::Rs50000To99999, 198),
    (2, RemittanceAmountGroup::Rs100000To199999, 265),
    (2, RemittanceAmountGroup::Rs200000To299999, 142),
    (3, RemittanceAmountGroup::Rs0To49999, 76),
    (3, RemittanceAmountGroup::Rs50000To99999, 172),
    (3, RemittanceAmountGroup::Rs100000To199999, 238),
    (3, RemittanceAmountGroup::Rs300000Plus, 58),
    (4, RemittanceAmountGroup::Rs50000To99999, 188),
    (4, RemittanceAmountGroup::Rs100000To199999, 276),
    (4, RemittanceAmountGroup::Rs200000To299999, 151),
    (5, RemittanceAmountGroup::Rs0To49999, 92),
    (5, RemittanceAmountGroup::Rs50000To99999, 224),
    (5, RemittanceAmountGroup::Rs100000To199999, 312),
    (5, RemittanceAmountGroup::Rs300000Plus, 104),
    (6, RemittanceAmountGroup::Rs50000To99999, 241),
    (6, RemittanceAmountGroup::Rs100000To199999, 334),
    (6, RemittanceAmountGroup::Rs200000To299999, 176),
    (7, RemittanceAmountGroup::Rs0To49999, 88),
    (7, RemittanceAmountGroup::Rs50000To99999, 206),
    (7, RemittanceAmountGroup::Rs100000To199999, 285),
    (8, RemittanceAmountGroup::Rs0To49999, 46),
    (8, RemittanceAmountGroup::Rs50000To99999, 95),
    (8, RemittanceAmountGroup::Rs100000To199999, 73),
];
