//! Economic categories: occupation and remittance usage.

use super::CategoryGroup;

/// Major occupation of an economically active person.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Occupation {
    Agriculture,
    ForeignEmployment,
    DailyWage,
    Business,
    GovernmentService,
    NonGovernmentService,
    HouseholdWork,
    Other,
}

impl CategoryGroup for Occupation {
    const ALL: &'static [Self] = &[
        Self::Agriculture,
        Self::ForeignEmployment,
        Self::DailyWage,
        Self::Business,
        Self::GovernmentService,
        Self::NonGovernmentService,
        Self::HouseholdWork,
        Self::Other,
    ];

    fn code(self) -> &'static str {
        match self {
            Self::Agriculture => "AGRICULTURE",
            Self::ForeignEmployment => "FOREIGN_EMPLOYMENT",
            Self::DailyWage => "DAILY_WAGE",
            Self::Business => "BUSINESS",
            Self::GovernmentService => "GOVERNMENT_SERVICE",
            Self::NonGovernmentService => "NON_GOVERNMENT_SERVICE",
            Self::HouseholdWork => "HOUSEHOLD_WORK",
            Self::Other => "OTHER",
        }
    }

    fn label_np(self) -> &'static str {
        match self {
            Self::Agriculture => "कृषि",
            Self::ForeignEmployment => "वैदेशिक रोजगारी",
            Self::DailyWage => "ज्याला मजदुरी",
            Self::Business => "व्यापार व्यवसाय",
            Self::GovernmentService => "सरकारी सेवा",
            Self::NonGovernmentService => "गैरसरकारी सेवा",
            Self::HouseholdWork => "घरायसी काम",
            Self::Other => "अन्य",
        }
    }
}

/// What remittance-receiving households mainly spend the money on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RemittanceExpense {
    Education,
    Health,
    HouseholdUse,
    LoanPayment,
    LandPurchase,
    Saving,
    Business,
    Other,
}

impl CategoryGroup for RemittanceExpense {
    const ALL: &'static [Self] = &[
        Self::Education,
        Self::Health,
        Self::HouseholdUse,
        Self::LoanPayment,
        Self::LandPurchase,
        Self::Saving,
        Self::Business,
        Self::Other,
    ];

    fn code(self) -> &'static str {
        match self {
            Self::Education => "EDUCATION",
            Self::Health => "HEALTH",
            Self::HouseholdUse => "HOUSEHOLD_USE",
            Self::LoanPayment => "LOAN_PAYMENT",
            Self::LandPurchase => "LAND_PURCHASE",
            Self::Saving => "SAVING",
            Self::Business => "BUSINESS",
            Self::Other => "OTHER",
        }
    }

    fn label_np(self) -> &'static str {
        match self {
            Self::Education => "शिक्षा",
            Self::Health => "स्वास्थ्य",
            Self::HouseholdUse => "घरायसी प्रयोग",
            Self::LoanPayment => "ऋण भुक्तानी",
            Self::LandPurchase => "घरजग्गा खरिद",
            Self::Saving => "बचत",
            Self::Business => "व्यवसाय लगानी",
            Self::Other => "अन्य",
        }
    }
}

/// Annual remittance amount band, per sending person.
///
/// Each band keeps its own code; the bands are never collapsed into a
/// shared bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RemittanceAmountGroup {
    Rs0To49999,
    Rs50000To99999,
    Rs100000To199999,
    Rs200000To299999,
    Rs300000Plus,
}

impl CategoryGroup for RemittanceAmountGroup {
    const ALL: &'static [Self] = &[
        Self::Rs0To49999,
        Self::Rs50000To99999,
        Self::Rs100000To199999,
        Self::Rs200000To299999,
        Self::Rs300000Plus,
    ];

    fn code(self) -> &'static str {
        match self {
            Self::Rs0To49999 => "RS_0_TO_49999",
            Self::Rs50000To99999 => "RS_50000_TO_99999",
            Self::Rs100000To199999 => "RS_100000_TO_199999",
            Self::Rs200000To299999 => "RS_200000_TO_299999",
            Self::Rs300000Plus => "RS_300000_PLUS",
        }
    }

    fn label_np(self) -> &'static str {
        match self {
            Self::Rs0To49999 => "रु. ५० हजारभन्दा कम",
            Self::Rs50000To99999 => "रु. ५० हजारदेखि १ लाखसम्म",
            Self::Rs100000To199999 => "रु. १ लाखदेखि २ लाखसम्म",
            Self::Rs200000To299999 => "रु. २ लाखदेखि ३ लाखसम्म",
            Self::Rs300000Plus => "रु. ३ लाखभन्दा बढी",
        }
    }
}
