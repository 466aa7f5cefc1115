//! Governance sample data: elected representatives and civil organizations.

/// `(full_name, position, ward_number, party, phone)` rows.
///
/// Municipality-level officials carry no ward number.
pub const ELECTED_REPRESENTATIVES: &[(
    &str,
    &str,
    Option<i16>,
    Option<&str>,
    Option<&str>,
)] = &[
    (
        "रामबहादुर थापा",
        "अध्यक्ष",
        None,
        Some("नेपाली काँग्रेस"),
        Some("9841000001"),
    ),
    (
        "सीता कुमारी राई",
        "उपाध्यक्ष",
        None,
        Some("नेकपा (एमाले)"),
        Some("9841000002"),
    ),
    ("कृष्णप्रसाद अधिकारी", "वडा अध्यक्ष", Some(1), Some("नेपाली काँग्रेस"), None),
    ("गोपाल गुरुङ", "वडा अध्यक्ष", Some(2), Some("नेकपा (एमाले)"), None),
    ("धनबहादुर मगर", "वडा अध्यक्ष", Some(3), Some("नेकपा (माओवादी केन्द्र)"), None),
    ("टेकनाथ पौडेल", "वडा अध्यक्ष", Some(4), Some("नेपाली काँग्रेस"), None),
    ("शिवहरि भट्टराई", "वडा अध्यक्ष", Some(5), Some("नेकपा (एमाले)"), None),
    ("मनकुमारी श्रेष्ठ", "वडा अध्यक्ष", Some(6), Some("नेपाली काँग्रेस"), None),
    ("भीमबहादुर राई", "वडा अध्यक्ष", Some(7), Some("नेकपा (एमाले)"), None),
    ("लाक्पा तामाङ", "वडा अध्यक्ष", Some(8), Some("स्वतन्त्र"), None),
];

/// `(name, kind, ward_number)` rows for registered community organizations.
pub const CIVIL_ORGANIZATIONS: &[(&str, &str, Option<i16>)] = &[
    ("जनजागृति आमा समूह", "आमा समूह", Some(2)),
    ("प्रगतिशील आमा समूह", "आमा समूह", Some(5)),
    ("हरियाली सामुदायिक वन उपभोक्ता समूह", "सामुदायिक वन", Some(3)),
    ("सेतीदेवी सामुदायिक वन उपभोक्ता समूह", "सामुदायिक वन", Some(7)),
    ("लक्ष्मी बचत तथा ऋण सहकारी संस्था", "सहकारी", Some(1)),
    ("किसान बहुउद्देश्यीय सहकारी संस्था", "सहकारी", Some(6)),
    ("युवा क्लब नमूना", "युवा क्लब", Some(4)),
    ("एकता युवा क्लब", "युवा क्लब", Some(8)),
    ("गाउँपालिका खानेपानी उपभोक्ता समिति", "उपभोक्ता समिति", None),
];
