use super::domain::{LegalDomain, LegalScenario, LegalTopic, TopicEntry};

pub(crate) fn business_topics() -> Vec<TopicEntry> {
    vec![
        ("company-formation", company_formation()),
        ("foreign-business-restrictions", foreign_business_restrictions()),
    ]
}

fn company_formation() -> LegalTopic {
    LegalTopic {
        domain: LegalDomain::Business,
        topic: "Company Formation in Thailand",
        description: "Thai law allows several business entity types with different foreign ownership restrictions.",
        relevant_laws: vec![
            "Civil and Commercial Code",
            "Foreign Business Act B.E. 2542 (1999)",
            "Limited Partnership, Limited Company, Association and Foundation Act",
        ],
        key_points: vec![
            "Main entity types: Limited Company, Partnership, Branch Office, Representative Office",
            "Foreign ownership restrictions depend on business type",
            "Minimum 3 shareholders required for Limited Company",
            "Minimum 3 directors required (can be same as shareholders)",
            "Registered capital requirements vary by business type",
            "Foreign Business License required for certain businesses",
        ],
        required_documents: vec![],
        restrictions: vec![
            "Nominee shareholder structures are illegal",
            "Certain businesses restricted or prohibited for foreigners",
            "Minimum capital requirements for work permits",
            "At least 51% Thai ownership required for land ownership",
        ],
        penalties: vec![
            "Operating without proper license: fines and possible imprisonment",
            "Nominee structures: void transactions, criminal liability",
            "False declarations: fines up to 1 million THB",
        ],
        disclaimers: vec![
            "Business law is complex and varies by industry",
            "Foreign ownership restrictions are strictly enforced",
            "Professional legal and accounting advice essential",
            "This is information only, not legal advice",
        ],
        official_resources: vec![
            "Department of Business Development (www.dbd.go.th)",
            "Board of Investment (www.boi.go.th)",
            "Revenue Department",
            "Ministry of Commerce",
        ],
        common_scenarios: vec![
            LegalScenario {
                scenario: "Forming a Thai Limited Company (majority Thai ownership)",
                what_the_law_says: "Thai law allows formation of limited companies with minimum 3 shareholders. If foreign ownership exceeds certain thresholds, business may be subject to Foreign Business Act restrictions.",
                required_steps: vec![
                    "Reserve company name with Department of Business Development (DBD)",
                    "Prepare Memorandum of Association and Articles of Association",
                    "Register company with DBD",
                    "Obtain Tax ID from Revenue Department",
                    "Register for VAT (if applicable)",
                    "Register for Social Security",
                    "Obtain necessary business licenses",
                ],
                typical_documents: vec![
                    "Memorandum of Association",
                    "Articles of Association",
                    "Shareholder passports/IDs",
                    "Director passports/IDs",
                    "Office lease agreement (registered office)",
                    "Shareholder meeting minutes",
                ],
                government_office: Some("Department of Business Development (DBD)"),
                notes: vec![
                    "Minimum registered capital: varies by business (typically 1-2 million THB for foreign workers)",
                    "Work permit requirements: 2 million THB capital per foreign employee (general rule)",
                ],
                ..Default::default()
            },
            LegalScenario {
                scenario: "Foreign-owned company (100% foreign ownership)",
                what_the_law_says: "Thai Foreign Business Act restricts foreign ownership in certain business activities. Majority foreign-owned companies may require Foreign Business License (FBL) or qualify for BOI promotion.",
                required_steps: vec![
                    "Verify business activity is not on prohibited list",
                    "Apply for Foreign Business License if required",
                    "OR apply for BOI promotion if eligible",
                    "Register company with minimum capital (typically 2-3 million THB for FBL)",
                    "Complete standard company registration process",
                ],
                prohibitions: vec![
                    "Certain businesses are prohibited for foreigners (List 1 of FBA)",
                    "Restricted businesses require minimum Thai ownership or FBL (Lists 2-3)",
                ],
                notes: vec![
                    "Foreign Business License process is lengthy and complex",
                    "BOI promotion provides 100% foreign ownership and tax benefits",
                ],
                ..Default::default()
            },
        ],
    }
}

fn foreign_business_restrictions() -> LegalTopic {
    LegalTopic {
        domain: LegalDomain::Business,
        topic: "Foreign Business Act Restrictions",
        description: "Thai Foreign Business Act categorizes business activities into three lists with different restriction levels.",
        relevant_laws: vec!["Foreign Business Act B.E. 2542 (1999)", "Ministerial Regulations under FBA"],
        key_points: vec![
            "List 1: Absolutely prohibited for foreigners (e.g., newspapers, rice farming, land trading)",
            "List 2: Restricted unless Cabinet approval (e.g., certain services)",
            "List 3: Restricted unless Foreign Business License obtained (e.g., retail, construction, legal services)",
            "Foreign = >49% foreign ownership or control",
            "BOI promotion can exempt from FBA restrictions",
            "Treaty of Amity (US-Thai) provides some exemptions",
        ],
        required_documents: vec![],
        restrictions: vec![
            "List 1 businesses: absolutely prohibited (special exception only)",
            "Lists 2-3: require license or Thai majority ownership",
            "Treaty of Amity only applies to US nationals",
        ],
        penalties: vec![],
        disclaimers: vec![
            "FBA enforcement is strict",
            "Business classification can be ambiguous",
            "This is information only, not legal advice",
        ],
        official_resources: vec![
            "Department of Business Development",
            "Board of Investment",
            "Ministry of Commerce",
        ],
        common_scenarios: vec![LegalScenario {
            scenario: "Operating a retail business as foreigner",
            what_the_law_says: "Retail business is on List 3 of Foreign Business Act. Foreign-majority ownership requires Foreign Business License (FBL) or BOI promotion.",
            required_steps: vec![
                "Verify specific business activity classification",
                "Apply for Foreign Business License OR",
                "Apply for BOI promotion (if eligible)",
                "Meet minimum capital requirements (3 million THB for FBL)",
                "Demonstrate benefit to Thailand (employment, technology transfer, etc.)",
            ],
            notes: vec![
                "FBL approval is discretionary and can take 6-12 months",
                "E-commerce and online retail may face different treatment",
                "BOI promotion is faster but requires meeting investment criteria",
            ],
            ..Default::default()
        }],
    }
}
