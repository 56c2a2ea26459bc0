use super::domain::{LegalResource, LegalResourceDirectory};

const GOVERNMENT_OFFICE: &str = "Government Office";

pub(crate) fn resource_directories() -> Vec<LegalResourceDirectory> {
    vec![
        LegalResourceDirectory {
            category: "government-offices",
            resources: vec![
                LegalResource {
                    name: "Land Department",
                    kind: GOVERNMENT_OFFICE,
                    specialty: vec!["Property registration", "Land ownership", "Leases"],
                    website: Some("www.dol.go.th"),
                    notes: vec![
                        "Handles all property registration",
                        "Branch offices in every province",
                    ],
                },
                LegalResource {
                    name: "Department of Business Development (DBD)",
                    kind: GOVERNMENT_OFFICE,
                    specialty: vec!["Company registration", "Business licenses"],
                    website: Some("www.dbd.go.th"),
                    notes: vec!["Company registration", "Foreign Business Licenses"],
                },
                LegalResource {
                    name: "Board of Investment (BOI)",
                    kind: GOVERNMENT_OFFICE,
                    specialty: vec!["Investment promotion", "BOI privileges"],
                    website: Some("www.boi.go.th"),
                    notes: vec!["Offers tax and non-tax benefits for qualifying businesses"],
                },
                LegalResource {
                    name: "Department of Labor Protection and Welfare",
                    kind: GOVERNMENT_OFFICE,
                    specialty: vec!["Labor law", "Employment disputes"],
                    website: Some("www.labour.go.th"),
                    notes: vec!["Enforces labor protection laws", "Handles complaints"],
                },
                LegalResource {
                    name: "Labor Court",
                    kind: "Court",
                    specialty: vec!["Employment disputes", "Unfair dismissal", "Severance claims"],
                    website: None,
                    notes: vec![
                        "Specialized court for labor matters",
                        "Can order reinstatement or compensation",
                    ],
                },
            ],
        },
        LegalResourceDirectory {
            category: "embassies",
            resources: vec![LegalResource {
                name: "Embassy Contact for Nationals",
                kind: "Embassy/Consulate",
                specialty: vec![],
                website: None,
                notes: vec![
                    "Can provide list of local lawyers",
                    "Cannot provide legal advice",
                    "Can assist with legal emergencies (arrest, detention)",
                ],
            }],
        },
        LegalResourceDirectory {
            category: "lawyers",
            resources: vec![LegalResource {
                name: "Thai Bar Association",
                kind: "Professional Association",
                specialty: vec![],
                website: Some("www.lawyerscouncil.or.th"),
                notes: vec![
                    "Can provide referrals to licensed lawyers",
                    "Verify lawyer credentials",
                    "File complaints about lawyer misconduct",
                ],
            }],
        },
        LegalResourceDirectory {
            category: "legal-aid",
            resources: vec![LegalResource {
                name: "Legal Aid Office (Department of Rights and Liberties Protection)",
                kind: "Government Legal Aid",
                specialty: vec![],
                website: None,
                notes: vec![
                    "Free legal assistance for qualifying individuals",
                    "Income requirements apply",
                    "Civil and criminal cases",
                ],
            }],
        },
    ]
}
