use super::domain::{LegalDomain, LegalScenario, LegalTopic, TopicEntry};

pub(crate) fn property_topics() -> Vec<TopicEntry> {
    vec![
        ("condo-ownership", condo_ownership()),
        ("land-ownership", land_ownership()),
        ("rental-lease", rental_lease()),
        ("commercial-lease", commercial_lease()),
        ("usufruct-vs-lease", usufruct_vs_lease()),
        ("condo-common-fees", condo_common_fees()),
    ]
}

fn condo_ownership() -> LegalTopic {
    LegalTopic {
        domain: LegalDomain::Property,
        topic: "Condominium Ownership by Foreigners",
        description: "Thai law allows foreigners to own condominium units under specific conditions and restrictions.",
        relevant_laws: vec![
            "Condominium Act B.E. 2522 (1979)",
            "Land Code Amendment Act",
            "Foreign Business Act B.E. 2542 (1999)",
        ],
        key_points: vec![
            "Foreigners can own condominium units (not land) in Thailand",
            "Foreign ownership in any condominium building is limited to 49% of total unit space",
            "Remaining 51% must be Thai-owned",
            "Funds must be brought from abroad with proper documentation (Foreign Exchange Transaction Form)",
            "Unit must be registered at Land Office in foreign name",
            "Foreign ownership quota is calculated per building, not per development",
        ],
        required_documents: vec![
            "Passport",
            "Foreign Exchange Transaction Form (FET) or proof of foreign currency transfer",
            "Sale and Purchase Agreement",
            "Condominium ownership transfer documents",
            "Proof of funds origin (bank statements, wire transfer confirmation)",
        ],
        restrictions: vec![
            "Cannot own land (only the condo unit)",
            "Cannot exceed 49% foreign ownership in building",
            "Cannot purchase with Thai-sourced funds and register in foreign name (must use foreign funds)",
            "Cannot own property near borders or military installations (additional restrictions)",
        ],
        penalties: vec![],
        disclaimers: vec![
            "This is legal information only, not legal advice",
            "Property law is complex and fact-specific",
            "Consult a licensed Thai property lawyer before any transaction",
            "Laws and regulations are subject to change",
            "Individual circumstances may require different approaches",
        ],
        official_resources: vec![
            "Land Department (www.dol.go.th)",
            "Bank of Thailand (for FET forms)",
            "Local Land Office for registration",
        ],
        common_scenarios: vec![
            LegalScenario {
                scenario: "Purchasing a condo unit from developer",
                what_the_law_says: "Thai law requires funds for purchase to be transferred from abroad in foreign currency. A Foreign Exchange Transaction Form (FET) must be obtained from receiving bank as proof.",
                required_steps: vec![
                    "Transfer funds from foreign bank account in foreign currency",
                    "Receive FET form from Thai bank",
                    "Complete sale agreement with developer",
                    "Register ownership at Land Office",
                    "Verify building's foreign ownership quota is not exceeded",
                ],
                typical_documents: vec!["FET form", "Passport", "Sale agreement", "Building ownership documents"],
                government_office: Some("Land Department Office"),
                notes: vec![
                    "FET form is critical - without it, ownership may not be registered in foreign name",
                    "Building must have remaining foreign quota available",
                    "Registration must be completed within timeframe specified in sale agreement",
                ],
                ..Default::default()
            },
            LegalScenario {
                scenario: "Inheriting a condo from Thai spouse",
                what_the_law_says: "Foreign heirs inheriting property from Thai nationals may face restrictions. Thai law may require sale or transfer to comply with foreign ownership limits.",
                prohibitions: vec![
                    "Foreigners cannot inherit land (only buildings/condos)",
                    "Inherited condo may need to be sold if building foreign quota exceeded",
                ],
                notes: vec![
                    "Estate and inheritance law is complex",
                    "Tax implications for inheritance",
                ],
                ..Default::default()
            },
            LegalScenario {
                scenario: "Verifying foreign quota before purchase",
                what_the_law_says: "Thai law requires condominium buildings to maintain no more than 49% foreign ownership. Available quota is verified BEFORE transfer.",
                required_steps: vec![
                    "Request foreign quota certificate from condominium juristic person",
                    "Verify at Land Office that building has not exceeded 49% foreign ownership",
                    "Check that specific unit being purchased is not already counted in foreign quota",
                    "Ensure quota availability in writing before payment",
                ],
                typical_documents: vec![
                    "Foreign ownership quota certificate (from condo juristic person)",
                    "Building registration documents",
                    "List of foreign-owned units in building",
                ],
                government_office: Some("Land Department Office, Condominium Juristic Person"),
                notes: vec![
                    "Foreign quota is calculated per building, NOT per development (multi-building condos have separate quotas)",
                    "Quota can be exhausted even if building is not fully sold",
                    "If quota exhausted, unit must be registered in Thai name (lease arrangement possible)",
                    "Quota calculation uses total square meters, not number of units",
                ],
                ..Default::default()
            },
            LegalScenario {
                scenario: "Property transfer fees and taxes",
                what_the_law_says: "Thai law requires payment of transfer fees and taxes when ownership changes. Rates: (1) Transfer fee: 2% of registered value, (2) Stamp duty: 0.5% of registered value OR Business tax: 3.3% of registered value (if sold within 5 years by company), (3) Withholding tax: Progressive 0.5-10% based on registered value. Total typically 4-6% of property value.",
                typical_documents: vec![
                    "Sale agreement showing agreed allocation of costs",
                    "Transfer fee payment receipts",
                    "Tax payment receipts (business tax or stamp duty)",
                    "Withholding tax payment receipt",
                ],
                notes: vec![
                    "Transfer fee: Usually split 50/50 between buyer and seller (negotiable)",
                    "Business tax vs stamp duty: Cannot pay both - one or the other applies",
                    "Withholding tax: Seller's responsibility but buyer often pays to complete transfer",
                    "Land Office will not register transfer until all fees/taxes paid",
                ],
                ..Default::default()
            },
            LegalScenario {
                scenario: "Joint ownership with Thai spouse",
                what_the_law_says: "Thai law allows foreigners married to Thai nationals to purchase property jointly, but land cannot be owned by foreigner. Condominium purchase requires declaration that funds are spouse's separate property (not matrimonial).",
                required_steps: vec![
                    "Obtain marriage certificate (translated and legalized if married abroad)",
                    "Sign declaration at Land Office that funds are Thai spouse's separate property",
                    "Transfer funds showing Thai spouse as source (or sign statement that foreign funds are gift to Thai spouse)",
                    "Complete transfer in Thai spouse's name (for land) or joint names (for condo if quota available)",
                ],
                required_documents: vec![
                    "Marriage certificate",
                    "Kor Ror 22 form (declaration of separate property)",
                    "Both spouses' passports/IDs",
                    "Proof of funds",
                ],
                typical_documents: vec![
                    "Signed declaration that foreign spouse has no claim to property",
                    "Statement that property is Thai spouse's separate property under Section 1471 of Civil & Commercial Code",
                ],
                government_office: Some("Land Department Office"),
                prohibitions: vec![
                    "Foreign spouse cannot be beneficial owner of land",
                    "Cannot use matrimonial property (jointly owned assets during marriage) to buy land in foreign name",
                ],
                notes: vec![
                    "This declaration protects Land Office but has complex legal implications for divorce/death",
                    "If marriage dissolves: foreign spouse may have limited claim despite funding purchase",
                    "If Thai spouse dies: foreign spouse may not inherit land (only buildings)",
                ],
            },
        ],
    }
}

fn land_ownership() -> LegalTopic {
    LegalTopic {
        domain: LegalDomain::Property,
        topic: "Land Ownership Restrictions for Foreigners",
        description: "Thai law generally prohibits foreigners from owning land, with limited exceptions.",
        relevant_laws: vec![
            "Land Code B.E. 2497 (1954)",
            "Land Code Amendment",
            "Foreign Business Act B.E. 2542 (1999)",
        ],
        key_points: vec![
            "Foreigners generally CANNOT own land in Thailand",
            "Land can be leased for up to 30 years (renewable)",
            "Thai companies with majority Thai ownership can own land",
            "Foreign spouse of Thai national cannot own land (even through marriage)",
            "Exception: Investment of 40 million THB or more under Board of Investment (BOI)",
            "Structures on land (buildings/houses) can be owned separately from land",
        ],
        required_documents: vec![],
        restrictions: vec![
            "No direct land ownership by foreigners (with rare exceptions)",
            "Cannot use nominee structure (Thai person holding land for foreigner) - this is illegal",
            "Cannot circumvent restrictions through marriage",
            "Leases exceeding 30 years are void",
        ],
        penalties: vec![
            "Void transactions if nominee structure discovered",
            "Possible criminal prosecution for fraudulent land acquisition",
            "Forced sale of illegally held land",
        ],
        disclaimers: vec![
            "Land law in Thailand is strict and heavily enforced",
            "Attempting to circumvent restrictions is illegal",
            "This is information only, not legal advice",
        ],
        official_resources: vec![
            "Land Department (www.dol.go.th)",
            "Ministry of Interior",
            "Board of Investment (for BOI exceptions)",
        ],
        common_scenarios: vec![
            LegalScenario {
                scenario: "Long-term lease of land",
                what_the_law_says: "Thai law allows land to be leased to foreigners for up to 30 years. Lease must be registered at Land Office to be enforceable.",
                required_steps: vec![
                    "Negotiate lease agreement with Thai landowner",
                    "Register lease at Land Department Office",
                    "Pay registration fee (approximately 1% of total lease value)",
                    "Ensure lease terms do not exceed 30 years",
                ],
                typical_documents: vec!["Passport", "Lease agreement", "Land title deed (Chanote)", "Landowner's ID"],
                government_office: Some("Land Department Office"),
                notes: vec![
                    "Verbal agreements are not enforceable for land leases",
                    "Registration is essential for legal protection",
                    "Renewal clauses for additional 30-year terms are legally uncertain",
                ],
                ..Default::default()
            },
            LegalScenario {
                scenario: "Buying land through Thai company",
                what_the_law_says: "A Thai company with at least 51% Thai ownership can own land. However, using Thai nominees (Thai shareholders with no real investment) to circumvent foreign ownership restrictions is illegal under Thai law.",
                prohibitions: vec![
                    "Nominee structures are illegal and void",
                    "Authorities can investigate and void transactions",
                    "Criminal penalties may apply for nominee arrangements",
                ],
                notes: vec![
                    "Legitimate Thai companies with genuine Thai shareholders can own land",
                    "Nominee structures may result in loss of property",
                ],
                ..Default::default()
            },
        ],
    }
}

fn rental_lease() -> LegalTopic {
    LegalTopic {
        domain: LegalDomain::Property,
        topic: "Rental and Lease Agreements (Residential)",
        description: "Thai law governs rental and lease agreements for residential properties.",
        relevant_laws: vec![
            "Civil and Commercial Code - Book III (Property)",
            "Lease of Immovable Property Act",
        ],
        key_points: vec![
            "Leases under 3 years: oral agreement valid, written agreement also enforceable",
            "Leases 3+ years: must be in writing and registered at Land Office",
            "Residential rental: typically 1-year contracts",
            "Deposit typically 1-2 months rent (must be returned unless damage)",
            "30-day notice typically required for termination",
        ],
        required_documents: vec![],
        restrictions: vec![
            "Leases over 30 years are void",
            "Certain lease terms may be unenforceable if against public policy",
            "Automatic rent increases may be limited",
        ],
        penalties: vec![],
        disclaimers: vec![
            "Rental law varies between residential and commercial property",
            "Individual lease terms supersede general law in many cases",
            "This is information only, not legal advice",
        ],
        official_resources: vec![
            "Consumer Protection Board",
            "Small Claims Court (for deposit disputes)",
            "Land Department (for lease registration)",
        ],
        common_scenarios: vec![
            LegalScenario {
                scenario: "Renting a condominium (residential)",
                what_the_law_says: "Thai law allows oral or written lease agreements for terms under 3 years. Written agreements are enforceable without registration.",
                required_steps: vec![
                    "Negotiate rent and terms with landlord",
                    "Sign lease agreement (typically 1 year)",
                    "Pay deposit (1-2 months) and first month rent",
                    "Conduct property inspection and document condition",
                    "Receive keys and copies of agreement",
                ],
                typical_documents: vec![
                    "Lease agreement",
                    "Passport copy",
                    "Deposit receipt",
                    "Property condition checklist",
                ],
                notes: vec![
                    "Leases are commonly drafted in both Thai and English",
                    "Utility payment responsibilities are set by the lease",
                    "Notice period for termination is set by the lease",
                ],
                ..Default::default()
            },
            LegalScenario {
                scenario: "Early termination of lease",
                what_the_law_says: "Thai law does not automatically allow early termination. Early termination terms must be specified in the lease agreement. Without such clause, tenant may be liable for remaining rent.",
                prohibitions: vec![
                    "Cannot terminate without agreement unless landlord breaches contract",
                    "Cannot withhold rent without legal justification",
                ],
                notes: vec![
                    "Typical clause: 1-2 months notice + forfeit deposit",
                    "Landlord breach may allow termination (e.g., uninhabitable property)",
                ],
                ..Default::default()
            },
            LegalScenario {
                scenario: "Deposit return disputes",
                what_the_law_says: "Thai law requires landlord to return deposit unless legitimate deductions for damage beyond normal wear and tear. Landlord must provide evidence of damage and costs.",
                notes: vec![
                    "Normal wear and tear is landlord's responsibility",
                    "Burden of proof for damage is on landlord",
                    "Disputes can be resolved through mediation or Small Claims Court",
                ],
                ..Default::default()
            },
            LegalScenario {
                scenario: "Property inspection requirements (move-in/move-out)",
                what_the_law_says: "Thai law does not mandate formal property inspections; inspection records are the usual evidence in deposit disputes.",
                required_steps: vec![
                    "Walk-through inspection with landlord before signing lease",
                    "Document existing damage, defects, and wear with photos/video",
                    "Written inspection checklist signed by both parties",
                    "Repeat inspection at move-out, compared to move-in condition",
                ],
                typical_documents: vec![
                    "Property condition checklist (move-in and move-out)",
                    "Timestamped photos of property",
                    "Video walkthrough",
                    "Signed acknowledgment from landlord",
                ],
                notes: vec![
                    "Utility meter readings are commonly recorded at move-in and move-out",
                    "Move-out inspection compares to move-in checklist, not ideal condition",
                    "Normal wear: small nail holes, minor scuffs, faded paint (landlord pays)",
                    "Damage: large holes, broken fixtures, stains, burns (tenant may pay)",
                ],
                ..Default::default()
            },
        ],
    }
}

fn commercial_lease() -> LegalTopic {
    LegalTopic {
        domain: LegalDomain::Property,
        topic: "Commercial Property Leases",
        description: "Thai law governs commercial leases differently from residential, with longer terms and different protections.",
        relevant_laws: vec![
            "Civil and Commercial Code - Book III (Property)",
            "Lease of Immovable Property Act",
        ],
        key_points: vec![
            "Commercial leases typically 3-30 years",
            "Must be registered at Land Office if 3+ years",
            "Less tenant protection than residential leases",
            "Rent increases common (built into contract)",
            "Substantial deposits typical (3-6 months rent)",
            "Early termination penalties more severe",
            "Landlord may require personal guarantee",
        ],
        required_documents: vec![],
        restrictions: vec![
            "Maximum 30-year lease term",
            "Automatic renewal clauses may not be enforceable",
            "Cannot lease land as foreigner unless building separate structure",
        ],
        penalties: vec![],
        disclaimers: vec![
            "Commercial lease law offers less tenant protection than residential",
            "Contract terms are critical",
            "This is information only, not legal advice",
        ],
        official_resources: vec![
            "Land Department (www.dol.go.th)",
            "Department of Business Development (for business licenses)",
        ],
        common_scenarios: vec![
            LegalScenario {
                scenario: "Leasing commercial space for restaurant/retail",
                what_the_law_says: "Thai law allows commercial leases up to 30 years, must be registered if 3+ years. Commercial leases have fewer statutory protections than residential - contract terms are critical.",
                required_steps: vec![
                    "Agree lease term (typically 3, 5, or 10 years)",
                    "Agree rent escalation (typically 5-10% every 3 years)",
                    "Determine who pays utilities, maintenance, repairs",
                    "Agree improvements/renovations allowances",
                    "Register lease at Land Office (if 3+ years)",
                    "Pay registration fee (~1% of total lease value)",
                ],
                typical_documents: vec![
                    "Commercial lease agreement",
                    "Company registration documents (if business entity)",
                    "Personal guarantee (from director/owner)",
                    "Deposit receipt (typically 3-6 months)",
                    "Land title deed (Chanote)",
                ],
                government_office: Some("Land Department Office"),
                notes: vec![
                    "Rent escalation clauses common and binding",
                    "Landlord may require 'key money' (non-refundable upfront payment)",
                    "Improvements: usually remain with landlord at end of lease",
                    "Personal guarantee: Director may be personally liable if company defaults",
                    "Early termination often requires paying all remaining rent",
                ],
                ..Default::default()
            },
            LegalScenario {
                scenario: "Commercial lease renewal or extension",
                what_the_law_says: "Thai law limits leases to 30 years maximum. Renewal clauses for additional terms are legally uncertain - courts may not enforce automatic renewal beyond initial 30-year limit.",
                required_steps: vec![
                    "Review original lease for renewal clauses",
                    "New terms agreed with landlord (not automatic)",
                    "Sign new lease agreement for additional term",
                    "Re-register at Land Office (if 3+ years)",
                ],
                notes: vec![
                    "Renewal is NOT guaranteed even if contract states 'renewable'",
                    "Landlord can renegotiate terms at renewal (higher rent, different terms)",
                    "Total lease term (original + renewals) cannot exceed 30 years per registration",
                    "Some leases structured as: 30 years + 30 years (legally questionable, may not be enforceable)",
                ],
                ..Default::default()
            },
        ],
    }
}

fn usufruct_vs_lease() -> LegalTopic {
    LegalTopic {
        domain: LegalDomain::Property,
        topic: "Usufruct vs Lease vs Ownership Rights",
        description: "Thai law offers different property rights structures with varying durations and protections.",
        relevant_laws: vec![
            "Civil and Commercial Code - Sections 1417-1428 (Usufruct)",
            "Civil and Commercial Code - Book III (Lease)",
            "Land Code B.E. 2497 (1954)",
        ],
        key_points: vec![
            "Ownership: Foreigners cannot own land (condos only)",
            "Lease: Maximum 30 years, registered at Land Office",
            "Usufruct: Lifetime right to use property (but max 30 years, extendable)",
            "Superficies: Right to own buildings on someone else's land",
            "Habitation: Personal right to live in property (non-transferable)",
            "Each right offers different protections and durations",
        ],
        required_documents: vec![],
        restrictions: vec![
            "Foreigners cannot own land (lease/usufruct only)",
            "Usufruct cannot exceed lifetime or 30 years (renewable)",
            "Usufruct cannot be sold or transferred (ends with holder)",
            "Lease maximum 30 years per term",
        ],
        penalties: vec![
            "Unregistered usufruct/lease not enforceable",
            "Verbal agreements void for land rights",
        ],
        disclaimers: vec![
            "Property rights law is complex and case-specific",
            "Divorce, death, and inheritance significantly affect rights",
            "This is information only, not legal advice",
        ],
        official_resources: vec![
            "Land Department (www.dol.go.th)",
            "Local Land Office for registration",
        ],
        common_scenarios: vec![
            LegalScenario {
                scenario: "Usufruct vs Lease for foreigner married to Thai spouse",
                what_the_law_says: "Thai law allows usufruct (lifetime right to use property) as alternative to lease. Usufruct can be granted for lifetime of holder or maximum 30 years (renewable). Lease is limited to 30 years.",
                required_steps: vec![
                    "Choose between lease (30 years) or usufruct (lifetime or 30 years)",
                    "Register right at Land Office (both require registration)",
                    "Pay registration fee (approximately 1% of property value)",
                ],
                typical_documents: vec![
                    "Usufruct agreement or Lease agreement",
                    "Land title deed (Chanote)",
                    "Marriage certificate (if spouse granting usufruct)",
                    "Thai spouse's consent",
                ],
                government_office: Some("Land Department Office"),
                notes: vec![
                    "USUFRUCT: Right to use property for lifetime (or 30 years if specified). Can build, renovate, rent out. Cannot sell land itself. Ends upon death (cannot pass to heirs).",
                    "LEASE: Right to use for specified term (max 30 years). Renewable (though renewal not guaranteed). Can be inherited or sold (if contract allows).",
                    "OWNERSHIP: Foreigners cannot own land. Can own buildings/structures separately from land.",
                    "Divorce: Both usufruct and lease can be challenged.",
                ],
                ..Default::default()
            },
            LegalScenario {
                scenario: "Superficies right for building on leased land",
                what_the_law_says: "Thai law allows superficies right - ownership of buildings separate from land ownership. Foreigners can own buildings even if land is owned by Thai national.",
                required_steps: vec![
                    "Lease land OR obtain usufruct",
                    "Obtain superficies right from landowner",
                    "Register superficies at Land Office",
                    "Build or purchase buildings",
                    "Register building ownership separately",
                ],
                notes: vec![
                    "Superficies allows foreigner to OWN the building while Thai person owns land",
                    "Building can be sold independently of land",
                    "Superficies typically granted for 30 years (same term as lease)",
                    "At end of lease/superficies: building may revert to landowner (unless extended)",
                ],
                ..Default::default()
            },
        ],
    }
}

fn condo_common_fees() -> LegalTopic {
    LegalTopic {
        domain: LegalDomain::Property,
        topic: "Condominium Common Fees and Disputes",
        description: "Thai condominium law establishes juristic person to manage common areas, collect fees, and resolve disputes.",
        relevant_laws: vec!["Condominium Act B.E. 2522 (1979)", "Civil and Commercial Code"],
        key_points: vec![
            "All condominiums must have juristic person (management entity)",
            "Common fees mandatory for all unit owners",
            "Common fees used for: maintenance, security, utilities for common areas, repairs, reserves",
            "Juristic person has authority over common areas and rules",
            "Unit owners can be sued for unpaid common fees",
            "Disputes resolved through: juristic person, mediation, or courts",
        ],
        required_documents: vec![],
        restrictions: vec![
            "Cannot refuse to pay common fees (even if dispute with juristic person)",
            "Cannot modify common areas without juristic person approval",
            "Cannot violate condominium rules/bylaws",
        ],
        penalties: vec![
            "Late fees for unpaid common fees (typically 1.5% per month)",
            "Legal action and lien on property for non-payment",
            "Fines for rule violations (amount set by bylaws)",
            "Cannot sell unit with outstanding common fee debt",
        ],
        disclaimers: vec![
            "Condominium law varies by building age and bylaws",
            "Individual condominium rules may be more restrictive than general law",
            "This is information only, not legal advice",
        ],
        official_resources: vec![
            "Condominium Juristic Person Office",
            "Land Department (for condominium registration issues)",
            "Consumer Protection Board (for disputes)",
        ],
        common_scenarios: vec![
            LegalScenario {
                scenario: "Understanding common fee obligations",
                what_the_law_says: "Thai law requires all condominium unit owners to pay common area maintenance fees to juristic person. Fees set by majority vote of co-owners. Non-payment can lead to legal action.",
                typical_documents: vec![
                    "Common fee invoice (monthly)",
                    "Annual budget from juristic person",
                    "Fee breakdown (maintenance, security, utilities)",
                ],
                notes: vec![
                    "Common fees typically 30-70 THB per sqm per month (luxury condos: 100+ THB)",
                    "Sinking fund: One-time fee for major repairs (roofing, facade, structural)",
                    "Fees can increase: Juristic person can vote to raise fees (majority required)",
                    "Non-payment consequences: Late fees, legal action, lien on property, cannot sell until fees paid",
                ],
                ..Default::default()
            },
            LegalScenario {
                scenario: "Disputes with juristic person or co-owners",
                what_the_law_says: "Thai law grants juristic person authority to enforce condominium rules and manage common areas. Disputes can be resolved through internal process, mediation, or courts.",
                required_steps: vec![
                    "Review condominium rules and bylaws",
                    "Raise issue with juristic person committee",
                    "Attend co-owner meeting to vote on issues",
                    "If unresolved: Mediation through local office or court",
                ],
                notes: vec![
                    "Juristic person power: Can fine owners for rule violations, restrict access to common areas, sue for unpaid fees",
                    "Renovation restrictions: Major renovations require juristic person approval",
                    "Voting power: Usually 1 vote per unit (or proportional to ownership percentage)",
                ],
                ..Default::default()
            },
            LegalScenario {
                scenario: "Common area damage or maintenance issues",
                what_the_law_says: "Thai law assigns responsibility for common area maintenance to juristic person. Common areas include: lobbies, hallways, elevators, pools, gyms, parking, building exterior.",
                required_steps: vec![
                    "Report issue to juristic person/management",
                    "Document issue with photos/video",
                    "Escalate to committee meeting if unresolved",
                ],
                notes: vec![
                    "Common area: Juristic person responsible (paid by common fees)",
                    "Unit interior: Owner responsible (except structural issues)",
                    "Water leaks from common pipes: Juristic person pays",
                    "Water leaks from unit plumbing: Unit owner pays",
                    "Major repairs: May require sinking fund or special assessment (voted by co-owners)",
                ],
                ..Default::default()
            },
        ],
    }
}
