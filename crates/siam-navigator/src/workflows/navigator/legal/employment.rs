use super::domain::{LegalDomain, LegalScenario, LegalTopic, TopicEntry};

pub(crate) fn employment_topics() -> Vec<TopicEntry> {
    vec![
        ("employment-contract", employment_contract()),
        ("termination-severance", termination_severance()),
    ]
}

fn employment_contract() -> LegalTopic {
    LegalTopic {
        domain: LegalDomain::Employment,
        topic: "Employment Contracts and Labor Standards",
        description: "Thai labor law establishes minimum standards for employment relationships and working conditions.",
        relevant_laws: vec![
            "Labor Protection Act B.E. 2541 (1998)",
            "Labor Relations Act B.E. 2518 (1975)",
            "Social Security Act B.E. 2533 (1990)",
        ],
        key_points: vec![
            "Written employment contract is not legally required for all positions",
            "Certain terms are mandatory by law regardless of contract",
            "Maximum working hours: 8 hours/day, 48 hours/week (general work)",
            "Overtime: 1.5x regular rate for weekday OT, 3x for holidays",
            "Minimum wage: varies by province (2024: 330-370 THB/day)",
            "Annual leave: minimum 6 days per year after 1 year of service",
            "Sick leave: 30 days per year with medical certificate",
            "Probation period: typically 119 days (no legal limit but affects severance)",
        ],
        required_documents: vec![],
        restrictions: vec![
            "Cannot pay below minimum wage",
            "Cannot exceed maximum working hours limits",
            "Cannot deprive employee of minimum statutory benefits",
            "Cannot discriminate based on certain protected characteristics",
        ],
        penalties: vec![],
        disclaimers: vec![
            "Employment law is detailed and complex",
            "Individual circumstances may affect rights and obligations",
            "Contracts should be reviewed by legal professionals",
            "This is information only, not legal advice",
        ],
        official_resources: vec![
            "Department of Labor Protection and Welfare (www.labour.go.th)",
            "Social Security Office",
            "Labor Court (for disputes)",
        ],
        common_scenarios: vec![
            LegalScenario {
                scenario: "Starting employment with written contract",
                what_the_law_says: "Thai law does not mandate written contracts for all positions. A written contract must comply with Labor Protection Act minimum standards.",
                required_steps: vec![
                    "Minimum wage compliance",
                    "Working hours and overtime provisions",
                    "Leave entitlements (annual, sick, business)",
                    "Termination notice requirements",
                    "Register for Social Security",
                ],
                typical_documents: vec![
                    "Employment contract (Thai and English)",
                    "Job description",
                    "Company policies/employee handbook",
                    "Social Security registration",
                ],
                notes: vec![
                    "Contract terms cannot be less favorable than legal minimums",
                    "If contract is silent, legal minimums apply",
                ],
                ..Default::default()
            },
            LegalScenario {
                scenario: "Overtime work requirements",
                what_the_law_says: "Thai labor law limits overtime to 36 hours per week. Employee consent is required for overtime work. Overtime must be compensated at 1.5x regular rate (weekdays), 2x (holidays if regular day off), 3x (holidays if regular work day).",
                prohibitions: vec![
                    "Cannot force overtime without employee consent",
                    "Cannot exceed maximum working hours without proper compensation",
                    "Cannot use 'salary includes overtime' clause to avoid overtime pay",
                ],
                notes: vec![
                    "Certain positions exempt from overtime rules (managerial, professional)",
                    "Employees can refuse unreasonable overtime requests",
                ],
                ..Default::default()
            },
        ],
    }
}

fn termination_severance() -> LegalTopic {
    LegalTopic {
        domain: LegalDomain::Employment,
        topic: "Employment Termination and Severance Pay",
        description: "Thai labor law regulates how employment relationships can be terminated and requires severance pay in certain circumstances.",
        relevant_laws: vec!["Labor Protection Act B.E. 2541 (1998)", "Labor Relations Act"],
        key_points: vec![
            "Notice period: depends on contract and tenure (typically 1 month for monthly employees)",
            "Severance pay: required for termination by employer without cause",
            "Severance rates based on years of service (120 days - 400 days of wages)",
            "No severance if: employee resigns, termination for serious misconduct, end of fixed-term contract",
            "Special termination pay: additional 15 days wages for employees with 6+ months service (certain conditions)",
            "Unfair dismissal protections exist",
        ],
        required_documents: vec![],
        restrictions: vec![],
        penalties: vec![
            "Unfair dismissal: reinstatement or compensation up to 1 year wages",
            "Failure to pay severance: employee can sue for payment plus damages",
        ],
        disclaimers: vec![
            "Termination law is complex with many exceptions",
            "Documentation is critical for both employers and employees",
            "Unfair dismissal claims should be filed within 60 days",
            "This is information only, not legal advice",
        ],
        official_resources: vec![
            "Department of Labor Protection and Welfare",
            "Labor Court",
            "Tripartite Committee for Labor Relations",
        ],
        common_scenarios: vec![
            LegalScenario {
                scenario: "Employer terminating without cause (redundancy, restructuring)",
                what_the_law_says: "Thai law requires employer to pay severance if terminating employment without employee fault. Severance amount depends on length of service.",
                required_steps: vec![
                    "Provide advance notice (per contract or law)",
                    "Calculate severance: 120-400 days wages depending on tenure",
                    "Pay all outstanding wages, unused leave",
                    "Provide employment certificate",
                    "Process Social Security termination",
                ],
                notes: vec![
                    "Severance calculation: <1 year=30 days, 1-3 years=90 days, 3-6 years=180 days, 6-10 years=240 days, 10-20 years=300 days, 20+ years=400 days",
                    "Payment in lieu of notice may be possible",
                    "Special termination payment may apply (15 days wages)",
                ],
                ..Default::default()
            },
            LegalScenario {
                scenario: "Employee resignation (voluntary)",
                what_the_law_says: "Thai law allows employees to resign with proper notice (per contract). No severance pay is due from employer for voluntary resignation.",
                required_steps: vec![
                    "Provide written resignation letter",
                    "Work notice period (typically 1 month for monthly employees)",
                    "OR negotiate immediate release with employer consent",
                    "Complete handover procedures",
                    "Receive final wages and unused leave payment",
                ],
                notes: vec![
                    "Notice period per contract (if longer than legal requirement)",
                    "Employer cannot compel employee to stay beyond reasonable notice",
                    "Employee may forfeit bonuses or benefits if leaving before scheduled payment",
                ],
                ..Default::default()
            },
            LegalScenario {
                scenario: "Termination for serious misconduct",
                what_the_law_says: "Thai Labor Protection Act allows immediate termination without severance for serious misconduct (dishonesty, willful disobedience, assault, criminal conviction causing damage, etc.).",
                prohibitions: vec![
                    "Employer must have clear evidence of misconduct",
                    "Burden of proof is on employer",
                    "Minor infractions do not justify summary dismissal",
                ],
                notes: vec![
                    "Examples of serious misconduct: theft, fraud, assault, repeated gross negligence",
                    "Unfair dismissal claims can be filed with Labor Court",
                ],
                ..Default::default()
            },
        ],
    }
}
