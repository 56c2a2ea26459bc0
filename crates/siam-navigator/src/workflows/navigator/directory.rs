use super::profile::normalize_country;
use serde::Deserialize;
use std::collections::BTreeSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Source of the country lists the rule engine and tax analyzer match against.
///
/// Implementations must treat the nationality case-insensitively and ignore
/// surrounding whitespace.
pub trait NationalityDirectory: Send + Sync {
    fn is_visa_exempt(&self, nationality: &str) -> bool;
    fn has_visa_on_arrival(&self, nationality: &str) -> bool;
    fn has_tax_treaty(&self, nationality: &str) -> bool;
}

const VISA_EXEMPT: &[&str] = &[
    // Americas
    "usa", "canada", "brazil", "argentina", "chile", "peru", "mexico",
    // Schengen
    "austria", "belgium", "czech republic", "denmark", "estonia", "finland", "france",
    "germany", "greece", "hungary", "iceland", "italy", "latvia", "liechtenstein",
    "lithuania", "luxembourg", "malta", "netherlands", "norway", "poland", "portugal",
    "slovakia", "slovenia", "spain", "sweden", "switzerland",
    "uk", "ireland",
    // Asia
    "japan", "south korea", "singapore", "malaysia", "hong kong", "macau", "brunei",
    "philippines", "vietnam", "indonesia", "laos", "mongolia",
    // Middle East
    "israel", "turkey", "uae", "bahrain", "oman", "qatar", "kuwait",
    "australia", "new zealand", "south africa",
];

// Disjoint from VISA_EXEMPT.
const VISA_ON_ARRIVAL: &[&str] = &[
    "andorra", "bulgaria", "bhutan", "china", "cyprus", "ethiopia", "fiji", "georgia",
    "india", "kazakhstan", "maldives", "mauritius", "papua new guinea", "romania",
    "san marino", "saudi arabia", "taiwan", "uzbekistan", "vanuatu",
];

const TAX_TREATY: &[&str] = &[
    "australia", "austria", "bahrain", "bangladesh", "belgium", "bulgaria", "canada",
    "china", "cyprus", "czech republic", "denmark", "finland", "france", "germany",
    "hong kong", "hungary", "india", "indonesia", "ireland", "israel", "italy", "japan",
    "korea", "kuwait", "laos", "luxembourg", "malaysia", "mauritius", "myanmar", "nepal",
    "netherlands", "new zealand", "norway", "oman", "pakistan", "philippines", "poland",
    "romania", "russia", "saudi arabia", "seychelles", "singapore", "slovenia",
    "south africa", "spain", "sri lanka", "sweden", "switzerland", "taiwan", "turkey",
    "uae", "uk", "ukraine", "usa", "uzbekistan", "vietnam",
];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct CountryLists {
    visa_exempt: BTreeSet<String>,
    visa_on_arrival: BTreeSet<String>,
    tax_treaty: BTreeSet<String>,
}

impl CountryLists {
    fn from_slices(exempt: &[&str], arrival: &[&str], treaty: &[&str]) -> Self {
        let collect = |names: &[&str]| names.iter().map(|name| normalize_country(name)).collect();
        Self {
            visa_exempt: collect(exempt),
            visa_on_arrival: collect(arrival),
            tax_treaty: collect(treaty),
        }
    }

    fn list_mut(&mut self, kind: CountryList) -> &mut BTreeSet<String> {
        match kind {
            CountryList::VisaExempt => &mut self.visa_exempt,
            CountryList::VisaOnArrival => &mut self.visa_on_arrival,
            CountryList::TaxTreaty => &mut self.tax_treaty,
        }
    }

    fn contains(set: &BTreeSet<String>, nationality: &str) -> bool {
        set.contains(&normalize_country(nationality))
    }
}

/// The built-in lists, current as of early 2025.
#[derive(Debug, Clone)]
pub struct StaticNationalityDirectory {
    lists: CountryLists,
}

impl StaticNationalityDirectory {
    pub fn standard() -> Self {
        Self {
            lists: CountryLists::from_slices(VISA_EXEMPT, VISA_ON_ARRIVAL, TAX_TREATY),
        }
    }
}

impl Default for StaticNationalityDirectory {
    fn default() -> Self {
        Self::standard()
    }
}

impl NationalityDirectory for StaticNationalityDirectory {
    fn is_visa_exempt(&self, nationality: &str) -> bool {
        CountryLists::contains(&self.lists.visa_exempt, nationality)
    }

    fn has_visa_on_arrival(&self, nationality: &str) -> bool {
        CountryLists::contains(&self.lists.visa_on_arrival, nationality)
    }

    fn has_tax_treaty(&self, nationality: &str) -> bool {
        CountryLists::contains(&self.lists.tax_treaty, nationality)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CountryList {
    VisaExempt,
    VisaOnArrival,
    TaxTreaty,
}

impl CountryList {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "visa-exempt" => Some(Self::VisaExempt),
            "visa-on-arrival" => Some(Self::VisaOnArrival),
            "tax-treaty" => Some(Self::TaxTreaty),
            _ => None,
        }
    }
}

/// Country lists loaded from a `country,list` CSV export, replacing the built-in tables.
#[derive(Debug, Clone)]
pub struct CsvNationalityDirectory {
    lists: CountryLists,
}

impl CsvNationalityDirectory {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DirectoryError> {
        let file = File::open(path.as_ref())?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DirectoryError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut lists = CountryLists::default();

        for (index, record) in csv_reader.deserialize::<DirectoryRow>().enumerate() {
            let row = record?;
            let kind = CountryList::parse(&row.list).ok_or_else(|| DirectoryError::UnknownList {
                // header occupies line 1
                line: index + 2,
                value: row.list.clone(),
            })?;
            let country = normalize_country(&row.country);
            if country.is_empty() {
                continue;
            }
            lists.list_mut(kind).insert(country);
        }

        Ok(Self { lists })
    }

    pub fn len(&self) -> usize {
        self.lists.visa_exempt.len() + self.lists.visa_on_arrival.len() + self.lists.tax_treaty.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl NationalityDirectory for CsvNationalityDirectory {
    fn is_visa_exempt(&self, nationality: &str) -> bool {
        CountryLists::contains(&self.lists.visa_exempt, nationality)
    }

    fn has_visa_on_arrival(&self, nationality: &str) -> bool {
        CountryLists::contains(&self.lists.visa_on_arrival, nationality)
    }

    fn has_tax_treaty(&self, nationality: &str) -> bool {
        CountryLists::contains(&self.lists.tax_treaty, nationality)
    }
}

#[derive(Debug, Deserialize)]
struct DirectoryRow {
    country: String,
    list: String,
}

#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    #[error("failed to read nationality directory: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid nationality directory CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("line {line}: unknown country list '{value}'")]
    UnknownList { line: usize, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_lists_match_case_insensitively() {
        let directory = StaticNationalityDirectory::standard();
        assert!(directory.is_visa_exempt("  Germany "));
        assert!(directory.has_visa_on_arrival("INDIA"));
        assert!(directory.has_tax_treaty("usa"));
        assert!(!directory.is_visa_exempt("narnia"));
    }

    #[test]
    fn exemption_and_arrival_lists_do_not_overlap() {
        let directory = StaticNationalityDirectory::standard();
        for country in VISA_ON_ARRIVAL {
            assert!(
                !directory.is_visa_exempt(country),
                "{country} appears on both lists"
            );
        }
    }

    #[test]
    fn csv_directory_replaces_builtin_lists() {
        let data = "country,list\nNarnia,visa-exempt\nGermany,tax-treaty\nOz,visa-on-arrival\n";
        let directory = CsvNationalityDirectory::from_reader(data.as_bytes()).expect("csv parses");

        assert_eq!(directory.len(), 3);
        assert!(directory.is_visa_exempt("narnia"));
        assert!(!directory.is_visa_exempt("germany"));
        assert!(directory.has_tax_treaty("GERMANY"));
        assert!(directory.has_visa_on_arrival("oz"));
    }

    #[test]
    fn csv_directory_rejects_unknown_lists() {
        let data = "country,list\nGermany,tax-treaty\nNarnia,wizard-pass\n";
        let err = CsvNationalityDirectory::from_reader(data.as_bytes()).expect_err("bad list");
        match err {
            DirectoryError::UnknownList { line, value } => {
                assert_eq!(line, 3);
                assert_eq!(value, "wizard-pass");
            }
            other => panic!("unexpected error {other:?}"),
        }
    }
}
