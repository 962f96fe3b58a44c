use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Description given to any code that has no entry in its table
pub const UNKNOWN_DESCRIPTION: &str = "Unknown";

/// One resolved category value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodedValue {
    pub code: String,
    pub description: String,
}

impl CodedValue {
    pub fn new(code: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            description: description.into(),
        }
    }

    /// Placeholder for a code no table knows about
    pub fn unknown(code: impl Into<String>) -> Self {
        Self::new(code, UNKNOWN_DESCRIPTION)
    }

    pub fn is_unknown(&self) -> bool {
        self.description == UNKNOWN_DESCRIPTION
    }
}

/// Ordered code table for a single category.
///
/// Codes are expected to be unique but this is not enforced; lookups
/// return the first matching entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReferenceTable {
    entries: Vec<CodedValue>,
}

impl ReferenceTable {
    pub fn new(entries: Vec<CodedValue>) -> Self {
        Self { entries }
    }

    /// Build a table from `(code, description)` pairs
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        Self::new(
            pairs
                .iter()
                .map(|(code, description)| CodedValue::new(*code, *description))
                .collect(),
        )
    }

    pub fn entries(&self) -> &[CodedValue] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn find(&self, code: &str) -> Option<&CodedValue> {
        self.entries.iter().find(|entry| entry.code == code)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.find(code).is_some()
    }

    /// Resolve a code, falling back to an `Unknown` placeholder on a miss
    pub fn lookup(&self, code: &str) -> CodedValue {
        self.find(code)
            .cloned()
            .unwrap_or_else(|| CodedValue::unknown(code))
    }

    /// Single-character form of [`lookup`](Self::lookup)
    pub fn lookup_char(&self, code: char) -> CodedValue {
        let mut buf = [0u8; 4];
        self.lookup(code.encode_utf8(&mut buf))
    }

    pub fn contains_char(&self, code: char) -> bool {
        let mut buf = [0u8; 4];
        self.contains(code.encode_utf8(&mut buf))
    }
}

/// Reference categories, named as they appear in reference data files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Starport,
    Size,
    Atmosphere,
    Hydrographics,
    Population,
    Government,
    LawLevel,
    TechLevel,
    Bases,
    TravelZone,
    TradeCodes,
    Allegiances,
}

impl Category {
    pub const ALL: [Category; 12] = [
        Category::Starport,
        Category::Size,
        Category::Atmosphere,
        Category::Hydrographics,
        Category::Population,
        Category::Government,
        Category::LawLevel,
        Category::TechLevel,
        Category::Bases,
        Category::TravelZone,
        Category::TradeCodes,
        Category::Allegiances,
    ];

    /// Key used in reference data files
    pub fn key(self) -> &'static str {
        match self {
            Category::Starport => "starport",
            Category::Size => "size",
            Category::Atmosphere => "atmosphere",
            Category::Hydrographics => "hydrographics",
            Category::Population => "population",
            Category::Government => "government",
            Category::LawLevel => "law_level",
            Category::TechLevel => "tech_level",
            Category::Bases => "bases",
            Category::TravelZone => "travel_zone",
            Category::TradeCodes => "trade_codes",
            Category::Allegiances => "allegiances",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('-', "_");
        Category::ALL
            .into_iter()
            .find(|category| category.key() == wanted)
            .ok_or_else(|| format!("Unknown category: {}", s))
    }
}

/// Every reference table the parser consults, keyed by category
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceData {
    pub starport: ReferenceTable,
    pub size: ReferenceTable,
    pub atmosphere: ReferenceTable,
    pub hydrographics: ReferenceTable,
    pub population: ReferenceTable,
    pub government: ReferenceTable,
    pub law_level: ReferenceTable,
    pub tech_level: ReferenceTable,
    pub bases: ReferenceTable,
    pub travel_zone: ReferenceTable,
    pub trade_codes: ReferenceTable,
    /// Not consulted by the parser
    #[serde(default)]
    pub allegiances: ReferenceTable,
}

impl ReferenceData {
    pub fn table(&self, category: Category) -> &ReferenceTable {
        match category {
            Category::Starport => &self.starport,
            Category::Size => &self.size,
            Category::Atmosphere => &self.atmosphere,
            Category::Hydrographics => &self.hydrographics,
            Category::Population => &self.population,
            Category::Government => &self.government,
            Category::LawLevel => &self.law_level,
            Category::TechLevel => &self.tech_level,
            Category::Bases => &self.bases,
            Category::TravelZone => &self.travel_zone,
            Category::TradeCodes => &self.trade_codes,
            Category::Allegiances => &self.allegiances,
        }
    }
}
