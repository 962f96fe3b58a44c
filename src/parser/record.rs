use serde::{Deserialize, Serialize};
use std::fmt;

use crate::reference::CodedValue;

/// A decoded UWP
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedRecord {
    pub starport: CodedValue,
    pub size: CodedValue,
    pub atmosphere: CodedValue,
    pub hydrographics: CodedValue,
    pub population: CodedValue,
    pub government: CodedValue,
    pub law_level: CodedValue,
    pub tech_level: CodedValue,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bases: Option<Vec<CodedValue>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub travel_zone: Option<CodedValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trade_codes: Option<Vec<CodedValue>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
}

/// Record fields, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Starport,
    Size,
    Atmosphere,
    Hydrographics,
    Population,
    Government,
    LawLevel,
    TechLevel,
    Base,
    TravelZone,
    TradeCode,
    Remarks,
}

impl Field {
    pub fn label(self) -> &'static str {
        match self {
            Field::Starport => "Starport",
            Field::Size => "Size",
            Field::Atmosphere => "Atmosphere",
            Field::Hydrographics => "Hydrographics",
            Field::Population => "Population",
            Field::Government => "Government",
            Field::LawLevel => "Law Level",
            Field::TechLevel => "Tech Level",
            Field::Base => "Base",
            Field::TravelZone => "Travel Zone",
            Field::TradeCode => "Trade Code",
            Field::Remarks => "Remarks",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One line of the results table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordRow<'a> {
    pub field: Field,
    pub code: &'a str,
    pub description: &'a str,
}

impl<'a> RecordRow<'a> {
    fn coded(field: Field, value: &'a CodedValue) -> Self {
        Self {
            field,
            code: &value.code,
            description: &value.description,
        }
    }
}

impl ParsedRecord {
    /// Flatten into table rows: the eight mandatory fields, then one row
    /// per base, the travel zone, one row per trade code and the remarks
    pub fn rows(&self) -> Vec<RecordRow<'_>> {
        let mut rows = vec![
            RecordRow::coded(Field::Starport, &self.starport),
            RecordRow::coded(Field::Size, &self.size),
            RecordRow::coded(Field::Atmosphere, &self.atmosphere),
            RecordRow::coded(Field::Hydrographics, &self.hydrographics),
            RecordRow::coded(Field::Population, &self.population),
            RecordRow::coded(Field::Government, &self.government),
            RecordRow::coded(Field::LawLevel, &self.law_level),
            RecordRow::coded(Field::TechLevel, &self.tech_level),
        ];

        for base in self.bases.iter().flatten() {
            rows.push(RecordRow::coded(Field::Base, base));
        }
        if let Some(zone) = &self.travel_zone {
            rows.push(RecordRow::coded(Field::TravelZone, zone));
        }
        for trade in self.trade_codes.iter().flatten() {
            rows.push(RecordRow::coded(Field::TradeCode, trade));
        }
        if let Some(remarks) = &self.remarks {
            rows.push(RecordRow {
                field: Field::Remarks,
                code: "",
                description: remarks,
            });
        }

        rows
    }

    /// The eight positional fields
    pub fn mandatory(&self) -> [&CodedValue; 8] {
        [
            &self.starport,
            &self.size,
            &self.atmosphere,
            &self.hydrographics,
            &self.population,
            &self.government,
            &self.law_level,
            &self.tech_level,
        ]
    }

    pub fn base_codes(&self) -> Vec<&str> {
        self.bases
            .iter()
            .flatten()
            .map(|b| b.code.as_str())
            .collect()
    }

    pub fn trade_code_codes(&self) -> Vec<&str> {
        self.trade_codes
            .iter()
            .flatten()
            .map(|t| t.code.as_str())
            .collect()
    }
}
