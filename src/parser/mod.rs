//! UWP string decoding
//!
//! A UWP such as `A865AB7-C N A Ag In (Major Trade Hub)` is a core code of
//! eight single-character categories around a `-`, followed by an optional
//! trailer of bases, travel zone, trade codes and remarks.

pub mod record;
pub mod trailer;
pub mod validate;

pub use record::*;
pub use trailer::*;
pub use validate::*;

use tracing::debug;

use crate::error::FormatError;
use crate::reference::{Category, CodedValue, ReferenceData};

/// Core code positions and the table each one resolves against.
/// Index 7 is the separator.
pub const CORE_POSITIONS: [(usize, Category); 8] = [
    (0, Category::Starport),
    (1, Category::Size),
    (2, Category::Atmosphere),
    (3, Category::Hydrographics),
    (4, Category::Population),
    (5, Category::Government),
    (6, Category::LawLevel),
    (8, Category::TechLevel),
];

/// Decode a UWP string.
///
/// Fails only when [`validate`] does. Unknown characters decode to an
/// `Unknown` placeholder and unrecognised trailer tokens end up in the
/// remarks.
pub fn parse(input: &str, reference: &ReferenceData) -> Result<ParsedRecord, FormatError> {
    validate(input)?;

    let mut parts = tokens(input);
    let core: Vec<char> = parts.next().unwrap_or_default().chars().collect();
    let trailer_tokens: Vec<&str> = parts.collect();

    let [starport, size, atmosphere, hydrographics, population, government, law_level, tech_level] =
        CORE_POSITIONS.map(|(index, category)| resolve_core(&core, index, category, reference));

    let trailer = classify_trailer(&trailer_tokens, reference);

    Ok(ParsedRecord {
        starport,
        size,
        atmosphere,
        hydrographics,
        population,
        government,
        law_level,
        tech_level,
        bases: Some(trailer.bases).filter(|b| !b.is_empty()),
        travel_zone: trailer.travel_zone,
        trade_codes: Some(trailer.trade_codes).filter(|t| !t.is_empty()),
        remarks: trailer.remarks,
    })
}

fn resolve_core(
    core: &[char],
    index: usize,
    category: Category,
    reference: &ReferenceData,
) -> CodedValue {
    // validate() guarantees at least MIN_CORE_LEN characters
    let code = core.get(index).copied().unwrap_or(SEPARATOR);
    let value = reference.table(category).lookup_char(code);
    if value.is_unknown() {
        debug!("No {} entry for code {:?}", category, code);
    }
    value
}
