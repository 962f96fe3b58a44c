//! End-to-end tests of validation and parsing through the public API.
//!
//! Reference data is written to a temporary JSON file and loaded back the
//! same way the command line loads a `--reference` file, so these tests
//! cover the file format as well as the decoding rules.

use once_cell::sync::Lazy;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tempfile::NamedTempFile;

use uwp_decoder::reference::{
    builtin, load_reference_file, resolve_reference_with, Category, ReferenceSource,
    UNKNOWN_DESCRIPTION,
};
use uwp_decoder::{parse, validate, validation_message, ParsedRecord, ReferenceData};

// =============================================================================
// Test Configuration
// =============================================================================

/// Random seed for reproducible generated inputs
const RANDOM_SEED: u64 = 42;

/// Number of generated inputs per property
const CASES: usize = 500;

const FORMAT_MESSAGE: &str = "UWP string format is incorrect. Expected format like 'A865AB7-C'.";

// =============================================================================
// Shared Reference Data
// =============================================================================

/// Built-in tables, round-tripped through a reference file
static REFERENCE: Lazy<ReferenceData> = Lazy::new(|| {
    let file = NamedTempFile::new().expect("Failed to create temp file");
    let json = serde_json::to_string_pretty(builtin()).expect("Failed to serialize tables");
    std::fs::write(file.path(), json).expect("Failed to write reference file");
    load_reference_file(file.path()).expect("Failed to load reference file")
});

fn parse_ok(input: &str) -> ParsedRecord {
    parse(input, &REFERENCE).unwrap_or_else(|e| panic!("{:?} failed to parse: {}", input, e))
}

fn codes(values: &Option<Vec<uwp_decoder::CodedValue>>) -> Vec<&str> {
    values
        .iter()
        .flatten()
        .map(|v| v.code.as_str())
        .collect()
}

// =============================================================================
// Generators
// =============================================================================

const CORE_ALPHABET: &[char] = &[
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H',
    'X', 'Y', 'Z', '?', '*',
];

fn random_core(rng: &mut StdRng) -> String {
    (0..9)
        .map(|i| {
            if i == 7 {
                '-'
            } else {
                *CORE_ALPHABET.choose(rng).unwrap()
            }
        })
        .collect()
}

fn random_trailer(rng: &mut StdRng) -> String {
    const TOKENS: &[&str] = &[
        "N", "S", "SN", "NW", "A", "R", "Ag", "In", "Hi", "Po", "Ri", "Xx", "Q", "NQ", "(Capital)",
        "(Major", "Trade", "Hub)",
    ];
    let count = rng.gen_range(0..6);
    (0..count)
        .map(|_| *TOKENS.choose(rng).unwrap())
        .collect::<Vec<_>>()
        .join(" ")
}

// =============================================================================
// Documented Scenarios
// =============================================================================

#[test]
fn test_standard_uwp() {
    let record = parse_ok("A865AB7-C");
    assert_eq!(record.starport.code, "A");
    assert_eq!(record.tech_level.code, "C");
    assert!(record.bases.is_none());
    assert!(record.travel_zone.is_none());
    assert!(record.trade_codes.is_none());
    assert!(record.remarks.is_none());
}

#[test]
fn test_bases_and_travel_zone() {
    let record = parse_ok("B777777-7 N A");
    assert_eq!(record.starport.code, "B");
    assert_eq!(codes(&record.bases), vec!["N"]);
    assert_eq!(record.travel_zone.unwrap().code, "A");
}

#[test]
fn test_multiple_bases() {
    let record = parse_ok("C56876A-A SN R");
    assert_eq!(record.starport.code, "C");
    assert_eq!(codes(&record.bases), vec!["S", "N"]);
    assert_eq!(record.travel_zone.unwrap().code, "R");
}

#[test]
fn test_only_bases() {
    let record = parse_ok("E410321-4 S");
    assert_eq!(record.starport.code, "E");
    assert_eq!(codes(&record.bases), vec!["S"]);
    assert!(record.travel_zone.is_none());
}

#[test]
fn test_only_travel_zone() {
    let record = parse_ok("F000000-0 R");
    assert_eq!(record.starport.code, "F");
    assert_eq!(record.travel_zone.unwrap().code, "R");
    assert!(record.bases.is_none());
}

#[test]
fn test_trade_codes_and_remarks() {
    let record = parse_ok("C467345-7 Ag In Po (Major Trade Hub)");
    assert_eq!(codes(&record.trade_codes), vec!["Ag", "In", "Po"]);
    assert!(record.remarks.unwrap().contains("Major Trade Hub"));
}

#[test]
fn test_everything() {
    let record = parse_ok("B777777-7 N A Ag In (A bustling world)");
    assert_eq!(codes(&record.bases), vec!["N"]);
    assert_eq!(record.travel_zone.unwrap().code, "A");
    assert_eq!(codes(&record.trade_codes), vec!["Ag", "In"]);
    assert_eq!(record.remarks.as_deref(), Some("(A bustling world)"));
}

#[test]
fn test_multiple_trade_codes_without_bases_or_remarks() {
    let record = parse_ok("A888888-A Hi He Ri");
    assert_eq!(codes(&record.trade_codes), vec!["Hi", "He", "Ri"]);
    assert!(record.bases.is_none());
    assert!(record.remarks.is_none());
}

#[test]
fn test_json_shape() {
    let record = parse_ok("B777777-7 N A Ag In (A bustling world)");
    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(json["starport"]["code"], "B");
    assert_eq!(json["lawLevel"]["code"], "7");
    assert_eq!(json["bases"][0]["code"], "N");
    assert_eq!(json["travelZone"]["code"], "A");
    assert_eq!(json["tradeCodes"][1]["code"], "In");
    assert_eq!(json["remarks"], "(A bustling world)");

    let back: ParsedRecord = serde_json::from_value(json).unwrap();
    assert_eq!(back, record);
}

#[test]
fn test_custom_reference_data() {
    let file = NamedTempFile::new().unwrap();
    let mut data = builtin().clone();
    data.travel_zone = uwp_decoder::ReferenceTable::from_pairs(&[("G", "Green")]);
    std::fs::write(file.path(), serde_json::to_string(&data).unwrap()).unwrap();

    let loaded = resolve_reference_with(Some(file.path()), None).unwrap();
    assert_eq!(
        loaded.source(),
        &ReferenceSource::File(file.path().to_path_buf())
    );

    let record = parse("A865AB7-C N G", loaded.data()).unwrap();
    assert_eq!(record.travel_zone.unwrap().description, "Green");

    // R is no longer a zone, nor a base
    let record = parse("A865AB7-C R", loaded.data()).unwrap();
    assert!(record.travel_zone.is_none());
    assert_eq!(record.remarks.as_deref(), Some("R"));
}

// =============================================================================
// Properties
// =============================================================================

#[test]
fn test_short_or_unseparated_core_rejected() {
    let mut rng = StdRng::seed_from_u64(RANDOM_SEED);
    for _ in 0..CASES {
        let mut core = random_core(&mut rng);
        if rng.gen_bool(0.5) {
            core.truncate(rng.gen_range(1..9));
        } else {
            let replacement = *['+', '_', 'A', '0'].choose(&mut rng).unwrap();
            core.replace_range(7..8, &replacement.to_string());
        }
        let input = format!("{} {}", core, random_trailer(&mut rng));

        assert!(validate(&input).is_err(), "{:?} accepted", input);
        assert_eq!(validation_message(&input).as_deref(), Some(FORMAT_MESSAGE));
        assert!(parse(&input, &REFERENCE).is_err());
    }
}

#[test]
fn test_valid_core_always_yields_mandatory_fields() {
    let mut rng = StdRng::seed_from_u64(RANDOM_SEED);
    for _ in 0..CASES {
        let core = random_core(&mut rng);
        let input = format!("{} {}", core, random_trailer(&mut rng));
        let record = parse_ok(&input);

        let positions: Vec<char> = core.chars().filter(|c| *c != '-').collect();
        for (value, expected) in record.mandatory().iter().zip(&positions) {
            assert!(!value.code.is_empty());
            assert_eq!(value.code, expected.to_string());
        }
    }
}

#[test]
fn test_lookup_matches_table_or_unknown() {
    let mut rng = StdRng::seed_from_u64(RANDOM_SEED);
    for _ in 0..CASES {
        let core = random_core(&mut rng);
        let record = parse_ok(&core);
        let chars: Vec<char> = core.chars().collect();

        let checks = [
            (Category::Starport, chars[0], &record.starport),
            (Category::Size, chars[1], &record.size),
            (Category::Atmosphere, chars[2], &record.atmosphere),
            (Category::Hydrographics, chars[3], &record.hydrographics),
            (Category::Population, chars[4], &record.population),
            (Category::Government, chars[5], &record.government),
            (Category::LawLevel, chars[6], &record.law_level),
            (Category::TechLevel, chars[8], &record.tech_level),
        ];
        for (category, code, value) in checks {
            let table = REFERENCE.table(category);
            match table.find(&code.to_string()) {
                Some(entry) => assert_eq!(&entry.description, &value.description),
                None => assert_eq!(value.description, UNKNOWN_DESCRIPTION),
            }
        }
    }
}

#[test]
fn test_parsing_is_idempotent() {
    let mut rng = StdRng::seed_from_u64(RANDOM_SEED);
    for _ in 0..CASES {
        let input = format!("{} {}", random_core(&mut rng), random_trailer(&mut rng));
        assert_eq!(parse_ok(&input), parse_ok(&input));
    }
}

#[test]
fn test_no_trailer_token_is_lost() {
    let mut rng = StdRng::seed_from_u64(RANDOM_SEED);
    for _ in 0..CASES {
        let trailer = random_trailer(&mut rng);
        let record = parse_ok(&format!("{} {}", random_core(&mut rng), trailer));

        let base_chars: usize = codes(&record.bases).len();
        let zone_chars = record.travel_zone.as_ref().map_or(0, |_| 1);
        let trade_chars = codes(&record.trade_codes).len() * 2;
        let remark_chars: usize = record
            .remarks
            .as_deref()
            .map_or(0, |r| r.split_whitespace().map(|t| t.chars().count()).sum());
        let trailer_chars: usize = trailer.split_whitespace().map(|t| t.chars().count()).sum();

        assert_eq!(
            base_chars + zone_chars + trade_chars + remark_chars,
            trailer_chars,
            "characters lost from {:?}",
            trailer
        );
    }
}
