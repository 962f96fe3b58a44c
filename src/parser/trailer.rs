//! Classification of the tokens after the core code.
//!
//! The trailer is loosely delimited: bases, travel zone and trade codes
//! share an alphabet, so tokens are classified in passes rather than by
//! position:
//!
//! 1. The first token starting with `(` opens the remarks, which run to
//!    the end of the input.
//! 2. Remaining tokens are scanned right to left. The first single
//!    character travel zone code found becomes the travel zone; two
//!    character trade codes are collected.
//! 3. Anything left over is a base token if every character is a base
//!    code (`N`, `SN`). Otherwise it is appended to the remarks.

use tracing::debug;

use crate::reference::{CodedValue, ReferenceData};

/// Character that opens the free-text remarks
pub const REMARKS_OPEN: char = '(';

/// How a single trailer token was classified
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenClass {
    /// Part of the parenthesised remarks region
    Remarks,
    TravelZone,
    TradeCode,
    /// One or more base codes
    Bases,
    /// Matched nothing; recovered into the remarks
    Unclassified,
}

/// Optional annotations decoded from the trailer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Trailer {
    pub bases: Vec<CodedValue>,
    pub travel_zone: Option<CodedValue>,
    pub trade_codes: Vec<CodedValue>,
    pub remarks: Option<String>,
}

/// Index of the first token that opens the remarks, or `tokens.len()`
pub fn remarks_start(tokens: &[&str]) -> usize {
    tokens
        .iter()
        .position(|token| token.starts_with(REMARKS_OPEN))
        .unwrap_or(tokens.len())
}

/// Classify each token without consuming any of them
pub fn classify_tokens(tokens: &[&str], reference: &ReferenceData) -> Vec<TokenClass> {
    let boundary = remarks_start(tokens);
    let mut classes = vec![TokenClass::Unclassified; tokens.len()];
    for class in &mut classes[boundary..] {
        *class = TokenClass::Remarks;
    }

    let mut zone_found = false;
    for i in (0..boundary).rev() {
        let token = tokens[i];
        let width = token.chars().count();

        if !zone_found && width == 1 && reference.travel_zone.contains(token) {
            classes[i] = TokenClass::TravelZone;
            zone_found = true;
        } else if width == 2 && reference.trade_codes.contains(token) {
            classes[i] = TokenClass::TradeCode;
        }
    }

    for (class, token) in classes[..boundary].iter_mut().zip(tokens) {
        if *class == TokenClass::Unclassified && is_base_token(token, reference) {
            *class = TokenClass::Bases;
        }
    }

    classes
}

fn is_base_token(token: &str, reference: &ReferenceData) -> bool {
    !token.is_empty() && token.chars().all(|c| reference.bases.contains_char(c))
}

/// Decode the trailer tokens into bases, travel zone, trade codes and remarks
pub fn classify_trailer(tokens: &[&str], reference: &ReferenceData) -> Trailer {
    let classes = classify_tokens(tokens, reference);
    let mut trailer = Trailer::default();
    let mut remarks: Vec<&str> = tokens
        .iter()
        .zip(&classes)
        .filter(|(_, class)| **class == TokenClass::Remarks)
        .map(|(token, _)| *token)
        .collect();

    for (token, class) in tokens.iter().zip(&classes) {
        debug!(token = *token, class = ?class, "Classified trailer token");
        match class {
            TokenClass::Remarks => {}
            TokenClass::TravelZone => {
                trailer.travel_zone = Some(reference.travel_zone.lookup(token));
            }
            TokenClass::TradeCode => {
                trailer.trade_codes.push(reference.trade_codes.lookup(token));
            }
            TokenClass::Bases => {
                trailer
                    .bases
                    .extend(token.chars().map(|c| reference.bases.lookup_char(c)));
            }
            TokenClass::Unclassified => {
                debug!("Unrecognised token {:?} moved to remarks", token);
                remarks.push(*token);
            }
        }
    }

    if !remarks.is_empty() {
        trailer.remarks = Some(remarks.join(" "));
    }
    trailer
}
