//! Regex pattern tables for financial figure extraction.

use lazy_static::lazy_static;
use regex::Regex;

use crate::models::config::PatternProfile;
use crate::models::figure::FigureField;

/// Numeric tail shared by every label pattern: optional separator, optional
/// currency symbol, comma-separated integer part, at most two decimals.
const AMOUNT_TAIL: &str = r"[\s:]*\$?\s*([\d,]+(?:\.\d{1,2})?)";

/// Patterns recognizing one line item, tried in order.
pub struct FieldPatterns {
    pub field: FigureField,
    pub patterns: Vec<Regex>,
}

fn labeled(field: FigureField, labels: &[&str]) -> FieldPatterns {
    let patterns = labels
        .iter()
        .map(|label| {
            Regex::new(&format!(r"(?i)\b(?:{label}){AMOUNT_TAIL}"))
                .unwrap_or_else(|e| panic!("invalid pattern for {field}: {e}"))
        })
        .collect();
    FieldPatterns { field, patterns }
}

fn simple_table() -> Vec<FieldPatterns> {
    vec![
        labeled(FigureField::Revenue, &[r"(?:total\s+)?revenues?"]),
        labeled(FigureField::Ebitda, &[r"ebitda"]),
        labeled(FigureField::NetIncome, &[r"net\s+income"]),
        labeled(FigureField::TotalAssets, &[r"total\s+assets"]),
        labeled(FigureField::TotalLiabilities, &[r"total\s+liabilities"]),
        labeled(FigureField::Equity, &[r"(?:total\s+)?equity"]),
        labeled(
            FigureField::OperatingCashFlow,
            &[
                r"operating\s+cash\s+flow",
                r"cash\s+(?:flow\s+)?from\s+operating\s+activities",
            ],
        ),
        labeled(
            FigureField::InvestingCashFlow,
            &[
                r"investing\s+cash\s+flow",
                r"cash\s+(?:flow\s+)?from\s+investing\s+activities",
            ],
        ),
        labeled(
            FigureField::FinancingCashFlow,
            &[
                r"financing\s+cash\s+flow",
                r"cash\s+(?:flow\s+)?from\s+financing\s+activities",
            ],
        ),
        labeled(
            FigureField::NetChangeInCash,
            &[r"net\s+(?:change|increase|decrease)\s+in\s+cash"],
        ),
    ]
}

fn enhanced_table() -> Vec<FieldPatterns> {
    vec![
        labeled(
            FigureField::Revenue,
            &[r"(?:total\s+|net\s+)?revenues?", r"net\s+sales"],
        ),
        labeled(FigureField::GrossProfit, &[r"gross\s+profit"]),
        labeled(
            FigureField::OperatingIncome,
            &[r"operating\s+income", r"income\s+from\s+operations"],
        ),
        labeled(FigureField::Ebitda, &[r"(?:adjusted\s+)?ebitda"]),
        labeled(
            FigureField::NetIncome,
            &[r"net\s+income", r"net\s+profit", r"net\s+earnings"],
        ),
        labeled(FigureField::TotalAssets, &[r"total\s+assets"]),
        labeled(FigureField::TotalLiabilities, &[r"total\s+liabilities"]),
        labeled(
            FigureField::Equity,
            &[r"(?:total\s+|shareholders'?\s+|stockholders'?\s+)?equity"],
        ),
        labeled(
            FigureField::CashAndEquivalents,
            &[r"cash\s+and\s+cash\s+equivalents"],
        ),
        labeled(
            FigureField::OperatingCashFlow,
            &[
                r"operating\s+cash\s+flow",
                r"(?:net\s+)?cash\s+(?:flow\s+from|provided\s+by|used\s+in)\s+operating\s+activities",
            ],
        ),
        labeled(
            FigureField::InvestingCashFlow,
            &[
                r"investing\s+cash\s+flow",
                r"(?:net\s+)?cash\s+(?:flow\s+from|provided\s+by|used\s+in)\s+investing\s+activities",
            ],
        ),
        labeled(
            FigureField::FinancingCashFlow,
            &[
                r"financing\s+cash\s+flow",
                r"(?:net\s+)?cash\s+(?:flow\s+from|provided\s+by|used\s+in)\s+financing\s+activities",
            ],
        ),
        labeled(
            FigureField::NetChangeInCash,
            &[r"net\s+(?:change|increase|decrease)\s+in\s+cash(?:\s+and\s+cash\s+equivalents)?"],
        ),
    ]
}

lazy_static! {
    /// Lean vocabulary used by the simple profile.
    pub static ref SIMPLE_PATTERNS: Vec<FieldPatterns> = simple_table();

    /// Richer vocabulary used by the enhanced profile.
    pub static ref ENHANCED_PATTERNS: Vec<FieldPatterns> = enhanced_table();

    /// Candidate fiscal year tokens.
    pub static ref YEAR_TOKEN: Regex = Regex::new(r"\b(20\d{2})\b").unwrap();
}

/// Pattern table for the given profile.
pub fn patterns_for(profile: PatternProfile) -> &'static [FieldPatterns] {
    match profile {
        PatternProfile::Simple => &SIMPLE_PATTERNS,
        PatternProfile::Enhanced => &ENHANCED_PATTERNS,
    }
}
