//! Extracted financial figure models.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Financial statement a figure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatementCategory {
    /// Income statement (profit and loss).
    IncomeStatement,
    /// Balance sheet.
    BalanceSheet,
    /// Cash flow statement.
    CashFlow,
}

impl StatementCategory {
    /// All categories in statement order.
    pub const ALL: [StatementCategory; 3] = [
        StatementCategory::IncomeStatement,
        StatementCategory::BalanceSheet,
        StatementCategory::CashFlow,
    ];
}

impl fmt::Display for StatementCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            StatementCategory::IncomeStatement => "Income Statement",
            StatementCategory::BalanceSheet => "Balance Sheet",
            StatementCategory::CashFlow => "Cash Flow Statement",
        };
        f.write_str(label)
    }
}

/// Fixed vocabulary of financial line items the extractor recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FigureField {
    Revenue,
    GrossProfit,
    OperatingIncome,
    Ebitda,
    NetIncome,
    TotalAssets,
    TotalLiabilities,
    Equity,
    CashAndEquivalents,
    OperatingCashFlow,
    InvestingCashFlow,
    FinancingCashFlow,
    NetChangeInCash,
}

impl FigureField {
    /// All fields in vocabulary (report) order.
    pub const ALL: [FigureField; 13] = [
        FigureField::Revenue,
        FigureField::GrossProfit,
        FigureField::OperatingIncome,
        FigureField::Ebitda,
        FigureField::NetIncome,
        FigureField::TotalAssets,
        FigureField::TotalLiabilities,
        FigureField::Equity,
        FigureField::CashAndEquivalents,
        FigureField::OperatingCashFlow,
        FigureField::InvestingCashFlow,
        FigureField::FinancingCashFlow,
        FigureField::NetChangeInCash,
    ];

    /// The statement this line item belongs to.
    pub fn category(&self) -> StatementCategory {
        match self {
            FigureField::Revenue
            | FigureField::GrossProfit
            | FigureField::OperatingIncome
            | FigureField::Ebitda
            | FigureField::NetIncome => StatementCategory::IncomeStatement,
            FigureField::TotalAssets
            | FigureField::TotalLiabilities
            | FigureField::Equity
            | FigureField::CashAndEquivalents => StatementCategory::BalanceSheet,
            FigureField::OperatingCashFlow
            | FigureField::InvestingCashFlow
            | FigureField::FinancingCashFlow
            | FigureField::NetChangeInCash => StatementCategory::CashFlow,
        }
    }
}

impl fmt::Display for FigureField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FigureField::Revenue => "Revenue",
            FigureField::GrossProfit => "Gross Profit",
            FigureField::OperatingIncome => "Operating Income",
            FigureField::Ebitda => "EBITDA",
            FigureField::NetIncome => "Net Income",
            FigureField::TotalAssets => "Total Assets",
            FigureField::TotalLiabilities => "Total Liabilities",
            FigureField::Equity => "Equity",
            FigureField::CashAndEquivalents => "Cash and Cash Equivalents",
            FigureField::OperatingCashFlow => "Operating Cash Flow",
            FigureField::InvestingCashFlow => "Investing Cash Flow",
            FigureField::FinancingCashFlow => "Financing Cash Flow",
            FigureField::NetChangeInCash => "Net Change in Cash",
        };
        f.write_str(label)
    }
}

/// One financial data point found in one document.
///
/// Created during extraction and immutable thereafter; held only in memory
/// for the duration of a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedFigure {
    /// Statement the figure belongs to.
    pub category: StatementCategory,

    /// Line item label.
    pub field: FigureField,

    /// Attributed 4-digit fiscal year.
    pub year: String,

    /// Extracted value (always strictly positive).
    pub value: Decimal,

    /// Originating document name.
    pub document_name: String,

    /// Human-readable provenance (page estimate, worksheet, ...).
    pub location: String,

    /// Heuristic confidence of the extraction profile.
    pub confidence: f32,
}
