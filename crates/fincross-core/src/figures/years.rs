//! Fiscal year attribution for extracted figures.
//!
//! Attribution is a best-effort textual proximity heuristic: a matched value
//! is assigned the candidate year whose nearest occurrence is closest to the
//! match offset, within a maximum character distance.

use chrono::{Datelike, Utc};

use super::patterns::YEAR_TOKEN;

/// Index of candidate fiscal years found in one document's text.
#[derive(Debug)]
pub struct YearIndex {
    /// Distinct years in order of first appearance.
    candidates: Vec<String>,
    /// Ascending occurrence offsets, parallel to `candidates`. Empty for
    /// the defaulted candidates of a document with no year tokens.
    occurrences: Vec<Vec<usize>>,
}

impl YearIndex {
    /// Scan the text for 4-digit year tokens. A document with none defaults
    /// to the current calendar year and the prior year.
    pub fn build(text: &str) -> Self {
        let mut candidates: Vec<String> = Vec::new();
        let mut occurrences: Vec<Vec<usize>> = Vec::new();

        for m in YEAR_TOKEN.find_iter(text) {
            match candidates.iter().position(|c| c == m.as_str()) {
                Some(i) => occurrences[i].push(m.start()),
                None => {
                    candidates.push(m.as_str().to_string());
                    occurrences.push(vec![m.start()]);
                }
            }
        }

        if candidates.is_empty() {
            let current = Utc::now().year();
            candidates = vec![current.to_string(), (current - 1).to_string()];
            occurrences = vec![Vec::new(), Vec::new()];
        }

        Self {
            candidates,
            occurrences,
        }
    }

    /// Candidate years in order of first appearance.
    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    /// Attribute a fiscal year to a match at `offset`.
    ///
    /// Chooses the candidate whose nearest occurrence is closest to the
    /// offset, provided that distance is within `max_distance`; ties keep
    /// the earlier-appearing candidate. Falls back to the first-appearing
    /// candidate when no occurrence is in range.
    pub fn attribute(&self, offset: usize, max_distance: usize) -> &str {
        let mut best: Option<(usize, usize)> = None;

        for (i, offsets) in self.occurrences.iter().enumerate() {
            if let Some(distance) = nearest_distance(offsets, offset) {
                if distance <= max_distance && best.is_none_or(|(_, d)| distance < d) {
                    best = Some((i, distance));
                }
            }
        }

        let index = best.map(|(i, _)| i).unwrap_or(0);
        &self.candidates[index]
    }
}

/// Distance from `offset` to the nearest element of a sorted offset list.
fn nearest_distance(offsets: &[usize], offset: usize) -> Option<usize> {
    if offsets.is_empty() {
        return None;
    }

    let split = offsets.partition_point(|&o| o <= offset);
    let before = split.checked_sub(1).map(|i| offset - offsets[i]);
    let after = offsets.get(split).map(|&o| o - offset);

    match (before, after) {
        (Some(b), Some(a)) => Some(b.min(a)),
        (Some(b), None) => Some(b),
        (None, Some(a)) => Some(a),
        (None, None) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_year_within_range_is_chosen() {
        let text = "Fiscal year 2023 results. Revenue: $1,000,000";
        let index = YearIndex::build(text);
        let offset = text.find("1,000,000").unwrap();
        assert_eq!(index.attribute(offset, 300), "2023");
    }

    #[test]
    fn test_year_after_the_match_also_counts() {
        let text = "Revenue: $1,000,000 (2024)";
        let index = YearIndex::build(text);
        let offset = text.find("1,000,000").unwrap();
        assert_eq!(index.attribute(offset, 300), "2024");
    }

    #[test]
    fn test_nearest_year_wins() {
        let text = format!("2022 {} 2023 Revenue: 500,000", "x".repeat(50));
        let index = YearIndex::build(&text);
        let offset = text.find("500,000").unwrap();
        assert_eq!(index.attribute(offset, 300), "2023");
    }

    #[test]
    fn test_out_of_range_falls_back_to_first_candidate() {
        let text = format!("2021 then 2022 {} Net Income: 42,000", "x".repeat(400));
        let index = YearIndex::build(&text);
        let offset = text.find("42,000").unwrap();
        assert_eq!(index.attribute(offset, 300), "2021");
    }

    #[test]
    fn test_no_year_tokens_default_to_calendar_years() {
        let index = YearIndex::build("Revenue: 1,000");
        let current = Utc::now().year();
        assert_eq!(
            index.candidates(),
            &[current.to_string(), (current - 1).to_string()]
        );
        // No occurrences in the text, so attribution falls back to the
        // first default.
        assert_eq!(index.attribute(0, 300), current.to_string());
    }

    #[test]
    fn test_candidates_keep_first_appearance_order() {
        let index = YearIndex::build("2025 before 2023, 2025 again");
        assert_eq!(index.candidates(), &["2025".to_string(), "2023".to_string()]);
    }
}
