//! British-English terminology scan
//!
//! Flags American spellings in generated text and suggests the British form.
//! Matching is case-insensitive substring matching, so "programs" and
//! "Colorful" are both reported. Where the British form extends the American
//! one ("programme", "catalogue", "dialogue") the British occurrences are not
//! counted against the text.

use serde::Serialize;

/// American spelling paired with its British replacement
pub const AMERICAN_TO_BRITISH: [(&str, &str); 10] = [
    ("color", "colour"),
    ("center", "centre"),
    ("organization", "organisation"),
    ("analyze", "analyse"),
    ("behavior", "behaviour"),
    ("catalog", "catalogue"),
    ("dialog", "dialogue"),
    ("license", "licence"),
    ("program", "programme"),
    ("standardize", "standardise"),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TerminologyIssue {
    pub american_term: &'static str,
    pub british_term: &'static str,
    pub occurrences: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TerminologyReport {
    pub issues: Vec<TerminologyIssue>,
    pub total_occurrences: usize,
}

impl TerminologyReport {
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Scan text for American spellings
pub fn scan(text: &str) -> TerminologyReport {
    let lowered = text.to_lowercase();

    let issues: Vec<TerminologyIssue> = AMERICAN_TO_BRITISH
        .iter()
        .filter_map(|&(american, british)| {
            let mut occurrences = lowered.matches(american).count();
            if british.contains(american) {
                occurrences -= lowered.matches(british).count();
            }
            (occurrences > 0).then_some(TerminologyIssue {
                american_term: american,
                british_term: british,
                occurrences,
            })
        })
        .collect();

    let total_occurrences = issues.iter().map(|i| i.occurrences).sum();

    TerminologyReport {
        issues,
        total_occurrences,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_text() {
        let report = scan("The programme centre will analyse colour theory.");
        assert!(report.is_clean());
        assert_eq!(report.total_occurrences, 0);
    }

    #[test]
    fn test_counts_are_case_insensitive() {
        let report = scan("Color and color. The Center of the organization.");
        assert_eq!(report.issues.len(), 3);
        assert_eq!(report.issues[0].american_term, "color");
        assert_eq!(report.issues[0].british_term, "colour");
        assert_eq!(report.issues[0].occurrences, 2);
        assert_eq!(report.total_occurrences, 4);
    }

    #[test]
    fn test_substring_matches_are_reported() {
        // "catalogs" contains "catalog", "dialogs" contains "dialog"
        let report = scan("Browse catalogs and dialogs");
        let terms: Vec<_> = report.issues.iter().map(|i| i.american_term).collect();
        assert_eq!(terms, vec!["catalog", "dialog"]);
    }

    #[test]
    fn test_british_extension_not_counted() {
        let report = scan("A programme, a program and a catalogue");
        assert_eq!(report.issues.len(), 1);
        assert_eq!(report.issues[0].american_term, "program");
        assert_eq!(report.issues[0].occurrences, 1);
    }
}
