/// Self-agreement between shown digits and typed labels
///
/// This is a sanity metric over the label store: the share of rows whose typed
/// label textually equals the stored ground-truth value. It says nothing about
/// classifier accuracy or agreement between different labelers.

use super::data::LabelEntry;

/// Fraction of entries where `label == image`, or `None` when there are none
pub fn self_agreement(entries: &[LabelEntry]) -> Option<f64> {
    if entries.is_empty() {
        return None;
    }

    let matches = entries.iter().filter(|e| e.agrees()).count();
    Some(matches as f64 / entries.len() as f64)
}

/// Render a score as a percentage with one decimal, e.g. 0.857 -> "85.7%"
pub fn format_percent(score: f64) -> String {
    format!("{:.1}%", score * 100.0)
}

/// Summary shown next to the entries table
#[derive(Debug, Clone, PartialEq)]
pub struct AgreementReport {
    pub total: usize,
    pub matches: usize,
    pub score: f64,
}

impl AgreementReport {
    /// Build a report, or `None` for an empty store
    pub fn from_entries(entries: &[LabelEntry]) -> Option<Self> {
        let score = self_agreement(entries)?;
        Some(Self {
            total: entries.len(),
            matches: entries.iter().filter(|e| e.agrees()).count(),
            score,
        })
    }

    pub fn percent(&self) -> String {
        format_percent(self.score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_half_agreement() {
        let entries = vec![LabelEntry::new("3", "3"), LabelEntry::new("7", "1")];
        let score = self_agreement(&entries).unwrap();
        assert_eq!(score, 0.5);
        assert_eq!(format_percent(score), "50.0%");
    }

    #[test]
    fn test_empty_is_undefined() {
        assert_eq!(self_agreement(&[]), None);
        assert_eq!(AgreementReport::from_entries(&[]), None);
    }

    #[test]
    fn test_format_rounds_to_one_decimal() {
        assert_eq!(format_percent(0.857), "85.7%");
        assert_eq!(format_percent(1.0), "100.0%");
        assert_eq!(format_percent(0.0), "0.0%");
    }

    #[test]
    fn test_comparison_is_textual() {
        // " 3" and "3.0" are not the digit 3 as far as the store is concerned
        let entries = vec![
            LabelEntry::new("3", " 3"),
            LabelEntry::new("3", "3.0"),
            LabelEntry::new("3", "3"),
            LabelEntry::new("0", ""),
        ];
        let report = AgreementReport::from_entries(&entries).unwrap();
        assert_eq!(report.total, 4);
        assert_eq!(report.matches, 1);
        assert_eq!(report.percent(), "25.0%");
    }
}
