// SPDX-FileCopyrightText: 2026 Pictor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Read-side evaluation statistics over generation records.
//!
//! Pure computation over a listing as returned by the record store; no
//! caching and no storage access of its own. A record participates in
//! an average iff it has a score.

use std::collections::HashMap;

use pictor_core::{GenerationRecord, Style};

/// Quality statistics computed from one listing.
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluationReport {
    /// Number of records in the listing.
    pub total: usize,
    /// Number of records carrying a score.
    pub evaluated: usize,
    /// Mean score over evaluated records, if any.
    pub overall: Option<f64>,
    /// Mean score per style; styles with no evaluated records are absent.
    pub by_style: HashMap<Style, f64>,
}

/// Mean score over evaluated records. `None` when nothing is evaluated.
pub fn overall_average(records: &[GenerationRecord]) -> Option<f64> {
    let scores: Vec<i64> = records.iter().filter_map(|r| r.score).collect();
    if scores.is_empty() {
        return None;
    }
    Some(scores.iter().sum::<i64>() as f64 / scores.len() as f64)
}

/// Mean score per style over evaluated records.
///
/// A style with no evaluated records is absent from the map, not present
/// with zero.
pub fn average_by_style(records: &[GenerationRecord]) -> HashMap<Style, f64> {
    let mut sums: HashMap<Style, (i64, u32)> = HashMap::new();
    for record in records {
        if let Some(score) = record.score {
            let entry = sums.entry(record.style).or_insert((0, 0));
            entry.0 += score;
            entry.1 += 1;
        }
    }
    sums.into_iter()
        .map(|(style, (sum, count))| (style, sum as f64 / f64::from(count)))
        .collect()
}

/// Builds the full report for a listing.
pub fn build_report(records: &[GenerationRecord]) -> EvaluationReport {
    EvaluationReport {
        total: records.len(),
        evaluated: records.iter().filter(|r| r.is_evaluated()).count(),
        overall: overall_average(records),
        by_style: average_by_style(records),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: i64, style: Style, score: Option<i64>) -> GenerationRecord {
        GenerationRecord {
            id,
            prompt: "a prompt".to_string(),
            style,
            filename: format!("image_{id}.png"),
            created_at: "2026-01-01T10:00:00.000Z".to_string(),
            score,
            feedback: None,
        }
    }

    #[test]
    fn averages_over_a_mixed_listing() {
        let records = [
            record(1, Style::Realistic, Some(6)),
            record(2, Style::Realistic, Some(8)),
            record(3, Style::Cartoon, Some(10)),
        ];

        // overall: (6 + 8 + 10) / 3 = 8.0
        let overall = overall_average(&records).unwrap();
        assert!((overall - 8.0).abs() < f64::EPSILON, "got {overall}");

        let by_style = average_by_style(&records);
        assert_eq!(by_style.len(), 2);
        assert!((by_style[&Style::Realistic] - 7.0).abs() < f64::EPSILON);
        assert!((by_style[&Style::Cartoon] - 10.0).abs() < f64::EPSILON);
        assert!(!by_style.contains_key(&Style::Cyberpunk));
    }

    #[test]
    fn no_evaluated_records_means_no_averages() {
        let records = [
            record(1, Style::Realistic, None),
            record(2, Style::Cartoon, None),
        ];
        assert!(overall_average(&records).is_none());
        assert!(average_by_style(&records).is_empty());
    }

    #[test]
    fn an_empty_listing_has_no_averages() {
        assert!(overall_average(&[]).is_none());
        assert!(average_by_style(&[]).is_empty());
    }

    #[test]
    fn unevaluated_records_do_not_dilute_the_averages() {
        let records = [
            record(1, Style::Realistic, Some(6)),
            record(2, Style::Realistic, None),
        ];

        let overall = overall_average(&records).unwrap();
        assert!((overall - 6.0).abs() < f64::EPSILON, "got {overall}");
        let by_style = average_by_style(&records);
        assert!((by_style[&Style::Realistic] - 6.0).abs() < f64::EPSILON);
    }

    #[test]
    fn report_carries_counts_alongside_averages() {
        let records = [
            record(1, Style::Realistic, Some(6)),
            record(2, Style::Realistic, Some(8)),
            record(3, Style::Cartoon, Some(10)),
            record(4, Style::Cyberpunk, None),
        ];

        let report = build_report(&records);
        assert_eq!(report.total, 4);
        assert_eq!(report.evaluated, 3);
        assert!((report.overall.unwrap() - 8.0).abs() < f64::EPSILON);
        assert_eq!(report.by_style.len(), 2);
    }
}
