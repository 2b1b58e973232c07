//! Case-insensitive substring filtering over stored records.

use crate::models::SummaryRecord;

/// Filter `records` by a case-insensitive substring query.
///
/// An absent or empty query returns the input unchanged. Otherwise a record
/// survives when its title, summary text, or any tag contains the lowercased
/// query. Input order is preserved, so results stay newest-first.
pub fn filter_records(records: Vec<SummaryRecord>, query: Option<&str>) -> Vec<SummaryRecord> {
    let q = match query {
        Some(q) if !q.is_empty() => q.to_lowercase(),
        _ => return records,
    };
    records
        .into_iter()
        .filter(|record| matches_query(record, &q))
        .collect()
}

fn matches_query(record: &SummaryRecord, q: &str) -> bool {
    record.title.to_lowercase().contains(q)
        || record.summary.to_lowercase().contains(q)
        || record.tags.iter().any(|tag| tag.to_lowercase().contains(q))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn record(title: &str, summary: &str, tags: &[&str]) -> SummaryRecord {
        SummaryRecord {
            id: uuid::Uuid::new_v4().to_string(),
            title: title.to_string(),
            url: None,
            summary: summary.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            created_at: Utc::now(),
        }
    }

    fn sample() -> Vec<SummaryRecord> {
        vec![
            record("Rust Memory Model", "Covers ownership.", &["rust", "memory"]),
            record("", "Kubernetes deployment notes.", &["ops"]),
            record("Cooking", "A soup recipe.", &["food", "Rustic Bread"]),
        ]
    }

    #[test]
    fn empty_query_is_identity() {
        let records = sample();
        assert_eq!(filter_records(records.clone(), None), records);
        assert_eq!(filter_records(records.clone(), Some("")), records);
    }

    #[test]
    fn matches_title_summary_and_tags_case_insensitively() {
        let results = filter_records(sample(), Some("RUST"));
        // title, and the "Rustic Bread" tag
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].title, "Rust Memory Model");
        assert_eq!(results[1].title, "Cooking");

        let results = filter_records(sample(), Some("kubernetes"));
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].summary, "Kubernetes deployment notes.");

        let results = filter_records(sample(), Some("ops"));
        assert_eq!(results.len(), 1);
    }

    #[test]
    fn no_false_positives() {
        let results = filter_records(sample(), Some("zebra"));
        assert!(results.is_empty());
    }

    #[test]
    fn input_order_is_preserved() {
        let records = sample();
        let expected: Vec<String> = records.iter().map(|r| r.id.clone()).collect();
        let results = filter_records(records, Some("o"));
        let got: Vec<String> = results.iter().map(|r| r.id.clone()).collect();
        // every sample record contains an "o" somewhere
        assert_eq!(got, expected);
    }
}
