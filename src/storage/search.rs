//! Contact matching and display ordering.
//!
//! Both store implementations run their records through [`filter_and_sort`]
//! so that search semantics do not depend on the backend.
//!
//! Matching is a case-insensitive fuzzy match (skim algorithm) of the query
//! against the first name, the last name and the combined "first last" key.
//! A record is kept when any key matches. Ordering is by last name, then
//! creation time, then id.

use super::models::ContactRecord;
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

/// Returns `true` when `query` should not filter anything.
#[must_use]
pub fn is_blank(query: Option<&str>) -> bool {
    query.map_or(true, |q| q.trim().is_empty())
}

/// Checks whether a record matches the query under the fuzzy matcher.
fn matches(matcher: &SkimMatcherV2, record: &ContactRecord, query: &str) -> bool {
    let first = record.first.as_deref().unwrap_or_default().to_lowercase();
    let last = record.last.as_deref().unwrap_or_default().to_lowercase();
    let full = format!("{first} {last}");

    [first.as_str(), last.as_str(), full.trim()]
        .iter()
        .filter(|key| !key.is_empty())
        .any(|key| matcher.fuzzy_match(key, query).is_some())
}

/// Sorts records in display order: last name, creation time, id.
///
/// Records without a last name sort as if it were empty, so they come first.
pub fn sort_for_display(records: &mut [ContactRecord]) {
    records.sort_by(|a, b| {
        let last_a = a.last.as_deref().unwrap_or_default().to_lowercase();
        let last_b = b.last.as_deref().unwrap_or_default().to_lowercase();
        last_a
            .cmp(&last_b)
            .then(a.created_at.cmp(&b.created_at))
            .then_with(|| a.id.cmp(&b.id))
    });
}

/// Filters records by `query` and returns them in display order.
///
/// # Examples
///
/// ```
/// use rolodex::storage::{search::filter_and_sort, ContactRecord};
///
/// let mut ada = ContactRecord::new_empty();
/// ada.first = Some("Ada".into());
/// ada.last = Some("Lovelace".into());
/// let mut grace = ContactRecord::new_empty();
/// grace.first = Some("Grace".into());
/// grace.last = Some("Hopper".into());
///
/// let found = filter_and_sort(vec![ada, grace], Some("lov"));
/// assert_eq!(found.len(), 1);
/// assert_eq!(found[0].first.as_deref(), Some("Ada"));
/// ```
#[must_use]
pub fn filter_and_sort(records: Vec<ContactRecord>, query: Option<&str>) -> Vec<ContactRecord> {
    let _span =
        tracing::debug_span!("filter_contacts", total = records.len(), query = ?query).entered();

    let mut kept: Vec<ContactRecord> = if is_blank(query) {
        records
    } else {
        let needle = query.unwrap_or_default().trim().to_lowercase();
        let matcher = SkimMatcherV2::default();
        records
            .into_iter()
            .filter(|record| matches(&matcher, record, &needle))
            .collect()
    };

    sort_for_display(&mut kept);

    tracing::debug!(matched = kept.len(), "contacts filtered");
    kept
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, first: Option<&str>, last: Option<&str>, created_at: i64) -> ContactRecord {
        ContactRecord {
            id: id.to_string(),
            first: first.map(String::from),
            last: last.map(String::from),
            favorite: false,
            created_at,
        }
    }

    #[test]
    fn blank_query_keeps_everything() {
        let records = vec![
            record("a", Some("Ada"), Some("Lovelace"), 1),
            record("b", None, None, 2),
        ];
        assert_eq!(filter_and_sort(records.clone(), None).len(), 2);
        assert_eq!(filter_and_sort(records.clone(), Some("")).len(), 2);
        assert_eq!(filter_and_sort(records, Some("   ")).len(), 2);
    }

    #[test]
    fn query_is_case_insensitive() {
        let records = vec![
            record("a", Some("Ada"), Some("Lovelace"), 1),
            record("b", Some("Grace"), Some("Hopper"), 2),
        ];
        let found = filter_and_sort(records, Some("HOP"));
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "b");
    }

    #[test]
    fn query_can_span_first_and_last_name() {
        let records = vec![record("a", Some("Ada"), Some("Lovelace"), 1)];
        assert_eq!(filter_and_sort(records, Some("ada love")).len(), 1);
    }

    #[test]
    fn unnamed_contacts_never_match_a_query() {
        let records = vec![record("a", None, None, 1)];
        assert!(filter_and_sort(records, Some("x")).is_empty());
    }

    #[test]
    fn ordering_is_by_last_name_then_creation() {
        let records = vec![
            record("late", Some("Zed"), Some("Beta"), 20),
            record("early", Some("Amy"), Some("Beta"), 10),
            record("alpha", Some("Bob"), Some("Alpha"), 30),
            record("blank", None, None, 40),
        ];
        let ids: Vec<String> = filter_and_sort(records, None)
            .into_iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(ids, vec!["blank", "alpha", "early", "late"]);
    }
}
