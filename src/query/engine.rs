use std::cmp::Ordering;

use crate::models::{
    HistoryFilter, HistorySortKey, MedicalHistoryEntry, Prescription, PrescriptionFilter,
    PrescriptionSortKey,
};

use super::types::Query;

/// A record variant the engine can search, filter and sort.
pub trait Queryable: Clone {
    type SortKey: Copy;
    type Filter: Copy;

    /// `needle` is already lower-cased and non-empty.
    fn matches_search(&self, needle: &str) -> bool;

    fn passes_filter(&self, filter: Self::Filter) -> bool;

    /// Ordering under `key`; `Less` means `self` is listed first.
    fn compare(&self, other: &Self, key: Self::SortKey) -> Ordering;
}

fn contains_folded(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

impl Queryable for MedicalHistoryEntry {
    type SortKey = HistorySortKey;
    type Filter = HistoryFilter;

    fn matches_search(&self, needle: &str) -> bool {
        contains_folded(&self.diagnosis, needle) || contains_folded(&self.notes, needle)
    }

    fn passes_filter(&self, filter: HistoryFilter) -> bool {
        match filter.severity() {
            None => true,
            Some(severity) => self.severity == severity,
        }
    }

    fn compare(&self, other: &Self, key: HistorySortKey) -> Ordering {
        match key {
            HistorySortKey::Date => other.date.cmp(&self.date),
            HistorySortKey::Severity => other.severity.rank().cmp(&self.severity.rank()),
        }
    }
}

impl Queryable for Prescription {
    type SortKey = PrescriptionSortKey;
    type Filter = PrescriptionFilter;

    fn matches_search(&self, needle: &str) -> bool {
        self.medicines
            .iter()
            .any(|medicine| contains_folded(&medicine.name, needle))
    }

    fn passes_filter(&self, filter: PrescriptionFilter) -> bool {
        match filter {
            PrescriptionFilter::All => true,
            PrescriptionFilter::Active => self.is_active,
            PrescriptionFilter::Inactive => !self.is_active,
        }
    }

    fn compare(&self, other: &Self, key: PrescriptionSortKey) -> Ordering {
        match key {
            PrescriptionSortKey::Date => other.date.cmp(&self.date),
            // true > false, so reversing puts active first
            PrescriptionSortKey::Status => other.is_active.cmp(&self.is_active),
        }
    }
}

/// Filter `collection` by search term and filter, then stable-sort by the
/// query's key. The input is left untouched.
pub fn run_query<R: Queryable>(collection: &[R], query: &Query<R::SortKey, R::Filter>) -> Vec<R> {
    let needle = query.search_term.to_lowercase();

    let mut results: Vec<R> = collection
        .iter()
        .filter(|record| needle.is_empty() || record.matches_search(&needle))
        .filter(|record| record.passes_filter(query.filter))
        .cloned()
        .collect();

    results.sort_by(|a, b| a.compare(b, query.sort_key));

    tracing::trace!(
        total = collection.len(),
        matched = results.len(),
        "record query evaluated"
    );
    results
}
