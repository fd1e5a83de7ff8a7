//! Property tests for `run_query` over arbitrary collections and queries.

use std::collections::HashMap;

use chrono::NaiveDate;
use proptest::prelude::*;
use uuid::Uuid;

use super::{run_query, HistoryQuery, PrescriptionQuery};
use crate::models::{
    HistoryFilter, HistorySortKey, MedicalHistoryEntry, Medicine, Prescription,
    PrescriptionFilter, PrescriptionSortKey, Severity,
};

// Small alphabets so searches hit, and a narrow date range so ties are common.
fn text() -> impl Strategy<Value = String> {
    "[aAbBcC ]{0,6}"
}

fn date() -> impl Strategy<Value = NaiveDate> {
    (0i64..20).prop_map(|offset| {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap() + chrono::Duration::days(offset)
    })
}

fn severity() -> impl Strategy<Value = Severity> {
    prop::sample::select(vec![Severity::Low, Severity::Medium, Severity::High])
}

fn history_entry() -> impl Strategy<Value = MedicalHistoryEntry> {
    (date(), text(), text(), severity()).prop_map(|(date, diagnosis, notes, severity)| {
        MedicalHistoryEntry {
            id: Uuid::new_v4(),
            date,
            diagnosis,
            symptoms: vec![],
            notes,
            attending_provider: String::new(),
            severity,
        }
    })
}

fn prescription() -> impl Strategy<Value = Prescription> {
    (date(), prop::collection::vec(text(), 1..4), any::<bool>()).prop_map(
        |(date, names, is_active)| Prescription {
            id: Uuid::new_v4(),
            date,
            medicines: names
                .into_iter()
                .map(|name| Medicine {
                    name,
                    dosage: String::new(),
                    duration: String::new(),
                })
                .collect(),
            is_active,
        },
    )
}

fn history_query() -> impl Strategy<Value = HistoryQuery> {
    (
        "[abcABC]{0,2}",
        prop::sample::select(vec![HistorySortKey::Date, HistorySortKey::Severity]),
        prop::sample::select(vec![
            HistoryFilter::All,
            HistoryFilter::Low,
            HistoryFilter::Medium,
            HistoryFilter::High,
        ]),
    )
        .prop_map(|(term, sort, filter)| HistoryQuery::new(term, sort, filter))
}

fn prescription_query() -> impl Strategy<Value = PrescriptionQuery> {
    (
        "[abcABC]{0,2}",
        prop::sample::select(vec![PrescriptionSortKey::Date, PrescriptionSortKey::Status]),
        prop::sample::select(vec![
            PrescriptionFilter::All,
            PrescriptionFilter::Active,
            PrescriptionFilter::Inactive,
        ]),
    )
        .prop_map(|(term, sort, filter)| PrescriptionQuery::new(term, sort, filter))
}

fn history_matches(entry: &MedicalHistoryEntry, query: &HistoryQuery) -> bool {
    let needle = query.search_term.to_lowercase();
    let text_hit = entry.diagnosis.to_lowercase().contains(&needle)
        || entry.notes.to_lowercase().contains(&needle);
    let severity_hit = match query.filter {
        HistoryFilter::All => true,
        HistoryFilter::Low => entry.severity == Severity::Low,
        HistoryFilter::Medium => entry.severity == Severity::Medium,
        HistoryFilter::High => entry.severity == Severity::High,
    };
    text_hit && severity_hit
}

fn prescription_matches(item: &Prescription, query: &PrescriptionQuery) -> bool {
    let needle = query.search_term.to_lowercase();
    let text_hit = item
        .medicines
        .iter()
        .any(|m| m.name.to_lowercase().contains(&needle));
    let status_hit = match query.filter {
        PrescriptionFilter::All => true,
        PrescriptionFilter::Active => item.is_active,
        PrescriptionFilter::Inactive => !item.is_active,
    };
    text_hit && status_hit
}

/// `rank` must be non-increasing along `result`, and records with equal
/// rank must keep their input order.
fn check_descending_and_stable<R, K: Ord>(
    input_ids: &[Uuid],
    result: &[R],
    id_of: impl Fn(&R) -> Uuid,
    rank: impl Fn(&R) -> K,
) -> Result<(), TestCaseError> {
    let position: HashMap<Uuid, usize> =
        input_ids.iter().enumerate().map(|(i, id)| (*id, i)).collect();
    for pair in result.windows(2) {
        let (a, b) = (rank(&pair[0]), rank(&pair[1]));
        prop_assert!(a >= b, "result out of order");
        if a == b {
            prop_assert!(position[&id_of(&pair[0])] < position[&id_of(&pair[1])]);
        }
    }
    Ok(())
}

fn check_history_order(
    input_ids: &[Uuid],
    result: &[MedicalHistoryEntry],
    key: HistorySortKey,
) -> Result<(), TestCaseError> {
    match key {
        HistorySortKey::Date => {
            check_descending_and_stable(input_ids, result, |e| e.id, |e| e.date)
        }
        HistorySortKey::Severity => {
            check_descending_and_stable(input_ids, result, |e| e.id, |e| e.severity.rank())
        }
    }
}

fn check_prescription_order(
    input_ids: &[Uuid],
    result: &[Prescription],
    key: PrescriptionSortKey,
) -> Result<(), TestCaseError> {
    match key {
        PrescriptionSortKey::Date => {
            check_descending_and_stable(input_ids, result, |p| p.id, |p| p.date)
        }
        // true > false, so active records come first
        PrescriptionSortKey::Status => {
            check_descending_and_stable(input_ids, result, |p| p.id, |p| p.is_active)
        }
    }
}

proptest! {
    #[test]
    fn history_result_is_exactly_the_matching_records(
        entries in prop::collection::vec(history_entry(), 0..25),
        query in history_query(),
    ) {
        let result = run_query(&entries, &query);
        let mut got: Vec<Uuid> = result.iter().map(|e| e.id).collect();
        let mut want: Vec<Uuid> = entries
            .iter()
            .filter(|e| history_matches(e, &query))
            .map(|e| e.id)
            .collect();
        got.sort();
        want.sort();
        prop_assert_eq!(got, want);
    }

    #[test]
    fn history_result_is_sorted_and_stable(
        entries in prop::collection::vec(history_entry(), 0..25),
        query in history_query(),
    ) {
        let ids: Vec<Uuid> = entries.iter().map(|e| e.id).collect();
        let result = run_query(&entries, &query);
        check_history_order(&ids, &result, query.sort_key)?;
    }

    #[test]
    fn history_unfiltered_query_is_a_permutation(
        entries in prop::collection::vec(history_entry(), 0..25),
        sort in prop::sample::select(vec![HistorySortKey::Date, HistorySortKey::Severity]),
    ) {
        let query = HistoryQuery::new("", sort, HistoryFilter::All);
        let result = run_query(&entries, &query);
        let mut got: Vec<Uuid> = result.iter().map(|e| e.id).collect();
        let mut want: Vec<Uuid> = entries.iter().map(|e| e.id).collect();
        got.sort();
        want.sort();
        prop_assert_eq!(got, want);
    }

    #[test]
    fn history_query_is_idempotent(
        entries in prop::collection::vec(history_entry(), 0..25),
        query in history_query(),
    ) {
        prop_assert_eq!(run_query(&entries, &query), run_query(&entries, &query));
    }

    #[test]
    fn prescription_result_is_exactly_the_matching_records(
        items in prop::collection::vec(prescription(), 0..25),
        query in prescription_query(),
    ) {
        let result = run_query(&items, &query);
        let mut got: Vec<Uuid> = result.iter().map(|p| p.id).collect();
        let mut want: Vec<Uuid> = items
            .iter()
            .filter(|p| prescription_matches(p, &query))
            .map(|p| p.id)
            .collect();
        got.sort();
        want.sort();
        prop_assert_eq!(got, want);
    }

    #[test]
    fn prescription_result_is_sorted_and_stable(
        items in prop::collection::vec(prescription(), 0..25),
        query in prescription_query(),
    ) {
        let ids: Vec<Uuid> = items.iter().map(|p| p.id).collect();
        let result = run_query(&items, &query);
        check_prescription_order(&ids, &result, query.sort_key)?;
    }

    #[test]
    fn prescription_query_is_idempotent(
        items in prop::collection::vec(prescription(), 0..25),
        query in prescription_query(),
    ) {
        prop_assert_eq!(run_query(&items, &query), run_query(&items, &query));
    }

    #[test]
    fn search_ignores_case(
        items in prop::collection::vec(prescription(), 0..25),
        term in "[abc]{1,2}",
    ) {
        let lower = PrescriptionQuery::new(
            term.clone(),
            PrescriptionSortKey::Date,
            PrescriptionFilter::All,
        );
        let upper = PrescriptionQuery::new(
            term.to_uppercase(),
            PrescriptionSortKey::Date,
            PrescriptionFilter::All,
        );
        prop_assert_eq!(run_query(&items, &lower), run_query(&items, &upper));
    }
}
