use std::str::FromStr;

use serde::Deserialize;

use crate::models::{
    HistoryFilter, HistorySortKey, ModelError, PrescriptionFilter, PrescriptionSortKey,
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    #[error("Invalid query parameter {field}: {value}")]
    InvalidParameter { field: &'static str, value: String },
}

/// Typed query over one record variant.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Query<S, F> {
    /// Matched case-insensitively; empty matches everything.
    pub search_term: String,
    pub sort_key: S,
    pub filter: F,
}

pub type HistoryQuery = Query<HistorySortKey, HistoryFilter>;
pub type PrescriptionQuery = Query<PrescriptionSortKey, PrescriptionFilter>;

impl<S, F> Query<S, F> {
    pub fn new(search_term: impl Into<String>, sort_key: S, filter: F) -> Self {
        Self {
            search_term: search_term.into(),
            sort_key,
            filter,
        }
    }
}

impl<S, F> Query<S, F>
where
    S: FromStr<Err = ModelError>,
    F: FromStr<Err = ModelError>,
{
    /// Parse string parameters as received from a view or HTTP client.
    pub fn parse(search_term: &str, sort_key: &str, filter: &str) -> Result<Self, QueryError> {
        Ok(Self {
            search_term: search_term.to_string(),
            sort_key: parse_param("sort", sort_key)?,
            filter: parse_param("filter", filter)?,
        })
    }
}

fn parse_param<T: FromStr<Err = ModelError>>(
    field: &'static str,
    value: &str,
) -> Result<T, QueryError> {
    value.parse().map_err(|_| QueryError::InvalidParameter {
        field,
        value: value.to_string(),
    })
}

/// Untyped query parameters, e.g. from `?search=&sort=&filter=`.
/// Absent parameters take the variant defaults (`date`, `all`); present
/// ones must name a value of the variant's enumeration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawQuery {
    pub search: Option<String>,
    pub sort: Option<String>,
    pub filter: Option<String>,
}

impl RawQuery {
    pub fn resolve<S, F>(&self) -> Result<Query<S, F>, QueryError>
    where
        S: FromStr<Err = ModelError> + Default,
        F: FromStr<Err = ModelError> + Default,
    {
        let sort_key = match &self.sort {
            Some(value) => parse_param("sort", value)?,
            None => S::default(),
        };
        let filter = match &self.filter {
            Some(value) => parse_param("filter", value)?,
            None => F::default(),
        };
        Ok(Query {
            search_term: self.search.clone().unwrap_or_default(),
            sort_key,
            filter,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_enumerated_values() {
        let q = HistoryQuery::parse("flu", "severity", "high").unwrap();
        assert_eq!(q.search_term, "flu");
        assert_eq!(q.sort_key, HistorySortKey::Severity);
        assert_eq!(q.filter, HistoryFilter::High);
    }

    #[test]
    fn parse_rejects_sort_key_of_other_variant() {
        let err = PrescriptionQuery::parse("", "severity", "all").unwrap_err();
        assert_eq!(
            err,
            QueryError::InvalidParameter {
                field: "sort",
                value: "severity".into()
            }
        );
    }

    #[test]
    fn parse_rejects_unknown_filter() {
        let err = HistoryQuery::parse("", "date", "critical").unwrap_err();
        assert_eq!(
            err,
            QueryError::InvalidParameter {
                field: "filter",
                value: "critical".into()
            }
        );
    }

    #[test]
    fn raw_query_defaults_when_absent() {
        let q: PrescriptionQuery = RawQuery::default().resolve().unwrap();
        assert_eq!(
            q,
            PrescriptionQuery::new("", PrescriptionSortKey::Date, PrescriptionFilter::All)
        );
    }

    #[test]
    fn raw_query_rejects_present_but_empty_sort() {
        let raw = RawQuery {
            search: None,
            sort: Some(String::new()),
            filter: None,
        };
        assert!(raw.resolve::<HistorySortKey, HistoryFilter>().is_err());
    }

    #[test]
    fn raw_query_keeps_search_verbatim() {
        let raw = RawQuery {
            search: Some("AMOX".into()),
            sort: Some("status".into()),
            filter: Some("inactive".into()),
        };
        let q: PrescriptionQuery = raw.resolve().unwrap();
        assert_eq!(q.search_term, "AMOX");
        assert_eq!(q.sort_key, PrescriptionSortKey::Status);
        assert_eq!(q.filter, PrescriptionFilter::Inactive);
    }
}
