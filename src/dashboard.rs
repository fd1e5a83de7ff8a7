//! Role dashboards: one view-state shape shared by every role.
//!
//! A `DashboardView` holds the parameters a screen owns (active tab,
//! search text, sort key, filter value) as raw strings, exactly as a view
//! would receive them from its controls. `records` resolves them through
//! the query engine against a store snapshot; invalid values fail there.
//!
//! Pharmacy is the restricted role: it only sees prescriptions, always
//! filtered to active ones and sorted by date.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::models::{
    HistoryFilter, HistorySortKey, MedicalHistoryEntry, Prescription, PrescriptionFilter,
    PrescriptionSortKey, Role, Tab,
};
use crate::query::{run_query, Query, QueryError};
use crate::store::{RecordStore, StoreError};

#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    #[error("Tab {tab} is not available to the {role} dashboard")]
    TabUnavailable { role: Role, tab: Tab },

    #[error("The {role} dashboard does not allow {field}={value}")]
    LockedParameter {
        role: Role,
        field: &'static str,
        value: String,
    },

    #[error(transparent)]
    Query(#[from] QueryError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl Role {
    pub fn tabs(&self) -> &'static [Tab] {
        match self {
            Role::Pharmacy => &[Tab::Prescriptions],
            _ => &[Tab::History, Tab::Prescriptions],
        }
    }

    pub fn default_tab(&self) -> Tab {
        self.tabs()[0]
    }

    /// Fixed (sort, filter) for roles whose prescription view is locked.
    fn locked_prescription_params(&self) -> Option<(PrescriptionSortKey, PrescriptionFilter)> {
        match self {
            Role::Pharmacy => Some((PrescriptionSortKey::Date, PrescriptionFilter::Active)),
            _ => None,
        }
    }
}

/// Partial update coming from a view; `None` leaves the field as is.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DashboardParams {
    pub tab: Option<String>,
    pub search: Option<String>,
    pub sort: Option<String>,
    pub filter: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardView {
    pub role: Role,
    pub active_tab: Tab,
    pub search_term: String,
    pub sort_key: String,
    pub filter_value: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "tab", content = "records", rename_all = "snake_case")]
pub enum DashboardRecords {
    History(Vec<MedicalHistoryEntry>),
    Prescriptions(Vec<Prescription>),
}

impl DashboardRecords {
    pub fn len(&self) -> usize {
        match self {
            Self::History(records) => records.len(),
            Self::Prescriptions(records) => records.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl DashboardView {
    pub fn for_role(role: Role) -> Self {
        let mut view = Self {
            role,
            active_tab: role.default_tab(),
            search_term: String::new(),
            sort_key: String::new(),
            filter_value: String::new(),
        };
        view.reset_query_params();
        view
    }

    /// Switch tabs. Search text is kept; sort and filter revert to the
    /// new tab's defaults because their vocabularies differ per tab.
    pub fn select_tab(&mut self, tab: Tab) -> Result<(), DashboardError> {
        if !self.role.tabs().contains(&tab) {
            return Err(DashboardError::TabUnavailable {
                role: self.role,
                tab,
            });
        }
        if tab != self.active_tab {
            self.active_tab = tab;
            self.reset_query_params();
        }
        Ok(())
    }

    /// Apply a partial update. Nothing changes unless every field is accepted.
    pub fn apply(&mut self, params: DashboardParams) -> Result<(), DashboardError> {
        let mut next = self.clone();
        if let Some(tab) = params.tab {
            let tab = Tab::from_str(&tab).map_err(|_| QueryError::InvalidParameter {
                field: "tab",
                value: tab,
            })?;
            next.select_tab(tab)?;
        }
        if let Some(search) = params.search {
            next.search_term = search;
        }
        if let Some(sort) = params.sort {
            next.check_locked("sort", &sort)?;
            next.sort_key = sort;
        }
        if let Some(filter) = params.filter {
            next.check_locked("filter", &filter)?;
            next.filter_value = filter;
        }
        *self = next;
        Ok(())
    }

    /// Evaluate the current view against a fresh store snapshot.
    pub fn records(&self, store: &dyn RecordStore) -> Result<DashboardRecords, DashboardError> {
        let records = match self.active_tab {
            Tab::History => {
                let query: Query<HistorySortKey, HistoryFilter> =
                    Query::parse(&self.search_term, &self.sort_key, &self.filter_value)?;
                DashboardRecords::History(run_query(&store.list_history()?, &query))
            }
            Tab::Prescriptions => {
                let query: Query<PrescriptionSortKey, PrescriptionFilter> =
                    Query::parse(&self.search_term, &self.sort_key, &self.filter_value)?;
                DashboardRecords::Prescriptions(run_query(&store.list_prescriptions()?, &query))
            }
        };
        tracing::debug!(
            role = %self.role,
            tab = %self.active_tab,
            count = records.len(),
            "Dashboard records resolved"
        );
        Ok(records)
    }

    fn reset_query_params(&mut self) {
        let (sort, filter) = match self.active_tab {
            Tab::History => (
                HistorySortKey::default().as_str(),
                HistoryFilter::default().as_str(),
            ),
            Tab::Prescriptions => match self.role.locked_prescription_params() {
                Some((sort, filter)) => (sort.as_str(), filter.as_str()),
                None => (
                    PrescriptionSortKey::default().as_str(),
                    PrescriptionFilter::default().as_str(),
                ),
            },
        };
        self.sort_key = sort.to_string();
        self.filter_value = filter.to_string();
    }

    /// Unknown values are invalid parameters; known ones other than the
    /// locked value are refused.
    fn check_locked(&self, field: &'static str, value: &str) -> Result<(), DashboardError> {
        if self.active_tab != Tab::Prescriptions {
            return Ok(());
        }
        let Some((sort, filter)) = self.role.locked_prescription_params() else {
            return Ok(());
        };
        let invalid = || QueryError::InvalidParameter {
            field,
            value: value.to_string(),
        };
        let permitted = if field == "sort" {
            PrescriptionSortKey::from_str(value).map_err(|_| invalid())? == sort
        } else {
            PrescriptionFilter::from_str(value).map_err(|_| invalid())? == filter
        };
        if !permitted {
            return Err(DashboardError::LockedParameter {
                role: self.role,
                field,
                value: value.to_string(),
            });
        }
        Ok(())
    }
}
