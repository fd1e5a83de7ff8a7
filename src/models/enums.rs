use serde::{Deserialize, Serialize};

use super::ModelError;

/// Macro to generate enum with as_str + std::str::FromStr pattern
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = ModelError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(ModelError::InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }
    };
}

str_enum!(Severity {
    Low => "low",
    Medium => "medium",
    High => "high",
});

impl Severity {
    /// Ordering weight used by severity sorting: high=3, medium=2, low=1.
    pub fn rank(&self) -> u8 {
        match self {
            Self::Low => 1,
            Self::Medium => 2,
            Self::High => 3,
        }
    }
}

str_enum!(HistorySortKey {
    Date => "date",
    Severity => "severity",
});

str_enum!(HistoryFilter {
    All => "all",
    Low => "low",
    Medium => "medium",
    High => "high",
});

impl HistoryFilter {
    /// The severity this filter pins, or `None` for `all`.
    pub fn severity(&self) -> Option<Severity> {
        match self {
            Self::All => None,
            Self::Low => Some(Severity::Low),
            Self::Medium => Some(Severity::Medium),
            Self::High => Some(Severity::High),
        }
    }
}

str_enum!(PrescriptionSortKey {
    Date => "date",
    Status => "status",
});

str_enum!(PrescriptionFilter {
    All => "all",
    Active => "active",
    Inactive => "inactive",
});

str_enum!(Role {
    Patient => "patient",
    Doctor => "doctor",
    Hospital => "hospital",
    Pharmacy => "pharmacy",
});

str_enum!(Tab {
    History => "history",
    Prescriptions => "prescriptions",
});

impl Default for HistorySortKey {
    fn default() -> Self {
        Self::Date
    }
}

impl Default for HistoryFilter {
    fn default() -> Self {
        Self::All
    }
}

impl Default for PrescriptionSortKey {
    fn default() -> Self {
        Self::Date
    }
}

impl Default for PrescriptionFilter {
    fn default() -> Self {
        Self::All
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn severity_round_trip() {
        for (variant, s) in [
            (Severity::Low, "low"),
            (Severity::Medium, "medium"),
            (Severity::High, "high"),
        ] {
            assert_eq!(variant.as_str(), s);
            assert_eq!(Severity::from_str(s).unwrap(), variant);
        }
    }

    #[test]
    fn severity_rank_is_strictly_increasing() {
        assert!(Severity::Low.rank() < Severity::Medium.rank());
        assert!(Severity::Medium.rank() < Severity::High.rank());
        assert_eq!(Severity::High.rank(), 3);
    }

    #[test]
    fn history_filter_pins_severity() {
        assert_eq!(HistoryFilter::All.severity(), None);
        assert_eq!(HistoryFilter::High.severity(), Some(Severity::High));
        assert_eq!(HistoryFilter::from_str("medium").unwrap().severity(), Some(Severity::Medium));
    }

    #[test]
    fn sort_keys_are_scoped_per_variant() {
        assert!(HistorySortKey::from_str("severity").is_ok());
        assert!(PrescriptionSortKey::from_str("severity").is_err());
        assert!(PrescriptionSortKey::from_str("status").is_ok());
        assert!(HistorySortKey::from_str("status").is_err());
    }

    #[test]
    fn parsing_is_case_sensitive() {
        assert!(Severity::from_str("High").is_err());
        assert!(PrescriptionFilter::from_str("ACTIVE").is_err());
    }

    #[test]
    fn invalid_enum_names_the_type() {
        let err = PrescriptionSortKey::from_str("name").unwrap_err();
        match err {
            ModelError::InvalidEnum { field, value } => {
                assert_eq!(field, "PrescriptionSortKey");
                assert_eq!(value, "name");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn serde_uses_lowercase_names() {
        assert_eq!(serde_json::to_string(&Severity::Medium).unwrap(), "\"medium\"");
        let role: Role = serde_json::from_str("\"pharmacy\"").unwrap();
        assert_eq!(role, Role::Pharmacy);
    }

    #[test]
    fn defaults_are_date_and_all() {
        assert_eq!(HistorySortKey::default(), HistorySortKey::Date);
        assert_eq!(HistoryFilter::default(), HistoryFilter::All);
        assert_eq!(PrescriptionSortKey::default(), PrescriptionSortKey::Date);
        assert_eq!(PrescriptionFilter::default(), PrescriptionFilter::All);
    }
}
