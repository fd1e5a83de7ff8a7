//! Demo records shown on a fresh dashboard.

use chrono::NaiveDate;
use uuid::Uuid;

use crate::models::{MedicalHistoryEntry, Medicine, Prescription, Severity};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or(NaiveDate::MIN)
}

fn medicine(name: &str, dosage: &str, duration: &str) -> Medicine {
    Medicine {
        name: name.into(),
        dosage: dosage.into(),
        duration: duration.into(),
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn sample_history() -> Vec<MedicalHistoryEntry> {
    vec![
        MedicalHistoryEntry {
            id: Uuid::new_v4(),
            date: date(2024, 2, 15),
            diagnosis: "Acute Bronchitis".into(),
            symptoms: strings(&["Cough", "Fever", "Chest Pain"]),
            notes: "Prescribed antibiotics and rest for 5 days".into(),
            attending_provider: "Dr. Smith".into(),
            severity: Severity::Medium,
        },
        MedicalHistoryEntry {
            id: Uuid::new_v4(),
            date: date(2024, 1, 20),
            diagnosis: "Migraine".into(),
            symptoms: strings(&["Headache", "Nausea", "Light Sensitivity"]),
            notes: "Recurring condition, recommended lifestyle changes".into(),
            attending_provider: "Dr. Johnson".into(),
            severity: Severity::Low,
        },
        MedicalHistoryEntry {
            id: Uuid::new_v4(),
            date: date(2023, 12, 5),
            diagnosis: "Pneumonia".into(),
            symptoms: strings(&["High Fever", "Difficulty Breathing", "Fatigue"]),
            notes: "Hospitalization required for 3 days".into(),
            attending_provider: "Dr. Smith".into(),
            severity: Severity::High,
        },
    ]
}

pub fn sample_prescriptions() -> Vec<Prescription> {
    vec![
        Prescription {
            id: Uuid::new_v4(),
            date: date(2024, 2, 15),
            medicines: vec![
                medicine("Amoxicillin", "500mg", "7 days"),
                medicine("Ibuprofen", "400mg", "5 days"),
            ],
            is_active: true,
        },
        Prescription {
            id: Uuid::new_v4(),
            date: date(2024, 1, 20),
            medicines: vec![medicine("Omeprazole", "20mg", "14 days")],
            is_active: false,
        },
        Prescription {
            id: Uuid::new_v4(),
            date: date(2024, 2, 1),
            medicines: vec![
                medicine("Cetirizine", "10mg", "30 days"),
                medicine("Montelukast", "10mg", "30 days"),
            ],
            is_active: true,
        },
        Prescription {
            id: Uuid::new_v4(),
            date: date(2023, 12, 15),
            medicines: vec![medicine("Azithromycin", "250mg", "5 days")],
            is_active: false,
        },
    ]
}
