//! This bench test fills a registry with many patients, then replaces every
//! one of them. Both operations scan the collection linearly, so this tracks
//! how the registry behaves as it grows.

#![allow(missing_docs)]

use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use hospital::{Patient, PatientDetails, RecordId, Registry};

const PATIENTS: usize = 1_000;

fn details(name: &str) -> PatientDetails {
    PatientDetails {
        name: name.to_string(),
        age: 40,
        contact_number: "555-0000".to_string(),
        medical_history: String::new(),
    }
}

fn ids() -> Vec<RecordId> {
    (1..=PATIENTS)
        .map(|i| RecordId::new(format!("P{i:04}")).unwrap())
        .collect()
}

fn preseed_registry(ids: &[RecordId]) -> Registry {
    let mut registry = Registry::default();
    for id in ids {
        registry
            .add_patient(Patient::new(id.clone(), details("Patient")))
            .unwrap();
    }
    registry
}

fn add_many(c: &mut Criterion) {
    let ids = ids();

    c.bench_function("add many patients", |b| {
        b.iter(|| preseed_registry(&ids));
    });
}

fn update_all(c: &mut Criterion) {
    let ids = ids();

    c.bench_function("update all patients", |b| {
        b.iter_batched(
            || preseed_registry(&ids),
            |mut registry| {
                for id in &ids {
                    registry
                        .update_patient_details(id, details("Updated"))
                        .unwrap();
                }
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, add_many, update_all);
criterion_main!(benches);
