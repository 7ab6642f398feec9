//! In-memory Hospital Registry
//!
//! Patients, doctors and the appointments between them, held in memory for
//! the lifetime of a [`Registry`].

pub mod domain;
pub use domain::{
    Appointment, ColorChoice, Config, Doctor, DoctorDetails, Kind, Patient, PatientDetails,
    Person, RecordId,
};

/// The registry of records and its error type.
pub mod registry;
pub use registry::{Error, Registry};
