//! Domain models for the hospital registry.
//!
//! This module contains the record types held by the registry (patients,
//! doctors and appointments), their identifiers, and the shell
//! configuration.

mod appointment;
pub use appointment::Appointment;

mod config;
pub use config::{ColorChoice, Config};

mod doctor;
pub use doctor::{Doctor, DoctorDetails};

/// Record identifiers and their validation.
pub mod id;
pub use id::{InvalidIdError, RecordId};

mod patient;
pub use patient::{Patient, PatientDetails};

mod person;
pub use person::{Kind, Person};
