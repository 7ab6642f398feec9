//! In-memory registry of patients, doctors and appointments
//!
//! The [`Registry`] knows nothing about the terminal. It owns three ordered
//! collections and enforces the rules between them:
//!
//! - patient IDs are unique among patients
//! - doctor IDs are unique among doctors
//! - an appointment can only be booked with a doctor that is registered
//!
//! Each operation either succeeds completely or leaves the registry as it
//! was.

use thiserror::Error;
use tracing::instrument;

use crate::domain::{
    Appointment, Doctor, DoctorDetails, Kind, Patient, PatientDetails, Person, RecordId,
};

mod roster;
use roster::Roster;

/// Errors returned by registry operations.
///
/// Both variants describe a condition the caller can correct and retry.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// A record with the same identifier is already registered.
    #[error("{kind} with ID {id} already exists.")]
    DuplicateId {
        /// The kind of record that was being added.
        kind: Kind,
        /// The identifier already in use.
        id: RecordId,
    },
    /// No record with the given identifier is registered.
    #[error("{kind} with ID {id} does not exist.")]
    NotFound {
        /// The kind of record that was looked up.
        kind: Kind,
        /// The identifier that could not be found.
        id: RecordId,
    },
}

impl Error {
    /// A [`Error::DuplicateId`] for a record of type `T`.
    #[must_use]
    pub fn duplicate<T: Person>(id: &RecordId) -> Self {
        Self::DuplicateId {
            kind: T::KIND,
            id: id.clone(),
        }
    }

    /// A [`Error::NotFound`] for a record of type `T`.
    #[must_use]
    pub fn not_found<T: Person>(id: &RecordId) -> Self {
        Self::NotFound {
            kind: T::KIND,
            id: id.clone(),
        }
    }
}

/// An in-memory store of hospital records.
///
/// Registries are independent of one another; nothing is shared between
/// instances and nothing outlives the value. Access is single-threaded: wrap
/// the registry in a lock before sharing it between threads.
#[derive(Debug, Default)]
pub struct Registry {
    patients: Roster<Patient>,
    doctors: Roster<Doctor>,
    appointments: Vec<Appointment>,
}

impl Registry {
    /// Registers a new patient.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateId`] if a patient with the same ID is already
    /// registered.
    #[instrument(skip(self, patient), fields(id = %patient.id()))]
    pub fn add_patient(&mut self, patient: Patient) -> Result<&Patient, Error> {
        let patient = self.patients.insert(patient)?;
        tracing::debug!("patient added");
        Ok(patient)
    }

    /// Registers a new doctor.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateId`] if a doctor with the same ID is already
    /// registered.
    #[instrument(skip(self, doctor), fields(id = %doctor.id()))]
    pub fn add_doctor(&mut self, doctor: Doctor) -> Result<&Doctor, Error> {
        let doctor = self.doctors.insert(doctor)?;
        tracing::debug!("doctor added");
        Ok(doctor)
    }

    /// Books an appointment between a patient and a registered doctor.
    ///
    /// The patient is supplied directly by the caller; only the doctor is
    /// resolved against the registry. The appointment stores copies of both.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no doctor with `doctor_id` is
    /// registered.
    #[instrument(skip(self, patient), fields(patient = %patient.id()))]
    pub fn create_appointment(
        &mut self,
        patient: Patient,
        doctor_id: &RecordId,
        date: String,
    ) -> Result<&Appointment, Error> {
        let doctor = self
            .doctors
            .get(doctor_id)
            .cloned()
            .ok_or_else(|| Error::not_found::<Doctor>(doctor_id))?;

        let index = self.appointments.len();
        self.appointments
            .push(Appointment::new(patient, doctor, date));
        tracing::debug!("appointment created");
        Ok(&self.appointments[index])
    }

    /// Replaces the details of a registered patient.
    ///
    /// The old record is removed and a new one is appended under the same ID,
    /// so the updated patient moves to the end of [`Registry::patients`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no patient with `id` is registered.
    #[instrument(skip(self, details))]
    pub fn update_patient_details(
        &mut self,
        id: &RecordId,
        details: PatientDetails,
    ) -> Result<&Patient, Error> {
        let patient = self.patients.replace(id, details)?;
        tracing::debug!("patient details updated");
        Ok(patient)
    }

    /// Replaces the details of a registered doctor.
    ///
    /// The old record is removed and a new one is appended under the same ID,
    /// so the updated doctor moves to the end of [`Registry::doctors`].
    ///
    /// Appointments already booked with the doctor keep the old details.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no doctor with `id` is registered.
    #[instrument(skip(self, details))]
    pub fn update_doctor_details(
        &mut self,
        id: &RecordId,
        details: DoctorDetails,
    ) -> Result<&Doctor, Error> {
        let doctor = self.doctors.replace(id, details)?;
        tracing::debug!("doctor details updated");
        Ok(doctor)
    }

    /// Finds a registered patient by ID.
    #[must_use]
    pub fn patient(&self, id: &RecordId) -> Option<&Patient> {
        self.patients.get(id)
    }

    /// Finds a registered doctor by ID.
    #[must_use]
    pub fn doctor(&self, id: &RecordId) -> Option<&Doctor> {
        self.doctors.get(id)
    }

    /// All registered patients, in collection order.
    #[must_use]
    pub fn patients(&self) -> &[Patient] {
        self.patients.as_slice()
    }

    /// All registered doctors, in collection order.
    #[must_use]
    pub fn doctors(&self) -> &[Doctor] {
        self.doctors.as_slice()
    }

    /// All booked appointments, in the order they were created.
    #[must_use]
    pub fn appointments(&self) -> &[Appointment] {
        &self.appointments
    }
}
