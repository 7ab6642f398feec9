use std::fmt;

use serde::Serialize;

use crate::domain::{Doctor, Patient, Person};

/// An appointment between a patient and a doctor.
///
/// The appointment holds snapshots of both participants as they were when it
/// was booked. Updating a patient or doctor afterwards does not rewrite
/// existing appointments.
///
/// Appointments have no identity of their own and cannot be addressed once
/// created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Appointment {
    patient: Patient,
    doctor: Doctor,
    /// Free-form date text, stored exactly as supplied.
    date: String,
}

impl Appointment {
    /// Construct a new [`Appointment`].
    #[must_use]
    pub const fn new(patient: Patient, doctor: Doctor, date: String) -> Self {
        Self {
            patient,
            doctor,
            date,
        }
    }

    /// The patient attending the appointment.
    #[must_use]
    pub const fn patient(&self) -> &Patient {
        &self.patient
    }

    /// The doctor holding the appointment.
    #[must_use]
    pub const fn doctor(&self) -> &Doctor {
        &self.doctor
    }

    /// The appointment date.
    #[must_use]
    pub fn date(&self) -> &str {
        &self.date
    }
}

impl fmt::Display for Appointment {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Appointment Details:")?;
        writeln!(
            f,
            "Patient: {} (Patient ID: {})",
            self.patient.name(),
            self.patient.id()
        )?;
        writeln!(
            f,
            "Doctor: {} (Doctor ID: {})",
            self.doctor.name(),
            self.doctor.id()
        )?;
        write!(f, "Date: {}", self.date)
    }
}
