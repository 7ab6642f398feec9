use std::fmt;

use serde::Serialize;

use crate::domain::{Kind, Person, RecordId};

/// The descriptive content of a patient record, excluding its identity.
///
/// Updating a patient always supplies a complete `PatientDetails`; there is
/// no partial update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatientDetails {
    /// The patient's name.
    pub name: String,
    /// The patient's age, in years.
    pub age: u32,
    /// The patient's contact number.
    pub contact_number: String,
    /// Free-text medical history.
    pub medical_history: String,
}

/// A patient registered with the hospital.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Patient {
    id: RecordId,
    #[serde(flatten)]
    details: PatientDetails,
}

impl Patient {
    /// Construct a new [`Patient`] from its identifier and details.
    #[must_use]
    pub const fn new(id: RecordId, details: PatientDetails) -> Self {
        Self { id, details }
    }

    /// The patient's medical history.
    #[must_use]
    pub fn medical_history(&self) -> &str {
        &self.details.medical_history
    }

    /// The descriptive content of the record.
    #[must_use]
    pub const fn details(&self) -> &PatientDetails {
        &self.details
    }
}

impl Person for Patient {
    const KIND: Kind = Kind::Patient;

    type Details = PatientDetails;

    fn from_details(id: RecordId, details: Self::Details) -> Self {
        Self::new(id, details)
    }

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn name(&self) -> &str {
        &self.details.name
    }

    fn age(&self) -> u32 {
        self.details.age
    }

    fn contact_number(&self) -> &str {
        &self.details.contact_number
    }
}

impl fmt::Display for Patient {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Patient Details:")?;
        writeln!(f, "Patient ID: {}", self.id)?;
        writeln!(f, "Name: {}", self.name())?;
        writeln!(f, "Age: {}", self.age())?;
        writeln!(f, "Contact Number: {}", self.contact_number())?;
        writeln!(f, "Medical History: {}", self.medical_history())?;
        writeln!(f)
    }
}
