use std::fmt;

use serde::Serialize;

use crate::domain::{Kind, Person, RecordId};

/// The descriptive content of a doctor record, excluding its identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DoctorDetails {
    /// The doctor's name.
    pub name: String,
    /// The doctor's age, in years.
    pub age: u32,
    /// The doctor's contact number.
    pub contact_number: String,
    /// The doctor's medical specialization (e.g. 'Cardiology').
    pub specialization: String,
}

/// A doctor working at the hospital.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Doctor {
    id: RecordId,
    #[serde(flatten)]
    details: DoctorDetails,
}

impl Doctor {
    /// Construct a new [`Doctor`] from its identifier and details.
    #[must_use]
    pub const fn new(id: RecordId, details: DoctorDetails) -> Self {
        Self { id, details }
    }

    /// The doctor's specialization.
    #[must_use]
    pub fn specialization(&self) -> &str {
        &self.details.specialization
    }

    /// The descriptive content of the record.
    #[must_use]
    pub const fn details(&self) -> &DoctorDetails {
        &self.details
    }
}

impl Person for Doctor {
    const KIND: Kind = Kind::Doctor;

    type Details = DoctorDetails;

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

impl fmt::Display for Doctor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Doctor Details:")?;
        writeln!(f, "Doctor ID: {}", self.id)?;
        writeln!(f, "Name: {}", self.name())?;
        writeln!(f, "Age: {}", self.age())?;
        writeln!(f, "Contact Number: {}", self.contact_number())?;
        writeln!(f, "Specialization: {}", self.specialization())?;
        writeln!(f)
    }
}
