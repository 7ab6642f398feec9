use std::fmt;

use crate::domain::RecordId;

/// The kinds of person held by the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// A patient, identified by a patient ID.
    Patient,
    /// A doctor, identified by a doctor ID.
    Doctor,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Patient => write!(f, "Patient"),
            Self::Doctor => write!(f, "Doctor"),
        }
    }
}

/// Capabilities shared by every person record.
///
/// A person has an identity, a name, an age and a contact number. The
/// remaining fields are specific to each record type and are grouped in
/// [`Person::Details`] together with the shared descriptive fields, so that
/// a record can always be rebuilt from an identifier and a complete set of
/// details.
pub trait Person: fmt::Display {
    /// The kind of person this record describes.
    const KIND: Kind;

    /// Every non-identity field of the record.
    type Details;

    /// Builds a record from its identifier and a complete set of details.
    fn from_details(id: RecordId, details: Self::Details) -> Self;

    /// The unique identifier of this record.
    fn id(&self) -> &RecordId;

    /// The person's name.
    fn name(&self) -> &str;

    /// The person's age, in years.
    fn age(&self) -> u32;

    /// The person's contact number.
    fn contact_number(&self) -> &str;
}
