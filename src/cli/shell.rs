//! The menu-driven shell over a [`Registry`].

use std::{fmt, io::Write};

use clap::ValueEnum;
use hospital::{
    Doctor, DoctorDetails, Patient, PatientDetails, RecordId, Registry, domain::InvalidIdError,
};
use serde::Serialize;
use tracing::instrument;

use crate::cli::{prompt::Prompt, terminal::Palette};

const APPOINTMENT_SEPARATOR: &str = "---------------------------";

/// Supported output formats for listings.
#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Human-readable detail blocks.
    #[default]
    Text,
    /// A pretty-printed JSON array.
    Json,
}

/// How the shell presents itself.
#[derive(Debug, Clone)]
pub struct View {
    /// The title shown above the main menu.
    pub title: String,
    /// Colours for status messages.
    pub palette: Palette,
    /// Format used by the listing actions.
    pub format: OutputFormat,
}

/// The actions offered by the main menu, in menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    AddPatient,
    AddDoctor,
    CreateAppointment,
    UpdatePatient,
    UpdateDoctor,
    ListPatients,
    ListDoctors,
    ListAppointments,
    Exit,
}

impl Action {
    const ALL: [Self; 9] = [
        Self::AddPatient,
        Self::AddDoctor,
        Self::CreateAppointment,
        Self::UpdatePatient,
        Self::UpdateDoctor,
        Self::ListPatients,
        Self::ListDoctors,
        Self::ListAppointments,
        Self::Exit,
    ];

    const fn label(self) -> &'static str {
        match self {
            Self::AddPatient => "Add Patient",
            Self::AddDoctor => "Add Doctor",
            Self::CreateAppointment => "Create Appointment",
            Self::UpdatePatient => "Update Patient Details",
            Self::UpdateDoctor => "Update Doctor Details",
            Self::ListPatients => "Display Patients",
            Self::ListDoctors => "Display Doctors",
            Self::ListAppointments => "Display Appointments",
            Self::Exit => "Exit",
        }
    }

    fn menu() -> Vec<String> {
        Self::ALL
            .iter()
            .enumerate()
            .map(|(index, action)| format!("{}. {}", index + 1, action.label()))
            .collect()
    }
}

/// Ways a single menu action can fail.
///
/// Registry and identifier errors are reported and the menu carries on.
/// Prompt and output failures end the shell.
#[derive(Debug, thiserror::Error)]
enum ActionError {
    #[error(transparent)]
    Registry(#[from] hospital::Error),
    #[error(transparent)]
    InvalidId(#[from] InvalidIdError),
    #[error(transparent)]
    Prompt(#[from] anyhow::Error),
    #[error(transparent)]
    Output(#[from] std::io::Error),
}

/// The interactive shell.
///
/// Owns the registry for the lifetime of the session.
pub struct Shell<P, W> {
    registry: Registry,
    prompt: P,
    out: W,
    view: View,
}

impl<P: Prompt, W: Write> Shell<P, W> {
    pub const fn new(registry: Registry, prompt: P, out: W, view: View) -> Self {
        Self {
            registry,
            prompt,
            out,
            view,
        }
    }

    /// Runs the menu loop until the user chooses to exit.
    ///
    /// # Errors
    ///
    /// Returns an error if input can no longer be read or output can no
    /// longer be written. Rejected actions are reported and do not end the
    /// loop.
    pub fn run(&mut self) -> anyhow::Result<()> {
        let menu = Action::menu();

        loop {
            writeln!(self.out, "{}", self.view.palette.info(&self.view.title))?;
            writeln!(self.out, "{}", "-".repeat(self.view.title.chars().count()))?;

            let choice = self.prompt.select("Enter your choice", &menu)?;
            let Some(action) = Action::ALL.get(choice).copied() else {
                writeln!(
                    self.out,
                    "{}",
                    self.view.palette.warning("Invalid choice. Please try again.")
                )?;
                writeln!(self.out)?;
                continue;
            };

            if action == Action::Exit {
                tracing::debug!("exiting");
                return Ok(());
            }

            self.perform(action)?;
            writeln!(self.out)?;
        }
    }

    #[instrument(skip(self))]
    fn perform(&mut self, action: Action) -> anyhow::Result<()> {
        let result = match action {
            Action::AddPatient => self.add_patient(),
            Action::AddDoctor => self.add_doctor(),
            Action::CreateAppointment => self.create_appointment(),
            Action::UpdatePatient => self.update_patient(),
            Action::UpdateDoctor => self.update_doctor(),
            Action::ListPatients => self.list_patients(),
            Action::ListDoctors => self.list_doctors(),
            Action::ListAppointments => self.list_appointments(),
            Action::Exit => Ok(()),
        };

        match result {
            Ok(()) => Ok(()),
            Err(ActionError::Registry(e)) => self.reject(&e),
            Err(ActionError::InvalidId(e)) => self.reject(&e),
            Err(ActionError::Prompt(e)) => Err(e),
            Err(ActionError::Output(e)) => Err(e.into()),
        }
    }

    fn reject(&mut self, error: &dyn fmt::Display) -> anyhow::Result<()> {
        tracing::info!(%error, "action rejected");
        writeln!(self.out, "{}", self.view.palette.warning(&error.to_string()))?;
        Ok(())
    }

    fn succeed(&mut self, message: &str) -> Result<(), ActionError> {
        writeln!(self.out, "{}", self.view.palette.success(message))?;
        Ok(())
    }

    fn read_id(&mut self, prompt: &str) -> Result<RecordId, ActionError> {
        Ok(RecordId::new(self.prompt.text(prompt)?)?)
    }

    fn read_patient_details(&mut self) -> Result<PatientDetails, ActionError> {
        Ok(PatientDetails {
            name: self.prompt.text("Name")?,
            age: self.prompt.number("Age")?,
            contact_number: self.prompt.text("Contact Number")?,
            medical_history: self.prompt.text("Medical History")?,
        })
    }

    fn read_doctor_details(&mut self) -> Result<DoctorDetails, ActionError> {
        Ok(DoctorDetails {
            name: self.prompt.text("Name")?,
            age: self.prompt.number("Age")?,
            contact_number: self.prompt.text("Contact Number")?,
            specialization: self.prompt.text("Specialization")?,
        })
    }

    fn add_patient(&mut self) -> Result<(), ActionError> {
        writeln!(self.out, "Adding a Patient:")?;
        let id = self.read_id("Patient ID")?;
        let details = self.read_patient_details()?;

        self.registry.add_patient(Patient::new(id, details))?;
        self.succeed("Patient added successfully.")
    }

    fn add_doctor(&mut self) -> Result<(), ActionError> {
        writeln!(self.out, "Adding a Doctor:")?;
        let id = self.read_id("Doctor ID")?;
        let details = self.read_doctor_details()?;

        self.registry.add_doctor(Doctor::new(id, details))?;
        self.succeed("Doctor added successfully.")
    }

    fn create_appointment(&mut self) -> Result<(), ActionError> {
        writeln!(self.out, "Creating an Appointment:")?;
        let patient_id = self.read_id("Patient ID")?;
        let patient = self
            .registry
            .patient(&patient_id)
            .cloned()
            .ok_or_else(|| hospital::Error::not_found::<Patient>(&patient_id))?;

        let doctor_id = self.read_id("Doctor ID")?;
        let date = self.prompt.text("Appointment Date")?.trim().to_string();

        self.registry.create_appointment(patient, &doctor_id, date)?;
        self.succeed("Appointment created successfully.")
    }

    fn update_patient(&mut self) -> Result<(), ActionError> {
        writeln!(self.out, "Updating Patient Details:")?;
        let id = self.read_id("Patient ID")?;
        if self.registry.patient(&id).is_none() {
            return Err(hospital::Error::not_found::<Patient>(&id).into());
        }

        writeln!(self.out, "Enter the new details for the patient:")?;
        let details = self.read_patient_details()?;

        self.registry.update_patient_details(&id, details)?;
        self.succeed("Patient details updated successfully.")
    }

    fn update_doctor(&mut self) -> Result<(), ActionError> {
        writeln!(self.out, "Updating Doctor Details:")?;
        let id = self.read_id("Doctor ID")?;
        if self.registry.doctor(&id).is_none() {
            return Err(hospital::Error::not_found::<Doctor>(&id).into());
        }

        writeln!(self.out, "Enter the new details for the doctor:")?;
        let details = self.read_doctor_details()?;

        self.registry.update_doctor_details(&id, details)?;
        self.succeed("Doctor details updated successfully.")
    }

    fn list_patients(&mut self) -> Result<(), ActionError> {
        let listing = Listing {
            heading: "Patients:",
            empty: "No patients available.",
            separator: None,
        };
        listing.write(
            &mut self.out,
            &self.view,
            self.registry.patients(),
        )?;
        Ok(())
    }

    fn list_doctors(&mut self) -> Result<(), ActionError> {
        let listing = Listing {
            heading: "Doctors:",
            empty: "No doctors available.",
            separator: None,
        };
        listing.write(&mut self.out, &self.view, self.registry.doctors())?;
        Ok(())
    }

    fn list_appointments(&mut self) -> Result<(), ActionError> {
        let listing = Listing {
            heading: "Appointments:",
            empty: "No appointments available.",
            separator: Some(APPOINTMENT_SEPARATOR),
        };
        listing.write(&mut self.out, &self.view, self.registry.appointments())?;
        Ok(())
    }
}

/// How to print one collection of records.
struct Listing {
    heading: &'static str,
    empty: &'static str,
    /// Printed on its own line after every record.
    separator: Option<&'static str>,
}

impl Listing {
    fn write<T>(&self, out: &mut impl Write, view: &View, records: &[T]) -> std::io::Result<()>
    where
        T: fmt::Display + Serialize,
    {
        if view.format == OutputFormat::Json {
            serde_json::to_writer_pretty(&mut *out, records)?;
            return writeln!(out);
        }

        if records.is_empty() {
            return writeln!(out, "{}", view.palette.dim(self.empty));
        }

        writeln!(out, "{}", view.palette.info(self.heading))?;
        for record in records {
            match self.separator {
                Some(separator) => {
                    writeln!(out, "{record}")?;
                    writeln!(out, "{separator}")?;
                }
                None => write!(out, "{record}")?,
            }
        }
        Ok(())
    }
}
