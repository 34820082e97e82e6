//! Form state management and form structs

use std::collections::HashMap;
use std::hash::Hash;

use super::field::{FormField, ResumeAttachment};
use crate::content::JobOpening;
use crate::state::{ApplicationSubmission, ContactSubmission, SubmissionStatus};
use crate::validate;

/// Fields of the contact form, all required
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    FirstName,
    LastName,
    Email,
    Phone,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 5] = [
        ContactField::FirstName,
        ContactField::LastName,
        ContactField::Email,
        ContactField::Phone,
        ContactField::Message,
    ];
}

/// Fields of the career application form; Message is the only optional one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApplicationField {
    Name,
    Email,
    Phone,
    Message,
    Resume,
}

impl ApplicationField {
    pub const ALL: [ApplicationField; 5] = [
        ApplicationField::Name,
        ApplicationField::Email,
        ApplicationField::Phone,
        ApplicationField::Message,
        ApplicationField::Resume,
    ];
}

/// Per-field validation failure messages. Absence of an entry means the
/// field currently passes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldErrors<F: Eq + Hash> {
    entries: HashMap<F, String>,
}

impl<F: Eq + Hash> FieldErrors<F> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Record a failure for a field, replacing any previous message
    pub fn set(&mut self, field: F, reason: String) {
        self.entries.insert(field, reason);
    }

    /// Mark a field as passing
    pub fn clear_field(&mut self, field: F) {
        self.entries.remove(&field);
    }

    /// Get the failure message for a field, if any
    pub fn get(&self, field: F) -> Option<&str> {
        self.entries.get(&field).map(String::as_str)
    }

    /// True when every field passes
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Forget all recorded failures
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<F: Eq + Hash> Default for FieldErrors<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// Contact form state: field values, per-field errors, submit lifecycle
#[derive(Debug, Clone)]
pub struct ContactForm {
    pub first_name: FormField,
    pub last_name: FormField,
    pub email: FormField,
    pub phone: FormField,
    pub message: FormField,
    pub errors: FieldErrors<ContactField>,
    pub status: SubmissionStatus,
}

impl ContactForm {
    pub fn new() -> Self {
        Self {
            first_name: FormField::text("firstName", "First name"),
            last_name: FormField::text("lastName", "Last name"),
            email: FormField::text("email", "Email"),
            phone: FormField::phone("phone", "Phone"),
            message: FormField::text("message", "Message"),
            errors: FieldErrors::new(),
            status: SubmissionStatus::Idle,
        }
    }

    pub fn field(&self, field: ContactField) -> &FormField {
        match field {
            ContactField::FirstName => &self.first_name,
            ContactField::LastName => &self.last_name,
            ContactField::Email => &self.email,
            ContactField::Phone => &self.phone,
            ContactField::Message => &self.message,
        }
    }

    fn field_mut(&mut self, field: ContactField) -> &mut FormField {
        match field {
            ContactField::FirstName => &mut self.first_name,
            ContactField::LastName => &mut self.last_name,
            ContactField::Email => &mut self.email,
            ContactField::Phone => &mut self.phone,
            ContactField::Message => &mut self.message,
        }
    }

    /// Store user input for a field and recompute that field's error
    pub fn edit(&mut self, field: ContactField, input: &str) {
        self.field_mut(field).set_input(input);
        self.revalidate(field);
    }

    /// Run the validation rule for a single field
    pub fn validate_field(&self, field: ContactField) -> Option<String> {
        match field {
            ContactField::FirstName => validate::name(self.first_name.as_text(), "First name"),
            ContactField::LastName => validate::name(self.last_name.as_text(), "Last name"),
            ContactField::Email => validate::email(self.email.as_text()),
            ContactField::Phone => validate::phone(self.phone.as_text()),
            ContactField::Message => validate::message(self.message.as_text()),
        }
    }

    /// Recompute every field's error entry. Returns true when all pass.
    pub fn validate_all(&mut self) -> bool {
        let mut all_pass = true;
        for field in ContactField::ALL {
            match self.validate_field(field) {
                Some(reason) => {
                    self.errors.set(field, reason);
                    all_pass = false;
                }
                None => self.errors.clear_field(field),
            }
        }
        all_pass
    }

    /// Error message currently recorded for a field
    pub fn error(&self, field: ContactField) -> Option<&str> {
        self.errors.get(field)
    }

    /// Clear all values and errors back to the initial empty state.
    /// The submit lifecycle status is tracked separately and not touched.
    pub fn reset(&mut self) {
        for field in ContactField::ALL {
            self.field_mut(field).clear();
        }
        self.errors.clear();
    }

    /// Build the relay payload from the current values
    pub fn payload(&self) -> ContactSubmission {
        ContactSubmission {
            first_name: self.first_name.as_text().to_string(),
            last_name: self.last_name.as_text().to_string(),
            email: self.email.as_text().to_string(),
            phone: self.phone.as_text().to_string(),
            message: self.message.as_text().to_string(),
        }
    }

    fn revalidate(&mut self, field: ContactField) {
        match self.validate_field(field) {
            Some(reason) => self.errors.set(field, reason),
            None => self.errors.clear_field(field),
        }
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

/// Career application form state, tied to the job opening it applies to
#[derive(Debug, Clone)]
pub struct ApplicationForm {
    pub opening_id: String,
    pub position: String,
    pub name: FormField,
    pub email: FormField,
    pub phone: FormField,
    pub message: FormField,
    pub resume: FormField,
    pub errors: FieldErrors<ApplicationField>,
    pub status: SubmissionStatus,
}

impl ApplicationForm {
    /// Create a fresh form for applying to the given opening
    pub fn for_opening(opening: &JobOpening) -> Self {
        Self {
            opening_id: opening.id.clone(),
            position: opening.position.clone(),
            name: FormField::text("name", "Name"),
            email: FormField::text("email", "Email"),
            phone: FormField::phone("phone", "Phone"),
            message: FormField::text("message", "Message"),
            resume: FormField::attachment("resume", "Resume"),
            errors: FieldErrors::new(),
            status: SubmissionStatus::Idle,
        }
    }

    pub fn field(&self, field: ApplicationField) -> &FormField {
        match field {
            ApplicationField::Name => &self.name,
            ApplicationField::Email => &self.email,
            ApplicationField::Phone => &self.phone,
            ApplicationField::Message => &self.message,
            ApplicationField::Resume => &self.resume,
        }
    }

    fn field_mut(&mut self, field: ApplicationField) -> &mut FormField {
        match field {
            ApplicationField::Name => &mut self.name,
            ApplicationField::Email => &mut self.email,
            ApplicationField::Phone => &mut self.phone,
            ApplicationField::Message => &mut self.message,
            ApplicationField::Resume => &mut self.resume,
        }
    }

    /// Store user input for a field and recompute that field's error
    pub fn edit(&mut self, field: ApplicationField, input: &str) {
        self.field_mut(field).set_input(input);
        self.revalidate(field);
    }

    /// Attach a resume file and recompute the resume field's error
    pub fn attach_resume(&mut self, attachment: ResumeAttachment) {
        self.resume.set_attachment(attachment);
        self.revalidate(ApplicationField::Resume);
    }

    /// Run the validation rule for a single field. Message is optional on
    /// this form and never fails.
    pub fn validate_field(&self, field: ApplicationField) -> Option<String> {
        match field {
            ApplicationField::Name => validate::name(self.name.as_text(), "Name"),
            ApplicationField::Email => validate::email(self.email.as_text()),
            ApplicationField::Phone => validate::phone(self.phone.as_text()),
            ApplicationField::Message => None,
            ApplicationField::Resume => validate::attachment(self.resume.as_attachment().is_some()),
        }
    }

    /// Recompute every field's error entry. Returns true when all pass.
    pub fn validate_all(&mut self) -> bool {
        let mut all_pass = true;
        for field in ApplicationField::ALL {
            match self.validate_field(field) {
                Some(reason) => {
                    self.errors.set(field, reason);
                    all_pass = false;
                }
                None => self.errors.clear_field(field),
            }
        }
        all_pass
    }

    /// Error message currently recorded for a field
    pub fn error(&self, field: ApplicationField) -> Option<&str> {
        self.errors.get(field)
    }

    /// Build the relay payload from the current values
    pub fn payload(&self) -> ApplicationSubmission {
        ApplicationSubmission {
            opening_id: self.opening_id.clone(),
            position: self.position.clone(),
            name: self.name.as_text().to_string(),
            email: self.email.as_text().to_string(),
            phone: self.phone.as_text().to_string(),
            message: self.message.as_text().to_string(),
            resume_file_name: self
                .resume
                .as_attachment()
                .map(|a| a.file_name.clone())
                .unwrap_or_default(),
        }
    }

    fn revalidate(&mut self, field: ApplicationField) {
        match self.validate_field(field) {
            Some(reason) => self.errors.set(field, reason),
            None => self.errors.clear_field(field),
        }
    }
}
