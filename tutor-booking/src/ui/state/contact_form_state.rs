//! # Contact Form State Module
//!
//! Controlled-input state of the contact information step: one value per
//! input, replaced wholesale on every change.
//!
//! ## Responsibilities:
//! - Field values and per-field presentation metadata
//! - Applying signed-in user values to the name and email inputs

use shared::{AuthSession, ContactDetails};

use crate::domain::ContactInfoService;

/// Keyboard hint for an input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Email,
    Phone,
    /// Multi-line text area with the given visible line count
    Multiline(u8),
}

/// The five inputs of the contact step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    StudentName,
    StudentEmail,
    StudentPhone,
    StudentAddress,
    AdditionalNotes,
}

impl ContactField {
    /// All fields in display order
    pub const ALL: [ContactField; 5] = [
        ContactField::StudentName,
        ContactField::StudentEmail,
        ContactField::StudentPhone,
        ContactField::StudentAddress,
        ContactField::AdditionalNotes,
    ];

    /// Name of the field in the outgoing route parameters
    pub fn param_key(&self) -> &'static str {
        match self {
            ContactField::StudentName => "studentName",
            ContactField::StudentEmail => "studentEmail",
            ContactField::StudentPhone => "studentPhone",
            ContactField::StudentAddress => "studentAddress",
            ContactField::AdditionalNotes => "additionalNotes",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ContactField::StudentName => "Full Name",
            ContactField::StudentEmail => "Email",
            ContactField::StudentPhone => "Phone Number",
            ContactField::StudentAddress => "Address",
            ContactField::AdditionalNotes => "Additional Notes (Optional)",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            ContactField::StudentName => "Your full name",
            ContactField::StudentEmail => "Your email address",
            ContactField::StudentPhone => "Your phone number",
            ContactField::StudentAddress => "Your address in Qatar",
            ContactField::AdditionalNotes => {
                "Any specific requirements or questions for the tutor"
            }
        }
    }

    pub fn input_kind(&self) -> InputKind {
        match self {
            ContactField::StudentEmail => InputKind::Email,
            ContactField::StudentPhone => InputKind::Phone,
            ContactField::AdditionalNotes => InputKind::Multiline(4),
            ContactField::StudentName | ContactField::StudentAddress => InputKind::Text,
        }
    }

    pub fn is_required(&self) -> bool {
        !matches!(self, ContactField::AdditionalNotes)
    }

    /// Whether the input should auto-capitalize words
    pub fn auto_capitalize(&self) -> bool {
        !matches!(self, ContactField::StudentEmail)
    }
}

/// Editable contact form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFormState {
    details: ContactDetails,
}

impl ContactFormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Form pre-filled from the signed-in user
    pub fn from_session(session: &AuthSession) -> Self {
        Self {
            details: ContactInfoService::initial_details(session),
        }
    }

    pub fn details(&self) -> &ContactDetails {
        &self.details
    }

    pub fn value(&self, field: ContactField) -> &str {
        match field {
            ContactField::StudentName => &self.details.student_name,
            ContactField::StudentEmail => &self.details.student_email,
            ContactField::StudentPhone => &self.details.student_phone,
            ContactField::StudentAddress => &self.details.student_address,
            ContactField::AdditionalNotes => &self.details.additional_notes,
        }
    }

    /// Replace the whole value of a field
    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ContactField::StudentName => self.details.student_name = value,
            ContactField::StudentEmail => self.details.student_email = value,
            ContactField::StudentPhone => self.details.student_phone = value,
            ContactField::StudentAddress => self.details.student_address = value,
            ContactField::AdditionalNotes => self.details.additional_notes = value,
        }
    }

    pub fn set_student_name(&mut self, value: impl Into<String>) {
        self.set(ContactField::StudentName, value);
    }

    pub fn set_student_email(&mut self, value: impl Into<String>) {
        self.set(ContactField::StudentEmail, value);
    }

    pub fn set_student_phone(&mut self, value: impl Into<String>) {
        self.set(ContactField::StudentPhone, value);
    }

    pub fn set_student_address(&mut self, value: impl Into<String>) {
        self.set(ContactField::StudentAddress, value);
    }

    pub fn set_additional_notes(&mut self, value: impl Into<String>) {
        self.set(ContactField::AdditionalNotes, value);
    }

    /// Copy present session values into name and email. Absent values leave the field alone.
    pub fn apply_session(&mut self, session: &AuthSession) {
        if let Some(full_name) = session.profile_full_name.as_deref().filter(|v| !v.is_empty()) {
            self.details.student_name = full_name.to_string();
        }
        if let Some(email) = session.user_email.as_deref().filter(|v| !v.is_empty()) {
            self.details.student_email = email.to_string();
        }
    }
}
