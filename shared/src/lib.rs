use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Route of the confirmation step that follows contact details
pub const CONFIRM_ROUTE: &str = "/book-session/confirm";

/// Minimal "local@domain.tld" shape. Unanchored, so any substring match passes.
static EMAIL_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern is valid"));

/// Booking parameters handed over by the tutor/slot selection step.
///
/// Every value is opaque to this step; nothing here is validated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BookingContext {
    pub tutor_name: String,
    pub tutor_email: String,
    pub course_title: String,
    pub subject_name: String,
    pub subject_id: String,
    pub date: String,
    pub time: String,
    pub price: String,
    pub course_id: String,
    pub tutor_id: String,
    pub availability_slot_id: String,
}

impl BookingContext {
    /// Parameter keys as they appear on the incoming route
    pub const PARAM_KEYS: [&'static str; 11] = [
        "tutorName",
        "tutorEmail",
        "courseTitle",
        "subjectName",
        "subjectId",
        "date",
        "time",
        "price",
        "courseId",
        "tutorId",
        "availabilitySlotId",
    ];

    /// Build the context from raw route parameters. Absent keys become empty strings.
    pub fn from_params(params: &HashMap<String, String>) -> Self {
        let get = |key: &str| params.get(key).cloned().unwrap_or_default();
        Self {
            tutor_name: get("tutorName"),
            tutor_email: get("tutorEmail"),
            course_title: get("courseTitle"),
            subject_name: get("subjectName"),
            subject_id: get("subjectId"),
            date: get("date"),
            time: get("time"),
            price: get("price"),
            course_id: get("courseId"),
            tutor_id: get("tutorId"),
            availability_slot_id: get("availabilitySlotId"),
        }
    }

    /// Keys that were not present in the raw route parameters
    pub fn missing_keys(params: &HashMap<String, String>) -> Vec<&'static str> {
        Self::PARAM_KEYS
            .iter()
            .copied()
            .filter(|key| !params.contains_key(*key))
            .collect()
    }
}

/// Contact details collected from the student
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactDetails {
    pub student_name: String,
    pub student_email: String,
    pub student_phone: String,
    pub student_address: String,
    /// Optional, may stay empty
    pub additional_notes: String,
}

impl ContactDetails {
    /// Check presence of the required fields and the email shape.
    ///
    /// Presence is checked first, so an empty email reports `MissingFields`.
    pub fn validate(&self) -> Result<(), ContactValidationError> {
        let required = [
            &self.student_name,
            &self.student_email,
            &self.student_phone,
            &self.student_address,
        ];
        if required.iter().any(|value| is_blank(value)) {
            return Err(ContactValidationError::MissingFields);
        }

        if !is_plausible_email(&self.student_email) {
            return Err(ContactValidationError::InvalidEmail);
        }

        Ok(())
    }
}

/// Signed-in user's values as published by the auth/profile provider
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSession {
    /// `user.email`
    pub user_email: Option<String>,
    /// `profile.full_name`
    pub profile_full_name: Option<String>,
}

impl AuthSession {
    pub fn new(user_email: Option<String>, profile_full_name: Option<String>) -> Self {
        Self {
            user_email,
            profile_full_name,
        }
    }

    /// Session with no signed-in user
    pub fn anonymous() -> Self {
        Self::default()
    }
}

/// Parameters forwarded to the confirmation step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmParams {
    // Passed through from the booking context
    pub tutor_name: String,
    pub tutor_email: String,
    pub course_title: String,
    pub date: String,
    pub time: String,
    pub price: String,
    pub course_id: String,
    pub tutor_id: String,
    pub availability_slot_id: String,
    pub subject_id: String,

    // Collected on this step
    pub student_name: String,
    pub student_email: String,
    pub student_phone: String,
    pub student_address: String,
    pub additional_notes: String,

    // Keys the confirmation step expects
    /// Copy of `subjectName`
    pub subject: String,
    /// Copy of `studentAddress`
    pub location: String,
}

impl ConfirmParams {
    /// Merge booking context and contact details into the outgoing parameter set
    pub fn merge(context: &BookingContext, contact: &ContactDetails) -> Self {
        Self {
            tutor_name: context.tutor_name.clone(),
            tutor_email: context.tutor_email.clone(),
            course_title: context.course_title.clone(),
            date: context.date.clone(),
            time: context.time.clone(),
            price: context.price.clone(),
            course_id: context.course_id.clone(),
            tutor_id: context.tutor_id.clone(),
            availability_slot_id: context.availability_slot_id.clone(),
            subject_id: context.subject_id.clone(),
            student_name: contact.student_name.clone(),
            student_email: contact.student_email.clone(),
            student_phone: contact.student_phone.clone(),
            student_address: contact.student_address.clone(),
            additional_notes: contact.additional_notes.clone(),
            subject: context.subject_name.clone(),
            location: contact.student_address.clone(),
        }
    }

    /// Flatten into route parameters keyed by their wire names
    pub fn to_query_params(&self) -> Result<BTreeMap<String, String>, serde_json::Error> {
        let value = serde_json::to_value(self)?;
        serde_json::from_value(value)
    }
}

/// Reasons a contact form submission is rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ContactValidationError {
    #[error("Please fill in all required contact details.")]
    MissingFields,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
}

impl ContactValidationError {
    /// Title of the alert shown to the user; the message is the `Display` text
    pub fn title(&self) -> &'static str {
        match self {
            ContactValidationError::MissingFields => "Missing Information",
            ContactValidationError::InvalidEmail => "Invalid Email",
        }
    }
}

/// Empty once whitespace and byte-order marks (U+FEFF) are stripped from both ends
pub fn is_blank(value: &str) -> bool {
    value
        .trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
        .is_empty()
}

/// True when the value contains a `local@domain.tld` shaped run
pub fn is_plausible_email(value: &str) -> bool {
    EMAIL_SHAPE.is_match(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_contact() -> ContactDetails {
        ContactDetails {
            student_name: "Omar".to_string(),
            student_email: "omar@test.com".to_string(),
            student_phone: "12345678".to_string(),
            student_address: "Doha, Qatar".to_string(),
            additional_notes: String::new(),
        }
    }

    fn sample_context() -> BookingContext {
        BookingContext {
            tutor_name: "Fatima Hassan".to_string(),
            tutor_email: "fatima@tutors.qa".to_string(),
            course_title: "IGCSE Chemistry".to_string(),
            subject_name: "Chemistry".to_string(),
            subject_id: "subj-7".to_string(),
            date: "2026-10-20".to_string(),
            time: "16:00".to_string(),
            price: "150".to_string(),
            course_id: "course-3".to_string(),
            tutor_id: "tutor-11".to_string(),
            availability_slot_id: "slot-42".to_string(),
        }
    }

    #[test]
    fn test_email_shape() {
        assert!(is_plausible_email("omar@test.com"));
        assert!(is_plausible_email("a@b.c"));
        // Unanchored: surrounding text does not matter
        assert!(is_plausible_email("  omar@test.com  "));
        assert!(is_plausible_email("call me omar@test.com"));

        assert!(!is_plausible_email("not-an-email"));
        assert!(!is_plausible_email("omar@test"));
        assert!(!is_plausible_email("@test.com"));
        assert!(!is_plausible_email("omar@.com"));
        assert!(!is_plausible_email("omar @ test.com"));
    }

    #[test]
    fn test_validate_contact_success() {
        assert_eq!(filled_contact().validate(), Ok(()));
    }

    #[test]
    fn test_validate_contact_missing_fields() {
        let blanks = ["", "   ", "\t\n"];
        for blank in blanks {
            let mut contact = filled_contact();
            contact.student_name = blank.to_string();
            assert_eq!(contact.validate(), Err(ContactValidationError::MissingFields));

            let mut contact = filled_contact();
            contact.student_email = blank.to_string();
            assert_eq!(contact.validate(), Err(ContactValidationError::MissingFields));

            let mut contact = filled_contact();
            contact.student_phone = blank.to_string();
            assert_eq!(contact.validate(), Err(ContactValidationError::MissingFields));

            let mut contact = filled_contact();
            contact.student_address = blank.to_string();
            assert_eq!(contact.validate(), Err(ContactValidationError::MissingFields));
        }
    }

    #[test]
    fn test_byte_order_mark_counts_as_blank() {
        assert!(is_blank("\u{FEFF}"));
        assert!(is_blank(" \u{FEFF}\u{00A0}\n"));
        assert!(!is_blank("\u{FEFF}Omar"));

        let mut contact = filled_contact();
        contact.student_name = "\u{FEFF}".to_string();
        assert_eq!(contact.validate(), Err(ContactValidationError::MissingFields));

        let mut contact = filled_contact();
        contact.student_address = " \u{FEFF} ".to_string();
        assert_eq!(contact.validate(), Err(ContactValidationError::MissingFields));
    }

    #[test]
    fn test_validate_contact_notes_optional() {
        let mut contact = filled_contact();
        contact.additional_notes = "   ".to_string();
        assert_eq!(contact.validate(), Ok(()));
    }

    #[test]
    fn test_validate_contact_invalid_email() {
        let mut contact = filled_contact();
        contact.student_email = "not-an-email".to_string();
        assert_eq!(contact.validate(), Err(ContactValidationError::InvalidEmail));
    }

    #[test]
    fn test_missing_fields_wins_over_invalid_email() {
        let mut contact = filled_contact();
        contact.student_email = "not-an-email".to_string();
        contact.student_phone = String::new();
        assert_eq!(contact.validate(), Err(ContactValidationError::MissingFields));
    }

    #[test]
    fn test_validation_error_alert_text() {
        let missing = ContactValidationError::MissingFields;
        assert_eq!(missing.title(), "Missing Information");
        assert_eq!(missing.to_string(), "Please fill in all required contact details.");

        let invalid = ContactValidationError::InvalidEmail;
        assert_eq!(invalid.title(), "Invalid Email");
        assert_eq!(invalid.to_string(), "Please enter a valid email address.");
    }

    #[test]
    fn test_booking_context_from_params() {
        let mut params = HashMap::new();
        params.insert("tutorName".to_string(), "Fatima Hassan".to_string());
        params.insert("subjectName".to_string(), "Chemistry".to_string());
        params.insert("price".to_string(), "150".to_string());

        let context = BookingContext::from_params(&params);
        assert_eq!(context.tutor_name, "Fatima Hassan");
        assert_eq!(context.subject_name, "Chemistry");
        assert_eq!(context.price, "150");
        assert_eq!(context.tutor_email, "");
        assert_eq!(context.availability_slot_id, "");

        let missing = BookingContext::missing_keys(&params);
        assert_eq!(missing.len(), 8);
        assert!(missing.contains(&"availabilitySlotId"));
        assert!(!missing.contains(&"tutorName"));
    }

    #[test]
    fn test_confirm_params_merge() {
        let params = ConfirmParams::merge(&sample_context(), &filled_contact());

        assert_eq!(params.tutor_name, "Fatima Hassan");
        assert_eq!(params.course_title, "IGCSE Chemistry");
        assert_eq!(params.subject, "Chemistry");
        assert_eq!(params.subject_id, "subj-7");
        assert_eq!(params.location, "Doha, Qatar");
        assert_eq!(params.student_address, "Doha, Qatar");
        assert_eq!(params.student_name, "Omar");
        assert_eq!(params.additional_notes, "");
    }

    #[test]
    fn test_confirm_params_query_keys() {
        let query = ConfirmParams::merge(&sample_context(), &filled_contact())
            .to_query_params()
            .unwrap();

        let expected_keys = [
            "tutorName",
            "tutorEmail",
            "courseTitle",
            "date",
            "time",
            "price",
            "courseId",
            "tutorId",
            "availabilitySlotId",
            "subjectId",
            "studentName",
            "studentEmail",
            "studentPhone",
            "studentAddress",
            "additionalNotes",
            "subject",
            "location",
        ];
        assert_eq!(query.len(), expected_keys.len());
        for key in expected_keys {
            assert!(query.contains_key(key), "missing key {}", key);
        }

        assert_eq!(query["subject"], "Chemistry");
        assert_eq!(query["courseTitle"], "IGCSE Chemistry");
        assert_eq!(query["location"], "Doha, Qatar");
        // subjectName itself is not forwarded
        assert!(!query.contains_key("subjectName"));
    }
}
