//! Contact information domain logic for the booking wizard.
//!
//! Validation of the collected contact details and assembly of the parameters
//! handed to the confirmation step live here. The screen only keeps field
//! state and reacts to the outcome.

use shared::{AuthSession, BookingContext, ConfirmParams, ContactDetails, ContactValidationError};

use crate::config::ContactFormConfig;
use crate::domain::booking_summary::BookingSummary;
use crate::navigation::Route;

/// Service that handles the contact step's business rules
#[derive(Debug, Clone)]
pub struct ContactInfoService {
    config: ContactFormConfig,
}

impl ContactInfoService {
    pub fn new() -> Self {
        Self {
            config: ContactFormConfig::default(),
        }
    }

    pub fn with_config(config: ContactFormConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ContactFormConfig {
        &self.config
    }

    /// Initial contact details for a freshly mounted screen
    pub fn initial_details(session: &AuthSession) -> ContactDetails {
        ContactDetails {
            student_name: session.profile_full_name.clone().unwrap_or_default(),
            student_email: session.user_email.clone().unwrap_or_default(),
            ..Default::default()
        }
    }

    /// Validate the details and build the route to the confirmation step
    pub fn prepare_confirmation(
        &self,
        context: &BookingContext,
        details: &ContactDetails,
    ) -> Result<Route, ContactValidationError> {
        if let Err(e) = details.validate() {
            log::info!("Contact details rejected: {:?}", e);
            return Err(e);
        }

        let params = ConfirmParams::merge(context, details);
        log::debug!(
            "Contact details accepted for slot {} (tutor {})",
            params.availability_slot_id,
            params.tutor_id
        );

        Ok(Route {
            path: self.config.confirm_route.clone(),
            params,
        })
    }

    pub fn booking_summary(&self, context: &BookingContext) -> BookingSummary {
        BookingSummary::from_context(context, &self.config)
    }
}

impl Default for ContactInfoService {
    fn default() -> Self {
        Self::new()
    }
}
