//! # Contact Info Screen
//!
//! View-model of the "Your Contact Information" step of the booking wizard.
//!
//! ## Responsibilities:
//! - Owning the contact form state for the lifetime of the screen
//! - Re-applying signed-in user values according to the prefill policy
//! - Validating on "Continue" and navigating forward at most once
//! - Showing the blocking alert when validation fails
//!
//! The router and the alert dialog are injected so the screen can be driven
//! without a UI toolkit.

use shared::{AuthSession, BookingContext, ContactValidationError};

use crate::config::{ContactFormConfig, PrefillPolicy};
use crate::domain::{BookingSummary, ContactInfoService};
use crate::navigation::{Alert, AlertPresenter, Navigator};
use crate::ui::state::{ContactField, ContactFormState};

pub const SCREEN_TITLE: &str = "Your Contact Information";
pub const SCREEN_SUBTITLE: &str = "Please provide your details so the tutor can contact you";
pub const CONTINUE_LABEL: &str = "Continue to Payment";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenPhase {
    Editing,
    /// Forward navigation happened; the router is replacing this screen
    NavigatedAway,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error(transparent)]
    Validation(#[from] ContactValidationError),
    #[error("Contact details were already submitted")]
    AlreadySubmitted,
}

pub struct ContactInfoScreen<N: Navigator, A: AlertPresenter> {
    service: ContactInfoService,
    context: BookingContext,
    form: ContactFormState,
    phase: ScreenPhase,
    /// Last session values seen, so unchanged sessions are not re-applied
    last_session: AuthSession,
    navigator: N,
    alerts: A,
}

impl<N: Navigator, A: AlertPresenter> ContactInfoScreen<N, A> {
    /// Mount the screen with the default configuration
    pub fn mount(context: BookingContext, session: &AuthSession, navigator: N, alerts: A) -> Self {
        Self::mount_with_config(
            ContactFormConfig::default(),
            context,
            session,
            navigator,
            alerts,
        )
    }

    pub fn mount_with_config(
        config: ContactFormConfig,
        context: BookingContext,
        session: &AuthSession,
        navigator: N,
        alerts: A,
    ) -> Self {
        log::info!(
            "Mounting contact info screen for slot '{}' (prefill: {:?})",
            context.availability_slot_id,
            config.prefill_policy
        );

        Self {
            service: ContactInfoService::with_config(config),
            context,
            form: ContactFormState::from_session(session),
            phase: ScreenPhase::Editing,
            last_session: session.clone(),
            navigator,
            alerts,
        }
    }

    pub fn context(&self) -> &BookingContext {
        &self.context
    }

    pub fn form(&self) -> &ContactFormState {
        &self.form
    }

    pub fn phase(&self) -> ScreenPhase {
        self.phase
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    pub fn navigator_mut(&mut self) -> &mut N {
        &mut self.navigator
    }

    pub fn alerts(&self) -> &A {
        &self.alerts
    }

    pub fn value(&self, field: ContactField) -> &str {
        self.form.value(field)
    }

    pub fn booking_summary(&self) -> BookingSummary {
        self.service.booking_summary(&self.context)
    }

    /// Controlled-input change handler
    pub fn set_field(&mut self, field: ContactField, value: impl Into<String>) {
        self.form.set(field, value);
    }

    pub fn set_student_name(&mut self, value: impl Into<String>) {
        self.form.set_student_name(value);
    }

    pub fn set_student_email(&mut self, value: impl Into<String>) {
        self.form.set_student_email(value);
    }

    pub fn set_student_phone(&mut self, value: impl Into<String>) {
        self.form.set_student_phone(value);
    }

    pub fn set_student_address(&mut self, value: impl Into<String>) {
        self.form.set_student_address(value);
    }

    pub fn set_additional_notes(&mut self, value: impl Into<String>) {
        self.form.set_additional_notes(value);
    }

    /// Observer hook for the auth/profile provider.
    ///
    /// Under `PrefillPolicy::Observe` a changed session overwrites name and
    /// email even if the user already edited them.
    pub fn session_changed(&mut self, session: &AuthSession) {
        if *session == self.last_session {
            return;
        }
        self.last_session = session.clone();

        match self.service.config().prefill_policy {
            PrefillPolicy::Observe => {
                log::debug!("Session changed, re-applying name and email");
                self.form.apply_session(session);
            }
            PrefillPolicy::Snapshot => {
                log::debug!("Session changed after mount, ignored by snapshot prefill");
            }
        }
    }

    /// "Continue" action: validate, then push the confirmation step
    pub fn submit(&mut self) -> Result<(), SubmitError> {
        if self.phase == ScreenPhase::NavigatedAway {
            log::warn!("Ignoring submit on a screen that already navigated away");
            return Err(SubmitError::AlreadySubmitted);
        }

        match self
            .service
            .prepare_confirmation(&self.context, self.form.details())
        {
            Ok(route) => {
                log::info!("Navigating to {}", route.path);
                self.phase = ScreenPhase::NavigatedAway;
                self.navigator.push(route);
                Ok(())
            }
            Err(e) => {
                self.alerts.show(Alert::from(e));
                Err(SubmitError::Validation(e))
            }
        }
    }

    /// Back control: pop without confirmation
    pub fn go_back(&mut self) {
        log::debug!("Leaving contact info screen");
        self.navigator.back();
    }
}
