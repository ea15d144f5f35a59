//! Contact information step of the tutor booking wizard.
//!
//! `ContactInfoScreen` is the view-model a UI layer renders; routing and
//! alert dialogs are supplied through the `Navigator` and `AlertPresenter`
//! traits.

pub mod config;
pub mod domain;
pub mod navigation;
pub mod test_utils;
pub mod ui;

pub use config::{ContactFormConfig, PrefillPolicy};
pub use domain::{BookingSummary, ContactInfoService, SummaryRow};
pub use navigation::{Alert, AlertPresenter, Navigator, Route};
pub use ui::{
    ContactField, ContactFormState, ContactInfoScreen, InputKind, ScreenPhase, SubmitError,
    CONTINUE_LABEL, SCREEN_SUBTITLE, SCREEN_TITLE,
};
