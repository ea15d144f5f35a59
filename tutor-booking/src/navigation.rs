//! Seams between the contact step and the host app: routing and alert dialogs.

use shared::ConfirmParams;

/// Destination of a forward navigation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub path: String,
    pub params: ConfirmParams,
}

/// Router stack of the booking wizard
pub trait Navigator {
    /// Push the next wizard step
    fn push(&mut self, route: Route);

    /// Pop back to the previous step
    fn back(&mut self);
}

/// Blocking dialog with a single acknowledgement action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

impl Alert {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }
}

impl From<shared::ContactValidationError> for Alert {
    fn from(error: shared::ContactValidationError) -> Self {
        Alert::new(error.title(), error.to_string())
    }
}

pub trait AlertPresenter {
    fn show(&mut self, alert: Alert);
}
