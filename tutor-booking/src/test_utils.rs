//! Recording doubles for the router and alert seams, plus fixture data.
//!
//! Used by unit tests, integration tests and hosts that want a headless run.

use shared::BookingContext;

use crate::navigation::{Alert, AlertPresenter, Navigator, Route};

/// Navigator that records every call instead of routing
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    pub pushed: Vec<Route>,
    pub back_count: usize,
}

impl Navigator for RecordingNavigator {
    fn push(&mut self, route: Route) {
        self.pushed.push(route);
    }

    fn back(&mut self) {
        self.back_count += 1;
    }
}

/// Alert presenter that records alerts instead of showing them
#[derive(Debug, Default)]
pub struct RecordingAlerts {
    pub shown: Vec<Alert>,
}

impl AlertPresenter for RecordingAlerts {
    fn show(&mut self, alert: Alert) {
        self.shown.push(alert);
    }
}

/// Booking context as produced by the slot selection step
pub fn sample_context() -> BookingContext {
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
