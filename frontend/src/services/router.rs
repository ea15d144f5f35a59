use gloo::utils::{history, window};
use shared::BookingContext;
use std::collections::HashMap;
use tutor_booking::{Alert, AlertPresenter, Navigator, Route};
use web_sys::UrlSearchParams;

/// Navigation requested by the screen while it was borrowed
#[derive(Debug, Clone, PartialEq)]
pub enum NavigationEvent {
    Forward(Route),
    Back,
}

/// Queues navigation so callbacks fire after the screen borrow is released
#[derive(Debug, Default)]
pub struct QueuedNavigator {
    pending: Vec<NavigationEvent>,
}

impl QueuedNavigator {
    pub fn drain(&mut self) -> Vec<NavigationEvent> {
        std::mem::take(&mut self.pending)
    }
}

impl Navigator for QueuedNavigator {
    fn push(&mut self, route: Route) {
        self.pending.push(NavigationEvent::Forward(route));
    }

    fn back(&mut self) {
        self.pending.push(NavigationEvent::Back);
    }
}

/// Blocking `window.alert` dialog
#[derive(Debug, Default)]
pub struct BrowserAlerts;

impl AlertPresenter for BrowserAlerts {
    fn show(&mut self, alert: Alert) {
        gloo::dialogs::alert(&format!("{}\n\n{}", alert.title, alert.message));
    }
}

/// Read the booking context from the current page's query string
pub fn booking_context_from_location() -> BookingContext {
    let search = window().location().search().unwrap_or_default();
    let mut params = HashMap::new();

    match UrlSearchParams::new_with_str(&search) {
        Ok(query) => {
            for key in BookingContext::PARAM_KEYS {
                if let Some(value) = query.get(key) {
                    params.insert(key.to_string(), value);
                }
            }
        }
        Err(e) => {
            gloo::console::error!("Failed to parse booking parameters:", e);
        }
    }

    let missing = BookingContext::missing_keys(&params);
    if !missing.is_empty() {
        gloo::console::warn!(format!("Booking parameters missing: {}", missing.join(", ")));
    }

    BookingContext::from_params(&params)
}

/// Build `path?key=value&...` for the confirmation step
pub fn route_href(route: &Route) -> Result<String, String> {
    let params = route.params.to_query_params().map_err(|e| e.to_string())?;
    let query = UrlSearchParams::new().map_err(|e| format!("{:?}", e))?;
    for (key, value) in &params {
        query.append(key, value);
    }
    Ok(format!("{}?{}", route.path, String::from(query.to_string())))
}

pub fn open_route(route: &Route) {
    match route_href(route) {
        Ok(href) => {
            if let Err(e) = window().location().set_href(&href) {
                gloo::console::error!("Failed to open confirmation step:", e);
            }
        }
        Err(e) => {
            gloo::console::error!(format!("Failed to encode booking parameters: {}", e));
        }
    }
}

pub fn go_back() {
    if let Err(e) = history().back() {
        gloo::console::error!("Failed to go back:", e);
    }
}
