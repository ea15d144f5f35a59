use gloo::storage::{LocalStorage, Storage};
use shared::AuthSession;

/// Key under which the sign-in flow stores the current session
pub const SESSION_STORAGE_KEY: &str = "tutor_booking.auth_session";

/// Current session from local storage, anonymous when nobody is signed in
pub fn load_session() -> AuthSession {
    match LocalStorage::get::<AuthSession>(SESSION_STORAGE_KEY) {
        Ok(session) => session,
        Err(e) => {
            gloo::console::debug!(format!("No stored session ({}), continuing anonymously", e));
            AuthSession::anonymous()
        }
    }
}
