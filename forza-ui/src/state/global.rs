//! Site-wide State
//!
//! The login flag and the toast slots, shared through Leptos context.

use gloo_timers::callback::Timeout;
use leptos::*;

use crate::state::auth;

const SUCCESS_TOAST_MS: u32 = 3000;
const ERROR_TOAST_MS: u32 = 5000;

#[derive(Clone)]
pub struct GlobalState {
    /// Mirrors the login flag in local storage
    pub logged_in: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    pub success: RwSignal<Option<String>>,
}

/// Read the stored login flag and provide the state to the component tree
pub fn provide_global_state() {
    provide_context(GlobalState {
        logged_in: create_rw_signal(auth::is_logged_in()),
        error: create_rw_signal(None),
        success: create_rw_signal(None),
    });
}

impl GlobalState {
    pub fn show_success(&self, message: &str) {
        flash(self.success, message, SUCCESS_TOAST_MS);
    }

    pub fn show_error(&self, message: &str) {
        flash(self.error, message, ERROR_TOAST_MS);
    }
}

/// Put `message` in `slot` until it expires or a newer message replaces it
fn flash(slot: RwSignal<Option<String>>, message: &str, duration_ms: u32) {
    let message = message.to_string();
    slot.set(Some(message.clone()));

    Timeout::new(duration_ms, move || {
        if slot.get_untracked().as_deref() == Some(message.as_str()) {
            slot.set(None);
        }
    })
    .forget();
}
