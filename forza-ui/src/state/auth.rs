//! Login Flag
//!
//! The site's "login" is a flag in local storage. Nothing is verified.

use leptos::*;
use leptos_router::NavigateOptions;

use crate::state::global::GlobalState;

/// Local storage key holding `"true"` while logged in
pub const AUTH_FLAG_KEY: &str = "forza_logged_in";

/// Where the login page sends the user when no redirect is given
pub const DEFAULT_REDIRECT: &str = "/chat";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

pub fn is_logged_in() -> bool {
    local_storage()
        .and_then(|storage| storage.get_item(AUTH_FLAG_KEY).ok().flatten())
        .map(|value| value == "true")
        .unwrap_or(false)
}

/// Set the flag and publish it to the header
pub fn log_in(state: &GlobalState) {
    if let Some(storage) = local_storage() {
        if storage.set_item(AUTH_FLAG_KEY, "true").is_err() {
            web_sys::console::error_1(&"Failed to store login flag".into());
        }
    }
    state.logged_in.set(true);
}

pub fn log_out(state: &GlobalState) {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(AUTH_FLAG_KEY);
    }
    state.logged_in.set(false);
}

/// The only check the login forms make
pub fn is_valid_email(email: &str) -> bool {
    email.contains('@')
}

/// Keep redirects on this site: only absolute paths, never `//host`
pub fn sanitize_redirect(redirect: Option<&str>) -> String {
    match redirect.map(str::trim) {
        Some(path) if path.starts_with('/') && !path.starts_with("//") => path.to_string(),
        _ => DEFAULT_REDIRECT.to_string(),
    }
}

/// Login page URL that returns to `path` afterwards
pub fn login_redirect_url(path: &str) -> String {
    format!("/login?redirect={}", urlencoding::encode(path))
}

/// Send logged-out visitors to the login page.
///
/// Renders its children only while the flag is set.
#[component]
pub fn RequireLogin(children: ChildrenFn) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let location = leptos_router::use_location();
    let navigate = leptos_router::use_navigate();

    let logged_in = state.logged_in;
    create_effect(move |_| {
        if !logged_in.get() {
            let target = login_redirect_url(&location.pathname.get_untracked());
            navigate(
                &target,
                NavigateOptions {
                    replace: true,
                    ..Default::default()
                },
            );
        }
    });

    move || logged_in.get().then(|| children())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_check() {
        assert!(is_valid_email("satoshi@forza.ai"));
        assert!(is_valid_email("@"));
        assert!(!is_valid_email("satoshi"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_sanitize_redirect() {
        assert_eq!(sanitize_redirect(None), "/chat");
        assert_eq!(sanitize_redirect(Some("/code-explainer")), "/code-explainer");
        assert_eq!(sanitize_redirect(Some("https://evil.example")), "/chat");
        assert_eq!(sanitize_redirect(Some("//evil.example")), "/chat");
        assert_eq!(sanitize_redirect(Some("")), "/chat");
    }

    #[test]
    fn test_login_redirect_url() {
        assert_eq!(login_redirect_url("/chat"), "/login?redirect=%2Fchat");
        assert_eq!(
            login_redirect_url("/code-explainer"),
            "/login?redirect=%2Fcode-explainer"
        );
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_login_flag_in_local_storage() {
        let runtime = create_runtime();
        let state = GlobalState {
            logged_in: create_rw_signal(false),
            error: create_rw_signal(None),
            success: create_rw_signal(None),
        };

        log_out(&state);
        assert!(!is_logged_in());

        log_in(&state);
        assert!(is_logged_in());
        assert!(state.logged_in.get_untracked());

        log_out(&state);
        assert!(!is_logged_in());
        assert!(!state.logged_in.get_untracked());

        runtime.dispose();
    }
}
