//! Auth state and its transitions

use super::storage::KeyValueStore;

/// localStorage key holding the signed-in username
pub const USER_KEY: &str = "dsp_user";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<String>,
}

impl AuthState {
    pub fn signed_in(user: impl Into<String>) -> Self {
        Self {
            user: Some(user.into()),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthAction {
    Login { email: String },
    Logout,
}

/// Apply an action. Login never fails: the trimmed email becomes the username.
pub fn reduce(_state: &AuthState, action: AuthAction) -> AuthState {
    match action {
        AuthAction::Login { email } => AuthState::signed_in(email.trim()),
        AuthAction::Logout => AuthState::default(),
    }
}

/// Read the session left behind by a previous visit
pub fn restore(storage: &dyn KeyValueStore) -> AuthState {
    AuthState {
        user: storage
            .get(USER_KEY)
            .filter(|user| !user.trim().is_empty()),
    }
}

/// Mirror `state` into storage
pub fn persist(storage: &dyn KeyValueStore, state: &AuthState) {
    match &state.user {
        Some(user) => storage.set(USER_KEY, user),
        None => storage.delete(USER_KEY),
    }
}

/// Name shown in the header: the email's local part, or the username as-is
pub fn display_name(user: &str) -> &str {
    match user.split_once('@') {
        Some((local, _)) if !local.is_empty() => local,
        _ => user,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::MemoryStorage;
    use pretty_assertions::assert_eq;

    fn login(email: &str) -> AuthAction {
        AuthAction::Login {
            email: email.to_string(),
        }
    }

    #[test]
    fn test_login_accepts_any_email_and_trims() {
        let state = reduce(&AuthState::default(), login("  dispatcher@dsp-example.com "));
        assert_eq!(state, AuthState::signed_in("dispatcher@dsp-example.com"));
    }

    #[test]
    fn test_logout_always_clears() {
        let signed_in = AuthState::signed_in("ops@dsp-example.com");
        assert_eq!(reduce(&signed_in, AuthAction::Logout), AuthState::default());
        assert_eq!(reduce(&AuthState::default(), AuthAction::Logout), AuthState::default());
    }

    #[test]
    fn test_session_survives_reload_until_logout() {
        let storage = MemoryStorage::new();
        assert!(!restore(&storage).is_authenticated());

        let state = reduce(&AuthState::default(), login("ops@dsp-example.com"));
        persist(&storage, &state);

        // a reload only has storage to go on
        let reloaded = restore(&storage);
        assert_eq!(reloaded.user.as_deref(), Some("ops@dsp-example.com"));

        let state = reduce(&reloaded, AuthAction::Logout);
        persist(&storage, &state);
        assert_eq!(storage.get(USER_KEY), None);
        assert!(!restore(&storage).is_authenticated());
    }

    #[test]
    fn test_blank_stored_user_is_signed_out() {
        let storage = MemoryStorage::new();
        storage.set(USER_KEY, "   ");
        assert_eq!(restore(&storage), AuthState::default());
    }

    #[test]
    fn test_display_name() {
        assert_eq!(display_name("maria.lopez@dsp-example.com"), "maria.lopez");
        assert_eq!(display_name("dispatch"), "dispatch");
        assert_eq!(display_name("@weird"), "@weird");
    }
}
