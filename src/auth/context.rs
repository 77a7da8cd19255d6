use std::rc::Rc;

use leptos::*;

use super::session::{persist, reduce, restore, AuthAction, AuthState};
use super::storage::KeyValueStore;

/// Auth context shared by the guard, the login page and the header
#[derive(Clone, Copy)]
pub struct AuthContext {
    pub state: ReadSignal<AuthState>,
    set_state: WriteSignal<AuthState>,
    storage: StoredValue<Rc<dyn KeyValueStore>>,
}

impl AuthContext {
    /// Restore the session from `storage` and wrap it in a signal
    pub fn new(storage: Rc<dyn KeyValueStore>) -> Self {
        let initial = restore(storage.as_ref());
        if let Some(user) = &initial.user {
            log::debug!("Restored session for {}", user);
        }

        let (state, set_state) = create_signal(initial);
        Self {
            state,
            set_state,
            storage: store_value(storage),
        }
    }

    pub fn dispatch(&self, action: AuthAction) {
        let next = self.state.with_untracked(|current| reduce(current, action));
        self.storage
            .with_value(|storage| persist(storage.as_ref(), &next));
        self.set_state.set(next);
    }

    pub fn login(&self, email: &str) {
        log::info!("Signing in {}", email.trim());
        self.dispatch(AuthAction::Login {
            email: email.to_string(),
        });
    }

    pub fn logout(&self) {
        log::info!("Signing out");
        self.dispatch(AuthAction::Logout);
    }

    /// Reactive: re-runs the caller when the session changes
    pub fn is_authenticated(&self) -> bool {
        self.state.with(AuthState::is_authenticated)
    }

    pub fn user(&self) -> Option<String> {
        self.state.with(|s| s.user.clone())
    }
}

/// Provide the auth context at the root of the app
pub fn provide_auth(storage: Rc<dyn KeyValueStore>) -> AuthContext {
    let auth = AuthContext::new(storage);
    provide_context(auth);
    auth
}

/// Hook to access the auth context
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext must be provided by a parent component")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{MemoryStorage, USER_KEY};

    #[test]
    fn test_login_and_logout_write_through_to_storage() {
        let runtime = create_runtime();
        let storage = MemoryStorage::new();
        let auth = AuthContext::new(Rc::new(storage.clone()));
        assert!(!auth.state.get_untracked().is_authenticated());

        auth.login(" ops@dsp-example.com ");
        assert_eq!(storage.get(USER_KEY).as_deref(), Some("ops@dsp-example.com"));

        let reloaded = AuthContext::new(Rc::new(storage.clone()));
        assert_eq!(
            reloaded.state.get_untracked().user.as_deref(),
            Some("ops@dsp-example.com")
        );

        reloaded.logout();
        assert_eq!(storage.get(USER_KEY), None);
        assert!(!reloaded.state.get_untracked().is_authenticated());

        runtime.dispose();
    }

    #[test]
    #[should_panic(expected = "AuthContext must be provided")]
    fn test_use_auth_outside_provider_panics() {
        let _runtime = create_runtime();
        use_auth();
    }
}
