use leptos::*;

use super::store::{Command, DspStore};
use crate::error::StoreError;

/// Shared store handle; every page reads and dispatches through it
#[derive(Clone, Copy)]
pub struct StoreContext {
    pub store: RwSignal<DspStore>,
}

impl StoreContext {
    pub fn new(store: DspStore) -> Self {
        Self {
            store: create_rw_signal(store),
        }
    }

    /// Apply `command` and notify readers
    pub fn dispatch(&self, command: Command) -> Result<String, StoreError> {
        self.store
            .try_update(|store| store.dispatch(command))
            .unwrap_or(Err(StoreError::Disposed))
    }

    /// Reactive read of a derived value
    pub fn with<O>(&self, f: impl FnOnce(&DspStore) -> O) -> O {
        self.store.with(f)
    }
}

/// Provide the seeded store at the root of the app
pub fn provide_store() -> StoreContext {
    let ctx = StoreContext::new(DspStore::seeded());
    provide_context(ctx);
    ctx
}

/// Hook to access the store
pub fn use_store() -> StoreContext {
    use_context::<StoreContext>().expect("StoreContext must be provided by a parent component")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::store::DspStore;

    #[test]
    fn test_dispatch_updates_the_signal() {
        let runtime = create_runtime();
        let ctx = StoreContext::new(DspStore::seeded());
        let before = ctx.store.with_untracked(|s| s.rescues.len());

        let id = ctx
            .dispatch(Command::AdvanceRescue { id: "RSC-001".into() })
            .unwrap();
        assert_eq!(id, "RSC-001");

        let missing = ctx.dispatch(Command::AdvanceRescue { id: "RSC-404".into() });
        assert!(matches!(missing, Err(StoreError::NotFound { .. })));
        assert_eq!(ctx.store.with_untracked(|s| s.rescues.len()), before);

        runtime.dispose();
    }
}
