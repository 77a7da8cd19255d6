//! Demo sign-in: any email is accepted and remembered in localStorage

mod context;
mod session;
mod storage;

pub use context::{provide_auth, use_auth, AuthContext};
pub use session::{display_name, persist, reduce, restore, AuthAction, AuthState, USER_KEY};
pub use storage::{BrowserStorage, KeyValueStore, MemoryStorage};
