mod context;
pub mod store;

pub use context::{provide_store, use_store, StoreContext};
pub use store::{Command, DspStore, Record, Repository};
