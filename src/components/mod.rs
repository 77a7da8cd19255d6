pub mod common;
pub mod inputs;
pub mod layout;
pub mod modal;
pub mod modals;

pub use common::{
    DataTable, EmptyState, ExportButton, PageHeader, PlaceholderCard, StatCard, StatGrid,
    StatusBadge,
};
pub use inputs::{ChoiceSelect, EnumSelect, FilterBar, FilterSelect, SearchInput, TextField};
pub use layout::Shell;
pub use modal::Modal;
