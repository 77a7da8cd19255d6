//! Creation modals. Each one owns a [`crate::forms`] state, validates on
//! submit and hands the typed payload to the page's `on_create` callback,
//! which dispatches it to the store.

mod dispatch;
mod drivers;
mod fleet;
mod inventory;
mod safety;
mod scheduling;

pub use dispatch::RequestRescueModal;
pub use drivers::AddDriverModal;
pub use fleet::{AddVehicleModal, ScheduleMaintenanceModal};
pub use inventory::ReportDamageModal;
pub use safety::ReportIncidentModal;
pub use scheduling::ScheduleShiftModal;
