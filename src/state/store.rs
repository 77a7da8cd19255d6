//! In-memory repository of every dashboard record.
//!
//! The store is seeded from [`crate::data`] at startup and is only ever
//! mutated through [`DspStore::dispatch`]. Nothing is persisted: a reload
//! resets the world to the seed data.

use crate::data;
use crate::error::StoreError;
use crate::models::*;

/// A record addressable by a string id
pub trait Record: Clone + 'static {
    /// Prefix for ids allocated by [`Repository::insert_with`]
    const PREFIX: &'static str;
    /// Human readable kind used in error messages
    const KIND: &'static str;

    fn id(&self) -> &str;
}

macro_rules! impl_record {
    ($ty:ty, $prefix:literal, $kind:literal, $field:ident) => {
        impl Record for $ty {
            const PREFIX: &'static str = $prefix;
            const KIND: &'static str = $kind;

            fn id(&self) -> &str {
                &self.$field
            }
        }
    };
}

impl_record!(Vehicle, "VEH", "vehicle", id);
impl_record!(VehicleAlert, "VAL", "vehicle alert", id);
impl_record!(MaintenanceRecord, "MNT", "maintenance record", id);
impl_record!(InspectionRecord, "INS", "inspection", id);
impl_record!(FleetUtilization, "UTL", "utilization entry", vehicle_id);
impl_record!(Driver, "DRV", "driver", id);
impl_record!(DriverAlert, "DAL", "driver alert", id);
impl_record!(DriverDocument, "DOC", "document", id);
impl_record!(DriverTraining, "TRN", "training", id);
impl_record!(SafetyCoaching, "CCH", "coaching session", id);
impl_record!(Shift, "SHF", "shift", id);
impl_record!(DeliveryRoute, "RTE", "route", id);
impl_record!(Availability, "AVL", "availability", driver_id);
impl_record!(PayrollEntry, "PAY", "payroll entry", id);
impl_record!(Timesheet, "TS", "timesheet", id);
impl_record!(DriverLocation, "LOC", "driver location", driver_id);
impl_record!(RescueOperation, "RSC", "rescue", id);
impl_record!(Incident, "INC", "incident", id);
impl_record!(ComplianceItem, "CMP", "compliance item", id);
impl_record!(RtsPackage, "RTS", "RTS package", id);
impl_record!(LostPackage, "LST", "lost package", id);
impl_record!(Asset, "AST", "asset", id);
impl_record!(DamageReport, "DMG", "damage report", id);

/// Records of one type, kept in insertion order
#[derive(Debug, Clone, PartialEq)]
pub struct Repository<T> {
    items: Vec<T>,
}

impl<T: Record> Repository<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }

    pub fn all(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut T> {
        self.items.iter_mut().find(|item| item.id() == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Allocate an id of the form `PREFIX-NNN` not used by any existing record
    pub fn next_id(&self) -> String {
        let mut n = self.items.len() + 1;
        loop {
            let id = format!("{}-{:03}", T::PREFIX, n);
            if !self.contains(&id) {
                return id;
            }
            n += 1;
        }
    }

    /// Append a record built from a freshly allocated id, returning that id
    pub fn insert_with(&mut self, build: impl FnOnce(String) -> T) -> String {
        let id = self.next_id();
        self.items.push(build(id.clone()));
        id
    }

    /// Check that `id` names an existing record
    pub fn require(&self, id: &str) -> Result<&T, StoreError> {
        self.get(id).ok_or_else(|| StoreError::UnknownReference {
            kind: T::KIND,
            id: id.to_string(),
        })
    }
}

impl<T: Record> Default for Repository<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

/// Mutations a page can request from the store
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    AddVehicle(NewVehicle),
    ScheduleMaintenance(NewMaintenance),
    AddDriver(NewDriver),
    ScheduleShift(NewShift),
    ReportIncident(NewIncident),
    RequestRescue(NewRescue),
    AdvanceRescue { id: String },
    ReportDamage(NewDamageReport),
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::AddVehicle(_) => "add_vehicle",
            Command::ScheduleMaintenance(_) => "schedule_maintenance",
            Command::AddDriver(_) => "add_driver",
            Command::ScheduleShift(_) => "schedule_shift",
            Command::ReportIncident(_) => "report_incident",
            Command::RequestRescue(_) => "request_rescue",
            Command::AdvanceRescue { .. } => "advance_rescue",
            Command::ReportDamage(_) => "report_damage",
        }
    }
}

/// Every repository the dashboard reads from
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DspStore {
    pub vehicles: Repository<Vehicle>,
    pub vehicle_alerts: Repository<VehicleAlert>,
    pub maintenance: Repository<MaintenanceRecord>,
    pub inspections: Repository<InspectionRecord>,
    pub utilization: Repository<FleetUtilization>,
    pub drivers: Repository<Driver>,
    pub driver_alerts: Repository<DriverAlert>,
    pub documents: Repository<DriverDocument>,
    pub training: Repository<DriverTraining>,
    pub coaching: Repository<SafetyCoaching>,
    pub shifts: Repository<Shift>,
    pub routes: Repository<DeliveryRoute>,
    pub availability: Repository<Availability>,
    pub payroll: Repository<PayrollEntry>,
    pub timesheets: Repository<Timesheet>,
    pub locations: Repository<DriverLocation>,
    pub rescues: Repository<RescueOperation>,
    pub incidents: Repository<Incident>,
    pub compliance: Repository<ComplianceItem>,
    pub rts: Repository<RtsPackage>,
    pub lost: Repository<LostPackage>,
    pub assets: Repository<Asset>,
    pub damage: Repository<DamageReport>,
}

impl DspStore {
    /// Store populated with the station's mock dataset
    pub fn seeded() -> Self {
        Self {
            vehicles: Repository::new(data::vehicles()),
            vehicle_alerts: Repository::new(data::vehicle_alerts()),
            maintenance: Repository::new(data::maintenance()),
            inspections: Repository::new(data::inspections()),
            utilization: Repository::new(data::utilization()),
            drivers: Repository::new(data::drivers()),
            driver_alerts: Repository::new(data::driver_alerts()),
            documents: Repository::new(data::documents()),
            training: Repository::new(data::training()),
            coaching: Repository::new(data::coaching()),
            shifts: Repository::new(data::shifts()),
            routes: Repository::new(data::routes()),
            availability: Repository::new(data::availability()),
            payroll: Repository::new(data::payroll()),
            timesheets: Repository::new(data::timesheets()),
            locations: Repository::new(data::locations()),
            rescues: Repository::new(data::rescues()),
            incidents: Repository::new(data::incidents()),
            compliance: Repository::new(data::compliance()),
            rts: Repository::new(data::rts_packages()),
            lost: Repository::new(data::lost_packages()),
            assets: Repository::new(data::assets()),
            damage: Repository::new(data::damage_reports()),
        }
    }

    pub fn driver_name(&self, id: &str) -> String {
        self.drivers
            .get(id)
            .map(|d| d.name.clone())
            .unwrap_or_else(|| id.to_string())
    }

    pub fn vehicle_label(&self, id: &str) -> String {
        self.vehicles
            .get(id)
            .map(|v| format!("{} ({})", v.plate, v.model))
            .unwrap_or_else(|| id.to_string())
    }

    pub fn route_code(&self, id: &str) -> String {
        self.routes
            .get(id)
            .map(|r| r.code.clone())
            .unwrap_or_else(|| id.to_string())
    }

    /// `(id, label)` pairs for the vehicle pickers in the modals
    pub fn vehicle_choices(&self) -> Vec<(String, String)> {
        self.vehicles
            .all()
            .iter()
            .filter(|v| v.status != VehicleStatus::Inactive)
            .map(|v| (v.id.clone(), format!("{} ({})", v.plate, v.model)))
            .collect()
    }

    /// Drivers who can still be assigned work
    pub fn driver_choices(&self) -> Vec<(String, String)> {
        self.drivers
            .all()
            .iter()
            .filter(|d| d.status != DriverStatus::Terminated)
            .map(|d| (d.id.clone(), d.name.clone()))
            .collect()
    }

    pub fn route_choices(&self) -> Vec<(String, String)> {
        self.routes
            .all()
            .iter()
            .map(|r| (r.id.clone(), format!("{} · {}", r.code, r.zone)))
            .collect()
    }

    pub fn asset_choices(&self) -> Vec<(String, String)> {
        self.assets
            .all()
            .iter()
            .filter(|a| a.status != AssetStatus::Retired)
            .map(|a| (a.id.clone(), format!("{} ({})", a.name, a.serial)))
            .collect()
    }

    /// Apply a command, returning the id of the record it created or changed
    pub fn dispatch(&mut self, command: Command) -> Result<String, StoreError> {
        let name = command.name();
        let result = self.apply(command);
        match &result {
            Ok(id) => log::info!("{} applied to {}", name, id),
            Err(e) => log::warn!("{} rejected: {}", name, e),
        }
        result
    }

    fn apply(&mut self, command: Command) -> Result<String, StoreError> {
        match command {
            Command::AddVehicle(new) => Ok(self.vehicles.insert_with(|id| Vehicle {
                id,
                vin: new.vin,
                model: new.model,
                plate: new.plate,
                mileage: new.mileage,
                branding: new.branding,
                registration_expiry: new.registration_expiry,
                insurance_expiry: new.insurance_expiry,
                status: VehicleStatus::Active,
            })),
            Command::ScheduleMaintenance(new) => {
                self.vehicles.require(&new.vehicle_id)?;
                Ok(self.maintenance.insert_with(|id| MaintenanceRecord {
                    id,
                    vehicle_id: new.vehicle_id,
                    service_type: new.service_type,
                    description: new.description,
                    scheduled_date: new.scheduled_date,
                    completed_date: None,
                    cost: new.estimated_cost,
                    vendor: new.vendor,
                    status: MaintenanceStatus::Scheduled,
                }))
            }
            Command::AddDriver(new) => Ok(self.drivers.insert_with(|id| Driver {
                id,
                name: new.name,
                email: new.email,
                phone: new.phone,
                license_number: new.license_number,
                license_state: new.license_state,
                license_expiry: new.license_expiry,
                background_check: BackgroundCheck::Pending,
                mentor_status: MentorStatus::NotEnrolled,
                delivery_score: 0.0,
                safety_score: 0.0,
                hire_date: new.hire_date,
                status: DriverStatus::Onboarding,
            })),
            Command::ScheduleShift(new) => {
                self.drivers.require(&new.driver_id)?;
                if let Some(route_id) = &new.route_id {
                    self.routes.require(route_id)?;
                }
                if let Some(backup_id) = &new.backup_driver_id {
                    self.drivers.require(backup_id)?;
                }
                Ok(self.shifts.insert_with(|id| Shift {
                    id,
                    driver_id: new.driver_id,
                    date: new.date,
                    start: new.start,
                    end: new.end,
                    wave: new.wave,
                    route_id: new.route_id,
                    backup_driver_id: new.backup_driver_id,
                    status: ShiftStatus::Scheduled,
                }))
            }
            Command::ReportIncident(new) => {
                self.drivers.require(&new.driver_id)?;
                if let Some(vehicle_id) = &new.vehicle_id {
                    self.vehicles.require(vehicle_id)?;
                }
                Ok(self.incidents.insert_with(|id| Incident {
                    id,
                    driver_id: new.driver_id,
                    vehicle_id: new.vehicle_id,
                    date: new.date,
                    kind: new.kind,
                    severity: new.severity,
                    location: new.location,
                    description: new.description,
                    status: IncidentStatus::Open,
                }))
            }
            Command::RequestRescue(new) => {
                self.routes.require(&new.route_id)?;
                self.drivers.require(&new.driver_id)?;
                if let Some(rescuer_id) = &new.rescuer_id {
                    self.drivers.require(rescuer_id)?;
                }
                Ok(self.rescues.insert_with(|id| RescueOperation {
                    id,
                    route_id: new.route_id,
                    driver_id: new.driver_id,
                    rescuer_id: new.rescuer_id,
                    packages: new.packages,
                    reason: new.reason,
                    status: RescueStatus::Requested,
                    requested_at: new.requested_at,
                }))
            }
            Command::AdvanceRescue { id } => {
                let rescue = self.rescues.get_mut(&id).ok_or_else(|| StoreError::NotFound {
                    kind: RescueOperation::KIND,
                    id: id.clone(),
                })?;
                let next = rescue
                    .status
                    .next()
                    .ok_or_else(|| StoreError::InvalidTransition {
                        id: id.clone(),
                        from: rescue.status.label(),
                    })?;
                rescue.status = next;
                Ok(id)
            }
            Command::ReportDamage(new) => {
                self.drivers.require(&new.reported_by)?;
                let asset = self
                    .assets
                    .get_mut(&new.asset_id)
                    .ok_or_else(|| StoreError::UnknownReference {
                        kind: Asset::KIND,
                        id: new.asset_id.clone(),
                    })?;
                asset.status = AssetStatus::Damaged;
                Ok(self.damage.insert_with(|id| DamageReport {
                    id,
                    asset_id: new.asset_id,
                    reported_by: new.reported_by,
                    date: new.date,
                    description: new.description,
                    repair_cost: new.repair_cost,
                    status: DamageStatus::Reported,
                }))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    #[test]
    fn test_choices_skip_unassignable_records() {
        let store = DspStore::seeded();
        let vehicles = store.vehicle_choices();
        assert_eq!(vehicles.len(), 7);
        assert!(vehicles.iter().all(|(id, _)| id != "VEH-008"));
        assert_eq!(store.driver_choices().len(), 9);
        assert_eq!(store.route_choices()[0].1, "CX101 · North Hills");
        assert!(store.asset_choices().iter().all(|(id, _)| id != "AST-010"));
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn new_vehicle() -> NewVehicle {
        NewVehicle {
            vin: "1FTBW3XM5HKA00001".into(),
            model: "Ford Transit 250".into(),
            plate: "TST-1001".into(),
            mileage: 1200,
            branding: BrandingStatus::Pending,
            registration_expiry: date(2025, 8, 1),
            insurance_expiry: date(2025, 2, 1),
        }
    }

    fn ids<T: Record>(repo: &Repository<T>) -> HashSet<String> {
        repo.all().iter().map(|r| r.id().to_string()).collect()
    }

    #[test]
    fn test_add_vehicle_appends_exactly_one_with_fresh_id() {
        let mut store = DspStore::seeded();
        let before = ids(&store.vehicles);

        let id = store.dispatch(Command::AddVehicle(new_vehicle())).unwrap();

        assert_eq!(store.vehicles.len(), before.len() + 1);
        assert!(!before.contains(&id));
        let added = store.vehicles.all().last().unwrap();
        assert_eq!(added.id, id);
        assert_eq!(added.status, VehicleStatus::Active);
        assert_eq!(added.plate, "TST-1001");
    }

    fn blank_vehicle(id: &str) -> Vehicle {
        Vehicle {
            id: id.to_string(),
            vin: String::new(),
            model: String::new(),
            plate: String::new(),
            mileage: 0,
            branding: BrandingStatus::Branded,
            registration_expiry: date(2025, 1, 1),
            insurance_expiry: date(2025, 1, 1),
            status: VehicleStatus::Active,
        }
    }

    #[test]
    fn test_next_id_starts_at_one() {
        let mut repo: Repository<Vehicle> = Repository::default();
        let id = repo.insert_with(|id| blank_vehicle(&id));
        assert_eq!(id, "VEH-001");
    }

    #[test]
    fn test_next_id_skips_taken_ids() {
        let mut repo = Repository::new(vec![blank_vehicle("VEH-002")]);
        assert_eq!(repo.next_id(), "VEH-003");

        let id = repo.insert_with(|id| blank_vehicle(&id));
        assert_eq!(id, "VEH-003");
        assert_eq!(repo.len(), 2);
    }

    #[test]
    fn test_schedule_maintenance_rejects_unknown_vehicle() {
        let mut store = DspStore::seeded();
        let before = store.maintenance.len();

        let result = store.dispatch(Command::ScheduleMaintenance(NewMaintenance {
            vehicle_id: "VEH-999".into(),
            service_type: "Oil Change".into(),
            description: String::new(),
            scheduled_date: date(2024, 7, 1),
            vendor: "Jiffy Fleet".into(),
            estimated_cost: None,
        }));

        assert_eq!(
            result,
            Err(StoreError::UnknownReference {
                kind: "vehicle",
                id: "VEH-999".into()
            })
        );
        assert_eq!(store.maintenance.len(), before);
    }

    #[test]
    fn test_schedule_shift_checks_route_and_backup() {
        let mut store = DspStore::seeded();
        let driver_id = store.drivers.all()[0].id.clone();
        let route_id = store.routes.all()[0].id.clone();

        let shift = NewShift {
            driver_id: driver_id.clone(),
            date: date(2024, 6, 10),
            start: chrono::NaiveTime::from_hms_opt(7, 0, 0).unwrap(),
            end: chrono::NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
            wave: Wave::First,
            route_id: Some(route_id),
            backup_driver_id: Some("DRV-404".into()),
        };

        assert!(matches!(
            store.dispatch(Command::ScheduleShift(shift.clone())),
            Err(StoreError::UnknownReference { kind: "driver", .. })
        ));

        let id = store
            .dispatch(Command::ScheduleShift(NewShift {
                backup_driver_id: None,
                ..shift
            }))
            .unwrap();
        let created = store.shifts.get(&id).unwrap();
        assert_eq!(created.status, ShiftStatus::Scheduled);
        assert_eq!(created.driver_id, driver_id);
    }

    #[test]
    fn test_advance_rescue_walks_to_completion() {
        let mut store = DspStore::seeded();
        let route_id = store.routes.all()[0].id.clone();
        let driver_id = store.drivers.all()[0].id.clone();
        let id = store
            .dispatch(Command::RequestRescue(NewRescue {
                route_id,
                driver_id,
                rescuer_id: None,
                packages: 40,
                reason: "Behind pace".into(),
                requested_at: date(2024, 6, 10).and_hms_opt(14, 0, 0).unwrap(),
            }))
            .unwrap();

        let advance = || Command::AdvanceRescue { id: id.clone() };
        for expected in [
            RescueStatus::Dispatched,
            RescueStatus::InProgress,
            RescueStatus::Completed,
        ] {
            store.dispatch(advance()).unwrap();
            assert_eq!(store.rescues.get(&id).unwrap().status, expected);
        }

        assert_eq!(
            store.dispatch(advance()),
            Err(StoreError::InvalidTransition {
                id: id.clone(),
                from: "Completed"
            })
        );
    }

    #[test]
    fn test_advance_missing_rescue() {
        let mut store = DspStore::seeded();
        assert!(matches!(
            store.dispatch(Command::AdvanceRescue { id: "RSC-999".into() }),
            Err(StoreError::NotFound { .. })
        ));
    }

    #[test]
    fn test_report_damage_marks_asset_damaged() {
        let mut store = DspStore::seeded();
        let asset_id = store
            .assets
            .all()
            .iter()
            .find(|a| a.status != AssetStatus::Damaged)
            .map(|a| a.id.clone())
            .unwrap();
        let reported_by = store.drivers.all()[0].id.clone();
        let before = store.damage.len();

        let id = store
            .dispatch(Command::ReportDamage(NewDamageReport {
                asset_id: asset_id.clone(),
                reported_by,
                date: date(2024, 6, 11),
                description: "Cracked screen".into(),
                repair_cost: 120.0,
            }))
            .unwrap();

        assert_eq!(store.damage.len(), before + 1);
        assert_eq!(store.damage.get(&id).unwrap().status, DamageStatus::Reported);
        assert_eq!(store.assets.get(&asset_id).unwrap().status, AssetStatus::Damaged);
    }

    #[test]
    fn test_seed_references_resolve() {
        let store = DspStore::seeded();

        for alert in store.vehicle_alerts.all() {
            assert!(store.vehicles.contains(&alert.vehicle_id), "{}", alert.id);
        }
        for record in store.maintenance.all() {
            assert!(store.vehicles.contains(&record.vehicle_id), "{}", record.id);
        }
        for inspection in store.inspections.all() {
            assert!(store.vehicles.contains(&inspection.vehicle_id));
            assert!(store.drivers.contains(&inspection.driver_id));
        }
        for shift in store.shifts.all() {
            assert!(store.drivers.contains(&shift.driver_id), "{}", shift.id);
            if let Some(route_id) = &shift.route_id {
                assert!(store.routes.contains(route_id), "{}", shift.id);
            }
            if let Some(backup) = &shift.backup_driver_id {
                assert!(store.drivers.contains(backup), "{}", shift.id);
            }
        }
        for location in store.locations.all() {
            assert!(store.drivers.contains(&location.driver_id));
            assert!(store.routes.contains(&location.route_id));
        }
        for incident in store.incidents.all() {
            assert!(store.drivers.contains(&incident.driver_id), "{}", incident.id);
        }
        for report in store.damage.all() {
            assert!(store.assets.contains(&report.asset_id), "{}", report.id);
            assert!(store.drivers.contains(&report.reported_by), "{}", report.id);
        }
        for package in store.rts.all() {
            assert!(store.drivers.contains(&package.driver_id));
            assert!(store.routes.contains(&package.route_id));
        }
        for package in store.lost.all() {
            assert!(store.drivers.contains(&package.driver_id));
            assert!(store.routes.contains(&package.route_id));
        }
    }

    #[test]
    fn test_seed_ids_are_unique() {
        let store = DspStore::seeded();
        assert_eq!(ids(&store.vehicles).len(), store.vehicles.len());
        assert_eq!(ids(&store.drivers).len(), store.drivers.len());
        assert_eq!(ids(&store.shifts).len(), store.shifts.len());
        assert_eq!(ids(&store.maintenance).len(), store.maintenance.len());
        assert_eq!(ids(&store.incidents).len(), store.incidents.len());
        assert_eq!(ids(&store.assets).len(), store.assets.len());
    }
}
