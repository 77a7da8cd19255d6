use std::rc::Rc;

use leptos::*;
use leptos_router::*;

use crate::auth::{provide_auth, BrowserStorage};
use crate::components::Shell;
use crate::config::{provide_config, AppConfig};
use crate::pages::*;
use crate::state::provide_store;

/// Main application component with routing
#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::from_env();
    log::debug!("Loaded config: {:?}", config);

    provide_config(config);
    provide_auth(Rc::new(BrowserStorage));
    provide_store();

    view! {
        <Router>
            <Routes>
                <Route path="/login" view=LoginPage />
                <Route path="/" view=Shell>
                    <Route path="" view=OverviewPage />

                    <Route path="fleet" view=VehiclesPage />
                    <Route path="fleet/maintenance" view=MaintenancePage />
                    <Route path="fleet/inspections" view=InspectionsPage />
                    <Route path="fleet/utilization" view=UtilizationPage />
                    <Route path="fleet/alerts" view=VehicleAlertsPage />

                    <Route path="drivers" view=DriversPage />
                    <Route path="drivers/documents" view=DocumentsPage />
                    <Route path="drivers/training" view=TrainingPage />
                    <Route path="drivers/performance" view=PerformancePage />
                    <Route path="drivers/alerts" view=DriverAlertsPage />

                    <Route path="scheduling" view=ShiftsPage />
                    <Route path="scheduling/routes" view=RoutesPage />
                    <Route path="scheduling/availability" view=AvailabilityPage />

                    <Route path="payroll" view=PayrollPage />
                    <Route path="payroll/timesheets" view=TimesheetsPage />

                    <Route path="dispatch" view=DispatchPage />
                    <Route path="dispatch/rescue" view=RescuePage />

                    <Route path="safety" view=IncidentsPage />
                    <Route path="safety/coaching" view=CoachingPage />
                    <Route path="safety/compliance" view=CompliancePage />

                    <Route path="packages" view=ReturnToStationPage />
                    <Route path="packages/lost" view=LostPackagesPage />

                    <Route path="inventory" view=AssetsPage />
                    <Route path="inventory/damage" view=DamageReportsPage />

                    <Route path="analytics" view=AnalyticsPage />

                    <Route path="*any" view=NotFound />
                </Route>
            </Routes>
        </Router>
    }
}
