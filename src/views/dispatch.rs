use super::{average, matches_option};
use crate::models::*;

/// Drivers on the road below this completion share are flagged for rescue
pub const BEHIND_PACE_PERCENT: f64 = 50.0;

fn on_the_road(location: &DriverLocation) -> bool {
    matches!(
        location.activity,
        DriverActivity::OnRoute | DriverActivity::Break
    )
}

pub fn is_behind_pace(location: &DriverLocation) -> bool {
    on_the_road(location) && location.progress() < BEHIND_PACE_PERCENT
}

pub fn filter_locations(
    locations: &[DriverLocation],
    activity: Option<DriverActivity>,
) -> Vec<&DriverLocation> {
    let mut rows: Vec<_> = locations
        .iter()
        .filter(|l| matches_option(activity, l.activity))
        .collect();
    rows.sort_by(|a, b| a.progress().total_cmp(&b.progress()));
    rows
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DispatchSummary {
    pub on_route: usize,
    pub at_station: usize,
    pub average_progress: f64,
    pub behind_pace: usize,
    pub stops_remaining: u32,
}

pub fn dispatch_summary(locations: &[DriverLocation]) -> DispatchSummary {
    let count = |activity| locations.iter().filter(|l| l.activity == activity).count();

    DispatchSummary {
        on_route: count(DriverActivity::OnRoute),
        at_station: count(DriverActivity::AtStation),
        average_progress: average(
            locations
                .iter()
                .filter(|l| on_the_road(l))
                .map(DriverLocation::progress),
        ),
        behind_pace: locations.iter().filter(|l| is_behind_pace(l)).count(),
        stops_remaining: locations
            .iter()
            .map(|l| l.stops_total.saturating_sub(l.stops_completed))
            .sum(),
    }
}

pub fn filter_rescues(rescues: &[RescueOperation], status: Option<RescueStatus>) -> Vec<&RescueOperation> {
    let mut rows: Vec<_> = rescues
        .iter()
        .filter(|r| matches_option(status, r.status))
        .collect();
    rows.sort_by(|a, b| b.requested_at.cmp(&a.requested_at));
    rows
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RescueStats {
    pub active: usize,
    pub awaiting_rescuer: usize,
    pub completed: usize,
    pub packages_rescued: u32,
}

pub fn rescue_stats(rescues: &[RescueOperation]) -> RescueStats {
    let completed = || rescues.iter().filter(|r| r.status == RescueStatus::Completed);

    RescueStats {
        active: rescues.len() - completed().count(),
        awaiting_rescuer: rescues
            .iter()
            .filter(|r| r.status != RescueStatus::Completed && r.rescuer_id.is_none())
            .count(),
        completed: completed().count(),
        packages_rescued: completed().map(|r| r.packages).sum(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_dispatch_summary() {
        let summary = dispatch_summary(&data::locations());
        assert_eq!(summary.on_route, 4);
        assert_eq!(summary.at_station, 1);
        assert_eq!(summary.behind_pace, 2);
        assert_eq!(summary.stops_remaining, 44 + 51 + 104 + 37 + 76 + 156);
    }

    #[test]
    fn test_locations_slowest_first() {
        let locations = data::locations();
        let rows = filter_locations(&locations, Some(DriverActivity::OnRoute));
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0].driver_id, "DRV-005");
    }

    #[test]
    fn test_rescue_stats() {
        let rescues = data::rescues();
        let stats = rescue_stats(&rescues);
        assert_eq!(stats.active, 2);
        assert_eq!(stats.awaiting_rescuer, 1);
        assert_eq!(stats.packages_rescued, 30);
        assert_eq!(
            filter_rescues(&rescues, Some(RescueStatus::Completed)).len(),
            stats.completed
        );
    }
}
