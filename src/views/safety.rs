use super::{matches_option, matches_search, percentage};
use crate::models::*;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct IncidentFilter {
    pub search: String,
    pub kind: Option<IncidentKind>,
    pub status: Option<IncidentStatus>,
}

impl IncidentFilter {
    pub fn matches(&self, incident: &Incident) -> bool {
        matches_option(self.kind, incident.kind)
            && matches_option(self.status, incident.status)
            && matches_search(
                &self.search,
                &[
                    incident.id.as_str(),
                    incident.driver_id.as_str(),
                    incident.location.as_str(),
                    incident.description.as_str(),
                ],
            )
    }
}

/// Matching incidents, newest first
pub fn filter_incidents<'a>(incidents: &'a [Incident], filter: &IncidentFilter) -> Vec<&'a Incident> {
    let mut rows: Vec<_> = incidents.iter().filter(|i| filter.matches(i)).collect();
    rows.sort_by(|a, b| b.date.cmp(&a.date));
    rows
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct IncidentStats {
    pub total: usize,
    pub open: usize,
    pub under_review: usize,
    pub resolved: usize,
    pub serious: usize,
}

pub fn incident_stats(incidents: &[Incident]) -> IncidentStats {
    let count = |status| incidents.iter().filter(|i| i.status == status).count();

    IncidentStats {
        total: incidents.len(),
        open: count(IncidentStatus::Open),
        under_review: count(IncidentStatus::UnderReview),
        resolved: count(IncidentStatus::Resolved),
        serious: incidents
            .iter()
            .filter(|i| i.severity >= Severity::High)
            .count(),
    }
}

pub fn filter_compliance(items: &[ComplianceItem], status: Option<ComplianceStatus>) -> Vec<&ComplianceItem> {
    let mut rows: Vec<_> = items
        .iter()
        .filter(|i| matches_option(status, i.status))
        .collect();
    rows.sort_by_key(|i| i.due);
    rows
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComplianceStats {
    pub compliant: usize,
    pub at_risk: usize,
    pub non_compliant: usize,
    pub compliance_rate: f64,
}

pub fn compliance_stats(items: &[ComplianceItem]) -> ComplianceStats {
    let count = |status| items.iter().filter(|i| i.status == status).count();
    let compliant = count(ComplianceStatus::Compliant);

    ComplianceStats {
        compliant,
        at_risk: count(ComplianceStatus::AtRisk),
        non_compliant: count(ComplianceStatus::NonCompliant),
        compliance_rate: percentage(compliant, items.len()),
    }
}

pub fn filter_coaching(sessions: &[SafetyCoaching], status: Option<CoachingStatus>) -> Vec<&SafetyCoaching> {
    let mut rows: Vec<_> = sessions
        .iter()
        .filter(|s| matches_option(status, s.status))
        .collect();
    rows.sort_by(|a, b| b.date.cmp(&a.date));
    rows
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CoachingStats {
    pub scheduled: usize,
    pub completed: usize,
    pub follow_up: usize,
}

pub fn coaching_stats(sessions: &[SafetyCoaching]) -> CoachingStats {
    let count = |status| sessions.iter().filter(|s| s.status == status).count();

    CoachingStats {
        scheduled: count(CoachingStatus::Scheduled),
        completed: count(CoachingStatus::Completed),
        follow_up: count(CoachingStatus::FollowUp),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data;
    use crate::models::Labeled;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_incident_stats() {
        let stats = incident_stats(&data::incidents());
        assert_eq!(stats.open, 2);
        assert_eq!(stats.under_review, 1);
        assert_eq!(stats.resolved, 3);
        assert_eq!(stats.serious, 2);
    }

    #[test]
    fn test_status_filters_match_counts() {
        let incidents = data::incidents();
        for status in IncidentStatus::all() {
            let filter = IncidentFilter {
                status: Some(*status),
                ..Default::default()
            };
            let expected = incidents.iter().filter(|i| i.status == *status).count();
            assert_eq!(filter_incidents(&incidents, &filter).len(), expected);
        }
    }

    #[test]
    fn test_search_description() {
        let incidents = data::incidents();
        let filter = IncidentFilter {
            search: "dog bite".into(),
            ..Default::default()
        };
        let rows = filter_incidents(&incidents, &filter);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].kind, IncidentKind::Injury);
    }

    #[test]
    fn test_compliance_rate() {
        let stats = compliance_stats(&data::compliance());
        assert_eq!(stats.compliant, 4);
        assert_eq!(stats.compliance_rate, 50.0);
        assert_eq!(stats.at_risk + stats.non_compliant, 4);
    }

    #[test]
    fn test_coaching_stats() {
        let sessions = data::coaching();
        let stats = coaching_stats(&sessions);
        assert_eq!(stats.scheduled, 2);
        assert_eq!(
            filter_coaching(&sessions, Some(CoachingStatus::FollowUp)).len(),
            stats.follow_up
        );
    }
}
