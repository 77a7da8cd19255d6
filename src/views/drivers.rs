use chrono::NaiveDate;

use super::{average, matches_option, matches_search, percentage};
use crate::models::labeled_enum;
use crate::models::*;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DriverFilter {
    pub search: String,
    pub status: Option<DriverStatus>,
}

impl DriverFilter {
    pub fn matches(&self, driver: &Driver) -> bool {
        matches_option(self.status, driver.status)
            && matches_search(
                &self.search,
                &[
                    driver.id.as_str(),
                    driver.name.as_str(),
                    driver.email.as_str(),
                    driver.license_number.as_str(),
                ],
            )
    }
}

pub fn filter_drivers<'a>(drivers: &'a [Driver], filter: &DriverFilter) -> Vec<&'a Driver> {
    drivers.iter().filter(|d| filter.matches(d)).collect()
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DriverStats {
    pub total: usize,
    pub active: usize,
    pub onboarding: usize,
    pub on_leave: usize,
    /// Averages cover active drivers only; new hires have no scores yet
    pub average_delivery_score: f64,
    pub average_safety_score: f64,
    pub pending_background_checks: usize,
}

pub fn driver_stats(drivers: &[Driver]) -> DriverStats {
    let count = |status| drivers.iter().filter(|d| d.status == status).count();
    let active = || drivers.iter().filter(|d| d.status == DriverStatus::Active);

    DriverStats {
        total: drivers.len(),
        active: count(DriverStatus::Active),
        onboarding: count(DriverStatus::Onboarding),
        on_leave: count(DriverStatus::OnLeave),
        average_delivery_score: average(active().map(|d| d.delivery_score)),
        average_safety_score: average(active().map(|d| d.safety_score)),
        pending_background_checks: drivers
            .iter()
            .filter(|d| d.background_check != BackgroundCheck::Clear)
            .count(),
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentFilter {
    pub status: Option<DocumentStatus>,
    pub doc_type: Option<DocumentType>,
}

/// Matching documents, soonest expiry first; non-expiring documents last
pub fn filter_documents<'a>(
    documents: &'a [DriverDocument],
    filter: &DocumentFilter,
    today: NaiveDate,
) -> Vec<&'a DriverDocument> {
    let mut rows: Vec<_> = documents
        .iter()
        .filter(|d| matches_option(filter.status, d.status(today)))
        .filter(|d| matches_option(filter.doc_type, d.doc_type))
        .collect();
    rows.sort_by_key(|d| d.expiry.unwrap_or(NaiveDate::MAX));
    rows
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentStats {
    pub valid: usize,
    pub expiring_soon: usize,
    pub expired: usize,
}

pub fn document_stats(documents: &[DriverDocument], today: NaiveDate) -> DocumentStats {
    let count = |status| documents.iter().filter(|d| d.status(today) == status).count();

    DocumentStats {
        valid: count(DocumentStatus::Valid),
        expiring_soon: count(DocumentStatus::ExpiringSoon),
        expired: count(DocumentStatus::Expired),
    }
}

pub fn filter_training<'a>(
    training: &'a [DriverTraining],
    status: Option<TrainingStatus>,
    today: NaiveDate,
) -> Vec<&'a DriverTraining> {
    let mut rows: Vec<_> = training
        .iter()
        .filter(|t| matches_option(status, t.status(today)))
        .collect();
    rows.sort_by_key(|t| t.due);
    rows
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrainingStats {
    pub assigned: usize,
    pub completed: usize,
    pub overdue: usize,
    pub completion_rate: f64,
    /// Mean over scored completions
    pub average_score: f64,
}

pub fn training_stats(training: &[DriverTraining], today: NaiveDate) -> TrainingStats {
    let count = |status| training.iter().filter(|t| t.status(today) == status).count();
    let completed = count(TrainingStatus::Completed);

    TrainingStats {
        assigned: training.len(),
        completed,
        overdue: count(TrainingStatus::Overdue),
        completion_rate: percentage(completed, training.len()),
        average_score: average(training.iter().filter_map(|t| t.score)),
    }
}

labeled_enum! {
    /// Weekly scorecard tier derived from the delivery score
    pub enum PerformanceTier {
        Fantastic => ("fantastic", "Fantastic"),
        Great => ("great", "Great"),
        Fair => ("fair", "Fair"),
        Poor => ("poor", "Poor"),
    }
}

impl PerformanceTier {
    pub fn for_score(score: f64) -> Self {
        if score >= 95.0 {
            PerformanceTier::Fantastic
        } else if score >= 90.0 {
            PerformanceTier::Great
        } else if score >= 80.0 {
            PerformanceTier::Fair
        } else {
            PerformanceTier::Poor
        }
    }
}

/// Active drivers ranked by delivery score, then safety score
pub fn ranked_drivers(drivers: &[Driver]) -> Vec<(usize, &Driver, PerformanceTier)> {
    let mut rows: Vec<_> = drivers
        .iter()
        .filter(|d| d.status == DriverStatus::Active)
        .collect();
    rows.sort_by(|a, b| {
        b.delivery_score
            .total_cmp(&a.delivery_score)
            .then(b.safety_score.total_cmp(&a.safety_score))
    });
    rows.into_iter()
        .enumerate()
        .map(|(i, d)| (i + 1, d, PerformanceTier::for_score(d.delivery_score)))
        .collect()
}

pub fn filter_driver_alerts(alerts: &[DriverAlert], severity: Option<Severity>) -> Vec<&DriverAlert> {
    let mut rows: Vec<_> = alerts
        .iter()
        .filter(|a| matches_option(severity, a.severity))
        .collect();
    rows.sort_by(|a, b| b.severity.cmp(&a.severity).then(b.date.cmp(&a.date)));
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_driver_stats() {
        let stats = driver_stats(&data::drivers());
        assert_eq!(stats.total, 10);
        assert_eq!(stats.active, 7);
        assert_eq!(stats.onboarding, 1);
        assert!((stats.average_delivery_score - 651.6 / 7.0).abs() < 1e-9);
        assert_eq!(stats.pending_background_checks, 2);
    }

    #[test]
    fn test_status_filter_matches_stat_card() {
        let drivers = data::drivers();
        let stats = driver_stats(&drivers);
        let filter = DriverFilter {
            status: Some(DriverStatus::Active),
            ..Default::default()
        };
        assert_eq!(filter_drivers(&drivers, &filter).len(), stats.active);
    }

    #[test]
    fn test_search_by_name_or_email() {
        let drivers = data::drivers();
        let by_name = DriverFilter {
            search: "patel".into(),
            ..Default::default()
        };
        assert_eq!(filter_drivers(&drivers, &by_name)[0].id, "DRV-002");

        let by_email = DriverFilter {
            search: "emily.chen@".into(),
            ..Default::default()
        };
        assert_eq!(filter_drivers(&drivers, &by_email)[0].id, "DRV-004");
    }

    #[test]
    fn test_document_stats_against_reference_day() {
        let documents = data::documents();
        let today = data::today();
        let stats = document_stats(&documents, today);
        assert_eq!(stats.valid, 8);
        assert_eq!(stats.expiring_soon, 2);
        assert_eq!(stats.expired, 1);

        let expiring = DocumentFilter {
            status: Some(DocumentStatus::ExpiringSoon),
            doc_type: None,
        };
        let rows = filter_documents(&documents, &expiring, today);
        assert_eq!(rows.len(), stats.expiring_soon);
        assert_eq!(rows[0].id, "DOC-004");
    }

    #[test]
    fn test_training_stats() {
        let stats = training_stats(&data::training(), data::today());
        assert_eq!(stats.assigned, 8);
        assert_eq!(stats.completed, 3);
        assert_eq!(stats.overdue, 2);
        assert_eq!(stats.completion_rate, 37.5);
        assert_eq!(stats.average_score, 92.0);
    }

    #[test]
    fn test_ranking_and_tiers() {
        let drivers = data::drivers();
        let ranked = ranked_drivers(&drivers);
        assert_eq!(ranked.len(), 7);
        assert_eq!(ranked[0].0, 1);
        assert_eq!(ranked[0].1.id, "DRV-001");
        assert_eq!(ranked[0].2, PerformanceTier::Fantastic);
        assert_eq!(ranked.last().unwrap().2, PerformanceTier::Fair);

        assert_eq!(PerformanceTier::for_score(90.0), PerformanceTier::Great);
        assert_eq!(PerformanceTier::for_score(79.99), PerformanceTier::Poor);
    }
}
