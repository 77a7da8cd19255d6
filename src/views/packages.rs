use super::{matches_option, matches_search, sum};
use crate::models::*;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RtsFilter {
    pub search: String,
    pub reason: Option<RtsReason>,
    pub status: Option<RtsStatus>,
}

pub fn filter_rts<'a>(packages: &'a [RtsPackage], filter: &RtsFilter) -> Vec<&'a RtsPackage> {
    let mut rows: Vec<_> = packages
        .iter()
        .filter(|p| matches_option(filter.reason, p.reason))
        .filter(|p| matches_option(filter.status, p.status))
        .filter(|p| matches_search(&filter.search, &[p.tracking_id.as_str(), p.driver_id.as_str()]))
        .collect();
    rows.sort_by(|a, b| b.date.cmp(&a.date));
    rows
}

/// Count of RTS packages per reason, in reason order, omitting zero rows
pub fn rts_by_reason(packages: &[RtsPackage]) -> Vec<(RtsReason, usize)> {
    RtsReason::all()
        .iter()
        .map(|reason| (*reason, packages.iter().filter(|p| p.reason == *reason).count()))
        .filter(|(_, n)| *n > 0)
        .collect()
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RtsStats {
    pub total: usize,
    pub pending: usize,
    pub reattempts: usize,
    pub resolved: usize,
}

pub fn rts_stats(packages: &[RtsPackage]) -> RtsStats {
    let count = |status| packages.iter().filter(|p| p.status == status).count();

    RtsStats {
        total: packages.len(),
        pending: count(RtsStatus::Pending),
        reattempts: count(RtsStatus::Reattempt),
        resolved: count(RtsStatus::Resolved),
    }
}

pub fn filter_lost(packages: &[LostPackage], status: Option<LostStatus>) -> Vec<&LostPackage> {
    let mut rows: Vec<_> = packages
        .iter()
        .filter(|p| matches_option(status, p.status))
        .collect();
    rows.sort_by(|a, b| b.date.cmp(&a.date));
    rows
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LostStats {
    pub open_cases: usize,
    /// Value of packages not recovered
    pub value_at_risk: f64,
    pub recovered: usize,
}

pub fn lost_stats(packages: &[LostPackage]) -> LostStats {
    LostStats {
        open_cases: packages
            .iter()
            .filter(|p| p.status == LostStatus::Investigating)
            .count(),
        value_at_risk: sum(packages
            .iter()
            .filter(|p| p.status != LostStatus::Found)
            .map(|p| p.value)),
        recovered: packages
            .iter()
            .filter(|p| p.status == LostStatus::Found)
            .count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data;
    use crate::models::Labeled;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_reason_breakdown_sums_to_total() {
        let packages = data::rts_packages();
        let breakdown = rts_by_reason(&packages);
        let total: usize = breakdown.iter().map(|(_, n)| n).sum();
        assert_eq!(total, packages.len());
        assert_eq!(breakdown[0], (RtsReason::BusinessClosed, 2));

        for (reason, count) in breakdown {
            let filter = RtsFilter {
                reason: Some(reason),
                ..Default::default()
            };
            assert_eq!(filter_rts(&packages, &filter).len(), count, "{}", reason.label());
        }
    }

    #[test]
    fn test_rts_stats() {
        let stats = rts_stats(&data::rts_packages());
        assert_eq!(stats.pending, 2);
        assert_eq!(stats.reattempts, 2);
        assert_eq!(stats.resolved, 2);
    }

    #[test]
    fn test_lost_value_excludes_found() {
        let stats = lost_stats(&data::lost_packages());
        assert!((stats.value_at_risk - (129.99 + 349.0 + 58.75 + 17.99)).abs() < 1e-9);
        assert_eq!(stats.open_cases, 2);
        assert_eq!(stats.recovered, 1);
    }
}
